//! Prompt construction for the personality analysis endpoint.

/// Analysis prompt template. Replace `{dino_id}` and `{tags_json}` before
/// sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a chaotic, funny dinosaur personality analyzer.
The user got the result: {dino_id}.
Their quiz tags were: {tags_json}.

Generate a short, spicy, and humorous personality description (max 3 sentences) for them based on this result.
Roast them a little bit but keep it fun.
Don't mention the tags explicitly, just use them to flavor the text."#;

/// Builds the analysis prompt, embedding the literal result id and the
/// literal JSON serialization of the raw tags value.
pub fn build_analysis_prompt(dino_id: &str, tags: &serde_json::Value) -> String {
    // Value-to-string serialization cannot fail for JSON trees, but the
    // handler must never panic on caller input.
    let tags_json = serde_json::to_string(tags).unwrap_or_else(|_| "null".to_string());
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{dino_id}", dino_id)
        .replace("{tags_json}", &tags_json)
}
