// Personality analysis endpoint: prompt assembly, Gemini call, fallback
// degradation. All model calls go through gemini — no direct API calls here.

pub mod fallback;
pub mod handlers;
pub mod prompts;
