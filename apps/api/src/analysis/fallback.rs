//! Canned roast fallbacks served when the Gemini call fails.
//!
//! The analyze endpoint never surfaces generation errors to the caller; it
//! degrades to one of these strings so the quiz flow keeps working.

use rand::Rng;

/// Appended to every fallback roast so clients can tell degraded responses
/// apart from generated ones.
pub const FALLBACK_SUFFIX: &str = " (Fallback Mode)";

/// Fixed fallback roasts, selected from uniformly at random per failed call.
pub const FALLBACK_ROASTS: [&str; 5] = [
    "AI is taking a nap, but here's the truth: You have main character energy, but the chaotic kind that stresses everyone else out.",
    "My servers are busy, but I know your type. You probably claim to be social but cancel plans 5 minutes before they start.",
    "The AI is pleading the fifth. Let's just say you're a complex individual with a very specific set of prehistoric issues.",
    "Error: Personality too spicy for the cloud. You're definitely the one who starts the drama and then watches from the sidelines eating popcorn.",
    "System overloaded by your sheer awesomeness (or stubbornness). You're the friend who says 'I know a shortcut' and gets everyone lost.",
];

/// Picks which fallback roast to serve.
///
/// Carried in `AppState` as `Arc<dyn FallbackSelector>` so tests can pin the
/// selection while production stays uniform random.
pub trait FallbackSelector: Send + Sync {
    /// Returns an index in `0..len`. Callers pass `len >= 1`.
    fn pick(&self, len: usize) -> usize;
}

/// Production selector: uniform random choice.
pub struct RandomFallbackSelector;

impl FallbackSelector for RandomFallbackSelector {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Returns the selected fallback roast with the suffix applied.
pub fn fallback_analysis(selector: &dyn FallbackSelector) -> String {
    let index = selector.pick(FALLBACK_ROASTS.len());
    format!("{}{}", FALLBACK_ROASTS[index], FALLBACK_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSelector(usize);

    impl FallbackSelector for FixedSelector {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_fallback_uses_selected_index() {
        for (i, roast) in FALLBACK_ROASTS.iter().enumerate() {
            let analysis = fallback_analysis(&FixedSelector(i));
            assert_eq!(analysis, format!("{roast}{FALLBACK_SUFFIX}"));
        }
    }

    #[test]
    fn test_fallback_always_carries_suffix() {
        let analysis = fallback_analysis(&FixedSelector(0));
        assert!(analysis.ends_with(" (Fallback Mode)"));
    }

    #[test]
    fn test_random_selector_stays_in_range() {
        let selector = RandomFallbackSelector;
        for _ in 0..100 {
            assert!(selector.pick(FALLBACK_ROASTS.len()) < FALLBACK_ROASTS.len());
        }
    }
}
