//! Keyword response resolution.
//!
//! Rules are scanned in order and the first one with a trigger keyword found
//! anywhere in the case-folded input wins. When nothing matches, a response is
//! drawn uniformly from the fallback pool using the caller's RNG.

use comeback_core::RuleEntry;
use rand::Rng;
use tracing::debug;

use crate::error::{Result, RuleError};

/// Where a resolved response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Matched the rule at `index`
    Rule {
        /// Position of the matching rule
        index: usize,
        /// Its response
        response: &'a str,
    },
    /// No rule matched; drawn from the fallback pool
    Fallback {
        /// Chosen fallback response
        response: &'a str,
    },
}

impl<'a> Resolution<'a> {
    /// The response text.
    pub fn response(&self) -> &'a str {
        match *self {
            Resolution::Rule { response, .. } | Resolution::Fallback { response } => response,
        }
    }

    /// Whether a rule matched.
    pub fn is_rule(&self) -> bool {
        matches!(self, Resolution::Rule { .. })
    }
}

/// Ordered keyword rules with a fallback pool.
#[derive(Debug, Clone)]
pub struct KeywordResolver {
    rules: Vec<RuleEntry>,
    fallback: Vec<String>,
}

impl KeywordResolver {
    /// Build a resolver.
    ///
    /// Trigger keywords are case-folded here and otherwise kept verbatim,
    /// surrounding spaces included; empty keywords are dropped. A rule left
    /// without keywords, or an empty fallback pool, is rejected.
    pub fn new(rules: Vec<RuleEntry>, fallback: Vec<String>) -> Result<Self> {
        if fallback.is_empty() {
            return Err(RuleError::EmptyFallback);
        }

        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| {
                let triggers: Vec<String> = rule
                    .triggers
                    .iter()
                    .map(|t| t.to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect();
                if triggers.is_empty() {
                    return Err(RuleError::EmptyTriggers { index });
                }
                Ok(RuleEntry {
                    triggers,
                    response: rule.response,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules, fallback })
    }

    /// The normalized rules, in match order.
    pub fn rules(&self) -> &[RuleEntry] {
        &self.rules
    }

    /// The fallback pool.
    pub fn fallback(&self) -> &[String] {
        &self.fallback
    }

    /// Index of the first rule matching `input`, if any.
    pub fn matching_rule(&self, input: &str) -> Option<usize> {
        let normalized = input.to_lowercase();
        self.rules.iter().position(|rule| {
            rule.triggers
                .iter()
                .any(|keyword| normalized.contains(keyword.as_str()))
        })
    }

    /// Resolve `input` and report where the response came from.
    pub fn resolve_detailed<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Resolution<'_> {
        if let Some(index) = self.matching_rule(input) {
            debug!("Input matched rule {}", index);
            return Resolution::Rule {
                index,
                response: &self.rules[index].response,
            };
        }

        let pick = rng.gen_range(0..self.fallback.len());
        debug!("No rule matched, using fallback {}", pick);
        Resolution::Fallback {
            response: &self.fallback[pick],
        }
    }

    /// Resolve `input` to a response.
    pub fn resolve<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> &str {
        self.resolve_detailed(input, rng).response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn resolver() -> KeywordResolver {
        KeywordResolver::new(
            vec![
                RuleEntry::new(["text her", "call her"], "STOP..."),
                RuleEntry::new(["sad", "depressed"], "Feeling down..."),
            ],
            vec!["one".to_string(), "two".to_string(), "three".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let resolver = resolver();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(resolver.resolve("I want to call her now", &mut rng), "STOP...");
        // Both rules match; order decides.
        assert_eq!(resolver.resolve("so sad I want to text her", &mut rng), "STOP...");
    }

    #[test]
    fn test_matching_ignores_case() {
        let resolver = resolver();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(resolver.resolve("I'm SO DEPRESSED", &mut rng), "Feeling down...");
        assert_eq!(resolver.resolve("Call Her?", &mut rng), "STOP...");
    }

    #[test]
    fn test_mixed_case_keywords_are_folded() {
        let resolver = KeywordResolver::new(
            vec![RuleEntry::new(["Instagram"], "Log off.")],
            vec!["fallback".to_string()],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(resolver.resolve("checked her instagram", &mut rng), "Log off.");
    }

    #[test]
    fn test_unmatched_input_draws_from_fallback() {
        let resolver = resolver();
        let mut rng = StdRng::seed_from_u64(42);
        for input in ["hello", "what's up", "", "tell me something"] {
            let resolution = resolver.resolve_detailed(input, &mut rng);
            assert!(!resolution.is_rule());
            assert!(resolver.fallback().iter().any(|f| f == resolution.response()));
        }
    }

    #[test]
    fn test_seeded_rng_pins_fallback_choice() {
        let resolver = resolver();
        let first = resolver.resolve("hello", &mut StdRng::seed_from_u64(9)).to_string();
        let second = resolver.resolve("hello", &mut StdRng::seed_from_u64(9)).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rule_index_is_reported() {
        let resolver = resolver();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            resolver.resolve_detailed("feeling sad", &mut rng),
            Resolution::Rule {
                index: 1,
                response: "Feeling down..."
            }
        );
    }

    #[test]
    fn test_keyword_spaces_are_kept() {
        let resolver = KeywordResolver::new(
            vec![RuleEntry::new([" Down "], "Feeling down...")],
            vec!["fallback".to_string()],
        )
        .unwrap();
        assert_eq!(resolver.rules()[0].triggers, vec![" down ".to_string()]);
        assert_eq!(resolver.matching_rule("I feel down today"), Some(0));
        assert_eq!(resolver.matching_rule("download finished"), None);
    }

    #[test]
    fn test_empty_fallback_rejected() {
        let err = KeywordResolver::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, RuleError::EmptyFallback);
    }

    #[test]
    fn test_empty_triggers_rejected() {
        let err = KeywordResolver::new(
            vec![
                RuleEntry::new(["gym"], "Go lift."),
                RuleEntry::new(["", ""], "never"),
            ],
            vec!["x".to_string()],
        )
        .unwrap_err();
        assert_eq!(err, RuleError::EmptyTriggers { index: 1 });
    }
}
