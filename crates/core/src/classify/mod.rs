//! Intent classification for inbound recruiter messages
//!
//! Classification is deterministic and stateless: an ordered table of
//! (matcher, intent) rules evaluated first-match-wins. The table is
//! pluggable behind [`IntentClassifier`] so phrase sets can be swapped per
//! language without touching orchestration.

mod keyword;

pub use keyword::{KeywordClassifier, RuleSet};
use recruitbot_domain::Intent;

/// Capability: map free-form message text to an [`Intent`]
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, message: &str) -> Intent;
}
