//! Keyword/substring rule table classifier

use recruitbot_domain::Intent;

use super::IntentClassifier;

/// How a rule inspects the normalized (trimmed, lowercased) message
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// The whole message equals one of the phrases
    Exact(&'static [&'static str]),
    /// The message contains one of the phrases
    Contains(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::Exact(phrases) => phrases.iter().any(|phrase| normalized == *phrase),
            Self::Contains(phrases) => phrases.iter().any(|phrase| normalized.contains(phrase)),
        }
    }
}

const RU_GREETINGS: &[&str] = &["здравствуйте", "добрый день", "приветствую"];

const RU_SMALL_TALK: &[&str] = &["как дела"];

const RU_FAREWELLS: &[&str] = &["до свидания", "всего доброго"];

const RU_SCHEDULING: &[&str] = &[
    "созвониться",
    "встретиться",
    "интервью",
    "собеседование",
    "удобно",
    "время",
    "слот",
    "календарь",
    "обсудить голосом",
];

/// An ordered rule table; earlier rules take precedence
pub struct RuleSet {
    rules: Vec<(Matcher, Intent)>,
}

impl RuleSet {
    /// The default Russian phrase set.
    ///
    /// Precedence: greeting > small talk > farewell > scheduling. Anything
    /// unmatched falls through to [`Intent::General`].
    pub fn russian() -> Self {
        Self {
            rules: vec![
                (Matcher::Exact(RU_GREETINGS), Intent::Greeting),
                (Matcher::Contains(RU_SMALL_TALK), Intent::SmallTalk),
                (Matcher::Contains(RU_FAREWELLS), Intent::Farewell),
                (Matcher::Contains(RU_SCHEDULING), Intent::SchedulingRequest),
            ],
        }
    }
}

/// Rule-table classifier over keyword/substring matches
pub struct KeywordClassifier {
    rules: RuleSet,
}

impl KeywordClassifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(RuleSet::russian())
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, message: &str) -> Intent {
        let normalized = message.trim().to_lowercase();
        self.rules
            .rules
            .iter()
            .find(|(matcher, _)| matcher.matches(&normalized))
            .map(|(_, intent)| *intent)
            .unwrap_or(Intent::General)
    }
}
