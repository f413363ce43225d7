use crate::domain::search::parser::parse_query;

use super::model::Intent;

const SHOPPING_VERBS: &[&str] = &[
    "show", "find", "looking", "look", "need", "want", "buy", "search", "searching",
    "recommend", "suggest", "shop", "shopping",
];
const GREETINGS: &[&str] = &["hi", "hello", "hey", "hiya", "howdy", "greetings", "namaste", "yo"];
const GREETING_PHRASES: &[&str] = &["good morning", "good afternoon", "good evening"];
const HELP: &[&str] = &["help", "assist", "assistance", "support", "guide"];
const HELP_PHRASES: &[&str] = &["what can you do", "how does this work", "how do i"];
const CATEGORIES: &[&str] = &["categories", "category", "collections", "collection", "departments"];
const CATEGORY_PHRASES: &[&str] = &["what do you sell", "what do you have", "what do you carry"];
const THANKS: &[&str] = &["thanks", "thank", "thx", "ty", "appreciate", "appreciated"];
const GOODBYES: &[&str] = &["bye", "goodbye", "cya", "farewell"];
const GOODBYE_PHRASES: &[&str] = &["see you", "see ya", "good night", "take care"];

fn tokenize(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .replace(['\'', '’'], "")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

struct Tokens {
    words: Vec<String>,
    /// Space-joined and space-padded, for phrase lookups on word boundaries.
    padded: String,
}

impl Tokens {
    fn new(message: &str) -> Self {
        let words = tokenize(message);
        let padded = format!(" {} ", words.join(" "));
        Self { words, padded }
    }

    fn any_word(&self, set: &[&str]) -> bool {
        self.words.iter().any(|w| set.contains(&w.as_str()))
    }

    fn any_phrase(&self, phrases: &[&str]) -> bool {
        phrases
            .iter()
            .any(|p| self.padded.contains(&format!(" {} ", p)))
    }
}

/// Rule-based intent detection.
///
/// Anything that names a product attribute is a product search, even when it
/// also greets. A bare shopping verb only wins when no category listing is asked for.
pub fn classify(message: &str) -> Intent {
    let tokens = Tokens::new(message);
    if tokens.words.is_empty() {
        return Intent::Unknown;
    }

    if parse_query(message).has_structured_terms() {
        return Intent::ProductSearch;
    }
    if tokens.any_word(CATEGORIES) || tokens.any_phrase(CATEGORY_PHRASES) {
        return Intent::Categories;
    }
    if tokens.any_word(SHOPPING_VERBS) {
        return Intent::ProductSearch;
    }
    if tokens.any_word(HELP) || tokens.any_phrase(HELP_PHRASES) {
        return Intent::Help;
    }
    if tokens.any_word(THANKS) {
        return Intent::Thanks;
    }
    if tokens.any_word(GOODBYES) || tokens.any_phrase(GOODBYE_PHRASES) {
        return Intent::Goodbye;
    }
    if tokens.any_word(GREETINGS) || tokens.any_phrase(GREETING_PHRASES) {
        return Intent::Greeting;
    }
    Intent::Unknown
}
