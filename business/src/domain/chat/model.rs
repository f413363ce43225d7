use crate::domain::product::model::Product;

/// Upper bound on accepted chat message length, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Help,
    Categories,
    Thanks,
    Goodbye,
    ProductSearch,
    Unknown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Greeting => write!(f, "greeting"),
            Intent::Help => write!(f, "help"),
            Intent::Categories => write!(f, "categories"),
            Intent::Thanks => write!(f, "thanks"),
            Intent::Goodbye => write!(f, "goodbye"),
            Intent::ProductSearch => write!(f, "product_search"),
            Intent::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub intent: Intent,
    pub reply: String,
    pub products: Vec<Product>,
    /// Follow-up prompts the client can offer as quick replies.
    pub suggestions: Vec<String>,
}

impl ChatReply {
    pub fn text(intent: Intent, reply: impl Into<String>, suggestions: &[&str]) -> Self {
        Self {
            intent,
            reply: reply.into(),
            products: Vec::new(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}
