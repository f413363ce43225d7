use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::intent::classify;
use crate::domain::chat::model::{ChatReply, Intent, MAX_MESSAGE_LENGTH};
use crate::domain::chat::replies;
use crate::domain::chat::use_cases::respond::{ChatParams, ChatUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::use_cases::list_categories::ListCategoriesUseCase;
use crate::domain::product::use_cases::search::{
    ResultSource, SearchOverrides, SearchProductsParams, SearchProductsUseCase,
};
use crate::domain::shared::value_objects::Page;

/// Products shown per chat answer.
const CHAT_RESULT_LIMIT: u32 = 6;

pub struct ChatUseCaseImpl {
    pub search: Arc<dyn SearchProductsUseCase>,
    pub categories: Arc<dyn ListCategoriesUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl ChatUseCaseImpl {
    async fn answer_categories(&self) -> Result<ChatReply, ChatError> {
        let categories = self.categories.execute().await?;
        if categories.is_empty() {
            return Ok(ChatReply::text(
                Intent::Categories,
                replies::NO_CATEGORIES,
                &[],
            ));
        }

        let mut reply = ChatReply::text(Intent::Categories, replies::categories(&categories), &[]);
        reply.suggestions = categories
            .iter()
            .take(3)
            .map(|c| format!("Show me {}", c.name.to_lowercase()))
            .collect();
        Ok(reply)
    }

    async fn answer_search(&self, message: &str) -> Result<ChatReply, ChatError> {
        let result = self
            .search
            .execute(SearchProductsParams {
                query: Some(message.to_string()),
                overrides: SearchOverrides::default(),
                page: Page::new(Some(CHAT_RESULT_LIMIT), None),
            })
            .await?;

        if result.products.is_empty() {
            return Ok(ChatReply::text(
                Intent::ProductSearch,
                replies::not_found(&result.filter),
                replies::STARTER_SUGGESTIONS,
            ));
        }

        let from_marketplace = result.source != ResultSource::Catalog;
        Ok(ChatReply {
            intent: Intent::ProductSearch,
            reply: replies::found(result.products.len(), &result.filter, from_marketplace),
            products: result.products,
            suggestions: Vec::new(),
        })
    }
}

#[async_trait]
impl ChatUseCase for ChatUseCaseImpl {
    async fn execute(&self, params: ChatParams) -> Result<ChatReply, ChatError> {
        let message = params.message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(ChatError::MessageTooLong);
        }

        let intent = classify(message);
        self.logger
            .info(&format!("Chat message classified as {}", intent));

        match intent {
            Intent::Greeting => Ok(ChatReply::text(
                intent,
                replies::GREETING,
                replies::STARTER_SUGGESTIONS,
            )),
            Intent::Help => Ok(ChatReply::text(
                intent,
                replies::HELP,
                replies::STARTER_SUGGESTIONS,
            )),
            Intent::Thanks => Ok(ChatReply::text(intent, replies::THANKS, &[])),
            Intent::Goodbye => Ok(ChatReply::text(intent, replies::GOODBYE, &[])),
            Intent::Unknown => Ok(ChatReply::text(
                intent,
                replies::UNKNOWN,
                replies::STARTER_SUGGESTIONS,
            )),
            Intent::Categories => self.answer_categories().await,
            Intent::ProductSearch => self.answer_search(message).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::errors::ProductError;
    use crate::domain::product::model::CategorySummary;
    use crate::domain::product::model::fixtures::product;
    use crate::domain::product::use_cases::search::SearchResult;
    use crate::domain::search::parser::parse_query;
    use mockall::mock;

    mock! {
        pub Search {}

        #[async_trait]
        impl SearchProductsUseCase for Search {
            async fn execute(&self, params: SearchProductsParams) -> Result<SearchResult, ProductError>;
        }
    }

    mock! {
        pub Categories {}

        #[async_trait]
        impl ListCategoriesUseCase for Categories {
            async fn execute(&self) -> Result<Vec<CategorySummary>, ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(search: MockSearch, categories: MockCategories) -> ChatUseCaseImpl {
        ChatUseCaseImpl {
            search: Arc::new(search),
            categories: Arc::new(categories),
            logger: mock_logger(),
        }
    }

    fn chat(message: &str) -> ChatParams {
        ChatParams {
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn should_answer_greeting_without_searching() {
        let mut search = MockSearch::new();
        search.expect_execute().never();

        let reply = use_case(search, MockCategories::new())
            .execute(chat("Hello there"))
            .await
            .unwrap();

        assert_eq!(reply.intent, Intent::Greeting);
        assert!(reply.products.is_empty());
        assert!(!reply.suggestions.is_empty());
    }

    #[tokio::test]
    async fn should_search_and_summarize_results() {
        let mut search = MockSearch::new();
        search
            .expect_execute()
            .withf(|params| {
                params.query.as_deref() == Some("red dresses for women under 50")
                    && params.page.limit == CHAT_RESULT_LIMIT
            })
            .returning(|params| {
                Ok(SearchResult {
                    products: vec![
                        product("Wrap Dress", 39.0, 2),
                        product("Slip Dress", 45.0, 1),
                        product("Midi Dress", 49.0, 5),
                    ],
                    filter: parse_query(params.query.as_deref().unwrap_or_default()),
                    source: ResultSource::Catalog,
                })
            });

        let reply = use_case(search, MockCategories::new())
            .execute(chat("  red dresses for women under 50 "))
            .await
            .unwrap();

        assert_eq!(reply.intent, Intent::ProductSearch);
        assert_eq!(reply.products.len(), 3);
        assert_eq!(reply.reply, "Here are 3 red dresses for women under 50.");
    }

    #[tokio::test]
    async fn should_explain_when_nothing_matches() {
        let mut search = MockSearch::new();
        search.expect_execute().returning(|params| {
            Ok(SearchResult {
                products: vec![],
                filter: parse_query(params.query.as_deref().unwrap_or_default()),
                source: ResultSource::Catalog,
            })
        });

        let reply = use_case(search, MockCategories::new())
            .execute(chat("gold sneakers"))
            .await
            .unwrap();

        assert!(reply.reply.starts_with("Sorry, I couldn't find any gold shoes"));
        assert!(!reply.suggestions.is_empty());
    }

    #[tokio::test]
    async fn should_list_categories() {
        let mut categories = MockCategories::new();
        categories.expect_execute().returning(|| {
            Ok(vec![
                CategorySummary {
                    name: "Dresses".to_string(),
                    product_count: 8,
                },
                CategorySummary {
                    name: "Shoes".to_string(),
                    product_count: 3,
                },
            ])
        });

        let reply = use_case(MockSearch::new(), categories)
            .execute(chat("what categories do you have?"))
            .await
            .unwrap();

        assert_eq!(reply.intent, Intent::Categories);
        assert_eq!(reply.reply, "We currently carry: Dresses (8), Shoes (3).");
        assert_eq!(reply.suggestions, vec!["Show me dresses", "Show me shoes"]);
    }

    #[tokio::test]
    async fn should_reject_empty_and_oversized_messages() {
        let chat_use_case = use_case(MockSearch::new(), MockCategories::new());

        assert!(matches!(
            chat_use_case.execute(chat("   ")).await,
            Err(ChatError::EmptyMessage)
        ));
        assert!(matches!(
            chat_use_case
                .execute(chat(&"a".repeat(MAX_MESSAGE_LENGTH + 1)))
                .await,
            Err(ChatError::MessageTooLong)
        ));
    }

    #[tokio::test]
    async fn should_propagate_search_failure() {
        let mut search = MockSearch::new();
        search
            .expect_execute()
            .returning(|_| Err(ProductError::Repository(RepositoryError::DatabaseError)));

        let result = use_case(search, MockCategories::new())
            .execute(chat("find me a blazer"))
            .await;

        assert!(matches!(result, Err(ChatError::Product(_))));
    }
}
