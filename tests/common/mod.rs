use std::sync::Arc;
use item_catalog::config::DatabaseConfig;
use item_catalog::db::database_service::DatabaseService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Every context gets its own private in-memory database.
    pub async fn new() -> TestContext {
        let db = Arc::new(
            DatabaseService::new(&DatabaseConfig::in_memory())
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use item_catalog::types::item::NewItem;

    pub fn sample_item() -> NewItem {
        NewItem {
            name: "Test Widget".to_string(),
            description: Some("A test widget for demo".to_string()),
            price: Some(29.99),
            is_active: true,
        }
    }

    pub fn named(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            description: None,
            price: None,
            is_active: true,
        }
    }

    pub fn named_with_state(name: &str, is_active: bool) -> NewItem {
        NewItem { is_active, ..named(name) }
    }
}
