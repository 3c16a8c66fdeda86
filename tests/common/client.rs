use actix_web::{middleware::NormalizePath, web, App};
use std::sync::Arc;
use item_catalog::{
    db::{database_service::DatabaseService, item},
    types::item::NewItem,
};
use entity::item::Model as ItemModel;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(item_catalog::routes::configure_routes)
    }

    /// Inserts straight through the data access layer, bypassing HTTP.
    #[allow(dead_code)]
    pub async fn seed(&self, data: NewItem) -> ItemModel {
        item::create(self.db.connection(), data)
            .await
            .expect("Failed to seed item")
    }
}
