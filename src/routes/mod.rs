use crate::utils::webutils::{json_config, path_config, query_config};
use actix_web::web;

pub mod health;
pub mod item;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config());

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/items")
            .service(item::create::create)
            .service(item::list::list)
            .service(item::read::read)
            .service(item::update::replace)
            .service(item::update::patch)
            .service(item::delete::delete)
    );
}
