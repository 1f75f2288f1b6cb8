//! HTTP inbound adapters: the JSON habit API, the htmx pages and the health
//! probes.

pub mod error;
pub mod habits;
pub mod health;
pub mod pages;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::web;

pub use error::{ApiResult, PageError, PageResult};

/// Register every habit route, both surfaces, plus extractor configuration.
///
/// Expects [`state::HttpState`] to be registered as app data by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::form_config())
        .service(
            web::scope("/api")
                .service(habits::list_habits)
                .service(habits::get_habit)
                .service(habits::create_habit)
                .service(habits::update_habit)
                .service(habits::delete_habit),
        )
        .service(pages::show_index)
        .service(pages::submit_habit)
        .service(pages::edit_habit)
        .service(pages::save_habit)
        .service(pages::remove_habit);
}
