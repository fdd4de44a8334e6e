//! Router module for handling all API routes

pub mod about;
pub mod auth;
pub mod contact;
pub mod contact_method;
pub mod experience;
pub mod project;
pub mod service;
pub mod skill;
pub mod social_link;

use actix_web::web;
use folio_models::web::ApiResponse;

/// Configure all routes mounted under the `/api` scope
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(auth::ROUTER_PREFIX).configure(auth::configure_routes))
        .service(web::scope(about::ROUTER_PREFIX).configure(about::configure_routes))
        .service(web::scope(project::ROUTER_PREFIX).configure(project::configure_routes))
        .service(web::scope(service::ROUTER_PREFIX).configure(service::configure_routes))
        .service(web::scope(skill::ROUTER_PREFIX).configure(skill::configure_routes))
        .service(web::scope(experience::ROUTER_PREFIX).configure(experience::configure_routes))
        .service(web::scope(contact::ROUTER_PREFIX).configure(contact::configure_routes))
        .service(
            web::scope(contact_method::ROUTER_PREFIX).configure(contact_method::configure_routes),
        )
        .service(web::scope(social_link::ROUTER_PREFIX).configure(social_link::configure_routes));
}

/// Configure public root routes (mounted outside the `/api` prefix)
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

/// Liveness line for uptime checks
async fn index() -> ApiResponse<()> {
    ApiResponse::ok_message("Portfolio backend is running")
}
