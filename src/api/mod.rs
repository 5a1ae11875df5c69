use utoipa_actix_web::service_config::ServiceConfig;

mod controllers;
mod dto;
mod middlewares;
mod view;

pub fn routes(cfg: &mut ServiceConfig) {
    controllers::account::routes(cfg);
}
