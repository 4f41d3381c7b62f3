use actix_web::web;

pub mod health;
pub mod members;

/// Register every handler.
///
/// There is deliberately no handler for the login path: `TokenAuthentication`
/// answers `POST /login/token` itself and never forwards it.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Member routes: /members/**
    cfg.service(web::scope("/members").configure(members::configure_routes));
}
