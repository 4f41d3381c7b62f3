use actix_web::{App, HttpServer};
use auth_gate::config::AppConfig;
use auth_gate::middleware::{RequestTrace, StructuredLogger, TokenAuthentication, TraceSpan};
use auth_gate::routes;
use auth_gate::state::build_state;
use auth_gate::telemetry;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from AUTH_GATE_* environment variables.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    let host = config.server.host.clone();
    let port = config.server.port;
    info!(
        host = %host,
        port,
        login_path = %config.interceptor.login_path,
        "Starting auth-gate"
    );

    let interceptor = app_state.interceptor;

    HttpServer::new(move || {
        App::new()
            .wrap(TokenAuthentication::new(interceptor.clone()))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
