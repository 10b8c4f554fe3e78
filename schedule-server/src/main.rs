use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use schedule_server::config::ServerConfig;
use schedule_server::demand::{PassengerSource, RandomPassengers, load_demand_csv};
use schedule_server::scheduler::SchedulerConfig;
use schedule_server::session::Session;
use schedule_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("schedule_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let source: Box<dyn PassengerSource + Send> = match config.seed {
        Some(seed) => Box::new(RandomPassengers::seeded(seed)),
        None => Box::new(RandomPassengers::from_entropy()),
    };
    let mut session = Session::new(SchedulerConfig::default(), source);

    // Preload demand so the first run needs no upload
    if let Some(path) = &config.demand_csv {
        match load_demand_csv(path) {
            Ok(records) => {
                session.upload(records);
            }
            Err(e) => {
                error!(path = %path.display(), "failed to load demand: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let state = AppState::new(session, config.processing_delay);
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Platform scheduler listening on http://{}", config.addr);
    info!("API endpoints:");
    info!("  GET  /health    - Health check");
    info!("  POST /demand    - Upload demand CSV");
    info!("  POST /schedule  - Generate a schedule (Greedy or DP)");
    info!("  GET  /schedule  - Filter the last schedule (?q=&route=)");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
