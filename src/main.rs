use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use landmatch::config::{LoggingSettings, Settings};
use landmatch::core::Matcher;
use landmatch::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use landmatch::services::SeedData;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);
    info!("Starting Landmatch service...");

    let weights = settings.scoring_weights();
    if (weights.sum() - 1.0).abs() > 1e-6 {
        warn!("Scoring weights sum to {:.3}, scores may exceed 100", weights.sum());
    }
    let matcher = Matcher::new(weights);
    info!("Matcher initialized with weights: {:?}", weights);

    let (farmers, lands) = match &settings.storage.seed_path {
        Some(path) => {
            let seeded = SeedData::load(path).and_then(SeedData::normalize);
            match seeded {
                Ok(records) => {
                    info!(
                        "Seeded {} farmers and {} lands from {}",
                        records.0.len(),
                        records.1.len(),
                        path.display()
                    );
                    records
                }
                Err(e) => {
                    error!("Failed to load seed data from {}: {}", path.display(), e);
                    return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
                }
            }
        }
        None => {
            info!("No seed data configured, starting with empty storage");
            (Vec::new(), Vec::new())
        }
    };

    let app_state = AppState::in_memory(farmers, lands, matcher, settings.matching.clone());

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
