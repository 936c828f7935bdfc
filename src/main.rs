use crate::config::Config;
use crate::loader::HttpListingSource;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use log::{error, info};

mod config;
mod domain;
mod errors;
mod loader;
mod responses;
mod router;
mod templates;


fn main() {
    // 1️⃣ Environment and logging
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Listings feed client
    let source = match HttpListingSource::new(config.listings_url.as_str()) {
        Ok(source) => source,
        Err(e) => {
            error!("❌ Listings client initialization failed: {e}");
            std::process::exit(1);
        }
    };
    info!("Reading listings from {}", source.url());

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing the source into the closure
    let result = server.serve(move |req, _info| match handle(req, &source) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
