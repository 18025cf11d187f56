use crate::catalog::Catalog;
use crate::config::Config;
use crate::router::handle;
use astra::{Request, Server};
use log::{error, info, warn};

mod catalog;
mod config;
mod domain;
mod errors;
mod loader;
mod logger;
mod responses;
mod router;
mod templates;


fn main() {
    // 1️⃣ Read settings
    let dotenv = config::load_dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logger::initialize(config.log_level, config.log_dir.as_deref()) {
        eprintln!("❌ Logger initialization failed: {e}");
        std::process::exit(1);
    }

    match dotenv {
        Ok(Some(path)) => info!("Loaded .env from {}", path.display()),
        Ok(None) => {}
        Err(e) => warn!("Ignoring .env: {e}"),
    }

    // 2️⃣ Load the listings once; a failure leaves the page empty
    let catalog = Catalog::from_load(loader::load_listings(
        &config.listings,
        config.fetch_timeout,
    ));

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.addr);

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &catalog) {
            Ok(resp) => resp,
            Err(err) => responses::error_to_response(err),
        };

        info!("{method} {path} -> {}", resp.status().as_u16());
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
