use crate::config::Config;
use crate::gateway::HttpGateway;
use crate::router::{handle, AppState};
use astra::{Request, Server};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod gateway;
mod paths;
mod responses;
mod router;
mod templates;
mod views;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Settings from env / .env
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ The one place that talks to the listings service
    let gateway = match HttpGateway::new(cfg.api_base_url.clone(), cfg.api_timeout) {
        Ok(gw) => gw,
        Err(e) => {
            error!("could not build listings client: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        gateway: Arc::new(gateway),
        page_size: cfg.page_size,
    };

    // 3️⃣ Start the server
    info!(
        addr = %cfg.bind_addr,
        api = %cfg.api_base_url,
        workers = cfg.max_workers,
        "starting server"
    );

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req: Request, _info| {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => responses::html_error_response(err),
        };

        info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed = ?start.elapsed(),
            "request"
        );
        resp
    });

    match result {
        Ok(()) => info!("server shut down cleanly"),
        Err(e) => error!("server ended with error: {e}"),
    }
}
