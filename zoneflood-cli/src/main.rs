//! zoneflood entry point.

use std::process::ExitCode;

use clap::Parser;

use zoneflood_cli::cli::Options;
use zoneflood_directory::RestZoneDirectory;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Options::parse();

    let directory = match &opts.endpoint {
        Some(endpoint) => RestZoneDirectory::with_endpoint(opts.api_token.clone(), endpoint.clone()),
        None => RestZoneDirectory::new(opts.api_token.clone(), &opts.region),
    };

    match zoneflood_cli::run(&opts, &directory).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_expected() {
                log::warn!("{err}");
            } else {
                log::error!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}
