use clap::Parser;
use std::process;
use subtally::cli::{Config, Runner};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .init();

    match Runner::new(config) {
        Ok(runner) => runner.run().await,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
