use clap::Parser;
use liga_table::utils::{logger, validation::Validate};
use liga_table::{CliConfig, LeaguePipeline, LocalStorage, ScrapeEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting liga-table");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = LeaguePipeline::new(storage, config);
    let engine = ScrapeEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("Standings written to {}", output_path);
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
