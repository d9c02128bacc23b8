use clap::error::ErrorKind;
use clap::Parser;
use dsvdoc::utils::{logger, validation::Validate};
use dsvdoc::{CliConfig, DocPipeline, Engine, LocalStorage};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(_) => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
            eprintln!("usage: {} <dsv-file>", program);
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let pipeline = DocPipeline::new(storage, config);
    let engine = Engine::new(pipeline);

    match engine.run() {
        Ok(destination) => {
            tracing::debug!("done, output written to {}", destination);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
