use anyhow::Context;
use clap::Parser;
use divisible_sum_pairs::utils::{logger, validation::Validate};
use divisible_sum_pairs::{CliConfig, CountEngine, PairError};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    match run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Run failed: {:#}", e);
            eprintln!("error: {:#}", e);

            let exit_code = match e.downcast_ref::<PairError>() {
                Some(err) => {
                    eprintln!("hint: {}", err.recovery_suggestion());
                    err.exit_code()
                }
                None => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> anyhow::Result<String> {
    let settings = config
        .resolve()
        .context("failed to resolve run settings")?;

    let engine = CountEngine::new(settings.strategy);
    let report = engine.run(&settings.input)?;

    Ok(report.render(settings.format)?)
}
