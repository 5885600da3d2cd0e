//! `vpred` binary: predict virality from the command line.

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

use vpred_app::cli::{Cli, Command, PredictArgs};
use vpred_app::logging::init_tracing;
use vpred_app::session::run_session;
use vpred_app::{ConsoleNotifier, FormController, SubmitOutcome};
use vpred_client::{HttpPredictionClient, PredictionClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid predictor configuration: {}", e);
            return Err(e.into());
        }
    };
    info!(endpoint = %config.endpoint, policy = %config.numeric_policy, "Predictor configured");

    let client = HttpPredictionClient::new(&config)?;
    let mut controller =
        FormController::new(client, ConsoleNotifier).with_policy(config.numeric_policy);

    match &cli.command {
        Command::Predict(args) => {
            if !predict_once(&mut controller, args).await {
                std::process::exit(1);
            }
        }
        Command::Interactive => {
            let input = BufReader::new(tokio::io::stdin());
            run_session(&mut controller, input, &mut std::io::stdout()).await?;
        }
    }

    Ok(())
}

/// Fill the form from flags and submit once. Returns whether a verdict was obtained.
async fn predict_once<C>(
    controller: &mut FormController<C, ConsoleNotifier>,
    args: &PredictArgs,
) -> bool
where
    C: PredictionClient,
{
    if args.prefill {
        controller.prefill();
    }
    for (field, value) in args.overrides() {
        controller.update_field(field, value);
    }

    match controller.submit().await {
        SubmitOutcome::Predicted(verdict) => {
            println!("{}", verdict.badge());
            true
        }
        SubmitOutcome::Rejected { .. } | SubmitOutcome::Failed => false,
    }
}
