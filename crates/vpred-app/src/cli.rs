//! Command-line interface for the viral predictor.
//!
//! ## Commands
//! - `predict`: fill the form from flags (optionally starting from the
//!   prefill example), submit once and print the verdict
//! - `interactive`: line-oriented form session
//!
//! `--endpoint` and `--strict` override the environment configuration.

use clap::{Args, Parser, Subcommand};
use vpred_client::{ConfigOverrides, PredictionResult, PredictorConfig};
use vpred_models::FormField;

use crate::view::MODEL_INFO;

const ABOUT: &str = "Predict whether a YouTube video is likely to go viral";

#[derive(Parser, Debug)]
#[command(name = "vpred")]
#[command(author, version, about = ABOUT)]
#[command(long_about = format!("{}\n\n{}", ABOUT, MODEL_INFO))]
pub struct Cli {
    /// Prediction endpoint URL (overrides PREDICTOR_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Reject non-numeric input in numeric fields instead of sending null
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit one prediction built from flags
    Predict(PredictArgs),
    /// Edit the form interactively
    Interactive,
}

/// Field values for a one-shot prediction.
///
/// Values are kept as raw text; coercion happens on submit.
#[derive(Args, Debug, Default, Clone)]
pub struct PredictArgs {
    /// Start from the example video
    #[arg(long)]
    pub prefill: bool,

    #[arg(long, allow_hyphen_values = true)]
    pub likes: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub dislikes: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub comment_count: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Pipe-separated tags, e.g. "tech|review"
    #[arg(long)]
    pub tags: Option<String>,

    /// Publish hour, 0-23
    #[arg(long, allow_hyphen_values = true)]
    pub publish_hour: Option<String>,

    /// Publish day, 0 = Monday
    #[arg(long, allow_hyphen_values = true)]
    pub publish_day: Option<String>,
}

impl PredictArgs {
    /// Fields given on the command line, in form order.
    pub fn overrides(&self) -> Vec<(FormField, &str)> {
        let values = [
            (FormField::Likes, &self.likes),
            (FormField::Dislikes, &self.dislikes),
            (FormField::CommentCount, &self.comment_count),
            (FormField::Title, &self.title),
            (FormField::Description, &self.description),
            (FormField::Tags, &self.tags),
            (FormField::PublishHour, &self.publish_hour),
            (FormField::PublishDay, &self.publish_day),
        ];

        values
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
            .collect()
    }
}

impl Cli {
    /// Global flags that take precedence over the environment.
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            strict: self.strict,
        }
    }

    /// Load the environment config with the flags applied, then validate it.
    pub fn load_config(&self) -> PredictionResult<PredictorConfig> {
        let config = PredictorConfig::from_env_with(&self.config_overrides())?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serial_test::serial;
    use vpred_models::NumericPolicy;

    #[test]
    fn test_parse_predict_flags() {
        let cli = Cli::parse_from([
            "vpred",
            "predict",
            "--prefill",
            "--likes",
            "10",
            "--comment-count",
            "-1",
            "--tags",
            "a|b",
        ]);

        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert!(args.prefill);
        assert_eq!(
            args.overrides(),
            vec![
                (FormField::Likes, "10"),
                (FormField::CommentCount, "-1"),
                (FormField::Tags, "a|b"),
            ]
        );
    }

    #[test]
    fn test_global_flags_become_overrides() {
        let cli = Cli::parse_from([
            "vpred",
            "interactive",
            "--endpoint",
            "http://localhost:5000/predict",
            "--strict",
        ]);

        assert_eq!(
            cli.config_overrides(),
            ConfigOverrides {
                endpoint: Some("http://localhost:5000/predict".to_string()),
                strict: true,
            }
        );
    }

    #[test]
    fn test_no_flags_no_overrides() {
        let cli = Cli::parse_from(["vpred", "predict"]);
        assert_eq!(cli.config_overrides(), ConfigOverrides::default());
    }

    #[test]
    #[serial]
    fn test_flags_win_over_broken_env() {
        std::env::set_var("PREDICTOR_ENDPOINT", "");
        std::env::set_var("PREDICTOR_NUMERIC_POLICY", "bogus");

        let cli = Cli::parse_from([
            "vpred",
            "predict",
            "--endpoint",
            "http://localhost:5000/predict",
            "--strict",
        ]);
        let config = cli.load_config();

        std::env::remove_var("PREDICTOR_ENDPOINT");
        std::env::remove_var("PREDICTOR_NUMERIC_POLICY");

        let config = config.unwrap();
        assert_eq!(config.endpoint, "http://localhost:5000/predict");
        assert_eq!(config.numeric_policy, NumericPolicy::Strict);
    }

    #[test]
    #[serial]
    fn test_empty_env_endpoint_without_flag_is_rejected() {
        std::env::set_var("PREDICTOR_ENDPOINT", "");

        let cli = Cli::parse_from(["vpred", "interactive"]);
        let result = cli.load_config();

        std::env::remove_var("PREDICTOR_ENDPOINT");
        assert!(result.is_err());
    }

    #[test]
    fn test_long_help_describes_model() {
        let long_about = Cli::command()
            .get_long_about()
            .map(|about| about.to_string())
            .unwrap_or_default();
        assert!(long_about.contains("XGBoost"));
        assert!(long_about.contains("Flask API · React UI"));
    }
}
