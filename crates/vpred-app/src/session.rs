//! Interactive form session.
//!
//! Reads one command per line and drives a [`FormController`]:
//!
//! ```text
//! set <field> <value>   replace a field (value may be empty)
//! prefill               fill the form with the example video
//! show                  print the form and the current result
//! submit                send the form for prediction
//! fields                list field names
//! help                  list commands
//! quit                  leave the session
//! ```

use std::io::Write;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;
use vpred_client::PredictionClient;
use vpred_models::{FormField, ModelError};

use crate::controller::{FormController, SubmitOutcome};
use crate::notifier::Notifier;
use crate::view::{render_badge, render_field_list, render_form, MODEL_INFO};

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  set <field> <value>   replace a field (value may be empty)
  prefill               fill the form with the example video
  show                  print the form and the current result
  submit                send the form for prediction
  fields                list field names
  help                  list commands
  quit                  leave the session
";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set { field: FormField, value: String },
    Prefill,
    Show,
    Submit,
    Fields,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type `help` for commands.")]
    Unknown(String),

    #[error("Usage: set <field> <value>")]
    MissingField,

    #[error(transparent)]
    Field(#[from] ModelError),
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim_start()))
            .unwrap_or((line, ""));

        match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let (name, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(name, value)| (name, value.trim()))
                    .unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err(CommandError::MissingField);
                }
                Ok(SessionCommand::Set {
                    field: name.parse()?,
                    value: value.to_string(),
                })
            }
            "prefill" => Ok(SessionCommand::Prefill),
            "show" => Ok(SessionCommand::Show),
            "submit" => Ok(SessionCommand::Submit),
            "fields" => Ok(SessionCommand::Fields),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

fn write_form<C, N, W>(controller: &FormController<C, N>, out: &mut W) -> std::io::Result<()>
where
    C: PredictionClient,
    N: Notifier,
    W: Write,
{
    write!(out, "{}", render_form(controller.form()))?;
    if let Some(badge) = render_badge(controller.result()) {
        writeln!(out, "{}", badge)?;
    }
    Ok(())
}

/// Run commands from `input` until `quit` or end of input.
pub async fn run_session<C, N, R, W>(
    controller: &mut FormController<C, N>,
    mut input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    C: PredictionClient,
    N: Notifier,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    writeln!(out, "YouTube Viral Video Predictor")?;
    writeln!(out, "{}", MODEL_INFO)?;
    writeln!(out, "Type `help` for commands.")?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                debug!(error = %e, "Skipping non UTF-8 input line");
                writeln!(out, "Input is not valid UTF-8: {}", e)?;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Session command");

        match command {
            SessionCommand::Set { field, value } => {
                controller.update_field(field, value);
                writeln!(out, "{} updated.", field.spec().label)?;
            }
            SessionCommand::Prefill => {
                controller.prefill();
                writeln!(out, "Form filled with example values.")?;
                write_form(controller, out)?;
            }
            SessionCommand::Show => write_form(controller, out)?,
            SessionCommand::Submit => {
                writeln!(out, "Predicting…")?;
                out.flush()?;
                match controller.submit().await {
                    SubmitOutcome::Predicted(verdict) => {
                        writeln!(out, "[{}] {}", verdict.class(), verdict.badge())?;
                    }
                    SubmitOutcome::Rejected { .. } | SubmitOutcome::Failed => {
                        if let Some(badge) = render_badge(controller.result()) {
                            writeln!(out, "Last result: {}", badge)?;
                        }
                    }
                }
            }
            SessionCommand::Fields => write!(out, "{}", render_field_list())?,
            SessionCommand::Help => write!(out, "{}", HELP)?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_with_spaces_in_value() {
        let command: SessionCommand = "set title  My first video ".parse().unwrap();
        assert_eq!(
            command,
            SessionCommand::Set {
                field: FormField::Title,
                value: "My first video".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_without_value_clears() {
        let command: SessionCommand = "set likes".parse().unwrap();
        assert_eq!(
            command,
            SessionCommand::Set {
                field: FormField::Likes,
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_set_errors() {
        assert_eq!("set".parse::<SessionCommand>(), Err(CommandError::MissingField));
        assert!(matches!(
            "set views 10".parse::<SessionCommand>(),
            Err(CommandError::Field(ModelError::UnknownField(_)))
        ));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("PREFILL".parse::<SessionCommand>(), Ok(SessionCommand::Prefill));
        assert_eq!(" submit ".parse::<SessionCommand>(), Ok(SessionCommand::Submit));
        assert_eq!("exit".parse::<SessionCommand>(), Ok(SessionCommand::Quit));
        assert_eq!("?".parse::<SessionCommand>(), Ok(SessionCommand::Help));
        assert!(matches!(
            "dance".parse::<SessionCommand>(),
            Err(CommandError::Unknown(_))
        ));
    }
}
