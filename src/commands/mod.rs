//! Command handlers for the `comanda` binary

pub mod dish;
pub mod interactive;
pub mod orders;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use comanda::ComandaError;

/// Render an error for stderr
pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(comanda) = err.downcast_ref::<ComandaError>() {
        return format_comanda_error(comanda);
    }

    format!("[ERROR] {:#}\n", err)
}

fn format_comanda_error(err: &ComandaError) -> String {
    match err {
        ComandaError::InvalidConfig { .. } => {
            format!("[ERROR] {}\n  fix the file or pass --config <PATH>\n", err)
        }
        ComandaError::Persistence { .. } => {
            format!("[ERROR] {}\n  check that the data directory is writable\n", err)
        }
        ComandaError::OrderNumbersExhausted => {
            format!("[ERROR] {}\n  run 'comanda orders clear' to restart numbering at 1\n", err)
        }
        ComandaError::NoClosingReport => {
            format!("[ERROR] {}\n  generate a closing report first\n", err)
        }
        other => format!("[ERROR] {}\n", other),
    }
}

/// Ask before a destructive action unless `--yes` was given.
///
/// Without a terminal there is nobody to ask, so the action is refused.
pub fn confirmed(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        bail!("confirmation required: pass --yes when not running in a terminal");
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_adds_hint_for_config() {
        let err = anyhow::Error::new(ComandaError::InvalidConfig {
            file: "comanda.toml".into(),
            message: "expected table".to_string(),
        });
        let text = format_error(&err);
        assert!(text.starts_with("[ERROR] invalid configuration in comanda.toml"));
        assert!(text.contains("--config"));
    }

    #[test]
    fn format_error_plain() {
        let err = anyhow::Error::new(ComandaError::DishNotFound {
            id: "X1".to_string(),
        });
        assert_eq!(format_error(&err), "[ERROR] dish 'X1' not found\n");
    }

    #[test]
    fn yes_skips_prompt() {
        assert!(confirmed("Delete?", true).unwrap());
    }
}
