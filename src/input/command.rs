//! Textual command tokens.
//!
//! Grammar: `play-pause`, `step-forward`, `step-backward`, `quit` and
//! `set <name> <value>`. A `set` only gets through when the name is known
//! and the value is a probability, so the core never sees a bad edit.

use std::str::FromStr;

use crate::application::Command;
use crate::domain::{ParameterName, UnknownParameter};

/// Why a command token was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    UnknownParameter(#[from] UnknownParameter),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfRange { name: ParameterName, value: f64 },
    #[error("Unexpected trailing input '{0}'")]
    TrailingInput(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let head = tokens.next().ok_or(CommandError::Empty)?;

        let command = match head.to_ascii_lowercase().as_str() {
            "play-pause" => Command::PlayPause,
            "step-forward" => Command::StepForward,
            "step-backward" => Command::StepBackward,
            "quit" => Command::Quit,
            "set" => {
                let name: ParameterName = tokens
                    .next()
                    .ok_or(CommandError::MissingArgument("parameter name"))?
                    .parse()?;
                let raw = tokens.next().ok_or(CommandError::MissingArgument("value"))?;
                let value: f64 = raw
                    .parse()
                    .map_err(|_| CommandError::InvalidNumber(raw.to_string()))?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(CommandError::OutOfRange { name, value });
                }
                Command::Set(name, value)
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match tokens.next() {
            Some(extra) => Err(CommandError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_tokens() {
        assert_eq!("play-pause".parse(), Ok(Command::PlayPause));
        assert_eq!("step-forward".parse(), Ok(Command::StepForward));
        assert_eq!("  step-backward ".parse(), Ok(Command::StepBackward));
        assert_eq!("QUIT".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_set() {
        assert_eq!("set f 0.5".parse(), Ok(Command::Set(ParameterName::Ignition, 0.5)));
        assert_eq!("set growth 1".parse(), Ok(Command::Set(ParameterName::Growth, 1.0)));
        assert_eq!("set p 0".parse(), Ok(Command::Set(ParameterName::Growth, 0.0)));
    }

    #[test]
    fn test_rejects_malformed_set() {
        assert_eq!("set".parse::<Command>(), Err(CommandError::MissingArgument("parameter name")));
        assert_eq!("set f".parse::<Command>(), Err(CommandError::MissingArgument("value")));
        assert_eq!(
            "set f abc".parse::<Command>(),
            Err(CommandError::InvalidNumber("abc".to_string()))
        );
        assert!(matches!(
            "set x 0.1".parse::<Command>(),
            Err(CommandError::UnknownParameter(_))
        ));
        assert!(matches!(
            "set p 1.5".parse::<Command>(),
            Err(CommandError::OutOfRange { name: ParameterName::Growth, .. })
        ));
        assert!(matches!("set p NaN".parse::<Command>(), Err(CommandError::OutOfRange { .. })));
        assert!(matches!("set p inf".parse::<Command>(), Err(CommandError::OutOfRange { .. })));
    }

    #[test]
    fn test_rejects_unknown_and_trailing() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("jump".parse::<Command>(), Err(CommandError::Unknown("jump".to_string())));
        assert_eq!(
            "quit now".parse::<Command>(),
            Err(CommandError::TrailingInput("now".to_string()))
        );
    }
}
