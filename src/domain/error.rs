//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors cover both command-tree construction and user input.
///
/// Construction errors (`DuplicateCommand`, `DuplicateFlag`, `InvalidName`,
/// `UnknownNode`) indicate a broken command registration. All other variants
/// are caused by what the user typed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("configuration error: command '{name}' already registered under '{parent}'")]
    DuplicateCommand { parent: String, name: String },

    #[error("configuration error: flag '--{0}' declared twice")]
    DuplicateFlag(String),

    #[error("configuration error: invalid name '{0}'")]
    InvalidName(String),

    #[error("configuration error: no such node in command tree")]
    UnknownNode,

    #[error("unknown command \"{name}\" for \"{parent}\"")]
    UnknownCommand { parent: String, name: String },

    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("invalid argument \"{value}\" for \"--{flag}\" flag: expected a 32-bit integer")]
    InvalidValue { flag: String, value: String },

    #[error("flag needs an argument: --{0}")]
    MissingValue(String),

    #[error("required flag(s) {} not set", quote_all(.0))]
    MissingRequiredFlag(Vec<String>),

    #[error("unexpected argument \"{0}\"")]
    UnexpectedArgument(String),
}

impl DomainError {
    /// True for errors raised while building the command tree.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DomainError::DuplicateCommand { .. }
                | DomainError::DuplicateFlag(_)
                | DomainError::InvalidName(_)
                | DomainError::UnknownNode
        )
    }
}

fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("\"{n}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_missing_flags_when_displayed_then_names_each_flag() {
        let err = DomainError::MissingRequiredFlag(vec!["n1".into(), "n2".into()]);
        assert_eq!(err.to_string(), "required flag(s) \"n1\", \"n2\" not set");
    }

    #[test]
    fn given_duplicate_command_when_classified_then_is_configuration() {
        let err = DomainError::DuplicateCommand {
            parent: "calc".into(),
            name: "add".into(),
        };
        assert!(err.is_configuration());
        assert!(!DomainError::UnknownFlag("--x".into()).is_configuration());
    }
}
