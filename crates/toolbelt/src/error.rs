//! Error types for toolbelt operations.

use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolbeltError {
    #[error("'{value}' does not match format '{fmt}'")]
    FormatMismatch { value: String, fmt: String },

    #[error("cannot parse datetime: '{0}'")]
    UnparseableDatetime(String),

    #[error("num_bits={0} - expected >= 2 for a signed range")]
    BitWidthTooSmall(u32),

    #[error("num_bits={0} - the widest supported signed width is 128")]
    BitWidthTooWide(u32),

    #[error("cannot draw {requested} distinct items from {available} without replacement")]
    SampleTooLarge { requested: usize, available: usize },

    #[error("empty range for integers: lower={lower} >= upper={upper}")]
    EmptyRange { lower: i64, upper: i64 },

    #[error(transparent)]
    InvalidChoice(#[from] InvalidChoiceError),
}

/// A value failed validation against a fixed set of alternatives.
///
/// Standalone so callers can use it for their own choice checks; it also
/// converts into [`ToolbeltError`] for `?` propagation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("value={value} invalid choice - expected a value from ({choices})")]
pub struct InvalidChoiceError {
    value: String,
    choices: String,
}

impl InvalidChoiceError {
    /// Record `value` as an invalid pick from `choices`.
    pub fn new<V, I>(value: V, choices: I) -> Self
    where
        V: Display,
        I: IntoIterator,
        I::Item: Display,
    {
        let choices = choices
            .into_iter()
            .map(|choice| choice.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            value: value.to_string(),
            choices,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolbeltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_message() {
        let error = InvalidChoiceError::new(0, [1, 2, 3]);
        assert_eq!(
            error.to_string(),
            "value=0 invalid choice - expected a value from (1, 2, 3)"
        );
    }

    #[test]
    fn test_invalid_choice_with_str_values() {
        let error = InvalidChoiceError::new("purple", ["red", "green", "blue"]);
        assert_eq!(
            error.to_string(),
            "value=purple invalid choice - expected a value from (red, green, blue)"
        );
    }

    #[test]
    fn test_invalid_choice_converts_into_library_error() {
        fn pick(color: &str) -> Result<()> {
            Err(InvalidChoiceError::new(color, ["red", "green"]).into())
        }

        let err = pick("blue").unwrap_err();
        assert!(err.to_string().contains("invalid choice"), "got: {err}");
    }
}
