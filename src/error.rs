/// Errors surfaced to whoever drives a [crate::game::Game].
///
/// Malformed move text and well-formed but illegal moves both map to [MoveError::InvalidMove],
/// so a caller cannot tell the two apart from the error alone. The distinction is only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move command '{0}'")]
    InvalidMove(String),

    #[error("selection {selection} is not one of the {options} continuation options")]
    SelectionOutOfRange { selection: usize, options: usize },

    #[error("a jump continuation must be selected before the turn can proceed")]
    ContinuationPending,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown game mode '{0}' (expected 'PvP' or 'PvC')")]
    UnknownMode(String),
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn invalid_move_display() {
        let err = MoveError::InvalidMove(String::from("3a-9z"));
        assert_eq!(err.to_string(), "invalid move command '3a-9z'");
    }

    #[test]
    fn selection_out_of_range_display() {
        let err = MoveError::SelectionOutOfRange { selection: 3, options: 2 };
        assert_eq!(err.to_string(), "selection 3 is not one of the 2 continuation options");
    }

    #[test]
    fn unknown_mode_display() {
        let err = ConfigError::UnknownMode(String::from("EvE"));
        assert_eq!(err.to_string(), "unknown game mode 'EvE' (expected 'PvP' or 'PvC')");
    }
}
