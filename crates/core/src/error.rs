use thiserror::Error;

/// Errors raised before a session is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "terminal window size too small to render on: {rows}x{cols}, must be at least {min_rows}x{min_cols}"
    )]
    TerminalTooSmall {
        rows: u16,
        cols: u16,
        min_rows: u16,
        min_cols: u16,
    },
}
