/// Everything that can go wrong while dealing, tallying, or plotting.
///
/// Configuration and exhaustion errors surface to the caller before any work
/// is done. A missing font or progress bar is never an error; those degrade
/// with a logged warning instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {kind} alphabet {alphabet:?}: {reason}")]
    Alphabet {
        kind: &'static str,
        alphabet: String,
        reason: String,
    },
    #[error("at least one player is required")]
    Players,
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("shape mismatch: matrix is {rows}x{cols}, labels are {labels_rows}x{labels_cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        labels_rows: usize,
        labels_cols: usize,
    },
    #[error("render failed: {0}")]
    Render(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
