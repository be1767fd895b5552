//! Error type shared by the wrap model, builder and export helpers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WrapError {
    /// A wrap needs at least one slide for the player and dashboards to work.
    #[error("a wrap must contain at least one slide")]
    EmptyWrap,

    #[error("duplicate slide id `{0}`")]
    DuplicateSlideId(String),

    #[error("invalid wrap document: {0}")]
    Bundle(#[from] serde_json::Error),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("export failed: {0}")]
    Export(String),
}
