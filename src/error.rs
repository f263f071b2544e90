//! Errors raised while binding behaviors to a live page.
//!
//! The behaviors themselves never fail: a missing element is a silent no-op.
//! These variants cover setup, where a missing window or a rejected listener
//! means the page cannot be wired at all.

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("DOM call failed: {0}")]
    Dom(String),
}
