use thiserror::Error;

/// Structured errors surfaced by the rendering engine. These map to the
/// pipeline stage that rejected the document without leaking implementation
/// details.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("markdown rendering failed: {message}")]
    Markdown { message: String },
    #[error("syntax highlighting failed: {language}: {message}")]
    Highlighting { language: String, message: String },
    #[error("sanitisation rejected content: {message}")]
    Sanitisation { message: String },
    #[error("document processing failed: {message}")]
    Document { message: String },
}

/// Errors surfaced by the public converter API.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// `render` was called before a successful `init`. The call fails and
    /// converter state is left untouched.
    #[error("converter is not initialised: call init() before render()")]
    Uninitialized,
    #[error(transparent)]
    Engine(#[from] RenderError),
}
