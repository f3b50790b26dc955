//! Input/output operations, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Fixed constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Template decoding and pixel lookup
pub mod template;
/// Plain-text matrix listings
pub mod text;
