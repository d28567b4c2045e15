/// Configuration options for the push parser.
///
/// # Examples
///
/// ```rust
/// use jsonrelay::{Parser, ParserOptions};
///
/// let parser = Parser::new(ParserOptions {
///     allow_multiple_documents: true,
/// });
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether to accept several whitespace-separated root objects from the
    /// same stream.
    ///
    /// When `false`, the parser freezes once the root object closes and any
    /// further non-whitespace input is reported as a trailing-data syntax
    /// error. When `true`, closing a root object returns the parser to its
    /// initial state, so a stream such as `{} {"a":"b"}` replays the full
    /// event sequence of each document in order.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_multiple_documents: bool,
}
