//! Structured errors for malformed input.
//!
//! Every error is fatal: the parser that produced it rejects all further
//! input. Lines are 1-based and counted from line-feed characters only, so
//! they match what an editor shows for the same document.

use alloc::string::String;

use thiserror::Error;

/// Error describing why a document was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character arrived that no rule of the current parse state accepts.
    #[error("unexpected character '{found}' while in {state} state at line {line}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Diagnostic name of the parse state that rejected the character.
        state: &'static str,
        /// Line on which the character appeared.
        line: usize,
    },

    /// A bare literal terminated but was not `true`, `false` or `null`.
    ///
    /// Literal text is accumulated blindly until whitespace, a comma or a
    /// closing bracket ends it, so the mistake is reported at the terminator
    /// rather than at the first mismatched character.
    #[error("unexpected literal '{literal}' while parsing boolean or null at line {line}")]
    UnexpectedLiteral {
        /// The accumulated text that matched none of the three literals.
        literal: String,
        /// Line on which the literal terminated.
        line: usize,
    },

    /// Input stopped mid-document.
    ///
    /// Produced only by [`Parser::finish`](crate::Parser::finish); `feed`
    /// itself cannot tell a chunk boundary from the end of the stream.
    #[error("unexpected end of input while in {state} state at line {line}")]
    UnexpectedEnd {
        /// Diagnostic name of the parse state the input stranded.
        state: &'static str,
        /// Line reached when the input stopped.
        line: usize,
    },
}

impl ParseError {
    /// Line the error was raised on, whatever the variant.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnexpectedLiteral { line, .. }
            | Self::UnexpectedEnd { line, .. } => *line,
        }
    }
}
