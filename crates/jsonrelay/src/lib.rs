//! An incremental, push-based JSON syntax parser.
//!
//! [`Parser`] consumes raw text in chunks of any size, split at any
//! character boundary, and pushes structural events to a [`Consumer`] the
//! moment each token completes. It never recurses and never buffers more
//! than the token in progress, which makes it suitable for parsing documents
//! that arrive piecemeal from a socket or file stream.
//!
//! The grammar is deliberately narrow:
//!
//! - the root value must be an object;
//! - numeric literals are not supported and are rejected as syntax errors;
//! - escape sequences are not decoded: backslashes pass through to the
//!   consumer verbatim, and a `"` always ends the key or string, even
//!   directly after a backslash.
//!
//! # Examples
//!
//! ```rust
//! use jsonrelay::{Consumer, Parser, ParserOptions};
//!
//! #[derive(Default)]
//! struct Events(Vec<String>);
//!
//! impl Consumer for Events {
//!     fn on_object_start(&mut self) {
//!         self.0.push("{".into());
//!     }
//!     fn on_object_end(&mut self) {
//!         self.0.push("}".into());
//!     }
//!     fn on_array_start(&mut self) {
//!         self.0.push("[".into());
//!     }
//!     fn on_array_end(&mut self) {
//!         self.0.push("]".into());
//!     }
//!     fn on_key_parsed(&mut self, key: &str) {
//!         self.0.push(format!("key {key}"));
//!     }
//!     fn on_string_parsed(&mut self, value: &str) {
//!         self.0.push(format!("str {value}"));
//!     }
//!     fn on_boolean_parsed(&mut self, value: bool) {
//!         self.0.push(format!("bool {value}"));
//!     }
//!     fn on_null_parsed(&mut self) {
//!         self.0.push("null".into());
//!     }
//! }
//!
//! let mut parser = Parser::new(ParserOptions::default());
//! let mut events = Events::default();
//!
//! // Chunk boundaries fall mid-key and mid-literal; the consumer cannot
//! // tell.
//! for chunk in ["{\"ro", "ver\":[tr", "ue,null]}"] {
//!     parser.feed(chunk, &mut events)?;
//! }
//! parser.finish()?;
//!
//! assert_eq!(
//!     events.0,
//!     ["{", "key rover", "[", "bool true", "null", "]", "}"]
//! );
//! # Ok::<(), jsonrelay::ParseError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chunk_utils;
mod consumer;
mod error;
mod options;
mod parser;

#[cfg(test)]
mod tests;

pub use chunk_utils::{split_every, split_into};
pub use consumer::Consumer;
pub use error::ParseError;
pub use options::ParserOptions;
pub use parser::Parser;
