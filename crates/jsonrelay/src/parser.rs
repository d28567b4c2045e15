//! The push parser: an explicit state stack driven one character at a time.

use alloc::{string::String, vec::Vec};

use crate::{Consumer, ParseError, ParserOptions};

/// One frame of parsing context.
///
/// The stack bottom always holds a sentinel (`Idle`, and after the root
/// object closes possibly `End` or `Error`) that is never popped, so the
/// machine cannot underflow on malformed closers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Outside any document, waiting for a root `{`.
    Idle,
    /// Inside an object, before a key or `}`.
    Object,
    /// Inside an array, before an element or `]`.
    Array,
    /// Between the quotes of an object key.
    Key,
    /// Between a key and its `:`.
    Colon,
    /// After a `:`, before the value.
    Value,
    /// After a value, before `,` or the container's closer.
    Comma,
    /// Between the quotes of a string value.
    String,
    /// Accumulating a bare `true`/`false`/`null` literal.
    BooleanOrNull,
    /// Root document complete; only whitespace may follow.
    End,
    /// A previous `feed` failed; all further input is rejected.
    Error,
}

impl ParseState {
    /// Diagnostic name used in error messages.
    const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Object => "object",
            Self::Array => "array",
            Self::Key => "key",
            Self::Colon => "colon",
            Self::Value => "value",
            Self::Comma => "comma",
            Self::String => "string",
            Self::BooleanOrNull => "boolean or null",
            Self::End => "end",
            Self::Error => "error",
        }
    }

    /// States that scan between tokens. The accumulation buffer must be
    /// empty whenever one of these is on top of the stack.
    const fn scans_between_tokens(self) -> bool {
        matches!(
            self,
            Self::Idle
                | Self::Object
                | Self::Array
                | Self::Colon
                | Self::Value
                | Self::Comma
                | Self::End
        )
    }
}

/// The four whitespace characters JSON permits between tokens. Rust's
/// `char::is_whitespace` accepts far more (vertical tab, NBSP, ...), none of
/// which the grammar allows.
const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// An incremental, push-based JSON syntax parser.
///
/// Raw text goes in through [`feed`](Parser::feed) in chunks of any size,
/// split at any character boundary; structural events come out synchronously
/// through a [`Consumer`] passed to each call. The parser keeps no input
/// text beyond the token currently being accumulated and never recurses, so
/// memory use is proportional to nesting depth, not document length.
///
/// A chunk boundary is invisible to the consumer: feeding a document in one
/// piece or one character at a time produces the identical event sequence.
///
/// # Examples
///
/// ```rust
/// use jsonrelay::{Consumer, Parser, ParserOptions};
///
/// #[derive(Default)]
/// struct Keys(Vec<String>);
///
/// impl Consumer for Keys {
///     fn on_object_start(&mut self) {}
///     fn on_object_end(&mut self) {}
///     fn on_array_start(&mut self) {}
///     fn on_array_end(&mut self) {}
///     fn on_key_parsed(&mut self, key: &str) {
///         self.0.push(key.to_owned());
///     }
///     fn on_string_parsed(&mut self, _value: &str) {}
///     fn on_boolean_parsed(&mut self, _value: bool) {}
///     fn on_null_parsed(&mut self) {}
/// }
///
/// let mut parser = Parser::new(ParserOptions::default());
/// let mut keys = Keys::default();
///
/// // The chunk boundary falls in the middle of the first key.
/// parser.feed("{\"fir", &mut keys)?;
/// parser.feed("st\":true,\"second\":null}", &mut keys)?;
///
/// assert_eq!(keys.0, ["first", "second"]);
/// # Ok::<(), jsonrelay::ParseError>(())
/// ```
#[derive(Debug)]
pub struct Parser {
    /// Stack of parsing contexts; see [`ParseState`].
    stack: Vec<ParseState>,
    /// Accumulates the text of the key, string or literal in progress.
    /// Cleared, capacity retained, as soon as the token is emitted.
    buf: String,
    /// Current 1-based line, advanced on every line feed.
    line: usize,
    multiple_documents: bool,
}

impl Parser {
    #[must_use]
    /// Creates a parser in its idle state, at line 1.
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
    pub fn new(options: ParserOptions) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push(ParseState::Idle);
        Self {
            stack,
            buf: String::new(),
            line: 1,
            multiple_documents: options.allow_multiple_documents,
        }
    }

    /// Feeds the next chunk of text, pushing an event to `consumer` for each
    /// token the chunk completes.
    ///
    /// Chunks may be split anywhere, including in the middle of a key,
    /// string or literal; the parser suspends mid-token and resumes on the
    /// next call. Returning `Ok` therefore means only that this chunk was
    /// well formed so far, not that a document is complete (see
    /// [`finish`](Parser::finish)).
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered. No further characters
    /// of the chunk are examined, and the parser is left in a terminal
    /// error state that rejects any subsequent input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use jsonrelay::{Consumer, Parser, ParserOptions};
    /// # struct Sink;
    /// # impl Consumer for Sink {
    /// #     fn on_object_start(&mut self) {}
    /// #     fn on_object_end(&mut self) {}
    /// #     fn on_array_start(&mut self) {}
    /// #     fn on_array_end(&mut self) {}
    /// #     fn on_key_parsed(&mut self, _key: &str) {}
    /// #     fn on_string_parsed(&mut self, _value: &str) {}
    /// #     fn on_boolean_parsed(&mut self, _value: bool) {}
    /// #     fn on_null_parsed(&mut self) {}
    /// # }
    /// let mut parser = Parser::new(ParserOptions::default());
    /// parser.feed("{\"hello\":", &mut Sink)?;
    /// # Ok::<(), jsonrelay::ParseError>(())
    /// ```
    pub fn feed<C: Consumer + ?Sized>(
        &mut self,
        chunk: &str,
        consumer: &mut C,
    ) -> Result<(), ParseError> {
        for ch in chunk.chars() {
            if ch == '\n' {
                self.line += 1;
            }
            if let Err(err) = self.step(ch, consumer) {
                self.poison();
                return Err(err);
            }
        }
        Ok(())
    }

    /// Verifies that the input ended on a document boundary.
    ///
    /// `feed` cannot distinguish a chunk boundary from the end of the
    /// stream, so an input that stops mid-document is not an error until the
    /// caller says the stream is over by calling `finish`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedEnd`] naming the interrupted state if
    /// a document is still open, nothing was parsed, or an earlier `feed`
    /// already failed. With
    /// [`allow_multiple_documents`](ParserOptions::allow_multiple_documents)
    /// an empty stream is acceptable as zero documents.
    pub fn finish(self) -> Result<(), ParseError> {
        match self.stack.as_slice() {
            [ParseState::End] => Ok(()),
            [ParseState::Idle] if self.multiple_documents => Ok(()),
            _ => {
                let Some(state) = self.stack.last() else {
                    unreachable!("the bottom sentinel state is never popped")
                };
                Err(ParseError::UnexpectedEnd {
                    state: state.name(),
                    line: self.line,
                })
            }
        }
    }

    #[must_use]
    /// Current 1-based line, for diagnostics in the embedding system.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Dispatches one character against the state on top of the stack.
    #[allow(clippy::too_many_lines)]
    #[inline]
    fn step<C: Consumer + ?Sized>(
        &mut self,
        ch: char,
        consumer: &mut C,
    ) -> Result<(), ParseError> {
        use ParseState::*;

        let Some(&state) = self.stack.last() else {
            unreachable!("the bottom sentinel state is never popped")
        };
        debug_assert!(
            !state.scans_between_tokens() || self.buf.is_empty(),
            "token buffer must be empty between tokens"
        );

        match state {
            // ------------------------- sentinels --------------------------
            Idle => match ch {
                c if is_whitespace(c) => Ok(()),
                '{' => {
                    self.stack.push(Object);
                    consumer.on_object_start();
                    Ok(())
                }
                c => Err(self.unexpected(c, Idle)),
            },

            End => match ch {
                c if is_whitespace(c) => Ok(()),
                c => Err(self.unexpected(c, End)),
            },

            Error => Err(self.unexpected(ch, Error)),

            // ------------------------- containers -------------------------
            Object => match ch {
                c if is_whitespace(c) => Ok(()),
                '"' => {
                    self.stack.push(Key);
                    Ok(())
                }
                '}' => self.close_object('}', Object, consumer),
                c => Err(self.unexpected(c, Object)),
            },

            Array => match ch {
                c if is_whitespace(c) => Ok(()),
                '{' => {
                    self.stack.push(Comma);
                    self.stack.push(Object);
                    consumer.on_object_start();
                    Ok(())
                }
                '[' => {
                    self.stack.push(Comma);
                    self.stack.push(Array);
                    consumer.on_array_start();
                    Ok(())
                }
                '"' => {
                    self.stack.push(Comma);
                    self.stack.push(ParseState::String);
                    Ok(())
                }
                c @ ('t' | 'f' | 'n') => {
                    self.buf.push(c);
                    self.stack.push(Comma);
                    self.stack.push(BooleanOrNull);
                    Ok(())
                }
                ']' => self.close_array(']', Array, consumer),
                c => Err(self.unexpected(c, Array)),
            },

            // ----------------------- object members -----------------------
            Key => match ch {
                '"' => {
                    self.stack.pop();
                    consumer.on_key_parsed(&self.buf);
                    self.buf.clear();
                    self.stack.push(Colon);
                    Ok(())
                }
                c => {
                    self.buf.push(c);
                    Ok(())
                }
            },

            Colon => match ch {
                c if is_whitespace(c) => Ok(()),
                ':' => {
                    self.stack.pop();
                    self.stack.push(Value);
                    Ok(())
                }
                c => Err(self.unexpected(c, Colon)),
            },

            Value => match ch {
                c if is_whitespace(c) => Ok(()),
                '{' => {
                    self.stack.pop();
                    self.stack.push(Comma);
                    self.stack.push(Object);
                    consumer.on_object_start();
                    Ok(())
                }
                '[' => {
                    self.stack.pop();
                    self.stack.push(Comma);
                    self.stack.push(Array);
                    consumer.on_array_start();
                    Ok(())
                }
                '"' => {
                    self.stack.pop();
                    self.stack.push(Comma);
                    self.stack.push(ParseState::String);
                    Ok(())
                }
                c @ ('t' | 'f' | 'n') => {
                    self.buf.push(c);
                    self.stack.pop();
                    self.stack.push(Comma);
                    self.stack.push(BooleanOrNull);
                    Ok(())
                }
                c => Err(self.unexpected(c, Value)),
            },

            Comma => match ch {
                c if is_whitespace(c) => Ok(()),
                ',' => {
                    self.stack.pop();
                    Ok(())
                }
                '}' => {
                    self.stack.pop();
                    self.close_object('}', Comma, consumer)
                }
                ']' => {
                    self.stack.pop();
                    self.close_array(']', Comma, consumer)
                }
                c => Err(self.unexpected(c, Comma)),
            },

            // --------------------------- tokens ---------------------------
            ParseState::String => match ch {
                '"' => {
                    self.stack.pop();
                    consumer.on_string_parsed(&self.buf);
                    self.buf.clear();
                    Ok(())
                }
                c => {
                    self.buf.push(c);
                    Ok(())
                }
            },

            BooleanOrNull => match ch {
                c if is_whitespace(c) => {
                    self.finalize_literal(consumer)?;
                    self.stack.pop();
                    Ok(())
                }
                ',' => {
                    self.finalize_literal(consumer)?;
                    self.stack.pop();
                    let continuation = self.stack.pop();
                    debug_assert_eq!(continuation, Some(Comma));
                    Ok(())
                }
                '}' => {
                    self.finalize_literal(consumer)?;
                    self.stack.pop();
                    let continuation = self.stack.pop();
                    debug_assert_eq!(continuation, Some(Comma));
                    self.close_object('}', BooleanOrNull, consumer)
                }
                ']' => {
                    self.finalize_literal(consumer)?;
                    self.stack.pop();
                    let continuation = self.stack.pop();
                    debug_assert_eq!(continuation, Some(Comma));
                    self.close_array(']', BooleanOrNull, consumer)
                }
                c => {
                    self.buf.push(c);
                    Ok(())
                }
            },
        }
    }

    /// Pops a completed object frame and reports it, or rejects `found` if
    /// the frame on top is not an object.
    fn close_object<C: Consumer + ?Sized>(
        &mut self,
        found: char,
        state: ParseState,
        consumer: &mut C,
    ) -> Result<(), ParseError> {
        match self.stack.last() {
            Some(ParseState::Object) => {
                self.stack.pop();
                consumer.on_object_end();
                self.seal_root();
                Ok(())
            }
            _ => Err(self.unexpected(found, state)),
        }
    }

    /// Pops a completed array frame and reports it, or rejects `found` if
    /// the frame on top is not an array.
    fn close_array<C: Consumer + ?Sized>(
        &mut self,
        found: char,
        state: ParseState,
        consumer: &mut C,
    ) -> Result<(), ParseError> {
        match self.stack.last() {
            Some(ParseState::Array) => {
                self.stack.pop();
                consumer.on_array_end();
                Ok(())
            }
            _ => Err(self.unexpected(found, state)),
        }
    }

    /// Emits the accumulated `true`/`false`/`null` literal, or fails with
    /// the buffer contents if they match none of the three.
    fn finalize_literal<C: Consumer + ?Sized>(
        &mut self,
        consumer: &mut C,
    ) -> Result<(), ParseError> {
        match self.buf.as_str() {
            "true" => consumer.on_boolean_parsed(true),
            "false" => consumer.on_boolean_parsed(false),
            "null" => consumer.on_null_parsed(),
            _ => {
                return Err(ParseError::UnexpectedLiteral {
                    literal: core::mem::take(&mut self.buf),
                    line: self.line,
                });
            }
        }
        self.buf.clear();
        Ok(())
    }

    /// Collapses the stack to `End` once the root object has closed, unless
    /// further documents are allowed, in which case the bottom `Idle` is
    /// left to accept the next root.
    fn seal_root(&mut self) {
        if self.stack.len() == 1 && !self.multiple_documents {
            self.stack[0] = ParseState::End;
        }
    }

    /// Drops all pending state after an error; only the terminal `Error`
    /// sentinel remains.
    fn poison(&mut self) {
        self.stack.clear();
        self.stack.push(ParseState::Error);
        self.buf.clear();
    }

    fn unexpected(&self, found: char, state: ParseState) -> ParseError {
        ParseError::UnexpectedCharacter {
            found,
            state: state.name(),
            line: self.line,
        }
    }

    #[cfg(test)]
    pub(crate) fn buffer_is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn state_name(&self) -> &'static str {
        self.stack.last().map_or("<empty>", |state| state.name())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}
