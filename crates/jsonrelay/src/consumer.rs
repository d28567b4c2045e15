//! The event sink driven by the parser.

/// Receiver for the structural events of a JSON document.
///
/// [`Parser::feed`](crate::Parser::feed) invokes exactly one method per
/// completed token, synchronously and in document order, before moving to the
/// next character of the chunk. Implementations are pure sinks: the methods
/// return nothing and cannot steer the parser.
///
/// Borrowed `&str` arguments point into the parser's internal accumulation
/// buffer and are valid only for the duration of the call; an implementation
/// that keeps the text must copy it out.
pub trait Consumer {
    /// An object opened (`{` accepted).
    fn on_object_start(&mut self);

    /// The innermost open object closed (`}` accepted).
    fn on_object_end(&mut self);

    /// An array opened (`[` accepted).
    fn on_array_start(&mut self);

    /// The innermost open array closed (`]` accepted).
    fn on_array_end(&mut self);

    /// An object key completed. The text excludes both quotes and is
    /// otherwise uninterpreted; escape sequences arrive verbatim.
    fn on_key_parsed(&mut self, key: &str);

    /// A string value completed. Same raw-text contract as
    /// [`on_key_parsed`](Consumer::on_key_parsed).
    fn on_string_parsed(&mut self, value: &str);

    /// A `true` or `false` literal completed.
    fn on_boolean_parsed(&mut self, value: bool);

    /// A `null` literal completed.
    fn on_null_parsed(&mut self);
}
