use super::attributes::Attributes;
use super::state::TokenizerState;

/// Receives events produced by a [`Tokenizer`] and keeps the state of the
/// stream between [`Tokenizer::parse`] calls.
///
/// Events are delivered synchronously, in document order, from within the
/// call that recognized them.
///
/// The sink, not the tokenizer, owns the stream state. That's what allows a
/// single [`Tokenizer`] to serve any number of independent streams: each
/// stream has its own sink, and each sink must only be used by one call at a
/// time.
///
/// [`Tokenizer`]: crate::Tokenizer
/// [`Tokenizer::parse`]: crate::Tokenizer::parse
pub trait TokenSink {
    /// Malformed input has been encountered. The state of the stream has been
    /// dropped, so the next call starts from scratch.
    fn error(&mut self);

    /// A start tag has been read. `name` is never empty. An element without
    /// attributes gets an empty [`Attributes`].
    fn start_element(&mut self, name: &str, attributes: &Attributes<'_>);

    /// Character data found after a start tag, with trailing whitespace
    /// removed. Never called for whitespace-only gaps.
    fn element_cdata(&mut self, text: &str);

    /// An end tag has been read, or a self-closing tag has been closed.
    fn end_element(&mut self, name: &str);

    /// Raw content of a `<?...>` or `<!...>` construct, from the `?` or `!`
    /// marker up to, but not including, the closing `>`.
    fn other_xml(&mut self, text: &str);

    fn save_state(&mut self, state: TokenizerState);

    /// Hands out the state saved by the previous call. `None` makes the
    /// tokenizer start a fresh stream.
    fn load_state(&mut self) -> Option<TokenizerState>;
}

impl<S: TokenSink + ?Sized> TokenSink for &mut S {
    #[inline]
    fn error(&mut self) {
        (**self).error();
    }

    #[inline]
    fn start_element(&mut self, name: &str, attributes: &Attributes<'_>) {
        (**self).start_element(name, attributes);
    }

    #[inline]
    fn element_cdata(&mut self, text: &str) {
        (**self).element_cdata(text);
    }

    #[inline]
    fn end_element(&mut self, name: &str) {
        (**self).end_element(name);
    }

    #[inline]
    fn other_xml(&mut self, text: &str) {
        (**self).other_xml(text);
    }

    #[inline]
    fn save_state(&mut self, state: TokenizerState) {
        (**self).save_state(state);
    }

    #[inline]
    fn load_state(&mut self) -> Option<TokenizerState> {
        (**self).load_state()
    }
}
