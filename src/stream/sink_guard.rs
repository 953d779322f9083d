use crate::tokenizer::{Attributes, TokenSink, TokenizerState};

#[derive(Debug, Default, Clone, Copy)]
pub(super) struct ParseReport {
    pub malformed: bool,
    pub buffered_bytes: usize,
}

/// Forwards everything to the wrapped sink while keeping track of what
/// the last parsing call did with the stream.
pub(super) struct SinkGuard<S> {
    inner: S,
    report: ParseReport,
}

impl<S: TokenSink> SinkGuard<S> {
    #[inline]
    pub fn new(inner: S) -> Self {
        SinkGuard {
            inner,
            report: ParseReport::default(),
        }
    }

    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    #[inline]
    pub fn reset_report(&mut self) {
        self.report = ParseReport::default();
    }

    #[inline]
    pub fn report(&self) -> ParseReport {
        self.report
    }
}

impl<S: TokenSink> TokenSink for SinkGuard<S> {
    fn error(&mut self) {
        self.report.malformed = true;
        self.inner.error();
    }

    #[inline]
    fn start_element(&mut self, name: &str, attributes: &Attributes<'_>) {
        self.inner.start_element(name, attributes);
    }

    #[inline]
    fn element_cdata(&mut self, text: &str) {
        self.inner.element_cdata(text);
    }

    #[inline]
    fn end_element(&mut self, name: &str) {
        self.inner.end_element(name);
    }

    #[inline]
    fn other_xml(&mut self, text: &str) {
        self.inner.other_xml(text);
    }

    fn save_state(&mut self, state: TokenizerState) {
        self.report.buffered_bytes = state.buffered_bytes();
        self.inner.save_state(state);
    }

    #[inline]
    fn load_state(&mut self) -> Option<TokenizerState> {
        self.inner.load_state()
    }
}
