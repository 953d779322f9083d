use super::attributes::{AttributeBuffer, Attributes};
use super::phase::Phase;
use crate::base::trim_end_whitespace;
use crate::settings::DEFAULT_ATTRIBUTE_CAPACITY;

/// Everything a [`Tokenizer`] needs to resume scanning a stream where the
/// previous call left off.
///
/// A state belongs to exactly one logical stream. It's handed out by
/// [`TokenSink::load_state`] at the beginning of every [`Tokenizer::parse`]
/// call and given back with [`TokenSink::save_state`] at the end, unless the
/// input turned out to be malformed, in which case it's dropped.
///
/// [`Tokenizer`]: crate::Tokenizer
/// [`Tokenizer::parse`]: crate::Tokenizer::parse
/// [`TokenSink::load_state`]: crate::TokenSink::load_state
/// [`TokenSink::save_state`]: crate::TokenSink::save_state
#[derive(Debug, Clone)]
pub struct TokenizerState {
    pub(super) phase: Phase,
    pub(super) element_name: String,
    pub(super) attributes: AttributeBuffer,
    pub(super) self_closing: bool,
    pub(super) char_data: Option<String>,
    pub(super) closing_quote: Option<char>,
}

impl TokenizerState {
    pub(crate) fn new(attribute_capacity: usize) -> Self {
        TokenizerState {
            phase: Phase::Start,
            element_name: String::new(),
            attributes: AttributeBuffer::new(attribute_capacity),
            self_closing: false,
            char_data: None,
            closing_quote: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Partially read name of the current start or end tag.
    #[inline]
    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    /// Attributes of the current start tag read so far.
    #[inline]
    pub fn attributes(&self) -> Attributes<'_> {
        self.attributes.as_attributes()
    }

    /// Index of the attribute being read, `None` if the current tag has none yet.
    #[inline]
    pub fn current_attribute(&self) -> Option<usize> {
        self.attributes.current()
    }

    /// Number of attribute slots allocated, including unfilled ones.
    #[inline]
    pub fn attribute_capacity(&self) -> usize {
        self.attributes.capacity()
    }

    #[inline]
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Partially read character data or `<?...>`/`<!...>` content.
    #[inline]
    pub fn char_data(&self) -> Option<&str> {
        self.char_data.as_deref()
    }

    /// Total size of the partially read content held by the state.
    pub fn buffered_bytes(&self) -> usize {
        self.element_name.len()
            + self.attributes.buffered_bytes()
            + self.char_data.as_ref().map_or(0, String::len)
    }

    #[inline]
    pub(super) fn start_char_data(&mut self, first_ch: char) {
        self.char_data = Some(String::from(first_ch));
    }

    #[inline]
    pub(super) fn push_char_data(&mut self, ch: char) {
        self.char_data.get_or_insert_with(String::new).push(ch);
    }

    #[inline]
    pub(super) fn push_char_data_str(&mut self, s: &str) {
        self.char_data.get_or_insert_with(String::new).push_str(s);
    }

    /// Takes accumulated character data with trailing whitespace removed.
    #[inline]
    pub(super) fn take_trimmed_char_data(&mut self) -> Option<String> {
        self.char_data.take().map(|mut text| {
            trim_end_whitespace(&mut text);
            text
        })
    }

    #[inline]
    pub(super) fn start_element_name(&mut self) {
        self.element_name.clear();
    }

    #[inline]
    pub(super) fn finish_tag(&mut self) {
        self.element_name.clear();
        self.attributes.clear();
        self.closing_quote = None;
    }
}

impl Default for TokenizerState {
    #[inline]
    fn default() -> Self {
        TokenizerState::new(DEFAULT_ATTRIBUTE_CAPACITY)
    }
}
