use crate::tokenizer::{Attributes, TokenSink, Tokenizer, TokenizerState};

/// An owned event produced by a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    StartElement {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Cdata(String),
    EndElement(String),
    OtherXml(String),
    Error,
}

impl Event {
    /// A shorthand for [`Event::StartElement`].
    pub fn start_element<'a>(
        name: &str,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Event::StartElement {
            name: name.to_owned(),
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
        }
    }
}

/// A [`TokenSink`] that records every event and keeps the state of its stream.
#[derive(Debug, Default)]
pub struct EventCollector {
    events: Vec<Event>,
    state: Option<TokenizerState>,
}

impl EventCollector {
    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[inline]
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Whether the last call saved a state. It's not the case before the
    /// first call and after malformed input.
    #[inline]
    pub fn has_pending_state(&self) -> bool {
        self.state.is_some()
    }

    #[inline]
    pub fn state(&self) -> Option<&TokenizerState> {
        self.state.as_ref()
    }
}

impl TokenSink for EventCollector {
    fn error(&mut self) {
        self.events.push(Event::Error);
    }

    fn start_element(&mut self, name: &str, attributes: &Attributes<'_>) {
        self.events.push(Event::StartElement {
            name: name.to_owned(),
            attributes: attributes
                .iter()
                .map(|a| (a.name().to_owned(), a.value().to_owned()))
                .collect(),
        });
    }

    fn element_cdata(&mut self, text: &str) {
        self.events.push(Event::Cdata(text.to_owned()));
    }

    fn end_element(&mut self, name: &str) {
        self.events.push(Event::EndElement(name.to_owned()));
    }

    fn other_xml(&mut self, text: &str) {
        self.events.push(Event::OtherXml(text.to_owned()));
    }

    #[inline]
    fn save_state(&mut self, state: TokenizerState) {
        self.state = Some(state);
    }

    #[inline]
    fn load_state(&mut self) -> Option<TokenizerState> {
        self.state.take()
    }
}

/// Tokenizes a complete document with the default settings.
pub fn collect_events(input: &str) -> Vec<Event> {
    let mut collector = EventCollector::default();

    Tokenizer::new().parse(&mut collector, input);

    collector.take_events()
}
