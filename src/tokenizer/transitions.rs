use super::phase::Phase;
use super::sink::TokenSink;
use super::state::TokenizerState;
use super::Tokenizer;
use crate::base::is_whitespace;
use memchr::{memchr, memchr2};

impl Tokenizer {
    /// Advances the automaton by one character.
    pub(super) fn step<S: TokenSink>(&self, state: &mut TokenizerState, sink: &mut S, ch: char) {
        let phase = state.phase;

        let next = match phase {
            Phase::Start => start_phase(state, ch),
            Phase::OpenBracket => open_bracket_phase(state, ch),
            Phase::ElementName => element_name_phase(state, sink, ch),
            Phase::EndElementName => end_element_name_phase(state, sink, ch),
            Phase::AttributeName => attribute_name_phase(state, ch),
            Phase::EndOfAttributeName => end_of_attribute_name_phase(state, ch),
            Phase::AttributeValue => self.attribute_value_phase(state, ch),
            Phase::ElementCData => element_cdata_phase(state, sink, ch),
            Phase::OtherXml => other_xml_phase(state, sink, ch),
            Phase::CloseElement => close_element_phase(state, sink, ch),
            Phase::Error => Phase::Error,
        };

        trace!(@phase phase => next, ch);

        state.phase = next;
    }

    /// Consumes the longest prefix of `input` that can't change the phase and
    /// returns its length in bytes.
    ///
    /// All the delimiters are ASCII, so the returned length always falls on
    /// a char boundary.
    pub(super) fn consume_run(&self, state: &mut TokenizerState, input: &str) -> usize {
        let bytes = input.as_bytes();

        match state.phase {
            Phase::Start => memchr(b'<', bytes).unwrap_or(bytes.len()),
            Phase::OtherXml => {
                let len = memchr(b'>', bytes).unwrap_or(bytes.len());

                state.push_char_data_str(&input[..len]);
                len
            }
            // NOTE: leading whitespace of a text run is skipped char by char.
            Phase::ElementCData if state.char_data.is_some() => {
                let len = memchr(b'<', bytes).unwrap_or(bytes.len());

                state.push_char_data_str(&input[..len]);
                len
            }
            Phase::AttributeValue => {
                let len = match state.closing_quote {
                    Some(quote) if self.settings.strict_quotes => memchr(quote as u8, bytes),
                    _ => memchr2(b'"', b'\'', bytes),
                }
                .unwrap_or(bytes.len());

                state.attributes.push_value_str(&input[..len]);
                len
            }
            _ => 0,
        }
    }

    #[inline]
    fn attribute_value_phase(&self, state: &mut TokenizerState, ch: char) -> Phase {
        let is_closing_quote = match ch {
            '"' | '\'' => !self.settings.strict_quotes || state.closing_quote == Some(ch),
            _ => false,
        };

        if is_closing_quote {
            state.closing_quote = None;
            Phase::EndElementName
        } else {
            state.attributes.push_value_ch(ch);
            Phase::AttributeValue
        }
    }
}

#[inline]
fn start_phase(state: &mut TokenizerState, ch: char) -> Phase {
    if ch == '<' {
        state.self_closing = false;
        Phase::OpenBracket
    } else {
        Phase::Start
    }
}

#[inline]
fn open_bracket_phase(state: &mut TokenizerState, ch: char) -> Phase {
    match ch {
        '?' | '!' => {
            state.start_char_data(ch);
            Phase::OtherXml
        }
        '/' => {
            state.start_element_name();
            state.self_closing = true;
            Phase::CloseElement
        }
        ch if is_whitespace(ch) => Phase::OpenBracket,
        ch => {
            state.start_element_name();
            state.element_name.push(ch);
            Phase::ElementName
        }
    }
}

#[inline]
fn element_name_phase<S: TokenSink>(state: &mut TokenizerState, sink: &mut S, ch: char) -> Phase {
    match ch {
        ch if is_whitespace(ch) => Phase::EndElementName,
        '/' => {
            state.self_closing = true;
            Phase::ElementName
        }
        // NOTE: attributes are only started after the name is finished, so
        // the attribute buffer is empty here.
        '>' => emit_start_element(state, sink),
        '<' | '?' => Phase::Error,
        ch => {
            state.element_name.push(ch);
            Phase::ElementName
        }
    }
}

#[inline]
fn end_element_name_phase<S: TokenSink>(
    state: &mut TokenizerState,
    sink: &mut S,
    ch: char,
) -> Phase {
    match ch {
        '/' => {
            state.self_closing = true;
            Phase::EndElementName
        }
        '>' => emit_start_element(state, sink),
        ch if is_whitespace(ch) => Phase::EndElementName,
        ch => {
            state.attributes.start_attribute(ch);
            Phase::AttributeName
        }
    }
}

#[inline]
fn attribute_name_phase(state: &mut TokenizerState, ch: char) -> Phase {
    if ch == '=' || is_whitespace(ch) {
        Phase::EndOfAttributeName
    } else {
        state.attributes.push_name_ch(ch);
        Phase::AttributeName
    }
}

#[inline]
fn end_of_attribute_name_phase(state: &mut TokenizerState, ch: char) -> Phase {
    match ch {
        '"' | '\'' => {
            state.attributes.start_value();
            state.closing_quote = Some(ch);
            Phase::AttributeValue
        }
        _ => Phase::EndOfAttributeName,
    }
}

#[inline]
fn element_cdata_phase<S: TokenSink>(state: &mut TokenizerState, sink: &mut S, ch: char) -> Phase {
    if ch == '<' {
        if let Some(text) = state.take_trimmed_char_data() {
            trace!(@emit "element_cdata({:?})", text);
            sink.element_cdata(&text);
        }

        state.self_closing = false;

        Phase::OpenBracket
    } else {
        if state.char_data.is_some() || !is_whitespace(ch) {
            state.push_char_data(ch);
        }

        Phase::ElementCData
    }
}

#[inline]
fn other_xml_phase<S: TokenSink>(state: &mut TokenizerState, sink: &mut S, ch: char) -> Phase {
    if ch == '>' {
        let text = state.char_data.take().unwrap_or_default();

        trace!(@emit "other_xml({:?})", text);
        sink.other_xml(&text);

        Phase::Start
    } else {
        state.push_char_data(ch);
        Phase::OtherXml
    }
}

#[inline]
fn close_element_phase<S: TokenSink>(state: &mut TokenizerState, sink: &mut S, ch: char) -> Phase {
    match ch {
        ch if is_whitespace(ch) => Phase::CloseElement,
        '/' | '<' | '?' => Phase::Error,
        '>' => {
            trace!(@emit "end_element({:?})", state.element_name);
            sink.end_element(&state.element_name);
            state.finish_tag();

            Phase::Start
        }
        ch => {
            state.element_name.push(ch);
            Phase::CloseElement
        }
    }
}

fn emit_start_element<S: TokenSink>(state: &mut TokenizerState, sink: &mut S) -> Phase {
    let attributes = state.attributes.as_attributes();

    trace!(@emit "start_element({:?}, {:?})", state.element_name, attributes);
    sink.start_element(&state.element_name, &attributes);

    let next = if state.self_closing {
        trace!(@emit "end_element({:?})", state.element_name);
        sink.end_element(&state.element_name);

        Phase::Start
    } else {
        Phase::ElementCData
    };

    state.finish_tag();

    next
}
