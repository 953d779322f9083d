/// A position of the tokenizer's automaton in the grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Outside of any markup. Everything up to the next `<` is ignored.
    #[default]
    Start,
    /// Right after `<`.
    OpenBracket,
    /// Reading the name of a start tag.
    ElementName,
    /// Inside a start tag, between the name or an attribute and the next
    /// attribute or `>`.
    EndElementName,
    AttributeName,
    /// After an attribute name, waiting for the quote opening its value.
    EndOfAttributeName,
    AttributeValue,
    /// Reading character data after a start tag.
    ElementCData,
    /// Reading a `<?...>` or `<!...>` construct.
    OtherXml,
    /// Reading the name of an end tag.
    CloseElement,
    /// Malformed input has been encountered. Terminal for a state.
    Error,
}
