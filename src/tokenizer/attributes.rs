use std::fmt::{self, Debug};
use std::iter::FusedIterator;

#[derive(Debug, Clone, Default)]
struct AttributeSlot {
    name: String,
    value: String,
}

/// Growable attribute storage of a [`TokenizerState`].
///
/// Slots are filled front-to-back and reused between tags; the ones past the
/// current attribute are placeholders reserved for amortized growth. Each slot
/// holds a name and a value, so both sides always have the same length.
///
/// [`TokenizerState`]: crate::TokenizerState
#[derive(Clone)]
pub(crate) struct AttributeBuffer {
    slots: Vec<AttributeSlot>,
    current: Option<usize>,
    growth_increment: usize,
}

impl AttributeBuffer {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "Attribute capacity should be validated by settings");

        AttributeBuffer {
            slots: vec![AttributeSlot::default(); capacity],
            current: None,
            growth_increment: capacity,
        }
    }

    /// Number of slots, filled or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.current.map_or(0, |idx| idx + 1)
    }

    pub fn start_attribute(&mut self, first_ch: char) {
        let idx = self.len();

        if idx == self.slots.len() {
            self.grow();
        }

        let slot = &mut self.slots[idx];

        slot.name.clear();
        slot.value.clear();
        slot.name.push(first_ch);

        self.current = Some(idx);
    }

    #[inline]
    pub fn push_name_ch(&mut self, ch: char) {
        if let Some(slot) = self.current_slot_mut() {
            slot.name.push(ch);
        }
    }

    #[inline]
    pub fn start_value(&mut self) {
        if let Some(slot) = self.current_slot_mut() {
            slot.value.clear();
        }
    }

    #[inline]
    pub fn push_value_ch(&mut self, ch: char) {
        if let Some(slot) = self.current_slot_mut() {
            slot.value.push(ch);
        }
    }

    #[inline]
    pub fn push_value_str(&mut self, s: &str) {
        if let Some(slot) = self.current_slot_mut() {
            slot.value.push_str(s);
        }
    }

    /// Forgets filled attributes. Slots and their allocations are kept for
    /// the next tag.
    #[inline]
    pub fn clear(&mut self) {
        self.current = None;
    }

    #[inline]
    pub fn as_attributes(&self) -> Attributes<'_> {
        Attributes {
            slots: &self.slots[..self.len()],
        }
    }

    pub fn buffered_bytes(&self) -> usize {
        self.slots[..self.len()]
            .iter()
            .map(|slot| slot.name.len() + slot.value.len())
            .sum()
    }

    fn grow(&mut self) {
        let new_len = self.slots.len() + self.growth_increment;

        self.slots.resize_with(new_len, AttributeSlot::default);
    }

    #[inline]
    fn current_slot_mut(&mut self) -> Option<&mut AttributeSlot> {
        self.current.map(|idx| &mut self.slots[idx])
    }
}

impl Debug for AttributeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeBuffer")
            .field("attributes", &self.as_attributes())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// A single attribute of a start tag.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    name: &'a str,
    value: &'a str,
}

impl<'a> Attribute<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The raw value, without the surrounding quotes. Entities are not decoded.
    #[inline]
    pub fn value(&self) -> &'a str {
        self.value
    }
}

impl Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.name, self.value)
    }
}

/// Attributes of a start tag, in document order.
///
/// Only filled attributes are exposed, so [`Attributes::len`] is the
/// attribute count regardless of how much storage the tokenizer reserved.
#[derive(Clone, Copy)]
pub struct Attributes<'a> {
    slots: &'a [AttributeSlot],
}

impl<'a> Attributes<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<Attribute<'a>> {
        self.slots.get(idx).map(to_attribute)
    }

    /// Returns the value of the first attribute with the given name.
    pub fn value_of(&self, name: &str) -> Option<&'a str> {
        self.iter().find(|a| a.name() == name).map(|a| a.value())
    }

    #[inline]
    pub fn iter(&self) -> AttributesIter<'a> {
        AttributesIter {
            inner: self.slots.iter(),
        }
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &'a str> + 'a {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &'a str> + 'a {
        self.slots.iter().map(|slot| slot.value.as_str())
    }
}

impl<'a> IntoIterator for &Attributes<'a> {
    type Item = Attribute<'a>;
    type IntoIter = AttributesIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Attributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[inline]
fn to_attribute(slot: &AttributeSlot) -> Attribute<'_> {
    Attribute {
        name: &slot.name,
        value: &slot.value,
    }
}

/// Iterator over [`Attributes`].
#[derive(Clone)]
pub struct AttributesIter<'a> {
    inner: std::slice::Iter<'a, AttributeSlot>,
}

impl<'a> Iterator for AttributesIter<'a> {
    type Item = Attribute<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(to_attribute)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for AttributesIter<'_> {}
impl FusedIterator for AttributesIter<'_> {}
