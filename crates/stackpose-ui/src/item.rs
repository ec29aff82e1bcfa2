//! Items hosted by a widget stack.

/// One card of the stack: a header label plus an opaque content payload.
///
/// The stack never inspects `T`; it only hands it back to the renderer
/// together with the card's visual properties. Identity is the item's
/// position in the sequence, which is supplied once at mount and not
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct StackItem<T> {
    label: String,
    content: T,
}

impl<T> StackItem<T> {
    pub fn new(label: impl Into<String>, content: T) -> Self {
        Self {
            label: label.into(),
            content,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn content(&self) -> &T {
        &self.content
    }
}
