//! Card primitive — a bordered container with four stylable slots.
//!
//! Every slot carries a base class; callers append their own classes to
//! override or extend the defaults. Renderers (askama templates, Leptos
//! components) read the resolved class strings and supply the content.

/// One of the four regions of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    /// Outer bordered container.
    Root,
    /// Band above the body, separated by a rule.
    Header,
    /// Heading text inside the header.
    Title,
    /// Card body.
    Content,
}

impl CardSlot {
    #[must_use]
    pub const fn base_class(self) -> &'static str {
        match self {
            Self::Root => "card",
            Self::Header => "card-header",
            Self::Title => "card-title",
            Self::Content => "card-content",
        }
    }
}

/// Join the slot's base class with caller-supplied classes.
#[must_use]
pub fn slot_class(slot: CardSlot, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        slot.base_class().to_string()
    } else {
        format!("{} {extra}", slot.base_class())
    }
}

/// Caller-supplied classes for all four slots of one card.
///
/// Stores only the extras; [`class`](Self::class) resolves them against the
/// slot defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardClasses {
    root: String,
    header: String,
    title: String,
    content: String,
}

impl CardClasses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add classes to the root container.
    #[must_use]
    pub fn with_class(mut self, extra: &str) -> Self {
        self.root = extra.to_string();
        self
    }

    #[must_use]
    pub fn with_header(mut self, extra: &str) -> Self {
        self.header = extra.to_string();
        self
    }

    #[must_use]
    pub fn with_title(mut self, extra: &str) -> Self {
        self.title = extra.to_string();
        self
    }

    #[must_use]
    pub fn with_content(mut self, extra: &str) -> Self {
        self.content = extra.to_string();
        self
    }

    /// The extras set for `slot`, without the base class.
    #[must_use]
    pub fn extra(&self, slot: CardSlot) -> &str {
        match slot {
            CardSlot::Root => &self.root,
            CardSlot::Header => &self.header,
            CardSlot::Title => &self.title,
            CardSlot::Content => &self.content,
        }
    }

    /// Full class list for `slot`.
    #[must_use]
    pub fn class(&self, slot: CardSlot) -> String {
        slot_class(slot, self.extra(slot))
    }

    #[must_use]
    pub fn root(&self) -> String {
        self.class(CardSlot::Root)
    }

    #[must_use]
    pub fn header(&self) -> String {
        self.class(CardSlot::Header)
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.class(CardSlot::Title)
    }

    #[must_use]
    pub fn content(&self) -> String {
        self.class(CardSlot::Content)
    }
}
