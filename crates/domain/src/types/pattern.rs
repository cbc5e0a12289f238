//! Shift pattern model
//!
//! A [`Pattern`] is a run-length encoded cycle of days: each
//! [`PatternElement`] covers `span` consecutive days, and after the last
//! element the cycle starts again from the first.

use serde::{Deserialize, Serialize};

use crate::errors::{ChroneyError, Result};
use crate::impl_domain_label_conversions;

/// Whether the days of an element produce calendar output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Days emitted as calendar events
    Event,
    /// Days that only occupy space in the cycle
    Placeholder,
}

impl_domain_label_conversions!(SlotKind, "type" {
    Event => "event",
    Placeholder => "placeholder",
});

/// One segment of the repeating cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternElement {
    #[serde(rename = "type")]
    pub kind: SlotKind,
    pub span: u32,
    #[serde(rename = "desc")]
    pub description: String,
    pub title: String,
}

impl PatternElement {
    pub fn new<T: Into<String>, D: Into<String>>(
        kind: SlotKind,
        span: u32,
        title: T,
        description: D,
    ) -> Self {
        Self { kind, span, description: description.into(), title: title.into() }
    }

    /// An element whose days become calendar events
    pub fn event<T: Into<String>, D: Into<String>>(span: u32, title: T, description: D) -> Self {
        Self::new(SlotKind::Event, span, title, description)
    }

    /// An element whose days are skipped
    pub fn placeholder<T: Into<String>, D: Into<String>>(
        span: u32,
        title: T,
        description: D,
    ) -> Self {
        Self::new(SlotKind::Placeholder, span, title, description)
    }

    pub fn is_event(&self) -> bool {
        self.kind == SlotKind::Event
    }
}

/// Ordered, cyclic sequence of pattern elements
///
/// Serializes as a plain JSON array of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    elements: Vec<PatternElement>,
}

impl Pattern {
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternElement> {
        self.elements.iter()
    }

    /// Reject elements whose span covers no days
    ///
    /// A zero span would silently shift every later element of the cycle, so
    /// projection refuses it up front.
    ///
    /// # Errors
    /// Returns `ChroneyError::Validation` naming the first offending element
    /// as `pattern[i].span`.
    pub fn ensure_positive_spans(&self) -> Result<()> {
        match self.elements.iter().position(|element| element.span == 0) {
            Some(index) => Err(ChroneyError::validation(
                format!("pattern[{index}].span"),
                "span must cover at least one day",
            )),
            None => Ok(()),
        }
    }
}

impl From<Vec<PatternElement>> for Pattern {
    fn from(elements: Vec<PatternElement>) -> Self {
        Self::new(elements)
    }
}

impl FromIterator<PatternElement> for Pattern {
    fn from_iter<I: IntoIterator<Item = PatternElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type IntoIter = std::slice::Iter<'a, PatternElement>;
    type Item = &'a PatternElement;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
