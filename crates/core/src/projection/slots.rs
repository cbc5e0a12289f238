//! Day-slot lookup
//!
//! The run-length encoded pattern is never flattened. Each element keeps the
//! exclusive end of its span within the cycle, and days are resolved against
//! those ends, so memory grows with the element count rather than the spans.

use chroney_domain::{Pattern, PatternElement};

/// Maps a day of the cycle to the element whose span covers it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlots<'a> {
    elements: Vec<&'a PatternElement>,
    ends: Vec<u64>,
}

impl<'a> DaySlots<'a> {
    /// Index `pattern` so that day `i` of the cycle resolves to the element
    /// covering it
    pub fn expand(pattern: &'a Pattern) -> Self {
        let mut total = 0u64;
        let (elements, ends) = pattern
            .iter()
            .map(|element| {
                total += u64::from(element.span);
                (element, total)
            })
            .unzip();
        Self { elements, ends }
    }

    /// Days in one cycle
    pub fn len(&self) -> u64 {
        self.ends.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, day: u64) -> Option<&'a PatternElement> {
        let index = self.ends.partition_point(|end| *end <= day);
        self.elements.get(index).copied()
    }

    /// Endless walk over the cycle starting at day `origin`
    ///
    /// `origin` past the end is taken modulo the cycle length. An empty
    /// cycle yields nothing.
    pub fn cycle_from(&self, origin: u64) -> CycleWalk<'_, 'a> {
        let length = self.len();
        if length == 0 {
            return CycleWalk { slots: self, element: 0, remaining: 0 };
        }

        let origin = origin % length;
        let element = self.ends.partition_point(|end| *end <= origin);
        CycleWalk { slots: self, element, remaining: self.ends[element] - origin }
    }
}

/// Iterator returned by [`DaySlots::cycle_from`]
#[derive(Debug, Clone)]
pub struct CycleWalk<'s, 'a> {
    slots: &'s DaySlots<'a>,
    element: usize,
    remaining: u64,
}

impl<'a> Iterator for CycleWalk<'_, 'a> {
    type Item = &'a PatternElement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slots.is_empty() {
            return None;
        }

        // zero-span elements are skipped
        while self.remaining == 0 {
            self.element = (self.element + 1) % self.slots.elements.len();
            self.remaining = u64::from(self.slots.elements[self.element].span);
        }

        self.remaining -= 1;
        Some(self.slots.elements[self.element])
    }
}
