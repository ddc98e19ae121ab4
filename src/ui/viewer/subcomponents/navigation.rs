// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: the active position in the media sequence.
//!
//! Moves are clamped to `0..len`; there is no wrap-around.

/// Navigation sub-component state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    index: usize,
    len: usize,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Next,
    Previous,
    /// Jump to an index; out-of-range values are ignored.
    Select(usize),
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The active index moved.
    IndexChanged(usize),
}

impl State {
    /// Creates the navigation for `len` items, clamping `start` into range.
    #[must_use]
    pub fn new(len: usize, start: usize) -> Self {
        Self {
            index: start.min(len.saturating_sub(1)),
            len,
        }
    }

    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let target = match msg {
            Message::Next if self.has_next() => self.index + 1,
            Message::Previous if self.has_previous() => self.index - 1,
            Message::Select(index) if index < self.len => index,
            _ => return Effect::None,
        };
        if target == self.index {
            return Effect::None;
        }
        self.index = target;
        Effect::IndexChanged(target)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }
}
