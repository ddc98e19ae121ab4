// SPDX-License-Identifier: MPL-2.0
//! Fullscreen sub-component.
//!
//! The viewer never sets its own fullscreen flag. It asks the host to change
//! the window mode and mirrors whatever mode the host then observes, so a
//! refused request or a platform-initiated exit is reflected faithfully.

/// Fullscreen sub-component state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    is_fullscreen: bool,
}

/// Messages for the fullscreen sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// User asked to enter or leave fullscreen.
    Toggle,
    /// User asked to leave fullscreen (Escape).
    Exit,
    /// The host observed the window mode.
    Observed(bool),
}

/// Effects produced by fullscreen changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Ask the host to switch the window mode.
    Request(bool),
}

impl State {
    /// Handle a fullscreen message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => Effect::Request(!self.is_fullscreen),
            Message::Exit if self.is_fullscreen => Effect::Request(false),
            Message::Exit => Effect::None,
            Message::Observed(is_fullscreen) => {
                if self.is_fullscreen != is_fullscreen {
                    tracing::debug!(is_fullscreen, "viewer window mode observed");
                }
                self.is_fullscreen = is_fullscreen;
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_only_requests() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Toggle), Effect::Request(true));
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn rejected_request_stays_windowed() {
        let mut state = State::default();
        state.handle(Message::Toggle);
        state.handle(Message::Observed(false));
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn observation_updates_mirror() {
        let mut state = State::default();
        state.handle(Message::Observed(true));
        assert!(state.is_fullscreen());
        assert_eq!(state.handle(Message::Toggle), Effect::Request(false));
    }

    #[test]
    fn exit_when_windowed_does_nothing() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Exit), Effect::None);
    }
}
