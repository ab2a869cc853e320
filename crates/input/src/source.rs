//! Per-frame input sources.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_event;
use crate::types::InputEvent;

/// Something the runner can ask for at most one input event per frame.
pub trait InputSource {
    /// Return the next pending event without blocking.
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>>;
}

/// Reads key presses from the terminal via crossterm.
///
/// Unmapped keys, releases and non-key events are skipped. Anything left in
/// the terminal queue after the first mapped press is read on later frames.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Auto-repeat and releases would turn a held key into several moves.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(mapped) = map_event(key) {
                log::trace!("key {:?} -> {:?}", key.code, mapped);
                return Ok(Some(mapped));
            }
        }
        Ok(None)
    }
}

/// Plays back a fixed list of frames; `None` entries are idle frames.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Option<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: Option<InputEvent>) {
        self.frames.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        Ok(self.frames.pop_front().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Key;

    #[test]
    fn test_scripted_input_plays_frames_in_order() {
        let mut input = ScriptedInput::new([
            Some(InputEvent::Key(Key::Confirm)),
            None,
            Some(InputEvent::Close),
        ]);
        assert_eq!(input.remaining(), 3);

        assert_eq!(input.poll_event().unwrap(), Some(InputEvent::Key(Key::Confirm)));
        assert_eq!(input.poll_event().unwrap(), None);
        assert_eq!(input.poll_event().unwrap(), Some(InputEvent::Close));
        assert!(input.is_exhausted());
        assert_eq!(input.poll_event().unwrap(), None);
    }
}
