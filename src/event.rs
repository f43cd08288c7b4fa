//! Terminal event source.
//!
//! The menu loop blocks on [`EventSource::next`]; there is no tick. Tests swap
//! in a scripted source so the real loop can be driven key by key.

use std::io;

use crossterm::event::{self as ct, KeyEvent, KeyEventKind};

/// Input the menu loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized to (columns, rows).
    Resize(u16, u16),
}

/// Blocking supplier of [`Event`]s.
pub trait EventSource {
    /// Wait for the next relevant event.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn next(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next(&mut self) -> io::Result<Event> {
        loop {
            match ct::read()? {
                // Release/repeat events are reported on some platforms; act on presses only
                ct::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                ct::Event::Resize(w, h) => return Ok(Event::Resize(w, h)),
                _ => {}
            }
        }
    }
}

/// Pre-recorded events, for driving the menu loop in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: std::collections::VecDeque<Event>,
}

#[cfg(test)]
impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    /// Shorthand for a sequence of unmodified key presses.
    pub fn keys(codes: impl IntoIterator<Item = crossterm::event::KeyCode>) -> Self {
        Self::new(codes.into_iter().map(|code| {
            Event::Key(KeyEvent::new(code, crossterm::event::KeyModifiers::NONE))
        }))
    }

    /// Events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
impl EventSource for ScriptedEvents {
    fn next(&mut self) -> io::Result<Event> {
        self.queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
