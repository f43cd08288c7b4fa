//! Search query capture state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Outcome of feeding one key to the search input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// Keep capturing.
    Continue,
    /// Modal is over; carry this query back to the menu.
    Finished(String),
    /// Ctrl-C while typing.
    Interrupted,
}

/// Query being typed in the search modal.
#[derive(Clone, Debug, Default)]
pub struct SearchInput {
    query: String,
}

impl SearchInput {
    /// Start capturing from an existing query.
    pub fn new(initial: &str) -> Self {
        Self {
            query: initial.to_string(),
        }
    }

    /// Query typed so far.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> SearchStep {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return SearchStep::Interrupted;
        }

        match key.code {
            KeyCode::Esc => {
                self.query.clear();
                SearchStep::Finished(String::new())
            }
            KeyCode::Enter => SearchStep::Finished(self.query.clone()),
            KeyCode::Backspace | KeyCode::Delete => {
                self.query.pop();
                SearchStep::Continue
            }
            // Printable ASCII only; chords are not text
            KeyCode::Char(c)
                if (' '..='~').contains(&c)
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.query.push(c);
                SearchStep::Continue
            }
            _ => SearchStep::Continue,
        }
    }
}
