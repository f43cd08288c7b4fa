//! Selection controller.
//!
//! [`App`] owns the interaction loop: it draws the current menu, waits for a
//! key, turns it into a [`Message`] and applies it. The three-level drill-down
//! (country, city, protocol) is a sequence of independent menu runs, one fresh
//! [`MenuState`] per stage.

use std::io;

use crossterm::event::KeyEvent;
use ratatui::{backend::Backend, Terminal};

use crate::constants::{
    PAGE_STEP, TITLE_SELECT_CITY_PREFIX, TITLE_SELECT_COUNTRY, TITLE_SELECT_PROTOCOL_PREFIX,
};
use crate::event::{Event, EventSource};
use crate::message::{message_for_key, Message};
use crate::state::{MenuPhase, MenuState, ProfileRef, Protocol, SearchInput, SearchStep};
use crate::ui::{self, menu::MenuView, notice::Notice};
use crate::vpn::ProfileIndex;

/// How the drill-down ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A profile was picked at the protocol stage.
    Chosen(ProfileRef),
    /// The user backed out of the country menu.
    Cancelled,
    /// Ctrl-C at any stage.
    Interrupted,
}

/// Where the drill-down currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    Country,
    City { country: String },
    Protocol { country: String, city: String },
}

/// Shows the cursor for as long as it lives.
///
/// Only created right after a menu frame. Such a frame places no cursor, and
/// ratatui hides the cursor for those, so hiding on drop restores the state
/// the guard found however the search loop ends.
struct CursorGuard<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
}

impl<'a, B: Backend> CursorGuard<'a, B> {
    fn new(terminal: &'a mut Terminal<B>) -> io::Result<Self> {
        terminal.show_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal(&mut self) -> &mut Terminal<B> {
        self.terminal
    }
}

impl<B: Backend> Drop for CursorGuard<'_, B> {
    fn drop(&mut self) {
        let _ = self.terminal.hide_cursor();
    }
}

/// Interactive menu driver over a terminal and an event source.
pub struct App<'t, B: Backend, E: EventSource> {
    terminal: &'t mut Terminal<B>,
    events: E,
}

impl<'t, B: Backend, E: EventSource> App<'t, B, E> {
    pub fn new(terminal: &'t mut Terminal<B>, events: E) -> Self {
        Self { terminal, events }
    }

    /// Walk the user through country, city and protocol.
    ///
    /// The city menu is skipped when the chosen country has a single city.
    /// Backing out of a menu returns to the one before it.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be drawn or input cannot be read.
    pub fn select_profile(&mut self, index: &ProfileIndex) -> io::Result<Selection> {
        let mut stage = Stage::Country;
        loop {
            stage = match stage {
                Stage::Country => {
                    let mut menu = MenuState::new(TITLE_SELECT_COUNTRY, index.countries());
                    match self.run_menu(&mut menu)? {
                        MenuPhase::Resolved(country) => enter_country(index, country),
                        MenuPhase::Interrupted => return Ok(Selection::Interrupted),
                        _ => return Ok(Selection::Cancelled),
                    }
                }
                Stage::City { country } => {
                    let mut menu = MenuState::new(
                        format!("{TITLE_SELECT_CITY_PREFIX}{country}"),
                        index.cities(&country),
                    );
                    match self.run_menu(&mut menu)? {
                        MenuPhase::Resolved(city) => Stage::Protocol { country, city },
                        MenuPhase::Interrupted => return Ok(Selection::Interrupted),
                        _ => Stage::Country,
                    }
                }
                Stage::Protocol { country, city } => {
                    let labels = index
                        .protocols(&country, &city)
                        .into_iter()
                        .map(|p| p.label().to_string())
                        .collect();
                    let mut menu = MenuState::new(
                        format!("{TITLE_SELECT_PROTOCOL_PREFIX}{city}, {country}"),
                        labels,
                    );
                    match self.run_menu(&mut menu)? {
                        MenuPhase::Resolved(label) => {
                            let profile = label
                                .parse::<Protocol>()
                                .ok()
                                .and_then(|p| index.get(&country, &city, p));
                            if let Some(profile) = profile {
                                crate::log_info!(
                                    "MENU",
                                    "Selected {country} / {city} / {label}: {}",
                                    profile.file_name()
                                );
                                return Ok(Selection::Chosen(profile.clone()));
                            }
                            crate::log_error!(
                                "MENU",
                                "No profile for {country} / {city} / {label}"
                            );
                            Stage::Protocol { country, city }
                        }
                        MenuPhase::Interrupted => return Ok(Selection::Interrupted),
                        _ if index.cities(&country).len() == 1 => Stage::Country,
                        _ => Stage::City { country },
                    }
                }
            };
        }
    }

    /// Run one menu until it is resolved, cancelled or interrupted, and
    /// return that final phase.
    pub(crate) fn run_menu(&mut self, menu: &mut MenuState) -> io::Result<MenuPhase> {
        crate::log_debug!(
            "MENU",
            "Opened '{}' with {} options",
            menu.title,
            menu.options().len()
        );

        let mut was_too_small = false;
        while !menu.phase.is_terminal() {
            let view = self.draw_menu(menu)?;

            if let MenuView::TooSmall { width, height } = view {
                if !was_too_small {
                    crate::log_warning!("MENU", "Terminal too small: {width}x{height}");
                }
            }
            was_too_small = view.is_too_small();

            if menu.phase == MenuPhase::Searching {
                self.run_search(menu)?;
                continue;
            }

            match self.events.next()? {
                Event::Key(key) => handle_key(menu, key, &view),
                // Redrawn at the top of the loop
                Event::Resize(width, height) => {
                    crate::log_debug!("MENU", "Resized to {width}x{height}");
                }
            }
        }

        Ok(std::mem::take(&mut menu.phase))
    }

    /// Project, write the adjusted position back, and draw.
    fn draw_menu(&mut self, menu: &mut MenuState) -> io::Result<MenuView> {
        let size = self.terminal.size()?;
        let view = ui::menu::project(size.width, size.height, menu);
        if let MenuView::Menu(layout) = &view {
            menu.selected = layout.selected;
            menu.scroll_offset = layout.scroll_offset;
        }
        self.terminal.draw(|frame| ui::menu::render(frame, &view))?;
        Ok(view)
    }

    /// Capture a query in the search strip, live-filtering the menu.
    fn run_search(&mut self, menu: &mut MenuState) -> io::Result<()> {
        let width = self.terminal.size()?.width;
        if ui::search::strip_width(width).is_none() {
            crate::log_debug!("SEARCH", "Terminal too narrow for the search strip");
            menu.phase = MenuPhase::Browsing;
            return Ok(());
        }

        let mut input = SearchInput::new(&menu.query);
        let outcome = {
            let mut guard = CursorGuard::new(self.terminal)?;
            loop {
                let mut preview = menu.clone();
                preview.set_query(input.query().to_string());
                let size = guard.terminal().size()?;
                let view = ui::menu::project(size.width, size.height, &preview);
                guard
                    .terminal()
                    .draw(|frame| ui::search::render(frame, &view, input.query()))?;

                match self.events.next()? {
                    Event::Key(key) => match input.handle_key(key) {
                        SearchStep::Continue => {}
                        SearchStep::Finished(query) => break Some(query),
                        SearchStep::Interrupted => break None,
                    },
                    Event::Resize(..) => {}
                }
            }
        };

        match outcome {
            Some(query) => {
                if menu.set_query(query) {
                    crate::log_debug!(
                        "SEARCH",
                        "Query '{}' matches {} of {}",
                        menu.query,
                        menu.filtered().len(),
                        menu.options().len()
                    );
                }
                menu.phase = MenuPhase::Browsing;
            }
            None => menu.phase = MenuPhase::Interrupted,
        }
        Ok(())
    }

    /// Show `notice` until any key is pressed.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be drawn or input cannot be read.
    pub fn acknowledge(&mut self, notice: &Notice) -> io::Result<()> {
        loop {
            self.terminal
                .draw(|frame| ui::notice::render(frame, notice))?;
            if let Event::Key(_) = self.events.next()? {
                return Ok(());
            }
        }
    }
}

/// Next stage after a country is picked.
fn enter_country(index: &ProfileIndex, country: String) -> Stage {
    let cities = index.cities(&country);
    if let [only] = cities.as_slice() {
        crate::log_debug!("MENU", "{country} has one city; skipping city menu");
        Stage::Protocol {
            city: only.clone(),
            country,
        }
    } else {
        Stage::City { country }
    }
}

/// Apply one key press to `menu`, given what was last drawn.
pub(crate) fn handle_key(menu: &mut MenuState, key: KeyEvent, view: &MenuView) {
    let Some(msg) = message_for_key(key) else {
        return;
    };
    if view.is_too_small() && !msg.allowed_when_too_small() {
        return;
    }
    if menu.has_no_matches() && !msg.allowed_without_matches() {
        return;
    }
    handle_message(menu, msg);
}

/// Single place where menu state changes.
pub(crate) fn handle_message(menu: &mut MenuState, msg: Message) {
    match msg {
        Message::Move(movement) => {
            let len = menu.filtered().len();
            if len > 0 {
                menu.selected = movement.apply(menu.selected.min(len - 1), len, PAGE_STEP);
            }
        }
        Message::OpenSearch => menu.phase = MenuPhase::Searching,
        Message::Back => {
            if menu.query.is_empty() {
                menu.phase = MenuPhase::Cancelled;
            } else {
                menu.set_query(String::new());
            }
        }
        Message::Select => {
            let choice = menu.filtered().get(menu.selected).map(|s| (*s).to_string());
            if let Some(choice) = choice {
                menu.phase = MenuPhase::Resolved(choice);
            }
        }
        Message::Quit => menu.phase = MenuPhase::Cancelled,
        Message::Interrupt => menu.phase = MenuPhase::Interrupted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ScriptedEvents;
    use crate::ui::{menu::available_lines, test_support::rows};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::path::Path;

    fn index_of(names: &[&str]) -> ProfileIndex {
        ProfileIndex::from_file_names(Path::new("/profiles"), "ovpn", names)
    }

    fn sample_index() -> ProfileIndex {
        index_of(&["USA-NewYork.ovpn", "USA-NewYork-TCP.ovpn", "France-Paris.ovpn"])
    }

    fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chars(text: &str) -> Vec<KeyCode> {
        text.chars().map(KeyCode::Char).collect()
    }

    fn chosen_name(selection: &Selection) -> &str {
        match selection {
            Selection::Chosen(profile) => profile.file_name(),
            other => panic!("expected a chosen profile, got {other:?}"),
        }
    }

    fn menu(options: &[&str]) -> MenuState {
        MenuState::new("Test", options.iter().map(|s| (*s).to_string()).collect())
    }

    fn usable_view(menu: &MenuState) -> MenuView {
        ui::menu::project(80, 24, menu)
    }

    // ---- handle_key ----

    #[test]
    fn test_navigation_boundaries() {
        let mut m = menu(&["a", "b", "c"]);
        let view = usable_view(&m);
        for code in [KeyCode::Up, KeyCode::PageUp, KeyCode::Home] {
            handle_key(&mut m, key(code), &view);
            assert_eq!(m.selected, 0);
        }
        handle_key(&mut m, key(KeyCode::End), &view);
        assert_eq!(m.selected, 2);
        for code in [KeyCode::Down, KeyCode::PageDown, KeyCode::End, KeyCode::Char('j')] {
            handle_key(&mut m, key(code), &view);
            assert_eq!(m.selected, 2);
        }
        handle_key(&mut m, key(KeyCode::Char('k')), &view);
        assert_eq!(m.selected, 1);
        assert_eq!(m.phase, MenuPhase::Browsing);
    }

    #[test]
    fn test_enter_resolves_filtered_selection() {
        let mut m = menu(&["France", "Finland", "USA"]);
        m.set_query("us".to_string());
        let view = usable_view(&m);
        handle_key(&mut m, key(KeyCode::Enter), &view);
        assert_eq!(m.phase, MenuPhase::Resolved("USA".to_string()));
    }

    #[test]
    fn test_escape_clears_query_before_cancelling() {
        let mut m = menu(&["France", "USA"]);
        m.set_query("fr".to_string());
        let view = usable_view(&m);
        handle_key(&mut m, key(KeyCode::Esc), &view);
        assert_eq!(m.query, "");
        assert_eq!(m.phase, MenuPhase::Browsing);
        handle_key(&mut m, key(KeyCode::Esc), &view);
        assert_eq!(m.phase, MenuPhase::Cancelled);
    }

    #[test]
    fn test_no_matches_ignores_navigation_and_select() {
        let mut m = menu(&["France", "USA"]);
        m.set_query("par".to_string());
        let view = usable_view(&m);
        for code in [
            KeyCode::Down,
            KeyCode::Up,
            KeyCode::PageDown,
            KeyCode::End,
            KeyCode::Enter,
        ] {
            handle_key(&mut m, key(code), &view);
            assert_eq!((m.selected, &m.phase), (0, &MenuPhase::Browsing));
        }
        handle_key(&mut m, key(KeyCode::Char('Q')), &view);
        assert_eq!(m.phase, MenuPhase::Cancelled);
    }

    #[test]
    fn test_too_small_only_accepts_quit() {
        let mut m = menu(&["France", "USA"]);
        let view = ui::menu::project(20, 5, &m);
        for code in [KeyCode::Down, KeyCode::Enter, KeyCode::Char('/'), KeyCode::Esc] {
            handle_key(&mut m, key(code), &view);
            assert_eq!((m.selected, &m.phase), (0, &MenuPhase::Browsing));
        }
        handle_key(&mut m, key(KeyCode::Char('q')), &view);
        assert_eq!(m.phase, MenuPhase::Cancelled);
    }

    #[test]
    fn test_unbound_keys_are_no_ops() {
        let mut m = menu(&["a", "b"]);
        let view = usable_view(&m);
        handle_key(&mut m, key(KeyCode::Char('x')), &view);
        handle_key(&mut m, key(KeyCode::Tab), &view);
        assert_eq!((m.selected, &m.phase), (0, &MenuPhase::Browsing));
    }

    // ---- run_menu ----

    #[test]
    fn test_scroll_invariant_through_the_loop() {
        let options: Vec<String> = (0..57).map(|i| format!("Option {i}")).collect();
        let moves = [
            KeyCode::PageDown,
            KeyCode::PageDown,
            KeyCode::Down,
            KeyCode::End,
            KeyCode::PageUp,
            KeyCode::Up,
            KeyCode::Home,
            KeyCode::PageDown,
        ];
        let available = available_lines(24);
        let mut term = terminal(80, 24);

        // Stop after each prefix of moves and check the synced state.
        for n in 1..=moves.len() {
            let mut script: Vec<KeyCode> = moves[..n].to_vec();
            script.push(KeyCode::Char('q'));
            let mut m = MenuState::new("Many", options.clone());
            let mut app = App::new(&mut term, ScriptedEvents::keys(script));
            assert_eq!(app.run_menu(&mut m).unwrap(), MenuPhase::Cancelled);

            assert!(m.scroll_offset <= m.selected, "after {n} moves");
            assert!(m.selected < m.scroll_offset + available, "after {n} moves");
            assert!(m.scroll_offset <= options.len() - available);
        }
    }

    #[test]
    fn test_search_modal_filters_and_resets_position() {
        let mut term = terminal(80, 24);
        let mut script = vec![KeyCode::End, KeyCode::Char('/')];
        script.extend(chars("fin"));
        script.push(KeyCode::Enter);
        script.push(KeyCode::Enter);

        let mut m = menu(&["France", "Finland", "USA"]);
        let mut app = App::new(&mut term, ScriptedEvents::keys(script));
        let phase = app.run_menu(&mut m).unwrap();
        assert_eq!(phase, MenuPhase::Resolved("Finland".to_string()));
        assert_eq!(m.query, "fin");
    }

    #[test]
    fn test_search_unchanged_query_keeps_position() {
        let mut term = terminal(80, 24);
        let mut script = vec![KeyCode::Char('/')];
        script.extend(chars("a"));
        script.extend([KeyCode::Enter, KeyCode::Down, KeyCode::Char('/'), KeyCode::Enter]);
        script.push(KeyCode::Enter);

        let mut m = menu(&["Austria", "Belgium", "Canada"]);
        let mut app = App::new(&mut term, ScriptedEvents::keys(script));
        let phase = app.run_menu(&mut m).unwrap();
        // "a" matches Austria and Canada; reopening without typing keeps Canada selected
        assert_eq!(phase, MenuPhase::Resolved("Canada".to_string()));
    }

    #[test]
    fn test_search_escape_clears_query() {
        let mut term = terminal(80, 24);
        let mut script = vec![KeyCode::Char('/')];
        script.extend(chars("zzz"));
        script.push(KeyCode::Esc);
        script.push(KeyCode::Enter);

        let mut m = menu(&["France", "USA"]);
        let mut app = App::new(&mut term, ScriptedEvents::keys(script));
        let phase = app.run_menu(&mut m).unwrap();
        assert_eq!(phase, MenuPhase::Resolved("France".to_string()));
        assert_eq!(m.query, "");
    }

    #[test]
    fn test_ctrl_c_in_search_interrupts() {
        let mut term = terminal(80, 24);
        let events = ScriptedEvents::new([
            Event::Key(key(KeyCode::Char('/'))),
            Event::Key(key(KeyCode::Char('u'))),
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ]);
        let mut app = App::new(&mut term, events);
        let selection = app.select_profile(&sample_index()).unwrap();
        assert_eq!(selection, Selection::Interrupted);
    }

    #[test]
    fn test_too_small_terminal_waits_for_quit() {
        let mut term = terminal(20, 6);
        let events = ScriptedEvents::keys([
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Char('/'),
            KeyCode::Char('q'),
        ]);
        let mut app = App::new(&mut term, events);
        assert_eq!(app.select_profile(&sample_index()).unwrap(), Selection::Cancelled);
        assert_eq!(app.events.remaining(), 0);
        drop(app);

        let text = rows(term.backend().buffer()).join("\n");
        assert!(text.contains("Resize or press q"));
    }

    #[test]
    fn test_too_small_recovers_after_resize() {
        let mut term = terminal(20, 6);
        let mut m = menu(&["France", "USA"]);
        {
            let events = ScriptedEvents::keys([KeyCode::Down, KeyCode::Enter]);
            let mut app = App::new(&mut term, events);
            // Both keys are swallowed; the script runs dry while still too small
            let err = app.run_menu(&mut m).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        }
        assert_eq!((m.selected, &m.phase), (0, &MenuPhase::Browsing));

        term.backend_mut().resize(80, 24);
        let events = ScriptedEvents::new([
            Event::Resize(80, 24),
            Event::Key(key(KeyCode::Down)),
            Event::Key(key(KeyCode::Enter)),
        ]);
        let mut app = App::new(&mut term, events);
        assert_eq!(
            app.run_menu(&mut m).unwrap(),
            MenuPhase::Resolved("USA".to_string())
        );
        drop(app);

        let rows = rows(term.backend().buffer());
        assert_eq!(rows[1].trim(), "===== Test =====");
    }

    #[test]
    fn test_search_skipped_when_strip_too_narrow() {
        let mut term = terminal(19, 24);
        let mut m = menu(&["France", "USA"]);
        m.query = "fr".to_string();
        m.phase = MenuPhase::Searching;

        let mut app = App::new(&mut term, ScriptedEvents::keys([KeyCode::Char('x')]));
        app.run_search(&mut m).unwrap();
        assert_eq!(m.phase, MenuPhase::Browsing);
        assert_eq!(m.query, "fr");
        // No input was read
        assert_eq!(app.events.remaining(), 1);
    }

    #[test]
    fn test_resize_event_redraws_without_changing_state() {
        let mut term = terminal(80, 24);
        let events = ScriptedEvents::new([
            Event::Resize(80, 24),
            Event::Key(key(KeyCode::Enter)),
        ]);
        let mut m = menu(&["France", "USA"]);
        let mut app = App::new(&mut term, events);
        assert_eq!(
            app.run_menu(&mut m).unwrap(),
            MenuPhase::Resolved("France".to_string())
        );
    }

    // ---- select_profile ----

    #[test]
    fn test_country_menu_is_sorted() {
        let mut term = terminal(80, 24);
        let mut app = App::new(&mut term, ScriptedEvents::keys([KeyCode::Char('q')]));
        assert_eq!(app.select_profile(&sample_index()).unwrap(), Selection::Cancelled);
        drop(app);

        let rows = rows(term.backend().buffer());
        assert_eq!(rows[1].trim(), "===== Select a Country =====");
        assert_eq!(rows[4].trim(), "France");
        assert_eq!(rows[5].trim(), "USA");
    }

    #[test]
    fn test_single_city_skips_to_protocols() {
        let mut term = terminal(80, 24);
        let events = ScriptedEvents::keys([KeyCode::Down, KeyCode::Enter, KeyCode::Char('j')]);
        let mut app = App::new(&mut term, events);
        // Script runs out while the protocol menu is open
        let err = app.select_profile(&sample_index()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        drop(app);

        let rows = rows(term.backend().buffer());
        assert_eq!(rows[1].trim(), "===== Select Protocol for NewYork, USA =====");
        assert_eq!(rows[4].trim(), "UDP");
        assert_eq!(rows[5].trim(), "TCP");
    }

    #[test]
    fn test_full_drill_down_to_tcp_profile() {
        let mut term = terminal(80, 24);
        let events = ScriptedEvents::keys([
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
        ]);
        let mut app = App::new(&mut term, events);
        let selection = app.select_profile(&sample_index()).unwrap();
        assert_eq!(chosen_name(&selection), "USA-NewYork-TCP.ovpn");
        assert_eq!(
            selection,
            Selection::Chosen(ProfileRef::new(Path::new("/profiles"), "USA-NewYork-TCP.ovpn"))
        );
    }

    #[test]
    fn test_no_match_search_then_recover() {
        let mut term = terminal(80, 24);
        let mut script = vec![KeyCode::Char('/')];
        script.extend(chars("par"));
        script.push(KeyCode::Enter);
        // Ignored while nothing matches
        script.extend([KeyCode::Down, KeyCode::End, KeyCode::Enter]);
        // Clear the query, pick France, then its only protocol
        script.extend([KeyCode::Esc, KeyCode::Enter, KeyCode::Enter]);

        let mut app = App::new(&mut term, ScriptedEvents::keys(script));
        let selection = app.select_profile(&sample_index()).unwrap();
        assert_eq!(chosen_name(&selection), "France-Paris.ovpn");
    }

    #[test]
    fn test_no_match_notice_is_drawn() {
        let mut term = terminal(80, 24);
        let mut script = vec![KeyCode::Char('/')];
        script.extend(chars("par"));
        script.push(KeyCode::Enter);

        let mut app = App::new(&mut term, ScriptedEvents::keys(script));
        assert!(app.select_profile(&sample_index()).is_err());
        drop(app);

        let rows = rows(term.backend().buffer());
        assert_eq!(rows[2].trim(), "Search: par");
        assert_eq!(rows[4].trim(), "No matches found");
    }

    #[test]
    fn test_cancel_returns_to_previous_level() {
        let index = index_of(&[
            "Germany-Berlin.ovpn",
            "Germany-Frankfurt.ovpn",
            "Germany-Frankfurt-TCP.ovpn",
            "Spain-Madrid.ovpn",
        ]);
        let mut term = terminal(80, 24);
        let events = ScriptedEvents::keys([
            KeyCode::Enter,     // Germany
            KeyCode::Down,      // Frankfurt
            KeyCode::Enter,     // protocol menu
            KeyCode::Char('q'), // back to cities
            KeyCode::Esc,       // back to countries
            KeyCode::Down,      // Spain
            KeyCode::Enter,     // single city: straight to protocols
            KeyCode::Char('q'), // back to countries
            KeyCode::Home,
            KeyCode::Enter, // Germany again
            KeyCode::Enter, // Berlin
            KeyCode::Enter, // UDP
        ]);
        let mut app = App::new(&mut term, events);
        let selection = app.select_profile(&index).unwrap();
        assert_eq!(chosen_name(&selection), "Germany-Berlin.ovpn");
        assert_eq!(app.events.remaining(), 0);
    }

    #[test]
    fn test_cancel_at_top_level_ends_run() {
        let mut term = terminal(80, 24);
        let mut app = App::new(&mut term, ScriptedEvents::keys([KeyCode::Esc]));
        assert_eq!(app.select_profile(&sample_index()).unwrap(), Selection::Cancelled);
    }

    #[test]
    fn test_acknowledge_waits_for_any_key() {
        let mut term = terminal(60, 12);
        let events = ScriptedEvents::new([
            Event::Resize(60, 12),
            Event::Key(key(KeyCode::Char('x'))),
        ]);
        let notice = Notice::no_profiles(Path::new("/home/u/VPN"));
        let mut app = App::new(&mut term, events);
        app.acknowledge(&notice).unwrap();
        assert_eq!(app.events.remaining(), 0);
        drop(app);

        let text = rows(term.backend().buffer()).join("\n");
        assert!(text.contains("Press any key to exit"));
    }
}
