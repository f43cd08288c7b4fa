//! Menu state types.

/// Lifecycle of a single menu instance.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum MenuPhase {
    /// Waiting for navigation keys.
    #[default]
    Browsing,
    /// The search modal is capturing the query.
    Searching,
    /// An option was chosen.
    Resolved(String),
    /// The user backed out of this menu.
    Cancelled,
    /// Ctrl-C: abandon the whole drill-down.
    Interrupted,
}

impl MenuPhase {
    /// Whether the menu loop should stop.
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Resolved(_) | Self::Cancelled | Self::Interrupted
        )
    }
}

/// State of one selectable, filterable option list.
///
/// `selected` and `scroll_offset` refer to the filtered view, which is
/// recomputed from `options` and `query` on every render pass.
#[derive(Clone, Debug)]
pub struct MenuState {
    /// Title shown in the header.
    pub title: String,
    options: Vec<String>,
    /// Selected position within the filtered view.
    pub selected: usize,
    /// Active search query (empty when not filtering).
    pub query: String,
    /// First visible position within the filtered view.
    pub scroll_offset: usize,
    /// Where the interaction currently stands.
    pub phase: MenuPhase,
}

impl MenuState {
    /// Create a fresh menu with the first option selected.
    pub fn new(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
            selected: 0,
            query: String::new(),
            scroll_offset: 0,
            phase: MenuPhase::Browsing,
        }
    }

    /// Full, unfiltered option list.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Options matching the current query, in original order.
    pub fn filtered(&self) -> Vec<&str> {
        filter_options(&self.options, &self.query)
    }

    /// Filter is active and nothing matches.
    pub fn has_no_matches(&self) -> bool {
        !self.options.is_empty() && self.filtered().is_empty()
    }

    /// Replace the query. Selection and scroll go back to the top only when
    /// the query actually changed. Returns whether it changed.
    pub fn set_query(&mut self, query: String) -> bool {
        if query == self.query {
            return false;
        }
        self.query = query;
        self.reset_position();
        true
    }

    /// Move selection and scroll back to the first option.
    pub fn reset_position(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }
}

/// Case-insensitive substring filter preserving the original order.
///
/// An empty query lets every option through.
pub fn filter_options<'a>(options: &'a [String], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return options.iter().map(String::as_str).collect();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|opt| opt.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_filter_empty_query_passes_everything() {
        let options = opts(&["France", "USA"]);
        assert_eq!(filter_options(&options, ""), vec!["France", "USA"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let options = opts(&["United Kingdom", "USA", "Australia", "Austria"]);
        assert_eq!(
            filter_options(&options, "US"),
            vec!["USA", "Australia", "Austria"]
        );
        assert_eq!(filter_options(&options, "kINg"), vec!["United Kingdom"]);
    }

    #[test]
    fn test_filter_result_is_subsequence_containing_query() {
        let options = opts(&["Paris", "Lyon", "Parma", "Sparta", "Berlin"]);
        for query in ["par", "a", "n", "zz", "P"] {
            let filtered = filter_options(&options, query);
            let mut cursor = options.iter();
            for item in &filtered {
                assert!(item.to_lowercase().contains(&query.to_lowercase()));
                // Order-preserving: each item appears after the previous one.
                assert!(
                    cursor.any(|o| o.as_str() == *item),
                    "{item} out of order for {query}"
                );
            }
        }
    }

    #[test]
    fn test_no_matches_scenario() {
        let mut menu = MenuState::new("Select a Country", opts(&["France", "USA"]));
        assert!(menu.set_query("par".to_string()));
        assert!(menu.filtered().is_empty());
        assert!(menu.has_no_matches());
    }

    #[test]
    fn test_empty_menu_is_not_a_no_match_state() {
        let menu = MenuState::new("Empty", Vec::new());
        assert!(!menu.has_no_matches());
    }

    #[test]
    fn test_set_query_resets_position_only_on_change() {
        let mut menu = MenuState::new("T", opts(&["a", "b", "c"]));
        menu.selected = 2;
        menu.scroll_offset = 1;

        assert!(!menu.set_query(String::new()));
        assert_eq!((menu.selected, menu.scroll_offset), (2, 1));

        assert!(menu.set_query("b".to_string()));
        assert_eq!((menu.selected, menu.scroll_offset), (0, 0));
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!MenuPhase::Browsing.is_terminal());
        assert!(!MenuPhase::Searching.is_terminal());
        assert!(MenuPhase::Resolved("x".to_string()).is_terminal());
        assert!(MenuPhase::Cancelled.is_terminal());
        assert!(MenuPhase::Interrupted.is_terminal());
    }
}
