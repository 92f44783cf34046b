/// Candidate list and selection of the suggestion dropdown
#[derive(Debug, Clone)]
pub struct AutocompleteState {
    suggestions: Vec<String>,
    selected_index: Option<usize>,
    is_visible: bool,
    /// Highlight the first entry whenever the list opens
    auto_focus: bool,
}

impl AutocompleteState {
    pub fn new(auto_focus: bool) -> Self {
        Self {
            suggestions: Vec::new(),
            selected_index: None,
            is_visible: false,
            auto_focus,
        }
    }

    /// Replace the candidate source
    ///
    /// An empty list closes the popup.
    pub fn update_suggestions(&mut self, suggestions: Vec<String>) {
        if suggestions.is_empty() {
            self.hide();
            return;
        }
        self.suggestions = suggestions;
        self.selected_index = self.auto_focus.then_some(0);
        self.is_visible = true;
    }

    pub fn hide(&mut self) {
        self.suggestions.clear();
        self.selected_index = None;
        self.is_visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected_index
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if !self.is_visible || self.suggestions.is_empty() {
            return;
        }
        let len = self.suggestions.len();
        self.selected_index = Some(match self.selected_index {
            None => 0,
            Some(i) => (i + 1) % len,
        });
    }

    pub fn select_previous(&mut self) {
        if !self.is_visible || self.suggestions.is_empty() {
            return;
        }
        let len = self.suggestions.len();
        self.selected_index = Some(match self.selected_index {
            None | Some(0) => len - 1,
            Some(i) => i - 1,
        });
    }
}

impl Default for AutocompleteState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
