//! Initial focus policy
//!
//! On the home location the search input takes focus so the user can type
//! straight away. On a search results location it does not, so that keys
//! act on the page.

/// Location the app opens on when no term is given
pub const HOME_LOCATION: &str = "/elasticbook/";

/// Location the app opens on with `--search <TERM>`
pub const SEARCH_LOCATION: &str = "/elasticbook/search";

const SEARCH_MARKER: &str = "/search";

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    Page,
}

pub fn initial_focus(location: &str) -> Focus {
    if location.contains(SEARCH_MARKER) {
        Focus::Page
    } else {
        Focus::InputField
    }
}

#[cfg(test)]
#[path = "focus_tests.rs"]
mod focus_tests;
