use std::time::{Duration, Instant};

use crate::autocomplete::AutocompleteState;
use crate::config::Config;
use crate::debouncer::Debouncer;
use crate::focus::{Focus, SEARCH_LOCATION, initial_focus};
use crate::input::InputState;
use crate::results::ResultsState;
use crate::suggest::{SuggestOutcome, SuggestState};

/// Upper bound on how long the event loop waits for input
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub input: InputState,
    pub autocomplete: AutocompleteState,
    pub suggest: SuggestState,
    pub results: ResultsState,
    pub debouncer: Debouncer,
    pub focus: Focus,
    /// Location the app was opened on; drives the initial focus
    pub location: String,
    pub endpoint: Option<String>,
    pub min_length: usize,
    /// Submitting opens a results page when set
    pub search_enabled: bool,
    /// Last suggestion accepted into the input
    pub last_selection: Option<String>,
    /// Submitted term, printed on exit
    pub output: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App; the suggest worker is connected separately
    pub fn new(config: &Config, location: &str) -> Self {
        let suggest = &config.suggest;
        let mut app = Self {
            input: InputState::new(suggest.enabled),
            autocomplete: AutocompleteState::new(suggest.auto_focus),
            suggest: SuggestState::new(),
            results: ResultsState::new(),
            debouncer: Debouncer::new(suggest.delay_ms),
            focus: Focus::InputField,
            location: location.to_string(),
            endpoint: suggest.enabled.then(|| suggest.endpoint.clone()),
            min_length: suggest.min_length,
            search_enabled: config.search.enabled,
            last_selection: None,
            output: None,
            should_quit: false,
        };
        app.set_focus(initial_focus(location));
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the current search term
    pub fn query(&self) -> &str {
        self.input.value()
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.input.set_focused(focus == Focus::InputField);
    }

    pub fn toggle_focus(&mut self) {
        let next = match self.focus {
            Focus::InputField => Focus::Page,
            Focus::Page => Focus::InputField,
        };
        self.set_focus(next);
    }

    /// Called after every edit of the input
    pub fn on_input_changed(&mut self) {
        if self.input.suggest_enabled {
            self.debouncer.schedule_execution();
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Fire the debounced fetch if due, then apply any arrived result
    pub fn tick_at(&mut self, now: Instant) {
        if self.debouncer.should_execute_at(now) {
            self.debouncer.mark_executed();
            self.trigger_suggest();
        }
        self.poll_suggestions();
    }

    /// How long the event loop may block before the next tick
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.debouncer
            .time_until_due(now)
            .map_or(TICK_INTERVAL, |due| due.min(TICK_INTERVAL))
    }

    fn trigger_suggest(&mut self) {
        let term = self.query().to_string();

        if term.chars().count() < self.min_length {
            log::debug!(
                "Term {:?} shorter than {} characters, not suggesting",
                term,
                self.min_length
            );
            self.suggest.cancel_in_flight_request();
            self.autocomplete.hide();
            return;
        }

        if !self.suggest.send_request(term) {
            log::debug!("No suggest worker connected");
        }
    }

    pub fn poll_suggestions(&mut self) {
        while let Some(outcome) = self.suggest.poll_response() {
            match outcome {
                SuggestOutcome::Suggestions(suggestions) => {
                    log::debug!("Showing {} suggestions", suggestions.len());
                    self.autocomplete.update_suggestions(suggestions);
                }
                SuggestOutcome::Failed => self.autocomplete.hide(),
                SuggestOutcome::Results(hits) => {
                    log::info!("Found a total of {} bookmarks", hits.len());
                    self.results.set_hits(hits);
                }
                SuggestOutcome::SearchFailed => self.results.fail(),
            }
        }
    }

    /// Open the results page for `term`
    ///
    /// Returns false when searching is disabled or no worker is connected.
    pub fn search(&mut self, term: &str) -> bool {
        if !self.search_enabled || term.trim().is_empty() {
            return false;
        }
        if !self.suggest.send_search(term.to_string()) {
            return false;
        }

        log::info!("Searching for {}", term);
        self.location = SEARCH_LOCATION.to_string();
        self.results.start(term);
        self.autocomplete.hide();
        self.set_focus(initial_focus(SEARCH_LOCATION));
        true
    }

    /// Copy the highlighted suggestion into the input
    ///
    /// Returns false when nothing is highlighted.
    pub fn accept_suggestion(&mut self) -> bool {
        let Some(selected) = self.autocomplete.selected().map(str::to_string) else {
            return false;
        };

        log::info!("Selected: {}", selected);
        self.input.set_value(&selected);
        self.autocomplete.hide();
        // Accepting is not typing
        self.debouncer.cancel();
        self.suggest.cancel_in_flight_request();
        self.last_selection = Some(selected);
        true
    }

    /// Submit the input: show its results, or finish with the term itself
    pub fn submit(&mut self) {
        let term = self.query().to_string();
        if self.last_selection.as_deref() != Some(term.as_str()) {
            log::info!("Nothing selected, input was {}", term);
        }
        self.debouncer.cancel();
        self.suggest.cancel_in_flight_request();

        if !self.search(&term) {
            self.finish(term);
        }
    }

    /// Finish with the highlighted result's URL, or the term without one
    pub fn open_result(&mut self) {
        let output = match self.results.selected_hit() {
            Some(hit) => {
                log::info!("Opening {}", hit.url);
                hit.url.clone()
            }
            None => self.query().to_string(),
        };
        self.finish(output);
    }

    fn finish(&mut self, output: String) {
        self.suggest.cancel_in_flight_search();
        self.output = Some(output);
        self.should_quit = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
