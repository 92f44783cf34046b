pub mod autocomplete_render;
mod autocomplete_state;

pub use autocomplete_state::AutocompleteState;
