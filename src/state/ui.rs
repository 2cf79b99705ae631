#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// View preferences: dark mode and the live search query.
///
/// The query is transient filter input, not roster state; filtering only
/// changes what the grid is handed to render.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub search_query: String,
}
