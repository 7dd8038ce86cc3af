#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the chat widget chrome: window visibility, the name prompt
/// overlay, and the transient notice line.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub window_open: bool,
    pub name_prompt_open: bool,
    /// Auto-dismissing inline notice (e.g. "message not sent"). `None` when
    /// nothing is showing.
    pub notice: Option<String>,
}

impl UiState {
    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
