use faq_core::UiState;

/// Whatever displays the form: receives every changed view and the final navigation.
pub trait PageSink {
    fn render(&mut self, view: &UiState);
    fn navigate(&mut self, location: &str);
}
