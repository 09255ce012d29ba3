use faq_core::UiState;
use faq_engine::PageSink;

const BAR_WIDTH: usize = 30;

/// Renders the form state as one status line per change.
#[derive(Default)]
pub struct TerminalPage {
    last_line: Option<String>,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self { last_line: None }
    }
}

impl PageSink for TerminalPage {
    fn render(&mut self, view: &UiState) {
        let line = render_line(view);
        if self.last_line.as_deref() == Some(line.as_str()) {
            return;
        }
        match &view.error {
            Some(_) => eprintln!("{line}"),
            None => println!("{line}"),
        }
        self.last_line = Some(line);
    }

    fn navigate(&mut self, location: &str) {
        println!("Opening {location}");
    }
}

fn render_line(view: &UiState) -> String {
    if let Some(error) = &view.error {
        return format!("Error: {error}");
    }
    let filled = usize::from(view.progress_percent.min(100)) * BAR_WIDTH / 100;
    let bar = format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled));
    let label = if view.busy_visible {
        view.busy_label.as_str()
    } else {
        "Idle"
    };
    format!(
        "[{bar}] {:>3}% {label} {}",
        view.progress_percent, view.status_text
    )
    .trim_end()
    .to_string()
}
