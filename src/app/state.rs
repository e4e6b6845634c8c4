use crate::api::model::Brewery;
use crate::app::picker::{Picker, PAGE_SIZE};
use crate::app::wizard::{Step, Wizard};
use crate::config::AppConfig;
use crate::presenter::Presentation;
use chrono::Local;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// A submitted result set and the cursor used to pick a website to open.
#[derive(Debug)]
pub struct ResultsView {
    pub presentation: Presentation,
    pub submitted_at: String,
    pub cursor: usize,
}

impl ResultsView {
    pub fn new(presentation: Presentation, submitted_at: String) -> Self {
        Self {
            presentation,
            submitted_at,
            cursor: 0,
        }
    }

    pub fn highlighted(&self) -> Option<&Brewery> {
        self.presentation.records().get(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.presentation.records().len() {
            self.cursor += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        let last = self.presentation.records().len().saturating_sub(1);
        self.cursor = (self.cursor + PAGE_SIZE).min(last);
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.presentation.records().len().saturating_sub(1);
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub wizard: Wizard,
    pub state_picker: Picker,
    pub city_picker: Picker,
    pub results: Option<ResultsView>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let wizard = Wizard::new(config.ui.default_display);
        Self {
            config,
            wizard,
            state_picker: Picker::new(),
            city_picker: Picker::new(),
            results: None,
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_count: 0,
        }
    }

    pub fn timestamp(&self) -> String {
        Local::now().format(&self.config.ui.timestamp_format).to_string()
    }

    pub fn spinner(&self) -> char {
        SPINNER[(self.tick_count as usize / 2) % SPINNER.len()]
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.wizard.step() {
            Step::State if self.wizard.state_fetch_failed() => {
                "Step 1/3: states unavailable, Ctrl+R to try again".to_string()
            }
            Step::State => "Step 1/3: type to filter, Enter to choose a state".to_string(),
            Step::City if self.wizard.city_fetch_failed() => {
                "Step 2/3: cities unavailable, Ctrl+R to start over".to_string()
            }
            Step::City => format!(
                "Step 2/3: choose a city in {}",
                self.wizard.selected_state_name().unwrap_or("?")
            ),
            Step::Option => {
                let loaded = if self.wizard.breweries().is_loading() {
                    "loading breweries...".to_string()
                } else if self.wizard.brewery_fetch_failed() {
                    "brewery lookup failed".to_string()
                } else {
                    format!(
                        "{} breweries loaded",
                        self.wizard.breweries().items().len()
                    )
                };
                format!(
                    "Step 3/3: {}, {}: {}",
                    self.wizard.selected_city().unwrap_or("?"),
                    self.wizard.selected_state().unwrap_or("?"),
                    loaded
                )
            }
        }
    }
}
