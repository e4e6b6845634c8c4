use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub state_step: Rect,
    pub city_step: Rect,
    pub option_step: Rect,
    pub buttons: Rect,
    pub results: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: wizard | gap | results
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(36), // Wizard
            Constraint::Min(30),    // Results
        ])
        .split(content);

    let wizard = h_chunks[0];
    let results = h_chunks[1];

    // Wizard: step 1 | step 2 | step 3 | buttons
    let wizard_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),   // State list
            Constraint::Fill(1),   // City list
            Constraint::Length(4), // Display options
            Constraint::Length(1), // Buttons
        ])
        .split(wizard);

    AppLayout {
        header,
        state_step: wizard_chunks[0],
        city_step: wizard_chunks[1],
        option_step: wizard_chunks[2],
        buttons: wizard_chunks[3],
        results,
        status_bar,
    }
}
