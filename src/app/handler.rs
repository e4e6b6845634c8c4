use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::picker::{Labeled, Picker};
use crate::app::state::*;
use crate::app::wizard::{DisplayType, Step, WizardError};
use crate::presenter::{self, Presentation};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

/// Apply one event to the state and return the side effects it asks for.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::StatesFetched { token, result } => {
            if state.wizard.states_fetched(token, result) {
                state.state_picker.home();
                state.dirty = true;
            } else {
                debug!(%token, "discarding stale state list");
            }
            vec![]
        }
        AppEvent::CitiesFetched { token, result } => {
            if state.wizard.cities_fetched(token, result) {
                state.city_picker.home();
                state.dirty = true;
            } else {
                debug!(%token, "discarding stale city list");
            }
            vec![]
        }
        AppEvent::BreweriesFetched { token, result } => {
            if state.wizard.breweries_fetched(token, result) {
                state.dirty = true;
            } else {
                debug!(%token, "discarding stale brewery list");
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    // Keep the spinner moving while anything is in flight
    if state.wizard.is_loading() {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return vec![Action::Quit],
            KeyCode::Char('r') => return reset(state),
            _ => return vec![],
        }
    }

    state.status_message = None;
    match state.wizard.step() {
        Step::State => handle_state_step_key(state, key),
        Step::City => handle_city_step_key(state, key),
        Step::Option => handle_option_step_key(state, key),
    }
}

/// Clears selections and results; asks for the state list again only if it
/// is not cached.
pub fn reset(state: &mut AppState) -> Vec<Action> {
    info!("wizard reset");
    state.state_picker.clear();
    state.city_picker.clear();
    state.results = None;
    state.status_message = None;
    state.dirty = true;
    state.wizard.reset().map(Action::Fetch).into_iter().collect()
}

/// Outcome of a key press on a list step.
enum PickerInput {
    Handled,
    Confirm,
}

fn navigate_picker(picker: &mut Picker, total: usize, key: KeyEvent) -> PickerInput {
    match key.code {
        KeyCode::Up => picker.move_up(),
        KeyCode::Down => picker.move_down(total),
        KeyCode::PageUp => picker.page_up(),
        KeyCode::PageDown => picker.page_down(total),
        KeyCode::Home => picker.home(),
        KeyCode::End => picker.end(total),
        KeyCode::Backspace => picker.pop_char(),
        KeyCode::Esc => picker.clear(),
        KeyCode::Char(c) => picker.push_char(c),
        KeyCode::Enter => return PickerInput::Confirm,
        _ => {}
    }
    PickerInput::Handled
}

fn visible_count<T: Labeled>(picker: &Picker, items: &[T]) -> usize {
    picker.visible(items).len()
}

fn handle_state_step_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let total = visible_count(&state.state_picker, state.wizard.states().items());
    match navigate_picker(&mut state.state_picker, total, key) {
        PickerInput::Handled => vec![],
        PickerInput::Confirm => {
            let Some(code) = state
                .state_picker
                .highlighted(state.wizard.states().items())
                .map(|s| s.iso_code.clone())
            else {
                return vec![];
            };
            match state.wizard.select_state(&code) {
                Ok(request) => {
                    info!(state = %code, "state selected");
                    state.city_picker.clear();
                    vec![Action::Fetch(request)]
                }
                Err(e) => reject(state, e),
            }
        }
    }
}

fn handle_city_step_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let total = visible_count(&state.city_picker, state.wizard.cities().items());
    match navigate_picker(&mut state.city_picker, total, key) {
        PickerInput::Handled => vec![],
        PickerInput::Confirm => {
            let Some(city) = state
                .city_picker
                .highlighted(state.wizard.cities().items())
                .map(|c| c.name.clone())
            else {
                return vec![];
            };
            match state.wizard.select_city(&city) {
                Ok(request) => {
                    info!(%city, "city selected");
                    vec![Action::Fetch(request)]
                }
                Err(e) => reject(state, e),
            }
        }
    }
}

fn handle_option_step_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            let next = state.wizard.display_type().toggled();
            set_display_type(state, next)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => set_display_type(state, DisplayType::Random),
        KeyCode::Char('l') | KeyCode::Char('L') => set_display_type(state, DisplayType::List),
        KeyCode::Enter => submit(state),
        KeyCode::Char('o') | KeyCode::Char('O') => open_highlighted(state),
        KeyCode::Up => {
            if let Some(results) = state.results.as_mut() {
                results.move_up();
            }
            vec![]
        }
        KeyCode::Down => {
            if let Some(results) = state.results.as_mut() {
                results.move_down();
            }
            vec![]
        }
        KeyCode::PageUp => {
            if let Some(results) = state.results.as_mut() {
                results.page_up();
            }
            vec![]
        }
        KeyCode::PageDown => {
            if let Some(results) = state.results.as_mut() {
                results.page_down();
            }
            vec![]
        }
        KeyCode::Home => {
            if let Some(results) = state.results.as_mut() {
                results.home();
            }
            vec![]
        }
        KeyCode::End => {
            if let Some(results) = state.results.as_mut() {
                results.end();
            }
            vec![]
        }
        _ => vec![],
    }
}

fn set_display_type(state: &mut AppState, display_type: DisplayType) -> Vec<Action> {
    if let Err(e) = state.wizard.set_display_type(display_type) {
        return reject(state, e);
    }
    vec![]
}

fn submit(state: &mut AppState) -> Vec<Action> {
    match state.wizard.submit() {
        Ok(submission) => {
            let presentation = presenter::present_submission(&submission, &mut rand::rng());
            info!(
                records = submission.records.len(),
                shown = presentation.records().len(),
                display = ?submission.display_type,
                is_error = submission.is_error,
                "results submitted"
            );
            state.results = Some(ResultsView::new(presentation, state.timestamp()));
            vec![]
        }
        Err(e) => reject(state, e),
    }
}

fn open_highlighted(state: &mut AppState) -> Vec<Action> {
    let Some(results) = state.results.as_ref() else {
        state.status_message = Some("Press Enter to see results first".to_string());
        return vec![];
    };
    if matches!(results.presentation, Presentation::Failure | Presentation::NoResults) {
        return vec![];
    }
    match results.highlighted().and_then(|b| b.website()) {
        Some(url) => vec![Action::OpenWebsite {
            url: presenter::absolute_url(url),
        }],
        None => {
            state.status_message = Some(presenter::NO_WEBSITE.to_string());
            vec![]
        }
    }
}

fn reject(state: &mut AppState, err: WizardError) -> Vec<Action> {
    debug!(error = %err, "input rejected");
    state.status_message = Some(err.to_string());
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::api::model::{Brewery, CityOption, StateOption};
    use crate::app::wizard::{FetchRequest, Remote, RequestToken};
    use crate::config::AppConfig;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            assert!(handle_event(state, key(KeyCode::Char(c))).is_empty());
        }
    }

    fn only_fetch(actions: Vec<Action>) -> FetchRequest {
        match actions.as_slice() {
            [Action::Fetch(request)] => request.clone(),
            other => panic!("expected a single fetch, got {:?}", other),
        }
    }

    fn brewery(id: &str, street: Option<&str>, website: Option<&str>) -> Brewery {
        Brewery {
            id: id.to_string(),
            name: format!("Brewery {}", id),
            street: street.map(str::to_string),
            postal_code: "80524".to_string(),
            website_url: website.map(str::to_string),
        }
    }

    fn state_option(iso_code: &str, name: &str) -> StateOption {
        StateOption {
            iso_code: iso_code.to_string(),
            name: name.to_string(),
        }
    }

    fn city_option(id: u64, name: &str) -> CityOption {
        CityOption {
            id,
            name: name.to_string(),
        }
    }

    fn states() -> Vec<StateOption> {
        vec![
            state_option("CA", "California"),
            state_option("CO", "Colorado"),
        ]
    }

    /// Mounted app with states loaded.
    fn app() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        let token = state.wizard.mount().unwrap().token();
        handle_event(
            &mut state,
            AppEvent::StatesFetched {
                token,
                result: Ok(states()),
            },
        );
        state
    }

    fn app_on_option_step() -> (AppState, RequestToken) {
        let mut state = app();
        type_text(&mut state, "colo");
        let cities_token = only_fetch(handle_event(&mut state, key(KeyCode::Enter))).token();
        let cities = vec![city_option(1, "Denver"), city_option(2, "Fort Collins")];
        handle_event(
            &mut state,
            AppEvent::CitiesFetched {
                token: cities_token,
                result: Ok(cities),
            },
        );
        handle_event(&mut state, key(KeyCode::Down));
        let request = only_fetch(handle_event(&mut state, key(KeyCode::Enter)));
        assert_eq!(
            request,
            FetchRequest::Breweries {
                token: request.token(),
                city: "Fort Collins".into(),
            }
        );
        (state, request.token())
    }

    fn breweries_fetched(state: &mut AppState, token: RequestToken, records: Vec<Brewery>) {
        handle_event(
            state,
            AppEvent::BreweriesFetched {
                token,
                result: Ok(records),
            },
        );
    }

    #[test]
    fn test_choose_state_with_filter() {
        let mut state = app();
        type_text(&mut state, "colo");
        let request = only_fetch(handle_event(&mut state, key(KeyCode::Enter)));
        assert!(matches!(request, FetchRequest::Cities { ref iso_code, .. } if iso_code == "CO"));
        assert_eq!(state.wizard.step(), Step::City);
    }

    #[test]
    fn test_enter_with_no_match_does_nothing() {
        let mut state = app();
        type_text(&mut state, "zzz");
        assert!(handle_event(&mut state, key(KeyCode::Enter)).is_empty());
        assert_eq!(state.wizard.step(), Step::State);
    }

    #[test]
    fn test_enter_while_states_loading_does_nothing() {
        let mut state = AppState::new(AppConfig::default());
        state.wizard.mount();
        assert!(handle_event(&mut state, key(KeyCode::Enter)).is_empty());
        assert_eq!(state.wizard.step(), Step::State);
    }

    #[test]
    fn test_filter_typed_while_loading_is_kept() {
        let mut state = AppState::new(AppConfig::default());
        let token = state.wizard.mount().unwrap().token();
        type_text(&mut state, "colo");
        handle_event(
            &mut state,
            AppEvent::StatesFetched {
                token,
                result: Ok(states()),
            },
        );
        assert_eq!(state.state_picker.filter, "colo");
        assert_eq!(state.state_picker.selected, 0);

        let request = only_fetch(handle_event(&mut state, key(KeyCode::Enter)));
        assert!(matches!(request, FetchRequest::Cities { ref iso_code, .. } if iso_code == "CO"));
    }

    #[test]
    fn test_city_filter_typed_while_loading_is_kept() {
        let mut state = app();
        type_text(&mut state, "cal");
        let token = only_fetch(handle_event(&mut state, key(KeyCode::Enter))).token();
        type_text(&mut state, "san");
        handle_event(
            &mut state,
            AppEvent::CitiesFetched {
                token,
                result: Ok(vec![city_option(1, "Oakland"), city_option(2, "San Diego")]),
            },
        );
        assert_eq!(state.city_picker.filter, "san");
        let request = only_fetch(handle_event(&mut state, key(KeyCode::Enter)));
        assert!(matches!(
            request,
            FetchRequest::Breweries { ref city, .. } if city == "San Diego"
        ));
    }

    #[test]
    fn test_option_keys_do_nothing_before_step_three() {
        let mut state = app();
        // 'l' on step one is filter input, not a display toggle.
        handle_event(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.state_picker.filter, "l");
        assert_eq!(state.wizard.display_type(), DisplayType::Random);
        assert!(state.results.is_none());
    }

    #[test]
    fn test_display_toggle_and_submit_list() {
        let (mut state, token) = app_on_option_step();
        let records = vec![
            brewery("a", Some("1 Linden St"), None),
            brewery("b", None, None),
            brewery("c", Some("3 College Ave"), None),
        ];
        breweries_fetched(&mut state, token, records);

        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.wizard.display_type(), DisplayType::List);
        assert!(handle_event(&mut state, key(KeyCode::Enter)).is_empty());

        let results = state.results.as_ref().unwrap();
        let ids: Vec<_> = results
            .presentation
            .records()
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(state.wizard.step(), Step::Option);
    }

    #[test]
    fn test_page_keys_move_results_cursor() {
        let (mut state, token) = app_on_option_step();
        let records: Vec<Brewery> = (0..30)
            .map(|i| brewery(&i.to_string(), Some("1 Linden St"), None))
            .collect();
        breweries_fetched(&mut state, token, records);
        handle_event(&mut state, key(KeyCode::Char('l')));
        handle_event(&mut state, key(KeyCode::Enter));

        handle_event(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.results.as_ref().unwrap().cursor, 10);
        handle_event(&mut state, key(KeyCode::PageDown));
        handle_event(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.results.as_ref().unwrap().cursor, 29);
        handle_event(&mut state, key(KeyCode::PageUp));
        assert_eq!(state.results.as_ref().unwrap().cursor, 19);
        handle_event(&mut state, key(KeyCode::Home));
        assert_eq!(state.results.as_ref().unwrap().cursor, 0);
        handle_event(&mut state, key(KeyCode::PageUp));
        assert_eq!(state.results.as_ref().unwrap().cursor, 0);
    }

    #[test]
    fn test_submit_random_with_single_record() {
        let (mut state, token) = app_on_option_step();
        let only = brewery("a", Some("1 Linden St"), None);
        breweries_fetched(&mut state, token, vec![only.clone()]);
        handle_event(&mut state, key(KeyCode::Char('r')));
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(
            state.results.as_ref().unwrap().presentation,
            Presentation::Single(only)
        );
    }

    #[test]
    fn test_submit_after_brewery_failure_shows_failure() {
        let (mut state, token) = app_on_option_step();
        handle_event(
            &mut state,
            AppEvent::BreweriesFetched {
                token,
                result: Err(ApiError::Status(502)),
            },
        );
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(
            state.results.as_ref().unwrap().presentation,
            Presentation::Failure
        );
    }

    #[test]
    fn test_reset_clears_results_and_selections() {
        let (mut state, token) = app_on_option_step();
        breweries_fetched(&mut state, token, vec![]);
        handle_event(&mut state, key(KeyCode::Char('l')));
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(
            state.results.as_ref().unwrap().presentation,
            Presentation::NoResults
        );

        let actions = handle_event(&mut state, ctrl('r'));
        assert!(actions.is_empty(), "cached states must not be refetched");
        assert!(state.results.is_none());
        assert_eq!(state.wizard.step(), Step::State);
        assert_eq!(state.wizard.selected_state(), None);
        assert_eq!(state.wizard.selected_city(), None);
        assert_eq!(state.wizard.display_type(), DisplayType::Random);
        assert!(state.state_picker.filter.is_empty());
    }

    #[test]
    fn test_reset_refetches_failed_states() {
        let mut state = AppState::new(AppConfig::default());
        let token = state.wizard.mount().unwrap().token();
        handle_event(
            &mut state,
            AppEvent::StatesFetched {
                token,
                result: Err(ApiError::Status(401)),
            },
        );
        assert!(state.wizard.state_fetch_failed());
        let request = only_fetch(handle_event(&mut state, ctrl('r')));
        assert!(matches!(request, FetchRequest::States { .. }));
    }

    #[test]
    fn test_stale_brewery_result_is_ignored() {
        let (mut state, token) = app_on_option_step();
        handle_event(&mut state, ctrl('r'));
        state.dirty = false;
        breweries_fetched(&mut state, token, vec![brewery("x", Some("1 St"), None)]);
        assert_eq!(state.wizard.breweries(), &Remote::Idle);
        assert!(!state.dirty);
    }

    #[test]
    fn test_open_website_of_highlighted_result() {
        let (mut state, token) = app_on_option_step();
        let records = vec![
            brewery("a", Some("1 Linden St"), None),
            brewery("b", Some("2 Linden St"), Some("www.odellbrewing.com")),
        ];
        breweries_fetched(&mut state, token, records);
        handle_event(&mut state, key(KeyCode::Char('l')));
        handle_event(&mut state, key(KeyCode::Enter));

        assert!(handle_event(&mut state, key(KeyCode::Char('o'))).is_empty());
        assert_eq!(state.status_message.as_deref(), Some(presenter::NO_WEBSITE));

        handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Char('o'))),
            vec![Action::OpenWebsite {
                url: "http://www.odellbrewing.com".into()
            }]
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut state = app();
        assert_eq!(handle_event(&mut state, ctrl('c')), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, ctrl('q')), vec![Action::Quit]);
    }

    #[test]
    fn test_tick_marks_dirty_only_while_loading() {
        let mut state = app();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
        assert_eq!(state.tick_count, 1);

        type_text(&mut state, "cal");
        handle_event(&mut state, key(KeyCode::Enter));
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
    }
}
