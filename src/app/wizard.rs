//! The three-step selection wizard: state → city → display option.
//!
//! [`Wizard`] owns every piece of per-step data. It never performs I/O itself:
//! transitions that need remote data hand back a [`FetchRequest`], and the
//! result comes back later through the `*_fetched` methods together with the
//! [`RequestToken`] it was issued with. A result whose token is not the one the
//! step is currently waiting on is stale and gets dropped, so a slow response
//! from an abandoned path can never overwrite newer state.

use crate::api::error::ApiError;
use crate::api::model::{Brewery, CityOption, StateOption};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Monotonically increasing id attached to every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    State,
    City,
    Option,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::State => 1,
            Step::City => 2,
            Step::Option => 3,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayType {
    #[default]
    Random,
    List,
}

impl DisplayType {
    pub fn toggled(self) -> Self {
        match self {
            DisplayType::Random => DisplayType::List,
            DisplayType::List => DisplayType::Random,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayType::Random => "Random Brewery",
            DisplayType::List => "List of Breweries",
        }
    }
}

/// Lifecycle of one remotely loaded list.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Idle,
    Loading(RequestToken),
    Ready(Vec<T>),
    Failed(ApiError),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Remote::Failed(_))
    }

    /// Loaded items; empty unless the fetch succeeded.
    pub fn items(&self) -> &[T] {
        match self {
            Remote::Ready(items) => items,
            _ => &[],
        }
    }

    fn awaiting(&self, token: RequestToken) -> bool {
        matches!(self, Remote::Loading(t) if *t == token)
    }

    /// Store a result if it answers the request this slot is waiting on.
    fn settle(&mut self, token: RequestToken, result: Result<Vec<T>, ApiError>) -> bool {
        if !self.awaiting(token) {
            return false;
        }
        *self = match result {
            Ok(items) => Remote::Ready(items),
            Err(err) => Remote::Failed(err),
        };
        true
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    States { token: RequestToken },
    Cities {
        token: RequestToken,
        iso_code: String,
    },
    Breweries { token: RequestToken, city: String },
}

impl FetchRequest {
    pub fn token(&self) -> RequestToken {
        match self {
            FetchRequest::States { token }
            | FetchRequest::Cities { token, .. }
            | FetchRequest::Breweries { token, .. } => *token,
        }
    }
}

/// Finalized snapshot handed to the presenter on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub records: Vec<Brewery>,
    pub display_type: DisplayType,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("step {expected} is not active (currently on step {actual})")]
    WrongStep { expected: Step, actual: Step },
    #[error("unknown state '{0}'")]
    UnknownState(String),
    #[error("unknown city '{0}'")]
    UnknownCity(String),
}

#[derive(Debug)]
pub struct Wizard {
    step: Step,
    selected_state: Option<String>,
    selected_city: Option<String>,
    display_type: DisplayType,
    default_display: DisplayType,
    states: Remote<StateOption>,
    cities: Remote<CityOption>,
    breweries: Remote<Brewery>,
    next_token: u64,
}

impl Wizard {
    pub fn new(default_display: DisplayType) -> Self {
        Self {
            step: Step::State,
            selected_state: None,
            selected_city: None,
            display_type: default_display,
            default_display,
            states: Remote::Idle,
            cities: Remote::Idle,
            breweries: Remote::Idle,
            next_token: 0,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selected_state(&self) -> Option<&str> {
        self.selected_state.as_deref()
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn display_type(&self) -> DisplayType {
        self.display_type
    }

    pub fn states(&self) -> &Remote<StateOption> {
        &self.states
    }

    pub fn cities(&self) -> &Remote<CityOption> {
        &self.cities
    }

    pub fn breweries(&self) -> &Remote<Brewery> {
        &self.breweries
    }

    pub fn state_fetch_failed(&self) -> bool {
        self.states.is_failed()
    }

    pub fn city_fetch_failed(&self) -> bool {
        self.cities.is_failed()
    }

    pub fn brewery_fetch_failed(&self) -> bool {
        self.breweries.is_failed()
    }

    pub fn is_loading(&self) -> bool {
        self.states.is_loading() || self.cities.is_loading() || self.breweries.is_loading()
    }

    /// Display name of the selected state, falling back to its ISO code.
    pub fn selected_state_name(&self) -> Option<&str> {
        let code = self.selected_state.as_deref()?;
        self.states
            .items()
            .iter()
            .find(|s| s.iso_code == code)
            .map(|s| s.name.as_str())
            .or(Some(code))
    }

    /// Start loading the state list unless it is cached or already in flight.
    pub fn mount(&mut self) -> Option<FetchRequest> {
        match &self.states {
            Remote::Loading(_) => None,
            Remote::Ready(items) if !items.is_empty() => None,
            _ => {
                let token = self.issue_token();
                self.states = Remote::Loading(token);
                Some(FetchRequest::States { token })
            }
        }
    }

    pub fn select_state(&mut self, iso_code: &str) -> Result<FetchRequest, WizardError> {
        self.require_step(Step::State)?;
        if !self.states.items().iter().any(|s| s.iso_code == iso_code) {
            return Err(WizardError::UnknownState(iso_code.to_string()));
        }

        self.selected_state = Some(iso_code.to_string());
        self.selected_city = None;
        self.display_type = self.default_display;
        self.breweries = Remote::Idle;

        let token = self.issue_token();
        self.cities = Remote::Loading(token);
        self.step = Step::City;
        Ok(FetchRequest::Cities {
            token,
            iso_code: iso_code.to_string(),
        })
    }

    pub fn select_city(&mut self, name: &str) -> Result<FetchRequest, WizardError> {
        self.require_step(Step::City)?;
        if !self.cities.items().iter().any(|c| c.name == name) {
            return Err(WizardError::UnknownCity(name.to_string()));
        }

        self.selected_city = Some(name.to_string());
        let token = self.issue_token();
        self.breweries = Remote::Loading(token);
        self.step = Step::Option;
        Ok(FetchRequest::Breweries {
            token,
            city: name.to_string(),
        })
    }

    pub fn set_display_type(&mut self, display_type: DisplayType) -> Result<(), WizardError> {
        self.require_step(Step::Option)?;
        self.display_type = display_type;
        Ok(())
    }

    /// Package the current brewery list for the presenter. Does not move the step.
    pub fn submit(&self) -> Result<Submission, WizardError> {
        self.require_step(Step::Option)?;
        Ok(Submission {
            records: self.breweries.items().to_vec(),
            display_type: self.display_type,
            is_error: self.breweries.is_failed(),
        })
    }

    /// Back to step 1. Pending city and brewery requests become stale; the
    /// state list is kept when cached and only requested again when missing.
    pub fn reset(&mut self) -> Option<FetchRequest> {
        self.step = Step::State;
        self.selected_state = None;
        self.selected_city = None;
        self.display_type = self.default_display;
        self.cities = Remote::Idle;
        self.breweries = Remote::Idle;
        self.mount()
    }

    pub fn states_fetched(
        &mut self,
        token: RequestToken,
        result: Result<Vec<StateOption>, ApiError>,
    ) -> bool {
        self.states.settle(token, result)
    }

    pub fn cities_fetched(
        &mut self,
        token: RequestToken,
        result: Result<Vec<CityOption>, ApiError>,
    ) -> bool {
        self.cities.settle(token, result)
    }

    pub fn breweries_fetched(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Brewery>, ApiError>,
    ) -> bool {
        self.breweries.settle(token, result)
    }

    fn require_step(&self, expected: Step) -> Result<(), WizardError> {
        if self.step != expected {
            return Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }
}
