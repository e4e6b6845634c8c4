use crate::api::error::ApiError;
use crate::api::model::{Brewery, CityOption, StateOption};
use crate::app::wizard::RequestToken;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Directory fetches finished. `token` identifies the request so stale
    /// answers can be told apart from the one the wizard is waiting on.
    StatesFetched {
        token: RequestToken,
        result: Result<Vec<StateOption>, ApiError>,
    },
    CitiesFetched {
        token: RequestToken,
        result: Result<Vec<CityOption>, ApiError>,
    },
    BreweriesFetched {
        token: RequestToken,
        result: Result<Vec<Brewery>, ApiError>,
    },

    /// Tick for UI refresh
    Tick,
}
