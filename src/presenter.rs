//! Turns a submitted brewery list into what the results pane shows.
//!
//! [`present`] is pure apart from the random source it is given. It runs once
//! per submission; the UI only draws the stored [`Presentation`], so the
//! random pick does not change between frames.

use crate::api::model::Brewery;
use crate::app::wizard::{DisplayType, Submission};
use rand::RngExt;

pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const NO_RESULTS_MESSAGE: &str =
    "No breweries found. Please try again using a different state/city combination";
pub const NO_WEBSITE: &str = "No website found";

#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    Failure,
    NoResults,
    Single(Brewery),
    List(Vec<Brewery>),
}

impl Presentation {
    /// Records shown, in display order.
    pub fn records(&self) -> &[Brewery] {
        match self {
            Presentation::Failure | Presentation::NoResults => &[],
            Presentation::Single(brewery) => std::slice::from_ref(brewery),
            Presentation::List(breweries) => breweries,
        }
    }
}

pub fn present<R: RngExt>(
    records: &[Brewery],
    display_type: DisplayType,
    is_error: bool,
    rng: &mut R,
) -> Presentation {
    let displayable: Vec<&Brewery> = records.iter().filter(|b| b.has_street()).collect();

    if is_error {
        return Presentation::Failure;
    }
    if displayable.is_empty() {
        return Presentation::NoResults;
    }

    match display_type {
        DisplayType::Random => {
            let index = rng.random_range(0..displayable.len());
            Presentation::Single(displayable[index].clone())
        }
        DisplayType::List => Presentation::List(displayable.into_iter().cloned().collect()),
    }
}

pub fn present_submission<R: RngExt>(submission: &Submission, rng: &mut R) -> Presentation {
    present(
        &submission.records,
        submission.display_type,
        submission.is_error,
        rng,
    )
}

/// The three text lines a brewery renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreweryLines {
    pub name: String,
    pub address: String,
    /// Absolute website URL, or `None` for the placeholder.
    pub website: Option<String>,
}

impl BreweryLines {
    pub fn website_text(&self) -> &str {
        self.website.as_deref().unwrap_or(NO_WEBSITE)
    }
}

pub fn brewery_lines(brewery: &Brewery) -> BreweryLines {
    BreweryLines {
        name: brewery.name.clone(),
        address: format!(
            "Address: {}, {}",
            brewery.street.as_deref().unwrap_or_default(),
            brewery.postal_code
        ),
        website: brewery.website().map(absolute_url),
    }
}

/// Bare hosts like `www.example.com` get an `http://` scheme.
pub fn absolute_url(url: &str) -> String {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url.trim_start_matches('/'))
    }
}
