use crate::app::wizard::FetchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Fetch(FetchRequest),
    OpenWebsite { url: String },
    Quit,
}
