//! Remote directory layer: HTTP client, wire types, and background fetch tasks.

pub mod client;
pub mod error;
pub mod manager;
pub mod model;
