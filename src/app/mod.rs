//! Core application logic: wizard state machine, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod picker;
pub mod state;
pub mod wizard;
