//! Hot-seat terminal frontend built on ratatui.

pub mod app;
pub mod controller;
pub mod ui;
