//! `personae-demo` — walks through the people model and prints what it observes.

pub mod config;
pub mod walkthrough;

pub use config::DemoConfig;
pub use walkthrough::{DemoReport, run};
