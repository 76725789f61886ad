//! Profile badge showing membership in descendants of a group type

pub mod api;
pub mod badge;
pub mod config;
pub mod db;
pub mod group;
pub mod metrics_exporter;
pub mod person;
pub mod supervisor;

pub mod test_helpers;
