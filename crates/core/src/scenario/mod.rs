//! Scenario module - business-driver assumptions for one projection.

mod scenario_model;

pub use scenario_model::Scenario;
