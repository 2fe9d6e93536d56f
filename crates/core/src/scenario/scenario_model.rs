//! Scenario domain model.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A named bundle of business drivers for one forecast scenario.
///
/// Rates are dimensionless monthly fractions (5% is `0.05`); monetary
/// values are fixed monthly amounts. The engine performs no range
/// validation: any real value, including negative growth or churn above 1,
/// is computed through consistently. Range policy, if any, belongs to the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub name: String,
    /// Monthly net growth of MRR before churn
    pub growth: f64,
    /// Monthly churn rate
    pub churn: f64,
    /// COGS as a fraction of revenue
    pub cogs_pct: f64,
    /// Fixed monthly Opex - R&D
    pub opex_rnd: f64,
    /// Fixed monthly Opex - Sales & Marketing
    pub opex_sm: f64,
    /// Fixed monthly Opex - G&A
    pub opex_ga: f64,
}

impl Scenario {
    /// String-keyed snapshot of the drivers, attached as run metadata.
    pub fn to_metadata(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), json!(self.name));
        map.insert("growth".to_string(), json!(self.growth));
        map.insert("churn".to_string(), json!(self.churn));
        map.insert("cogs_pct".to_string(), json!(self.cogs_pct));
        map.insert("opex_rnd".to_string(), json!(self.opex_rnd));
        map.insert("opex_sm".to_string(), json!(self.opex_sm));
        map.insert("opex_ga".to_string(), json!(self.opex_ga));
        map
    }

    /// Balanced baseline drivers.
    pub fn base() -> Self {
        Self {
            name: "Base".to_string(),
            growth: 0.05,
            churn: 0.03,
            cogs_pct: 0.15,
            opex_rnd: 15_000.0,
            opex_sm: 12_000.0,
            opex_ga: 8_000.0,
        }
    }

    /// Slower growth, heavier churn and cost base.
    pub fn pessimistic() -> Self {
        Self {
            name: "Pessimistic".to_string(),
            growth: 0.03,
            churn: 0.05,
            cogs_pct: 0.17,
            opex_rnd: 16_000.0,
            opex_sm: 13_000.0,
            opex_ga: 9_000.0,
        }
    }

    /// Aggressive growth with a leaner cost base.
    pub fn ambitious() -> Self {
        Self {
            name: "Ambitious".to_string(),
            growth: 0.08,
            churn: 0.02,
            cogs_pct: 0.13,
            opex_rnd: 14_000.0,
            opex_sm: 11_000.0,
            opex_ga: 7_000.0,
        }
    }
}
