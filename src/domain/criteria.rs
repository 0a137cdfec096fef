use crate::domain::model::Criterion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// An inverted range (`min > max`) contains nothing.
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// The acceptance rule set a startup is scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaConfig {
    pub industries: BTreeSet<String>,
    pub stages: BTreeSet<String>,
    pub arr: IntRange,
    pub employees: IntRange,
    pub locations: BTreeSet<String>,
}

fn string_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        Self {
            industries: string_set(&["Fintech", "Healthcare", "AI"]),
            stages: string_set(&["Seed", "Series A", "Series B"]),
            arr: IntRange::new(20_000, 10_000_000),
            employees: IntRange::new(2, 25),
            locations: string_set(&["USA", "Canada"]),
        }
    }
}

impl CriteriaConfig {
    pub fn with_industries<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.industries = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stages<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stages = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_locations<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_arr(mut self, min: i64, max: i64) -> Self {
        self.arr = IntRange::new(min, max);
        self
    }

    pub fn with_employees(mut self, min: i64, max: i64) -> Self {
        self.employees = IntRange::new(min, max);
        self
    }
}

fn default_industry_weight() -> f64 {
    0.5
}

fn default_stage_weight() -> f64 {
    1.0
}

fn default_arr_weight() -> f64 {
    1.5
}

fn default_employees_weight() -> f64 {
    1.0
}

fn default_location_weight() -> f64 {
    0.2
}

/// Importance weight per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    #[serde(default = "default_industry_weight")]
    pub industry: f64,
    #[serde(default = "default_stage_weight")]
    pub stage: f64,
    #[serde(default = "default_arr_weight")]
    pub arr: f64,
    #[serde(default = "default_employees_weight")]
    pub employees: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            industry: default_industry_weight(),
            stage: default_stage_weight(),
            arr: default_arr_weight(),
            employees: default_employees_weight(),
            location: default_location_weight(),
        }
    }
}

impl WeightConfig {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Industry => self.industry,
            Criterion::Stage => self.stage,
            Criterion::Arr => self.arr,
            Criterion::Employees => self.employees,
            Criterion::Location => self.location,
        }
    }

    pub fn set(&mut self, criterion: Criterion, weight: f64) {
        let slot = match criterion {
            Criterion::Industry => &mut self.industry,
            Criterion::Stage => &mut self.stage,
            Criterion::Arr => &mut self.arr,
            Criterion::Employees => &mut self.employees,
            Criterion::Location => &mut self.location,
        };
        *slot = weight;
    }

    /// Highest score any record can reach.
    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        let range = IntRange::new(20_000, 10_000_000);
        assert!(range.contains(20_000));
        assert!(range.contains(10_000_000));
        assert!(!range.contains(19_999));
        assert!(!range.contains(10_000_001));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = IntRange::new(10, 5);
        assert!(!range.contains(7));
        assert!(!range.contains(5));
    }

    #[test]
    fn test_default_weights() {
        let weights = WeightConfig::default();
        assert_eq!(weights.get(Criterion::Industry), 0.5);
        assert_eq!(weights.get(Criterion::Stage), 1.0);
        assert_eq!(weights.get(Criterion::Arr), 1.5);
        assert_eq!(weights.get(Criterion::Employees), 1.0);
        assert_eq!(weights.get(Criterion::Location), 0.2);
        assert!((weights.total() - 4.2).abs() < 1e-9);
    }

    #[test]
    fn test_set_weight() {
        let mut weights = WeightConfig::default();
        weights.set(Criterion::Location, 3.0);
        assert_eq!(weights.location, 3.0);
    }

    #[test]
    fn test_criteria_builders() {
        let criteria = CriteriaConfig::default()
            .with_locations(["USA"])
            .with_employees(0, 500);

        assert!(criteria.locations.contains("USA"));
        assert!(!criteria.locations.contains("Canada"));
        assert_eq!(criteria.employees, IntRange::new(0, 500));
        assert!(criteria.industries.contains("Fintech"));
    }
}
