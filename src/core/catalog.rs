//! Option lists offered by the dashboard, adjustment bounds, and the sample
//! startups a new session starts with.

use crate::domain::model::{Metric, StartupRecord};

pub const INDUSTRIES: [&str; 7] = [
    "Fintech",
    "Healthcare",
    "AI",
    "Crypto / Web3",
    "Enterprise",
    "Consumer",
    "Other",
];

pub const STAGES: [&str; 5] = ["Pre-Seed", "Seed", "Series A", "Series B", "Series C"];

pub const LOCATIONS: [&str; 17] = [
    "USA",
    "Canada",
    "UK",
    "Germany",
    "China",
    "India",
    "Brazil",
    "France",
    "Spain",
    "Australia",
    "Netherlands",
    "South Africa",
    "Singapore",
    "Japan",
    "South Korea",
    "Mexico",
    "Other",
];

pub const WEIGHT_MIN: f64 = 0.0;
pub const WEIGHT_MAX: f64 = 10.0;

pub const ARR_MIN: i64 = 0;
pub const ARR_MAX: i64 = 20_000_000;

pub const EMPLOYEES_MIN: i64 = 0;
pub const EMPLOYEES_MAX: i64 = 500;

fn sample(
    name: &str,
    description: &str,
    industry: &str,
    stage: &str,
    arr: i64,
    employees: i64,
    location: &str,
) -> StartupRecord {
    StartupRecord {
        name: name.to_string(),
        description: description.to_string(),
        industry: industry.to_string(),
        stage: stage.to_string(),
        arr: Metric::Value(arr),
        employees: Metric::Value(employees),
        location: location.to_string(),
    }
}

pub fn sample_startups() -> Vec<StartupRecord> {
    vec![
        sample(
            "ByteBank",
            "Fintech startup focused on payments",
            "Fintech",
            "Seed",
            1_200_000,
            15,
            "USA",
        ),
        sample(
            "MediMatrix",
            "Healthcare startup specializing in diagnostics",
            "Healthcare",
            "Series A",
            3_000_000,
            50,
            "UK",
        ),
        sample(
            "SynthiLogic",
            "AI startup with advanced analytics",
            "AI",
            "Series C",
            10_000_000,
            120,
            "Canada",
        ),
        sample(
            "GreenSphere",
            "Healthcare startup improving patient care",
            "Healthcare",
            "Seed",
            200_000,
            5,
            "Germany",
        ),
        sample(
            "AetherAnalytics",
            "Fintech startup offering financial literacy",
            "Fintech",
            "Series B",
            5_000_000,
            90,
            "USA",
        ),
        sample(
            "PulsePredict",
            "Healthcare startup optimizing telehealth",
            "Healthcare",
            "Pre-Seed",
            9_000,
            1,
            "China",
        ),
        sample(
            "LumenLoop",
            "AI startup disrupting marketing",
            "AI",
            "Series A",
            50_000,
            5,
            "Canada",
        ),
    ]
}

/// Values in `selected` that the catalog does not list.
pub fn unknown_values<'a, I>(selected: I, known: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    selected
        .into_iter()
        .filter(|value| !known.contains(&value.as_str()))
        .cloned()
        .collect()
}
