use crate::domain::criteria::{CriteriaConfig, IntRange, WeightConfig};
use crate::domain::model::{Criterion, CriterionMatches, EvaluatedRecord, Metric, StartupRecord};

#[inline]
fn meets_range(metric: &Metric, range: &IntRange) -> bool {
    // 無法解析為整數時視為不符合
    metric.as_int().is_some_and(|value| range.contains(value))
}

/// Match flags for one record. Set membership is exact and case-sensitive.
pub fn match_criteria(record: &StartupRecord, criteria: &CriteriaConfig) -> CriterionMatches {
    CriterionMatches {
        industry: criteria.industries.contains(&record.industry),
        stage: criteria.stages.contains(&record.stage),
        arr: meets_range(&record.arr, &criteria.arr),
        employees: meets_range(&record.employees, &criteria.employees),
        location: criteria.locations.contains(&record.location),
    }
}

/// Sum of the weights of the matched criteria, added in scoring order.
pub fn weighted_score(matches: &CriterionMatches, weights: &WeightConfig) -> f64 {
    Criterion::ALL.iter().fold(0.0, |score, criterion| {
        if matches.get(*criterion) {
            score + weights.get(*criterion)
        } else {
            score
        }
    })
}

pub fn evaluate(
    record: &StartupRecord,
    criteria: &CriteriaConfig,
    weights: &WeightConfig,
) -> EvaluatedRecord {
    let matches = match_criteria(record, criteria);
    let criteria_met = weighted_score(&matches, weights);

    tracing::trace!(
        name = %record.name,
        matched = matches.count(),
        criteria_met,
        "evaluated startup"
    );

    EvaluatedRecord {
        record: record.clone(),
        matches,
        criteria_met,
    }
}

/// Evaluates every record; output order follows input order.
pub fn evaluate_all<'a, I>(
    records: I,
    criteria: &CriteriaConfig,
    weights: &WeightConfig,
) -> Vec<EvaluatedRecord>
where
    I: IntoIterator<Item = &'a StartupRecord>,
{
    records
        .into_iter()
        .map(|record| evaluate(record, criteria, weights))
        .collect()
}
