use crate::cbom_validation::domain::{ObjectField, Presence, Summary, ValidationMessage};
use crate::cbom_validation::services::aggregator::FindingStats;
use indexmap::IndexMap;
use serde_json::Value;

/// Compares the document's self-reported summary against computed statistics.
///
/// Comparison is one-directional and opt-in per key: a key the summary does
/// not report is never flagged as missing, so an empty summary always
/// passes. A key that is present is checked for exact integer equality;
/// present-but-null counts as a wrong value. Breakdown sub-maps are walked
/// in the aggregator's first-seen order for deterministic output.
pub fn compare_summary(stats: &FindingStats, summary: ObjectField<'_>) -> Vec<ValidationMessage> {
    let summary = match summary {
        ObjectField::Missing => return Vec::new(),
        ObjectField::NotAnObject => {
            return vec![ValidationMessage::error("summary is not an object")]
        }
        ObjectField::Object(map) => Summary::new(map),
    };

    let mut messages = Vec::new();

    compare_count(
        &summary,
        "quantum_safe_assets",
        stats.quantum_safe_count,
        &mut messages,
    );
    compare_count(
        &summary,
        "vulnerable_assets",
        stats.vulnerable_count,
        &mut messages,
    );
    compare_count(&summary, "total_assets", stats.total_count, &mut messages);

    compare_breakdown(&summary, "risk_breakdown", &stats.risk_counts, &mut messages);
    compare_breakdown(
        &summary,
        "algorithm_breakdown",
        &stats.algo_counts,
        &mut messages,
    );

    messages
}

fn matches_count(reported: &Value, computed: u64) -> bool {
    reported.as_u64() == Some(computed)
}

fn compare_count(
    summary: &Summary<'_>,
    key: &str,
    computed: u64,
    messages: &mut Vec<ValidationMessage>,
) {
    match summary.count(key) {
        Presence::Absent => {}
        Presence::Null => messages.push(ValidationMessage::error(format!(
            "summary.{}=null != computed {}",
            key, computed
        ))),
        Presence::Value(reported) => {
            if !matches_count(reported, computed) {
                messages.push(ValidationMessage::error(format!(
                    "summary.{}={} != computed {}",
                    key, reported, computed
                )));
            }
        }
    }
}

fn compare_breakdown(
    summary: &Summary<'_>,
    key: &str,
    computed: &IndexMap<String, u64>,
    messages: &mut Vec<ValidationMessage>,
) {
    let reported = match summary.breakdown(key) {
        ObjectField::Missing => return,
        ObjectField::NotAnObject => {
            messages.push(ValidationMessage::error(format!(
                "summary.{} is not an object",
                key
            )));
            return;
        }
        ObjectField::Object(map) => map,
    };

    // Only keys the summary chooses to report (with a non-null value) are
    // checked; computed keys missing from the sub-map are not omissions.
    for (label, count) in computed {
        match Presence::of(reported, label) {
            Presence::Absent | Presence::Null => {}
            Presence::Value(value) => {
                if !matches_count(value, *count) {
                    messages.push(ValidationMessage::error(format!(
                        "summary.{}[{}]={} != computed {}",
                        key, label, value, count
                    )));
                }
            }
        }
    }
}
