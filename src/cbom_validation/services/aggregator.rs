use crate::cbom_validation::domain::{Finding, VULN_SEVERITIES};
use indexmap::IndexMap;
use serde_json::Value;

/// Aggregate statistics computed over a `findings` array.
///
/// Histogram keys preserve first-seen order so that report messages are
/// deterministic across repeated runs on the same input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FindingStats {
    /// Count per uppercased risk label.
    pub risk_counts: IndexMap<String, u64>,
    /// Count per raw algorithm name.
    pub algo_counts: IndexMap<String, u64>,
    /// Findings with a vulnerable severity that are not quantum-resistant.
    pub vulnerable_count: u64,
    /// Findings flagged quantum-resistant, independent of severity.
    pub quantum_safe_count: u64,
    /// Total number of findings.
    pub total_count: u64,
}

/// Whether a (normalized) risk label counts toward vulnerable assets.
pub fn is_vulnerable_severity(risk: &str) -> bool {
    VULN_SEVERITIES.contains(&risk)
}

/// Computes all aggregate statistics in a single pass over the findings.
///
/// Malformed individual entries never fail the run; missing fields fall back
/// to the documented defaults. A finding marked quantum-resistant is not
/// counted as vulnerable even at CRITICAL severity - quantum-safety
/// overrides severity for that metric.
pub fn aggregate_findings(findings: &[Value]) -> FindingStats {
    let mut stats = FindingStats::default();

    for raw in findings {
        let finding = Finding::new(raw);

        let risk = finding.risk();
        let quantum_resistant = finding.quantum_resistant();

        *stats.algo_counts.entry(finding.algorithm()).or_insert(0) += 1;

        if quantum_resistant {
            stats.quantum_safe_count += 1;
        }
        if is_vulnerable_severity(&risk) && !quantum_resistant {
            stats.vulnerable_count += 1;
        }

        *stats.risk_counts.entry(risk).or_insert(0) += 1;
        stats.total_count += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cbom_validation::domain::{DEFAULT_ALGORITHM, DEFAULT_RISK};
    use serde_json::json;

    fn findings(value: serde_json::Value) -> Vec<Value> {
        value.as_array().unwrap().clone()
    }

    #[test]
    fn test_empty_findings() {
        let stats = aggregate_findings(&[]);
        assert_eq!(stats, FindingStats::default());
    }

    #[test]
    fn test_counts_risk_case_insensitively() {
        let items = findings(json!([
            {"risk": "high", "algorithm": "RSA"},
            {"risk": "HIGH", "algorithm": "RSA"},
            {"risk": "Low", "algorithm": "AES-256"}
        ]));
        let stats = aggregate_findings(&items);
        assert_eq!(stats.risk_counts.get("HIGH"), Some(&2));
        assert_eq!(stats.risk_counts.get("LOW"), Some(&1));
        assert_eq!(stats.algo_counts.get("RSA"), Some(&2));
        assert_eq!(stats.total_count, 3);
    }

    #[test]
    fn test_missing_fields_use_named_defaults() {
        let items = findings(json!([{}]));
        let stats = aggregate_findings(&items);
        assert_eq!(stats.risk_counts.get(DEFAULT_RISK), Some(&1));
        assert_eq!(stats.algo_counts.get(DEFAULT_ALGORITHM), Some(&1));
        assert_eq!(stats.vulnerable_count, 0);
        assert_eq!(stats.quantum_safe_count, 0);
    }

    #[test]
    fn test_quantum_safety_overrides_severity() {
        // A CRITICAL finding marked quantum-resistant is not vulnerable.
        let items = findings(json!([
            {"risk": "CRITICAL", "quantum_resistant": true}
        ]));
        let stats = aggregate_findings(&items);
        assert_eq!(stats.vulnerable_count, 0);
        assert_eq!(stats.quantum_safe_count, 1);
    }

    #[test]
    fn test_vulnerable_severities() {
        let items = findings(json!([
            {"risk": "CRITICAL"},
            {"risk": "HIGH"},
            {"risk": "MEDIUM"},
            {"risk": "LOW"},
            {"risk": "INFO"}
        ]));
        let stats = aggregate_findings(&items);
        assert_eq!(stats.vulnerable_count, 3);
    }

    #[test]
    fn test_quantum_safe_counts_any_severity() {
        let items = findings(json!([
            {"risk": "LOW", "quantum_resistant": true},
            {"risk": "HIGH", "quantum_resistant": true},
            {"risk": "HIGH", "quantum_resistant": false}
        ]));
        let stats = aggregate_findings(&items);
        assert_eq!(stats.quantum_safe_count, 2);
        assert_eq!(stats.vulnerable_count, 1);
    }

    #[test]
    fn test_histogram_preserves_first_seen_order() {
        let items = findings(json!([
            {"algorithm": "ECDSA"},
            {"algorithm": "RSA"},
            {"algorithm": "ECDSA"},
            {"algorithm": "AES-128"}
        ]));
        let stats = aggregate_findings(&items);
        let order: Vec<&str> = stats.algo_counts.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["ECDSA", "RSA", "AES-128"]);
    }

    #[test]
    fn test_truthy_quantum_resistant_values() {
        // The producer's flag is boolean, but truthy non-boolean values count.
        let items = findings(json!([
            {"quantum_resistant": 1},
            {"quantum_resistant": ""},
            {"quantum_resistant": null}
        ]));
        let stats = aggregate_findings(&items);
        assert_eq!(stats.quantum_safe_count, 1);
    }
}
