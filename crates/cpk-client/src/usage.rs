//! Usage statistics wire types and the display-oriented aggregation
//! view over them.
//!
//! `GET /usage` returns a summary of past checks plus a bounded,
//! most-recent-first list of recent records. The summary's counter
//! field names are camelCase while `recent` records use snake_case —
//! both mirrored exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::packet::{Recommendation, SafetyCategory};

/// Aggregate counters for an API key.
///
/// `allow + review + block <= total_checks` is expected but not
/// enforced locally; the server owns the counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub total_checks: u64,
    pub allow: u64,
    pub review: u64,
    pub block: u64,
}

/// One element of the `recent` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub safety_score: f64,
    pub safety_category: SafetyCategory,
    pub recommendation: Recommendation,
    pub compliance_score: f64,
}

/// The full `GET /usage` response.
///
/// Both sections are optional on the wire: a key with no history may
/// come back with either one missing, and that must not be an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    #[serde(default)]
    pub summary: Option<UsageSummary>,
    #[serde(default)]
    pub recent: Vec<UsageRecord>,
}

impl UsageReport {
    /// A display-ready projection over this report. Pure — no network,
    /// no caching.
    pub fn view(&self) -> UsageView<'_> {
        UsageView { report: self }
    }
}

/// Derived, display-ready facts about a usage report.
///
/// Absent counters surface as `None` (rendered `"unknown"`), never as
/// zero — "no data" and "zero events" are different facts.
#[derive(Debug, Clone, Copy)]
pub struct UsageView<'a> {
    report: &'a UsageReport,
}

impl UsageView<'_> {
    /// The most recent check, if any. `recent` is ordered
    /// most-recent-first by the server.
    pub fn most_recent(&self) -> Option<&UsageRecord> {
        self.report.recent.first()
    }

    /// Total number of checks, when the summary is present.
    pub fn total_checks(&self) -> Option<u64> {
        self.report.summary.as_ref().map(|s| s.total_checks)
    }

    /// Count for one recommendation category, when the summary is
    /// present.
    pub fn count_for(&self, recommendation: Recommendation) -> Option<u64> {
        let summary = self.report.summary.as_ref()?;
        Some(match recommendation {
            Recommendation::Allow => summary.allow,
            Recommendation::Review => summary.review,
            Recommendation::Block => summary.block,
        })
    }

    /// Render a counter for display, falling back to `"unknown"` when
    /// the underlying data is absent.
    pub fn display_count(value: Option<u64>) -> String {
        match value {
            Some(n) => n.to_string(),
            None => "unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The example usage response from the API documentation.
    fn docs_fixture() -> &'static str {
        r#"{
            "summary": { "totalChecks": 42, "allow": 30, "review": 8, "block": 4 },
            "recent": [
                {
                    "id": "7b0e9a4e-6f0d-4c5a-9d3e-0a1b2c3d4e5f",
                    "created_at": "2025-11-30T09:19:53.236Z",
                    "safety_score": 0.1,
                    "safety_category": "low_risk",
                    "recommendation": "allow",
                    "compliance_score": 0.9
                },
                {
                    "id": "0c1d2e3f-4a5b-6c7d-8e9f-0a1b2c3d4e5f",
                    "created_at": "2025-11-29T18:02:11.000Z",
                    "safety_score": 0.8,
                    "safety_category": "high_risk",
                    "recommendation": "block",
                    "compliance_score": 0.2
                }
            ]
        }"#
    }

    #[test]
    fn docs_example_report_deserializes() {
        let report: UsageReport = serde_json::from_str(docs_fixture()).expect("report");
        let summary = report.summary.as_ref().expect("summary");
        assert_eq!(summary.total_checks, 42);
        assert_eq!(summary.allow, 30);
        assert_eq!(summary.review, 8);
        assert_eq!(summary.block, 4);
        assert_eq!(report.recent.len(), 2);
    }

    #[test]
    fn most_recent_is_first_record() {
        let report: UsageReport = serde_json::from_str(docs_fixture()).expect("report");
        let view = report.view();
        let recent = view.most_recent().expect("record");
        assert_eq!(recent.recommendation, Recommendation::Allow);
        assert_eq!(recent.safety_category, SafetyCategory::LowRisk);
    }

    #[test]
    fn counts_come_from_summary() {
        let report: UsageReport = serde_json::from_str(docs_fixture()).expect("report");
        let view = report.view();
        assert_eq!(view.total_checks(), Some(42));
        assert_eq!(view.count_for(Recommendation::Allow), Some(30));
        assert_eq!(view.count_for(Recommendation::Review), Some(8));
        assert_eq!(view.count_for(Recommendation::Block), Some(4));
    }

    #[test]
    fn missing_summary_and_recent_tolerated() {
        let report: UsageReport = serde_json::from_str("{}").expect("report");
        let view = report.view();
        assert!(view.most_recent().is_none());
        assert_eq!(view.total_checks(), None);
        assert_eq!(view.count_for(Recommendation::Allow), None);
    }

    #[test]
    fn absent_counters_render_unknown_not_zero() {
        assert_eq!(UsageView::display_count(None), "unknown");
        assert_eq!(UsageView::display_count(Some(0)), "0");
        assert_eq!(UsageView::display_count(Some(42)), "42");
    }
}
