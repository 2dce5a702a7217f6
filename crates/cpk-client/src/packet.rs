//! Compliance packet wire types, as returned by `POST /check`.
//!
//! Field names mirror the server's JSON exactly (camelCase). Fields
//! use `#[serde(default)]` where the server has been observed to omit
//! them; `deny_unknown_fields` is intentionally NOT used so the client
//! survives additive schema evolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Safety risk category assigned by the scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyCategory {
    LowRisk,
    MediumRisk,
    HighRisk,
    /// Forward-compatible catch-all for categories the server
    /// introduces after this client version is deployed.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for SafetyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LowRisk => write!(f, "low_risk"),
            Self::MediumRisk => write!(f, "medium_risk"),
            Self::HighRisk => write!(f, "high_risk"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// The server's decision for a checked piece of content.
///
/// Derived server-side; the client treats it as authoritative and does
/// not re-validate it against the component scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Allow,
    Review,
    Block,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Review => write!(f, "review"),
            Self::Block => write!(f, "block"),
        }
    }
}

/// Safety assessment: score in `[0, 1]` plus category and flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyReport {
    pub score: f64,
    pub category: SafetyCategory,
    #[serde(default)]
    pub flags: Vec<String>,
}

/// Copyright assessment. `risk` is numeric on the wire — integer in
/// older model versions, fractional in newer ones — so it decodes as
/// `f64` to accept both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyrightReport {
    pub risk: f64,
    pub assessment: String,
    #[serde(default)]
    pub reason: String,
}

/// Privacy assessment: PII detection results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyReport {
    pub pii_detected: bool,
    #[serde(default)]
    pub pii_types: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Overall assessment combining the component scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAssessment {
    pub compliance_score: f64,
    pub recommendation: Recommendation,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Packet metadata: input identity and provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacketMeta {
    pub input_id: Uuid,
    pub checked_at: DateTime<Utc>,
    pub model_version: String,
}

/// The full scoring result returned by `POST /check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompliancePacket {
    pub safety: SafetyReport,
    pub copyright: CopyrightReport,
    pub privacy: PrivacyReport,
    pub overall: OverallAssessment,
    pub meta: PacketMeta,
}
