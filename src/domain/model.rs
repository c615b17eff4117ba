use crate::utils::error::MessengerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a recipient set is interpreted: opaque group identifiers or
/// individual addresses/phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientKind {
    Individual,
    Group,
}

impl RecipientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientKind::Individual => "individual",
            RecipientKind::Group => "group",
        }
    }
}

impl fmt::Display for RecipientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipientKind {
    type Err = MessengerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Ok(RecipientKind::Individual),
            "group" => Ok(RecipientKind::Group),
            other => Err(MessengerError::validation(format!(
                "Invalid message type: {}. Must be 'group' or 'individual'",
                other
            ))),
        }
    }
}

/// Email payload: everything needed to notify an agent about a client
/// inquiry for a specific unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientInquiry {
    pub client_name: Option<String>,
    pub phone_number: Option<String>,
    pub chat_description: Option<String>,
    #[serde(default)]
    pub unit_details: UnitDetails,
    pub inquiry_time: Option<String>,
    pub client_request: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitDetails {
    pub project_name: Option<String>,
    pub unit_type: Option<String>,
    pub unit_number: Option<String>,
    pub size: Option<String>,
    pub price: Option<String>,
    pub floor: Option<String>,
}

/// WhatsApp payload: customer contact details plus the unit they asked
/// about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInterest {
    #[serde(default)]
    pub customer: CustomerInfo,
    #[serde(default)]
    pub unit: UnitInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub chat_summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitInfo {
    pub unit_id: Option<String>,
    pub unit_type: Option<String>,
    pub project: Option<String>,
    pub price: Option<String>,
    pub availability: Option<String>,
}

/// Per-recipient result. Created once inside a dispatch call and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    pub success: bool,
    pub error: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub kind: Option<RecipientKind>,
}

impl DeliveryOutcome {
    pub fn succeeded(kind: RecipientKind) -> Self {
        Self {
            success: true,
            error: None,
            timestamp: Some(Utc::now()),
            kind: Some(kind),
        }
    }

    pub fn failed(kind: RecipientKind, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            timestamp: Some(Utc::now()),
            kind: Some(kind),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchEntry {
    pub recipient: String,
    pub outcome: DeliveryOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Percentage in 0..=100, rounded to two decimals. Zero when the
    /// report is empty.
    pub success_rate: f64,
}

/// Aggregate result of one dispatch call. Entry order matches input
/// order; a recipient that appears twice in the input keeps its first
/// position but the later outcome (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReport {
    pub results: Vec<DispatchEntry>,
    pub statistics: DispatchStats,
}

impl DispatchReport {
    pub fn from_entries(results: Vec<DispatchEntry>) -> Self {
        let total = results.len();
        let successful = results.iter().filter(|e| e.outcome.success).count();
        let failed = total - successful;
        let success_rate = if total > 0 {
            let rate = successful as f64 / total as f64 * 100.0;
            (rate * 100.0).round() / 100.0
        } else {
            0.0
        };

        Self {
            results,
            statistics: DispatchStats {
                total,
                successful,
                failed,
                success_rate,
            },
        }
    }

    pub fn outcome_for(&self, recipient: &str) -> Option<&DeliveryOutcome> {
        self.results
            .iter()
            .find(|e| e.recipient == recipient)
            .map(|e| &e.outcome)
    }
}
