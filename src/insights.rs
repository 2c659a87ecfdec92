//! Derived "insight" cards: lived duration in alternate units, and the
//! upcoming milestone with its mood label.

use serde::Serialize;

use crate::age::AgeBreakdown;
use crate::format::{format_long_date, format_thousands};

const HOURS_PER_DAY: u64 = 24;
/// Rough average daily heartbeat count. Illustrative, not medically precise.
const HEARTBEATS_PER_DAY: u64 = 104_000;
const LEGACY_AGE: u32 = 50;

/// Shown on an insight card that has no rows.
pub const AWAITING_INSIGHTS_PLACEHOLDER: &str = "Awaiting a valid birth date to unlock insights.";

/// One label/value row of an insight card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightItem {
    pub label: String,
    pub value: String,
}

impl InsightItem {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSignature {
    pub weeks_experienced: u64,
    pub hours_alive: u64,
    pub approx_heartbeats: u64,
}

impl TimeSignature {
    /// `None` when nothing has been lived yet (absent or zero days).
    pub fn from_total_days(total_days_lived: Option<u64>) -> Option<Self> {
        let days = total_days_lived.filter(|&d| d > 0)?;
        Some(Self {
            weeks_experienced: days / 7,
            hours_alive: days.saturating_mul(HOURS_PER_DAY),
            approx_heartbeats: days.saturating_mul(HEARTBEATS_PER_DAY),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MilestoneMood {
    Momentum,
    Legacy,
}

impl MilestoneMood {
    pub fn for_age(milestone_age: u32) -> Self {
        if milestone_age >= LEGACY_AGE {
            MilestoneMood::Legacy
        } else {
            MilestoneMood::Momentum
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MilestoneMood::Momentum => "Momentum phase",
            MilestoneMood::Legacy => "Legacy focus",
        }
    }
}

/// "Time signature" card rows.
pub fn time_signatures(total_days_lived: Option<u64>) -> Vec<InsightItem> {
    let Some(sig) = TimeSignature::from_total_days(total_days_lived) else {
        return Vec::new();
    };

    vec![
        InsightItem::new("Weeks experienced", format_thousands(sig.weeks_experienced)),
        InsightItem::new("Hours alive", format_thousands(sig.hours_alive)),
        InsightItem::new("Approx. heartbeats", format_thousands(sig.approx_heartbeats)),
    ]
}

/// "Precision milestones" card rows; empty when no milestone remains.
pub fn milestone_insights(age: Option<&AgeBreakdown>) -> Vec<InsightItem> {
    let Some(age) = age else {
        return Vec::new();
    };
    let (Some(milestone), Some(date)) = (age.next_milestone_age, age.next_milestone_date) else {
        return Vec::new();
    };

    let remaining = age
        .days_until_next_milestone
        .map(|d| d.to_string())
        .unwrap_or_else(|| "--".to_string());

    vec![
        InsightItem::new(format!("Next milestone: {milestone}"), format_long_date(date)),
        InsightItem::new("Days remaining", remaining),
        InsightItem::new("Seasonal narrative", MilestoneMood::for_age(milestone).label()),
    ]
}
