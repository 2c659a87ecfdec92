//! Terminal and JSON views of an age report.

use serde::Serialize;

use crate::age::{AgeBreakdown, INVALID_INPUT_PLACEHOLDER};
use crate::format::{format_thousands, plural};
use crate::insights::{
    AWAITING_INSIGHTS_PLACEHOLDER, InsightItem, milestone_insights, time_signatures,
};
use crate::svg::build_stat_row;

const TEXT_WIDTH: usize = 48;

/// Everything a front end displays for one (birth, reference) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: String,
    pub age: Option<AgeBreakdown>,
    pub time_signature: Vec<InsightItem>,
    pub milestones: Vec<InsightItem>,
}

impl Report {
    pub fn new(age: Option<AgeBreakdown>) -> Self {
        Self {
            summary: age
                .as_ref()
                .map(AgeBreakdown::summary)
                .unwrap_or_else(|| INVALID_INPUT_PLACEHOLDER.to_string()),
            time_signature: time_signatures(age.map(|a| a.total_days_lived)),
            milestones: milestone_insights(age.as_ref()),
            age,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Current age: {}\n", self.summary));
        if let Some(age) = &self.age {
            out.push_str(&format!(
                "{} day{} lived\n",
                format_thousands(age.total_days_lived),
                plural(age.total_days_lived)
            ));
        }

        let field = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
        out.push('\n');
        for (label, value) in [
            ("Years", field(self.age.map(|a| a.years))),
            ("Months", field(self.age.map(|a| a.months))),
            ("Days", field(self.age.map(|a| a.days))),
        ] {
            push_row(&mut out, label, &value);
        }

        push_card(&mut out, "Time signature", &self.time_signature);
        push_card(&mut out, "Precision milestones", &self.milestones);

        out
    }
}

fn push_row(out: &mut String, label: &str, value: &str) {
    let (k, d, v) = build_stat_row(label, value, TEXT_WIDTH);
    out.push_str(&format!("  {k}{d}{v}\n"));
}

fn push_card(out: &mut String, title: &str, items: &[InsightItem]) {
    out.push_str(&format!("\n{title}\n"));
    if items.is_empty() {
        out.push_str(&format!("  {AWAITING_INSIGHTS_PLACEHOLDER}\n"));
    }
    for item in items {
        push_row(out, &item.label, &item.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::compute_age_from_str;

    #[test]
    fn text_report_for_valid_age() {
        let report = Report::new(compute_age_from_str("1995-04-15", "2024-04-15"));
        let text = report.to_text();

        assert!(text.starts_with("Current age: 29 years 0 months 0 days\n10,593 days lived\n"));
        assert!(text.contains("Years: "));
        assert!(text.contains("\nTime signature\n"));
        assert!(text.contains("Hours alive: "));
        assert!(text.contains("254,232"));
        assert!(text.contains("Seasonal narrative: "));
        assert!(!text.contains(AWAITING_INSIGHTS_PLACEHOLDER));
    }

    #[test]
    fn text_report_placeholder() {
        let report = Report::new(None);
        let text = report.to_text();

        assert!(text.starts_with("Current age: Set a valid birth date\n\n"));
        assert!(text.contains("Years: "));
        assert_eq!(text.matches(AWAITING_INSIGHTS_PLACEHOLDER).count(), 2);
    }

    #[test]
    fn placeholder_report_layout() {
        let text = Report::new(None).to_text();
        let lines: Vec<&str> = text.lines().collect();
        let awaiting = format!("  {AWAITING_INSIGHTS_PLACEHOLDER}");

        assert_eq!(lines.len(), 11, "{text}");
        assert_eq!(lines[0], "Current age: Set a valid birth date");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("  Years: ") && lines[2].ends_with('-'));
        assert!(lines[3].starts_with("  Months: "));
        assert!(lines[4].starts_with("  Days: "));
        assert_eq!(&lines[5..8], &["", "Time signature", awaiting.as_str()]);
        assert_eq!(&lines[8..], &["", "Precision milestones", awaiting.as_str()]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn rows_align_to_width() {
        let report = Report::new(compute_age_from_str("2000-01-01", "2000-01-02"));
        let text = report.to_text();

        assert!(text.contains("1 day lived"));
        for line in text.lines().filter(|l| l.starts_with("  ") && l.contains(": ")) {
            assert_eq!(line.len(), TEXT_WIDTH + 2, "{line:?}");
        }
    }

    #[test]
    fn json_uses_camel_case() {
        let report = Report::new(compute_age_from_str("1995-04-15", "2024-04-15"));
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["summary"], "29 years 0 months 0 days");
        assert_eq!(value["age"]["totalDaysLived"], 10_593);
        assert_eq!(value["age"]["nextMilestoneDate"], "2025-04-15");
        assert_eq!(value["age"]["daysUntilNextMilestone"], 365);
        assert_eq!(value["timeSignature"][0]["label"], "Weeks experienced");
        assert_eq!(value["milestones"][2]["value"], "Momentum phase");
    }

    #[test]
    fn json_null_age() {
        let value: serde_json::Value =
            serde_json::from_str(&Report::new(None).to_json().unwrap()).unwrap();
        assert!(value["age"].is_null());
        assert_eq!(value["timeSignature"].as_array().map(Vec::len), Some(0));
    }
}
