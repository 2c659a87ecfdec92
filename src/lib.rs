//! ChronoSpan: age breakdowns, milestone countdowns and time-signature
//! statistics between a birth date and a reference date.

pub mod age;
pub mod config;
pub mod error;
pub mod format;
pub mod insights;
pub mod render;
pub mod svg;

pub use age::{
    AgeBreakdown, INVALID_INPUT_PLACEHOLDER, InvalidInput, MILESTONE_AGES, compute_age,
    compute_age_from_str, next_milestone, parse_date, try_compute_age, try_compute_age_from_str,
};
pub use insights::{InsightItem, MilestoneMood, TimeSignature, milestone_insights, time_signatures};
pub use render::Report;
