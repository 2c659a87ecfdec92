//! Themed SVG age cards.
//!
//! One monospace column: a header line, the breakdown rows, then one section
//! per insight card. Values are right-aligned with dot leaders so the card
//! reads like a terminal readout.

use serde::Deserialize;

use crate::age::{AgeBreakdown, INVALID_INPUT_PLACEHOLDER};
use crate::format::{format_thousands, plural};
use crate::insights::{AWAITING_INSIGHTS_PLACEHOLDER, milestone_insights, time_signatures};

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_COL_CHARS: usize = 50;
const BOTTOM_PADDING: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

pub struct Palette {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub muted: &'static str,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                muted: "#616e7f",
            },
            Theme::Light => Palette {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                muted: "#6a737d",
            },
        }
    }

    /// Output file name, e.g. `dark_mode.svg`.
    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark_mode.svg",
            Theme::Light => "light_mode.svg",
        }
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Splits a row into (key, dot leader, value) so that every value ends at
/// `align_width` characters.
pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(String),
    Blank,
    Note(String),
    Stat { key: String, value: String },
}

fn card_lines(age: Option<&AgeBreakdown>) -> Vec<Line> {
    let dash = || "-".to_string();
    let mut lines = vec![Line::Header("chronospan".to_string())];

    lines.push(Line::Stat {
        key: "Age".into(),
        value: age
            .map(AgeBreakdown::summary)
            .unwrap_or_else(|| INVALID_INPUT_PLACEHOLDER.to_string()),
    });
    lines.push(Line::Stat {
        key: "Years".into(),
        value: age.map(|a| a.years.to_string()).unwrap_or_else(dash),
    });
    lines.push(Line::Stat {
        key: "Months".into(),
        value: age.map(|a| a.months.to_string()).unwrap_or_else(dash),
    });
    lines.push(Line::Stat {
        key: "Days".into(),
        value: age.map(|a| a.days.to_string()).unwrap_or_else(dash),
    });
    if let Some(age) = age {
        lines.push(Line::Stat {
            key: "Lived".into(),
            value: format!(
                "{} day{}",
                format_thousands(age.total_days_lived),
                plural(age.total_days_lived)
            ),
        });
    }

    let sections = [
        ("- Time signature", time_signatures(age.map(|a| a.total_days_lived))),
        ("- Precision milestones", milestone_insights(age)),
    ];
    for (title, items) in sections {
        lines.push(Line::Blank);
        lines.push(Line::Header(title.to_string()));
        if items.is_empty() {
            lines.push(Line::Note(AWAITING_INSIGHTS_PLACEHOLDER.to_string()));
        }
        for item in items {
            lines.push(Line::Stat {
                key: item.label,
                value: item.value,
            });
        }
    }

    lines
}

// Renders the card body and returns (tspans, width, height)

fn build_column(lines: &[Line]) -> (String, f32, f32) {
    let align_width = lines
        .iter()
        .map(|line| match line {
            Line::Stat { key, value } => key.len() + 2 + value.len(),
            Line::Note(text) => text.len(),
            Line::Header(_) | Line::Blank => 0,
        })
        .max()
        .unwrap_or(0)
        .max(MIN_COL_CHARS);

    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(label) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}">{}</tspan>
"#,
                    escape_xml(&build_header_line(label, align_width))
                ));
            }
            Line::Note(text) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}" class="muted">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
            Line::Stat { key, value } => {
                let (k, d, v) = build_stat_row(key, value, align_width);
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}" class="muted">. </tspan>
<tspan class="key">{}</tspan><tspan class="muted">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(&k),
                    escape_xml(&d),
                    escape_xml(&v)
                ));
            }
        }
    }

    let width = LEFT_PADDING + (align_width as f32) * CHAR_WIDTH + RIGHT_PADDING;
    let height = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32 + BOTTOM_PADDING;

    (tspans, width, height)
}

/// Main SVG generation function. `None` renders the placeholder card.
pub fn generate_svg(age: Option<&AgeBreakdown>, theme: Theme) -> String {
    let palette = theme.palette();
    let (tspans, w, h) = build_column(&card_lines(age));
    let title = escape_xml(
        &age.map(AgeBreakdown::summary)
            .unwrap_or_else(|| INVALID_INPUT_PLACEHOLDER.to_string()),
    );

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">
<title>{title}</title>

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.muted    {{ fill: {muted}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}" xml:space="preserve">
{body}
</text>

</svg>
"#,
        bg = palette.bg,
        text = palette.text,
        key = palette.key,
        value = palette.value,
        muted = palette.muted,
        body = tspans
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::compute_age_from_str;

    #[test]
    fn stat_row_pads_with_dots() {
        let (k, d, v) = build_stat_row("Years", "29", 20);
        assert_eq!(k, "Years: ");
        assert_eq!(d, ".".repeat(20 - 7 - 2));
        assert_eq!(v, "29");
        assert_eq!(k.len() + d.len() + v.len(), 20);
    }

    #[test]
    fn stat_row_short_gaps() {
        assert_eq!(build_stat_row("A", "b", 4).1, "");
        assert_eq!(build_stat_row("A", "b", 5).1, " ");
        assert_eq!(build_stat_row("A", "b", 6).1, ". ");
    }

    #[test]
    fn header_line_is_dashed_to_width() {
        assert_eq!(build_header_line("chronospan", 12), "chronospan ---");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("a<b>&c"), "a&lt;b&gt;&amp;c");
    }

    #[test]
    fn card_shows_breakdown_and_insights() {
        let age = compute_age_from_str("1995-04-15", "2024-04-15").unwrap();
        let svg = generate_svg(Some(&age), Theme::Dark);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("#161b22"));
        assert!(svg.contains("<title>29 years 0 months 0 days</title>"));
        assert!(svg.contains(".muted    { fill: #616e7f; }"));
        assert!(svg.contains("10,593 days"));
        assert!(svg.contains("Weeks experienced: "));
        assert!(svg.contains("Next milestone: 30: "));
        assert!(svg.contains("April 15, 2025"));
        assert!(svg.contains("Momentum phase"));
        assert!(!svg.contains(AWAITING_INSIGHTS_PLACEHOLDER));
    }

    #[test]
    fn card_without_age_shows_placeholders() {
        let svg = generate_svg(None, Theme::Light);

        assert!(svg.contains("#ffffff"));
        assert!(svg.contains(&format!("<title>{INVALID_INPUT_PLACEHOLDER}</title>")));
        assert!(svg.contains(r#"class="muted">Awaiting"#));
        assert_eq!(svg.matches(AWAITING_INSIGHTS_PLACEHOLDER).count(), 2);
        assert!(!svg.contains("Lived: "));
    }

    #[test]
    fn theme_file_names() {
        assert_eq!(Theme::Dark.file_name(), "dark_mode.svg");
        assert_eq!(Theme::Light.file_name(), "light_mode.svg");
    }
}
