//! chronospan CLI
//!
//! Usage:
//!   chronospan --birth 1995-04-15                  - Text report as of today
//!   chronospan -b 1995-04-15 -r 2024-04-15 -f json  - JSON report
//!   chronospan -b 1995-04-15 -f svg -o cards        - Dark/light SVG cards

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chronospan::config::{BIRTH_DATE_ENV, FileConfig, Overrides, Settings};
use chronospan::{Report, svg, try_compute_age_from_str};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Svg,
}

#[derive(Parser)]
#[command(name = "chronospan")]
#[command(about = "Age breakdowns, milestone countdowns and time signatures")]
#[command(version)]
struct Cli {
    /// Birth date (YYYY-MM-DD); falls back to the config file, then $CHRONOSPAN_BIRTH_DATE
    #[arg(short, long)]
    birth: Option<String>,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    reference: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Directory for SVG cards
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => FileConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FileConfig::default(),
    };

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let settings = Settings::resolve(
        Overrides {
            birth_date: cli.birth,
            reference_date: cli.reference,
            out_dir: cli.out_dir,
        },
        file,
        std::env::var(BIRTH_DATE_ENV).ok(),
        &today,
    );

    // Invalid dates are not a failure: the report shows placeholders.
    let age = match try_compute_age_from_str(&settings.birth_date, &settings.reference_date) {
        Ok(age) => Some(age),
        Err(reason) => {
            warn!(%reason, "no age computed");
            None
        }
    };
    let report = Report::new(age);

    match cli.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => {
            println!("{}", report.to_json().context("Failed to serialize report")?)
        }
        OutputFormat::Svg => {
            fs::create_dir_all(&settings.out_dir).with_context(|| {
                format!("Failed to create {}", settings.out_dir.display())
            })?;

            let mut written = Vec::new();
            for &theme in &settings.themes {
                let path = settings.out_dir.join(theme.file_name());
                fs::write(&path, svg::generate_svg(report.age.as_ref(), theme))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), "wrote card");
                written.push(theme.file_name());
            }

            println!("Generated {} successfully.", written.join(" and "));
        }
    }

    Ok(())
}
