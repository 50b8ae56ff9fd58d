//! Tabular and CSV rendering of battery records.
//!
//! Rendering returns plain `String`s; where they end up (stdout, a file,
//! a spreadsheet) is the caller's business.

use std::fmt::Write as _;
use std::time::Duration;

use crate::generator::CaseProfile;

use super::battery::{ExactTrial, TrialRecord};

/// CSV with one row per trial.
///
/// Columns: `n, profile, exact_ms, approx_ms, exact_objective,
/// approx_objective, gap_percent, discarded`. A skipped exact run leaves
/// its time cell empty and writes `skipped` as the objective; an
/// infeasible one writes `infeasible`. A missing gap renders empty.
pub fn render_csv(records: &[TrialRecord]) -> String {
    let mut csv = String::new();
    writeln!(
        csv,
        "n,profile,exact_ms,approx_ms,exact_objective,approx_objective,gap_percent,discarded"
    )
    .unwrap();
    for record in records {
        let (exact_ms, exact_objective) = exact_cells(record.exact);
        let gap = record
            .gap_percent
            .map(|gap| format!("{:.2}", gap))
            .unwrap_or_default();
        writeln!(
            csv,
            "{},{},{},{:.3},{},{},{},{}",
            record.n,
            record.profile,
            exact_ms,
            millis(record.approx_elapsed),
            exact_objective,
            record.approx_objective,
            gap,
            record.discarded
        )
        .unwrap();
    }
    csv
}

/// Fixed-width table of all trials followed by per-profile aggregates.
pub fn render_summary(records: &[TrialRecord]) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{:<5} {:<12} {:>10} {:>10} {:>11} {:>7} {:>8} {:>10}",
        "n", "profile", "exact_ms", "approx_ms", "exact", "approx", "gap%", "discarded"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(80)).unwrap();
    for record in records {
        let (exact_ms, exact_objective) = exact_cells(record.exact);
        let gap = record
            .gap_percent
            .map(|gap| format!("{:.2}", gap))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<5} {:<12} {:>10} {:>10.3} {:>11} {:>7} {:>8} {:>10}",
            record.n,
            record.profile.name(),
            exact_ms,
            millis(record.approx_elapsed),
            exact_objective,
            record.approx_objective,
            gap,
            record.discarded
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(
        out,
        "{:<12} {:>7} {:>7} {:>11} {:>8} {:>10}",
        "profile", "trials", "solved", "infeasible", "skipped", "mean_gap%"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(60)).unwrap();
    for profile in distinct_profiles(records) {
        let rows: Vec<&TrialRecord> = records.iter().filter(|r| r.profile == profile).collect();
        let solved = rows
            .iter()
            .filter(|r| matches!(r.exact, ExactTrial::Solved { .. }))
            .count();
        let infeasible = rows
            .iter()
            .filter(|r| matches!(r.exact, ExactTrial::Infeasible { .. }))
            .count();
        let skipped = rows
            .iter()
            .filter(|r| matches!(r.exact, ExactTrial::Skipped))
            .count();
        let gaps: Vec<f64> = rows.iter().filter_map(|r| r.gap_percent).collect();
        let mean_gap = if gaps.is_empty() {
            "-".to_string()
        } else {
            format!("{:.2}", gaps.iter().sum::<f64>() / gaps.len() as f64)
        };
        writeln!(
            out,
            "{:<12} {:>7} {:>7} {:>11} {:>8} {:>10}",
            profile.name(),
            rows.len(),
            solved,
            infeasible,
            skipped,
            mean_gap
        )
        .unwrap();
    }
    out
}

fn exact_cells(exact: ExactTrial) -> (String, String) {
    match exact {
        ExactTrial::Skipped => (String::new(), "skipped".to_string()),
        ExactTrial::Infeasible { elapsed } => {
            (format!("{:.3}", millis(elapsed)), "infeasible".to_string())
        }
        ExactTrial::Solved { objective, elapsed } => {
            (format!("{:.3}", millis(elapsed)), objective.to_string())
        }
    }
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

fn distinct_profiles(records: &[TrialRecord]) -> Vec<CaseProfile> {
    let mut seen: Vec<CaseProfile> = Vec::new();
    for record in records {
        if !seen.contains(&record.profile) {
            seen.push(record.profile);
        }
    }
    seen
}
