use std::io::{self, Write};

use serde::Serialize;

use crate::coloring::palette_usage;
use crate::model::{ColoredMatch, Comparison, MetricType};
use crate::report_helpers::{self, max_display_width, pad_right};

const WIDTH: usize = 72;

/// Render a similarity value: ratios as percentages, token counts as-is,
/// unset values as `-`.
fn format_score(metric: MetricType, value: f64) -> String {
    if value.is_nan() {
        return "-".to_string();
    }
    match metric {
        MetricType::Average | MetricType::Maximum | MetricType::Minimum => {
            format!("{:.1}%", value * 100.0)
        }
        MetricType::Intersection | MetricType::LongestMatch | MetricType::MaximumLength => {
            format!("{value:.0}")
        }
    }
}

fn span(file: &str, start: usize, end: usize) -> String {
    format!("{file} [{start}-{end}]")
}

fn first_span(m: &ColoredMatch) -> String {
    span(&m.region.first_file, m.region.start_in_first, m.region.end_in_first)
}

fn second_span(m: &ColoredMatch) -> String {
    span(
        &m.region.second_file,
        m.region.start_in_second,
        m.region.end_in_second,
    )
}

/// Write the text report: similarity scores, the colored matches in token
/// order and how often each color was used.
pub fn write_summary<W: Write>(
    out: &mut W,
    comparison: &Comparison,
    palette_size: usize,
) -> io::Result<()> {
    let separator = report_helpers::separator(WIDTH);

    writeln!(out, "{separator}")?;
    writeln!(
        out,
        " Comparison: {} vs {}",
        comparison.first_submission_id, comparison.second_submission_id
    )?;
    writeln!(out)?;
    writeln!(out, " Similarity:")?;
    for (metric, value) in &comparison.similarities {
        writeln!(
            out,
            "   {:<16}{:>12}",
            metric.key(),
            format_score(*metric, *value)
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        " Matches: {}   Palette: {} colors",
        comparison.matches.len(),
        palette_size
    )?;

    if !comparison.matches.is_empty() {
        let firsts: Vec<String> = comparison.matches.iter().map(first_span).collect();
        let first_width = max_display_width(firsts.iter().map(String::as_str), 16);

        writeln!(out)?;
        writeln!(
            out,
            " {:>5}  {:>6}  {}  Second submission",
            "Color",
            "Tokens",
            pad_right("First submission", first_width)
        )?;
        for (m, first) in comparison.matches.iter().zip(&firsts) {
            writeln!(
                out,
                " {:>5}  {:>6}  {}  {}",
                m.color_index,
                m.region.tokens,
                pad_right(first, first_width),
                second_span(m)
            )?;
        }

        let usage: Vec<String> = palette_usage(&comparison.matches)
            .iter()
            .enumerate()
            .map(|(color, count)| format!("{color}={count}"))
            .collect();
        writeln!(out)?;
        writeln!(out, " Palette usage: {}", usage.join("  "))?;
    }

    writeln!(out, "{separator}")
}

pub fn print_summary(comparison: &Comparison, palette_size: usize) -> io::Result<()> {
    write_summary(&mut io::stdout().lock(), comparison, palette_size)
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    comparison: &'a Comparison,
    palette_size: usize,
    palette_usage: Vec<usize>,
}

fn json_output(comparison: &Comparison, palette_size: usize) -> JsonOutput<'_> {
    JsonOutput {
        comparison,
        palette_size,
        palette_usage: palette_usage(&comparison.matches),
    }
}

/// Serialize the comparison to pretty JSON. Unset similarity values are
/// written as `null`.
pub fn format_json(
    comparison: &Comparison,
    palette_size: usize,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(serde_json::to_string_pretty(&json_output(
        comparison,
        palette_size,
    ))?)
}

pub fn print_json(
    comparison: &Comparison,
    palette_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", format_json(comparison, palette_size)?);
    Ok(())
}

/// Outcome of coloring one comparison document: its match count or the
/// error message.
pub struct CheckEntry {
    pub file: String,
    pub outcome: Result<usize, String>,
}

pub fn write_check<W: Write>(out: &mut W, entries: &[CheckEntry]) -> io::Result<()> {
    let width = max_display_width(entries.iter().map(|e| e.file.as_str()), 4);
    for entry in entries {
        let file = pad_right(&entry.file, width);
        match &entry.outcome {
            Ok(n) => writeln!(out, " ok    {file}  {n} matches")?,
            Err(err) => writeln!(out, " fail  {file}  {err}")?,
        }
    }
    let failed = entries.iter().filter(|e| e.outcome.is_err()).count();
    writeln!(out)?;
    writeln!(
        out,
        " {} comparisons, {} colored, {} failed",
        entries.len(),
        entries.len() - failed,
        failed
    )
}

pub fn print_check(entries: &[CheckEntry]) -> io::Result<()> {
    write_check(&mut io::stdout().lock(), entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
