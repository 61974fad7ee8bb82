//! Command implementations.
//!
//! Each command takes already-parsed values and returns the text to print.
//! Nothing here touches stdin or stdout.

use crate::colors::Palette;
use crate::config::{OutputFormat, TallyConfig};
use crate::error::CliError;
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;
use tally_core::{
    selection_sort_with_stats, ByteFrequency, FrequencyEntry, FrequencyTable, QueryAnswer,
    SortStats,
};

/// How command output is rendered.
#[derive(Debug, Clone, Copy)]
pub struct Render {
    pub format: OutputFormat,
    pub palette: Palette,
}

impl Render {
    pub fn text(color: bool) -> Self {
        Self {
            format: OutputFormat::Text,
            palette: Palette::new(color),
        }
    }

    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
            palette: Palette::new(false),
        }
    }

    /// Merge the `--json` and `--no-color` flags over the config file.
    /// A flag can only switch JSON on or color off; JSON output is never
    /// colored.
    pub fn resolve(config: &TallyConfig, json: bool, no_color: bool) -> Self {
        if json || config.output.format == OutputFormat::Json {
            Self::json()
        } else {
            Self::text(config.output.color && !no_color)
        }
    }
}

#[derive(Serialize)]
struct SortOutput<'a, T> {
    values: &'a [T],
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SortStats>,
}

#[derive(Serialize)]
struct CountOutput<K> {
    frequencies: Vec<FrequencyEntry<K>>,
    queries: Vec<QueryAnswer<K>>,
}

// =============================================================================
// sort
// =============================================================================

/// Sort integers with their natural order.
pub fn sort_integers(
    mut values: Vec<i64>,
    show_stats: bool,
    render: &Render,
) -> Result<String, CliError> {
    let stats = selection_sort_with_stats(&mut values, i64::cmp);
    render_sorted(&values, stats, show_stats, render)
}

/// Sort floats by IEEE 754 total order: `-NaN < -inf < ... < -0 < +0 < ... < inf < NaN`.
pub fn sort_floats(
    mut values: Vec<f64>,
    show_stats: bool,
    render: &Render,
) -> Result<String, CliError> {
    let stats = selection_sort_with_stats(&mut values, f64::total_cmp);
    render_sorted(&values, stats, show_stats, render)
}

fn render_sorted<T: Display + Serialize>(
    values: &[T],
    stats: SortStats,
    show_stats: bool,
    render: &Render,
) -> Result<String, CliError> {
    tracing::debug!(len = values.len(), swaps = stats.swaps, "sorted input");
    match render.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SortOutput {
            values,
            stats: show_stats.then_some(stats),
        })?),
        OutputFormat::Text => {
            let mut out = join(values);
            if show_stats {
                out.push('\n');
                out.push_str(&render.palette.gray(&format!(
                    "passes: {}, comparisons: {}, swaps: {}",
                    stats.passes, stats.comparisons, stats.swaps
                )));
            }
            Ok(out)
        }
    }
}

// =============================================================================
// init
// =============================================================================

/// Write a `tally.toml` template into `dir`.
pub fn init(dir: &Path, render: &Render) -> Result<String, CliError> {
    let path = TallyConfig::write_template(dir)?;
    tracing::debug!(path = %path.display(), "wrote config template");
    Ok(format!(
        "{} {}",
        render.palette.green("created"),
        path.display()
    ))
}

// =============================================================================
// count
// =============================================================================

/// Count occurrences of each value and answer the queries.
pub fn count_values(
    values: Vec<i64>,
    queries: Vec<i64>,
    render: &Render,
) -> Result<String, CliError> {
    let table: FrequencyTable<i64> = values.into_iter().collect();
    let answers = table.answer(queries);
    render_counts(table.entries(), answers, render, |v| v.to_string())
}

// =============================================================================
// chars
// =============================================================================

/// Count the bytes of `text` and answer single-character queries.
pub fn count_chars(text: &str, queries: &[String], render: &Render) -> Result<String, CliError> {
    let chars = queries
        .iter()
        .map(|q| single_char(q))
        .collect::<Result<Vec<_>, _>>()?;
    let table = ByteFrequency::from_text(text);
    let answers = table.answer(chars)?;
    render_counts(table.entries(), answers, render, |c| format!("{:?}", c))
}

fn single_char(token: &str) -> Result<char, CliError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CliError::InvalidQuery {
            token: token.to_string(),
        }),
    }
}

fn render_counts<K: Serialize>(
    frequencies: Vec<FrequencyEntry<K>>,
    queries: Vec<QueryAnswer<K>>,
    render: &Render,
    label: impl Fn(&K) -> String,
) -> Result<String, CliError> {
    if render.format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&CountOutput {
            frequencies,
            queries,
        })?);
    }

    let p = &render.palette;
    let mut lines = Vec::with_capacity(frequencies.len() + queries.len());
    for entry in &frequencies {
        lines.push(format!(
            "{} {} {}",
            p.bold(&label(&entry.value)),
            p.gray("-->"),
            entry.count
        ));
    }
    for answer in &queries {
        lines.push(format!(
            "{} {}: {}",
            p.cyan("frequency of"),
            label(&answer.query),
            p.green(&answer.count.to_string())
        ));
    }
    Ok(lines.join("\n"))
}

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
