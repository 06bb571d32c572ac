use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use colseq_core::{
    WaveOrder, column_index, column_name, compress_range, expand_pattern, remap_columns,
    shift_wave,
};
use colseq_table::{CaseMode, ListManager};

use crate::types::{ColumnRow, ListOperation, RemapRow};

pub fn run_compress(from: &str, to: &str) -> Result<String> {
    compress_range(from, to).with_context(|| format!("compress '{from}' .. '{to}'"))
}

pub fn run_expand(pattern: &str) -> Result<Vec<String>> {
    let _guard = info_span!("expand", pattern).entered();
    let expanded =
        expand_pattern(pattern).with_context(|| format!("expand pattern '{pattern}'"))?;
    if expanded.is_empty() {
        warn!("pattern is empty, nothing to expand");
    }
    info!(count = expanded.len(), "expanded pattern");
    Ok(expanded)
}

pub fn run_column_name(indices: &[i64]) -> Result<Vec<ColumnRow>> {
    indices
        .iter()
        .map(|&index| {
            let name = column_name(index)?;
            Ok(ColumnRow { index, name })
        })
        .collect()
}

pub fn run_column_index(names: &[String]) -> Result<Vec<ColumnRow>> {
    names
        .iter()
        .map(|name| {
            let index = column_index(name)?;
            Ok(ColumnRow {
                index,
                name: name.to_uppercase(),
            })
        })
        .collect()
}

/// Read a JSON object of column name to column letter.
pub fn load_mapping(path: &Path) -> Result<BTreeMap<String, String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read mapping {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse mapping {}", path.display()))
}

/// Prepend `add` to the mapping in `path`, ordered by new position.
pub fn run_remap(path: &Path, add: &[String]) -> Result<Vec<RemapRow>> {
    let _guard = info_span!("remap", mapping = %path.display()).entered();
    let base = load_mapping(path)?;
    let remapped = remap_columns(&base, add).context("remap columns")?;

    let mut rows = remapped
        .into_iter()
        .map(|(name, column)| {
            let index = column_index(&column)?;
            Ok(RemapRow {
                name,
                column,
                index,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    rows.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.name.cmp(&b.name)));
    info!(existing = base.len(), prepended = add.len(), "remapped columns");
    Ok(rows)
}

pub fn run_wave(
    wave: &str,
    step: i64,
    pattern: &str,
    order: WaveOrder,
    waves_per_year: u32,
) -> Result<String> {
    shift_wave(wave, step, pattern, order, waves_per_year)
        .with_context(|| format!("shift wave '{wave}' by {step}"))
}

/// Read a list file, one entry per line. Blank lines are skipped.
pub fn read_list(path: &Path) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read list {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn run_list(
    operation: ListOperation,
    left: &Path,
    right: Option<&Path>,
    case_mode: CaseMode,
) -> Result<Vec<String>> {
    let _guard = info_span!("list", ?operation, left = %left.display()).entered();
    let manager = ListManager::new(read_list(left)?, case_mode);
    let other = match (operation.needs_other(), right) {
        (true, Some(path)) => read_list(path)?,
        (true, None) => bail!("{operation:?} needs a second list"),
        (false, Some(path)) => {
            warn!(path = %path.display(), "second list ignored");
            Vec::new()
        }
        (false, None) => Vec::new(),
    };

    let result = match operation {
        ListOperation::Without => manager.without(&other),
        ListOperation::Intersect => manager.intersect(&other),
        ListOperation::Union => manager.union(&other),
        ListOperation::Unique => manager.unique(),
        ListOperation::Duplicates => manager.duplicates(),
    };
    info!(input = manager.data().len(), output = result.len(), "list operation");
    Ok(result)
}
