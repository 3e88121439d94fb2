//! CSV ingestion for the skill matrix.
//!
//! Validates the header, rejects unknown classifications, coerces self-scores
//! and fills in the derived columns. Everything downstream works on typed
//! `RequirementRow`s.

pub mod schema;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord};

use crate::errors::AppError;
use crate::models::matrix::{Classification, RequirementRow};
use crate::scoring::config::ScoringConfig;

use schema::{resolve_schema, MatrixSchema};

/// Path value that reads the matrix from stdin.
pub const STDIN_PATH: &str = "-";

/// Loads a matrix file, or stdin when `path` is `-`.
pub fn load_matrix(path: &Path, config: &ScoringConfig) -> Result<Vec<RequirementRow>, AppError> {
    if path.as_os_str() == STDIN_PATH {
        tracing::debug!("Reading skill matrix from stdin");
        return load_matrix_from_reader(io::stdin().lock(), config);
    }

    if !path.exists() {
        return Err(AppError::InvalidInput(format!(
            "File not found: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(AppError::InvalidInput(format!(
            "Path is not a file: {}",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), "Reading skill matrix");
    let file = File::open(path)?;
    load_matrix_from_reader(file, config)
}

pub fn load_matrix_from_reader<R: Read>(
    reader: R,
    config: &ScoringConfig,
) -> Result<Vec<RequirementRow>, AppError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader.headers().map_err(map_csv_error)?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(AppError::InvalidInput("The CSV file is empty".to_string()));
    }
    let schema = resolve_schema(&headers)?;

    let mut records = Vec::new();
    for record in csv_reader.records() {
        records.push(record.map_err(map_csv_error)?);
    }
    if records.is_empty() {
        return Err(AppError::InvalidInput(
            "The CSV file contains no requirement rows".to_string(),
        ));
    }

    let classifications = parse_classifications(&records, &schema)?;

    let rows: Vec<RequirementRow> = records
        .iter()
        .zip(classifications)
        .enumerate()
        .map(|(idx, (record, classification))| {
            let requirement = field(record, schema.requirement);
            let self_score = coerce_self_score(
                field(record, schema.self_score),
                config.max_self_score,
                idx + 1,
            );
            RequirementRow::new(requirement, classification, self_score, config)
        })
        .collect();

    tracing::info!(rows = rows.len(), "Loaded skill matrix");
    Ok(rows)
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or_default().trim()
}

/// Parses every classification cell, collecting all offending labels at once.
fn parse_classifications(
    records: &[StringRecord],
    schema: &MatrixSchema,
) -> Result<Vec<Classification>, AppError> {
    let mut invalid = BTreeSet::new();
    let mut parsed = Vec::with_capacity(records.len());
    for record in records {
        let label = field(record, schema.classification);
        match label.parse::<Classification>() {
            Ok(c) => parsed.push(c),
            Err(_) => {
                invalid.insert(label.to_string());
            }
        }
    }

    if invalid.is_empty() {
        Ok(parsed)
    } else {
        Err(AppError::InvalidClassification {
            values: invalid.into_iter().collect(),
        })
    }
}

/// Non-numeric cells become 0; numbers are clamped to `[0, max]` and truncated.
fn coerce_self_score(raw: &str, max: u8, row_number: usize) -> u8 {
    match raw.parse::<f64>() {
        Ok(value) if !value.is_nan() => value.clamp(0.0, f64::from(max)).trunc() as u8,
        _ => {
            tracing::warn!(
                row = row_number,
                value = raw,
                "Non-numeric SelfScore; treating as 0"
            );
            0
        }
    }
}

/// Structural problems in the file are input errors; the rest stay `Csv`.
fn map_csv_error(err: csv::Error) -> AppError {
    let message = match err.kind() {
        ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => {
            let line = pos.as_ref().map(|p| p.line()).unwrap_or_default();
            Some(format!(
                "Malformed CSV at line {line}: expected {expected_len} fields, found {len}"
            ))
        }
        ErrorKind::Utf8 { .. } => Some(format!(
            "Unable to decode CSV file. Ensure it's a valid UTF-8 CSV file. Error: {err}"
        )),
        _ => None,
    };
    match message {
        Some(message) => AppError::InvalidInput(message),
        None => AppError::Csv(err),
    }
}
