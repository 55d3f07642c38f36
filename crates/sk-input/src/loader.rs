//! CSV action-table loaders.
//!
//! # Long format
//!
//! One row per action.  The six resource columns are per-run costs (the time
//! column in seconds); `max_share` is the proportion cap.
//!
//! ```csv
//! name,fuel,ammo,steel,bucket,cond,time,reward,max_share
//! 1-5,23.6,39.2,0,0.102,0,230,1.47,1
//! 2-3,163,110,0,0.293,0,288,2.31,0.5
//! ```
//!
//! # Wide format
//!
//! The spreadsheet layout: column A holds row labels and is ignored, and
//! every following column is one action.
//!
//! | Row | Meaning                              |
//! |-----|--------------------------------------|
//! | 1   | action name                          |
//! | 2–7 | fuel, ammo, steel, bucket, cond, time cost |
//! | 8   | reward                               |
//! | 9   | max share in [0, 1]                  |
//!
//! Rows past the ninth are ignored.  Errors name the 1-based column.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sk_core::NUM_RESOURCES;

use crate::{ActionSpec, ActionTable, InputError, InputResult};

/// Rows a wide-format column must fill.
const WIDE_ROWS: usize = 9;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ActionRecord {
    name:      String,
    fuel:      f64,
    ammo:      f64,
    steel:     f64,
    bucket:    f64,
    cond:      f64,
    time:      f64,
    reward:    f64,
    max_share: f64,
}

impl From<ActionRecord> for ActionSpec {
    fn from(r: ActionRecord) -> Self {
        ActionSpec::new(
            r.name,
            [r.fuel, r.ammo, r.steel, r.bucket, r.cond, r.time],
            r.reward,
            r.max_share,
        )
    }
}

// ── Long format ───────────────────────────────────────────────────────────────

/// Load an [`ActionTable`] from a long-format CSV file.
pub fn load_actions_csv(path: &Path) -> InputResult<ActionTable> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    load_actions_reader(file)
}

/// Like [`load_actions_csv`] but accepts any `Read` source.
pub fn load_actions_reader<R: Read>(reader: R) -> InputResult<ActionTable> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let specs = csv_reader
        .deserialize::<ActionRecord>()
        .map(|row| {
            row.map(ActionSpec::from)
                .map_err(|e| InputError::Parse(e.to_string()))
        })
        .collect::<InputResult<Vec<_>>>()?;

    log::info!("loaded {} actions (long format)", specs.len());
    ActionTable::from_specs(specs)
}

// ── Wide format ───────────────────────────────────────────────────────────────

/// Load an [`ActionTable`] from a wide-format (column per action) CSV file.
pub fn load_actions_wide_csv(path: &Path) -> InputResult<ActionTable> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    load_actions_wide_reader(file)
}

/// Like [`load_actions_wide_csv`] but accepts any `Read` source.
pub fn load_actions_wide_reader<R: Read>(reader: R) -> InputResult<ActionTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let rows = csv_reader
        .records()
        .take(WIDE_ROWS)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| InputError::Parse(e.to_string()))?;

    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if rows.len() < WIDE_ROWS || width < 2 {
        return Err(InputError::Parse(format!(
            "sheet must have at least {WIDE_ROWS} rows and 2 columns, got {} × {width}",
            rows.len()
        )));
    }

    let mut specs = Vec::with_capacity(width - 1);
    for col in 1..width {
        let cells: Vec<&str> = rows.iter().map(|r| r.get(col).unwrap_or("")).collect();
        let column = col + 1;

        if cells.iter().any(|c| c.is_empty()) {
            return Err(InputError::Parse(format!(
                "column {column} is incomplete: the first {WIDE_ROWS} rows must all be filled"
            )));
        }

        let numbers = cells[1..]
            .iter()
            .map(|c| c.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| {
                InputError::Parse(format!("column {column} has a non-numeric value in rows 2–{WIDE_ROWS}"))
            })?;

        let max_share = numbers[NUM_RESOURCES + 1];
        if !(0.0..=1.0).contains(&max_share) {
            return Err(InputError::ShareOutOfRange {
                action: format!("column {column}"),
                value:  max_share,
            });
        }

        let mut consumption = [0.0; NUM_RESOURCES];
        consumption.copy_from_slice(&numbers[..NUM_RESOURCES]);
        specs.push(ActionSpec::new(cells[0], consumption, numbers[NUM_RESOURCES], max_share));
    }

    log::info!("loaded {} actions (wide format)", specs.len());
    ActionTable::from_specs(specs)
}
