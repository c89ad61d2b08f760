//! Row-level parsing and validation of listing CSVs

use chrono::{DateTime, Utc};
use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};

use crate::domain::entities::auction_item::AuctionItem;
use crate::domain::value_objects::{SkipReason, SkippedRow};
use crate::errors::ImportError;

/// Columns every data row must carry, in the order they are checked
pub const REQUIRED_COLUMNS: [&str; 5] = ["title", "description", "category", "price", "status"];

const TITLE: usize = 0;
const DESCRIPTION: usize = 1;
const CATEGORY: usize = 2;
const PRICE: usize = 3;
const STATUS: usize = 4;

/// Records accepted from a buffer, plus the rows that were left out
#[derive(Debug, Default)]
pub(crate) struct ParsedListings {
    pub items: Vec<AuctionItem>,
    pub skipped: Vec<SkippedRow>,
}

/// Parse a CSV buffer into auction items stamped with `created_at`
///
/// Only a buffer the tokenizer cannot read fails as a whole; invalid rows
/// end up in `skipped`. Cells that are not valid UTF-8 are decoded with
/// replacement characters rather than rejecting the row.
pub(crate) fn parse_listings(
    data: &[u8],
    created_at: DateTime<Utc>,
) -> Result<ParsedListings, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = decode(reader.byte_headers().map_err(malformed)?)
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    let columns = REQUIRED_COLUMNS.map(|name| headers.iter().position(|h| h == name));

    let mut parsed = ParsedListings::default();
    for (index, result) in reader.byte_records().enumerate() {
        let raw = result.map_err(malformed)?;
        let line = raw
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);
        let record = decode(&raw);

        match parse_row(&record, &columns, created_at) {
            Ok(item) => parsed.items.push(item),
            Err(reason) => parsed.skipped.push(SkippedRow {
                line,
                title: value(&record, columns[TITLE]).map(str::to_string),
                reason,
            }),
        }
    }

    Ok(parsed)
}

fn parse_row(
    record: &StringRecord,
    columns: &[Option<usize>; 5],
    created_at: DateTime<Utc>,
) -> Result<AuctionItem, SkipReason> {
    let mut values = [""; 5];
    for (slot, (name, column)) in values
        .iter_mut()
        .zip(REQUIRED_COLUMNS.iter().zip(columns.iter()))
    {
        *slot = value(record, *column).ok_or_else(|| SkipReason::MissingField {
            field: name.to_string(),
        })?;
    }

    let price = values[PRICE];
    let estimated_value = price
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| SkipReason::InvalidPrice {
            value: price.to_string(),
        })?;

    Ok(AuctionItem::new(
        values[TITLE],
        values[DESCRIPTION],
        values[CATEGORY],
        values[STATUS],
        estimated_value,
        created_at,
    ))
}

/// Trimmed, non-blank cell at `column`
fn value(record: &StringRecord, column: Option<usize>) -> Option<&str> {
    column
        .and_then(|c| record.get(c))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn decode(raw: &ByteRecord) -> StringRecord {
    raw.iter().map(String::from_utf8_lossy).collect()
}

fn malformed(err: csv::Error) -> ImportError {
    ImportError::MalformedCsv {
        message: err.to_string(),
    }
}
