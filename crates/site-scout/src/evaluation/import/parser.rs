use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::{RatingCell, RatingEntry};

pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<RatingEntry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<RatingRow>() {
        let row = record?;
        let key = normalize_key(&row.metric);
        if key.is_empty() {
            continue;
        }

        entries.push(RatingEntry {
            key,
            rating: parse_rating(&row.rating),
            notes: row.notes.unwrap_or_default(),
        });
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "Metric")]
    metric: String,
    #[serde(rename = "Rating")]
    rating: String,
    #[serde(rename = "Notes", default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Cells that do not fit a `u8` are kept verbatim and reported per row by the importer.
fn parse_rating(raw: &str) -> RatingCell {
    let raw = raw.trim();
    raw.parse::<u8>()
        .map(RatingCell::Value)
        .unwrap_or_else(|_| RatingCell::Unreadable(raw.to_string()))
}

/// Accepts `Foot Traffic`, `foot-traffic`, or `foot_traffic` for the same key.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
