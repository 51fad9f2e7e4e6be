//! Claim file loading.
//!
//! Two document shapes are accepted: a single JSON array of claim
//! aggregates, or JSON lines with one aggregate per line. Each aggregate
//! carries its `claimType` tag. Records are decoded one at a time, so a bad
//! record is reported by position and the rest still load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ccw_model::ClaimAggregate;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::batch::{ClaimBatch, RejectedRecord};
use crate::error::{IngestError, RecordLocation, Result};

/// Shape of a claim document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimFileFormat {
    /// One JSON array holding every claim.
    JsonArray,
    /// One claim per line. Blank lines are skipped.
    JsonLines,
}

impl ClaimFileFormat {
    /// Format implied by a file extension, if it is a known one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::JsonArray),
            "jsonl" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }

    /// Format implied by the first non-whitespace character of a document.
    pub fn sniff(content: &str) -> Self {
        match content.trim_start().chars().next() {
            Some('[') => Self::JsonArray,
            _ => Self::JsonLines,
        }
    }
}

/// Load every claim aggregate in a file.
///
/// The format comes from the extension, falling back to the content when
/// the extension is unknown. Records that do not decode are returned as
/// rejected records; only an unreadable file or a malformed JSON array
/// fails the whole load.
pub fn load_claims(path: &Path) -> Result<ClaimBatch> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let batch = match ClaimFileFormat::from_path(path) {
        Some(format) => read_claims(BufReader::new(file), format, path)?,
        None => {
            let mut content = String::new();
            BufReader::new(file)
                .read_to_string(&mut content)
                .map_err(|source| IngestError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
            let format = ClaimFileFormat::sniff(&content);
            debug!(path = %path.display(), ?format, "detected claim file format");
            read_claims(content.as_bytes(), format, path)?
        }
    };

    info!(
        path = %path.display(),
        claims = batch.claims.len(),
        rejected = batch.rejected.len(),
        "loaded claims"
    );
    Ok(batch)
}

/// Read claim aggregates from a reader in the given format.
///
/// `path` is only used to label errors.
pub fn read_claims<R: BufRead>(
    reader: R,
    format: ClaimFileFormat,
    path: &Path,
) -> Result<ClaimBatch> {
    match format {
        ClaimFileFormat::JsonArray => read_json_array(reader, path),
        ClaimFileFormat::JsonLines => read_json_lines(reader, path),
    }
}

fn read_json_array<R: BufRead>(reader: R, path: &Path) -> Result<ClaimBatch> {
    let values: Vec<Value> =
        serde_json::from_reader(reader).map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            location: None,
            source,
        })?;
    let mut batch = ClaimBatch::default();
    for (index, value) in values.into_iter().enumerate() {
        push_record(&mut batch, value, path, RecordLocation::Element(index + 1));
    }
    Ok(batch)
}

fn read_json_lines<R: BufRead>(reader: R, path: &Path) -> Result<ClaimBatch> {
    let mut batch = ClaimBatch::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let location = RecordLocation::Line(index + 1);
        match serde_json::from_str::<Value>(&line) {
            Ok(value) => push_record(&mut batch, value, path, location),
            Err(source) => {
                warn!(path = %path.display(), %location, "skipping unreadable record");
                batch.rejected.push(RejectedRecord::unreadable(IngestError::Parse {
                    path: path.to_path_buf(),
                    location: Some(location),
                    source,
                }));
            }
        }
    }
    Ok(batch)
}

fn push_record(batch: &mut ClaimBatch, value: Value, path: &Path, location: RecordLocation) {
    match ClaimAggregate::deserialize(&value) {
        Ok(claim) => batch.claims.push(claim),
        Err(source) => {
            let record = RejectedRecord::from_value(
                &value,
                IngestError::Parse {
                    path: path.to_path_buf(),
                    location: Some(location),
                    source,
                },
            );
            warn!(
                path = %path.display(),
                %location,
                claim_id = record.claim_id.as_deref().unwrap_or("-"),
                "skipping invalid claim"
            );
            batch.rejected.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ClaimFileFormat::from_path(Path::new("claims.JSON")),
            Some(ClaimFileFormat::JsonArray)
        );
        assert_eq!(
            ClaimFileFormat::from_path(Path::new("claims.ndjson")),
            Some(ClaimFileFormat::JsonLines)
        );
        assert_eq!(ClaimFileFormat::from_path(Path::new("claims.txt")), None);
    }

    #[test]
    fn sniff_skips_leading_whitespace() {
        assert_eq!(ClaimFileFormat::sniff("\n  [ ]"), ClaimFileFormat::JsonArray);
        assert_eq!(ClaimFileFormat::sniff("{\"a\":1}"), ClaimFileFormat::JsonLines);
        assert_eq!(ClaimFileFormat::sniff(""), ClaimFileFormat::JsonLines);
    }

    #[test]
    fn empty_json_lines_document() {
        let batch = read_claims("\n\n".as_bytes(), ClaimFileFormat::JsonLines, Path::new("x"))
            .unwrap();
        assert!(batch.claims.is_empty());
        assert!(batch.rejected.is_empty());
    }

    #[test]
    fn malformed_line_is_rejected_by_line_number() {
        let batch = read_claims(
            "\n{not json}\n".as_bytes(),
            ClaimFileFormat::JsonLines,
            Path::new("claims.jsonl"),
        )
        .unwrap();
        assert_eq!(batch.records(), 1);
        match &batch.rejected[0].error {
            IngestError::Parse { location, .. } => {
                assert_eq!(*location, Some(RecordLocation::Line(2)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_array_fails_the_document() {
        let err = read_claims("[{}".as_bytes(), ClaimFileFormat::JsonArray, Path::new("a.json"))
            .unwrap_err();
        assert!(matches!(err, IngestError::Parse { location: None, .. }));
    }
}
