use crate::map_locations::models::{Coordinate, PoolKind, RawCoordinate};
use crate::pools::errors::PoolError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Candidate points, loaded once and never mutated. Never empty.
#[derive(Clone, Debug)]
pub struct CoordinatePool {
    kind: PoolKind,
    coordinates: Vec<Coordinate>,
}

impl CoordinatePool {
    pub fn new(kind: PoolKind, coordinates: Vec<Coordinate>) -> Result<Self, PoolError> {
        if coordinates.is_empty() {
            return Err(PoolError::Empty);
        }
        if let Some((index, bad)) = coordinates
            .iter()
            .enumerate()
            .find(|(_, coordinate)| !coordinate.is_in_range())
        {
            return Err(PoolError::OutOfRange {
                position: index + 1,
                lat: bad.lat,
                lng: bad.lng,
            });
        }
        Ok(Self { kind, coordinates })
    }

    pub fn load(path: &Path, kind: PoolKind) -> Result<Self, PoolError> {
        let raw = fs::read_to_string(path).map_err(|source| PoolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, kind)
    }

    /// Accepts a JSON array of entries or one entry per line.
    pub fn parse(raw: &str, kind: PoolKind) -> Result<Self, PoolError> {
        let coordinates = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(entries)) if !is_bare_pair(&entries) => parse_array(entries)?,
            _ => parse_ndjson(raw)?,
        };
        Self::new(kind, coordinates)
    }

    pub fn kind(&self) -> PoolKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coordinates
    }
}

/// A one-line file holding `[lat, lng]` is a single entry, not an array of them.
fn is_bare_pair(entries: &[Value]) -> bool {
    !entries.is_empty() && entries.iter().all(Value::is_number)
}

fn parse_array(entries: Vec<Value>) -> Result<Vec<Coordinate>, PoolError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<RawCoordinate>(entry)
                .map(Coordinate::from)
                .map_err(|err| PoolError::Malformed {
                    position: index + 1,
                    reason: err.to_string(),
                })
        })
        .collect()
}

fn parse_ndjson(raw: &str) -> Result<Vec<Coordinate>, PoolError> {
    let mut coordinates = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry: RawCoordinate =
            serde_json::from_str(line).map_err(|err| PoolError::Malformed {
                position: index + 1,
                reason: err.to_string(),
            })?;
        coordinates.push(entry.into());
    }
    Ok(coordinates)
}
