use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gap marker used in the aligned sequence pair.
pub const GAP: u8 = b'-';

/// Number of comma-separated fields in a serialized alignment record.
pub const RECORD_FIELDS: usize = 16;

/// A k-mer shared by both sequences, carrying its half-open coordinate
/// ranges in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonLocation {
    pub s1_start: usize,
    pub s1_end: usize,
    pub s2_start: usize,
    pub s2_end: usize,
}

/// A diagonal interval in the sequence1 (H) x sequence2 (V) plane.
///
/// Coordinates are half-open on both axes. For seeds built from exact
/// k-mer matches the H and V spans are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub begin_h: usize,
    pub end_h: usize,
    pub begin_v: usize,
    pub end_v: usize,
}

impl Seed {
    pub fn new(begin_h: usize, end_h: usize, begin_v: usize, end_v: usize) -> Self {
        Self {
            begin_h,
            end_h,
            begin_v,
            end_v,
        }
    }

    pub fn h_span(&self) -> usize {
        self.end_h - self.begin_h
    }

    pub fn v_span(&self) -> usize {
        self.end_v - self.begin_v
    }

    /// Diagonal of the seed's start corner (H minus V).
    pub fn start_diagonal(&self) -> i64 {
        self.begin_h as i64 - self.begin_v as i64
    }

    /// Diagonal of the seed's end corner.
    pub fn end_diagonal(&self) -> i64 {
        self.end_h as i64 - self.end_v as i64
    }
}

impl From<CommonLocation> for Seed {
    fn from(location: CommonLocation) -> Self {
        Self {
            begin_h: location.s1_start,
            end_h: location.s1_end,
            begin_v: location.s2_start,
            end_v: location.s2_end,
        }
    }
}

/// Errors raised when parsing a serialized alignment record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected {RECORD_FIELDS} fields, found {0}")]
    FieldCount(usize),

    #[error("invalid integer field: {0}")]
    Int(#[from] std::num::ParseIntError),

    #[error("invalid float field: {0}")]
    Float(#[from] std::num::ParseFloatError),
}

/// Summary of one semi-global alignment.
///
/// Positions in the three position lists are sequence2 coordinates sampled
/// in scan order. `s1_start..s1_end` and `s2_start..s2_end` delimit the
/// aligned (non-clipped) portion of each input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub edit_script: String,
    pub s1_start: usize,
    pub s1_end: usize,
    pub s2_start: usize,
    pub s2_end: usize,
    pub aligned_length: usize,
    pub match_count: usize,
    pub mismatch_count: usize,
    pub mismatch_positions: Vec<usize>,
    pub insertion_count: usize,
    pub insertion_positions: Vec<usize>,
    pub deletion_count: usize,
    pub deletion_positions: Vec<usize>,
    pub edit_distance: usize,
    pub percent_identity: f64,
    pub elapsed_ms: u64,
}

impl AlignmentReport {
    /// Serialize to the flat comma-separated record handed to host
    /// processes. Position lists are `;`-joined; an empty list is an
    /// empty field.
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{:.6},{}",
            self.edit_script,
            self.s1_start,
            self.s1_end,
            self.s2_start,
            self.s2_end,
            self.aligned_length,
            self.match_count,
            self.mismatch_count,
            join_positions(&self.mismatch_positions),
            self.insertion_count,
            join_positions(&self.insertion_positions),
            self.deletion_count,
            join_positions(&self.deletion_positions),
            self.edit_distance,
            self.percent_identity,
            self.elapsed_ms,
        )
    }

    /// Parse a record produced by [`to_record`](Self::to_record).
    pub fn from_record(record: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() != RECORD_FIELDS {
            return Err(RecordError::FieldCount(fields.len()));
        }
        Ok(Self {
            edit_script: fields[0].to_string(),
            s1_start: fields[1].parse()?,
            s1_end: fields[2].parse()?,
            s2_start: fields[3].parse()?,
            s2_end: fields[4].parse()?,
            aligned_length: fields[5].parse()?,
            match_count: fields[6].parse()?,
            mismatch_count: fields[7].parse()?,
            mismatch_positions: parse_positions(fields[8])?,
            insertion_count: fields[9].parse()?,
            insertion_positions: parse_positions(fields[10])?,
            deletion_count: fields[11].parse()?,
            deletion_positions: parse_positions(fields[12])?,
            edit_distance: fields[13].parse()?,
            percent_identity: fields[14].parse()?,
            elapsed_ms: fields[15].parse()?,
        })
    }
}

fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

fn parse_positions(field: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    field.split(';').map(str::parse).collect()
}
