//! Anchor file parsing and writing
//!
//! # Anchor File Format
//!
//! ```text
//! ###
//! queryGene subjectGene score
//! queryGene subjectGene score
//! ###
//! queryGene subjectGene score
//! ```
//!
//! - Lines starting with `#` separate synteny blocks
//! - Data lines are whitespace separated; extra columns are ignored
//! - A trailing `L` on the score (legacy long integer suffix) is dropped

use crate::core::error::{AnchorParseError, AnchorResult};
use crate::core::io::open_reader;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Separator line written between blocks
pub const BLOCK_SEPARATOR: &str = "###";

/// One anchor line as written in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRecord {
    pub query: String,
    pub subject: String,
    /// Score text with any `L` suffix removed
    pub score: String,
    /// 1-based source line, for error reporting
    pub line: usize,
}

impl AnchorRecord {
    /// Parse a data line
    pub fn parse(line: &str, line_number: usize) -> AnchorResult<Self> {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(query), Some(subject), Some(score)) => Ok(Self {
                query: query.to_string(),
                subject: subject.to_string(),
                score: score.trim_end_matches('L').to_string(),
                line: line_number,
            }),
            (q, s, _) => Err(AnchorParseError::TooFewFields {
                line: line_number,
                found: q.iter().count() + s.iter().count(),
            }),
        }
    }

    /// Score as a non-negative finite weight
    pub fn weight(&self) -> AnchorResult<f64> {
        match self.score.parse::<f64>() {
            Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
            _ => Err(AnchorParseError::InvalidWeight {
                line: self.line,
                value: self.score.clone(),
            }),
        }
    }
}

/// Parsed anchor file: non-empty blocks in file order
#[derive(Debug, Clone, Default)]
pub struct AnchorFile {
    pub blocks: Vec<Vec<AnchorRecord>>,
}

impl AnchorFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of anchors over all blocks
    pub fn anchor_count(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }
}

/// Parse an anchor file from a reader
pub fn parse_anchor_reader<R: BufRead>(reader: R) -> AnchorResult<AnchorFile> {
    let mut result = AnchorFile::new();
    let mut current: Vec<AnchorRecord> = Vec::new();

    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('#') {
            if !current.is_empty() {
                result.blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        current.push(AnchorRecord::parse(trimmed, index + 1)?);
    }

    if !current.is_empty() {
        result.blocks.push(current);
    }

    Ok(result)
}

/// Parse a (possibly compressed) anchor file from a path
pub fn parse_anchor_file(path: &Path) -> AnchorResult<AnchorFile> {
    if !path.exists() {
        return Err(AnchorParseError::FileNotFound(path.to_path_buf()));
    }
    let anchors = parse_anchor_reader(open_reader(path)?)?;
    log::debug!(
        "Read {} blocks ({} anchors) from {}",
        anchors.blocks.len(),
        anchors.anchor_count(),
        path.display()
    );
    Ok(anchors)
}

/// Parse an anchor file from bytes (for testing)
pub fn parse_anchor_bytes(data: &[u8]) -> AnchorResult<AnchorFile> {
    parse_anchor_reader(io::BufReader::new(data))
}

/// Write one block: separator line, then `query\tsubject\tweight` rows
pub fn write_block<'a, W, I>(out: &mut W, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str, f64)>,
{
    writeln!(out, "{}", BLOCK_SEPARATOR)?;
    for (query, subject, weight) in rows {
        writeln!(out, "{}\t{}\t{}", query, subject, weight)?;
    }
    Ok(())
}

/// Block identifier: prefix plus the 1-based block number, zero padded to
/// the width of the block count
///
/// # Examples
/// ```
/// use fast_synteny::formats::anchors::block_id;
///
/// assert_eq!(block_id("b", 0, 12), "b01");
/// assert_eq!(block_id("b", 11, 12), "b12");
/// assert_eq!(block_id("chr", 4, 9), "chr5");
/// ```
pub fn block_id(prefix: &str, index: usize, total: usize) -> String {
    let pad = total.to_string().len();
    format!("{}{:0pad$}", prefix, index + 1, pad = pad)
}
