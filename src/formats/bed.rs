//! BED gene order tables
//!
//! A BED file lists the genes of one genome. Sorted by
//! `(seqid, start, accn)`, the position of a gene in that list is its rank,
//! the coordinate used by anchors and chains.

use crate::core::error::{BedParseError, BedResult, LookupError};
use crate::core::io::open_reader;
use memchr::memchr;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

fn field_str<'a>(
    line: &'a [u8],
    (start, end): (usize, usize),
    line_number: usize,
    field: &'static str,
) -> BedResult<&'a str> {
    std::str::from_utf8(&line[start..end]).map_err(|_| BedParseError::InvalidUtf8 {
        line: line_number,
        field,
    })
}

fn parse_u64(value: &str, line_number: usize, field: &'static str) -> BedResult<u64> {
    value.trim().parse().map_err(|_| BedParseError::InvalidNumber {
        line: line_number,
        field,
        value: value.to_string(),
    })
}

/// Owned BED record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedRecord {
    pub seqid: String,
    pub start: u64,
    pub end: u64,
    pub accn: String,
    pub score: Option<String>,
    pub strand: Option<char>,
}

/// Zero-copy BED record view for parsing
/// Only parses coordinate fields immediately, other fields are kept as byte slices
pub struct BedRecordView<'a> {
    /// Original line bytes
    line: &'a [u8],
    /// Sequence (chromosome) name
    pub seqid: &'a str,
    /// Start position (0-based)
    pub start: u64,
    /// End position
    pub end: u64,
    /// Gene accession
    pub accn: &'a str,
    /// Field boundaries (start, end) for lazy access
    field_bounds: Vec<(usize, usize)>,
}

impl<'a> BedRecordView<'a> {
    /// Parse a tab separated BED line with at least four columns
    pub fn parse(line: &'a [u8], line_number: usize) -> BedResult<Self> {
        if line.is_empty() {
            return Err(BedParseError::EmptyLine);
        }

        let mut field_bounds = Vec::with_capacity(6);
        let mut start_pos = 0;
        while let Some(tab_pos) = memchr(b'\t', &line[start_pos..]) {
            let end_pos = start_pos + tab_pos;
            field_bounds.push((start_pos, end_pos));
            start_pos = end_pos + 1;
        }
        field_bounds.push((start_pos, line.len()));

        if field_bounds.len() < 4 {
            return Err(BedParseError::TooFewFields {
                line: line_number,
                expected: 4,
                found: field_bounds.len(),
            });
        }

        let field = |index: usize, name: &'static str| {
            field_str(line, field_bounds[index], line_number, name)
        };
        let seqid = field(0, "seqid")?;
        let start = parse_u64(field(1, "start")?, line_number, "start")?;
        let end = parse_u64(field(2, "end")?, line_number, "end")?;
        let accn = field(3, "accn")?.trim();

        Ok(Self {
            line,
            seqid,
            start,
            end,
            accn,
            field_bounds,
        })
    }

    /// Get the number of fields
    pub fn field_count(&self) -> usize {
        self.field_bounds.len()
    }

    /// Get field as string slice (lazy access)
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.field_bounds
            .get(index)
            .and_then(|(start, end)| std::str::from_utf8(&self.line[*start..*end]).ok())
    }

    /// Get score field (field 4) if present
    pub fn score(&self) -> Option<&'a str> {
        self.field(4)
    }

    /// Get strand field (field 5) if present and meaningful
    pub fn strand(&self) -> Option<char> {
        match self.field(5) {
            Some("+") => Some('+'),
            Some("-") => Some('-'),
            _ => None,
        }
    }

    pub fn to_record(&self) -> BedRecord {
        BedRecord {
            seqid: self.seqid.to_string(),
            start: self.start,
            end: self.end,
            accn: self.accn.to_string(),
            score: self.score().map(str::to_string),
            strand: self.strand(),
        }
    }
}

/// A genome's genes in rank order with an accession index
#[derive(Debug, Clone, Default)]
pub struct BedFile {
    /// Display name used in lookup errors (usually the file path)
    name: String,
    records: Vec<BedRecord>,
    order: HashMap<String, usize>,
}

impl BedFile {
    /// Build from unsorted records
    ///
    /// If an accession occurs more than once the last rank wins.
    pub fn from_records(name: impl Into<String>, mut records: Vec<BedRecord>) -> Self {
        records.sort_by(|a, b| {
            (a.seqid.as_str(), a.start, a.accn.as_str()).cmp(&(b.seqid.as_str(), b.start, b.accn.as_str()))
        });
        let order = records
            .iter()
            .enumerate()
            .map(|(rank, record)| (record.accn.clone(), rank))
            .collect();
        Self {
            name: name.into(),
            records,
            order,
        }
    }

    /// Parse BED lines from any reader
    pub fn from_reader<R: BufRead>(name: impl Into<String>, reader: R) -> BedResult<Self> {
        let mut records = Vec::new();
        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let trimmed = line.trim_end();
            if trimmed.is_empty()
                || trimmed.starts_with('#')
                || trimmed.starts_with("track")
                || trimmed.starts_with("browser")
            {
                continue;
            }
            let view = BedRecordView::parse(trimmed.as_bytes(), index + 1)?;
            records.push(view.to_record());
        }
        Ok(Self::from_records(name, records))
    }

    /// Load a (possibly compressed) BED file
    pub fn from_path<P: AsRef<Path>>(path: P) -> BedResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BedParseError::FileNotFound(path.to_path_buf()));
        }
        let bed = Self::from_reader(path.display().to_string(), open_reader(path)?)?;
        log::debug!("Loaded {} genes from {}", bed.len(), path.display());
        Ok(bed)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[BedRecord] {
        &self.records
    }

    /// Rank of a gene, if present
    pub fn rank(&self, accn: &str) -> Option<usize> {
        self.order.get(accn).copied()
    }

    /// Resolve a gene id to `(rank, record)`
    pub fn lookup(&self, accn: &str) -> Result<(usize, &BedRecord), LookupError> {
        self.rank(accn)
            .map(|rank| (rank, &self.records[rank]))
            .ok_or_else(|| LookupError::UnknownGene {
                accn: accn.to_string(),
                bed: self.name.clone(),
            })
    }

    /// Record at a given rank
    pub fn record(&self, rank: usize) -> Result<&BedRecord, LookupError> {
        self.records.get(rank).ok_or_else(|| LookupError::RankOutOfRange {
            rank,
            len: self.records.len(),
            bed: self.name.clone(),
        })
    }

    /// Accession at a given rank
    pub fn accn(&self, rank: usize) -> Result<&str, LookupError> {
        self.record(rank).map(|r| r.accn.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BED: &str = "chr2\t100\t200\tg4\n\
                       chr1\t500\t600\tg2\t0\t-\n\
                       # comment\n\
                       chr1\t100\t200\tg1\t0\t+\n\
                       \n\
                       chr1\t900\t950\tg3\n";

    #[test]
    fn test_view_bed4() {
        let view = BedRecordView::parse(b"chr1\t1000\t2000\tgene1", 1).unwrap();
        assert_eq!(view.seqid, "chr1");
        assert_eq!(view.start, 1000);
        assert_eq!(view.end, 2000);
        assert_eq!(view.accn, "gene1");
        assert_eq!(view.field_count(), 4);
        assert_eq!(view.score(), None);
        assert_eq!(view.strand(), None);
    }

    #[test]
    fn test_view_bed6() {
        let view = BedRecordView::parse(b"chr1\t1000\t2000\tgene1\t500\t-", 1).unwrap();
        assert_eq!(view.score(), Some("500"));
        assert_eq!(view.strand(), Some('-'));

        let dot = BedRecordView::parse(b"chr1\t1000\t2000\tgene1\t500\t.", 1).unwrap();
        assert_eq!(dot.strand(), None);
    }

    #[test]
    fn test_view_too_few_fields() {
        let result = BedRecordView::parse(b"chr1\t1000\t2000", 7);
        assert!(matches!(
            result,
            Err(BedParseError::TooFewFields { line: 7, expected: 4, found: 3 })
        ));
    }

    #[test]
    fn test_view_invalid_number() {
        let result = BedRecordView::parse(b"chr1\tabc\t2000\tg", 3);
        assert!(matches!(
            result,
            Err(BedParseError::InvalidNumber { line: 3, field: "start", .. })
        ));
    }

    #[test]
    fn test_view_empty_line() {
        assert!(matches!(BedRecordView::parse(b"", 1), Err(BedParseError::EmptyLine)));
    }

    #[test]
    fn test_bed_file_rank_order() {
        let bed = BedFile::from_reader("test.bed", BED.as_bytes()).unwrap();
        assert_eq!(bed.name(), "test.bed");
        assert_eq!(bed.len(), 4);
        let accns: Vec<&str> = bed.records().iter().map(|r| r.accn.as_str()).collect();
        assert_eq!(accns, vec!["g1", "g2", "g3", "g4"]);
        assert_eq!(bed.rank("g3"), Some(2));
        assert_eq!(bed.rank("missing"), None);
    }

    #[test]
    fn test_bed_file_lookup() {
        let bed = BedFile::from_reader("test.bed", BED.as_bytes()).unwrap();
        let (rank, record) = bed.lookup("g2").unwrap();
        assert_eq!(rank, 1);
        assert_eq!(record.start, 500);
        assert_eq!(record.strand, Some('-'));

        assert!(matches!(bed.lookup("nope"), Err(LookupError::UnknownGene { .. })));
        assert_eq!(bed.accn(3).unwrap(), "g4");
        assert!(matches!(bed.accn(4), Err(LookupError::RankOutOfRange { rank: 4, len: 4, .. })));
    }

    #[test]
    fn test_bed_file_error_line_number() {
        let data = "chr1\t1\t2\tg1\nchr1\tx\t2\tg2\n";
        let err = BedFile::from_reader("bad.bed", data.as_bytes()).unwrap_err();
        assert!(matches!(err, BedParseError::InvalidNumber { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_accession_last_wins() {
        let data = "chr1\t1\t2\tg1\nchr1\t5\t6\tg1\n";
        let bed = BedFile::from_reader("dup.bed", data.as_bytes()).unwrap();
        assert_eq!(bed.rank("g1"), Some(1));
    }
}
