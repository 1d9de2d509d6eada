//! Flatten an anchor file into a pairs table
//!
//! Each anchor becomes one `query  subject  score  blockId` row. Rows are
//! sorted within their block and blocks keep file order.

use crate::core::error::Result;
use crate::core::io::create_writer;
use crate::formats::anchors::{block_id, parse_anchor_file, AnchorFile};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output path for a prefix: `<prefix>.pairs`
pub fn output_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{}.pairs", prefix))
}

/// Write all blocks as pairs rows, returning the number of rows
pub fn write_pairs<W: Write>(out: &mut W, anchors: &AnchorFile, prefix: &str) -> Result<usize> {
    let total = anchors.blocks.len();
    let mut npairs = 0;

    for (index, block) in anchors.blocks.iter().enumerate() {
        let id = block_id(prefix, index, total);
        let mut lines: Vec<String> = block
            .iter()
            .map(|r| format!("{}\t{}\t{}\t{}", r.query, r.subject, r.score, id))
            .collect();
        lines.sort_unstable();

        for line in &lines {
            writeln!(out, "{}", line)?;
        }
        npairs += lines.len();
    }

    Ok(npairs)
}

/// Convert an anchor file to `<prefix>.pairs`
///
/// Returns the written path and the number of pairs.
pub fn convert_pairs<P: AsRef<Path>>(anchor_path: P, prefix: &str) -> Result<(PathBuf, usize)> {
    let anchors = parse_anchor_file(anchor_path.as_ref())?;
    let path = output_path(prefix);

    let mut out = create_writer(&path)?;
    let npairs = write_pairs(&mut out, &anchors, prefix)?;
    out.flush()?;

    log::debug!("A total of {} pairs written to `{}`.", npairs, path.display());
    Ok((path, npairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::anchors::parse_anchor_bytes;

    #[test]
    fn test_rows_sorted_within_block() {
        let af = parse_anchor_bytes(b"###\ng3\th1\t10L\ng1\th9\t5\n###\na1\tb1\t7\n").unwrap();
        let mut out = Vec::new();
        let n = write_pairs(&mut out, &af, "rice").unwrap();

        assert_eq!(n, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "g1\th9\t5\trice1\ng3\th1\t10\trice1\na1\tb1\t7\trice2\n"
        );
    }

    #[test]
    fn test_block_ids_padded() {
        let text: String = (0..12).map(|i| format!("###\nq{}\ts{}\t1\n", i, i)).collect();
        let af = parse_anchor_bytes(text.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_pairs(&mut out, &af, "p").unwrap();

        let text = String::from_utf8(out).unwrap();
        let ids: Vec<&str> = text.lines().map(|l| l.rsplit('\t').next().unwrap()).collect();
        assert_eq!(ids.first(), Some(&"p01"));
        assert_eq!(ids.last(), Some(&"p12"));
    }

    #[test]
    fn test_empty_file() {
        let af = parse_anchor_bytes(b"").unwrap();
        let mut out = Vec::new();
        assert_eq!(write_pairs(&mut out, &af, "x").unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("data/rice"), PathBuf::from("data/rice.pairs"));
    }
}
