//! Build ancestral contigs from collinear blocks
//!
//! Each block of a collinear anchor file becomes one synthetic contig: the
//! anchors are resolved to ranks in a single BED table, interleaved with the
//! genes lying between them, and written as 0-indexed BED rows
//! `blockId  i  i+1  accn`.
//!
//! To build a pre-rho order, for example, run on `rice.bed` with
//! `rice.rice.1x1.collinear.anchors`.

use crate::core::error::{Result, SyntenyError};
use crate::core::io::create_writer;
use crate::core::Interleave;
use crate::formats::anchors::{block_id, parse_anchor_file, AnchorFile};
use crate::formats::bed::BedFile;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default contig name prefix
pub const DEFAULT_PREFIX: &str = "b";

/// Reconstruction statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ZipStats {
    pub blocks: usize,
    pub anchors: usize,
    pub genes: usize,
}

/// Default output path for a prefix: `<prefix>.bed`
pub fn default_output_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{}.bed", prefix))
}

/// Interleave every block and write contig rows
///
/// Ranks of both anchor columns are resolved through `bed`. Blocks keep
/// file order and are expected to be collinear with increasing query rank;
/// a block that is not aborts the reconstruction.
pub fn write_contigs<W: Write>(
    out: &mut W,
    bed: &BedFile,
    anchors: &AnchorFile,
    prefix: &str,
) -> Result<ZipStats> {
    let total = anchors.blocks.len();
    let mut stats = ZipStats::default();

    for (index, block) in anchors.blocks.iter().enumerate() {
        let id = block_id(prefix, index, total);

        let pairs = block
            .iter()
            .map(|record| -> Result<(usize, usize)> {
                Ok((bed.lookup(&record.query)?.0, bed.lookup(&record.subject)?.0))
            })
            .collect::<Result<Vec<_>>>()?;

        let contig = Interleave::new(&pairs).map_err(|source| SyntenyError::InvalidBlock {
            block: id.clone(),
            source,
        })?;

        let mut offset = 0;
        for rank in contig {
            writeln!(out, "{}\t{}\t{}\t{}", id, offset, offset + 1, bed.accn(rank)?)?;
            offset += 1;
        }

        log::debug!("{}: {} anchors -> {} genes", id, pairs.len(), offset);
        stats.blocks += 1;
        stats.anchors += pairs.len();
        stats.genes += offset;
    }

    Ok(stats)
}

/// Reconstruct ancestral contigs from a BED file and a collinear anchor file
pub fn convert_zipbed<P: AsRef<Path>>(
    bed_path: P,
    anchor_path: P,
    output: P,
    prefix: &str,
) -> Result<ZipStats> {
    let bed = BedFile::from_path(bed_path.as_ref())?;
    let anchors = parse_anchor_file(anchor_path.as_ref())?;

    let mut out = create_writer(output.as_ref())?;
    let stats = write_contigs(&mut out, &bed, &anchors, prefix)?;
    out.flush()?;

    log::info!("Reconstructed bedfile written to `{}`", output.as_ref().display());
    Ok(stats)
}
