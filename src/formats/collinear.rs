//! Reduce synteny blocks to strictly collinear chains
//!
//! Every block of an anchor file is resolved to gene ranks through the
//! query and subject BED tables, chained in both orientations, and written
//! back with gene ids as a `.collinear.anchors` file.

use crate::core::error::{LookupError, Result, SyntenyError};
use crate::core::io::create_writer;
use crate::core::{Anchor, Chainer, CollinearChain, Orientation};
use crate::formats::anchors::{parse_anchor_file, write_block, AnchorFile, AnchorRecord};
use crate::formats::bed::BedFile;
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reduction statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollinearStats {
    pub blocks: usize,
    pub anchors: usize,
    pub kept: usize,
    pub ascending: usize,
    pub descending: usize,
}

/// Default output path: `a.b.anchors` -> `a.b.collinear.anchors`
pub fn default_output_path(anchor_path: &Path) -> PathBuf {
    let text = anchor_path.to_string_lossy();
    let stem = match text.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => text.as_ref(),
    };
    PathBuf::from(format!("{}.collinear.anchors", stem))
}

/// Infer the BED tables from an anchor file named `a.b.<rest>`
///
/// Returns `dir/a.bed` and `dir/b.bed`; they are equal for a self comparison.
pub fn infer_bed_paths(anchor_path: &Path) -> std::result::Result<(PathBuf, PathBuf), LookupError> {
    let cannot = || LookupError::CannotInferBeds(anchor_path.to_path_buf());
    let name = anchor_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(cannot)?;

    let mut parts = name.splitn(3, '.');
    let (query, subject) = match (parts.next(), parts.next(), parts.next()) {
        (Some(q), Some(s), Some(_)) if !q.is_empty() && !s.is_empty() => (q, s),
        _ => return Err(cannot()),
    };

    let dir = anchor_path.parent().unwrap_or_else(|| Path::new(""));
    Ok((dir.join(format!("{}.bed", query)), dir.join(format!("{}.bed", subject))))
}

/// Resolve a block of gene ids to ranked anchors
pub fn resolve_block(records: &[AnchorRecord], qbed: &BedFile, sbed: &BedFile) -> Result<Vec<Anchor>> {
    records
        .iter()
        .map(|record| -> Result<Anchor> {
            let (query, _) = qbed.lookup(&record.query)?;
            let (subject, _) = sbed.lookup(&record.subject)?;
            let weight = record.weight()?;
            Ok(Anchor::new(query, subject, weight))
        })
        .collect()
}

/// Chain every block of an anchor file
///
/// Blocks are independent; with `threads > 1` they are chained on a rayon
/// pool while the output keeps file order.
pub fn reduce_blocks(
    anchors: &AnchorFile,
    qbed: &BedFile,
    sbed: &BedFile,
    chainer: &Chainer,
    threads: usize,
) -> Result<Vec<CollinearChain>> {
    let blocks: Vec<Vec<Anchor>> = anchors
        .blocks
        .iter()
        .map(|records| resolve_block(records, qbed, sbed))
        .collect::<Result<_>>()?;

    let chains: Vec<CollinearChain> = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| {
                SyntenyError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to create thread pool: {}", e),
                ))
            })?;
        pool.install(|| blocks.par_iter().map(|b| chainer.best_chain(b)).collect())
    } else {
        blocks.iter().map(|b| chainer.best_chain(b)).collect()
    };

    for (index, (block, chain)) in blocks.iter().zip(&chains).enumerate() {
        log::debug!(
            "block {}: {} of {} anchors kept ({}), score {}",
            index + 1,
            chain.len(),
            block.len(),
            chain.orientation.to_char(),
            chain.score
        );
    }

    Ok(chains)
}

/// Write chains with gene ids restored from the BED tables
pub fn write_chains<W: Write>(
    out: &mut W,
    chains: &[CollinearChain],
    qbed: &BedFile,
    sbed: &BedFile,
) -> Result<()> {
    for chain in chains {
        let mut rows = Vec::with_capacity(chain.len());
        for a in &chain.anchors {
            rows.push((qbed.accn(a.query)?, sbed.accn(a.subject)?, a.weight));
        }
        write_block(out, rows)?;
    }
    Ok(())
}

/// Reduce an anchor file to collinear chains and write the result
pub fn convert_collinear<P: AsRef<Path>>(
    input: P,
    output: P,
    qbed: &BedFile,
    sbed: &BedFile,
    chainer: &Chainer,
    threads: usize,
) -> Result<CollinearStats> {
    let anchors = parse_anchor_file(input.as_ref())?;
    log::debug!(
        "Chaining {} blocks against {} and {} (window {})",
        anchors.blocks.len(),
        qbed.name(),
        sbed.name(),
        chainer.config().window
    );
    let chains = reduce_blocks(&anchors, qbed, sbed, chainer, threads)?;

    let mut out = create_writer(output.as_ref())?;
    write_chains(&mut out, &chains, qbed, sbed)?;
    out.flush()?;

    let stats = CollinearStats {
        blocks: chains.len(),
        anchors: anchors.anchor_count(),
        kept: chains.iter().map(CollinearChain::len).sum(),
        ascending: chains
            .iter()
            .filter(|c| c.orientation == Orientation::Ascending)
            .count(),
        descending: chains
            .iter()
            .filter(|c| c.orientation == Orientation::Descending)
            .count(),
    };
    log::info!(
        "Collinear anchors written to `{}` ({} of {} kept)",
        output.as_ref().display(),
        stats.kept,
        stats.anchors
    );
    Ok(stats)
}
