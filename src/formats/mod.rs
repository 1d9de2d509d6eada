//! File format adapters and command drivers
//!
//! Readers and writers for anchor and BED files, plus one driver per
//! command (collinear, zipbed, pairs, adjgraph).

pub mod adjgraph;
pub mod anchors;
pub mod bed;
pub mod collinear;
pub mod pairs;
pub mod zipbed;

pub use adjgraph::{build_graphs, convert_adjgraph, read_gene_set, AdjGraphStats, AdjacencyGraph};
pub use anchors::{block_id, parse_anchor_bytes, parse_anchor_file, AnchorFile, AnchorRecord};
pub use bed::{BedFile, BedRecord, BedRecordView};
pub use collinear::{convert_collinear, infer_bed_paths, reduce_blocks, CollinearStats};
pub use pairs::{convert_pairs, write_pairs};
pub use zipbed::{convert_zipbed, write_contigs, ZipStats};
