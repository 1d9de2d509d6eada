//! End-to-end tests over real files
//!
//! Runs the command drivers against files in a temporary directory:
//! chaining a self comparison, rebuilding contigs from the result, and the
//! pairs and adjacency graph exports.

use fast_synteny::core::{Chainer, SyntenyError};
use fast_synteny::formats::{
    self, collinear, parse_anchor_file, AnchorFile, BedFile,
};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

/// One chromosome with genes `rice0..rice{n-1}` every 1 kb
fn write_bed(path: &Path, n: usize) {
    let mut text = String::new();
    // reverse so loading has to sort
    for i in (0..n).rev() {
        text.push_str(&format!("chr1\t{}\t{}\trice{}\t0\t+\n", i * 1000, i * 1000 + 500, i));
    }
    fs::write(path, text).unwrap();
}

const ANCHORS: &str = "###\n\
                       rice0\trice10\t100L\n\
                       rice1\trice11\t100L\n\
                       rice2\trice9\t100L\n\
                       rice4\trice13\t100L\n\
                       ###\n\
                       rice20\trice39\t49\n\
                       rice22\trice37\t49\n\
                       rice23\trice30\t49\n";

#[test]
fn test_collinear_then_zipbed() {
    let dir = tempdir().unwrap();
    let bed_path = dir.path().join("rice.bed");
    let anchor_path = dir.path().join("rice.rice.1x1.anchors");
    write_bed(&bed_path, 40);
    fs::write(&anchor_path, ANCHORS).unwrap();

    let (qbed_path, sbed_path) = collinear::infer_bed_paths(&anchor_path).unwrap();
    assert_eq!(qbed_path, bed_path);
    assert_eq!(sbed_path, bed_path);

    let bed = BedFile::from_path(&bed_path).unwrap();
    let output = collinear::default_output_path(&anchor_path);
    assert_eq!(output, dir.path().join("rice.rice.1x1.collinear.anchors"));

    let stats =
        formats::convert_collinear(&anchor_path, &output, &bed, &bed, &Chainer::default(), 2).unwrap();
    assert_eq!(stats.blocks, 2);
    assert_eq!(stats.anchors, 7);
    assert_eq!(stats.kept, 6);
    assert_eq!((stats.ascending, stats.descending), (1, 1));

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "###\nrice0\trice10\t100\nrice1\trice11\t100\nrice4\trice13\t100\n\
         ###\nrice20\trice39\t49\nrice22\trice37\t49\nrice23\trice30\t49\n"
    );

    let contigs = dir.path().join("anc.bed");
    let zip = formats::convert_zipbed(&bed_path, &output, &contigs, "anc").unwrap();
    assert_eq!(zip.blocks, 2);

    let rows = fs::read_to_string(&contigs).unwrap();
    let first: Vec<&str> = rows
        .lines()
        .filter(|l| l.starts_with("anc1\t"))
        .map(|l| l.split('\t').nth(3).unwrap())
        .collect();
    // (0,10) (1,11) (4,13): gaps 2,3 against 12
    assert_eq!(first, vec!["rice0", "rice10", "rice1", "rice11", "rice2", "rice12", "rice3", "rice4", "rice13"]);

    let second: Vec<&str> = rows
        .lines()
        .filter(|l| l.starts_with("anc2\t"))
        .map(|l| l.split('\t').nth(3).unwrap())
        .collect();
    // (20,39) (22,37) (23,30): 21 against 38, then 36..31 walked downwards
    assert_eq!(
        second,
        vec![
            "rice20", "rice39", "rice21", "rice38", "rice22", "rice37", "rice36", "rice35",
            "rice34", "rice33", "rice32", "rice31", "rice23", "rice30"
        ]
    );
    assert_eq!(zip.genes, first.len() + second.len());
}

#[test]
fn test_gzip_anchor_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.b.anchors.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(ANCHORS.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let anchors: AnchorFile = parse_anchor_file(&path).unwrap();
    assert_eq!(anchors.blocks.len(), 2);
    assert_eq!(anchors.anchor_count(), 7);
}

#[test]
fn test_zipbed_rejects_unchained_block() {
    let dir = tempdir().unwrap();
    let bed_path = dir.path().join("rice.bed");
    let anchor_path = dir.path().join("raw.anchors");
    write_bed(&bed_path, 10);
    fs::write(&anchor_path, "###\nrice5\trice1\t1\nrice3\trice2\t1\n").unwrap();

    let err = formats::convert_zipbed(&bed_path, &anchor_path, &dir.path().join("out.bed"), "b")
        .unwrap_err();
    match err {
        SyntenyError::InvalidBlock { block, .. } => assert_eq!(block, "b1"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_inputs() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("none.anchors");
    assert!(parse_anchor_file(&missing).is_err());
    assert!(BedFile::from_path(dir.path().join("none.bed")).is_err());
}

#[test]
fn test_pairs_file() {
    let dir = tempdir().unwrap();
    let anchor_path = dir.path().join("rice.rice.anchors");
    fs::write(&anchor_path, ANCHORS).unwrap();
    let prefix = dir.path().join("rice").display().to_string();

    let (path, npairs) = formats::convert_pairs(&anchor_path, &prefix).unwrap();
    assert_eq!(npairs, 7);
    assert_eq!(path, dir.path().join("rice.pairs"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], format!("rice0\trice10\t100\t{}1", prefix));
    assert!(lines[4].ends_with(&format!("{}2", prefix)));
}

#[test]
fn test_adjgraph_files() {
    let dir = tempdir().unwrap();
    let adjacency = dir.path().join("adjacency.txt");
    let subgraph = dir.path().join("subgraph.txt");
    fs::write(&adjacency, "genome 0\nchr 0\n1 -2 3\ngenome 1\nchr 0\n1 2 -3\n").unwrap();
    fs::write(&subgraph, "-2\n").unwrap();
    let outdir = dir.path().join("graphs");

    let stats = formats::convert_adjgraph(&adjacency, &subgraph, &outdir).unwrap();
    assert_eq!(stats.nodes, 6);
    assert_eq!(stats.edges, 10);
    assert_eq!(stats.sub_edges, 6);

    let graph = fs::read_to_string(outdir.join("graph.dot")).unwrap();
    assert!(graph.starts_with("graph {\n\tgraph [dpi=300];\n"));
    assert!(graph.contains("\"1R\" -- \"2R\" [key=1, color=green];"));
    assert!(graph.contains("\"3R\" -- \"3L\" [key=9, color=magenta];"));

    let sub = fs::read_to_string(outdir.join("subgraph.dot")).unwrap();
    assert!(!sub.contains("dpi"));
    assert_eq!(sub.lines().filter(|l| l.contains(" -- ")).count(), 6);
}
