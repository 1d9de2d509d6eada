//! Gene-end adjacency graphs in Graphviz DOT format
//!
//! # Adjacency File Format
//!
//! ```text
//! genome 0
//! chr 0
//! -1 -13 -16 3 4 -6126 -5 17
//! chr 1
//! 138 6133 -5387 144
//! genome 1
//! ...
//! ```
//!
//! Each gene `g` contributes two nodes, `gL` and `gR`, visited in that order
//! on the forward strand and reversed for `-g`. Consecutive nodes of a gene
//! order line are joined by an edge coloured after its genome. Parallel
//! edges are kept, so genomes sharing an adjacency show up as a bundle.

use crate::core::error::{AdjacencyError, Result};
use crate::core::io::{create_writer, open_reader};
use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Edge colours, one per genome, reused cyclically
pub const PALETTE: [&str; 4] = ["green", "magenta", "tomato", "peachpuff"];

/// Output file names written into the output directory
pub const GRAPH_FILE: &str = "graph.dot";
pub const SUBGRAPH_FILE: &str = "subgraph.dot";

/// Edge attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyEdge {
    /// Running edge number over the whole input
    pub key: usize,
    pub color: &'static str,
}

/// Undirected multigraph over named gene-end nodes
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    graph: UnGraph<String, AdjacencyEdge>,
    nodes: HashMap<String, NodeIndex>,
    attrs: Vec<(String, String)>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.nodes.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), index);
        index
    }

    /// Add an edge, creating missing endpoints
    pub fn add_edge(&mut self, a: &str, b: &str, edge: AdjacencyEdge) {
        let (a, b) = (self.node(a), self.node(b));
        self.graph.add_edge(a, b, edge);
    }

    /// Set a graph level attribute such as `dpi`
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(attr) => attr.1 = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edges in insertion order as `(a, b, attributes)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, AdjacencyEdge)> + '_ {
        self.graph.edge_indices().filter_map(move |e| {
            let (a, b) = self.graph.edge_endpoints(e)?;
            let edge = *self.graph.edge_weight(e)?;
            Some((self.graph[a].as_str(), self.graph[b].as_str(), edge))
        })
    }

    /// Write the graph as an undirected DOT document
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "graph {{")?;
        if !self.attrs.is_empty() {
            let attrs = self
                .attrs
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .join(", ");
            writeln!(out, "\tgraph [{}];", attrs)?;
        }
        for (a, b, edge) in self.edges() {
            writeln!(
                out,
                "\t{} -- {} [key={}, color={}];",
                quote(a),
                quote(b),
                edge.key,
                edge.color
            )?;
        }
        writeln!(out, "}}")
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('"', "\\\""))
}

/// Gene id with any strand sign removed
fn gene_id(token: &str) -> &str {
    token.trim_matches('-')
}

/// Ordered gene-end nodes of a signed gene as `(gene, node)` pairs
fn gene_ends(token: &str) -> [(&str, String); 2] {
    let gene = gene_id(token);
    let left = (gene, format!("{}L", gene));
    let right = (gene, format!("{}R", gene));
    if token.starts_with('-') {
        [right, left]
    } else {
        [left, right]
    }
}

/// Read a whitespace separated gene set, dropping strand signs
pub fn read_gene_set<R: BufRead>(reader: R) -> io::Result<HashSet<String>> {
    let mut set = HashSet::new();
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            set.insert(gene_id(token).to_string());
        }
    }
    Ok(set)
}

/// Build the full graph and the subgraph induced by `subset`
///
/// An edge joins the subgraph when either endpoint belongs to a gene in
/// `subset`; it keeps its key and colour.
pub fn build_graphs<R: BufRead>(
    reader: R,
    subset: &HashSet<String>,
) -> std::result::Result<(AdjacencyGraph, AdjacencyGraph), AdjacencyError> {
    let mut graph = AdjacencyGraph::new();
    let mut subgraph = AdjacencyGraph::new();
    let mut genome: Option<usize> = None;
    let mut key = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace().peekable();
        let tag = match tokens.peek() {
            Some(tag) => *tag,
            None => continue,
        };

        match tag {
            "chr" | "ChrNumber" => continue,
            "genome" => {
                genome = Some(genome.map_or(0, |g| g + 1));
                continue;
            }
            _ => {}
        }

        let color = match genome {
            Some(g) => PALETTE[g % PALETTE.len()],
            None => return Err(AdjacencyError::MissingGenome { line: index + 1 }),
        };

        let nodes: Vec<(&str, String)> = tokens.flat_map(gene_ends).collect();
        for ((gene_a, a), (gene_b, b)) in nodes.iter().tuple_windows() {
            let edge = AdjacencyEdge { key, color };
            graph.add_edge(a, b, edge);
            if subset.contains(*gene_a) || subset.contains(*gene_b) {
                subgraph.add_edge(a, b, edge);
            }
            key += 1;
        }
    }

    graph.set_attr("dpi", "300");
    Ok((graph, subgraph))
}

/// Graph export statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdjGraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub sub_nodes: usize,
    pub sub_edges: usize,
    pub graph_path: PathBuf,
    pub subgraph_path: PathBuf,
}

/// Build adjacency graphs and write `graph.dot` and `subgraph.dot` to `outdir`
pub fn convert_adjgraph<P: AsRef<Path>>(infile: P, subgraph: P, outdir: P) -> Result<AdjGraphStats> {
    let subset = read_gene_set(open_reader(subgraph.as_ref())?)?;
    log::debug!("Loaded {} subgraph genes", subset.len());

    let (graph, sub) = build_graphs(open_reader(infile.as_ref())?, &subset)?;

    let outdir = outdir.as_ref();
    std::fs::create_dir_all(outdir)?;
    let graph_path = outdir.join(GRAPH_FILE);
    let subgraph_path = outdir.join(SUBGRAPH_FILE);

    for (g, path) in [(&graph, &graph_path), (&sub, &subgraph_path)] {
        let mut out = create_writer(path)?;
        g.write_dot(&mut out)?;
        out.flush()?;
        log::info!("Graph written to `{}`", path.display());
    }

    Ok(AdjGraphStats {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        sub_nodes: sub.node_count(),
        sub_edges: sub.edge_count(),
        graph_path,
        subgraph_path,
    })
}
