//! FastSynteny CLI entry point
//!
//! Collinear chaining of synteny blocks and ancestral gene order tools.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fast_synteny::core::{ChainConfig, Chainer, DEFAULT_WINDOW};
use fast_synteny::formats::{self, collinear, zipbed, BedFile};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fast-synteny")]
#[command(about = "Collinear chaining of synteny anchors and ancestral gene orders")]
#[command(version)]
#[command(author = "FastSynteny Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce synteny blocks to strictly collinear chains
    Collinear {
        /// Input anchor file (a.b.anchors)
        anchors: PathBuf,
        /// Query BED file (default: inferred from the anchor file name)
        #[arg(long)]
        qbed: Option<PathBuf>,
        /// Subject BED file (default: inferred from the anchor file name)
        #[arg(long)]
        sbed: Option<PathBuf>,
        /// Output file (default: a.b.collinear.anchors)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
        /// Look-ahead window of the chainer, in sorted anchors
        #[arg(short = 'w', long, default_value_t = DEFAULT_WINDOW)]
        window: usize,
        /// Number of threads
        #[arg(short = 't', long, default_value = "1")]
        threads: usize,
    },
    /// Build ancestral contigs from a collinear anchor file
    Zipbed {
        /// BED file of the genome the anchors refer to
        bed: PathBuf,
        /// Collinear anchor file
        anchors: PathBuf,
        /// Prefix of the contig names
        #[arg(long, default_value = zipbed::DEFAULT_PREFIX)]
        prefix: String,
        /// Output file (default: <prefix>.bed)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Convert an anchor file to a pairs file
    Pairs {
        /// Input anchor file
        anchors: PathBuf,
        /// Output prefix, also used for block ids (writes <prefix>.pairs)
        prefix: String,
    },
    /// Construct gene-end adjacency graphs for graphviz
    Adjgraph {
        /// Adjacency file with `genome` headers and signed gene orders
        adjacency: PathBuf,
        /// Genes whose adjacencies form the subgraph
        subgraph: PathBuf,
        /// Output directory for graph.dot and subgraph.dot
        #[arg(long, default_value = ".")]
        outdir: PathBuf,
    },
}

fn load_bed(path: &Path) -> anyhow::Result<BedFile> {
    let start = Instant::now();
    eprintln!("Loading BED file: {:?}", path);

    let bed = BedFile::from_path(path)
        .with_context(|| format!("Failed to load BED file {}", path.display()))?;

    eprintln!("{} genes loaded in {:.2}s", bed.len(), start.elapsed().as_secs_f64());
    Ok(bed)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Commands::Collinear { anchors, qbed, sbed, output, window, threads } => {
            let (qbed_path, sbed_path) = match (qbed, sbed) {
                (Some(q), Some(s)) => (q, s),
                (q, s) => {
                    let (iq, is) = collinear::infer_bed_paths(&anchors)?;
                    (q.unwrap_or(iq), s.unwrap_or(is))
                }
            };
            let qbed = load_bed(&qbed_path)?;
            let sbed = if sbed_path == qbed_path {
                qbed.clone()
            } else {
                load_bed(&sbed_path)?
            };

            let output_path = output.unwrap_or_else(|| collinear::default_output_path(&anchors));
            let chainer = Chainer::new(ChainConfig::with_window(window));

            eprintln!("Chaining anchors: {:?} -> {:?} (window={})", anchors, output_path, window);
            let stats = formats::convert_collinear(&anchors, &output_path, &qbed, &sbed, &chainer, threads)
                .with_context(|| format!("Failed to chain {}", anchors.display()))?;

            eprintln!("\n=== Chaining Statistics ===");
            eprintln!("Blocks:          {}", stats.blocks);
            eprintln!("Input anchors:   {}", stats.anchors);
            eprintln!("Kept anchors:    {}", stats.kept);
            eprintln!("  - Ascending:   {}", stats.ascending);
            eprintln!("  - Descending:  {}", stats.descending);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Zipbed { bed, anchors, prefix, output } => {
            let output_path = output.unwrap_or_else(|| zipbed::default_output_path(&prefix));

            eprintln!("Reconstructing contigs: {:?} + {:?} -> {:?}", bed, anchors, output_path);
            let stats = formats::convert_zipbed(&bed, &anchors, &output_path, &prefix)
                .with_context(|| format!("Failed to reconstruct contigs from {}", anchors.display()))?;

            eprintln!("\n=== Reconstruction Statistics ===");
            eprintln!("Contigs:         {}", stats.blocks);
            eprintln!("Anchors:         {}", stats.anchors);
            eprintln!("Genes written:   {}", stats.genes);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Pairs { anchors, prefix } => {
            let (path, npairs) = formats::convert_pairs(&anchors, &prefix)
                .with_context(|| format!("Failed to convert {}", anchors.display()))?;

            eprintln!("\n=== Pairs Statistics ===");
            eprintln!("Output:          {:?}", path);
            eprintln!("Pairs written:   {}", npairs);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Adjgraph { adjacency, subgraph, outdir } => {
            let stats = formats::convert_adjgraph(&adjacency, &subgraph, &outdir)
                .with_context(|| format!("Failed to build graphs from {}", adjacency.display()))?;

            eprintln!("\n=== Graph Statistics ===");
            eprintln!("Graph:           {:?} ({} nodes, {} edges)", stats.graph_path, stats.nodes, stats.edges);
            eprintln!("Subgraph:        {:?} ({} nodes, {} edges)", stats.subgraph_path, stats.sub_nodes, stats.sub_edges);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }
    }

    Ok(())
}
