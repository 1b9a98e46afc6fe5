//! Command-line interface for inheritance-filter.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **filter**: Report the VCF records compatible with each mode of inheritance
//! - **pedigree**: Summarize a PED file as the checkers see it
//!
//! ## Usage
//!
//! ```text
//! # Check every mode, grouping records by the GENE INFO key
//! inheritance-filter filter family.ped family.vcf.gz
//!
//! # Only recessive modes, split into homozygous and compound heterozygous
//! inheritance-filter filter family.ped family.vcf --mode autosomal-recessive --mode x-recessive --sub-modes
//!
//! # JSON output for scripting
//! inheritance-filter filter family.ped family.vcf --format json
//!
//! # Inspect the pedigree
//! inheritance-filter pedigree family.ped
//! ```

use clap::{Parser, Subcommand};

pub mod filter;
pub mod pedigree;

#[derive(Parser)]
#[command(name = "inheritance-filter")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Filter variants by compatibility with Mendelian modes of inheritance")]
#[command(
    long_about = "inheritance-filter checks the genotype calls of a family against its pedigree.\n\nFor every analysis unit (by default all records sharing a GENE INFO value) it reports which records are compatible with:\n- Autosomal dominant and recessive inheritance (homozygous or compound heterozygous)\n- X-linked dominant and recessive inheritance\n- Mitochondrial (maternal) inheritance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report VCF records compatible with modes of inheritance
    Filter(filter::FilterArgs),

    /// Summarize a pedigree
    Pedigree(pedigree::PedigreeArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
