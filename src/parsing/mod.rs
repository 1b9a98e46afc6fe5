//! Readers turning pedigree and variant files into checker inputs.
//!
//! This module provides parsers for:
//!
//! - **PED files**: Six-column pedigree files (family, individual, father, mother, sex, phenotype)
//! - **VCF files**: Variant records with per-sample `GT` calls, plain, gzip or BGZF-compressed
//!
//! ## Example
//!
//! ```rust
//! use inheritance_filter::parsing::ped::parse_ped_text;
//! use inheritance_filter::parsing::vcf::parse_vcf_text;
//!
//! let pedigree = parse_ped_text("fam\tindex\t0\t0\t2\t2\n", None).unwrap();
//!
//! let vcf = "##fileformat=VCFv4.2\n\
//!            #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tindex\n\
//!            chr1\t100\t.\tA\tG\t.\tPASS\tGENE=BRCA2\tGT\t0/1\n";
//! let variants = parse_vcf_text(vcf, "GENE").unwrap();
//!
//! assert_eq!(pedigree.len(), 1);
//! assert_eq!(variants.records.len(), 1);
//! assert_eq!(variants.records[0].gene.as_deref(), Some("BRCA2"));
//! ```
//!
//! ## PED Codes
//!
//! | Column | Value | Meaning |
//! |--------|-------|---------|
//! | father, mother | `0` | Unknown parent (founder) |
//! | sex | `1` / `2` | Male / female, anything else unknown |
//! | phenotype | `1` / `2` | Unaffected / affected, anything else unknown |

pub mod ped;
pub mod vcf;

use thiserror::Error;

use crate::core::pedigree::PedigreeError;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many pedigree members: {0} exceeds maximum allowed (10000)")]
    TooManySamples(usize),

    #[error("Too many VCF records: {0} exceeds maximum allowed (5000000)")]
    TooManyRecords(usize),

    #[error("Invalid pedigree: {0}")]
    Pedigree(#[from] PedigreeError),
}
