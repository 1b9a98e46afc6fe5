//! Core data types for inheritance checking.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Person`](person::Person): A pedigree member with sex, disease status and parent links
//! - [`Pedigree`](pedigree::Pedigree): An immutable family in canonical sample order
//! - [`GenotypeCalls`](calls::GenotypeCalls): The per-sample calls at one variant site
//! - [`Genotype`](types::Genotype), [`ChromosomeType`](types::ChromosomeType): Call and site classification
//! - [`ModeOfInheritance`](types::ModeOfInheritance), [`SubModeOfInheritance`](types::SubModeOfInheritance): What to check for
//!
//! ## Chromosome Naming
//!
//! Sites are classified by contig name, accepting the usual conventions:
//!
//! | Source | X chromosome | Mitochondrial |
//! |--------|--------------|---------------|
//! | UCSC   | chrX         | chrM          |
//! | NCBI   | X            | MT            |
//! | PLINK  | 23           | 26            |

pub mod calls;
pub mod chromosome;
pub mod pedigree;
pub mod person;
pub mod types;
