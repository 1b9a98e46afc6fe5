//! # inheritance-filter
//!
//! A library for filtering variants by their compatibility with Mendelian modes
//! of inheritance in a family.
//!
//! Given a pedigree (who is related to whom, their sex and whether they are
//! affected) and the genotype calls of the family members at a set of variant
//! sites, each checker returns the subset of calls that could explain the
//! disease under its mode of inheritance.
//!
//! ## Features
//!
//! - **Autosomal dominant**: heterozygous affecteds, wild-type unaffecteds
//! - **Autosomal recessive**: homozygous affecteds or compound heterozygotes with one variant from each parent
//! - **X-linked**: hemizygous males, heterozygous or homozygous females
//! - **Mitochondrial**: maternal transmission
//! - **Singletons**: relaxed per-sample rules when only the index case is sequenced
//!
//! ## Example
//!
//! ```rust
//! use inheritance_filter::{
//!     CheckerConfig, ChromosomeType, Disease, Genotype, GenotypeCalls,
//!     MendelianInheritanceChecker, ModeOfInheritance, Pedigree, PedigreeEntry, Sex,
//! };
//!
//! let pedigree = Pedigree::new(
//!     "fam",
//!     vec![
//!         PedigreeEntry::new("father", Sex::Male, Disease::Unaffected),
//!         PedigreeEntry::new("mother", Sex::Female, Disease::Unaffected),
//!         PedigreeEntry::new("child", Sex::Female, Disease::Affected)
//!             .with_parents(Some("father"), Some("mother")),
//!     ],
//! )
//! .unwrap();
//!
//! let calls = vec![GenotypeCalls::builder(ChromosomeType::Autosomal)
//!     .call("father", Genotype::Het)
//!     .call("mother", Genotype::Het)
//!     .call("child", Genotype::HomAlt)
//!     .build()];
//!
//! let engine = MendelianInheritanceChecker::new(pedigree, CheckerConfig::default());
//! let results = engine.check_all(&calls).unwrap();
//!
//! assert_eq!(results[&ModeOfInheritance::AutosomalRecessive].len(), 1);
//! assert!(results[&ModeOfInheritance::AutosomalDominant].is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Pedigree, person and genotype call types
//! - [`checking`]: One checker per mode of inheritance and the dispatching engine
//! - [`parsing`]: Readers for PED and VCF files
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input limits and validation

pub mod checking;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use checking::checker::{CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
pub use checking::engine::MendelianInheritanceChecker;
pub use core::calls::GenotypeCalls;
pub use core::pedigree::{Pedigree, PedigreeEntry, PedigreeError};
pub use core::person::Person;
pub use core::types::*;
