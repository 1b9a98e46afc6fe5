//! Mode-of-inheritance compatibility checks.
//!
//! Every checker is bound to one [`Pedigree`](crate::core::pedigree::Pedigree)
//! and maps the genotype calls of one analysis unit (typically a gene) to the
//! subset compatible with its mode of inheritance:
//!
//! - [`AllAffectedChecker`](all_affected::AllAffectedChecker): every affected person carries the variant
//! - [`MendelianCheckerAD`](ad::MendelianCheckerAD): autosomal dominant
//! - [`MendelianCheckerAR`](ar::MendelianCheckerAR): autosomal recessive, the union of
//!   [`MendelianCheckerARHom`](ar_hom::MendelianCheckerARHom) and
//!   [`MendelianCheckerARCompoundHet`](ar_comp_het::MendelianCheckerARCompoundHet)
//! - [`MendelianCheckerXD`](xd::MendelianCheckerXD): X-linked dominant
//! - [`MendelianCheckerXR`](xr::MendelianCheckerXR): X-linked recessive, the union of
//!   [`MendelianCheckerXRHom`](xr_hom::MendelianCheckerXRHom) and
//!   [`MendelianCheckerXRCompoundHet`](xr_comp_het::MendelianCheckerXRCompoundHet)
//! - [`InheritanceCheckerMT`](mitochondrial::InheritanceCheckerMT): maternal transmission
//!
//! [`MendelianInheritanceChecker`](engine::MendelianInheritanceChecker) builds
//! all of them once per pedigree and dispatches by mode.
//!
//! ## Singletons and families
//!
//! A pedigree with a single member is checked with relaxed per-call rules on
//! that sample alone. Larger pedigrees apply rules over affected persons,
//! unaffected persons and the parents of affected persons.
//!
//! ## Example
//!
//! ```rust
//! use inheritance_filter::checking::checker::CheckerConfig;
//! use inheritance_filter::checking::engine::MendelianInheritanceChecker;
//! use inheritance_filter::core::calls::GenotypeCalls;
//! use inheritance_filter::core::pedigree::{Pedigree, PedigreeEntry};
//! use inheritance_filter::core::types::{ChromosomeType, Disease, Genotype, ModeOfInheritance, Sex};
//!
//! let pedigree = Pedigree::new(
//!     "fam",
//!     vec![PedigreeEntry::new("index", Sex::Female, Disease::Affected)],
//! )
//! .unwrap();
//! let engine = MendelianInheritanceChecker::new(pedigree, CheckerConfig::default());
//!
//! let calls = vec![GenotypeCalls::builder(ChromosomeType::Autosomal)
//!     .call("index", Genotype::Het)
//!     .build()];
//! let compatible = engine
//!     .check_mode(&calls, ModeOfInheritance::AutosomalDominant)
//!     .unwrap();
//! assert_eq!(compatible.len(), 1);
//! ```

pub mod ad;
pub mod all_affected;
pub mod ar;
pub mod ar_comp_het;
pub mod ar_hom;
pub mod candidate;
pub mod checker;
pub mod engine;
pub mod mitochondrial;
pub mod queries;
pub mod xd;
pub mod xr;
pub mod xr_comp_het;
pub mod xr_hom;

pub use checker::{CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
pub use engine::MendelianInheritanceChecker;
