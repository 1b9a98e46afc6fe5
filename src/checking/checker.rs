use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checking::queries::PedigreeQueryDecorator;
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::person::Person;
use crate::core::types::{ChromosomeType, Genotype};

/// The genotype calls cannot be analysed against the bound pedigree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IncompatiblePedigreeError {
    #[error("Sample '{sample}' is not a member of pedigree '{pedigree}'")]
    UnknownSample { sample: String, pedigree: String },

    #[error("Genotype calls carry no samples for singleton pedigree '{0}'")]
    NoSamples(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// How strictly genotype call samples are matched against the pedigree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SampleValidation {
    /// Every call sample must be a pedigree member
    #[default]
    Strict,
    /// Unknown samples are ignored and missing members read as absent genotypes
    Lenient,
}

/// Which parent set the X-linked recessive homozygous checker uses for the male-parent rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum XrParentRule {
    /// Look up male parents in the mothers-of-affected set, reproducing the
    /// results of earlier releases. The lookup still requires the parent to be
    /// male, so it only fires for males listed as a mother and an unaffected
    /// father of an affected person is never checked.
    #[default]
    Legacy,
    /// Look up male parents in the fathers-of-affected set
    Corrected,
}

/// Configuration shared by all checkers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub sample_validation: SampleValidation,
    pub xr_parent_rule: XrParentRule,
}

impl CheckerConfig {
    /// Load config from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or is not valid JSON.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse config from a JSON string; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A mode-of-inheritance compatibility check bound to one pedigree
pub trait InheritanceChecker: Send + Sync {
    /// Return the calls compatible with this checker's mode of inheritance.
    ///
    /// `calls` are all records of one analysis unit, typically one gene. The
    /// result keeps input order and holds each compatible record once.
    ///
    /// # Errors
    ///
    /// Returns `IncompatiblePedigreeError` if the calls cannot be reconciled
    /// with the pedigree.
    fn filter_compatible_records<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError>;
}

/// State and helpers common to every checker
#[derive(Debug, Clone)]
pub struct CheckerBase {
    queries: PedigreeQueryDecorator,
    sample_validation: SampleValidation,
}

impl CheckerBase {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            queries: PedigreeQueryDecorator::new(pedigree),
            sample_validation: config.sample_validation,
        }
    }

    pub fn pedigree(&self) -> &Pedigree {
        self.queries.pedigree()
    }

    pub fn queries(&self) -> &PedigreeQueryDecorator {
        &self.queries
    }

    pub fn is_singleton(&self) -> bool {
        self.queries.is_singleton()
    }

    /// The only member of a singleton pedigree
    pub fn index_person(&self) -> &Person {
        &self.pedigree().members()[0]
    }

    /// Check that `calls` can be analysed against the pedigree
    ///
    /// # Errors
    ///
    /// Under `SampleValidation::Strict`, returns `UnknownSample` for the first
    /// sample that is not a pedigree member, or `NoSamples` if a call for a
    /// singleton pedigree carries no samples at all.
    pub fn validate(&self, calls: &[GenotypeCalls]) -> Result<(), IncompatiblePedigreeError> {
        if self.sample_validation == SampleValidation::Lenient {
            return Ok(());
        }

        let pedigree = self.pedigree();
        for call in calls {
            if self.is_singleton() && call.sample_count() == 0 {
                return Err(IncompatiblePedigreeError::NoSamples(
                    pedigree.name().to_string(),
                ));
            }
            if let Some(sample) = call.sample_names().find(|s| !pedigree.contains(s)) {
                return Err(IncompatiblePedigreeError::UnknownSample {
                    sample: sample.to_string(),
                    pedigree: pedigree.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Genotype of the singleton's sample: by name, falling back to the first sample
    pub fn singleton_genotype(&self, call: &GenotypeCalls) -> Option<Genotype> {
        let name = self.index_person().name();
        if call.contains_sample(name) {
            call.genotype_for_sample(name)
        } else {
            call.genotype_at(0)
        }
    }

    /// Validate, then keep each call of the given chromosome type that passes
    /// the singleton or family predicate
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`validate`](Self::validate).
    pub fn filter_each<'c>(
        &self,
        calls: &'c [GenotypeCalls],
        chromosome_type: Option<ChromosomeType>,
        singleton: impl Fn(&GenotypeCalls) -> bool,
        family: impl Fn(&GenotypeCalls) -> bool,
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        self.validate(calls)?;

        let on_chromosome = |call: &GenotypeCalls| {
            !matches!(chromosome_type, Some(t) if t != call.chromosome_type())
        };

        let result = if self.is_singleton() {
            calls.iter().filter(|&c| on_chromosome(c) && singleton(c)).collect()
        } else {
            calls.iter().filter(|&c| on_chromosome(c) && family(c)).collect()
        };
        Ok(result)
    }
}

/// Calls of `all` that appear in any of `parts`, in input order and without repeats
pub(crate) fn union_in_input_order<'c>(
    all: &'c [GenotypeCalls],
    parts: &[&[&'c GenotypeCalls]],
) -> Vec<&'c GenotypeCalls> {
    let keep: HashSet<*const GenotypeCalls> = parts
        .iter()
        .flat_map(|part| part.iter().map(|c| *c as *const GenotypeCalls))
        .collect();

    all.iter()
        .filter(|&c| keep.contains(&(c as *const GenotypeCalls)))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Pedigree and call fixtures shared by the checker tests.

    use std::sync::Arc;

    use crate::core::calls::GenotypeCalls;
    use crate::core::pedigree::{Pedigree, PedigreeEntry};
    use crate::core::types::{ChromosomeType, Disease, Genotype, Sex};

    pub use crate::core::types::Genotype::{Het, HomAlt, HomRef, NotObserved};

    pub fn person(name: &str, sex: Sex, disease: Disease) -> PedigreeEntry {
        PedigreeEntry::new(name, sex, disease)
    }

    pub fn child(name: &str, sex: Sex, disease: Disease, father: &str, mother: &str) -> PedigreeEntry {
        PedigreeEntry::new(name, sex, disease).with_parents(Some(father), Some(mother))
    }

    pub fn pedigree(entries: Vec<PedigreeEntry>) -> Arc<Pedigree> {
        Arc::new(Pedigree::new("fam", entries).unwrap())
    }

    pub fn singleton(sex: Sex) -> Arc<Pedigree> {
        pedigree(vec![person("index", sex, Disease::Affected)])
    }

    /// Unaffected father, unaffected mother, affected child of the given sex
    pub fn trio(child_sex: Sex) -> Arc<Pedigree> {
        pedigree(vec![
            person("father", Sex::Male, Disease::Unaffected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", child_sex, Disease::Affected, "father", "mother"),
        ])
    }

    /// Build calls from (sample, genotype) pairs
    pub fn calls(chromosome_type: ChromosomeType, genotypes: &[(&str, Genotype)]) -> GenotypeCalls {
        genotypes
            .iter()
            .fold(GenotypeCalls::builder(chromosome_type), |b, (name, gt)| {
                b.call(*name, *gt)
            })
            .build()
    }

    pub fn auto(genotypes: &[(&str, Genotype)]) -> GenotypeCalls {
        calls(ChromosomeType::Autosomal, genotypes)
    }

    pub fn x(genotypes: &[(&str, Genotype)]) -> GenotypeCalls {
        calls(ChromosomeType::XChromosomal, genotypes)
    }

    pub fn mt(genotypes: &[(&str, Genotype)]) -> GenotypeCalls {
        calls(ChromosomeType::Mitochondrial, genotypes)
    }

    /// Father, mother, child genotypes at one trio site
    pub fn trio_calls(chromosome_type: ChromosomeType, f: Genotype, m: Genotype, c: Genotype) -> GenotypeCalls {
        calls(chromosome_type, &[("father", f), ("mother", m), ("child", c)])
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::core::types::{Disease, Sex};

    #[test]
    fn test_validate_unknown_sample() {
        let base = CheckerBase::new(trio(Sex::Male), &CheckerConfig::default());
        let calls = vec![auto(&[("father", HomRef), ("stranger", Het)])];

        let err = base.validate(&calls).unwrap_err();
        assert_eq!(
            err,
            IncompatiblePedigreeError::UnknownSample {
                sample: "stranger".to_string(),
                pedigree: "fam".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_lenient_accepts_unknown_sample() {
        let config = CheckerConfig {
            sample_validation: SampleValidation::Lenient,
            ..CheckerConfig::default()
        };
        let base = CheckerBase::new(trio(Sex::Male), &config);
        let calls = vec![auto(&[("stranger", Het)])];
        assert!(base.validate(&calls).is_ok());
    }

    #[test]
    fn test_validate_singleton_without_samples() {
        let base = CheckerBase::new(singleton(Sex::Female), &CheckerConfig::default());
        let calls = vec![auto(&[])];
        assert_eq!(
            base.validate(&calls).unwrap_err(),
            IncompatiblePedigreeError::NoSamples("fam".to_string())
        );
    }

    #[test]
    fn test_singleton_genotype_by_name_then_index() {
        let base = CheckerBase::new(singleton(Sex::Female), &CheckerConfig::default());
        assert_eq!(
            base.singleton_genotype(&auto(&[("index", HomAlt)])),
            Some(HomAlt)
        );
        assert_eq!(
            base.singleton_genotype(&auto(&[("renamed", Het)])),
            Some(Het)
        );
    }

    #[test]
    fn test_filter_each_applies_chromosome_type() {
        let base = CheckerBase::new(
            pedigree(vec![person("a", Sex::Male, Disease::Affected)]),
            &CheckerConfig::default(),
        );
        let calls = vec![x(&[("a", Het)]), auto(&[("a", Het)])];
        let result = base
            .filter_each(&calls, Some(ChromosomeType::Autosomal), |_| true, |_| true)
            .unwrap();
        assert_eq!(result.len(), 1);
        assert!(std::ptr::eq(result[0], &calls[1]));

        let result = base.filter_each(&calls, None, |_| true, |_| true).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_union_in_input_order() {
        let calls = vec![
            auto(&[("a", Het)]),
            auto(&[("a", HomAlt)]),
            auto(&[("a", HomRef)]),
        ];
        let left = vec![&calls[2], &calls[0]];
        let right = vec![&calls[0]];
        let union = union_in_input_order(&calls, &[left.as_slice(), right.as_slice()]);
        assert_eq!(union.len(), 2);
        assert!(std::ptr::eq(union[0], &calls[0]));
        assert!(std::ptr::eq(union[1], &calls[2]));
    }

    #[test]
    fn test_config_from_json() {
        let config = CheckerConfig::from_json(r#"{"xr_parent_rule": "corrected"}"#).unwrap();
        assert_eq!(config.xr_parent_rule, XrParentRule::Corrected);
        assert_eq!(config.sample_validation, SampleValidation::Strict);

        assert!(CheckerConfig::from_json("{not json").is_err());
    }
}
