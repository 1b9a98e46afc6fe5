use std::sync::Arc;

use crate::checking::checker::{CheckerBase, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::types::{ChromosomeType, Genotype};

/// Autosomal dominant inheritance: affecteds are heterozygous, unaffecteds are wild type
#[derive(Debug, Clone)]
pub struct MendelianCheckerAD {
    base: CheckerBase,
}

impl MendelianCheckerAD {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            base: CheckerBase::new(pedigree, config),
        }
    }

    fn is_compatible_singleton(&self, calls: &GenotypeCalls) -> bool {
        self.base.singleton_genotype(calls) == Some(Genotype::Het)
    }

    fn is_compatible_family(&self, calls: &GenotypeCalls) -> bool {
        let mut affected_hets = 0;
        for person in self.base.pedigree().members() {
            let gt = calls.genotype_for_sample(person.name());
            if person.is_affected() {
                match gt {
                    Some(Genotype::HomRef | Genotype::HomAlt) => return false,
                    Some(Genotype::Het) => affected_hets += 1,
                    _ => {}
                }
            } else if person.is_unaffected() && matches!(gt, Some(Genotype::Het | Genotype::HomAlt)) {
                return false;
            }
        }
        affected_hets > 0
    }
}

impl InheritanceChecker for MendelianCheckerAD {
    fn filter_compatible_records<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        self.base.filter_each(
            calls,
            Some(ChromosomeType::Autosomal),
            |c| self.is_compatible_singleton(c),
            |c| self.is_compatible_family(c),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checking::checker::test_support::*;
    use crate::core::types::{Disease, Sex};

    #[test]
    fn test_singleton_het_only() {
        let checker = MendelianCheckerAD::new(singleton(Sex::Female), &CheckerConfig::default());
        let records = vec![
            auto(&[("index", Het)]),
            auto(&[("index", HomAlt)]),
            auto(&[("index", HomRef)]),
            auto(&[("index", NotObserved)]),
            x(&[("index", Het)]),
        ];
        let result = checker.filter_compatible_records(&records).unwrap();
        assert_eq!(result.len(), 1);
        assert!(std::ptr::eq(result[0], &records[0]));
    }

    #[test]
    fn test_trio_de_novo() {
        let checker = MendelianCheckerAD::new(trio(Sex::Male), &CheckerConfig::default());
        let records = vec![
            trio_calls(ChromosomeType::Autosomal, HomRef, HomRef, Het),
            trio_calls(ChromosomeType::Autosomal, Het, HomRef, Het),
            trio_calls(ChromosomeType::Autosomal, HomRef, HomRef, HomAlt),
            trio_calls(ChromosomeType::Autosomal, NotObserved, HomRef, Het),
        ];
        let result = checker.filter_compatible_records(&records).unwrap();
        assert_eq!(result.len(), 2);
        assert!(std::ptr::eq(result[0], &records[0]));
        assert!(std::ptr::eq(result[1], &records[3]));
    }

    #[test]
    fn test_affected_parent_transmits() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Female, Disease::Affected, "father", "mother"),
            child("sib", Sex::Male, Disease::Unaffected, "father", "mother"),
        ]);
        let checker = MendelianCheckerAD::new(pedigree, &CheckerConfig::default());

        let records = vec![
            auto(&[("father", Het), ("mother", HomRef), ("child", Het), ("sib", HomRef)]),
            auto(&[("father", Het), ("mother", HomRef), ("child", Het), ("sib", Het)]),
        ];
        let result = checker.filter_compatible_records(&records).unwrap();
        assert_eq!(result.len(), 1);
        assert!(std::ptr::eq(result[0], &records[0]));
    }

    #[test]
    fn test_no_affected_observed() {
        let checker = MendelianCheckerAD::new(trio(Sex::Male), &CheckerConfig::default());
        let records = vec![trio_calls(
            ChromosomeType::Autosomal,
            HomRef,
            HomRef,
            NotObserved,
        )];
        assert!(checker.filter_compatible_records(&records).unwrap().is_empty());
    }
}
