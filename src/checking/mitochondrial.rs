//! Mitochondrial (maternal, non-Mendelian) inheritance.

use std::sync::Arc;

use crate::checking::checker::{CheckerBase, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::types::{ChromosomeType, Disease, Genotype};

#[derive(Debug, Clone)]
pub struct InheritanceCheckerMT {
    base: CheckerBase,
}

impl InheritanceCheckerMT {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            base: CheckerBase::new(pedigree, config),
        }
    }

    fn is_compatible_singleton(&self, calls: &GenotypeCalls) -> bool {
        matches!(
            self.base.singleton_genotype(calls),
            Some(Genotype::Het | Genotype::HomAlt)
        )
    }

    fn is_compatible_family(&self, calls: &GenotypeCalls) -> bool {
        self.affecteds_are_compatible(calls)
            && self.parents_are_compatible()
            && self.unaffecteds_are_compatible(calls)
    }

    /// No affected is wild type, at least one carries the variant
    fn affecteds_are_compatible(&self, calls: &GenotypeCalls) -> bool {
        let mut carriers = 0;
        for person in self.base.pedigree().members().iter().filter(|p| p.is_affected()) {
            match calls.genotype_for_sample(person.name()) {
                Some(Genotype::HomRef) => return false,
                Some(Genotype::Het | Genotype::HomAlt) => carriers += 1,
                _ => {}
            }
        }
        carriers > 0
    }

    /// Mitochondria come from the mother, so an affected person cannot have an unaffected mother
    fn parents_are_compatible(&self) -> bool {
        let pedigree = self.base.pedigree();
        !pedigree
            .members()
            .iter()
            .filter(|p| p.is_affected())
            .filter_map(|p| pedigree.mother(p))
            .any(|mother| mother.disease() == Disease::Unaffected)
    }

    fn unaffecteds_are_compatible(&self, calls: &GenotypeCalls) -> bool {
        !self
            .base
            .pedigree()
            .members()
            .iter()
            .filter(|p| p.is_unaffected())
            .any(|p| calls.genotype_for_sample(p.name()) == Some(Genotype::HomAlt))
    }
}

impl InheritanceChecker for InheritanceCheckerMT {
    fn filter_compatible_records<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        self.base.filter_each(
            calls,
            Some(ChromosomeType::Mitochondrial),
            |c| self.is_compatible_singleton(c),
            |c| self.is_compatible_family(c),
        )
    }
}
