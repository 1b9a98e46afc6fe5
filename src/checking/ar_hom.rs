use std::sync::Arc;

use crate::checking::checker::{CheckerBase, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::person::Person;
use crate::core::types::{ChromosomeType, Genotype};

/// Autosomal recessive inheritance with homozygous affecteds
#[derive(Debug, Clone)]
pub struct MendelianCheckerARHom {
    base: CheckerBase,
}

impl MendelianCheckerARHom {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            base: CheckerBase::new(pedigree, config),
        }
    }

    fn is_compatible_singleton(&self, calls: &GenotypeCalls) -> bool {
        self.base.singleton_genotype(calls) == Some(Genotype::HomAlt)
    }

    fn is_compatible_family(&self, calls: &GenotypeCalls) -> bool {
        self.affecteds_are_compatible(calls)
            && self.parents_are_compatible(calls)
            && self.unaffecteds_are_compatible(calls)
    }

    fn affecteds_are_compatible(&self, calls: &GenotypeCalls) -> bool {
        let mut hom_alts = 0;
        for person in self.base.pedigree().members().iter().filter(|p| p.is_affected()) {
            match calls.genotype_for_sample(person.name()) {
                Some(Genotype::HomRef | Genotype::Het) => return false,
                Some(Genotype::HomAlt) => hom_alts += 1,
                _ => {}
            }
        }
        hom_alts > 0
    }

    /// Unaffected parents of affecteds are carriers: none is homozygous for the
    /// variant, and the two parents of an affected person are not both wild type
    fn parents_are_compatible(&self, calls: &GenotypeCalls) -> bool {
        let pedigree = self.base.pedigree();
        let unaffected_gt = |parent: Option<&Person>| {
            parent
                .filter(|p| p.is_unaffected())
                .and_then(|p| calls.genotype_for_sample(p.name()))
        };

        pedigree.members().iter().filter(|p| p.is_affected()).all(|person| {
            let father = unaffected_gt(pedigree.father(person));
            let mother = unaffected_gt(pedigree.mother(person));
            let hom_ref = Some(Genotype::HomRef);
            father != Some(Genotype::HomAlt)
                && mother != Some(Genotype::HomAlt)
                && !(father == hom_ref && mother == hom_ref)
        })
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

impl InheritanceChecker for MendelianCheckerARHom {
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
