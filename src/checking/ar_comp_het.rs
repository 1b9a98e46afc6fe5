use std::sync::Arc;

use crate::checking::candidate::{singleton_compatible_calls, CompoundHetRules, CompoundHetSearch};
use crate::checking::checker::{CheckerBase, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::person::Person;
use crate::core::types::{ChromosomeType, Genotype};

/// Autosomal zygosity: every carrier is heterozygous, homozygous calls never fit
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AutosomalRules;

impl CompoundHetRules for AutosomalRules {
    fn chromosome_type(&self) -> ChromosomeType {
        ChromosomeType::Autosomal
    }

    fn child_may_carry(&self, _child: &Person, gt: Option<Genotype>) -> bool {
        matches!(gt, None | Some(Genotype::Het | Genotype::NotObserved))
    }

    fn father_may_transmit(&self, gt: Option<Genotype>) -> bool {
        matches!(gt, None | Some(Genotype::Het | Genotype::NotObserved))
    }

    fn mother_may_transmit(&self, gt: Option<Genotype>) -> bool {
        matches!(gt, None | Some(Genotype::Het | Genotype::NotObserved))
    }

    fn affected_compatible(&self, _person: &Person, gt: Option<Genotype>) -> bool {
        !matches!(gt, Some(Genotype::HomRef | Genotype::HomAlt))
    }

    fn father_transmits(&self, gt: Option<Genotype>) -> bool {
        !matches!(gt, Some(Genotype::HomRef | Genotype::HomAlt))
    }

    fn mother_transmits(&self, gt: Option<Genotype>) -> bool {
        !matches!(gt, Some(Genotype::HomRef | Genotype::HomAlt))
    }

    fn carries(&self, _person: &Person, gt: Option<Genotype>) -> bool {
        gt == Some(Genotype::Het)
    }

    fn unaffected_excluded(
        &self,
        _person: &Person,
        paternal: Option<Genotype>,
        maternal: Option<Genotype>,
    ) -> bool {
        paternal == Some(Genotype::HomAlt) || maternal == Some(Genotype::HomAlt)
    }
}

/// Autosomal recessive inheritance through two heterozygous variants, one from each parent
#[derive(Debug, Clone)]
pub struct MendelianCheckerARCompoundHet {
    base: CheckerBase,
    rules: AutosomalRules,
}

impl MendelianCheckerARCompoundHet {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            base: CheckerBase::new(pedigree, config),
            rules: AutosomalRules,
        }
    }
}

impl InheritanceChecker for MendelianCheckerARCompoundHet {
    fn filter_compatible_records<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        self.base.validate(calls)?;

        let search = CompoundHetSearch::new(&self.base, &self.rules);
        if self.base.is_singleton() {
            Ok(singleton_compatible_calls(&self.base, &search.on_chromosome(calls)))
        } else {
            Ok(search.compatible_calls(calls))
        }
    }
}
