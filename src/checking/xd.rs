use std::sync::Arc;

use crate::checking::checker::{CheckerBase, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::types::{ChromosomeType, Genotype, Sex};

/// X-linked dominant inheritance.
///
/// Affected females must be heterozygous. Males and persons of unknown sex are
/// treated as hemizygous, so a heterozygous or homozygous call both count.
#[derive(Debug, Clone)]
pub struct MendelianCheckerXD {
    base: CheckerBase,
}

impl MendelianCheckerXD {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            base: CheckerBase::new(pedigree, config),
        }
    }

    fn is_compatible_singleton(&self, calls: &GenotypeCalls) -> bool {
        let gt = self.base.singleton_genotype(calls);
        if self.base.index_person().sex() == Sex::Female {
            gt == Some(Genotype::Het)
        } else {
            matches!(gt, Some(Genotype::Het | Genotype::HomAlt))
        }
    }

    fn is_compatible_family(&self, calls: &GenotypeCalls) -> bool {
        let mut affected_carriers = 0;
        for person in self.base.pedigree().members() {
            let gt = calls.genotype_for_sample(person.name());
            if person.is_affected() {
                match (person.is_female(), gt) {
                    (_, Some(Genotype::HomRef)) | (true, Some(Genotype::HomAlt)) => return false,
                    (_, Some(Genotype::Het)) | (false, Some(Genotype::HomAlt)) => {
                        affected_carriers += 1;
                    }
                    _ => {}
                }
            } else if person.is_unaffected() && matches!(gt, Some(Genotype::Het | Genotype::HomAlt)) {
                return false;
            }
        }
        affected_carriers > 0
    }
}

impl InheritanceChecker for MendelianCheckerXD {
    fn filter_compatible_records<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        self.base.filter_each(
            calls,
            Some(ChromosomeType::XChromosomal),
            |c| self.is_compatible_singleton(c),
            |c| self.is_compatible_family(c),
        )
    }
}
