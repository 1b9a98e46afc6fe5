use std::sync::Arc;

use crate::checking::checker::{CheckerBase, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::types::Genotype;

/// Baseline filter: every affected person carries the variant.
///
/// Applies to all chromosome types and makes no singleton/family distinction.
#[derive(Debug, Clone)]
pub struct AllAffectedChecker {
    base: CheckerBase,
}

impl AllAffectedChecker {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            base: CheckerBase::new(pedigree, config),
        }
    }

    fn is_compatible(&self, calls: &GenotypeCalls) -> bool {
        self.base
            .pedigree()
            .members()
            .iter()
            .filter(|p| p.is_affected())
            .all(|p| {
                matches!(
                    calls.genotype_for_sample(p.name()),
                    Some(gt) if gt != Genotype::HomRef
                )
            })
    }
}

impl InheritanceChecker for AllAffectedChecker {
    fn filter_compatible_records<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        self.base.filter_each(
            calls,
            None,
            |c| self.is_compatible(c),
            |c| self.is_compatible(c),
        )
    }
}
