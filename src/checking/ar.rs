use std::sync::Arc;

use crate::checking::ar_comp_het::MendelianCheckerARCompoundHet;
use crate::checking::ar_hom::MendelianCheckerARHom;
use crate::checking::checker::{
    union_in_input_order, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker,
};
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;

/// Autosomal recessive inheritance: the union of the homozygous and compound heterozygous checks
#[derive(Debug, Clone)]
pub struct MendelianCheckerAR {
    hom: MendelianCheckerARHom,
    comp_het: MendelianCheckerARCompoundHet,
}

impl MendelianCheckerAR {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            hom: MendelianCheckerARHom::new(Arc::clone(&pedigree), config),
            comp_het: MendelianCheckerARCompoundHet::new(pedigree, config),
        }
    }

    pub fn hom_checker(&self) -> &MendelianCheckerARHom {
        &self.hom
    }

    pub fn comp_het_checker(&self) -> &MendelianCheckerARCompoundHet {
        &self.comp_het
    }
}

impl InheritanceChecker for MendelianCheckerAR {
    fn filter_compatible_records<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        let hom = self.hom.filter_compatible_records(calls)?;
        let comp_het = self.comp_het.filter_compatible_records(calls)?;
        Ok(union_in_input_order(calls, &[hom.as_slice(), comp_het.as_slice()]))
    }
}
