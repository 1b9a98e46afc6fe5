use std::sync::Arc;

use crate::checking::checker::{
    union_in_input_order, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker,
};
use crate::checking::xr_comp_het::MendelianCheckerXRCompoundHet;
use crate::checking::xr_hom::MendelianCheckerXRHom;
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;

/// X-linked recessive inheritance: the union of the homozygous and compound heterozygous checks
#[derive(Debug, Clone)]
pub struct MendelianCheckerXR {
    hom: MendelianCheckerXRHom,
    comp_het: MendelianCheckerXRCompoundHet,
}

impl MendelianCheckerXR {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            hom: MendelianCheckerXRHom::new(Arc::clone(&pedigree), config),
            comp_het: MendelianCheckerXRCompoundHet::new(pedigree, config),
        }
    }

    pub fn hom_checker(&self) -> &MendelianCheckerXRHom {
        &self.hom
    }

    pub fn comp_het_checker(&self) -> &MendelianCheckerXRCompoundHet {
        &self.comp_het
    }
}

impl InheritanceChecker for MendelianCheckerXR {
    fn filter_compatible_records<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        let hom = self.hom.filter_compatible_records(calls)?;
        let comp_het = self.comp_het.filter_compatible_records(calls)?;
        Ok(union_in_input_order(calls, &[hom.as_slice(), comp_het.as_slice()]))
    }
}
