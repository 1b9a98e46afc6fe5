use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::checking::ad::MendelianCheckerAD;
use crate::checking::all_affected::AllAffectedChecker;
use crate::checking::ar::MendelianCheckerAR;
use crate::checking::checker::{CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
use crate::checking::mitochondrial::InheritanceCheckerMT;
use crate::checking::xd::MendelianCheckerXD;
use crate::checking::xr::MendelianCheckerXR;
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::types::{ModeOfInheritance, SubModeOfInheritance};

/// Compatible calls per mode of inheritance
pub type ModeResults<'c> = BTreeMap<ModeOfInheritance, Vec<&'c GenotypeCalls>>;

/// Compatible calls per sub-mode of inheritance
pub type SubModeResults<'c> = BTreeMap<SubModeOfInheritance, Vec<&'c GenotypeCalls>>;

/// Owns a pedigree and one checker per mode of inheritance bound to it
pub struct MendelianInheritanceChecker {
    pedigree: Arc<Pedigree>,
    config: CheckerConfig,
    any: AllAffectedChecker,
    ad: MendelianCheckerAD,
    ar: MendelianCheckerAR,
    xd: MendelianCheckerXD,
    xr: MendelianCheckerXR,
    mt: InheritanceCheckerMT,
}

impl MendelianInheritanceChecker {
    pub fn new(pedigree: impl Into<Arc<Pedigree>>, config: CheckerConfig) -> Self {
        let pedigree = pedigree.into();
        debug!(
            "Building checkers for pedigree '{}' ({} members)",
            pedigree.name(),
            pedigree.len()
        );

        Self {
            any: AllAffectedChecker::new(Arc::clone(&pedigree), &config),
            ad: MendelianCheckerAD::new(Arc::clone(&pedigree), &config),
            ar: MendelianCheckerAR::new(Arc::clone(&pedigree), &config),
            xd: MendelianCheckerXD::new(Arc::clone(&pedigree), &config),
            xr: MendelianCheckerXR::new(Arc::clone(&pedigree), &config),
            mt: InheritanceCheckerMT::new(Arc::clone(&pedigree), &config),
            pedigree,
            config,
        }
    }

    pub fn pedigree(&self) -> &Arc<Pedigree> {
        &self.pedigree
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// The checker deciding compatibility with `mode`
    pub fn checker(&self, mode: ModeOfInheritance) -> &dyn InheritanceChecker {
        match mode {
            ModeOfInheritance::Any => &self.any,
            ModeOfInheritance::AutosomalDominant => &self.ad,
            ModeOfInheritance::AutosomalRecessive => &self.ar,
            ModeOfInheritance::XDominant => &self.xd,
            ModeOfInheritance::XRecessive => &self.xr,
            ModeOfInheritance::Mitochondrial => &self.mt,
        }
    }

    /// The checker deciding compatibility with `sub_mode`
    pub fn sub_checker(&self, sub_mode: SubModeOfInheritance) -> &dyn InheritanceChecker {
        match sub_mode {
            SubModeOfInheritance::Any => &self.any,
            SubModeOfInheritance::AutosomalDominant => &self.ad,
            SubModeOfInheritance::AutosomalRecessiveHomAlt => self.ar.hom_checker(),
            SubModeOfInheritance::AutosomalRecessiveCompHet => self.ar.comp_het_checker(),
            SubModeOfInheritance::XDominant => &self.xd,
            SubModeOfInheritance::XRecessiveHomAlt => self.xr.hom_checker(),
            SubModeOfInheritance::XRecessiveCompHet => self.xr.comp_het_checker(),
            SubModeOfInheritance::Mitochondrial => &self.mt,
        }
    }

    /// Calls compatible with `mode`, in input order
    ///
    /// # Errors
    ///
    /// Returns `IncompatiblePedigreeError` if the calls cannot be analysed against the pedigree.
    pub fn check_mode<'c>(
        &self,
        calls: &'c [GenotypeCalls],
        mode: ModeOfInheritance,
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        let compatible = self.checker(mode).filter_compatible_records(calls)?;
        debug!("{}: {} of {} calls compatible", mode, compatible.len(), calls.len());
        Ok(compatible)
    }

    /// Calls compatible with `sub_mode`, in input order
    ///
    /// # Errors
    ///
    /// Returns `IncompatiblePedigreeError` if the calls cannot be analysed against the pedigree.
    pub fn check_sub_mode<'c>(
        &self,
        calls: &'c [GenotypeCalls],
        sub_mode: SubModeOfInheritance,
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        let compatible = self.sub_checker(sub_mode).filter_compatible_records(calls)?;
        debug!("{}: {} of {} calls compatible", sub_mode, compatible.len(), calls.len());
        Ok(compatible)
    }

    /// Compatible calls for every mode of inheritance
    ///
    /// # Errors
    ///
    /// Returns the first `IncompatiblePedigreeError` raised by any checker.
    pub fn check_all<'c>(&self, calls: &'c [GenotypeCalls]) -> Result<ModeResults<'c>, IncompatiblePedigreeError> {
        ModeOfInheritance::ALL
            .iter()
            .map(|&mode| Ok((mode, self.check_mode(calls, mode)?)))
            .collect()
    }

    /// Compatible calls for every sub-mode of inheritance
    ///
    /// # Errors
    ///
    /// Returns the first `IncompatiblePedigreeError` raised by any checker.
    pub fn check_all_sub<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<SubModeResults<'c>, IncompatiblePedigreeError> {
        SubModeOfInheritance::ALL
            .iter()
            .map(|&sub_mode| Ok((sub_mode, self.check_sub_mode(calls, sub_mode)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checking::checker::test_support::*;
    use crate::core::pedigree::Pedigree;
    use crate::core::types::{ChromosomeType, Disease, Sex};

    #[test]
    fn test_check_all_trio_recessive() {
        let engine = MendelianInheritanceChecker::new(trio(Sex::Female), CheckerConfig::default());
        let records = vec![trio_calls(ChromosomeType::Autosomal, HomRef, Het, HomAlt)];

        let results = engine.check_all(&records).unwrap();
        assert_eq!(results.len(), ModeOfInheritance::ALL.len());
        assert_eq!(results[&ModeOfInheritance::AutosomalRecessive].len(), 1);
        assert!(results[&ModeOfInheritance::AutosomalDominant].is_empty());
        assert!(results[&ModeOfInheritance::XRecessive].is_empty());
        assert_eq!(results[&ModeOfInheritance::Any].len(), 1);
    }

    #[test]
    fn test_check_all_sub() {
        let engine = MendelianInheritanceChecker::new(singleton(Sex::Male), CheckerConfig::default());
        let records = vec![x(&[("index", Het)])];

        let results = engine.check_all_sub(&records).unwrap();
        assert_eq!(results.len(), SubModeOfInheritance::ALL.len());
        assert_eq!(results[&SubModeOfInheritance::XDominant].len(), 1);
        assert_eq!(results[&SubModeOfInheritance::XRecessiveHomAlt].len(), 1);
        assert!(results[&SubModeOfInheritance::XRecessiveCompHet].is_empty());
        assert!(results[&SubModeOfInheritance::AutosomalDominant].is_empty());
    }

    #[test]
    fn test_sub_modes_agree_with_composites() {
        let engine = MendelianInheritanceChecker::new(trio(Sex::Female), CheckerConfig::default());
        let records = vec![
            trio_calls(ChromosomeType::Autosomal, HomRef, Het, Het),
            trio_calls(ChromosomeType::Autosomal, Het, Het, HomAlt),
            trio_calls(ChromosomeType::Autosomal, Het, HomRef, Het),
        ];

        let ar = engine.check_mode(&records, ModeOfInheritance::AutosomalRecessive).unwrap();
        let hom = engine
            .check_sub_mode(&records, SubModeOfInheritance::AutosomalRecessiveHomAlt)
            .unwrap();
        let comp_het = engine
            .check_sub_mode(&records, SubModeOfInheritance::AutosomalRecessiveCompHet)
            .unwrap();

        assert_eq!(ar.len(), 3);
        assert_eq!(hom.len(), 1);
        assert_eq!(comp_het.len(), 2);
    }

    #[test]
    fn test_error_aborts_check_all() {
        let engine = MendelianInheritanceChecker::new(trio(Sex::Male), CheckerConfig::default());
        let records = vec![auto(&[("stranger", Het)])];
        assert!(matches!(
            engine.check_all(&records),
            Err(IncompatiblePedigreeError::UnknownSample { .. })
        ));
    }

    #[test]
    fn test_accepts_owned_pedigree() {
        let pedigree = Pedigree::new(
            "solo",
            vec![person("index", Sex::Female, Disease::Affected)],
        )
        .unwrap();
        let engine = MendelianInheritanceChecker::new(pedigree, CheckerConfig::default());
        assert_eq!(engine.pedigree().name(), "solo");
        assert_eq!(engine.config(), &CheckerConfig::default());
    }
}
