use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use crate::checking::checker::{
    CheckerBase, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker, XrParentRule,
};
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::types::{ChromosomeType, Genotype};

/// X-linked recessive inheritance with homozygous (females) or hemizygous (males) affecteds
#[derive(Debug, Clone)]
pub struct MendelianCheckerXRHom {
    base: CheckerBase,
    parent_rule: XrParentRule,
}

impl MendelianCheckerXRHom {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        let checker = Self {
            base: CheckerBase::new(pedigree, config),
            parent_rule: config.xr_parent_rule,
        };
        if checker.parent_rule == XrParentRule::Legacy && checker.rules_disagree() {
            warn!(
                "Pedigree '{}' has an unaffected father of an affected person; the legacy X-recessive \
                 parent rule only checks males listed as mothers and never checks him \
                 (use the corrected rule to exclude such variants)",
                checker.base.pedigree().name()
            );
        }
        checker
    }

    /// Names checked by the male-parent rule
    fn male_parent_names(&self) -> &HashSet<String> {
        let queries = self.base.queries();
        match self.parent_rule {
            XrParentRule::Legacy => queries.affected_female_parent_names(),
            XrParentRule::Corrected => queries.affected_male_parent_names(),
        }
    }

    /// Whether the corrected male-parent rule would exclude variants the legacy rule keeps
    fn rules_disagree(&self) -> bool {
        let queries = self.base.queries();
        self.base.pedigree().members().iter().any(|p| {
            p.is_male()
                && p.is_unaffected()
                && queries.affected_male_parent_names().contains(p.name())
                    != queries.affected_female_parent_names().contains(p.name())
        })
    }

    fn is_compatible_singleton(&self, calls: &GenotypeCalls) -> bool {
        match self.base.singleton_genotype(calls) {
            Some(Genotype::HomAlt) => true,
            // A hemizygous call may be reported as heterozygous
            Some(Genotype::Het) => !self.base.index_person().is_female(),
            _ => false,
        }
    }

    fn is_compatible_family(&self, calls: &GenotypeCalls) -> bool {
        self.affecteds_are_compatible(calls)
            && self.parents_are_compatible(calls)
            && self.unaffecteds_are_compatible(calls)
    }

    fn affecteds_are_compatible(&self, calls: &GenotypeCalls) -> bool {
        let mut carriers = 0;
        for person in self.base.pedigree().members().iter().filter(|p| p.is_affected()) {
            match (person.is_female(), calls.genotype_for_sample(person.name())) {
                (_, Some(Genotype::HomRef)) | (true, Some(Genotype::Het)) => return false,
                (_, Some(Genotype::HomAlt)) | (false, Some(Genotype::Het)) => carriers += 1,
                _ => {}
            }
        }
        carriers > 0
    }

    /// Mothers of affecteds are carriers; fathers in the male-parent set must not be unaffected
    fn parents_are_compatible(&self, calls: &GenotypeCalls) -> bool {
        let female_parents = self.base.queries().affected_female_parent_names();
        let male_parents = self.male_parent_names();

        for person in self.base.pedigree().members() {
            if female_parents.contains(person.name())
                && matches!(
                    calls.genotype_for_sample(person.name()),
                    Some(Genotype::HomRef | Genotype::HomAlt)
                )
            {
                return false;
            }
            if person.is_male() && person.is_unaffected() && male_parents.contains(person.name()) {
                return false;
            }
        }
        true
    }

    /// Unaffected males (and unknown sex) carry no variant; unaffected females are not homozygous
    fn unaffecteds_are_compatible(&self, calls: &GenotypeCalls) -> bool {
        !self
            .base
            .pedigree()
            .members()
            .iter()
            .filter(|p| p.is_unaffected())
            .any(|p| {
                matches!(
                    (p.is_female(), calls.genotype_for_sample(p.name())),
                    (_, Some(Genotype::HomAlt)) | (false, Some(Genotype::Het))
                )
            })
    }
}

impl InheritanceChecker for MendelianCheckerXRHom {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checking::checker::test_support::*;
    use crate::core::types::{Disease, Sex};

    fn corrected() -> CheckerConfig {
        CheckerConfig {
            xr_parent_rule: XrParentRule::Corrected,
            ..CheckerConfig::default()
        }
    }

    #[test]
    fn test_singleton() {
        let female = MendelianCheckerXRHom::new(singleton(Sex::Female), &CheckerConfig::default());
        let male = MendelianCheckerXRHom::new(singleton(Sex::Male), &CheckerConfig::default());
        let records = vec![x(&[("index", HomAlt)]), x(&[("index", Het)]), x(&[("index", HomRef)])];

        assert_eq!(female.filter_compatible_records(&records).unwrap().len(), 1);
        assert_eq!(male.filter_compatible_records(&records).unwrap().len(), 2);
    }

    #[test]
    fn test_affected_son_carrier_mother() {
        let checker = MendelianCheckerXRHom::new(trio(Sex::Male), &CheckerConfig::default());
        let records = vec![
            trio_calls(ChromosomeType::XChromosomal, HomRef, Het, HomAlt),
            trio_calls(ChromosomeType::XChromosomal, HomRef, Het, Het),
            // Mother must be a carrier
            trio_calls(ChromosomeType::XChromosomal, HomRef, HomRef, HomAlt),
            trio_calls(ChromosomeType::XChromosomal, HomRef, HomAlt, HomAlt),
            // Unaffected father cannot carry the variant on his only X
            trio_calls(ChromosomeType::XChromosomal, Het, Het, HomAlt),
        ];
        let result = checker.filter_compatible_records(&records).unwrap();
        assert_eq!(result.len(), 2);
        assert!(std::ptr::eq(result[0], &records[0]));
        assert!(std::ptr::eq(result[1], &records[1]));
    }

    #[test]
    fn test_affected_daughter_must_be_hom_alt() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Female, Disease::Affected, "father", "mother"),
        ]);
        let checker = MendelianCheckerXRHom::new(pedigree, &CheckerConfig::default());
        let records = vec![
            trio_calls(ChromosomeType::XChromosomal, HomAlt, Het, HomAlt),
            trio_calls(ChromosomeType::XChromosomal, HomAlt, Het, Het),
        ];
        let result = checker.filter_compatible_records(&records).unwrap();
        assert_eq!(result.len(), 1);
        assert!(std::ptr::eq(result[0], &records[0]));
    }

    #[test]
    fn test_parent_rule_legacy_vs_corrected() {
        let records = vec![trio_calls(ChromosomeType::XChromosomal, HomRef, Het, HomAlt)];

        let legacy = MendelianCheckerXRHom::new(trio(Sex::Male), &CheckerConfig::default());
        assert_eq!(legacy.filter_compatible_records(&records).unwrap().len(), 1);

        // The unaffected father of the affected son now excludes the variant
        let corrected = MendelianCheckerXRHom::new(trio(Sex::Male), &corrected());
        assert!(corrected.filter_compatible_records(&records).unwrap().is_empty());
    }

    #[test]
    fn test_legacy_rule_only_checks_males_listed_as_mothers() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Male, Disease::Unaffected),
            child("son", Sex::Male, Disease::Affected, "father", "mother"),
        ]);
        let records = vec![x(&[("father", HomAlt), ("mother", NotObserved), ("son", HomAlt)])];

        let legacy = MendelianCheckerXRHom::new(Arc::clone(&pedigree), &CheckerConfig::default());
        assert!(legacy.filter_compatible_records(&records).unwrap().is_empty());

        let corrected = MendelianCheckerXRHom::new(pedigree, &corrected());
        assert_eq!(corrected.filter_compatible_records(&records).unwrap().len(), 1);
    }

    #[test]
    fn test_rules_disagree() {
        let checker = MendelianCheckerXRHom::new(trio(Sex::Male), &CheckerConfig::default());
        assert!(checker.rules_disagree());

        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Female, Disease::Affected, "father", "mother"),
        ]);
        let checker = MendelianCheckerXRHom::new(pedigree, &CheckerConfig::default());
        assert!(!checker.rules_disagree());
    }

    #[test]
    fn test_unaffected_female_may_be_carrier() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Unaffected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("son", Sex::Male, Disease::Affected, "father", "mother"),
            child("daughter", Sex::Female, Disease::Unaffected, "father", "mother"),
        ]);
        let checker = MendelianCheckerXRHom::new(pedigree, &CheckerConfig::default());
        let records = vec![
            x(&[("father", HomRef), ("mother", Het), ("son", HomAlt), ("daughter", Het)]),
            x(&[("father", HomRef), ("mother", Het), ("son", HomAlt), ("daughter", HomAlt)]),
        ];
        let result = checker.filter_compatible_records(&records).unwrap();
        assert_eq!(result.len(), 1);
        assert!(std::ptr::eq(result[0], &records[0]));
    }
}
