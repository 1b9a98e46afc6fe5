use std::sync::Arc;

use crate::checking::candidate::{singleton_compatible_calls, CompoundHetRules, CompoundHetSearch};
use crate::checking::checker::{CheckerBase, CheckerConfig, IncompatiblePedigreeError, InheritanceChecker};
use crate::core::calls::GenotypeCalls;
use crate::core::pedigree::Pedigree;
use crate::core::person::Person;
use crate::core::types::{ChromosomeType, Genotype};

/// X-linked zygosity: non-female persons are hemizygous, so a homozygous call
/// counts as one copy; fathers transmit whatever they carry and mothers are carriers
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct XLinkedRules;

impl CompoundHetRules for XLinkedRules {
    fn chromosome_type(&self) -> ChromosomeType {
        ChromosomeType::XChromosomal
    }

    fn child_may_carry(&self, child: &Person, gt: Option<Genotype>) -> bool {
        match gt {
            None | Some(Genotype::Het | Genotype::NotObserved) => true,
            Some(Genotype::HomAlt) => !child.is_female(),
            Some(Genotype::HomRef) => false,
        }
    }

    fn father_may_transmit(&self, gt: Option<Genotype>) -> bool {
        gt != Some(Genotype::HomRef)
    }

    fn mother_may_transmit(&self, gt: Option<Genotype>) -> bool {
        matches!(gt, None | Some(Genotype::Het | Genotype::NotObserved))
    }

    fn affected_compatible(&self, person: &Person, gt: Option<Genotype>) -> bool {
        match gt {
            Some(Genotype::HomRef) => false,
            Some(Genotype::HomAlt) => !person.is_female(),
            _ => true,
        }
    }

    fn father_transmits(&self, gt: Option<Genotype>) -> bool {
        gt != Some(Genotype::HomRef)
    }

    fn mother_transmits(&self, gt: Option<Genotype>) -> bool {
        !matches!(gt, Some(Genotype::HomRef | Genotype::HomAlt))
    }

    fn carries(&self, person: &Person, gt: Option<Genotype>) -> bool {
        match gt {
            Some(Genotype::Het) => true,
            Some(Genotype::HomAlt) => !person.is_female(),
            _ => false,
        }
    }

    /// Hemizygous unaffected males (and unknown sex) carrying either call are
    /// excluded, matching the unaffected rule of the X-linked homozygous checker
    fn unaffected_excluded(
        &self,
        person: &Person,
        paternal: Option<Genotype>,
        maternal: Option<Genotype>,
    ) -> bool {
        let hom_alt = Some(Genotype::HomAlt);
        let het = Some(Genotype::Het);
        paternal == hom_alt
            || maternal == hom_alt
            || (!person.is_female() && (paternal == het || maternal == het))
    }
}

/// X-linked recessive inheritance through two variants, one from each parent
#[derive(Debug, Clone)]
pub struct MendelianCheckerXRCompoundHet {
    base: CheckerBase,
    rules: XLinkedRules,
}

impl MendelianCheckerXRCompoundHet {
    pub fn new(pedigree: Arc<Pedigree>, config: &CheckerConfig) -> Self {
        Self {
            base: CheckerBase::new(pedigree, config),
            rules: XLinkedRules,
        }
    }
}

impl InheritanceChecker for MendelianCheckerXRCompoundHet {
    fn filter_compatible_records<'c>(
        &self,
        calls: &'c [GenotypeCalls],
    ) -> Result<Vec<&'c GenotypeCalls>, IncompatiblePedigreeError> {
        self.base.validate(calls)?;

        let search = CompoundHetSearch::new(&self.base, &self.rules);
        if !self.base.is_singleton() {
            return Ok(search.compatible_calls(calls));
        }

        // A single X in a male cannot carry two variants in trans
        if self.base.index_person().is_male() {
            Ok(Vec::new())
        } else {
            Ok(singleton_compatible_calls(&self.base, &search.on_chromosome(calls)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checking::checker::test_support::*;
    use crate::core::types::{Disease, Sex};

    fn fmc(f: Genotype, m: Genotype, c: Genotype) -> GenotypeCalls {
        trio_calls(ChromosomeType::XChromosomal, f, m, c)
    }

    #[test]
    fn test_singleton_male_never_compatible() {
        let checker =
            MendelianCheckerXRCompoundHet::new(singleton(Sex::Male), &CheckerConfig::default());
        let records = vec![x(&[("index", Het)]), x(&[("index", Het)])];
        assert!(checker.filter_compatible_records(&records).unwrap().is_empty());
    }

    #[test]
    fn test_singleton_female_and_unknown() {
        for sex in [Sex::Female, Sex::Unknown] {
            let checker = MendelianCheckerXRCompoundHet::new(singleton(sex), &CheckerConfig::default());
            let records = vec![
                x(&[("index", Het)]),
                auto(&[("index", Het)]),
                x(&[("index", Het)]),
                x(&[("index", HomAlt)]),
            ];
            let result = checker.filter_compatible_records(&records).unwrap();
            assert_eq!(result.len(), 2, "sex {sex}");
            assert!(std::ptr::eq(result[0], &records[0]));
            assert!(std::ptr::eq(result[1], &records[2]));
        }
    }

    #[test]
    fn test_affected_father_and_carrier_mother() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Female, Disease::Affected, "father", "mother"),
        ]);
        let checker = MendelianCheckerXRCompoundHet::new(pedigree, &CheckerConfig::default());
        let records = vec![
            fmc(HomAlt, HomRef, Het),
            fmc(NotObserved, Het, Het),
            // Autosomal calls are never considered
            trio_calls(ChromosomeType::Autosomal, HomAlt, HomRef, Het),
        ];
        let result = checker.filter_compatible_records(&records).unwrap();
        assert_eq!(result.len(), 2);
        assert!(std::ptr::eq(result[0], &records[0]));
        assert!(std::ptr::eq(result[1], &records[1]));
    }

    #[test]
    fn test_hom_alt_mother_excluded() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Female, Disease::Affected, "father", "mother"),
        ]);
        let checker = MendelianCheckerXRCompoundHet::new(pedigree, &CheckerConfig::default());
        let records = vec![fmc(HomAlt, HomRef, Het), fmc(HomRef, HomAlt, Het)];
        assert!(checker.filter_compatible_records(&records).unwrap().is_empty());
    }

    #[test]
    fn test_affected_female_hom_alt_excluded() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Female, Disease::Affected, "father", "mother"),
        ]);
        let checker = MendelianCheckerXRCompoundHet::new(pedigree, &CheckerConfig::default());
        let records = vec![fmc(HomAlt, HomRef, HomAlt), fmc(HomRef, Het, Het)];
        assert!(checker.filter_compatible_records(&records).unwrap().is_empty());
    }

    #[test]
    fn test_hemizygous_son_may_appear_hom_alt() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Male, Disease::Affected, "father", "mother"),
        ]);
        let checker = MendelianCheckerXRCompoundHet::new(pedigree, &CheckerConfig::default());
        let records = vec![fmc(HomAlt, HomRef, HomAlt), fmc(NotObserved, Het, HomAlt)];
        assert_eq!(checker.filter_compatible_records(&records).unwrap().len(), 2);
    }

    #[test]
    fn test_affected_father_wild_type_at_other_call() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Female, Disease::Affected, "father", "mother"),
        ]);
        let checker = MendelianCheckerXRCompoundHet::new(pedigree, &CheckerConfig::default());
        let records = vec![fmc(HomAlt, HomRef, Het), fmc(HomRef, Het, Het)];
        assert!(checker.filter_compatible_records(&records).unwrap().is_empty());
    }

    #[test]
    fn test_unaffected_male_carrier_excluded() {
        let pedigree = pedigree(vec![
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Female, Disease::Affected, "father", "mother"),
            person("uncle", Sex::Male, Disease::Unaffected),
        ]);
        let checker = MendelianCheckerXRCompoundHet::new(pedigree, &CheckerConfig::default());
        let records = vec![
            x(&[("father", HomAlt), ("mother", HomRef), ("child", Het), ("uncle", Het)]),
            x(&[("father", NotObserved), ("mother", Het), ("child", Het), ("uncle", HomRef)]),
        ];
        assert!(checker.filter_compatible_records(&records).unwrap().is_empty());
    }

    #[test]
    fn test_affected_cousins_with_opposite_parental_origin() {
        let pedigree = pedigree(vec![
            person("f1", Sex::Male, Disease::Affected),
            person("m1", Sex::Female, Disease::Unaffected),
            child("c1", Sex::Female, Disease::Affected, "f1", "m1"),
            person("f2", Sex::Male, Disease::Affected),
            person("m2", Sex::Female, Disease::Unaffected),
            child("c2", Sex::Female, Disease::Affected, "f2", "m2"),
        ]);
        let checker = MendelianCheckerXRCompoundHet::new(pedigree, &CheckerConfig::default());

        // c1 inherited the first call from f1, c2 inherited it from m2
        let records = vec![
            x(&[
                ("f1", HomAlt),
                ("m1", HomRef),
                ("c1", Het),
                ("f2", NotObserved),
                ("m2", Het),
                ("c2", Het),
            ]),
            x(&[
                ("f1", NotObserved),
                ("m1", Het),
                ("c1", Het),
                ("f2", HomAlt),
                ("m2", HomRef),
                ("c2", Het),
            ]),
        ];
        let result = checker.filter_compatible_records(&records).unwrap();
        assert_eq!(result.len(), 2);
        assert!(std::ptr::eq(result[0], &records[0]));
        assert!(std::ptr::eq(result[1], &records[1]));
    }

    #[test]
    fn test_unaffected_female_carrying_both_calls() {
        let pedigree = pedigree(vec![
            person("gf", Sex::Male, Disease::Unaffected),
            person("gm", Sex::Female, Disease::Unaffected),
            person("father", Sex::Male, Disease::Affected),
            person("mother", Sex::Female, Disease::Unaffected),
            child("child", Sex::Female, Disease::Affected, "father", "mother"),
            child("aunt", Sex::Female, Disease::Unaffected, "gf", "gm"),
        ]);
        let checker = MendelianCheckerXRCompoundHet::new(pedigree, &CheckerConfig::default());
        let family = |gf, gm, father, mother| {
            x(&[
                ("gf", gf),
                ("gm", gm),
                ("father", father),
                ("mother", mother),
                ("child", Het),
                ("aunt", Het),
            ])
        };

        // Both calls on the grandmother's haplotype: cis in the aunt
        let cis = vec![
            family(HomRef, Het, HomAlt, HomRef),
            family(HomRef, Het, NotObserved, Het),
        ];
        assert_eq!(checker.filter_compatible_records(&cis).unwrap().len(), 2);

        // The second call from the hemizygous grandfather puts them in trans
        let trans = vec![
            family(HomRef, Het, HomAlt, HomRef),
            family(HomAlt, HomRef, NotObserved, Het),
        ];
        assert!(checker.filter_compatible_records(&trans).unwrap().is_empty());
    }
}
