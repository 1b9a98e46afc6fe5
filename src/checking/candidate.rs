//! Compound heterozygous candidate search shared by the autosomal and X-linked checkers.
//!
//! For every affected person with at least one known parent, calls are split
//! into those that may have been inherited from the father and those that may
//! have been inherited from the mother. Each cross pair forms a [`Candidate`],
//! which is kept if it is consistent with every affected person of the
//! pedigree (in either parental orientation) and with every unaffected person.
//!
//! The zygosity expectations differ between autosomes and the X chromosome;
//! they are supplied through [`CompoundHetRules`].

use crate::checking::checker::{union_in_input_order, CheckerBase};
use crate::core::calls::GenotypeCalls;
use crate::core::person::Person;
use crate::core::types::{ChromosomeType, Genotype};

/// Two calls that together may form a compound heterozygous genotype
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'c> {
    paternal: &'c GenotypeCalls,
    maternal: &'c GenotypeCalls,
}

impl<'c> Candidate<'c> {
    /// # Panics
    ///
    /// Panics if both sides are the same call.
    pub fn new(paternal: &'c GenotypeCalls, maternal: &'c GenotypeCalls) -> Self {
        assert!(
            !std::ptr::eq(paternal, maternal),
            "compound heterozygous candidate must pair two distinct calls"
        );
        Self { paternal, maternal }
    }

    pub fn paternal(&self) -> &'c GenotypeCalls {
        self.paternal
    }

    pub fn maternal(&self) -> &'c GenotypeCalls {
        self.maternal
    }

    /// The same pair with the parental labels exchanged
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            paternal: self.maternal,
            maternal: self.paternal,
        }
    }
}

/// Zygosity expectations of one chromosome class
pub(crate) trait CompoundHetRules {
    fn chromosome_type(&self) -> ChromosomeType;

    /// The affected child's genotype admits the call onto either candidate list
    fn child_may_carry(&self, child: &Person, gt: Option<Genotype>) -> bool;

    /// The father's genotype admits the call onto the paternal list
    fn father_may_transmit(&self, gt: Option<Genotype>) -> bool;

    /// The mother's genotype admits the call onto the maternal list
    fn mother_may_transmit(&self, gt: Option<Genotype>) -> bool;

    /// Genotype of an affected person at either call of an accepted candidate
    fn affected_compatible(&self, person: &Person, gt: Option<Genotype>) -> bool;

    /// Genotype of the father at the call he transmitted
    fn father_transmits(&self, gt: Option<Genotype>) -> bool;

    /// Genotype of the mother at the call she transmitted
    fn mother_transmits(&self, gt: Option<Genotype>) -> bool;

    /// The person carries exactly one copy of the variant (or is hemizygous for it)
    fn carries(&self, person: &Person, gt: Option<Genotype>) -> bool;

    /// Genotypes of an unaffected person that exclude the candidate outright
    fn unaffected_excluded(
        &self,
        person: &Person,
        paternal: Option<Genotype>,
        maternal: Option<Genotype>,
    ) -> bool;
}

/// The parent not transmitting a call must not carry it
fn other_parent_may_not_carry(gt: Option<Genotype>) -> bool {
    matches!(gt, None | Some(Genotype::NotObserved | Genotype::HomRef))
}

fn is_unobserved(gt: Option<Genotype>) -> bool {
    matches!(gt, None | Some(Genotype::NotObserved))
}

/// Compound heterozygous singleton rule: two or more heterozygous calls, all of which are returned
pub(crate) fn singleton_compatible_calls<'c>(
    base: &CheckerBase,
    calls: &[&'c GenotypeCalls],
) -> Vec<&'c GenotypeCalls> {
    let hets: Vec<&'c GenotypeCalls> = calls
        .iter()
        .copied()
        .filter(|c| base.singleton_genotype(c) == Some(Genotype::Het))
        .collect();

    if hets.len() >= 2 {
        hets
    } else {
        Vec::new()
    }
}

/// Family compound heterozygous search over one analysis unit
pub(crate) struct CompoundHetSearch<'a, R> {
    base: &'a CheckerBase,
    rules: &'a R,
}

impl<'a, R: CompoundHetRules> CompoundHetSearch<'a, R> {
    pub(crate) fn new(base: &'a CheckerBase, rules: &'a R) -> Self {
        Self { base, rules }
    }

    /// Calls of the rules' chromosome type, in input order
    pub(crate) fn on_chromosome<'c>(&self, calls: &'c [GenotypeCalls]) -> Vec<&'c GenotypeCalls> {
        calls
            .iter()
            .filter(|c| c.chromosome_type() == self.rules.chromosome_type())
            .collect()
    }

    /// Both calls of every accepted candidate, in input order
    pub(crate) fn compatible_calls<'c>(&self, calls: &'c [GenotypeCalls]) -> Vec<&'c GenotypeCalls> {
        let relevant = self.on_chromosome(calls);
        let mut accepted: Vec<&'c GenotypeCalls> = Vec::new();

        for candidate in self.collect_trio_candidates(&relevant) {
            if self.is_compatible_with_affecteds(&candidate)
                && self.is_compatible_with_unaffecteds(&candidate)
            {
                accepted.push(candidate.paternal());
                accepted.push(candidate.maternal());
            }
        }

        union_in_input_order(calls, &[accepted.as_slice()])
    }

    fn collect_trio_candidates<'c>(&self, calls: &[&'c GenotypeCalls]) -> Vec<Candidate<'c>> {
        let pedigree = self.base.pedigree();
        let mut candidates = Vec::new();

        for person in pedigree.members() {
            if !person.is_affected() || person.is_founder() {
                continue;
            }
            let father = pedigree.father(person);
            let mother = pedigree.mother(person);
            let gt_of = |call: &GenotypeCalls, p: Option<&Person>| {
                p.and_then(|p| call.genotype_for_sample(p.name()))
            };

            let mut paternal = Vec::new();
            let mut maternal = Vec::new();
            for &call in calls {
                let gt_child = call.genotype_for_sample(person.name());
                let gt_father = gt_of(call, father);
                let gt_mother = gt_of(call, mother);

                if !self.rules.child_may_carry(person, gt_child)
                    || (is_unobserved(gt_child) && is_unobserved(gt_father) && is_unobserved(gt_mother))
                {
                    continue;
                }
                if self.rules.father_may_transmit(gt_father) && other_parent_may_not_carry(gt_mother) {
                    paternal.push(call);
                }
                if self.rules.mother_may_transmit(gt_mother) && other_parent_may_not_carry(gt_father) {
                    maternal.push(call);
                }
            }

            for &pat in &paternal {
                for &mat in &maternal {
                    if !std::ptr::eq(pat, mat) {
                        candidates.push(Candidate::new(pat, mat));
                    }
                }
            }
        }

        candidates
    }

    /// Every affected person is consistent with the candidate in at least one orientation
    fn is_compatible_with_affecteds(&self, candidate: &Candidate<'_>) -> bool {
        self.base
            .pedigree()
            .members()
            .iter()
            .filter(|p| p.is_affected())
            .all(|p| {
                self.is_compatible_with_trio(p, candidate)
                    || self.is_compatible_with_trio(p, &candidate.swapped())
            })
    }

    fn is_compatible_with_trio(&self, person: &Person, candidate: &Candidate<'_>) -> bool {
        let pedigree = self.base.pedigree();
        let (pat, mat) = (candidate.paternal(), candidate.maternal());

        if !self.rules.affected_compatible(person, pat.genotype_for_sample(person.name()))
            || !self.rules.affected_compatible(person, mat.genotype_for_sample(person.name()))
        {
            return false;
        }

        if let Some(father) = pedigree.father(person) {
            if !self.rules.father_transmits(pat.genotype_for_sample(father.name())) {
                return false;
            }
        }
        if let Some(mother) = pedigree.mother(person) {
            if !self.rules.mother_transmits(mat.genotype_for_sample(mother.name())) {
                return false;
            }
        }

        // An unaffected full sibling cannot share the same compound genotype
        !self.base.queries().siblings(person).any(|sib| {
            sib.is_unaffected()
                && self.rules.carries(sib, pat.genotype_for_sample(sib.name()))
                && self.rules.carries(sib, mat.genotype_for_sample(sib.name()))
        })
    }

    fn is_compatible_with_unaffecteds(&self, candidate: &Candidate<'_>) -> bool {
        let pedigree = self.base.pedigree();
        let (pat, mat) = (candidate.paternal(), candidate.maternal());

        for person in pedigree.members().iter().filter(|p| p.is_unaffected()) {
            let gt_pat = pat.genotype_for_sample(person.name());
            let gt_mat = mat.genotype_for_sample(person.name());

            if self.rules.unaffected_excluded(person, gt_pat, gt_mat) {
                return false;
            }

            if self.rules.carries(person, gt_pat) && self.rules.carries(person, gt_mat) {
                if let (Some(father), Some(mother)) = (pedigree.father(person), pedigree.mother(person)) {
                    if self.inherited_in_trans(candidate, father, mother) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Whether the parents' genotypes place the two calls on different parental
    /// haplotypes, making an unaffected carrier of both a true compound heterozygote
    fn inherited_in_trans(&self, candidate: &Candidate<'_>, father: &Person, mother: &Person) -> bool {
        let (pat, mat) = (candidate.paternal(), candidate.maternal());
        let father_pat = pat.genotype_for_sample(father.name());
        let father_mat = mat.genotype_for_sample(father.name());
        let mother_pat = pat.genotype_for_sample(mother.name());
        let mother_mat = mat.genotype_for_sample(mother.name());
        let hom_ref = Some(Genotype::HomRef);

        let paternal_from_father = self.rules.carries(father, father_pat)
            && father_mat == hom_ref
            && mother_pat == hom_ref
            && self.rules.carries(mother, mother_mat);
        let paternal_from_mother = father_pat == hom_ref
            && self.rules.carries(mother, mother_pat)
            && self.rules.carries(father, father_mat)
            && mother_mat == hom_ref;

        paternal_from_father || paternal_from_mother
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checking::checker::test_support::*;

    #[test]
    fn test_candidate_swapped() {
        let a = auto(&[("x", Het)]);
        let b = auto(&[("x", HomAlt)]);
        let candidate = Candidate::new(&a, &b);
        let swapped = candidate.swapped();

        assert!(std::ptr::eq(swapped.paternal(), &b));
        assert!(std::ptr::eq(swapped.maternal(), &a));
    }

    #[test]
    #[should_panic(expected = "two distinct calls")]
    fn test_candidate_same_call_panics() {
        let a = auto(&[("x", Het)]);
        let _ = Candidate::new(&a, &a);
    }

    #[test]
    fn test_other_parent_may_not_carry() {
        assert!(other_parent_may_not_carry(None));
        assert!(other_parent_may_not_carry(Some(NotObserved)));
        assert!(other_parent_may_not_carry(Some(HomRef)));
        assert!(!other_parent_may_not_carry(Some(Het)));
        assert!(!other_parent_may_not_carry(Some(HomAlt)));
    }

    #[test]
    fn test_inherited_in_trans_from_either_grandparent() {
        use std::sync::Arc;

        use crate::checking::ar_comp_het::AutosomalRules;
        use crate::checking::checker::CheckerConfig;
        use crate::checking::xr_comp_het::XLinkedRules;
        use crate::core::types::{Disease, Sex};

        let pedigree = pedigree(vec![
            person("gf", Sex::Male, Disease::Unaffected),
            person("gm", Sex::Female, Disease::Unaffected),
            child("aunt", Sex::Female, Disease::Unaffected, "gf", "gm"),
        ]);
        let base = CheckerBase::new(Arc::clone(&pedigree), &CheckerConfig::default());
        let gf = pedigree.person("gf").unwrap();
        let gm = pedigree.person("gm").unwrap();

        let from_gf = auto(&[("gf", Het), ("gm", HomRef)]);
        let from_gm = auto(&[("gf", HomRef), ("gm", Het)]);
        let also_from_gm = auto(&[("gf", HomRef), ("gm", Het)]);
        let search = CompoundHetSearch::new(&base, &AutosomalRules);
        assert!(search.inherited_in_trans(&Candidate::new(&from_gf, &from_gm), gf, gm));
        assert!(search.inherited_in_trans(&Candidate::new(&from_gm, &from_gf), gf, gm));
        assert!(!search.inherited_in_trans(&Candidate::new(&from_gm, &also_from_gm), gf, gm));

        // A hemizygous grandfather carries the X call as HOM_ALT
        let x_from_gf = x(&[("gf", HomAlt), ("gm", HomRef)]);
        let x_from_gm = x(&[("gf", HomRef), ("gm", Het)]);
        let search = CompoundHetSearch::new(&base, &XLinkedRules);
        assert!(search.inherited_in_trans(&Candidate::new(&x_from_gf, &x_from_gm), gf, gm));
        assert!(search.inherited_in_trans(&Candidate::new(&x_from_gm, &x_from_gf), gf, gm));
    }
}
