use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::core::pedigree::Pedigree;
use crate::core::person::{Person, PersonId};

/// Derived read-only queries over a [`Pedigree`], computed once at construction
#[derive(Debug, Clone)]
pub struct PedigreeQueryDecorator {
    pedigree: Arc<Pedigree>,

    /// Full siblings (same known father and mother) per person, excluding the person
    siblings: HashMap<PersonId, Vec<PersonId>>,

    affected_names: HashSet<String>,
    unaffected_names: HashSet<String>,
    parent_names: HashSet<String>,

    /// Fathers of affected persons
    affected_male_parent_names: HashSet<String>,

    /// Mothers of affected persons
    affected_female_parent_names: HashSet<String>,
}

impl PedigreeQueryDecorator {
    pub fn new(pedigree: Arc<Pedigree>) -> Self {
        let mut affected_names = HashSet::new();
        let mut unaffected_names = HashSet::new();
        let mut parent_names = HashSet::new();
        let mut affected_male_parent_names = HashSet::new();
        let mut affected_female_parent_names = HashSet::new();

        for person in pedigree.members() {
            if person.is_affected() {
                affected_names.insert(person.name().to_string());
                if let Some(father) = pedigree.father(person) {
                    affected_male_parent_names.insert(father.name().to_string());
                }
                if let Some(mother) = pedigree.mother(person) {
                    affected_female_parent_names.insert(mother.name().to_string());
                }
            } else if person.is_unaffected() {
                unaffected_names.insert(person.name().to_string());
            }

            for parent in [pedigree.father(person), pedigree.mother(person)]
                .into_iter()
                .flatten()
            {
                parent_names.insert(parent.name().to_string());
            }
        }

        let siblings = build_siblings(&pedigree);

        Self {
            pedigree,
            siblings,
            affected_names,
            unaffected_names,
            parent_names,
            affected_male_parent_names,
            affected_female_parent_names,
        }
    }

    pub fn pedigree(&self) -> &Pedigree {
        &self.pedigree
    }

    pub fn is_singleton(&self) -> bool {
        self.pedigree.len() == 1
    }

    /// Full siblings of `person`; empty unless both parents are known
    pub fn siblings<'a>(&'a self, person: &Person) -> impl Iterator<Item = &'a Person> + 'a {
        self.siblings
            .get(&person.id())
            .into_iter()
            .flatten()
            .filter_map(|id| self.pedigree.get(*id))
    }

    pub fn affected_names(&self) -> &HashSet<String> {
        &self.affected_names
    }

    pub fn unaffected_names(&self) -> &HashSet<String> {
        &self.unaffected_names
    }

    pub fn parent_names(&self) -> &HashSet<String> {
        &self.parent_names
    }

    pub fn affected_male_parent_names(&self) -> &HashSet<String> {
        &self.affected_male_parent_names
    }

    pub fn affected_female_parent_names(&self) -> &HashSet<String> {
        &self.affected_female_parent_names
    }

    pub fn affected_count(&self) -> usize {
        self.affected_names.len()
    }

    pub fn unaffected_count(&self) -> usize {
        self.unaffected_names.len()
    }
}

fn build_siblings(pedigree: &Pedigree) -> HashMap<PersonId, Vec<PersonId>> {
    pedigree
        .members()
        .iter()
        .map(|person| {
            let others = pedigree
                .members()
                .iter()
                .filter(|other| person.is_full_sibling_of(other))
                .map(Person::id)
                .collect();
            (person.id(), others)
        })
        .collect()
}
