use serde::{Deserialize, Serialize};

use crate::core::types::{Disease, Sex};

/// Position of a person within its [`Pedigree`](crate::core::pedigree::Pedigree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub usize);

/// A member of a pedigree.
///
/// Parent links are indices into the owning pedigree; resolve them with
/// [`Pedigree::father`](crate::core::pedigree::Pedigree::father) and
/// [`Pedigree::mother`](crate::core::pedigree::Pedigree::mother).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub(crate) id: PersonId,
    pub(crate) name: String,
    pub(crate) sex: Sex,
    pub(crate) disease: Disease,
    pub(crate) father: Option<PersonId>,
    pub(crate) mother: Option<PersonId>,
}

impl Person {
    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn disease(&self) -> Disease {
        self.disease
    }

    pub fn father_id(&self) -> Option<PersonId> {
        self.father
    }

    pub fn mother_id(&self) -> Option<PersonId> {
        self.mother
    }

    /// Whether neither parent is part of the pedigree
    pub fn is_founder(&self) -> bool {
        self.father.is_none() && self.mother.is_none()
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }

    pub fn is_affected(&self) -> bool {
        self.disease == Disease::Affected
    }

    pub fn is_unaffected(&self) -> bool {
        self.disease == Disease::Unaffected
    }

    /// Whether `other` has the same two known parents
    pub fn is_full_sibling_of(&self, other: &Person) -> bool {
        self.id != other.id
            && self.father.is_some()
            && self.mother.is_some()
            && self.father == other.father
            && self.mother == other.mother
    }
}
