use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::person::{Person, PersonId};
use crate::core::types::{Disease, Sex};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Pedigree '{0}' has no members")]
    Empty(String),

    #[error("Duplicate person '{0}' in pedigree")]
    DuplicateName(String),

    #[error("Parent '{parent}' of '{person}' is not a member of the pedigree")]
    UnknownParent { person: String, parent: String },

    #[error("Person '{0}' is listed as their own parent")]
    SelfParent(String),

    #[error("Parent links form a cycle through '{0}'")]
    Cycle(String),
}

/// Unresolved description of one pedigree member, as delivered by a pedigree reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedigreeEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<String>,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub disease: Disease,
}

impl PedigreeEntry {
    pub fn new(name: impl Into<String>, sex: Sex, disease: Disease) -> Self {
        Self {
            name: name.into(),
            father: None,
            mother: None,
            sex,
            disease,
        }
    }

    #[must_use]
    pub fn with_parents(
        mut self,
        father: Option<impl Into<String>>,
        mother: Option<impl Into<String>>,
    ) -> Self {
        self.father = father.map(Into::into);
        self.mother = mother.map(Into::into);
        self
    }
}

/// An immutable family: persons in canonical sample order with resolved parent links
#[derive(Debug, Clone)]
pub struct Pedigree {
    name: String,
    members: Vec<Person>,
    name_to_id: HashMap<String, PersonId>,
}

impl Pedigree {
    /// Build a pedigree from its entries, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `PedigreeError` if there are no entries, a name is repeated, a
    /// parent is not itself an entry, a person is their own parent, or the
    /// parent links contain a cycle.
    pub fn new(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = PedigreeEntry>,
    ) -> Result<Self, PedigreeError> {
        let name = name.into();
        let entries: Vec<PedigreeEntry> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(PedigreeError::Empty(name));
        }

        let mut name_to_id = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if name_to_id.insert(entry.name.clone(), PersonId(i)).is_some() {
                return Err(PedigreeError::DuplicateName(entry.name.clone()));
            }
        }

        let resolve = |person: &str, parent: Option<&String>| -> Result<Option<PersonId>, PedigreeError> {
            match parent {
                None => Ok(None),
                Some(parent) if parent == person => Err(PedigreeError::SelfParent(person.to_string())),
                Some(parent) => name_to_id.get(parent).copied().map(Some).ok_or_else(|| {
                    PedigreeError::UnknownParent {
                        person: person.to_string(),
                        parent: parent.clone(),
                    }
                }),
            }
        };

        let mut members = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            members.push(Person {
                id: PersonId(i),
                name: entry.name.clone(),
                sex: entry.sex,
                disease: entry.disease,
                father: resolve(&entry.name, entry.father.as_ref())?,
                mother: resolve(&entry.name, entry.mother.as_ref())?,
            });
        }

        let pedigree = Self {
            name,
            members,
            name_to_id,
        };
        pedigree.check_acyclic()?;
        Ok(pedigree)
    }

    /// Depth-first search over parent links; a back edge is a cycle
    fn check_acyclic(&self) -> Result<(), PedigreeError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        let mut marks = vec![Mark::New; self.members.len()];
        for start in 0..self.members.len() {
            if marks[start] != Mark::New {
                continue;
            }
            // Stack of (person, next parent slot to visit)
            let mut stack = vec![(start, 0usize)];
            marks[start] = Mark::Active;
            while let Some((idx, slot)) = stack.pop() {
                let person = &self.members[idx];
                let parents = [person.father, person.mother];
                if slot < parents.len() {
                    stack.push((idx, slot + 1));
                    if let Some(PersonId(parent)) = parents[slot] {
                        match marks[parent] {
                            Mark::Active => {
                                return Err(PedigreeError::Cycle(self.members[parent].name.clone()))
                            }
                            Mark::New => {
                                marks[parent] = Mark::Active;
                                stack.push((parent, 0));
                            }
                            Mark::Done => {}
                        }
                    }
                } else {
                    marks[idx] = Mark::Done;
                }
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in canonical sample order
    pub fn members(&self) -> &[Person] {
        &self.members
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(Person::name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    pub fn person(&self, name: &str) -> Option<&Person> {
        self.name_to_id.get(name).map(|id| &self.members[id.0])
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.members.get(id.0)
    }

    pub fn father(&self, person: &Person) -> Option<&Person> {
        person.father.and_then(|id| self.get(id))
    }

    pub fn mother(&self, person: &Person) -> Option<&Person> {
        person.mother.and_then(|id| self.get(id))
    }

    /// Restrict the pedigree to the named members, keeping their order.
    ///
    /// Parent links to persons outside the subset are dropped, so such members
    /// become founders of the sub-pedigree.
    ///
    /// # Errors
    ///
    /// Returns `PedigreeError::Empty` if none of the names are members.
    pub fn subset<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<Self, PedigreeError> {
        let keep: std::collections::HashSet<&str> = names.into_iter().collect();
        let parent_name = |id: Option<PersonId>| {
            id.map(|id| self.members[id.0].name.as_str())
                .filter(|name| keep.contains(name))
                .map(str::to_string)
        };

        let entries: Vec<PedigreeEntry> = self
            .members
            .iter()
            .filter(|p| keep.contains(p.name.as_str()))
            .map(|p| PedigreeEntry {
                name: p.name.clone(),
                father: parent_name(p.father),
                mother: parent_name(p.mother),
                sex: p.sex,
                disease: p.disease,
            })
            .collect();

        Self::new(self.name.clone(), entries)
    }
}
