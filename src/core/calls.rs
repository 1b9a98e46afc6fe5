use std::collections::HashMap;

use crate::core::types::{ChromosomeType, Genotype};

/// Genotype calls of all samples at one variant site.
///
/// A sample that is not listed, or listed without a call, yields `None` from the
/// accessors. An explicit no-call is `Some(Genotype::NotObserved)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeCalls {
    chromosome_type: ChromosomeType,
    sample_names: Vec<String>,
    genotypes: Vec<Option<Genotype>>,
    name_to_index: HashMap<String, usize>,
    payload: usize,
}

impl GenotypeCalls {
    pub fn builder(chromosome_type: ChromosomeType) -> GenotypeCallsBuilder {
        GenotypeCallsBuilder::new(chromosome_type)
    }

    pub fn chromosome_type(&self) -> ChromosomeType {
        self.chromosome_type
    }

    pub fn sample_count(&self) -> usize {
        self.sample_names.len()
    }

    /// Sample names in the order they were added
    pub fn sample_names(&self) -> impl Iterator<Item = &str> {
        self.sample_names.iter().map(String::as_str)
    }

    pub fn contains_sample(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    pub fn genotype_for_sample(&self, name: &str) -> Option<Genotype> {
        self.name_to_index
            .get(name)
            .and_then(|&idx| self.genotypes[idx])
    }

    pub fn genotype_at(&self, index: usize) -> Option<Genotype> {
        self.genotypes.get(index).copied().flatten()
    }

    /// Caller-provided handle, e.g. the index of the originating record
    pub fn payload(&self) -> usize {
        self.payload
    }
}

/// Incremental construction of a [`GenotypeCalls`]
#[derive(Debug, Clone)]
pub struct GenotypeCallsBuilder {
    chromosome_type: ChromosomeType,
    sample_names: Vec<String>,
    genotypes: Vec<Option<Genotype>>,
    payload: usize,
}

impl GenotypeCallsBuilder {
    pub fn new(chromosome_type: ChromosomeType) -> Self {
        Self {
            chromosome_type,
            sample_names: Vec::new(),
            genotypes: Vec::new(),
            payload: 0,
        }
    }

    /// Add a sample's call. A repeated name replaces the earlier call but keeps its position.
    #[must_use]
    pub fn push(mut self, name: impl Into<String>, genotype: Option<Genotype>) -> Self {
        let name = name.into();
        if let Some(idx) = self.sample_names.iter().position(|n| *n == name) {
            self.genotypes[idx] = genotype;
        } else {
            self.sample_names.push(name);
            self.genotypes.push(genotype);
        }
        self
    }

    /// Shorthand for [`push`](Self::push) with a present genotype
    #[must_use]
    pub fn call(self, name: impl Into<String>, genotype: Genotype) -> Self {
        self.push(name, Some(genotype))
    }

    #[must_use]
    pub fn payload(mut self, payload: usize) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> GenotypeCalls {
        let name_to_index = self
            .sample_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        GenotypeCalls {
            chromosome_type: self.chromosome_type,
            sample_names: self.sample_names,
            genotypes: self.genotypes,
            name_to_index,
            payload: self.payload,
        }
    }
}
