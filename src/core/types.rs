use serde::{Deserialize, Serialize};

/// Sex of a pedigree member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    /// Parse the PED sex column (`1` male, `2` female, anything else unknown)
    pub fn from_ped(s: &str) -> Self {
        match s {
            "1" => Self::Male,
            "2" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Disease (affection) status of a pedigree member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Affected,
    Unaffected,
    #[default]
    Unknown,
}

impl Disease {
    /// Parse the PED phenotype column (`2` affected, `1` unaffected, anything else unknown)
    pub fn from_ped(s: &str) -> Self {
        match s {
            "2" => Self::Affected,
            "1" => Self::Unaffected,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Affected => write!(f, "affected"),
            Self::Unaffected => write!(f, "unaffected"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Genotype call of one sample at one site.
///
/// A sample that has no entry in a call at all is represented as `None` by
/// [`GenotypeCalls`](crate::core::calls::GenotypeCalls), which is distinct from
/// an explicit [`Genotype::NotObserved`] no-call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genotype {
    HomRef,
    Het,
    HomAlt,
    NotObserved,
}

impl Genotype {
    /// Classify a VCF `GT` value.
    ///
    /// Any missing allele makes the call [`Genotype::NotObserved`]. Haploid
    /// calls are classified like their homozygous diploid counterpart.
    ///
    /// # Examples
    ///
    /// ```
    /// use inheritance_filter::core::types::Genotype;
    ///
    /// assert_eq!(Genotype::from_gt("0/1"), Genotype::Het);
    /// assert_eq!(Genotype::from_gt("1|1"), Genotype::HomAlt);
    /// assert_eq!(Genotype::from_gt("./."), Genotype::NotObserved);
    /// assert_eq!(Genotype::from_gt("1"), Genotype::HomAlt);
    /// ```
    #[must_use]
    pub fn from_gt(gt: &str) -> Self {
        Self::from_allele_indices(
            gt.trim()
                .split(['/', '|'])
                .map(|allele| allele.parse::<usize>().ok()),
        )
    }

    /// Classify a call from its allele indices, `None` marking a missing allele
    ///
    /// # Examples
    ///
    /// ```
    /// use inheritance_filter::core::types::Genotype;
    ///
    /// assert_eq!(Genotype::from_allele_indices([Some(0), Some(2)]), Genotype::Het);
    /// assert_eq!(Genotype::from_allele_indices([Some(2), Some(2)]), Genotype::HomAlt);
    /// assert_eq!(Genotype::from_allele_indices([Some(0), None]), Genotype::NotObserved);
    /// ```
    #[must_use]
    pub fn from_allele_indices(alleles: impl IntoIterator<Item = Option<usize>>) -> Self {
        let Some(alleles) = alleles.into_iter().collect::<Option<Vec<usize>>>() else {
            return Self::NotObserved;
        };

        match alleles.as_slice() {
            [] => Self::NotObserved,
            [first, rest @ ..] if rest.iter().all(|a| a == first) => {
                if *first == 0 {
                    Self::HomRef
                } else {
                    Self::HomAlt
                }
            }
            _ => Self::Het,
        }
    }
}

impl std::fmt::Display for Genotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomRef => write!(f, "0/0"),
            Self::Het => write!(f, "0/1"),
            Self::HomAlt => write!(f, "1/1"),
            Self::NotObserved => write!(f, "./."),
        }
    }
}

/// Chromosome class of a variant site, deciding which modes of inheritance apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromosomeType {
    Autosomal,
    XChromosomal,
    YChromosomal,
    Mitochondrial,
}

/// Mode of inheritance that a set of calls may be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ModeOfInheritance {
    /// All affected individuals carry the variant
    Any,
    AutosomalDominant,
    AutosomalRecessive,
    XDominant,
    XRecessive,
    Mitochondrial,
}

impl ModeOfInheritance {
    pub const ALL: [Self; 6] = [
        Self::Any,
        Self::AutosomalDominant,
        Self::AutosomalRecessive,
        Self::XDominant,
        Self::XRecessive,
        Self::Mitochondrial,
    ];

    /// Short label used in tabular output
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::AutosomalDominant => "AD",
            Self::AutosomalRecessive => "AR",
            Self::XDominant => "XD",
            Self::XRecessive => "XR",
            Self::Mitochondrial => "MT",
        }
    }
}

impl std::fmt::Display for ModeOfInheritance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Finer-grained mode of inheritance, splitting the recessive modes into their
/// homozygous and compound heterozygous parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SubModeOfInheritance {
    Any,
    AutosomalDominant,
    AutosomalRecessiveHomAlt,
    AutosomalRecessiveCompHet,
    XDominant,
    XRecessiveHomAlt,
    XRecessiveCompHet,
    Mitochondrial,
}

impl SubModeOfInheritance {
    pub const ALL: [Self; 8] = [
        Self::Any,
        Self::AutosomalDominant,
        Self::AutosomalRecessiveHomAlt,
        Self::AutosomalRecessiveCompHet,
        Self::XDominant,
        Self::XRecessiveHomAlt,
        Self::XRecessiveCompHet,
        Self::Mitochondrial,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::AutosomalDominant => "AD",
            Self::AutosomalRecessiveHomAlt => "AR_HOM_ALT",
            Self::AutosomalRecessiveCompHet => "AR_COMP_HET",
            Self::XDominant => "XD",
            Self::XRecessiveHomAlt => "XR_HOM_ALT",
            Self::XRecessiveCompHet => "XR_COMP_HET",
            Self::Mitochondrial => "MT",
        }
    }

    /// The mode of inheritance this sub-mode belongs to
    pub fn mode(self) -> ModeOfInheritance {
        match self {
            Self::Any => ModeOfInheritance::Any,
            Self::AutosomalDominant => ModeOfInheritance::AutosomalDominant,
            Self::AutosomalRecessiveHomAlt | Self::AutosomalRecessiveCompHet => {
                ModeOfInheritance::AutosomalRecessive
            }
            Self::XDominant => ModeOfInheritance::XDominant,
            Self::XRecessiveHomAlt | Self::XRecessiveCompHet => ModeOfInheritance::XRecessive,
            Self::Mitochondrial => ModeOfInheritance::Mitochondrial,
        }
    }
}

impl std::fmt::Display for SubModeOfInheritance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
