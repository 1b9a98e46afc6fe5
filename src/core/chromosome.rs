use crate::core::types::ChromosomeType;

impl ChromosomeType {
    /// Classify a contig name into the chromosome class used by the checkers.
    ///
    /// Matches UCSC (`chrX`) and NCBI (`X`) naming exactly, the PLINK numeric
    /// codes for the sex chromosomes, and the common mitochondrial names from
    /// various reference builds. Anything else is treated as autosomal.
    ///
    /// # Examples
    ///
    /// ```
    /// use inheritance_filter::core::types::ChromosomeType;
    ///
    /// assert_eq!(ChromosomeType::from_contig_name("chrX"), ChromosomeType::XChromosomal);
    /// assert_eq!(ChromosomeType::from_contig_name("MT"), ChromosomeType::Mitochondrial);
    /// assert_eq!(ChromosomeType::from_contig_name("7"), ChromosomeType::Autosomal);
    /// ```
    pub fn from_contig_name(name: &str) -> Self {
        if is_x_chromosome(name) {
            Self::XChromosomal
        } else if is_y_chromosome(name) {
            Self::YChromosomal
        } else if is_mitochondrial(name) {
            Self::Mitochondrial
        } else {
            Self::Autosomal
        }
    }
}

fn is_x_chromosome(name: &str) -> bool {
    matches!(name, "X" | "chrX" | "x" | "chrx" | "23" | "chr23")
}

fn is_y_chromosome(name: &str) -> bool {
    matches!(name, "Y" | "chrY" | "y" | "chry" | "24" | "chr24")
}

fn is_mitochondrial(name: &str) -> bool {
    let name_lower = name.to_lowercase();
    matches!(
        name_lower.as_str(),
        "mt" | "m" | "chrm" | "chrmt" | "26" | "mito" | "mitochondrion" | "rcrs" | "nc_012920.1"
    ) || name_lower.contains("mitochon")
}
