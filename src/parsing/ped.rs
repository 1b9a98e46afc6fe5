use std::path::Path;

use crate::core::pedigree::{Pedigree, PedigreeEntry};
use crate::core::types::{Disease, Sex};
use crate::parsing::ParseError;
use crate::utils::validation::{check_member_limit, validate_sample_name, MISSING_PARENT};

/// Parse a PED file into the pedigree of one family
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_ped_file(path: &Path, family: Option<&str>) -> Result<Pedigree, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_ped_text(&content, family)
}

/// Parse PED text into the pedigree of one family.
///
/// Members keep their file order. With `family` set only its rows are used;
/// otherwise the text must describe exactly one family.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for rows with fewer than six columns,
/// invalid sample names, an unknown or ambiguous family,
/// `ParseError::TooManySamples` if the member limit is exceeded, or
/// `ParseError::Pedigree` if the rows do not form a valid pedigree.
pub fn parse_ped_text(text: &str, family: Option<&str>) -> Result<Pedigree, ParseError> {
    let mut families: Vec<String> = Vec::new();
    let mut entries = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_num = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 6 PED columns"
            )));
        }

        let family_id = fields[0];
        if !families.iter().any(|f| f == family_id) {
            families.push(family_id.to_string());
        }
        if family.is_some_and(|f| f != family_id) {
            continue;
        }

        validate_sample_name(fields[1])
            .map_err(|e| ParseError::InvalidFormat(format!("Line {line_num}: {e}")))?;
        if check_member_limit(entries.len()).is_some() {
            return Err(ParseError::TooManySamples(entries.len()));
        }

        let parent = |s: &str| (s != MISSING_PARENT).then(|| s.to_string());
        entries.push(
            PedigreeEntry::new(fields[1], Sex::from_ped(fields[4]), Disease::from_ped(fields[5]))
                .with_parents(parent(fields[2]), parent(fields[3])),
        );
    }

    let name = match family {
        Some(f) if families.iter().any(|known| known == f) => f.to_string(),
        Some(f) => {
            return Err(ParseError::InvalidFormat(format!(
                "Family '{f}' not found in PED file"
            )))
        }
        None => match families.as_slice() {
            [only] => only.clone(),
            [] => {
                return Err(ParseError::InvalidFormat(
                    "No individuals found in PED file".to_string(),
                ))
            }
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "PED file describes {} families ({}); select one",
                    families.len(),
                    families.join(", ")
                )))
            }
        },
    };

    Ok(Pedigree::new(name, entries)?)
}
