//! VCF reader for genotype calls, using noodles.
//!
//! Only what the checkers need is kept from each record: the site, one INFO
//! value used to group records into analysis units, and the `GT` value of
//! every sample.
//!
//! Supported extensions:
//! - `.vcf` (uncompressed)
//! - `.vcf.gz` (gzip or bgzip compressed)
//! - `.vcf.bgz` (bgzip compressed)

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::bgzf;
use noodles::vcf;
use noodles::vcf::variant::record_buf::info::field::value::Array as InfoArray;
use noodles::vcf::variant::record_buf::info::field::Value as InfoValue;
use noodles::vcf::variant::record_buf::samples::sample::Value as SampleValue;
use noodles::vcf::variant::record_buf::Info;
use noodles::vcf::variant::RecordBuf;
use tracing::{debug, warn};

use crate::core::calls::GenotypeCalls;
use crate::core::types::{ChromosomeType, Genotype};
use crate::parsing::ParseError;
use crate::utils::validation::{check_record_limit, validate_sample_name};

const GENOTYPE_KEY: &str = "GT";

/// One VCF record with the genotype calls of all samples
#[derive(Debug, Clone)]
pub struct VariantRecord {
    pub chrom: String,
    pub pos: usize,
    pub id: String,
    pub reference: String,
    pub alternate: String,
    /// First value of the grouping INFO key, if present
    pub gene: Option<String>,
    /// Calls in header sample order; the payload is this record's index
    pub calls: GenotypeCalls,
}

/// Samples and records of one VCF
#[derive(Debug, Clone, Default)]
pub struct VcfData {
    pub samples: Vec<String>,
    pub records: Vec<VariantRecord>,
}

/// Parse a VCF file, plain or compressed
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_vcf_file(path: &Path, gene_key: &str) -> Result<VcfData, ParseError> {
    let file = std::fs::File::open(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("bgz") => parse_vcf_reader(BufReader::new(bgzf::Reader::new(file)), gene_key),
        Some("gz") => parse_vcf_reader(BufReader::new(MultiGzDecoder::new(file)), gene_key),
        _ => parse_vcf_reader(BufReader::new(file), gene_key),
    }
}

/// Parse VCF text
///
/// # Errors
///
/// See [`parse_vcf_reader`].
pub fn parse_vcf_text(text: &str, gene_key: &str) -> Result<VcfData, ParseError> {
    parse_vcf_reader(text.as_bytes(), gene_key)
}

/// Parse a VCF stream
///
/// # Errors
///
/// Returns `ParseError::Noodles` if the header or a record is malformed,
/// `ParseError::InvalidFormat` for an invalid sample name or a record without
/// a position, or `ParseError::TooManyRecords` if the record limit is exceeded.
pub fn parse_vcf_reader<R: BufRead>(inner: R, gene_key: &str) -> Result<VcfData, ParseError> {
    let mut reader = vcf::io::Reader::new(inner);

    let header = reader
        .read_header()
        .map_err(|e| ParseError::Noodles(format!("Failed to read VCF header: {e}")))?;

    let samples: Vec<String> = header.sample_names().iter().cloned().collect();
    for sample in &samples {
        validate_sample_name(sample)
            .map_err(|e| ParseError::InvalidFormat(format!("VCF header: {e}")))?;
    }

    let mut records = Vec::new();
    for result in reader.record_bufs(&header) {
        let record = result.map_err(|e| {
            ParseError::Noodles(format!("Failed to parse VCF record {}: {e}", records.len() + 1))
        })?;

        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }
        records.push(variant_record(&record, &samples, gene_key, records.len())?);
    }

    debug!("Read {} VCF records for {} samples", records.len(), samples.len());

    Ok(VcfData { samples, records })
}

fn variant_record(
    record: &RecordBuf,
    samples: &[String],
    gene_key: &str,
    index: usize,
) -> Result<VariantRecord, ParseError> {
    let chrom = record.reference_sequence_name().to_string();
    let pos = record.variant_start().map(usize::from).ok_or_else(|| {
        ParseError::InvalidFormat(format!("VCF record {} on {chrom} has no position", index + 1))
    })?;

    let values = record.samples();
    let columns = values.values().count();
    if !samples.is_empty() && columns != samples.len() {
        warn!(
            "{}:{}: expected {} sample columns, found {}; missing samples have no call",
            chrom,
            pos,
            samples.len(),
            columns
        );
    }

    let mut builder =
        GenotypeCalls::builder(ChromosomeType::from_contig_name(&chrom)).payload(index);
    for (i, name) in samples.iter().enumerate() {
        let genotype = values
            .get_index(i)
            .and_then(|sample| sample.get(GENOTYPE_KEY))
            .map(|value| match value {
                Some(SampleValue::Genotype(gt)) => {
                    Genotype::from_allele_indices(gt.as_ref().iter().map(|allele| allele.position()))
                }
                Some(SampleValue::String(gt)) => Genotype::from_gt(gt),
                _ => Genotype::NotObserved,
            });
        builder = builder.push(name.as_str(), genotype);
    }

    let ids: Vec<&str> = record.ids().as_ref().iter().map(String::as_str).collect();
    let alternates: &[String] = record.alternate_bases().as_ref();

    Ok(VariantRecord {
        pos,
        id: if ids.is_empty() { ".".to_string() } else { ids.join(";") },
        reference: record.reference_bases().to_string(),
        alternate: if alternates.is_empty() { ".".to_string() } else { alternates.join(",") },
        gene: info_value(record.info(), gene_key),
        calls: builder.build(),
        chrom,
    })
}

/// First value of `key` in an INFO field, ignoring missing values
fn info_value(info: &Info, key: &str) -> Option<String> {
    let first = match info.get(key)?? {
        InfoValue::String(value) => value.split(',').next().map(str::to_string),
        InfoValue::Array(InfoArray::String(values)) => values.first().cloned().flatten(),
        _ => None,
    };
    first.filter(|value| !value.is_empty() && value != ".")
}
