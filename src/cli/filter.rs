use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info, warn};

use crate::checking::checker::{CheckerConfig, SampleValidation, XrParentRule};
use crate::checking::engine::MendelianInheritanceChecker;
use crate::cli::OutputFormat;
use crate::core::calls::GenotypeCalls;
use crate::core::types::{ModeOfInheritance, SubModeOfInheritance};
use crate::parsing::ped::parse_ped_file;
use crate::parsing::vcf::{parse_vcf_file, VariantRecord};

#[derive(Args)]
pub struct FilterArgs {
    /// Pedigree file (PED)
    #[arg(required = true)]
    pub ped: PathBuf,

    /// Variant file (VCF, optionally gzip-compressed)
    #[arg(required = true)]
    pub vcf: PathBuf,

    /// Modes of inheritance to check (default: all)
    #[arg(short, long = "mode", value_enum)]
    pub modes: Vec<ModeOfInheritance>,

    /// Report sub-modes (homozygous vs. compound heterozygous) instead of modes
    #[arg(long)]
    pub sub_modes: bool,

    /// INFO key grouping records into analysis units
    #[arg(long, default_value = "GENE")]
    pub gene_key: String,

    /// Family to analyse when the PED file holds several
    #[arg(long)]
    pub family: Option<String>,

    /// Ignore VCF samples that are not pedigree members
    #[arg(long)]
    pub lenient: bool,

    /// Parent rule of the X-linked recessive homozygous check
    #[arg(long, value_enum)]
    pub xr_parent_rule: Option<XrParentRule>,

    /// Checker configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also print records compatible with no requested mode
    #[arg(long)]
    pub all_records: bool,
}

/// Records sharing one grouping value, or a single record lacking it
struct AnalysisUnit {
    label: String,
    records: Vec<usize>,
}

pub fn run(args: FilterArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = load_config(&args)?;

    let pedigree = parse_ped_file(&args.ped, args.family.as_deref())?;
    if verbose {
        eprintln!(
            "Pedigree '{}': {} members",
            pedigree.name(),
            pedigree.len()
        );
    }

    let vcf = parse_vcf_file(&args.vcf, &args.gene_key)?;
    if verbose {
        eprintln!(
            "VCF: {} records, {} samples",
            vcf.records.len(),
            vcf.samples.len()
        );
    }

    let engine = MendelianInheritanceChecker::new(pedigree, config);
    let labels = requested_labels(&args);
    let units = analysis_units(&vcf.records);
    info!("Checking {} analysis units", units.len());

    let mut passing: Vec<Vec<&'static str>> = vec![Vec::new(); vcf.records.len()];
    let mut failed_units = 0;

    for unit in &units {
        let calls: Vec<GenotypeCalls> = unit
            .records
            .iter()
            .map(|&i| vcf.records[i].calls.clone())
            .collect();

        match check_unit(&engine, &calls, &args, &mut passing) {
            Ok(()) => debug!("{}: {} records checked", unit.label, calls.len()),
            Err(e) => {
                warn!("{}: {}", unit.label, e);
                failed_units += 1;
            }
        }
    }

    let rows: Vec<(&VariantRecord, &[&'static str])> = vcf
        .records
        .iter()
        .zip(&passing)
        .filter(|(_, modes)| args.all_records || !modes.is_empty())
        .map(|(record, modes)| (record, modes.as_slice()))
        .collect();

    match format {
        OutputFormat::Text => print_text_results(&rows, &labels),
        OutputFormat::Json => print_json_results(&rows, &labels)?,
        OutputFormat::Tsv => print_tsv_results(&rows),
    }

    if failed_units > 0 {
        anyhow::bail!(
            "{failed_units} of {} analysis units could not be checked against the pedigree{}",
            units.len(),
            if args.lenient { "" } else { " (use --lenient to ignore unknown samples)" }
        );
    }
    Ok(())
}

fn load_config(args: &FilterArgs) -> anyhow::Result<CheckerConfig> {
    let mut config = match &args.config {
        Some(path) => CheckerConfig::load_from_file(path)?,
        None => CheckerConfig::default(),
    };
    if args.lenient {
        config.sample_validation = SampleValidation::Lenient;
    }
    if let Some(rule) = args.xr_parent_rule {
        config.xr_parent_rule = rule;
    }
    Ok(config)
}

fn requested_modes(args: &FilterArgs) -> Vec<ModeOfInheritance> {
    if args.modes.is_empty() {
        ModeOfInheritance::ALL.to_vec()
    } else {
        ModeOfInheritance::ALL
            .into_iter()
            .filter(|mode| args.modes.contains(mode))
            .collect()
    }
}

fn requested_sub_modes(args: &FilterArgs) -> Vec<SubModeOfInheritance> {
    let modes = requested_modes(args);
    SubModeOfInheritance::ALL
        .into_iter()
        .filter(|sub_mode| modes.contains(&sub_mode.mode()))
        .collect()
}

fn requested_labels(args: &FilterArgs) -> Vec<&'static str> {
    if args.sub_modes {
        requested_sub_modes(args).into_iter().map(SubModeOfInheritance::abbreviation).collect()
    } else {
        requested_modes(args).into_iter().map(ModeOfInheritance::abbreviation).collect()
    }
}

/// Run the requested checks on one unit, marking each compatible record with the mode's label
fn check_unit(
    engine: &MendelianInheritanceChecker,
    calls: &[GenotypeCalls],
    args: &FilterArgs,
    passing: &mut [Vec<&'static str>],
) -> anyhow::Result<()> {
    let mut marks: Vec<(usize, &'static str)> = Vec::new();

    if args.sub_modes {
        for sub_mode in requested_sub_modes(args) {
            for call in engine.check_sub_mode(calls, sub_mode)? {
                marks.push((call.payload(), sub_mode.abbreviation()));
            }
        }
    } else {
        for mode in requested_modes(args) {
            for call in engine.check_mode(calls, mode)? {
                marks.push((call.payload(), mode.abbreviation()));
            }
        }
    }

    // A unit either passes completely or leaves no marks
    for (record, label) in marks {
        passing[record].push(label);
    }
    Ok(())
}

/// Group records by gene in order of first appearance; records without a gene stand alone
fn analysis_units(records: &[VariantRecord]) -> Vec<AnalysisUnit> {
    let mut units: Vec<AnalysisUnit> = Vec::new();
    let mut by_gene: HashMap<&str, usize> = HashMap::new();

    for (i, record) in records.iter().enumerate() {
        match record.gene.as_deref() {
            Some(gene) => {
                if let Some(&unit) = by_gene.get(gene) {
                    units[unit].records.push(i);
                } else {
                    by_gene.insert(gene, units.len());
                    units.push(AnalysisUnit {
                        label: gene.to_string(),
                        records: vec![i],
                    });
                }
            }
            None => units.push(AnalysisUnit {
                label: format!("{}:{}", record.chrom, record.pos),
                records: vec![i],
            }),
        }
    }
    units
}

fn print_text_results(rows: &[(&VariantRecord, &[&'static str])], labels: &[&'static str]) {
    println!("Compatible Variants");
    println!("{}", "=".repeat(60));
    println!("Checked modes: {}", labels.join(", "));

    if rows.is_empty() {
        println!("\nNo compatible variants found.");
        return;
    }

    println!();
    for (record, modes) in rows {
        println!(
            "{}:{} {}>{}  gene={}  modes={}",
            record.chrom,
            record.pos,
            record.reference,
            record.alternate,
            record.gene.as_deref().unwrap_or("."),
            if modes.is_empty() { ".".to_string() } else { modes.join(",") }
        );
    }
    println!("\n{} variant(s) reported", rows.len());
}

fn print_json_results(
    rows: &[(&VariantRecord, &[&'static str])],
    labels: &[&'static str],
) -> anyhow::Result<()> {
    let variants: Vec<serde_json::Value> = rows
        .iter()
        .map(|(record, modes)| {
            serde_json::json!({
                "chrom": record.chrom,
                "pos": record.pos,
                "id": record.id,
                "ref": record.reference,
                "alt": record.alternate,
                "gene": record.gene,
                "modes": modes,
            })
        })
        .collect();

    let output = serde_json::json!({
        "checked_modes": labels,
        "variants": variants,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(rows: &[(&VariantRecord, &[&'static str])]) {
    println!("chrom\tpos\tid\tref\talt\tgene\tmodes");
    for (record, modes) in rows {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            record.chrom,
            record.pos,
            record.id,
            record.reference,
            record.alternate,
            record.gene.as_deref().unwrap_or("."),
            if modes.is_empty() { ".".to_string() } else { modes.join(",") }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::vcf::parse_vcf_text;

    #[test]
    fn test_analysis_units() {
        let vcf = "\
##fileformat=VCFv4.2
##INFO=<ID=GENE,Number=.,Type=String,Description=\"Gene\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
1\t10\t.\tA\tC\t.\t.\tGENE=A
1\t20\t.\tA\tC\t.\t.\t.
2\t30\t.\tA\tC\t.\t.\tGENE=B
1\t40\t.\tA\tC\t.\t.\tGENE=A
";
        let data = parse_vcf_text(vcf, "GENE").unwrap();
        let units = analysis_units(&data.records);

        assert_eq!(units.len(), 3);
        assert_eq!(units[0].label, "A");
        assert_eq!(units[0].records, vec![0, 3]);
        assert_eq!(units[1].label, "1:20");
        assert_eq!(units[1].records, vec![1]);
        assert_eq!(units[2].label, "B");
    }
}
