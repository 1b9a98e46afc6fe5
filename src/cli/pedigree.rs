use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::checking::queries::PedigreeQueryDecorator;
use crate::cli::OutputFormat;
use crate::core::pedigree::Pedigree;
use crate::core::person::Person;
use crate::parsing::ped::parse_ped_file;

#[derive(Args)]
pub struct PedigreeArgs {
    /// Pedigree file (PED)
    #[arg(required = true)]
    pub ped: PathBuf,

    /// Family to show when the PED file holds several
    #[arg(long)]
    pub family: Option<String>,
}

pub fn run(args: PedigreeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let pedigree = Arc::new(parse_ped_file(&args.ped, args.family.as_deref())?);
    if verbose {
        eprintln!("Loaded pedigree from {}", args.ped.display());
    }

    let queries = PedigreeQueryDecorator::new(Arc::clone(&pedigree));

    match format {
        OutputFormat::Text => print_text_summary(&pedigree, &queries),
        OutputFormat::Json => print_json_summary(&pedigree, &queries)?,
        OutputFormat::Tsv => print_tsv_members(&pedigree),
    }

    Ok(())
}

fn sorted(names: &HashSet<String>) -> Vec<&str> {
    let mut names: Vec<&str> = names.iter().map(String::as_str).collect();
    names.sort_unstable();
    names
}

fn parent_name<'a>(parent: Option<&'a Person>) -> &'a str {
    parent.map_or("0", Person::name)
}

/// Each person with at least one full sibling, and those siblings
fn sibling_groups<'a>(
    pedigree: &'a Pedigree,
    queries: &'a PedigreeQueryDecorator,
) -> Vec<(&'a str, Vec<&'a str>)> {
    pedigree
        .members()
        .iter()
        .map(|p| (p.name(), queries.siblings(p).map(Person::name).collect::<Vec<_>>()))
        .filter(|(_, sibs)| !sibs.is_empty())
        .collect()
}

fn print_text_summary(pedigree: &Pedigree, queries: &PedigreeQueryDecorator) {
    println!("Pedigree: {}", pedigree.name());
    println!("{}", "=".repeat(60));

    println!(
        "\n{:<20} {:<8} {:<11} {:<20} {:<20}",
        "Name", "Sex", "Status", "Father", "Mother"
    );
    println!("{}", "-".repeat(83));
    for person in pedigree.members() {
        println!(
            "{:<20} {:<8} {:<11} {:<20} {:<20}",
            person.name(),
            person.sex().to_string(),
            person.disease().to_string(),
            parent_name(pedigree.father(person)),
            parent_name(pedigree.mother(person)),
        );
    }

    if queries.is_singleton() {
        println!("\nSingleton pedigree: checks use per-sample rules.");
    }

    println!("\nAffected ({}): {}", queries.affected_count(), sorted(queries.affected_names()).join(", "));
    println!(
        "Unaffected ({}): {}",
        queries.unaffected_count(),
        sorted(queries.unaffected_names()).join(", ")
    );
    println!(
        "Fathers of affected: {}",
        sorted(queries.affected_male_parent_names()).join(", ")
    );
    println!(
        "Mothers of affected: {}",
        sorted(queries.affected_female_parent_names()).join(", ")
    );

    let groups = sibling_groups(pedigree, queries);
    if !groups.is_empty() {
        println!("\nSiblings:");
        for (name, sibs) in groups {
            println!("  {}: {}", name, sibs.join(", "));
        }
    }
}

fn print_json_summary(pedigree: &Pedigree, queries: &PedigreeQueryDecorator) -> anyhow::Result<()> {
    let members: Vec<serde_json::Value> = pedigree
        .members()
        .iter()
        .map(|p| {
            serde_json::json!({
                "name": p.name(),
                "sex": p.sex(),
                "disease": p.disease(),
                "father": pedigree.father(p).map(Person::name),
                "mother": pedigree.mother(p).map(Person::name),
            })
        })
        .collect();

    let siblings: serde_json::Map<String, serde_json::Value> = sibling_groups(pedigree, queries)
        .into_iter()
        .map(|(name, sibs)| (name.to_string(), serde_json::json!(sibs)))
        .collect();

    let output = serde_json::json!({
        "name": pedigree.name(),
        "singleton": queries.is_singleton(),
        "members": members,
        "affected": sorted(queries.affected_names()),
        "unaffected": sorted(queries.unaffected_names()),
        "fathers_of_affected": sorted(queries.affected_male_parent_names()),
        "mothers_of_affected": sorted(queries.affected_female_parent_names()),
        "siblings": siblings,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_members(pedigree: &Pedigree) {
    println!("name\tsex\tdisease\tfather\tmother");
    for person in pedigree.members() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            person.name(),
            person.sex(),
            person.disease(),
            parent_name(pedigree.father(person)),
            parent_name(pedigree.mother(person)),
        );
    }
}
