// Validation front end of the share management tool: classifies candidate
// ISINs before they are entered as new share records.

use clap::Parser;
use log::debug;
use sharetool::models::{IsinValidationResult, ValidationIssueType};
use sharetool::utils::ShareToolError;
use sharetool::ShareValidator;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sharetool", version, about = "Validate candidate ISINs for new share records")]
struct Cli {
    /// Candidate ISINs to validate
    isins: Vec<String>,

    /// Read additional candidates from a file, one per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the validation reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), ShareToolError> {
    env_logger::init();

    let cli = Cli::parse();

    let mut candidates = cli.isins;
    if let Some(path) = &cli.file {
        let contents = fs::read_to_string(path)?;
        candidates.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    if candidates.is_empty() {
        return Err(ShareToolError::NoCandidates);
    }

    let validator = ShareValidator::new();
    let results: Vec<IsinValidationResult> =
        candidates.iter().map(|candidate| validator.validate(candidate)).collect();

    for (candidate, result) in candidates.iter().zip(&results) {
        debug!("{} classified as {}", candidate, result.classification.label());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for (candidate, result) in candidates.iter().zip(&results) {
            print_report(candidate, result);
        }

        let failed = results.iter().filter(|result| !result.is_valid).count();
        if failed > 0 {
            println!("\n{} of {} candidates failed validation", failed, results.len());
        } else {
            println!("\nAll {} candidates passed validation", results.len());
        }
    }

    if results.iter().any(|result| !result.is_valid) {
        std::process::exit(1);
    }

    Ok(())
}

// Print the validation report for a single candidate
fn print_report(candidate: &str, result: &IsinValidationResult) {
    println!("\n===============================================");
    println!("      ISIN VALIDATION REPORT: {}", candidate);
    println!("===============================================");

    println!(
        "  1. Format Validation: {}",
        if result.format_validation.is_valid {
            "PASSED"
        } else {
            "FAILED"
        }
    );
    match &result.checksum_validation {
        Some(checksum) => println!(
            "  2. Checksum Validation: {}",
            if checksum.is_valid { "PASSED" } else { "FAILED" }
        ),
        None => println!("  2. Checksum Validation: SKIPPED"),
    }

    if !result.issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in &result.issues {
            println!(
                "  - [{}] {}",
                match issue.issue_type {
                    ValidationIssueType::Format => "FORMAT",
                    ValidationIssueType::Checksum => "CHECKSUM",
                },
                issue.message
            );
        }
    }

    println!("ISIN validation result: {}", result.classification.label());
}
