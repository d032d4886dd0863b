use colored::*;
use datajson_core::{Finding, Report};
use serde_json::json;

pub fn print_validation_report(report: &Report, findings: &[Finding], format: &str) {
    match format {
        "json" => print_json_report(report, findings),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &Report) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  CATALOG VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    for section in report.iter() {
        println!("\n{}", section.heading.red().bold());
        for (i, entry) in section.entries.iter().enumerate() {
            println!("  {}. {}", i + 1, entry);
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Problem types:  {}", report.len());
    println!("  Total problems: {}", report.entry_count());
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &Report, findings: &[Finding]) {
    let output = json!({
        "passed": report.passed(),
        "sections": report.sections,
        "findings": findings,
        "summary": {
            "section_count": report.len(),
            "entry_count": report.entry_count(),
        }
    });

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => print_error(&format!("Failed to render JSON report: {}", e)),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
