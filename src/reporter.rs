use crate::models::{DirectoryListing, FileEntry, ScanReport};
use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

const HEADER: &str = "Scripts, Container Build Files, Dependency Manifests, and Environment Files:";

/// Write the report file and mirror the summary on stdout.
///
/// Failing to create the output file is the one fatal error; a file that
/// can't be read or decoded while its content is being embedded gets an
/// inline annotation and the run continues.
pub fn generate_report(report: &ScanReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report file: {}", output_path.display()))?;
    let mut out = BufWriter::new(file);

    write_header(&mut out)?;
    for listing in &report.listings {
        write_listing(&mut out, listing)?;
    }
    write_summary(&mut out, report)?;
    out.flush()
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    print_summary(report, output_path);

    Ok(())
}

fn write_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out)
}

fn write_listing(out: &mut impl Write, listing: &DirectoryListing) -> io::Result<()> {
    let indent = "  ".repeat(listing.depth);
    writeln!(out, "{indent}[{}]", listing.relative_path.display())?;

    for file in &listing.files {
        writeln!(out, "{indent}  {} ({})", file.name, file.category)?;
        write_file_content(out, file, listing.depth + 2)?;
    }

    Ok(())
}

/// Embed one file's content as numbered lines between code markers.
fn write_file_content(out: &mut impl Write, file: &FileEntry, level: usize) -> io::Result<()> {
    let indent = "  ".repeat(level);

    match fs::read_to_string(&file.path) {
        Ok(content) => {
            writeln!(out, "{indent}{} [CODE START] {}", "=".repeat(50), "=".repeat(50))?;
            for (idx, line) in content.lines().enumerate() {
                writeln!(out, "{indent}{:4}: {line}", idx + 1)?;
            }
            writeln!(out, "{indent}{} [CODE END] {}", "=".repeat(50), "=".repeat(52))?;
            writeln!(out)
        }
        Err(err) => {
            writeln!(out, "{indent}[Error reading file: {err}]")?;
            writeln!(out)
        }
    }
}

fn write_summary(out: &mut impl Write, report: &ScanReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "Total files scanned: {}", report.total_scanned)?;
    writeln!(out, "Target files with content included: {}", report.included_count)?;
    writeln!(out)?;
    writeln!(out, "Files by type:")?;
    for (label, count) in &report.by_category {
        writeln!(out, "  {label}: {count} files")?;
    }

    Ok(())
}

/// Mirror the summary as human-readable lines on stdout
fn print_summary(report: &ScanReport, output_path: &Path) {
    println!("Report written to {}", output_path.display());
    println!("Total files scanned: {}", report.total_scanned);
    println!("Target files with content included: {}", report.included_count);

    if report.by_category.is_empty() {
        return;
    }

    println!("\nFiles by type:");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").fg(Color::Cyan),
            Cell::new("Count").fg(Color::Cyan),
        ]);

    for (label, count) in &report.by_category {
        table.add_row(vec![label.to_string(), count.to_string()]);
    }

    println!("{table}");
}
