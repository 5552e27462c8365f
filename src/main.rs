use anyhow::{Context, Result};
use clap::Parser;
use stackscan::{cli, config, reporter, scanner};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Scan(args) => scan_command(args)?,
    }

    Ok(())
}

fn scan_command(args: cli::ScanArgs) -> Result<()> {
    if args.verbose {
        println!("Stackscan - mapping the deployment stack...");
        println!("Scanning: {}", args.path.display());
    }

    // Load configuration
    let mut config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    // Command-line exclusions extend the configured set
    config.excluded_dirs.extend(args.exclude_dirs.iter().cloned());

    // The report being written this run must never be scanned back in
    if let Some(output_name) = args.output.file_name().and_then(|n| n.to_str()) {
        if !config.excluded_files.iter().any(|f| f == output_name) {
            config.excluded_files.push(output_name.to_string());
        }
    }

    if args.verbose {
        println!("Excluded directories: {:?}", config.excluded_dirs);
    }

    // Scan directory for target files
    let report =
        scanner::scan_directory(&args.path, &config).context("Failed to scan directory")?;

    if args.verbose {
        println!(
            "Found {} target files across {} directories under {}",
            report.included_count,
            report.listings.len(),
            report.scan_path.display()
        );
    }

    // Write report and mirror the summary
    reporter::generate_report(&report, &args.output).context("Failed to generate report")?;

    Ok(())
}
