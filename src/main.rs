//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::cli::{Args, EntriesFormat};
use chatlens::config::{MetricsConfig, ParserConfig};
use chatlens::output;
use chatlens::participants::distinct_senders;
use chatlens::{ChatlensError, MetricsEngine, TranscriptParser};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Print header
    println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Report:  {}", args.output);
    if let Some(ref entries_path) = args.entries {
        println!("📄 Entries: {} ({})", entries_path, args.entries_format);
    }
    if args.keep_noise {
        println!("🔔 Noise:   kept");
    }
    println!();

    // Step 1: Parse
    println!("⏳ Parsing transcript...");
    let parser_config = ParserConfig::new().with_skip_noise(!args.keep_noise);
    let parser = TranscriptParser::with_config(parser_config);

    let parse_start = Instant::now();
    let entries = parser.parse_file(Path::new(&args.input))?;
    let parse_time = parse_start.elapsed();
    println!(
        "   Found {} entries ({:.2}s)",
        entries.len(),
        parse_time.as_secs_f64()
    );

    // The library returns whatever it could parse; deciding that it is too
    // little is this binary's job.
    if entries.len() < args.min_entries {
        eprintln!(
            "❌ Only {} entries parsed (minimum: {}). \
             Is this a valid chat export?",
            entries.len(),
            args.min_entries
        );
        process::exit(1);
    }

    let senders = distinct_senders(&entries);
    println!("👥 Participants: {}", senders.join(", "));

    // Step 2: Compute metrics
    println!("📊 Computing metrics...");
    let metrics_config = MetricsConfig::new()
        .with_initiation_gap_hours(args.gap_hours)
        .with_immediacy_threshold_mins(args.immediate_mins);
    let engine = MetricsEngine::with_config(&entries, metrics_config);

    let metrics_start = Instant::now();
    let report = engine.report();
    let metrics_time = metrics_start.elapsed();
    println!("   Done ({:.2}s)", metrics_time.as_secs_f64());

    // Step 3: Write outputs
    println!("💾 Writing report...");
    output::write_report_json(&report, Path::new(&args.output))?;

    if let Some(ref entries_path) = args.entries {
        match args.entries_format {
            EntriesFormat::Json => {
                output::write_entries_json(&entries, Path::new(entries_path))?;
            }
            #[cfg(feature = "csv-output")]
            EntriesFormat::Csv => {
                output::write_entries_csv(&entries, Path::new(entries_path))?;
            }
            #[cfg(not(feature = "csv-output"))]
            EntriesFormat::Csv => {
                eprintln!("❌ CSV output support was not compiled in");
                process::exit(1);
            }
        }
    }

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Report saved to {}", args.output);

    // Summary
    println!();
    println!("📈 Summary:");
    println!("   Entries:     {}", entries.len());
    if let Some((first, last)) = report.date_range {
        println!(
            "   Period:      {} to {} ({} days, {} active)",
            first.format("%b %d, %Y"),
            last.format("%b %d, %Y"),
            report.total_days,
            report.active_days
        );
    }
    for sender in &senders {
        let count = report.message_counts.get(sender).copied().unwrap_or(0);
        let share = report.message_share.get(sender).copied().unwrap_or(0.0);
        println!("   {}: {} messages ({:.1}%)", sender, count, share);
    }

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let entries_per_sec = entries.len() as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} entries/sec", entries_per_sec);

    Ok(())
}
