mod args;

pub use args::{Args, Commands, CompareSearchArgs, ParseXmlArgs};
use anyhow::Context;
use clap::Parser;
use common::{ComparisonReport, SearchComparison, Transaction, save_to_json};
use rand::seq::IndexedRandom;

/// Runs the CLI command parser and executes the selected command.
/// Returns true if a CLI command was handled, false otherwise.
pub async fn run_cli() -> bool {
    let args = Args::parse();
    match &args.command {
        Some(Commands::ParseXml(parse_args)) => {
            match parse_xml(&parse_args.xml, &parse_args.out).await {
                Ok(count) => println!(
                    "Successfully saved {} transactions to: {}",
                    count, parse_args.out
                ),
                Err(e) => eprintln!("Failed to parse transactions: {e:#}"),
            }
            true
        }
        Some(Commands::CompareSearch(compare_args)) => {
            if let Err(e) = compare_search(compare_args).await {
                eprintln!("Failed to compare search methods: {e:#}");
            }
            true
        }
        None => {
            println!("No CLI command provided. Use --help to see available commands.");
            false
        }
    }
}

/// Loads the XML export and writes it out as JSON. Returns the record count.
async fn parse_xml(xml_path: &str, out_path: &str) -> anyhow::Result<usize> {
    let transactions = Transaction::load_from_xml(xml_path).await?;
    save_to_json(&transactions, out_path).await?;
    Ok(transactions.len())
}

async fn compare_search(args: &CompareSearchArgs) -> anyhow::Result<()> {
    let transactions = Transaction::load_from_xml(&args.xml).await?;
    if transactions.is_empty() {
        return Err(anyhow::anyhow!("No transactions found in `{}`", args.xml));
    }

    let ids: Vec<i64> = transactions.iter().map(|t| t.id).collect();
    let mut rng = rand::rng();
    let test_ids: Vec<i64> = ids
        .choose_multiple(&mut rng, args.samples.min(ids.len()))
        .copied()
        .collect();

    let comparison = SearchComparison::new(&transactions);
    let report = comparison.compare(&test_ids, args.iterations);
    print_report(&report);

    if let Some(out) = &args.out {
        let output = serde_json::json!({
            "generated_at": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "results": report,
        });
        let data = serde_json::to_vec_pretty(&output).context("Failed to serialize report")?;
        tokio::fs::write(out, data)
            .await
            .with_context(|| format!("Failed to write report to `{}`", out))?;
        println!("Results saved to: {}", out);
    }
    Ok(())
}

fn print_report(report: &ComparisonReport) {
    println!("Transactions loaded: {}", report.record_count);
    println!("Iterations per lookup: {}", report.iterations);
    println!();
    println!(
        "{:>8}  {:>6}  {:>14}  {:>14}  {:>9}",
        "id", "found", "linear (s)", "indexed (s)", "speedup"
    );
    for timing in &report.timings {
        println!(
            "{:>8}  {:>6}  {:>14.9}  {:>14.9}  {:>8.2}x",
            timing.id, timing.found, timing.linear_secs, timing.indexed_secs, timing.speedup
        );
    }
    println!();
    println!("Average linear search:  {:.9} s", report.average_linear_secs);
    println!("Average indexed lookup: {:.9} s", report.average_indexed_secs);
    println!("Overall speedup:        {:.2}x", report.overall_speedup);
}
