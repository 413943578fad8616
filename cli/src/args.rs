use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "MoMo transaction API - serve SMS transactions and run data utilities"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse the SMS XML export and save the records as JSON
    ParseXml(ParseXmlArgs),

    /// Compare linear search with indexed lookup over the parsed records
    ///
    /// Samples transaction ids at random and times both lookups for each,
    /// then prints averages and the speedup of the index.
    CompareSearch(CompareSearchArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ParseXmlArgs {
    /// Path to the SMS XML export
    #[arg(short, long, default_value = "modified_sms_v2.xml")]
    pub xml: String,

    /// Output JSON file path
    #[arg(short, long, default_value = "transactions.json")]
    pub out: String,
}

#[derive(ClapArgs, Debug)]
pub struct CompareSearchArgs {
    /// Path to the SMS XML export
    #[arg(short, long, default_value = "modified_sms_v2.xml")]
    pub xml: String,

    /// Number of transaction ids to sample
    #[arg(short, long, default_value_t = 10)]
    pub samples: usize,

    /// Lookups per id and method
    #[arg(short, long, default_value_t = 1000)]
    pub iterations: u32,

    /// Optional JSON file for the full report
    #[arg(short, long)]
    pub out: Option<String>,
}
