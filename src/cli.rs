use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "ITTF table-tennis rankings and player lookup")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch a ranking list of arbitrary depth
    Rankings {
        /// Competition type: YOU or SEN
        r#type: String,
        /// Gender: M, W or X
        gender: String,
        /// Category: S, D or DI
        category: String,
        /// Entries to fetch: a positive integer or "all"
        #[arg(long, default_value = "100")]
        top: String,
        /// Delay between paginated windows, in milliseconds
        #[arg(long = "delay-ms", default_value_t = 2000)]
        delay_ms: i64,
    },
    /// Resolve a player's ittfId from a (partial) name
    PlayerId {
        /// Full name, family name first (e.g. "FAN Zhendong")
        #[arg(long)]
        full_name: Option<String>,
        /// Given name only (e.g. "Hugo")
        #[arg(long)]
        given_name: Option<String>,
        /// Family name only (e.g. "Lebrun")
        #[arg(long)]
        family_name: Option<String>,
    },
    /// Fetch a player's profile bundle
    Profile {
        /// Full name, family name first (e.g. "FAN Zhendong")
        #[arg(long)]
        full_name: Option<String>,
        /// Numeric player id (e.g. 121404)
        #[arg(long)]
        ittf_id: Option<i64>,
        /// Replace the base record with the extended roster record
        #[arg(long)]
        extended: bool,
    },
}
