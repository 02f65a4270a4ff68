//! CLI mode implementation
//!
//! Provides command-line access to the matcher and the table filters

use crate::advice::{Segment, TimeHorizon, TradeType};
use crate::clients::SortField;
use crate::records::RiskProfile;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// advisory-search CLI
#[derive(Parser, Debug)]
#[command(name = "advisory-search")]
#[command(about = "Fuzzy ticker/client search and back-office filters", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Config file (defaults to <config dir>/advisory-search/config.json)
    #[arg(long, global = true, env = "ADVISORY_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the edit distance between two strings
    Distance(DistanceArgs),
    /// Search tickers as you would type in the advisory post box
    Stocks(StocksArgs),
    /// Search, filter and sort the client book
    Clients(ClientsArgs),
    /// Show the sales pipeline grouped by stage
    Leads(LeadsArgs),
    /// Prepare a trade advice for one client or a whole plan
    Advise(AdviseArgs),
}

#[derive(Parser, Clone, Debug)]
pub struct DistanceArgs {
    pub a: String,
    pub b: String,
}

#[derive(Parser, Clone, Debug)]
pub struct StocksArgs {
    /// Search text (case-insensitive)
    #[arg(short = 'q', long)]
    pub query: String,

    /// JSON array of {ticker, name}; built-in list when omitted
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Clone, Debug)]
pub struct ClientsArgs {
    /// JSON array of client rows
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Fuzzy search over name, email and RM (top matches only)
    #[arg(short = 'q', long, conflicts_with_all = ["search", "sort"])]
    pub query: Option<String>,

    /// Name substring filter
    #[arg(short = 's', long)]
    pub search: Option<String>,

    #[arg(long)]
    pub exclude_inactive: bool,

    #[arg(long)]
    pub risk_profile: Option<RiskProfile>,

    #[arg(long)]
    pub plan: Option<String>,

    /// Relationship manager name (repeatable)
    #[arg(long = "rm")]
    pub relationship_managers: Vec<String>,

    /// name, days-to-renewal, rm-name or risk-profile
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Parser, Clone, Debug)]
pub struct LeadsArgs {
    /// JSON array of leads
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    #[arg(long)]
    pub source: Option<String>,

    #[arg(long)]
    pub plan: Option<String>,

    #[arg(long)]
    pub quality: Option<String>,

    /// Lead name substring
    #[arg(short = 'q', long)]
    pub query: Option<String>,
}

#[derive(Parser, Clone, Debug)]
pub struct AdviseArgs {
    /// Stock search text; the best match is advised
    #[arg(short = 'q', long)]
    pub stock: Option<String>,

    /// JSON array of {ticker, name}; built-in list when omitted
    #[arg(long)]
    pub stocks_file: Option<PathBuf>,

    /// JSON array of client rows
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Advise a single client by id
    #[arg(long, conflicts_with = "plan")]
    pub client: Option<u64>,

    /// Advise every client on this plan
    #[arg(long)]
    pub plan: Option<String>,

    /// Client ids to leave out of a plan audience (repeatable)
    #[arg(long, requires = "plan")]
    pub exclude: Vec<u64>,

    #[arg(long, value_enum, default_value_t = TradeType::Buy)]
    pub trade_type: TradeType,

    #[arg(long, value_enum, default_value_t = Segment::Equity)]
    pub segment: Segment,

    #[arg(long, value_enum, default_value_t = TimeHorizon::Intraday)]
    pub horizon: TimeHorizon,

    #[arg(long)]
    pub entry: Option<String>,

    #[arg(long)]
    pub stoploss: Option<String>,

    /// Comma separated target prices
    #[arg(long)]
    pub targets: Option<String>,

    #[arg(long)]
    pub trailing_sl: bool,

    #[arg(long)]
    pub range_entry: bool,

    #[arg(long)]
    pub range_target: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stocks_args() {
        let cli = Cli::try_parse_from(["advisory-search", "stocks", "-q", "rel"]).unwrap();
        match cli.command {
            Commands::Stocks(args) => {
                assert_eq!(args.query, "rel");
                assert!(args.file.is_none());
                assert!(!args.json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_clients_args() {
        let cli = Cli::try_parse_from([
            "advisory-search",
            "clients",
            "-f",
            "clients.json",
            "--risk-profile",
            "moderate",
            "--rm",
            "Vikram Rao",
            "--rm",
            "Neha Iyer",
            "--sort",
            "days-to-renewal",
            "--desc",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Clients(args) => {
                assert_eq!(args.risk_profile, Some(RiskProfile::Moderate));
                assert_eq!(args.relationship_managers.len(), 2);
                assert_eq!(args.sort, Some(SortField::DaysToRenewal));
                assert!(args.desc);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_query_conflicts_with_sort() {
        let result = Cli::try_parse_from([
            "advisory-search",
            "clients",
            "-f",
            "clients.json",
            "-q",
            "asha",
            "--sort",
            "name",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_risk_profile() {
        let result = Cli::try_parse_from([
            "advisory-search",
            "clients",
            "-f",
            "clients.json",
            "--risk-profile",
            "reckless",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_advise_args() {
        let cli = Cli::try_parse_from([
            "advisory-search",
            "advise",
            "-f",
            "clients.json",
            "--plan",
            "Premium",
            "--exclude",
            "3",
            "-q",
            "relaince",
            "--trade-type",
            "sell",
            "--segment",
            "fno",
            "--entry",
            "2450",
            "--targets",
            "2500,2550",
            "--trailing-sl",
        ])
        .unwrap();
        match cli.command {
            Commands::Advise(args) => {
                assert_eq!(args.plan.as_deref(), Some("Premium"));
                assert_eq!(args.exclude, vec![3]);
                assert_eq!(args.trade_type, TradeType::Sell);
                assert_eq!(args.segment, Segment::FuturesOptions);
                assert_eq!(args.horizon, TimeHorizon::Intraday);
                assert!(args.stoploss.is_none());
                assert!(args.trailing_sl);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_advise_client_conflicts_with_plan() {
        let result = Cli::try_parse_from([
            "advisory-search",
            "advise",
            "-f",
            "clients.json",
            "--client",
            "1",
            "--plan",
            "Premium",
        ]);
        assert!(result.is_err());
    }
}
