//! Command implementations
//!
//! Each command takes its parsed arguments plus the loaded config and
//! returns the text to print, so the binary only handles I/O and exit codes.

use crate::advice::{prepare, Audience, TradeAdvice, TradeDraft};
use crate::cli::{AdviseArgs, ClientsArgs, DistanceArgs, LeadsArgs, StocksArgs};
use crate::clients::{ClientFilter, ClientSort, SortDirection};
use crate::config::Config;
use crate::error::{validate_term, AppError};
use crate::leads::{LeadFilter, Pipeline};
use crate::records::{Client, Lead, Stock};
use crate::search::{levenshtein, FuzzyMatcher};
use crate::source::{CandidateSource, JsonFileSource, StaticSource};
use serde::Serialize;
use std::fmt::Write;
use tracing::info;

#[derive(Debug, Serialize)]
struct StockHit<'a> {
    ticker: &'a str,
    name: &'a str,
    distance: usize,
    starts_with_query: bool,
}

#[derive(Debug, Serialize)]
struct PostingOut<'a> {
    advice: &'a TradeAdvice,
    recipients: Vec<u64>,
}

pub fn execute_distance(args: &DistanceArgs) -> Result<String, AppError> {
    validate_term(&args.a)?;
    validate_term(&args.b)?;

    Ok(levenshtein(&args.a, &args.b).to_string())
}

pub fn execute_stocks(args: &StocksArgs, config: &Config) -> Result<String, AppError> {
    validate_term(&args.query)?;

    let stocks = match &args.file {
        Some(path) => JsonFileSource::<Stock>::new(path).snapshot()?,
        None => StaticSource::new(Stock::demo_list()).snapshot()?,
    };

    let matcher = FuzzyMatcher::new(config.policy.clone());
    let found = matcher.matches_labeled(&args.query, &stocks);
    info!("{} of {} stocks matched \"{}\"", found.len(), stocks.len(), args.query);

    if args.json {
        let hits: Vec<StockHit<'_>> = found
            .iter()
            .map(|m| StockHit {
                ticker: &m.item.ticker,
                name: &m.item.name,
                distance: m.distance,
                starts_with_query: m.starts_with_query,
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&hits)?);
    }

    if found.is_empty() {
        return Ok(format!("No stocks match \"{}\"", args.query));
    }

    let mut out = String::new();
    for m in &found {
        let marker = if m.starts_with_query { "prefix" } else { "fuzzy" };
        let _ = writeln!(
            out,
            "{:<12} {:<36} {} d={}",
            m.item.ticker, m.item.name, marker, m.distance
        );
    }
    Ok(out.trim_end().to_string())
}

pub fn execute_clients(args: &ClientsArgs, config: &Config) -> Result<String, AppError> {
    let clients = JsonFileSource::<Client>::new(&args.file).snapshot()?;

    let filter = ClientFilter {
        exclude_inactive: args.exclude_inactive,
        search_term: args.search.clone().unwrap_or_default(),
        risk_profile: args.risk_profile,
        plan: args.plan.clone(),
        relationship_managers: args.relationship_managers.clone(),
    };
    validate_term(&filter.search_term)?;
    let mut rows = filter.apply(&clients);

    if let Some(query) = &args.query {
        validate_term(query)?;
        // Fuzzy search runs over the filtered rows and replaces table order.
        let filtered: Vec<Client> = rows.into_iter().cloned().collect();
        let matcher = FuzzyMatcher::new(config.policy.clone());
        let ranked = matcher.rank_labeled(query, &filtered);
        return Ok(format_clients(&ranked));
    }

    if let Some(field) = args.sort {
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        ClientSort::new(field, direction).sort(&mut rows);
    }

    info!("{} of {} clients shown", rows.len(), clients.len());
    Ok(format_clients(&rows))
}

fn format_clients(rows: &[&Client]) -> String {
    if rows.is_empty() {
        return "No clients match".to_string();
    }

    let mut out = String::new();
    for c in rows {
        let renewal = match c.days_to_renewal {
            _ if !c.is_active() => "inactive".to_string(),
            Some(days) => format!("renews in {} days", days),
            None => "no renewal".to_string(),
        };
        let _ = writeln!(
            out,
            "#{:<5} {:<24} {:<12} {:<14} RM {:<20} {}",
            c.client_id, c.name, c.plan_name, c.risk_profile.as_str(), c.rm_name, renewal
        );
    }
    out.trim_end().to_string()
}

pub fn execute_leads(args: &LeadsArgs) -> Result<String, AppError> {
    let leads = JsonFileSource::<Lead>::new(&args.file).snapshot()?;

    let filter = LeadFilter {
        source: args.source.clone(),
        plan: args.plan.clone(),
        quality: args.quality.clone(),
        search_query: args.query.clone().unwrap_or_default(),
    };
    validate_term(&filter.search_query)?;

    let filtered = filter.apply(&leads);
    let pipeline = Pipeline::group(&filtered);

    let mut out = String::new();
    for (stage, members) in pipeline.stages() {
        let _ = writeln!(out, "{} ({})", stage.as_str(), members.len());
        for lead in members {
            let plan = lead.plan.as_deref().unwrap_or("-");
            let _ = writeln!(out, "  {:<24} {:<12} {}", lead.name, lead.source, plan);
        }
    }
    Ok(out.trim_end().to_string())
}

/// Validate an advice and print it with the ids of its recipients
pub fn execute_advise(args: &AdviseArgs, config: &Config) -> Result<String, AppError> {
    let stock = match &args.stock {
        Some(query) => Some(best_stock(query, args, config)?),
        None => None,
    };

    let clients = JsonFileSource::<Client>::new(&args.file).snapshot()?;
    let audience = match (&args.plan, args.client) {
        (Some(plan), _) => {
            let mut audience = Audience::for_plan(plan, &clients);
            for id in &args.exclude {
                audience.remove(*id);
            }
            audience
        }
        (None, Some(id)) => {
            let client = clients
                .iter()
                .find(|c| c.client_id == id)
                .ok_or_else(|| AppError::NotFound(format!("client #{}", id)))?;
            Audience::Individual(Some(client))
        }
        (None, None) => Audience::Individual(None),
    };

    let draft = TradeDraft {
        stock,
        trade_type: args.trade_type,
        segment: args.segment,
        time_horizon: args.horizon,
        entry: args.entry.clone().unwrap_or_default(),
        stoploss: args.stoploss.clone().unwrap_or_default(),
        targets: args.targets.clone().unwrap_or_default(),
        trailing_sl: args.trailing_sl,
        range_entry: args.range_entry,
        range_target: args.range_target,
    };

    let posting = prepare(&draft, &audience)?;
    info!(
        "{} advice on {} for {} client(s)",
        posting.advice.stock,
        args.file.display(),
        posting.recipients.len()
    );

    let out = PostingOut {
        advice: &posting.advice,
        recipients: posting.recipients.iter().map(|c| c.client_id).collect(),
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

fn best_stock(query: &str, args: &AdviseArgs, config: &Config) -> Result<String, AppError> {
    validate_term(query)?;

    let stocks = match &args.stocks_file {
        Some(path) => JsonFileSource::<Stock>::new(path).snapshot()?,
        None => StaticSource::new(Stock::demo_list()).snapshot()?,
    };

    let matcher = FuzzyMatcher::new(config.policy.clone());
    matcher
        .rank_labeled(query, &stocks)
        .first()
        .map(|stock| stock.ticker.clone())
        .ok_or_else(|| AppError::NotFound(format!("no stock matches \"{}\"", query)))
}
