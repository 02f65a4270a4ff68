//! Trade advisory posting
//!
//! Turns a filled-in advice form into the trade record sent to clients and
//! resolves who receives it: one picked client, or every client on a plan.

use crate::error::AppError;
use crate::records::Client;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Stock recorded when the form was posted without one
pub const UNKNOWN_STOCK: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeType {
    #[default]
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Segment {
    #[default]
    #[serde(rename = "EQUITY")]
    Equity,
    #[serde(rename = "F&O")]
    #[value(name = "fno")]
    FuturesOptions,
    #[serde(rename = "COMMODITIES")]
    Commodities,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeHorizon {
    #[default]
    Intraday,
    Swing,
    Longterm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Active,
    Completed,
}

/// Trade call as stored against each recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeAdvice {
    pub stock: String,
    pub trade_type: TradeType,
    pub segment: Segment,
    pub time_horizon: TimeHorizon,
    pub entry: String,
    pub stoploss: String,
    pub targets: Vec<String>,
    #[serde(rename = "trailingSL")]
    pub trailing_sl: bool,
    pub range_entry: bool,
    pub range_target: bool,
    pub status: TradeStatus,
    pub created_at: DateTime<Utc>,
}

/// The advice form before submission. Prices are kept as typed.
#[derive(Debug, Clone, Default)]
pub struct TradeDraft {
    pub stock: Option<String>,
    pub trade_type: TradeType,
    pub segment: Segment,
    pub time_horizon: TimeHorizon,
    pub entry: String,
    pub stoploss: String,
    /// Comma separated target prices
    pub targets: String,
    pub trailing_sl: bool,
    pub range_entry: bool,
    pub range_target: bool,
}

impl TradeDraft {
    /// Check the required price fields and build an active trade record
    pub fn validate(&self) -> Result<TradeAdvice, AppError> {
        require("entry", &self.entry)?;
        require("stoploss", &self.stoploss)?;
        require("targets", &self.targets)?;

        let stock = match self.stock.as_deref().map(str::trim) {
            Some(stock) if !stock.is_empty() => stock.to_string(),
            _ => UNKNOWN_STOCK.to_string(),
        };

        Ok(TradeAdvice {
            stock,
            trade_type: self.trade_type,
            segment: self.segment,
            time_horizon: self.time_horizon,
            entry: self.entry.trim().to_string(),
            stoploss: self.stoploss.trim().to_string(),
            targets: parse_targets(&self.targets),
            trailing_sl: self.trailing_sl,
            range_entry: self.range_entry,
            range_target: self.range_target,
            status: TradeStatus::Active,
            created_at: Utc::now(),
        })
    }
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

/// Split a comma separated target list, trimming each entry
pub fn parse_targets(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

/// Who an advice goes to
#[derive(Debug, Clone)]
pub enum Audience<'a> {
    /// A single client picked from search, if any
    Individual(Option<&'a Client>),
    /// Everyone on a plan, minus any removed by hand
    Plan {
        plan: Option<String>,
        members: Vec<&'a Client>,
    },
}

impl<'a> Audience<'a> {
    /// All clients in `book` subscribed to `plan`, in book order
    pub fn for_plan(plan: &str, book: &'a [Client]) -> Self {
        let members = book.iter().filter(|c| c.plan_name == plan).collect();
        Audience::Plan {
            plan: Some(plan.to_string()),
            members,
        }
    }

    /// Drop one client from a plan audience
    pub fn remove(&mut self, client_id: u64) {
        if let Audience::Plan { members, .. } = self {
            members.retain(|c| c.client_id != client_id);
        }
    }

    pub fn recipients(&self) -> Result<Vec<&'a Client>, AppError> {
        match self {
            Audience::Individual(Some(client)) => Ok(vec![*client]),
            Audience::Individual(None) => Err(AppError::InvalidInput(
                "select a client to advise".to_string(),
            )),
            Audience::Plan { plan: None, .. } => {
                Err(AppError::InvalidInput("select a plan to advise".to_string()))
            }
            Audience::Plan {
                plan: Some(plan),
                members,
            } => {
                if members.is_empty() {
                    return Err(AppError::InvalidInput(format!(
                        "plan {} has no clients",
                        plan
                    )));
                }
                Ok(members.clone())
            }
        }
    }
}

/// A validated advice together with the clients it goes to
#[derive(Debug, Clone)]
pub struct Posting<'a> {
    pub advice: TradeAdvice,
    pub recipients: Vec<&'a Client>,
}

/// Validate the audience first, then the form
pub fn prepare<'a>(draft: &TradeDraft, audience: &Audience<'a>) -> Result<Posting<'a>, AppError> {
    let recipients = audience.recipients()?;
    let advice = draft.validate()?;
    Ok(Posting { advice, recipients })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ClientStatus, KycStatus, RiskProfile};

    fn client(id: u64, name: &str, plan: &str) -> Client {
        Client {
            client_id: id,
            name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            kyc_status: KycStatus::Verified,
            risk_profile: RiskProfile::Moderate,
            status: ClientStatus::Active,
            rm_name: String::new(),
            rm_email: String::new(),
            plan_name: plan.to_string(),
            days_to_renewal: None,
        }
    }

    fn book() -> Vec<Client> {
        vec![
            client(1, "Asha Mehta", "Premium"),
            client(2, "Rahul Sharma", "Basic"),
            client(3, "Meera Shah", "Premium"),
        ]
    }

    fn draft() -> TradeDraft {
        TradeDraft {
            stock: Some("RELIANCE".to_string()),
            entry: "2450".to_string(),
            stoploss: "2400".to_string(),
            targets: "2500, 2550 ,2600".to_string(),
            ..TradeDraft::default()
        }
    }

    fn ids(clients: &[&Client]) -> Vec<u64> {
        clients.iter().map(|c| c.client_id).collect()
    }

    #[test]
    fn test_parse_targets_trims() {
        assert_eq!(parse_targets(" 2500 ,2550,  2600 "), vec!["2500", "2550", "2600"]);
        assert_eq!(parse_targets("2500"), vec!["2500"]);
        assert_eq!(parse_targets("2500,,2600"), vec!["2500", "", "2600"]);
    }

    #[test]
    fn test_validate_builds_active_trade() {
        let advice = draft().validate().unwrap();
        assert_eq!(advice.stock, "RELIANCE");
        assert_eq!(advice.trade_type, TradeType::Buy);
        assert_eq!(advice.segment, Segment::Equity);
        assert_eq!(advice.time_horizon, TimeHorizon::Intraday);
        assert_eq!(advice.targets, vec!["2500", "2550", "2600"]);
        assert_eq!(advice.status, TradeStatus::Active);
    }

    #[test]
    fn test_missing_price_fields() {
        for field in ["entry", "stoploss", "targets"] {
            let mut incomplete = draft();
            match field {
                "entry" => incomplete.entry.clear(),
                "stoploss" => incomplete.stoploss = "  ".to_string(),
                _ => incomplete.targets.clear(),
            }
            match incomplete.validate() {
                Err(AppError::InvalidInput(msg)) => assert!(msg.starts_with(field), "{}", msg),
                other => panic!("expected InvalidInput for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_missing_stock_is_unknown() {
        let mut no_stock = draft();
        no_stock.stock = None;
        assert_eq!(no_stock.validate().unwrap().stock, UNKNOWN_STOCK);

        no_stock.stock = Some(String::new());
        assert_eq!(no_stock.validate().unwrap().stock, UNKNOWN_STOCK);
    }

    #[test]
    fn test_individual_requires_client() {
        let err = prepare(&draft(), &Audience::Individual(None)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let clients = book();
        let posting = prepare(&draft(), &Audience::Individual(Some(&clients[1]))).unwrap();
        assert_eq!(ids(&posting.recipients), vec![2]);
    }

    #[test]
    fn test_plan_requires_plan_and_members() {
        let no_plan = Audience::Plan {
            plan: None,
            members: Vec::new(),
        };
        assert!(matches!(no_plan.recipients(), Err(AppError::InvalidInput(_))));

        let clients = book();
        let empty = Audience::for_plan("Elite", &clients);
        assert!(matches!(empty.recipients(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_plan_recipients() {
        let clients = book();
        let mut audience = Audience::for_plan("Premium", &clients);
        assert_eq!(ids(&audience.recipients().unwrap()), vec![1, 3]);

        audience.remove(1);
        assert_eq!(ids(&audience.recipients().unwrap()), vec![3]);

        audience.remove(3);
        assert!(audience.recipients().is_err());
    }

    #[test]
    fn test_audience_checked_before_form() {
        let mut incomplete = draft();
        incomplete.entry.clear();
        let err = prepare(&incomplete, &Audience::Individual(None)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: select a client to advise");
    }

    #[test]
    fn test_trade_serializes_wire_names() {
        let mut fno = draft();
        fno.segment = Segment::FuturesOptions;
        fno.trade_type = TradeType::Sell;
        fno.trailing_sl = true;
        let json = serde_json::to_value(fno.validate().unwrap()).unwrap();

        assert_eq!(json["tradeType"], "SELL");
        assert_eq!(json["segment"], "F&O");
        assert_eq!(json["timeHorizon"], "INTRADAY");
        assert_eq!(json["trailingSL"], true);
        assert_eq!(json["status"], "ACTIVE");
        assert!(json["createdAt"].is_string());
    }
}
