//! Tradeable instruments offered in the advisory ticker search

use crate::search::Labeled;
use serde::{Deserialize, Serialize};

/// A listed stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub ticker: String,
    pub name: String,
}

impl Stock {
    pub fn new(ticker: &str, name: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            name: name.to_string(),
        }
    }

    /// Built-in instruments used when no stock list is supplied
    pub fn demo_list() -> Vec<Stock> {
        vec![
            Stock::new("RELIANCE", "Reliance Industries Ltd"),
            Stock::new("TATACHEM", "Tata Chemicals Ltd"),
            Stock::new("HEROMOTOCO", "Hero MotoCorp Ltd"),
            Stock::new("ITC", "ITC Limited"),
            Stock::new("RELINFRA", "Reliance Infrastructure Ltd"),
            Stock::new("RELICTEC", "Relic Technologies Ltd"),
            Stock::new("RELIABVEN", "Reliable Ventures India Ltd"),
            Stock::new("RELICHEM", "Reliance Chemotex Industries Ltd"),
        ]
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Labeled for Stock {
    fn labels(&self) -> Vec<&str> {
        vec![&self.ticker, &self.name]
    }
}
