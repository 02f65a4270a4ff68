//! Advisory clients as listed in the client table

use crate::error::AppError;
use crate::search::Labeled;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// KYC verification state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Verified,
    Pending,
    Rejected,
}

/// Risk appetite recorded at onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskProfile {
    Aggressive,
    Moderate,
    Conservative,
    High,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Aggressive => "Aggressive",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Conservative => "Conservative",
            RiskProfile::High => "High",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aggressive" => Ok(RiskProfile::Aggressive),
            "moderate" => Ok(RiskProfile::Moderate),
            "conservative" => Ok(RiskProfile::Conservative),
            "high" => Ok(RiskProfile::High),
            _ => Err(AppError::InvalidInput(format!("Unknown risk profile: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Inactive,
}

/// Client row joined with its relationship manager and plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub client_id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub kyc_status: KycStatus,
    pub risk_profile: RiskProfile,
    pub status: ClientStatus,
    #[serde(default)]
    pub rm_name: String,
    #[serde(default)]
    pub rm_email: String,
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub days_to_renewal: Option<i64>,
}

impl Client {
    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

impl Labeled for Client {
    fn labels(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.rm_name]
    }
}
