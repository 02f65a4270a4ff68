//! Sales leads tracked through the subscription pipeline

use crate::search::Labeled;
use serde::{Deserialize, Serialize};

/// Pipeline stage, in funnel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStage {
    Lead,
    Called,
    Trial,
    Subscribed,
    Onboarded,
}

impl LeadStage {
    pub const ALL: [LeadStage; 5] = [
        LeadStage::Lead,
        LeadStage::Called,
        LeadStage::Trial,
        LeadStage::Subscribed,
        LeadStage::Onboarded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStage::Lead => "lead",
            LeadStage::Called => "called",
            LeadStage::Trial => "trial",
            LeadStage::Subscribed => "subscribed",
            LeadStage::Onboarded => "onboarded",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub source: String,
    pub stage: LeadStage,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub is_elite: bool,
    #[serde(default)]
    pub message_count: u32,
    #[serde(default)]
    pub unread_messages: u32,
}

impl Labeled for Lead {
    fn labels(&self) -> Vec<&str> {
        vec![&self.name, &self.source]
    }
}
