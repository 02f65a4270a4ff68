//! Sales pipeline: lead filters and stage grouping

use crate::records::{Lead, LeadStage};

/// Dropdown filters plus the name search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub source: Option<String>,
    pub plan: Option<String>,
    pub quality: Option<String>,
    pub search_query: String,
}

impl LeadFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        if self.source.as_ref().is_some_and(|s| *s != lead.source) {
            return false;
        }
        if self.plan.is_some() && self.plan != lead.plan {
            return false;
        }
        if self.quality.is_some() && self.quality != lead.quality {
            return false;
        }
        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            return lead.name.to_lowercase().contains(&query);
        }
        true
    }

    pub fn apply<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|l| self.matches(l)).collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Distinct lead sources in first-seen order, for the source dropdown
pub fn distinct_sources(leads: &[Lead]) -> Vec<&str> {
    let mut sources: Vec<&str> = Vec::new();
    for lead in leads {
        if !sources.contains(&lead.source.as_str()) {
            sources.push(&lead.source);
        }
    }
    sources
}

/// Leads bucketed by stage, funnel order, input order within a stage
#[derive(Debug)]
pub struct Pipeline<'a> {
    stages: Vec<(LeadStage, Vec<&'a Lead>)>,
}

impl<'a> Pipeline<'a> {
    pub fn group(leads: &[&'a Lead]) -> Self {
        let stages = LeadStage::ALL
            .iter()
            .map(|&stage| {
                let members = leads.iter().copied().filter(|l| l.stage == stage).collect();
                (stage, members)
            })
            .collect();
        Self { stages }
    }

    pub fn stage(&self, stage: LeadStage) -> &[&'a Lead] {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, members)| members.as_slice())
            .unwrap_or(&[])
    }

    pub fn stages(&self) -> impl Iterator<Item = (LeadStage, &[&'a Lead])> + '_ {
        self.stages.iter().map(|(s, members)| (*s, members.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.stages.iter().map(|(_, members)| members.len()).sum()
    }
}
