//! Client table filtering and sorting
//!
//! Plain predicate filters (no fuzzy scoring) and a stable column sort with
//! the click-to-toggle direction behavior of a sortable table header.

use crate::error::AppError;
use crate::records::{Client, RiskProfile};
use std::cmp::Ordering;
use std::str::FromStr;

/// Active filter set for the client table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub exclude_inactive: bool,
    /// Case-insensitive substring of the client name
    pub search_term: String,
    pub risk_profile: Option<RiskProfile>,
    pub plan: Option<String>,
    /// Relationship manager names; empty means every RM
    pub relationship_managers: Vec<String>,
}

impl ClientFilter {
    pub fn matches(&self, client: &Client) -> bool {
        if self.exclude_inactive && !client.is_active() {
            return false;
        }
        if !self.search_term.is_empty()
            && !client
                .name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
        {
            return false;
        }
        if self.risk_profile.is_some_and(|p| p != client.risk_profile) {
            return false;
        }
        if self.plan.as_ref().is_some_and(|p| *p != client.plan_name) {
            return false;
        }
        if !self.relationship_managers.is_empty()
            && !self.relationship_managers.contains(&client.rm_name)
        {
            return false;
        }
        true
    }

    /// Keep the clients passing every active filter, in input order
    pub fn apply<'a>(&self, clients: &'a [Client]) -> Vec<&'a Client> {
        clients.iter().filter(|c| self.matches(c)).collect()
    }

    /// Clear every filter
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sortable client table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    DaysToRenewal,
    RmName,
    RiskProfile,
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(SortField::Name),
            "days_to_renewal" | "renewal" => Ok(SortField::DaysToRenewal),
            "rm_name" | "rm" => Ok(SortField::RmName),
            "risk_profile" | "risk" => Ok(SortField::RiskProfile),
            _ => Err(AppError::InvalidInput(format!("Unknown sort field: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ClientSort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: same column flips direction, a new column starts ascending
    pub fn toggle(current: Option<ClientSort>, field: SortField) -> ClientSort {
        match current {
            Some(sort) if sort.field == field => ClientSort::new(field, sort.direction.flip()),
            _ => ClientSort::new(field, SortDirection::Asc),
        }
    }

    fn compare(&self, a: &Client, b: &Client) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a.name.cmp(&b.name),
            // None sorts before any value when ascending
            SortField::DaysToRenewal => a.days_to_renewal.cmp(&b.days_to_renewal),
            SortField::RmName => a.rm_name.cmp(&b.rm_name),
            SortField::RiskProfile => a.risk_profile.as_str().cmp(b.risk_profile.as_str()),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable sort; equal keys keep their filtered order
    pub fn sort(&self, clients: &mut [&Client]) {
        clients.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ClientStatus, KycStatus};

    fn client(
        id: u64,
        name: &str,
        rm: &str,
        risk: RiskProfile,
        plan: &str,
        renewal: Option<i64>,
        status: ClientStatus,
    ) -> Client {
        Client {
            client_id: id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: String::new(),
            kyc_status: KycStatus::Verified,
            risk_profile: risk,
            status,
            rm_name: rm.to_string(),
            rm_email: String::new(),
            plan_name: plan.to_string(),
            days_to_renewal: renewal,
        }
    }

    fn book() -> Vec<Client> {
        vec![
            client(1, "Asha Mehta", "Vikram Rao", RiskProfile::Moderate, "Premium", Some(12), ClientStatus::Active),
            client(2, "Rahul Sharma", "Neha Iyer", RiskProfile::Aggressive, "Basic", Some(3), ClientStatus::Inactive),
            client(3, "Meera Shah", "Vikram Rao", RiskProfile::Conservative, "Premium", None, ClientStatus::Active),
            client(4, "Arjun Nair", "Neha Iyer", RiskProfile::High, "Elite", Some(30), ClientStatus::Active),
        ]
    }

    fn ids(clients: &[&Client]) -> Vec<u64> {
        clients.iter().map(|c| c.client_id).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let clients = book();
        assert_eq!(ids(&ClientFilter::default().apply(&clients)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_exclude_inactive() {
        let clients = book();
        let filter = ClientFilter {
            exclude_inactive: true,
            ..ClientFilter::default()
        };
        assert_eq!(ids(&filter.apply(&clients)), vec![1, 3, 4]);
    }

    #[test]
    fn test_search_term_is_case_insensitive_substring() {
        let clients = book();
        let filter = ClientFilter {
            search_term: "SHA".to_string(),
            ..ClientFilter::default()
        };
        assert_eq!(ids(&filter.apply(&clients)), vec![1, 2, 3]);
    }

    #[test]
    fn test_combined_filters() {
        let clients = book();
        let filter = ClientFilter {
            plan: Some("Premium".to_string()),
            risk_profile: Some(RiskProfile::Conservative),
            ..ClientFilter::default()
        };
        assert_eq!(ids(&filter.apply(&clients)), vec![3]);

        let filter = ClientFilter {
            relationship_managers: vec!["Neha Iyer".to_string()],
            exclude_inactive: true,
            ..ClientFilter::default()
        };
        assert_eq!(ids(&filter.apply(&clients)), vec![4]);
    }

    #[test]
    fn test_reset() {
        let mut filter = ClientFilter {
            exclude_inactive: true,
            search_term: "x".to_string(),
            ..ClientFilter::default()
        };
        filter.reset();
        assert_eq!(filter, ClientFilter::default());
    }

    #[test]
    fn test_toggle() {
        let sort = ClientSort::toggle(None, SortField::Name);
        assert_eq!(sort, ClientSort::new(SortField::Name, SortDirection::Asc));

        let sort = ClientSort::toggle(Some(sort), SortField::Name);
        assert_eq!(sort.direction, SortDirection::Desc);

        let sort = ClientSort::toggle(Some(sort), SortField::RmName);
        assert_eq!(sort, ClientSort::new(SortField::RmName, SortDirection::Asc));
    }

    #[test]
    fn test_sort_by_renewal() {
        let clients = book();
        let mut rows = ClientFilter::default().apply(&clients);

        ClientSort::new(SortField::DaysToRenewal, SortDirection::Asc).sort(&mut rows);
        assert_eq!(ids(&rows), vec![3, 2, 1, 4]);

        ClientSort::new(SortField::DaysToRenewal, SortDirection::Desc).sort(&mut rows);
        assert_eq!(ids(&rows), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_sort_is_stable() {
        let clients = book();
        let mut rows = ClientFilter::default().apply(&clients);
        ClientSort::new(SortField::RmName, SortDirection::Asc).sort(&mut rows);
        assert_eq!(ids(&rows), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_risk_by_name() {
        let clients = book();
        let mut rows = ClientFilter::default().apply(&clients);
        ClientSort::new(SortField::RiskProfile, SortDirection::Asc).sort(&mut rows);
        // Aggressive, Conservative, High, Moderate
        assert_eq!(ids(&rows), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_parse_sort_field() {
        assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("days-to-renewal".parse::<SortField>().unwrap(), SortField::DaysToRenewal);
        assert_eq!("RM".parse::<SortField>().unwrap(), SortField::RmName);
        assert!("email".parse::<SortField>().is_err());
    }
}
