//! Page identity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the fixed set of navigable views
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Dashboard,
    Leads,
    Listings,
    Followups,
    Scheduler,
}

impl PageId {
    /// All pages in sidebar order
    pub const ALL: [PageId; 5] = [
        PageId::Dashboard,
        PageId::Leads,
        PageId::Listings,
        PageId::Followups,
        PageId::Scheduler,
    ];

    /// Stable lowercase identifier (config and log spelling)
    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Leads => "leads",
            PageId::Listings => "listings",
            PageId::Followups => "followups",
            PageId::Scheduler => "scheduler",
        }
    }

    /// Sidebar label
    pub fn label(self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::Leads => "Leads",
            PageId::Listings => "Listings",
            PageId::Followups => "Follow-ups",
            PageId::Scheduler => "Scheduler",
        }
    }

    /// Header title
    pub fn title(self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::Leads => "Leads",
            PageId::Listings => "AI Listing Generator",
            PageId::Followups => "Automated Follow-ups",
            PageId::Scheduler => "Scheduler",
        }
    }

    /// Header subtitle
    pub fn subtitle(self) -> &'static str {
        match self {
            PageId::Dashboard => "Welcome back, Agent",
            PageId::Leads => "Manage your high-value prospects",
            PageId::Listings => "Create high-converting luxury property descriptions",
            PageId::Followups => "Close more deals with timely communication",
            PageId::Scheduler => "Manage your appointments",
        }
    }

    /// Position in [`PageId::ALL`]
    pub fn index(self) -> usize {
        match self {
            PageId::Dashboard => 0,
            PageId::Leads => 1,
            PageId::Listings => 2,
            PageId::Followups => 3,
            PageId::Scheduler => 4,
        }
    }

    /// Page at a sidebar position, if any
    pub fn from_index(index: usize) -> Option<PageId> {
        Self::ALL.get(index).copied()
    }

    /// Parse a page id, recovering unknown input as the default page.
    pub fn parse_or_default(raw: &str) -> PageId {
        raw.parse().unwrap_or_else(|err: CoreError| {
            log::warn!("{err}, falling back to {}", PageId::default());
            PageId::default()
        })
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::InvalidPageId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_ids_case_insensitively() {
        assert_eq!("leads".parse::<PageId>().unwrap(), PageId::Leads);
        assert_eq!(" FollowUps ".parse::<PageId>().unwrap(), PageId::Followups);
    }

    #[test]
    fn unknown_id_is_an_invalid_page_error() {
        let err = "reports".parse::<PageId>().unwrap_err();
        assert_eq!(err, CoreError::InvalidPageId("reports".to_string()));
    }

    #[test]
    fn parse_or_default_falls_back_to_dashboard() {
        assert_eq!(PageId::parse_or_default("reports"), PageId::Dashboard);
        assert_eq!(PageId::parse_or_default("scheduler"), PageId::Scheduler);
    }

    #[test]
    fn index_round_trips_through_all() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_index(page.index()), Some(page));
        }
        assert_eq!(PageId::from_index(5), None);
    }

    #[test]
    fn listings_header_differs_from_label() {
        assert_eq!(PageId::Listings.label(), "Listings");
        assert_eq!(PageId::Listings.title(), "AI Listing Generator");
    }
}
