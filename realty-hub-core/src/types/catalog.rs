//! Static mock catalog
//!
//! The dashboard has no data source; every page renders from these fixtures.

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Lead pipeline status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeadStatus {
    New,
    Negotiation,
    Closed,
}

impl LeadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::Closed => "Closed",
        }
    }
}

/// A prospect in the leads table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub name: &'static str,
    pub phone: &'static str,
    pub interest: &'static str,
    pub status: LeadStatus,
    pub last_contact: NaiveDate,
}

impl Lead {
    /// "Today", "Yesterday" or "N days ago" relative to `today`
    pub fn last_contact_label(&self, today: NaiveDate) -> String {
        match (today - self.last_contact).num_days() {
            days if days <= 0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            days => format!("{days} days ago"),
        }
    }
}

/// Leads, with contact dates anchored on `today`
pub fn leads(today: NaiveDate) -> Vec<Lead> {
    let days_back = |n: u64| today.checked_sub_days(Days::new(n)).unwrap_or(today);
    vec![
        Lead {
            name: "John Smith",
            phone: "+971-55-123-4567",
            interest: "Downtown Penthouse",
            status: LeadStatus::New,
            last_contact: today,
        },
        Lead {
            name: "Sarah Khan",
            phone: "+971-50-987-6543",
            interest: "Palm Jumeirah Villa",
            status: LeadStatus::Negotiation,
            last_contact: days_back(1),
        },
        Lead {
            name: "Ahmed Al-Farsi",
            phone: "+971-52-456-7890",
            interest: "Business Bay Apartment",
            status: LeadStatus::Closed,
            last_contact: days_back(2),
        },
    ]
}

/// A follow-up message template card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageTemplate {
    pub title: &'static str,
    pub text: &'static str,
}

const TEMPLATES: [MessageTemplate; 3] = [
    MessageTemplate {
        title: "New Inquiry",
        text: "Hi {{name}}, thank you for your interest in our luxury properties. I’d be happy to share exclusive options that match your preferences.",
    },
    MessageTemplate {
        title: "Follow-up",
        text: "Just checking in to see if you had any questions about the property we discussed. Let me know when it’s a good time to connect.",
    },
    MessageTemplate {
        title: "Negotiation",
        text: "We have some flexibility on this property and I’d love to discuss the next steps with you.",
    },
];

pub fn templates() -> &'static [MessageTemplate] {
    &TEMPLATES
}

/// A headline figure on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetric {
    pub label: String,
    pub value: String,
    pub change_percent: i32,
}

pub fn dashboard_metrics() -> Vec<DashboardMetric> {
    (1..=4)
        .map(|i| DashboardMetric {
            label: format!("Metric {i}"),
            value: format!("2,34{i}"),
            change_percent: 12,
        })
        .collect()
}
