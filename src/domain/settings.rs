use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Site-wide settings kept as a single row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    pub company_name: String,
    pub emails: Vec<String>,
    pub socials: BTreeMap<String, String>,
    pub address: Option<String>,
    pub about: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            company_name: "Havoc Solutions".to_string(),
            emails: Vec::new(),
            socials: BTreeMap::new(),
            address: None,
            about: None,
            updated_at: NaiveDateTime::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateSettings {
    pub company_name: String,
    pub emails: Vec<String>,
    pub socials: BTreeMap<String, String>,
    pub address: Option<String>,
    pub about: Option<String>,
}

impl UpdateSettings {
    #[must_use]
    pub fn new(
        company_name: String,
        emails: Vec<String>,
        socials: BTreeMap<String, String>,
        address: Option<String>,
        about: Option<String>,
    ) -> Self {
        Self {
            company_name: company_name.trim().to_string(),
            emails: emails
                .into_iter()
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            socials: socials
                .into_iter()
                .filter(|(k, v)| !k.trim().is_empty() && !v.trim().is_empty())
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .collect(),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            about: about.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        }
    }
}
