use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::settings::{
    SiteSettings as DomainSiteSettings, UpdateSettings as DomainUpdateSettings,
};
use crate::models::{decode_string_list, encode_string_list};

/// The settings table holds exactly one row with this id.
pub const SETTINGS_ROW_ID: i32 = 1;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::settings)]
pub struct Settings {
    pub id: i32,
    pub company_name: String,
    pub emails: String,
    pub socials: String,
    pub address: Option<String>,
    pub about: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::settings)]
#[diesel(treat_none_as_null = true)]
pub struct UpsertSettings {
    pub id: i32,
    pub company_name: String,
    pub emails: String,
    pub socials: String,
    pub address: Option<String>,
    pub about: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<Settings> for DomainSiteSettings {
    fn from(settings: Settings) -> Self {
        let socials: BTreeMap<String, String> =
            serde_json::from_str(&settings.socials).unwrap_or_default();
        Self {
            company_name: settings.company_name,
            emails: decode_string_list(&settings.emails),
            socials,
            address: settings.address,
            about: settings.about,
            updated_at: settings.updated_at,
        }
    }
}

impl From<&DomainUpdateSettings> for UpsertSettings {
    fn from(update: &DomainUpdateSettings) -> Self {
        Self {
            id: SETTINGS_ROW_ID,
            company_name: update.company_name.clone(),
            emails: encode_string_list(&update.emails),
            socials: serde_json::to_string(&update.socials)
                .unwrap_or_else(|_| "{}".to_string()),
            address: update.address.clone(),
            about: update.about.clone(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
