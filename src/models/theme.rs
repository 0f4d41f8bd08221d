use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::theme::{NewTheme as DomainNewTheme, Theme as DomainTheme};
use crate::domain::types::HexColor;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::themes)]
pub struct Theme {
    pub id: i32,
    pub name: String,
    pub colors: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::themes)]
pub struct NewTheme {
    pub name: String,
    pub colors: String,
}

impl From<Theme> for DomainTheme {
    fn from(theme: Theme) -> Self {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(&theme.colors).unwrap_or_default();
        let colors = raw
            .into_iter()
            .filter_map(|(slot, value)| HexColor::new(value).ok().map(|color| (slot, color)))
            .collect();
        Self {
            id: theme.id,
            name: theme.name,
            colors,
            is_active: theme.is_active,
            created_at: theme.created_at,
            updated_at: theme.updated_at,
        }
    }
}

impl From<&DomainNewTheme> for NewTheme {
    fn from(theme: &DomainNewTheme) -> Self {
        let colors: BTreeMap<&str, &str> = theme
            .colors
            .iter()
            .map(|(slot, color)| (slot.as_str(), color.as_str()))
            .collect();
        Self {
            name: theme.name.clone(),
            colors: serde_json::to_string(&colors).unwrap_or_else(|_| "{}".to_string()),
        }
    }
}
