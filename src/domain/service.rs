use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An entry in the services catalog shown on the public site.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub what_included: Vec<String>,
    pub technologies: Vec<String>,
    pub show_request_button: bool,
    pub show_contact_button: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewService {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub what_included: Vec<String>,
    pub technologies: Vec<String>,
    pub show_request_button: bool,
    pub show_contact_button: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateService {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub what_included: Vec<String>,
    pub technologies: Vec<String>,
    pub show_request_button: bool,
    pub show_contact_button: bool,
}
