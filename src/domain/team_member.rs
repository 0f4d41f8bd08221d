use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTeamMember {
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
}

impl NewTeamMember {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        role: Option<String>,
        bio: Option<String>,
        image_url: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        linkedin_url: Option<String>,
        github_url: Option<String>,
        is_active: bool,
        display_order: i32,
    ) -> Self {
        let trim = |value: Option<String>| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            name: name.trim().to_string(),
            role: trim(role),
            bio: trim(bio),
            image_url: trim(image_url),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: trim(phone),
            linkedin_url: trim(linkedin_url),
            github_url: trim(github_url),
            is_active,
            display_order,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateTeamMember {
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
}
