//! Admin forms for the services catalog.

use serde::Deserialize;
use validator::Validate;

use crate::domain::service::{NewService, UpdateService};
use crate::forms::{FormError, textarea_lines};

#[derive(Deserialize, Validate)]
pub struct SaveServiceForm {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub is_active: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    /// One bullet point per line.
    pub what_included: Option<String>,
    /// One technology per line.
    pub technologies: Option<String>,
    #[serde(default)]
    pub show_request_button: Option<String>,
    #[serde(default)]
    pub show_contact_button: Option<String>,
}

impl SaveServiceForm {
    fn collect(self) -> Result<NewService, FormError> {
        self.validate()?;

        let trim = |value: Option<String>| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Ok(NewService {
            title: self.title.trim().to_string(),
            description: trim(self.description),
            icon: trim(self.icon),
            category: trim(self.category),
            is_active: self.is_active.is_some(),
            display_order: self.display_order,
            what_included: self
                .what_included
                .as_deref()
                .map(textarea_lines)
                .unwrap_or_default(),
            technologies: self
                .technologies
                .as_deref()
                .map(textarea_lines)
                .unwrap_or_default(),
            show_request_button: self.show_request_button.is_some(),
            show_contact_button: self.show_contact_button.is_some(),
        })
    }

    pub fn into_new_service(self) -> Result<NewService, FormError> {
        self.collect()
    }

    pub fn into_update_service(self) -> Result<UpdateService, FormError> {
        let service = self.collect()?;
        Ok(UpdateService {
            title: service.title,
            description: service.description,
            icon: service.icon,
            category: service.category,
            is_active: service.is_active,
            display_order: service.display_order,
            what_included: service.what_included,
            technologies: service.technologies,
            show_request_button: service.show_request_button,
            show_contact_button: service.show_contact_button,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_presence_maps_to_bool() {
        let form = SaveServiceForm {
            title: "Web development".into(),
            description: None,
            icon: None,
            category: None,
            is_active: Some("on".into()),
            display_order: 2,
            what_included: Some("Design\nDelivery".into()),
            technologies: None,
            show_request_button: None,
            show_contact_button: Some("on".into()),
        };
        let service = form.into_new_service().unwrap();
        assert!(service.is_active);
        assert!(!service.show_request_button);
        assert!(service.show_contact_button);
        assert_eq!(service.what_included, vec!["Design", "Delivery"]);
    }
}
