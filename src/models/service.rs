use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::service::{
    NewService as DomainNewService, Service as DomainService, UpdateService as DomainUpdateService,
};
use crate::models::{decode_string_list, encode_string_list};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::services)]
/// Diesel model for [`crate::domain::service::Service`].
pub struct Service {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub what_included: String,
    pub technologies: String,
    pub show_request_button: bool,
    pub show_contact_button: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::services)]
pub struct NewService {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub what_included: String,
    pub technologies: String,
    pub show_request_button: bool,
    pub show_contact_button: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::services)]
pub struct UpdateService {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub what_included: String,
    pub technologies: String,
    pub show_request_button: bool,
    pub show_contact_button: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Service> for DomainService {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            title: service.title,
            description: service.description,
            icon: service.icon,
            category: service.category,
            is_active: service.is_active,
            display_order: service.display_order,
            what_included: decode_string_list(&service.what_included),
            technologies: decode_string_list(&service.technologies),
            show_request_button: service.show_request_button,
            show_contact_button: service.show_contact_button,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }
}

impl From<&DomainNewService> for NewService {
    fn from(service: &DomainNewService) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            icon: service.icon.clone(),
            category: service.category.clone(),
            is_active: service.is_active,
            display_order: service.display_order,
            what_included: encode_string_list(&service.what_included),
            technologies: encode_string_list(&service.technologies),
            show_request_button: service.show_request_button,
            show_contact_button: service.show_contact_button,
        }
    }
}

impl From<&DomainUpdateService> for UpdateService {
    fn from(service: &DomainUpdateService) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            icon: service.icon.clone(),
            category: service.category.clone(),
            is_active: service.is_active,
            display_order: service.display_order,
            what_included: encode_string_list(&service.what_included),
            technologies: encode_string_list(&service.technologies),
            show_request_button: service.show_request_button,
            show_contact_button: service.show_contact_button,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
