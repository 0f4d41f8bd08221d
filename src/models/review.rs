use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{
    NewReview as DomainNewReview, Review as DomainReview,
    ReviewModeration as DomainReviewModeration,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::reviews)]
/// Diesel model for [`crate::domain::review::Review`].
pub struct Review {
    pub id: i32,
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_email: Option<String>,
    pub content: String,
    pub rating: i32,
    pub project_id: Option<i32>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview {
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_email: Option<String>,
    pub content: String,
    pub rating: i32,
    pub project_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::reviews)]
/// Moderation decision written by an admin.
pub struct ModerateReview {
    pub status: String,
    pub admin_notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<Review> for DomainReview {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            client_name: review.client_name,
            client_company: review.client_company,
            client_email: review.client_email,
            content: review.content,
            rating: review.rating,
            project_id: review.project_id,
            status: review.status.into(),
            admin_notes: review.admin_notes,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

impl From<&DomainNewReview> for NewReview {
    fn from(review: &DomainNewReview) -> Self {
        Self {
            client_name: review.client_name.clone(),
            client_company: review.client_company.clone(),
            client_email: review.client_email.clone(),
            content: review.content.as_str().to_string(),
            rating: review.rating.get(),
            project_id: review.project_id,
        }
    }
}

impl From<&DomainReviewModeration> for ModerateReview {
    fn from(moderation: &DomainReviewModeration) -> Self {
        Self {
            status: moderation.status.to_string(),
            admin_notes: moderation.admin_notes.clone(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
