//! Repository traits and their Diesel implementation.
//!
//! Services are generic over the narrow Reader/Writer traits below;
//! [`DieselRepository`] implements them all against the SQLite pool.

use crate::db::{DbConnection, DbPool};
use crate::domain::admin::{Admin, AdminRole, NewAdmin};
use crate::domain::chat::{ChatMessage, ChatSender, NewChatMessage};
use crate::domain::consultation::{
    ApprovalDecision, Consultation, ConsultationStatus, NewConsultation, QuoteOffer,
    UpdateConsultation,
};
use crate::domain::email::{EmailLog, EmailTemplate, NewEmailLog, NewEmailTemplate, UpdateEmailTemplate};
use crate::domain::project::{NewProject, Project, ProjectType, UpdateProject};
use crate::domain::review::{NewReview, Review, ReviewModeration, ReviewStatus};
use crate::domain::service::{NewService, Service, UpdateService};
use crate::domain::settings::{SiteSettings, UpdateSettings};
use crate::domain::team_member::{NewTeamMember, TeamMember, UpdateTeamMember};
use crate::domain::theme::{NewTheme, Theme};
use crate::domain::types::ApprovalToken;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod admin;
pub mod chat;
pub mod consultation;
pub mod email;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod project;
pub mod review;
pub mod service;
pub mod settings;
pub mod team_member;
pub mod theme;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectListQuery {
    pub project_type: Option<ProjectType>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ProjectListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewListQuery {
    pub status: Option<ReviewStatus>,
    pub pagination: Option<Pagination>,
}

impl ReviewListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: ReviewStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsultationListQuery {
    pub status: Option<ConsultationStatus>,
    pub assigned_to: Option<i32>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ConsultationListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: ConsultationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn assigned_to(mut self, admin_id: i32) -> Self {
        self.assigned_to = Some(admin_id);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ProjectReader {
    fn get_project_by_id(&self, id: i32) -> RepositoryResult<Option<Project>>;
    fn list_projects(&self, query: ProjectListQuery) -> RepositoryResult<(usize, Vec<Project>)>;
}

pub trait ProjectWriter {
    fn create_project(&self, new_project: &NewProject) -> RepositoryResult<Project>;
    fn update_project(&self, project_id: i32, updates: &UpdateProject)
    -> RepositoryResult<Project>;
    fn delete_project(&self, project_id: i32) -> RepositoryResult<()>;
}

pub trait ServiceReader {
    fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<Service>>;
    fn list_services(&self, active_only: bool) -> RepositoryResult<Vec<Service>>;
}

pub trait ServiceWriter {
    fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service>;
    fn update_service(&self, service_id: i32, updates: &UpdateService)
    -> RepositoryResult<Service>;
    fn delete_service(&self, service_id: i32) -> RepositoryResult<()>;
}

pub trait TeamMemberReader {
    fn get_team_member_by_id(&self, id: i32) -> RepositoryResult<Option<TeamMember>>;
    fn list_team_members(&self, active_only: bool) -> RepositoryResult<Vec<TeamMember>>;
}

pub trait TeamMemberWriter {
    fn create_team_member(&self, new_member: &NewTeamMember) -> RepositoryResult<TeamMember>;
    fn update_team_member(
        &self,
        member_id: i32,
        updates: &UpdateTeamMember,
    ) -> RepositoryResult<TeamMember>;
    fn delete_team_member(&self, member_id: i32) -> RepositoryResult<()>;
}

pub trait ReviewReader {
    fn get_review_by_id(&self, id: i32) -> RepositoryResult<Option<Review>>;
    fn list_reviews(&self, query: ReviewListQuery) -> RepositoryResult<(usize, Vec<Review>)>;
}

pub trait ReviewWriter {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
    fn moderate_review(
        &self,
        review_id: i32,
        moderation: &ReviewModeration,
    ) -> RepositoryResult<Review>;
    fn delete_review(&self, review_id: i32) -> RepositoryResult<()>;
}

pub trait ConsultationReader {
    fn get_consultation_by_id(&self, id: i32) -> RepositoryResult<Option<Consultation>>;
    fn get_consultation_by_token(
        &self,
        token: &ApprovalToken,
    ) -> RepositoryResult<Option<Consultation>>;
    fn list_consultations(
        &self,
        query: ConsultationListQuery,
    ) -> RepositoryResult<(usize, Vec<Consultation>)>;
    fn count_consultations_by_status(
        &self,
    ) -> RepositoryResult<Vec<(ConsultationStatus, usize)>>;
}

pub trait ConsultationWriter {
    fn create_consultation(
        &self,
        new_consultation: &NewConsultation,
    ) -> RepositoryResult<Consultation>;
    fn update_consultation(
        &self,
        consultation_id: i32,
        updates: &UpdateConsultation,
    ) -> RepositoryResult<Consultation>;
    /// Stamps quote figures, email bookkeeping and a fresh approval token.
    fn record_quote_sent(
        &self,
        consultation_id: i32,
        offer: &QuoteOffer,
        token: ApprovalToken,
        template_name: &str,
    ) -> RepositoryResult<Consultation>;
    fn apply_approval_decision(
        &self,
        consultation_id: i32,
        decision: &ApprovalDecision,
    ) -> RepositoryResult<Consultation>;
    fn delete_consultation(&self, consultation_id: i32) -> RepositoryResult<()>;
}

pub trait ChatReader {
    fn list_chat_messages(&self, consultation_id: i32) -> RepositoryResult<Vec<ChatMessage>>;
}

pub trait ChatWriter {
    fn create_chat_message(&self, message: &NewChatMessage) -> RepositoryResult<ChatMessage>;
    /// Marks messages from the given sender as read, returning the count.
    fn mark_chat_read(&self, consultation_id: i32, sender: ChatSender)
    -> RepositoryResult<usize>;
}

pub trait ThemeReader {
    fn get_theme_by_id(&self, id: i32) -> RepositoryResult<Option<Theme>>;
    fn get_active_theme(&self) -> RepositoryResult<Option<Theme>>;
    fn list_themes(&self) -> RepositoryResult<Vec<Theme>>;
}

pub trait ThemeWriter {
    fn create_theme(&self, new_theme: &NewTheme) -> RepositoryResult<Theme>;
    /// Makes the given theme the single active one.
    fn activate_theme(&self, theme_id: i32) -> RepositoryResult<()>;
    fn delete_theme(&self, theme_id: i32) -> RepositoryResult<()>;
}

pub trait SettingsReader {
    fn get_settings(&self) -> RepositoryResult<Option<SiteSettings>>;
}

pub trait SettingsWriter {
    fn upsert_settings(&self, updates: &UpdateSettings) -> RepositoryResult<SiteSettings>;
}

pub trait EmailTemplateReader {
    fn get_email_template_by_id(&self, id: i32) -> RepositoryResult<Option<EmailTemplate>>;
    fn get_active_template_by_kind(&self, kind: &str)
    -> RepositoryResult<Option<EmailTemplate>>;
    fn list_email_templates(&self) -> RepositoryResult<Vec<EmailTemplate>>;
}

pub trait EmailTemplateWriter {
    fn create_email_template(
        &self,
        new_template: &NewEmailTemplate,
    ) -> RepositoryResult<EmailTemplate>;
    fn update_email_template(
        &self,
        template_id: i32,
        updates: &UpdateEmailTemplate,
    ) -> RepositoryResult<EmailTemplate>;
    fn delete_email_template(&self, template_id: i32) -> RepositoryResult<()>;
}

pub trait EmailLogReader {
    fn list_email_logs(&self, consultation_id: Option<i32>) -> RepositoryResult<Vec<EmailLog>>;
}

pub trait EmailLogWriter {
    fn create_email_log(&self, new_log: &NewEmailLog) -> RepositoryResult<EmailLog>;
}

pub trait AdminReader {
    fn get_admin_by_id(&self, id: i32) -> RepositoryResult<Option<Admin>>;
    fn get_admin_by_email(&self, email: &str) -> RepositoryResult<Option<Admin>>;
    fn list_admins(&self) -> RepositoryResult<Vec<Admin>>;
    fn any_admin_exists(&self) -> RepositoryResult<bool>;
}

pub trait AdminWriter {
    fn create_admin(&self, new_admin: &NewAdmin) -> RepositoryResult<Admin>;
    fn update_admin_role(&self, admin_id: i32, role: AdminRole) -> RepositoryResult<Admin>;
    fn delete_admin(&self, admin_id: i32) -> RepositoryResult<()>;
}

/// Diesel implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        Ok(self.pool.get()?)
    }
}
