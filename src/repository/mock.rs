//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::admin::{Admin, AdminRole, NewAdmin};
use crate::domain::chat::{ChatMessage, ChatSender, NewChatMessage};
use crate::domain::consultation::{
    ApprovalDecision, Consultation, ConsultationStatus, NewConsultation, QuoteOffer,
    UpdateConsultation,
};
use crate::domain::email::{
    EmailLog, EmailTemplate, NewEmailLog, NewEmailTemplate, UpdateEmailTemplate,
};
use crate::domain::project::{NewProject, Project, UpdateProject};
use crate::domain::review::{NewReview, Review, ReviewModeration};
use crate::domain::service::{NewService, Service, UpdateService};
use crate::domain::settings::{SiteSettings, UpdateSettings};
use crate::domain::team_member::{NewTeamMember, TeamMember, UpdateTeamMember};
use crate::domain::theme::{NewTheme, Theme};
use crate::domain::types::ApprovalToken;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AdminReader, AdminWriter, ChatReader, ChatWriter, ConsultationListQuery, ConsultationReader,
    ConsultationWriter, EmailLogReader, EmailLogWriter, EmailTemplateReader, EmailTemplateWriter,
    ProjectListQuery, ProjectReader, ProjectWriter, ReviewListQuery, ReviewReader, ReviewWriter,
    ServiceReader, ServiceWriter, SettingsReader, SettingsWriter, TeamMemberReader,
    TeamMemberWriter, ThemeReader, ThemeWriter,
};

mock! {
    pub Repository {}

    impl ProjectReader for Repository {
        fn get_project_by_id(&self, id: i32) -> RepositoryResult<Option<Project>>;
        fn list_projects(&self, query: ProjectListQuery) -> RepositoryResult<(usize, Vec<Project>)>;
    }

    impl ProjectWriter for Repository {
        fn create_project(&self, new_project: &NewProject) -> RepositoryResult<Project>;
        fn update_project(&self, project_id: i32, updates: &UpdateProject) -> RepositoryResult<Project>;
        fn delete_project(&self, project_id: i32) -> RepositoryResult<()>;
    }

    impl ServiceReader for Repository {
        fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<Service>>;
        fn list_services(&self, active_only: bool) -> RepositoryResult<Vec<Service>>;
    }

    impl ServiceWriter for Repository {
        fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service>;
        fn update_service(&self, service_id: i32, updates: &UpdateService) -> RepositoryResult<Service>;
        fn delete_service(&self, service_id: i32) -> RepositoryResult<()>;
    }

    impl TeamMemberReader for Repository {
        fn get_team_member_by_id(&self, id: i32) -> RepositoryResult<Option<TeamMember>>;
        fn list_team_members(&self, active_only: bool) -> RepositoryResult<Vec<TeamMember>>;
    }

    impl TeamMemberWriter for Repository {
        fn create_team_member(&self, new_member: &NewTeamMember) -> RepositoryResult<TeamMember>;
        fn update_team_member(&self, member_id: i32, updates: &UpdateTeamMember) -> RepositoryResult<TeamMember>;
        fn delete_team_member(&self, member_id: i32) -> RepositoryResult<()>;
    }

    impl ReviewReader for Repository {
        fn get_review_by_id(&self, id: i32) -> RepositoryResult<Option<Review>>;
        fn list_reviews(&self, query: ReviewListQuery) -> RepositoryResult<(usize, Vec<Review>)>;
    }

    impl ReviewWriter for Repository {
        fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
        fn moderate_review(&self, review_id: i32, moderation: &ReviewModeration) -> RepositoryResult<Review>;
        fn delete_review(&self, review_id: i32) -> RepositoryResult<()>;
    }

    impl ConsultationReader for Repository {
        fn get_consultation_by_id(&self, id: i32) -> RepositoryResult<Option<Consultation>>;
        fn get_consultation_by_token(&self, token: &ApprovalToken) -> RepositoryResult<Option<Consultation>>;
        fn list_consultations(
            &self,
            query: ConsultationListQuery,
        ) -> RepositoryResult<(usize, Vec<Consultation>)>;
        fn count_consultations_by_status(&self) -> RepositoryResult<Vec<(ConsultationStatus, usize)>>;
    }

    impl ConsultationWriter for Repository {
        fn create_consultation(&self, new_consultation: &NewConsultation) -> RepositoryResult<Consultation>;
        fn update_consultation(
            &self,
            consultation_id: i32,
            updates: &UpdateConsultation,
        ) -> RepositoryResult<Consultation>;
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

    impl ChatReader for Repository {
        fn list_chat_messages(&self, consultation_id: i32) -> RepositoryResult<Vec<ChatMessage>>;
    }

    impl ChatWriter for Repository {
        fn create_chat_message(&self, message: &NewChatMessage) -> RepositoryResult<ChatMessage>;
        fn mark_chat_read(&self, consultation_id: i32, sender: ChatSender) -> RepositoryResult<usize>;
    }

    impl ThemeReader for Repository {
        fn get_theme_by_id(&self, id: i32) -> RepositoryResult<Option<Theme>>;
        fn get_active_theme(&self) -> RepositoryResult<Option<Theme>>;
        fn list_themes(&self) -> RepositoryResult<Vec<Theme>>;
    }

    impl ThemeWriter for Repository {
        fn create_theme(&self, new_theme: &NewTheme) -> RepositoryResult<Theme>;
        fn activate_theme(&self, theme_id: i32) -> RepositoryResult<()>;
        fn delete_theme(&self, theme_id: i32) -> RepositoryResult<()>;
    }

    impl SettingsReader for Repository {
        fn get_settings(&self) -> RepositoryResult<Option<SiteSettings>>;
    }

    impl SettingsWriter for Repository {
        fn upsert_settings(&self, updates: &UpdateSettings) -> RepositoryResult<SiteSettings>;
    }

    impl EmailTemplateReader for Repository {
        fn get_email_template_by_id(&self, id: i32) -> RepositoryResult<Option<EmailTemplate>>;
        fn get_active_template_by_kind(&self, kind: &str) -> RepositoryResult<Option<EmailTemplate>>;
        fn list_email_templates(&self) -> RepositoryResult<Vec<EmailTemplate>>;
    }

    impl EmailTemplateWriter for Repository {
        fn create_email_template(&self, new_template: &NewEmailTemplate) -> RepositoryResult<EmailTemplate>;
        fn update_email_template(
            &self,
            template_id: i32,
            updates: &UpdateEmailTemplate,
        ) -> RepositoryResult<EmailTemplate>;
        fn delete_email_template(&self, template_id: i32) -> RepositoryResult<()>;
    }

    impl EmailLogReader for Repository {
        fn list_email_logs(&self, consultation_id: Option<i32>) -> RepositoryResult<Vec<EmailLog>>;
    }

    impl EmailLogWriter for Repository {
        fn create_email_log(&self, new_log: &NewEmailLog) -> RepositoryResult<EmailLog>;
    }

    impl AdminReader for Repository {
        fn get_admin_by_id(&self, id: i32) -> RepositoryResult<Option<Admin>>;
        fn get_admin_by_email(&self, email: &str) -> RepositoryResult<Option<Admin>>;
        fn list_admins(&self) -> RepositoryResult<Vec<Admin>>;
        fn any_admin_exists(&self) -> RepositoryResult<bool>;
    }

    impl AdminWriter for Repository {
        fn create_admin(&self, new_admin: &NewAdmin) -> RepositoryResult<Admin>;
        fn update_admin_role(&self, admin_id: i32, role: AdminRole) -> RepositoryResult<Admin>;
        fn delete_admin(&self, admin_id: i32) -> RepositoryResult<()>;
    }
}
