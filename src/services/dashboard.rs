//! Services for the admin dashboard and the consultation workspace.

use crate::domain::admin::AdminRole;
use crate::domain::chat::{ChatSender, NewChatMessage};
use crate::domain::consultation::{ConsultationStatus, UpdateConsultation};
use crate::dto::dashboard::{
    ConsultationDetailData, DashboardPageData, DashboardQuery, StatusCounts,
};
use crate::forms::dashboard::{TeamChatForm, UpdateConsultationForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    AdminReader, ChatReader, ChatWriter, ConsultationListQuery, ConsultationReader,
    ConsultationWriter, EmailLogReader, EmailTemplateReader,
};
use crate::services::{ServiceError, ServiceResult, ensure_role};

fn roll_up_counts(counts: Vec<(ConsultationStatus, usize)>) -> StatusCounts {
    let mut rolled = StatusCounts::default();
    for (status, count) in counts {
        rolled.total += count;
        match status {
            ConsultationStatus::New => rolled.new += count,
            ConsultationStatus::InProgress => rolled.in_progress += count,
            ConsultationStatus::Completed => rolled.completed += count,
            ConsultationStatus::Cancelled => rolled.cancelled += count,
        }
    }
    rolled
}

/// Loads the dashboard: status counts plus the filterable lead list.
pub fn load_dashboard<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: DashboardQuery,
) -> ServiceResult<DashboardPageData>
where
    R: ConsultationReader + AdminReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;

    let page = query.page.unwrap_or(1);

    let status_filter = query
        .status
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = ConsultationListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(status) = &status_filter {
        list_query = list_query.status(status.as_str().into());
    }
    if let Some(search) = &search_query {
        list_query = list_query.search(search.clone());
    }

    let (total, consultations) = repo.list_consultations(list_query)?;
    let consultations =
        Paginated::new(consultations, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE));

    let counts = roll_up_counts(repo.count_consultations_by_status()?);
    let admins = repo.list_admins()?;

    Ok(DashboardPageData {
        counts,
        consultations,
        admins,
        status_filter,
        search_query,
    })
}

/// Loads one consultation with its chat thread, email history and the
/// pick-lists the detail page needs.
pub fn load_consultation_detail<R>(
    repo: &R,
    user: &AuthenticatedUser,
    consultation_id: i32,
) -> ServiceResult<ConsultationDetailData>
where
    R: ConsultationReader + ChatReader + ChatWriter + EmailLogReader + EmailTemplateReader
        + AdminReader
        + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;

    let consultation = repo
        .get_consultation_by_id(consultation_id)?
        .ok_or(ServiceError::NotFound)?;

    // Opening the thread marks client messages as seen.
    repo.mark_chat_read(consultation.id, ChatSender::Client)?;

    let chat = repo.list_chat_messages(consultation.id)?;
    let email_logs = repo.list_email_logs(Some(consultation.id))?;
    let admins = repo.list_admins()?;
    let templates = repo.list_email_templates()?;

    Ok(ConsultationDetailData {
        consultation,
        chat,
        email_logs,
        admins,
        templates,
    })
}

/// Applies status/assignment/notes edits from the detail page.
pub fn update_consultation<R>(
    repo: &R,
    user: &AuthenticatedUser,
    consultation_id: i32,
    form: UpdateConsultationForm,
) -> ServiceResult<()>
where
    R: ConsultationReader + ConsultationWriter + AdminReader + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    let updates: UpdateConsultation = form.into();

    if let Some(admin_id) = updates.assigned_to
        && repo.get_admin_by_id(admin_id)?.is_none()
    {
        return Err(ServiceError::Form("Unknown assignee.".to_string()));
    }

    repo.update_consultation(consultation_id, &updates)
        .map_err(|err| {
            log::error!("Failed to update consultation {consultation_id}: {err}");
            ServiceError::from(err)
        })?;

    Ok(())
}

/// Permanently removes a consultation with its thread and email history.
pub fn delete_consultation<R>(
    repo: &R,
    user: &AuthenticatedUser,
    consultation_id: i32,
) -> ServiceResult<()>
where
    R: ConsultationReader + ConsultationWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;

    if repo.get_consultation_by_id(consultation_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.delete_consultation(consultation_id)?;
    Ok(())
}

/// Posts a team reply into the consultation thread.
pub fn post_team_message<R>(
    repo: &R,
    user: &AuthenticatedUser,
    consultation_id: i32,
    form: TeamChatForm,
) -> ServiceResult<()>
where
    R: ConsultationReader + ChatWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    let message = form
        .sanitized_message()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let consultation = repo
        .get_consultation_by_id(consultation_id)?
        .ok_or(ServiceError::NotFound)?;

    repo.create_chat_message(&NewChatMessage {
        consultation_id: consultation.id,
        sender: ChatSender::Team,
        message,
    })?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn viewer() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "9".into(),
            email: "viewer@example.com".into(),
            name: "Viewer".into(),
            role: AdminRole::Viewer,
            exp: 0,
        }
    }

    #[test]
    fn counts_roll_up_by_status() {
        let counts = roll_up_counts(vec![
            (ConsultationStatus::New, 3),
            (ConsultationStatus::Cancelled, 1),
            (ConsultationStatus::InProgress, 2),
        ]);
        assert_eq!(counts.new, 3);
        assert_eq!(counts.in_progress, 2);
        assert_eq!(counts.cancelled, 1);
        assert_eq!(counts.completed, 0);
        assert_eq!(counts.total, 6);
    }

    #[test]
    fn viewer_cannot_edit_consultations() {
        let mut repo = MockRepository::new();
        repo.expect_update_consultation().times(0);

        let form = UpdateConsultationForm {
            status: "completed".into(),
            assigned_to: None,
            priority: None,
            internal_notes: None,
        };
        assert!(matches!(
            update_consultation(&repo, &viewer(), 1, form),
            Err(ServiceError::Unauthorized)
        ));
    }
}
