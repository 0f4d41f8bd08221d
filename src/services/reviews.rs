//! Admin moderation workflows for reviews.

use crate::domain::admin::AdminRole;
use crate::domain::review::{Review, ReviewModeration};
use crate::forms::reviews::ModerateReviewForm;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ReviewListQuery, ReviewReader, ReviewWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Loads the moderation queue, optionally narrowed to one status.
pub fn list_reviews<R>(
    repo: &R,
    user: &AuthenticatedUser,
    status: Option<String>,
    page: usize,
) -> ServiceResult<(Paginated<Review>, Option<String>)>
where
    R: ReviewReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;

    let status_filter = status
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut query = ReviewListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(status) = &status_filter {
        query = query.status(status.as_str().into());
    }

    let (total, reviews) = repo.list_reviews(query)?;
    let reviews = Paginated::new(reviews, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE));

    Ok((reviews, status_filter))
}

/// Applies an approve/reject decision with optional notes.
pub fn moderate_review<R>(
    repo: &R,
    user: &AuthenticatedUser,
    review_id: i32,
    form: ModerateReviewForm,
) -> ServiceResult<Review>
where
    R: ReviewReader + ReviewWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    if repo.get_review_by_id(review_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let moderation =
        ReviewModeration::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.moderate_review(review_id, &moderation).map_err(|err| {
        log::error!("Failed to moderate review {review_id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_review<R>(repo: &R, user: &AuthenticatedUser, review_id: i32) -> ServiceResult<()>
where
    R: ReviewWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;
    repo.delete_review(review_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::review::ReviewStatus;
    use crate::repository::mock::MockRepository;

    fn editor() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".into(),
            email: "editor@example.com".into(),
            name: "Editor".into(),
            role: AdminRole::Editor,
            exp: 0,
        }
    }

    fn sample_review(status: ReviewStatus) -> Review {
        let now = chrono::Utc::now().naive_utc();
        Review {
            id: 5,
            client_name: "Ada".into(),
            client_company: None,
            client_email: None,
            content: "Great work".into(),
            rating: 5,
            project_id: None,
            status,
            admin_notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn moderation_approves_pending_review() {
        let mut repo = MockRepository::new();
        repo.expect_get_review_by_id()
            .returning(|_| Ok(Some(sample_review(ReviewStatus::Pending))));
        repo.expect_moderate_review()
            .withf(|id, moderation| *id == 5 && moderation.status == ReviewStatus::Approved)
            .returning(|_, _| Ok(sample_review(ReviewStatus::Approved)));

        let form = ModerateReviewForm {
            action: "approve".into(),
            admin_notes: None,
        };
        let review = moderate_review(&repo, &editor(), 5, form).unwrap();
        assert_eq!(review.status, ReviewStatus::Approved);
    }

    #[test]
    fn unknown_action_is_a_form_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_review_by_id()
            .returning(|_| Ok(Some(sample_review(ReviewStatus::Pending))));
        repo.expect_moderate_review().times(0);

        let form = ModerateReviewForm {
            action: "escalate".into(),
            admin_notes: None,
        };
        assert!(matches!(
            moderate_review(&repo, &editor(), 5, form),
            Err(ServiceError::Form(_))
        ));
    }
}
