//! Services backing the public marketing pages.

use crate::domain::consultation::NewConsultation;
use crate::domain::review::{NewReview, ReviewStatus};
use crate::dto::main::{
    AboutPageData, HomePageData, ProjectsPageData, ProjectsQuery, ReviewsPageData,
    ServicesPageData, SiteChrome,
};
use crate::forms::main::{AddReviewForm, ContactForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    ConsultationWriter, ProjectListQuery, ProjectReader, ReviewListQuery, ReviewReader,
    ReviewWriter, ServiceReader, SettingsReader, TeamMemberReader, ThemeReader,
};
use crate::services::{ServiceError, ServiceResult};

/// How many portfolio entries the landing page shows.
const HOME_PROJECTS: usize = 6;
/// How many testimonials the landing page shows.
const HOME_REVIEWS: usize = 3;

/// Loads the company details and active palette shared by every page.
pub fn load_site_chrome<R>(repo: &R) -> ServiceResult<SiteChrome>
where
    R: SettingsReader + ThemeReader + ?Sized,
{
    let settings = repo.get_settings()?.unwrap_or_default();
    let theme_css = repo
        .get_active_theme()?
        .map(|theme| theme.css_variables())
        .unwrap_or_default();

    Ok(SiteChrome {
        settings,
        theme_css,
    })
}

/// Loads featured projects and approved testimonials for the landing page.
pub fn load_home_page<R>(repo: &R) -> ServiceResult<HomePageData>
where
    R: ProjectReader + ReviewReader + ?Sized,
{
    let (_, projects) =
        repo.list_projects(ProjectListQuery::new().paginate(1, HOME_PROJECTS))?;
    let (_, reviews) = repo.list_reviews(
        ReviewListQuery::new()
            .status(ReviewStatus::Approved)
            .paginate(1, HOME_REVIEWS),
    )?;

    Ok(HomePageData { projects, reviews })
}

pub fn load_about_page<R>(repo: &R) -> ServiceResult<AboutPageData>
where
    R: TeamMemberReader + ?Sized,
{
    let team = repo.list_team_members(true)?;
    Ok(AboutPageData { team })
}

pub fn load_services_page<R>(repo: &R) -> ServiceResult<ServicesPageData>
where
    R: ServiceReader + ?Sized,
{
    let services = repo.list_services(true)?;
    Ok(ServicesPageData { services })
}

/// Loads the filterable, paginated portfolio listing.
pub fn load_projects_page<R>(repo: &R, query: ProjectsQuery) -> ServiceResult<ProjectsPageData>
where
    R: ProjectReader + ?Sized,
{
    let page = query.page.unwrap_or(1);

    let type_filter = query
        .project_type
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = ProjectListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(project_type) = &type_filter {
        list_query = list_query.project_type(project_type.as_str().into());
    }
    if let Some(search) = &search_query {
        list_query = list_query.search(search.clone());
    }

    let (total, projects) = repo.list_projects(list_query)?;
    let projects = Paginated::new(projects, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE));

    Ok(ProjectsPageData {
        projects,
        type_filter,
        search_query,
    })
}

/// Loads approved reviews plus the projects select for the submit form.
pub fn load_reviews_page<R>(repo: &R, page: usize) -> ServiceResult<ReviewsPageData>
where
    R: ReviewReader + ProjectReader + ?Sized,
{
    let (total, reviews) = repo.list_reviews(
        ReviewListQuery::new()
            .status(ReviewStatus::Approved)
            .paginate(page, DEFAULT_ITEMS_PER_PAGE),
    )?;
    let reviews = Paginated::new(reviews, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE));

    let (_, projects) = repo.list_projects(crate::repository::ProjectListQuery::new())?;

    Ok(ReviewsPageData { reviews, projects })
}

/// Validates and stores a visitor review; it stays pending until moderated.
pub fn submit_review<R>(repo: &R, form: AddReviewForm) -> ServiceResult<()>
where
    R: ReviewWriter + ?Sized,
{
    let new_review = NewReview::try_from(form).map_err(|err| {
        log::warn!("Rejected review submission: {err}");
        ServiceError::Form("Please check the review form and try again.".to_string())
    })?;

    repo.create_review(&new_review).map_err(|err| {
        log::error!("Failed to store review: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Records a contact-page message as a website-sourced lead.
pub fn submit_contact<R>(repo: &R, form: ContactForm) -> ServiceResult<()>
where
    R: ConsultationWriter + ?Sized,
{
    use validator::Validate;

    if let Err(err) = form.validate() {
        log::warn!("Rejected contact submission: {err}");
        return Err(ServiceError::Form(
            "Please fill in every required field.".to_string(),
        ));
    }

    let lead: NewConsultation = form.into();
    repo.create_consultation(&lead).map_err(|err| {
        log::error!("Failed to store contact message: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn home_page_loads_projects_and_reviews() {
        let mut repo = MockRepository::new();
        repo.expect_list_projects()
            .returning(|_| Ok((0, Vec::new())));
        repo.expect_list_reviews().returning(|_| Ok((0, Vec::new())));

        let data = load_home_page(&repo).unwrap();
        assert!(data.projects.is_empty());
        assert!(data.reviews.is_empty());
    }

    #[test]
    fn projects_page_normalizes_blank_filters() {
        let mut repo = MockRepository::new();
        repo.expect_list_projects().returning(|query| {
            assert!(query.project_type.is_none());
            assert!(query.search.is_none());
            Ok((0, Vec::new()))
        });

        let data = load_projects_page(
            &repo,
            ProjectsQuery {
                project_type: Some("  ".into()),
                search: Some(String::new()),
                page: None,
            },
        )
        .unwrap();
        assert!(data.type_filter.is_none());
        assert!(data.search_query.is_none());
    }

    #[test]
    fn invalid_review_becomes_form_error() {
        let mut repo = MockRepository::new();
        repo.expect_create_review().times(0);

        let form = AddReviewForm {
            client_name: "Ada".into(),
            client_company: None,
            client_email: "ada@example.com".into(),
            content: "Nice".into(),
            rating: 42,
            project_id: None,
        };
        assert!(matches!(
            submit_review(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }
}
