//! DTOs shaped for the public page templates.

use std::collections::BTreeMap;

use crate::domain::project::Project;
use crate::domain::review::Review;
use crate::domain::service::Service;
use crate::domain::settings::SiteSettings;
use crate::domain::team_member::TeamMember;
use crate::pagination::Paginated;

/// Data every page needs: company details plus the active palette rendered
/// as `slot -> "r g b"` pairs for the stylesheet's custom properties.
#[derive(Debug)]
pub struct SiteChrome {
    pub settings: SiteSettings,
    pub theme_css: BTreeMap<String, String>,
}

/// Data for the landing page.
pub struct HomePageData {
    /// Most recent portfolio entries.
    pub projects: Vec<Project>,
    /// Approved reviews for the testimonial strip.
    pub reviews: Vec<Review>,
}

pub struct AboutPageData {
    pub team: Vec<TeamMember>,
}

pub struct ServicesPageData {
    pub services: Vec<Service>,
}

/// Query parameters accepted by the projects listing.
#[derive(Debug, Default)]
pub struct ProjectsQuery {
    pub project_type: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
}

pub struct ProjectsPageData {
    pub projects: Paginated<Project>,
    pub type_filter: Option<String>,
    pub search_query: Option<String>,
}

pub struct ReviewsPageData {
    pub reviews: Paginated<Review>,
    /// Projects offered in the "which project was this for" select.
    pub projects: Vec<Project>,
}
