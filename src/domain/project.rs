use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Portfolio categories a project can be filed under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectType {
    Mobile,
    Web,
    Ai,
    Fullstack,
    Other(String),
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectType::Mobile => write!(f, "mobile"),
            ProjectType::Web => write!(f, "web"),
            ProjectType::Ai => write!(f, "ai"),
            ProjectType::Fullstack => write!(f, "fullstack"),
            ProjectType::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for ProjectType {
    fn from(s: &str) -> Self {
        match s {
            "mobile" => ProjectType::Mobile,
            "web" => ProjectType::Web,
            "ai" => ProjectType::Ai,
            "fullstack" => ProjectType::Fullstack,
            _ => ProjectType::Other(s.to_string()),
        }
    }
}

impl From<String> for ProjectType {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub project_type: ProjectType,
    /// URLs of showcase images, in display order.
    pub images: Vec<String>,
    pub technologies: Vec<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub project_type: ProjectType,
    pub images: Vec<String>,
    pub technologies: Vec<String>,
    pub status: String,
}

impl NewProject {
    #[must_use]
    pub fn new(
        title: String,
        description: Option<String>,
        project_type: ProjectType,
        images: Vec<String>,
        technologies: Vec<String>,
        status: String,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            project_type,
            images: images
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            technologies: technologies
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            status: status.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProject {
    pub title: String,
    pub description: Option<String>,
    pub project_type: ProjectType,
    pub images: Vec<String>,
    pub technologies: Vec<String>,
    pub status: String,
}

crate::domain::string_enum_serde!(ProjectType);
