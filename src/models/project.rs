use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::project::{
    NewProject as DomainNewProject, Project as DomainProject, UpdateProject as DomainUpdateProject,
};
use crate::models::{decode_string_list, encode_string_list};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::projects)]
/// Diesel model for [`crate::domain::project::Project`].
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub project_type: String,
    pub images: String,
    pub technologies: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::projects)]
/// Insertable form of [`Project`].
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub project_type: String,
    pub images: String,
    pub technologies: String,
    pub status: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::projects)]
/// Data used when updating a [`Project`] record.
pub struct UpdateProject {
    pub title: String,
    pub description: Option<String>,
    pub project_type: String,
    pub images: String,
    pub technologies: String,
    pub status: String,
    pub updated_at: NaiveDateTime,
}

impl From<Project> for DomainProject {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            project_type: project.project_type.into(),
            images: decode_string_list(&project.images),
            technologies: decode_string_list(&project.technologies),
            status: project.status,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

impl From<&DomainNewProject> for NewProject {
    fn from(project: &DomainNewProject) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            project_type: project.project_type.to_string(),
            images: encode_string_list(&project.images),
            technologies: encode_string_list(&project.technologies),
            status: project.status.clone(),
        }
    }
}

impl From<&DomainUpdateProject> for UpdateProject {
    fn from(project: &DomainUpdateProject) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            project_type: project.project_type.to_string(),
            images: encode_string_list(&project.images),
            technologies: encode_string_list(&project.technologies),
            status: project.status.clone(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::ProjectType;

    #[test]
    fn db_project_into_domain_decodes_json_lists() {
        let now = chrono::Utc::now().naive_utc();
        let db_project = Project {
            id: 1,
            title: "Portal".to_string(),
            description: None,
            project_type: "web".to_string(),
            images: r#"["/uploads/a.png"]"#.to_string(),
            technologies: r#"["Rust","Actix"]"#.to_string(),
            status: "completed".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainProject = db_project.into();
        assert_eq!(domain.project_type, ProjectType::Web);
        assert_eq!(domain.images, vec!["/uploads/a.png"]);
        assert_eq!(domain.technologies, vec!["Rust", "Actix"]);
    }

    #[test]
    fn malformed_json_list_decodes_to_empty() {
        assert!(decode_string_list("not-json").is_empty());
    }

    #[test]
    fn new_project_encodes_lists() {
        let domain = DomainNewProject::new(
            "App".to_string(),
            Some("desc".to_string()),
            ProjectType::Mobile,
            vec!["/uploads/x.png".to_string()],
            vec!["Flutter".to_string()],
            "completed".to_string(),
        );
        let new: NewProject = (&domain).into();
        assert_eq!(new.project_type, "mobile");
        assert_eq!(new.images, r#"["/uploads/x.png"]"#);
    }
}
