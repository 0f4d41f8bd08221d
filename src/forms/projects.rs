//! Admin forms for portfolio projects.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::project::{NewProject, ProjectType, UpdateProject};
use crate::forms::upload::persist_upload;
use crate::forms::{FormError, textarea_lines};

#[derive(MultipartForm)]
/// Create/edit form; showcase images are collected from uploaded files plus
/// a textarea of external URLs.
pub struct SaveProjectForm {
    pub title: Text<String>,
    pub description: Option<Text<String>>,
    pub project_type: Text<String>,
    pub status: Text<String>,
    /// One technology per line.
    pub technologies: Option<Text<String>>,
    /// One existing image URL per line.
    pub images: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub upload: Vec<TempFile>,
}

impl SaveProjectForm {
    fn collect(&self, uploads_dir: &str) -> Result<ProjectPayload, FormError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(FormError::InvalidName);
        }

        let mut images = self
            .images
            .as_deref()
            .map(|raw| textarea_lines(raw))
            .unwrap_or_default();
        for file in &self.upload {
            // Empty file inputs come through as zero-length parts.
            if file.size > 0 {
                images.push(persist_upload(file, uploads_dir)?);
            }
        }

        Ok(ProjectPayload {
            title,
            description: self.description.as_deref().map(|s| s.to_string()),
            project_type: ProjectType::from(self.project_type.as_str()),
            status: self.status.trim().to_string(),
            technologies: self
                .technologies
                .as_deref()
                .map(|raw| textarea_lines(raw))
                .unwrap_or_default(),
            images,
        })
    }

    /// Persists uploads and produces the insert payload.
    pub fn into_new_project(self, uploads_dir: &str) -> Result<NewProject, FormError> {
        let payload = self.collect(uploads_dir)?;
        Ok(NewProject::new(
            payload.title,
            payload.description,
            payload.project_type,
            payload.images,
            payload.technologies,
            payload.status,
        ))
    }

    /// Persists uploads and produces the update payload.
    pub fn into_update_project(self, uploads_dir: &str) -> Result<UpdateProject, FormError> {
        let payload = self.collect(uploads_dir)?;
        let normalized = NewProject::new(
            payload.title,
            payload.description,
            payload.project_type,
            payload.images,
            payload.technologies,
            payload.status,
        );
        Ok(UpdateProject {
            title: normalized.title,
            description: normalized.description,
            project_type: normalized.project_type,
            images: normalized.images,
            technologies: normalized.technologies,
            status: normalized.status,
        })
    }
}

struct ProjectPayload {
    title: String,
    description: Option<String>,
    project_type: ProjectType,
    status: String,
    technologies: Vec<String>,
    images: Vec<String>,
}
