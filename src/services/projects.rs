//! Admin workflows for portfolio projects.

use crate::domain::admin::AdminRole;
use crate::domain::project::{NewProject, Project, UpdateProject};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ProjectListQuery, ProjectReader, ProjectWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Loads the full project table for the admin screen.
pub fn list_projects<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Project>>
where
    R: ProjectReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;
    let (_, projects) = repo.list_projects(ProjectListQuery::new())?;
    Ok(projects)
}

pub fn get_project<R>(
    repo: &R,
    user: &AuthenticatedUser,
    project_id: i32,
) -> ServiceResult<Project>
where
    R: ProjectReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;
    repo.get_project_by_id(project_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn add_project<R>(
    repo: &R,
    user: &AuthenticatedUser,
    new_project: NewProject,
) -> ServiceResult<Project>
where
    R: ProjectWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    repo.create_project(&new_project).map_err(|err| {
        log::error!("Failed to add project: {err}");
        ServiceError::from(err)
    })
}

pub fn save_project<R>(
    repo: &R,
    user: &AuthenticatedUser,
    project_id: i32,
    updates: UpdateProject,
) -> ServiceResult<Project>
where
    R: ProjectReader + ProjectWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    if repo.get_project_by_id(project_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.update_project(project_id, &updates).map_err(|err| {
        log::error!("Failed to update project {project_id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_project<R>(
    repo: &R,
    user: &AuthenticatedUser,
    project_id: i32,
) -> ServiceResult<()>
where
    R: ProjectWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;
    repo.delete_project(project_id)?;
    Ok(())
}
