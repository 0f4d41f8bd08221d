//! Admin CRUD for portfolio projects.

use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::projects::SaveProjectForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, main as main_service, projects as projects_service};

#[get("/projects")]
pub async fn list_projects(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match projects_service::list_projects(repo.get_ref(), &user) {
        Ok(projects) => {
            let mut context = admin_context(&flash_messages, &chrome, "projects", &user);
            context.insert("projects", &projects);
            render_template(&tera, "admin/projects.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/projects/add")]
pub async fn add_project(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<SaveProjectForm>,
) -> impl Responder {
    let new_project = match form.into_new_project(&server_config.uploads_dir) {
        Ok(new_project) => new_project,
        Err(err) => {
            FlashMessage::error(format!("Invalid project data: {err}")).send();
            return redirect("/admin/projects");
        }
    };

    match projects_service::add_project(repo.get_ref(), &user, new_project) {
        Ok(_) => {
            FlashMessage::success("Project added.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(err) => {
            log::error!("Failed to add project: {err}");
            FlashMessage::error("Failed to add the project.").send();
        }
    }
    redirect("/admin/projects")
}

#[post("/projects/{project_id}")]
pub async fn save_project(
    project_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<SaveProjectForm>,
) -> impl Responder {
    let updates = match form.into_update_project(&server_config.uploads_dir) {
        Ok(updates) => updates,
        Err(err) => {
            FlashMessage::error(format!("Invalid project data: {err}")).send();
            return redirect("/admin/projects");
        }
    };

    match projects_service::save_project(repo.get_ref(), &user, project_id.into_inner(), updates)
    {
        Ok(_) => {
            FlashMessage::success("Project updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Project not found.").send();
        }
        Err(err) => {
            log::error!("Failed to update project: {err}");
            FlashMessage::error("Failed to update the project.").send();
        }
    }
    redirect("/admin/projects")
}

#[post("/projects/{project_id}/delete")]
pub async fn delete_project(
    project_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match projects_service::delete_project(repo.get_ref(), &user, project_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Project deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(err) => {
            log::error!("Failed to delete project: {err}");
            FlashMessage::error("Failed to delete the project.").send();
        }
    }
    redirect("/admin/projects")
}
