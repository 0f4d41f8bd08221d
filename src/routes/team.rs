//! Admin CRUD for team members.

use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::team::SaveTeamMemberForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, main as main_service, team as team_service};

#[get("/team")]
pub async fn list_team(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match team_service::list_team(repo.get_ref(), &user) {
        Ok(team) => {
            let mut context = admin_context(&flash_messages, &chrome, "team", &user);
            context.insert("team", &team);
            render_template(&tera, "admin/team.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/team/add")]
pub async fn add_team_member(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<SaveTeamMemberForm>,
) -> impl Responder {
    let new_member = match form.into_new_team_member(&server_config.uploads_dir) {
        Ok(new_member) => new_member,
        Err(err) => {
            FlashMessage::error(format!("Invalid team member data: {err}")).send();
            return redirect("/admin/team");
        }
    };

    match team_service::add_team_member(repo.get_ref(), &user, new_member) {
        Ok(_) => {
            FlashMessage::success("Team member added.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(err) => {
            log::error!("Failed to add team member: {err}");
            FlashMessage::error("Failed to add the team member.").send();
        }
    }
    redirect("/admin/team")
}

#[post("/team/{member_id}")]
pub async fn save_team_member(
    member_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<SaveTeamMemberForm>,
) -> impl Responder {
    let updates = match form.into_update_team_member(&server_config.uploads_dir) {
        Ok(updates) => updates,
        Err(err) => {
            FlashMessage::error(format!("Invalid team member data: {err}")).send();
            return redirect("/admin/team");
        }
    };

    match team_service::save_team_member(repo.get_ref(), &user, member_id.into_inner(), updates) {
        Ok(_) => {
            FlashMessage::success("Team member updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Team member not found.").send();
        }
        Err(err) => {
            log::error!("Failed to update team member: {err}");
            FlashMessage::error("Failed to update the team member.").send();
        }
    }
    redirect("/admin/team")
}

#[post("/team/{member_id}/delete")]
pub async fn delete_team_member(
    member_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match team_service::delete_team_member(repo.get_ref(), &user, member_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Team member deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(err) => {
            log::error!("Failed to delete team member: {err}");
            FlashMessage::error("Failed to delete the team member.").send();
        }
    }
    redirect("/admin/team")
}
