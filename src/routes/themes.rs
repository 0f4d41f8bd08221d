//! Admin management of color themes.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::themes::AddThemeForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, main as main_service, themes as themes_service};

#[get("/themes")]
pub async fn list_themes(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match themes_service::list_themes(repo.get_ref(), &user) {
        Ok(themes) => {
            let mut context = admin_context(&flash_messages, &chrome, "themes", &user);
            context.insert("themes", &themes);
            render_template(&tera, "admin/themes.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/themes/add")]
pub async fn add_theme(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddThemeForm>,
) -> impl Responder {
    match themes_service::add_theme(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Theme added.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add theme: {err}");
            FlashMessage::error("Failed to add the theme.").send();
        }
    }
    redirect("/admin/themes")
}

#[post("/themes/{theme_id}/activate")]
pub async fn activate_theme(
    theme_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match themes_service::activate_theme(repo.get_ref(), &user, theme_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Theme activated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Theme not found.").send();
        }
        Err(err) => {
            log::error!("Failed to activate theme: {err}");
            FlashMessage::error("Failed to activate the theme.").send();
        }
    }
    redirect("/admin/themes")
}

#[post("/themes/{theme_id}/delete")]
pub async fn delete_theme(
    theme_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match themes_service::delete_theme(repo.get_ref(), &user, theme_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Theme deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to delete theme: {err}");
            FlashMessage::error("Failed to delete the theme.").send();
        }
    }
    redirect("/admin/themes")
}
