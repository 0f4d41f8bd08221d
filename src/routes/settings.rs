//! Admin editor for the singleton site settings.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::settings::SettingsForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, main as main_service, settings as settings_service};

#[get("/settings")]
pub async fn show_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match settings_service::load_settings(repo.get_ref(), &user) {
        Ok(site_settings) => {
            let mut context = admin_context(&flash_messages, &chrome, "settings", &user);
            // The chrome already carries the stored row; expose the editable
            // copy under its own key for the form.
            context.insert("site_settings", &site_settings);
            render_template(&tera, "admin/settings.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/settings")]
pub async fn save_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SettingsForm>,
) -> impl Responder {
    match settings_service::save_settings(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Settings saved.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save settings: {err}");
            FlashMessage::error("Failed to save settings.").send();
        }
    }
    redirect("/admin/settings")
}
