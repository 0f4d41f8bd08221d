//! Admin account management screens.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::admins::ChangeRoleForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, admins as admins_service, main as main_service};

#[get("/accounts")]
pub async fn list_accounts(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match admins_service::list_admins(repo.get_ref(), &user) {
        Ok(admins) => {
            let mut context = admin_context(&flash_messages, &chrome, "accounts", &user);
            context.insert("admins", &admins);
            render_template(&tera, "admin/accounts.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/accounts/{admin_id}/role")]
pub async fn change_role(
    admin_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ChangeRoleForm>,
) -> impl Responder {
    match admins_service::change_role(repo.get_ref(), &user, admin_id.into_inner(), form) {
        Ok(admin) => {
            FlashMessage::success(format!("{} is now {}.", admin.email, admin.role)).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Account not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to change account role: {err}");
            FlashMessage::error("Failed to change the role.").send();
        }
    }
    redirect("/admin/accounts")
}

#[post("/accounts/{admin_id}/delete")]
pub async fn delete_account(
    admin_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match admins_service::delete_admin(repo.get_ref(), &user, admin_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Account deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Account not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to delete account: {err}");
            FlashMessage::error("Failed to delete the account.").send();
        }
    }
    redirect("/admin/accounts")
}
