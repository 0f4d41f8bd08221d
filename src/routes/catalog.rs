//! Admin CRUD for the services catalog.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::catalog::SaveServiceForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, catalog as catalog_service, main as main_service};

#[get("/services")]
pub async fn list_services(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match catalog_service::list_catalog(repo.get_ref(), &user) {
        Ok(services) => {
            let mut context = admin_context(&flash_messages, &chrome, "services", &user);
            context.insert("services", &services);
            render_template(&tera, "admin/services.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/services/add")]
pub async fn add_service(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveServiceForm>,
) -> impl Responder {
    match catalog_service::add_service(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Service added.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add service: {err}");
            FlashMessage::error("Failed to add the service.").send();
        }
    }
    redirect("/admin/services")
}

#[post("/services/{service_id}")]
pub async fn save_service(
    service_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveServiceForm>,
) -> impl Responder {
    match catalog_service::save_service(repo.get_ref(), &user, service_id.into_inner(), form) {
        Ok(_) => {
            FlashMessage::success("Service updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Service not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update service: {err}");
            FlashMessage::error("Failed to update the service.").send();
        }
    }
    redirect("/admin/services")
}

#[post("/services/{service_id}/delete")]
pub async fn delete_service(
    service_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog_service::delete_service(repo.get_ref(), &user, service_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Service deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(err) => {
            log::error!("Failed to delete service: {err}");
            FlashMessage::error("Failed to delete the service.").send();
        }
    }
    redirect("/admin/services")
}
