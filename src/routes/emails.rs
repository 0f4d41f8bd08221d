//! Admin screens for email templates, the delivery log, and quote sending.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::forms::emails::{SaveTemplateForm, SendQuoteForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, emails as emails_service, main as main_service};

#[get("/emails")]
pub async fn list_templates(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match emails_service::list_templates(repo.get_ref(), &user) {
        Ok(templates) => {
            let mut context = admin_context(&flash_messages, &chrome, "emails", &user);
            context.insert("templates", &templates);
            render_template(&tera, "admin/email_templates.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/emails/add")]
pub async fn add_template(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveTemplateForm>,
) -> impl Responder {
    match emails_service::create_template(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Template added.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add email template: {err}");
            FlashMessage::error("Failed to add the template.").send();
        }
    }
    redirect("/admin/emails")
}

#[post("/emails/{template_id}")]
pub async fn save_template(
    template_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveTemplateForm>,
) -> impl Responder {
    match emails_service::update_template(repo.get_ref(), &user, template_id.into_inner(), form)
    {
        Ok(_) => {
            FlashMessage::success("Template updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Template not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update email template: {err}");
            FlashMessage::error("Failed to update the template.").send();
        }
    }
    redirect("/admin/emails")
}

#[post("/emails/{template_id}/delete")]
pub async fn delete_template(
    template_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match emails_service::delete_template(repo.get_ref(), &user, template_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Template deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(err) => {
            log::error!("Failed to delete email template: {err}");
            FlashMessage::error("Failed to delete the template.").send();
        }
    }
    redirect("/admin/emails")
}

#[derive(Deserialize)]
struct EmailLogsQueryParams {
    consultation_id: Option<i32>,
}

#[get("/email-logs")]
pub async fn list_logs(
    params: web::Query<EmailLogsQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match emails_service::list_logs(repo.get_ref(), &user, params.consultation_id) {
        Ok(logs) => {
            let mut context = admin_context(&flash_messages, &chrome, "emails", &user);
            context.insert("logs", &logs);
            render_template(&tera, "admin/email_logs.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/consultations/{consultation_id}/quote")]
pub async fn send_quote(
    consultation_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SendQuoteForm>,
) -> impl Responder {
    let consultation_id = consultation_id.into_inner();

    match emails_service::send_quote(
        repo.get_ref(),
        &user,
        consultation_id,
        form,
        &server_config.base_url,
    ) {
        Ok(sent) => {
            FlashMessage::success(format!(
                "Quote sent to {}. Approval link: {}",
                sent.consultation.email, sent.approval_url
            ))
            .send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Consultation not found.").send();
            return redirect("/admin");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to send quote: {err}");
            FlashMessage::error("Failed to send the quote.").send();
        }
    }
    redirect(&format!("/admin/consultations/{consultation_id}"))
}
