//! Admin dashboard and the consultation workspace.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::forms::dashboard::{TeamChatForm, UpdateConsultationForm};
use crate::dto::dashboard::DashboardQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, dashboard as dashboard_service, main as main_service};

#[derive(Deserialize)]
struct DashboardQueryParams {
    status: Option<String>,
    q: Option<String>,
    page: Option<usize>,
}

#[get("")]
pub async fn dashboard(
    params: web::Query<DashboardQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    let params = params.into_inner();
    let query = DashboardQuery {
        status: params.status,
        search: params.q,
        page: params.page,
    };

    match dashboard_service::load_dashboard(repo.get_ref(), &user, query) {
        Ok(data) => {
            let mut context = admin_context(&flash_messages, &chrome, "dashboard", &user);
            context.insert("counts", &data.counts);
            context.insert("consultations", &data.consultations);
            context.insert("admins", &data.admins);
            context.insert("status_filter", &data.status_filter);
            context.insert("search_query", &data.search_query);
            render_template(&tera, "admin/dashboard.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/")
        }
        Err(err) => internal_error(err),
    }
}

#[get("/consultations/{consultation_id}")]
pub async fn show_consultation(
    consultation_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match dashboard_service::load_consultation_detail(
        repo.get_ref(),
        &user,
        consultation_id.into_inner(),
    ) {
        Ok(data) => {
            let mut context = admin_context(&flash_messages, &chrome, "dashboard", &user);
            context.insert("consultation", &data.consultation);
            context.insert("chat", &data.chat);
            context.insert("email_logs", &data.email_logs);
            context.insert("admins", &data.admins);
            context.insert("templates", &data.templates);
            render_template(&tera, "admin/consultation.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Consultation not found.").send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/consultations/{consultation_id}")]
pub async fn save_consultation(
    consultation_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateConsultationForm>,
) -> impl Responder {
    let consultation_id = consultation_id.into_inner();

    match dashboard_service::update_consultation(repo.get_ref(), &user, consultation_id, form) {
        Ok(()) => {
            FlashMessage::success("Consultation updated.").send();
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
            log::error!("Failed to update consultation: {err}");
            FlashMessage::error("Failed to update the consultation.").send();
        }
    }
    redirect(&format!("/admin/consultations/{consultation_id}"))
}

#[post("/consultations/{consultation_id}/delete")]
pub async fn delete_consultation(
    consultation_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match dashboard_service::delete_consultation(
        repo.get_ref(),
        &user,
        consultation_id.into_inner(),
    ) {
        Ok(()) => {
            FlashMessage::success("Consultation deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Consultation not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete consultation: {err}");
            FlashMessage::error("Failed to delete the consultation.").send();
        }
    }
    redirect("/admin")
}

#[post("/consultations/{consultation_id}/chat")]
pub async fn post_team_chat(
    consultation_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<TeamChatForm>,
) -> impl Responder {
    let consultation_id = consultation_id.into_inner();

    match dashboard_service::post_team_message(repo.get_ref(), &user, consultation_id, form) {
        Ok(()) => {
            FlashMessage::success("Reply sent.").send();
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
            log::error!("Failed to post team chat message: {err}");
            FlashMessage::error("Failed to send the reply.").send();
        }
    }
    redirect(&format!("/admin/consultations/{consultation_id}"))
}
