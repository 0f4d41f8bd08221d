//! Consultation intake and the client-facing approval flow.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::forms::consultation::{ApprovalDecisionForm, ClientChatForm, ConsultationForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, consultation as consultation_service, main as main_service};

#[get("/consultation")]
pub async fn show_consultation(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    let context = base_context(&flash_messages, &chrome, "consultation");
    render_template(&tera, "consultation/form.html", &context)
}

#[post("/consultation")]
pub async fn submit_consultation(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    // Checkbox groups post repeated keys, which plain urlencoded forms drop.
    let form = match ConsultationForm::from_urlencoded(&body) {
        Ok(form) => form,
        Err(_) => {
            FlashMessage::error("Please check the form and try again.").send();
            return redirect("/consultation");
        }
    };

    match consultation_service::submit_consultation(repo.get_ref(), form) {
        Ok(_) => {
            FlashMessage::success(
                "Request received! We will review it and send you a quote soon.",
            )
            .send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to submit consultation: {err}");
            FlashMessage::error("Something went wrong, please try again.").send();
        }
    }
    redirect("/consultation")
}

#[derive(Deserialize)]
struct ApprovalQueryParams {
    token: Option<String>,
    action: Option<String>,
}

#[get("/consultation/approval")]
pub async fn show_approval(
    params: web::Query<ApprovalQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    let mut context = base_context(&flash_messages, &chrome, "consultation");

    let Some(token) = params.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    else {
        return render_template(&tera, "consultation/approval_invalid.html", &context);
    };

    match consultation_service::load_approval_page(repo.get_ref(), token) {
        Ok(data) => {
            context.insert("consultation", &data.consultation);
            context.insert("chat", &data.chat);
            context.insert("token", token);
            // Preselects the decision when the emailed link carries one.
            if let Some(action) = params
                .action
                .as_deref()
                .filter(|a| matches!(*a, "approve" | "reject"))
            {
                context.insert("preselected_action", action);
            }
            render_template(&tera, "consultation/approval.html", &context)
        }
        Err(ServiceError::NotFound) => {
            render_template(&tera, "consultation/approval_invalid.html", &context)
        }
        Err(err) => internal_error(err),
    }
}

#[post("/consultation/approval")]
pub async fn decide_approval(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ApprovalDecisionForm>,
) -> impl Responder {
    let token = form.token.clone();

    match consultation_service::decide_approval(repo.get_ref(), form) {
        Ok(consultation)
            if consultation.approval_status
                == crate::domain::consultation::ApprovalStatus::Approved =>
        {
            FlashMessage::success(
                "Project approved! Havoc Solutions will contact you soon to begin development.",
            )
            .send();
        }
        Ok(_) => {
            FlashMessage::success("Project rejected. Thank you for your time.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("This approval link is invalid or has expired.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to apply approval decision: {err}");
            FlashMessage::error("Something went wrong, please try again.").send();
        }
    }

    redirect(&format!("/consultation/approval?token={token}"))
}

#[post("/consultation/approval/chat")]
pub async fn post_client_chat(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ClientChatForm>,
) -> impl Responder {
    let token = form.token.clone();

    match consultation_service::post_client_message(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Message sent.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("This approval link is invalid or has expired.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to post client chat message: {err}");
            FlashMessage::error("Something went wrong, please try again.").send();
        }
    }

    redirect(&format!("/consultation/approval?token={token}"))
}
