//! Public marketing pages.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::dto::main::ProjectsQuery;
use crate::forms::main::{AddReviewForm, ContactForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, main as main_service};

#[get("/")]
pub async fn index(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match main_service::load_home_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &chrome, "home");
            context.insert("projects", &data.projects);
            context.insert("reviews", &data.reviews);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => internal_error(err),
    }
}

#[get("/about")]
pub async fn about(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match main_service::load_about_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &chrome, "about");
            context.insert("team", &data.team);
            render_template(&tera, "main/about.html", &context)
        }
        Err(err) => internal_error(err),
    }
}

#[get("/services")]
pub async fn services(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match main_service::load_services_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &chrome, "services");
            context.insert("services", &data.services);
            render_template(&tera, "main/services.html", &context)
        }
        Err(err) => internal_error(err),
    }
}

#[derive(Deserialize)]
struct ProjectsQueryParams {
    #[serde(rename = "type")]
    project_type: Option<String>,
    q: Option<String>,
    page: Option<usize>,
}

#[get("/projects")]
pub async fn projects(
    params: web::Query<ProjectsQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    let params = params.into_inner();
    let query = ProjectsQuery {
        project_type: params.project_type,
        search: params.q,
        page: params.page,
    };

    match main_service::load_projects_page(repo.get_ref(), query) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &chrome, "projects");
            context.insert("projects", &data.projects);
            context.insert("type_filter", &data.type_filter);
            context.insert("search_query", &data.search_query);
            render_template(&tera, "main/projects.html", &context)
        }
        Err(err) => internal_error(err),
    }
}

#[derive(Deserialize)]
struct PageQueryParams {
    page: Option<usize>,
}

#[get("/reviews")]
pub async fn reviews(
    params: web::Query<PageQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match main_service::load_reviews_page(repo.get_ref(), params.page.unwrap_or(1)) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &chrome, "reviews");
            context.insert("reviews", &data.reviews);
            context.insert("projects", &data.projects);
            render_template(&tera, "main/reviews.html", &context)
        }
        Err(err) => internal_error(err),
    }
}

#[post("/reviews")]
pub async fn add_review(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddReviewForm>,
) -> impl Responder {
    match main_service::submit_review(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Thank you! Your review will appear after moderation.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to submit review: {err}");
            FlashMessage::error("Something went wrong, please try again.").send();
        }
    }
    redirect("/reviews")
}

#[get("/contact")]
pub async fn contact(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    let context = base_context(&flash_messages, &chrome, "contact");
    render_template(&tera, "main/contact.html", &context)
}

#[post("/contact")]
pub async fn send_contact(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ContactForm>,
) -> impl Responder {
    match main_service::submit_contact(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Message received. We will get back to you shortly.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to submit contact message: {err}");
            FlashMessage::error("Something went wrong, please try again.").send();
        }
    }
    redirect("/contact")
}
