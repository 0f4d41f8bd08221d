//! Admin moderation for reviews.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::forms::reviews::ModerateReviewForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, main as main_service, reviews as reviews_service};

#[derive(Deserialize)]
struct ReviewsQueryParams {
    status: Option<String>,
    page: Option<usize>,
}

#[get("/reviews")]
pub async fn list_reviews(
    params: web::Query<ReviewsQueryParams>,
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

    match reviews_service::list_reviews(
        repo.get_ref(),
        &user,
        params.status,
        params.page.unwrap_or(1),
    ) {
        Ok((reviews, status_filter)) => {
            let mut context = admin_context(&flash_messages, &chrome, "reviews", &user);
            context.insert("reviews", &reviews);
            context.insert("status_filter", &status_filter);
            render_template(&tera, "admin/reviews.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/reviews/{review_id}/moderate")]
pub async fn moderate_review(
    review_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ModerateReviewForm>,
) -> impl Responder {
    match reviews_service::moderate_review(repo.get_ref(), &user, review_id.into_inner(), form) {
        Ok(review) => {
            FlashMessage::success(format!("Review marked {}.", review.status)).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Review not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to moderate review: {err}");
            FlashMessage::error("Failed to moderate the review.").send();
        }
    }
    redirect("/admin/reviews")
}

#[post("/reviews/{review_id}/delete")]
pub async fn delete_review(
    review_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match reviews_service::delete_review(repo.get_ref(), &user, review_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Review deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
        }
        Err(err) => {
            log::error!("Failed to delete review: {err}");
            FlashMessage::error("Failed to delete the review.").send();
        }
    }
    redirect("/admin/reviews")
}
