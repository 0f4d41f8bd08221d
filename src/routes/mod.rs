//! HTTP handlers and the small helpers they share.

use actix_web::http::header;
use actix_web::{HttpResponse, Responder};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::dto::main::SiteChrome;
use crate::models::auth::AuthenticatedUser;

pub mod admins;
pub mod auth;
pub mod catalog;
pub mod consultation;
pub mod dashboard;
pub mod emails;
pub mod main;
pub mod projects;
pub mod reviews;
pub mod settings;
pub mod team;
pub mod themes;

/// Maps flash levels onto the stylesheet's alert classes.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders a template or logs and returns a 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context shared by every public page: alerts, company details and the
/// active palette.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    chrome: &SiteChrome,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("settings", &chrome.settings);
    context.insert("theme_css", &chrome.theme_css);
    context.insert("current_page", current_page);
    context
}

/// Context for back-office pages; adds the signed-in user.
pub fn admin_context(
    flash_messages: &IncomingFlashMessages,
    chrome: &SiteChrome,
    current_page: &str,
    user: &AuthenticatedUser,
) -> Context {
    let mut context = base_context(flash_messages, chrome, current_page);
    context.insert("current_user", user);
    context
}

/// Shared fallback for unexpected service failures.
pub fn internal_error(err: impl std::fmt::Display) -> HttpResponse {
    log::error!("{err}");
    HttpResponse::InternalServerError().finish()
}

/// 404 page used by the default service.
pub async fn not_found(tera: actix_web::web::Data<Tera>) -> impl Responder {
    let context = Context::new();
    match tera.render("404.html", &context) {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(_) => HttpResponse::NotFound().finish(),
    }
}
