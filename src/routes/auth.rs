//! Back-office authentication: sign-in, first-run setup, registration.

use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::auth::{RegisterForm, SetupForm, SignInForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{admin_context, base_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, auth as auth_service, main as main_service};

#[get("/signin")]
pub async fn show_signin(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    // A fresh install goes straight to first-run setup.
    match auth_service::setup_available(repo.get_ref()) {
        Ok(true) => return redirect("/admin/setup"),
        Ok(false) => {}
        Err(err) => return internal_error(err),
    }

    let context = base_context(&flash_messages, &chrome, "signin");
    render_template(&tera, "admin/signin.html", &context)
}

#[post("/signin")]
pub async fn signin(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SignInForm>,
) -> impl Responder {
    match auth_service::sign_in(repo.get_ref(), form) {
        Ok(admin) => {
            let claims = AuthenticatedUser::from_admin(&admin);
            let token = match claims.to_jwt(&server_config.secret) {
                Ok(token) => token,
                Err(err) => return internal_error(err),
            };
            if let Err(err) = Identity::login(&request.extensions(), token) {
                return internal_error(err);
            }
            redirect("/admin")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/admin/signin")
        }
        Err(err) => internal_error(err),
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}

#[get("/setup")]
pub async fn show_setup(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    match auth_service::setup_available(repo.get_ref()) {
        Ok(true) => {
            let context = base_context(&flash_messages, &chrome, "setup");
            render_template(&tera, "admin/setup.html", &context)
        }
        Ok(false) => redirect("/admin/signin"),
        Err(err) => internal_error(err),
    }
}

#[post("/setup")]
pub async fn setup(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SetupForm>,
) -> impl Responder {
    match auth_service::setup_initial_admin(repo.get_ref(), form) {
        Ok(admin) => {
            let claims = AuthenticatedUser::from_admin(&admin);
            let token = match claims.to_jwt(&server_config.secret) {
                Ok(token) => token,
                Err(err) => return internal_error(err),
            };
            if let Err(err) = Identity::login(&request.extensions(), token) {
                return internal_error(err);
            }
            FlashMessage::success("Welcome! Your workspace is ready.").send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => redirect("/admin/signin"),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/admin/setup")
        }
        Err(err) => internal_error(err),
    }
}

#[get("/register")]
pub async fn show_register(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let chrome = match main_service::load_site_chrome(repo.get_ref()) {
        Ok(chrome) => chrome,
        Err(err) => return internal_error(err),
    };

    let context = admin_context(&flash_messages, &chrome, "accounts", &user);
    render_template(&tera, "admin/register.html", &context)
}

#[post("/register")]
pub async fn register(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<RegisterForm>,
) -> impl Responder {
    match auth_service::register_admin(repo.get_ref(), &user, form) {
        Ok(admin) => {
            FlashMessage::success(format!("Account for {} created.", admin.email)).send();
            redirect("/admin/accounts")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/admin")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/admin/register")
        }
        Err(err) => internal_error(err),
    }
}
