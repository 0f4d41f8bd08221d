#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::middleware::RedirectUnauthorized;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let uploads_dir = server_config.uploads_dir.clone();
    std::fs::create_dir_all(&uploads_dir)?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(Files::new("/uploads", uploads_dir.clone()))
            .service(routes::main::index)
            .service(routes::main::about)
            .service(routes::main::services)
            .service(routes::main::projects)
            .service(routes::main::reviews)
            .service(routes::main::add_review)
            .service(routes::main::contact)
            .service(routes::main::send_contact)
            .service(routes::consultation::show_consultation)
            .service(routes::consultation::submit_consultation)
            .service(routes::consultation::show_approval)
            .service(routes::consultation::decide_approval)
            .service(routes::consultation::post_client_chat)
            .service(
                web::scope("/admin")
                    .wrap(RedirectUnauthorized)
                    .service(routes::auth::show_signin)
                    .service(routes::auth::signin)
                    .service(routes::auth::logout)
                    .service(routes::auth::show_setup)
                    .service(routes::auth::setup)
                    .service(routes::auth::show_register)
                    .service(routes::auth::register)
                    .service(routes::dashboard::dashboard)
                    .service(routes::dashboard::show_consultation)
                    .service(routes::dashboard::save_consultation)
                    .service(routes::dashboard::delete_consultation)
                    .service(routes::dashboard::post_team_chat)
                    .service(routes::emails::send_quote)
                    .service(routes::projects::list_projects)
                    .service(routes::projects::add_project)
                    .service(routes::projects::save_project)
                    .service(routes::projects::delete_project)
                    .service(routes::catalog::list_services)
                    .service(routes::catalog::add_service)
                    .service(routes::catalog::save_service)
                    .service(routes::catalog::delete_service)
                    .service(routes::team::list_team)
                    .service(routes::team::add_team_member)
                    .service(routes::team::save_team_member)
                    .service(routes::team::delete_team_member)
                    .service(routes::reviews::list_reviews)
                    .service(routes::reviews::moderate_review)
                    .service(routes::reviews::delete_review)
                    .service(routes::themes::list_themes)
                    .service(routes::themes::add_theme)
                    .service(routes::themes::activate_theme)
                    .service(routes::themes::delete_theme)
                    .service(routes::settings::show_settings)
                    .service(routes::settings::save_settings)
                    .service(routes::emails::list_templates)
                    .service(routes::emails::add_template)
                    .service(routes::emails::save_template)
                    .service(routes::emails::delete_template)
                    .service(routes::emails::list_logs)
                    .service(routes::admins::list_accounts)
                    .service(routes::admins::change_role)
                    .service(routes::admins::delete_account),
            )
            .default_service(web::to(routes::not_found))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
