//! Session claims for back-office users.
//!
//! On sign-in the server issues a JWT which is stored in the identity
//! cookie; extracting [`AuthenticatedUser`] from a request decodes and
//! validates it again.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::admin::{Admin, AdminRole};
use crate::models::config::ServerConfig;

/// Sessions are valid for one week.
const SESSION_TTL_SECONDS: i64 = 7 * 24 * 3600;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Admin id as a string, per JWT convention.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Builds claims for a freshly authenticated admin.
    pub fn from_admin(admin: &Admin) -> Self {
        let exp = (chrono::Utc::now().timestamp() + SESSION_TTL_SECONDS) as usize;
        Self {
            sub: admin.id.to_string(),
            email: admin.email.clone(),
            name: admin.name.clone(),
            role: admin.role,
            exp,
        }
    }

    /// The admin id encoded in the claims, if still parseable.
    pub fn admin_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    /// Signs the claims into a compact JWT.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Decodes and validates a JWT produced by [`Self::to_jwt`].
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => identity,
            Err(err) => return ready(Err(err)),
        };

        let token = match identity.id() {
            Ok(token) => token,
            Err(_) => return ready(Err(actix_web::error::ErrorUnauthorized("no session"))),
        };

        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            return ready(Err(actix_web::error::ErrorInternalServerError(
                "server config missing",
            )));
        };

        match Self::from_jwt(&token, &config.secret) {
            Ok(user) => ready(Ok(user)),
            Err(_) => ready(Err(actix_web::error::ErrorUnauthorized("invalid session"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_admin() -> Admin {
        Admin {
            id: 3,
            name: "Root".to_string(),
            email: "root@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: AdminRole::Admin,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn jwt_round_trips() {
        let claims = AuthenticatedUser::from_admin(&sample_admin());
        let token = claims.to_jwt("secret").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&token, "secret").unwrap();
        assert_eq!(decoded.sub, "3");
        assert_eq!(decoded.email, "root@example.com");
        assert_eq!(decoded.role, AdminRole::Admin);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = AuthenticatedUser::from_admin(&sample_admin());
        let token = claims.to_jwt("secret").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "other").is_err());
    }
}
