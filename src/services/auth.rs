//! Local authentication: argon2 password hashing plus account bootstrap.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::domain::admin::{Admin, AdminRole, NewAdmin};
use crate::forms::auth::{AccountPayload, RegisterForm, SetupForm, SignInForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{AdminReader, AdminWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Hashes a password with argon2id and a fresh salt.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| ServiceError::Internal(format!("password hashing failed: {err}")))?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC hash string.
pub fn verify_password(hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Checks credentials; a wrong email and a wrong password are
/// indistinguishable to the caller.
pub fn sign_in<R>(repo: &R, form: SignInForm) -> ServiceResult<Admin>
where
    R: AdminReader + ?Sized,
{
    use validator::Validate;

    if form.validate().is_err() {
        return Err(ServiceError::Form("Invalid credentials.".to_string()));
    }

    let email = form.email.trim().to_lowercase();
    let admin = repo
        .get_admin_by_email(&email)?
        .filter(|admin| verify_password(&admin.password_hash, &form.password))
        .ok_or_else(|| ServiceError::Form("Invalid credentials.".to_string()))?;

    Ok(admin)
}

/// Whether the first-run setup page should be offered at all.
pub fn setup_available<R>(repo: &R) -> ServiceResult<bool>
where
    R: AdminReader + ?Sized,
{
    Ok(!repo.any_admin_exists()?)
}

/// Creates the very first admin account. Refused once any account exists.
pub fn setup_initial_admin<R>(repo: &R, form: SetupForm) -> ServiceResult<Admin>
where
    R: AdminReader + AdminWriter + ?Sized,
{
    if repo.any_admin_exists()? {
        return Err(ServiceError::Unauthorized);
    }

    let payload =
        AccountPayload::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    create_account(repo, payload)
}

/// Registers an additional account; only admins may do this.
pub fn register_admin<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: RegisterForm,
) -> ServiceResult<Admin>
where
    R: AdminReader + AdminWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;

    let payload =
        AccountPayload::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_admin_by_email(payload.email.as_str())?.is_some() {
        return Err(ServiceError::Form(
            "An account with this email already exists.".to_string(),
        ));
    }

    create_account(repo, payload)
}

fn create_account<R>(repo: &R, payload: AccountPayload) -> ServiceResult<Admin>
where
    R: AdminWriter + ?Sized,
{
    let password_hash = hash_password(&payload.password)?;
    let new_admin = NewAdmin::new(payload.name, payload.email, password_hash, payload.role);

    repo.create_admin(&new_admin).map_err(|err| {
        log::error!("Failed to create admin account: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod password_tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password(&hash, "correct horse battery staple"));
        assert!(!verify_password(&hash, "wrong"));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("not-a-phc-string", "anything"));
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn setup_is_refused_once_an_admin_exists() {
        let mut repo = MockRepository::new();
        repo.expect_any_admin_exists().returning(|| Ok(true));
        repo.expect_create_admin().times(0);

        let form = SetupForm {
            name: "Root".into(),
            email: "root@example.com".into(),
            password: "longenough".into(),
            password_confirm: "longenough".into(),
        };
        assert!(matches!(
            setup_initial_admin(&repo, form),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn sign_in_rejects_wrong_password() {
        let hash = hash_password("right-password").unwrap();
        let mut repo = MockRepository::new();
        repo.expect_get_admin_by_email().returning(move |_| {
            let now = chrono::Utc::now().naive_utc();
            Ok(Some(Admin {
                id: 1,
                name: "Root".into(),
                email: "root@example.com".into(),
                password_hash: hash.clone(),
                role: AdminRole::Admin,
                created_at: now,
                updated_at: now,
            }))
        });

        let form = SignInForm {
            email: "root@example.com".into(),
            password: "wrong-password".into(),
        };
        assert!(matches!(sign_in(&repo, form), Err(ServiceError::Form(_))));
    }
}
