//! Sign-in, first-run setup and account registration forms.

use serde::Deserialize;
use validator::Validate;

use crate::domain::admin::AdminRole;
use crate::domain::types::EmailAddress;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
/// First-run form creating the initial admin account.
pub struct SetupForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub password_confirm: String,
}

#[derive(Deserialize, Validate)]
/// Registration of an additional back-office account by an admin.
pub struct RegisterForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub password_confirm: String,
    pub role: String,
}

/// Validated account payload shared by setup and registration.
pub struct AccountPayload {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
    pub role: AdminRole,
}

impl TryFrom<SetupForm> for AccountPayload {
    type Error = FormError;

    fn try_from(form: SetupForm) -> Result<Self, Self::Error> {
        form.validate()?;
        if form.password != form.password_confirm {
            return Err(FormError::PasswordMismatch);
        }
        Ok(Self {
            name: form.name.trim().to_string(),
            email: EmailAddress::new(form.email)?,
            password: form.password,
            // The first account always gets full access.
            role: AdminRole::Admin,
        })
    }
}

impl TryFrom<RegisterForm> for AccountPayload {
    type Error = FormError;

    fn try_from(form: RegisterForm) -> Result<Self, Self::Error> {
        form.validate()?;
        if form.password != form.password_confirm {
            return Err(FormError::PasswordMismatch);
        }
        Ok(Self {
            name: form.name.trim().to_string(),
            email: EmailAddress::new(form.email)?,
            password: form.password,
            role: form.role.as_str().into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_rejects_mismatched_passwords() {
        let form = SetupForm {
            name: "Root".into(),
            email: "root@example.com".into(),
            password: "longenough".into(),
            password_confirm: "different".into(),
        };
        assert!(matches!(
            AccountPayload::try_from(form),
            Err(FormError::PasswordMismatch)
        ));
    }

    #[test]
    fn setup_account_is_always_admin() {
        let form = SetupForm {
            name: "Root".into(),
            email: "Root@Example.com".into(),
            password: "longenough".into(),
            password_confirm: "longenough".into(),
        };
        let payload = AccountPayload::try_from(form).unwrap();
        assert_eq!(payload.role, AdminRole::Admin);
        assert_eq!(payload.email.as_str(), "root@example.com");
    }

    #[test]
    fn register_maps_role() {
        let form = RegisterForm {
            name: "Ed".into(),
            email: "ed@example.com".into(),
            password: "longenough".into(),
            password_confirm: "longenough".into(),
            role: "editor".into(),
        };
        let payload = AccountPayload::try_from(form).unwrap();
        assert_eq!(payload.role, AdminRole::Editor);
    }
}
