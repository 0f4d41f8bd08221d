//! Admin form for the singleton site settings.

use std::collections::BTreeMap;

use serde::Deserialize;
use validator::Validate;

use crate::domain::settings::UpdateSettings;
use crate::domain::types::EmailAddress;
use crate::forms::{FormError, textarea_lines};

#[derive(Deserialize, Validate)]
pub struct SettingsForm {
    #[validate(length(min = 1))]
    pub company_name: String,
    /// One contact address per line.
    pub emails: Option<String>,
    /// One `platform=url` pair per line.
    pub socials: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
}

impl TryFrom<SettingsForm> for UpdateSettings {
    type Error = FormError;

    fn try_from(form: SettingsForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let mut emails = Vec::new();
        for line in form.emails.as_deref().map(textarea_lines).unwrap_or_default() {
            emails.push(EmailAddress::new(line)?.into_inner());
        }

        let socials: BTreeMap<String, String> = form
            .socials
            .as_deref()
            .map(textarea_lines)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|line| {
                line.split_once('=')
                    .map(|(platform, url)| (platform.trim().to_string(), url.trim().to_string()))
            })
            .filter(|(platform, url)| !platform.is_empty() && !url.is_empty())
            .collect();

        Ok(UpdateSettings::new(
            form.company_name,
            emails,
            socials,
            form.address,
            form.about,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socials_parse_platform_url_pairs() {
        let form = SettingsForm {
            company_name: "Havoc Solutions".into(),
            emails: Some("hello@havoc.dev\nSales@Havoc.dev".into()),
            socials: Some("github=https://github.com/havoc\n\nbroken-line".into()),
            address: None,
            about: None,
        };
        let update = UpdateSettings::try_from(form).unwrap();
        assert_eq!(update.emails, vec!["hello@havoc.dev", "sales@havoc.dev"]);
        assert_eq!(
            update.socials.get("github").map(String::as_str),
            Some("https://github.com/havoc")
        );
        assert!(!update.socials.contains_key("broken-line"));
    }

    #[test]
    fn invalid_email_line_fails() {
        let form = SettingsForm {
            company_name: "Havoc Solutions".into(),
            emails: Some("not-an-email".into()),
            socials: None,
            address: None,
            about: None,
        };
        assert!(UpdateSettings::try_from(form).is_err());
    }
}
