//! Admin forms for team members.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::team_member::{NewTeamMember, UpdateTeamMember};
use crate::domain::types::EmailAddress;
use crate::forms::FormError;
use crate::forms::upload::persist_upload;

#[derive(MultipartForm)]
pub struct SaveTeamMemberForm {
    pub name: Text<String>,
    pub role: Option<Text<String>>,
    pub bio: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub phone: Option<Text<String>>,
    pub linkedin_url: Option<Text<String>>,
    pub github_url: Option<Text<String>>,
    pub image_url: Option<Text<String>>,
    pub is_active: Option<Text<String>>,
    pub display_order: Option<Text<i32>>,
    #[multipart(limit = "5MB")]
    pub photo: Option<TempFile>,
}

impl SaveTeamMemberForm {
    fn collect(&self, uploads_dir: &str) -> Result<NewTeamMember, FormError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(FormError::InvalidName);
        }

        let email = match self.email.as_deref().map(|s| s.trim()) {
            Some(raw) if !raw.is_empty() => Some(EmailAddress::new(raw)?.into_inner()),
            _ => None,
        };

        // An uploaded photo wins over a hand-typed URL.
        let image_url = match &self.photo {
            Some(file) if file.size > 0 => Some(persist_upload(file, uploads_dir)?),
            _ => self.image_url.as_deref().map(|s| s.to_string()),
        };

        Ok(NewTeamMember::new(
            name,
            self.role.as_deref().map(|s| s.to_string()),
            self.bio.as_deref().map(|s| s.to_string()),
            image_url,
            email,
            self.phone.as_deref().map(|s| s.to_string()),
            self.linkedin_url.as_deref().map(|s| s.to_string()),
            self.github_url.as_deref().map(|s| s.to_string()),
            self.is_active.is_some(),
            self.display_order.as_ref().map(|t| t.0).unwrap_or(0),
        ))
    }

    pub fn into_new_team_member(self, uploads_dir: &str) -> Result<NewTeamMember, FormError> {
        self.collect(uploads_dir)
    }

    pub fn into_update_team_member(
        self,
        uploads_dir: &str,
    ) -> Result<UpdateTeamMember, FormError> {
        let member = self.collect(uploads_dir)?;
        Ok(UpdateTeamMember {
            name: member.name,
            role: member.role,
            bio: member.bio,
            image_url: member.image_url,
            email: member.email,
            phone: member.phone,
            linkedin_url: member.linkedin_url,
            github_url: member.github_url,
            is_active: member.is_active,
            display_order: member.display_order,
        })
    }
}
