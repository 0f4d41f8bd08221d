use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::team_member::{
    NewTeamMember as DomainNewTeamMember, TeamMember as DomainTeamMember,
    UpdateTeamMember as DomainUpdateTeamMember,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::team_members)]
/// Diesel model for [`crate::domain::team_member::TeamMember`].
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::team_members)]
pub struct NewTeamMember {
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::team_members)]
pub struct UpdateTeamMember {
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub updated_at: NaiveDateTime,
}

impl From<TeamMember> for DomainTeamMember {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id,
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
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

impl From<&DomainNewTeamMember> for NewTeamMember {
    fn from(member: &DomainNewTeamMember) -> Self {
        Self {
            name: member.name.clone(),
            role: member.role.clone(),
            bio: member.bio.clone(),
            image_url: member.image_url.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            linkedin_url: member.linkedin_url.clone(),
            github_url: member.github_url.clone(),
            is_active: member.is_active,
            display_order: member.display_order,
        }
    }
}

impl From<&DomainUpdateTeamMember> for UpdateTeamMember {
    fn from(member: &DomainUpdateTeamMember) -> Self {
        Self {
            name: member.name.clone(),
            role: member.role.clone(),
            bio: member.bio.clone(),
            image_url: member.image_url.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            linkedin_url: member.linkedin_url.clone(),
            github_url: member.github_url.clone(),
            is_active: member.is_active,
            display_order: member.display_order,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
