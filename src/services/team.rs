//! Admin workflows for team members.

use crate::domain::admin::AdminRole;
use crate::domain::team_member::{NewTeamMember, TeamMember, UpdateTeamMember};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{TeamMemberReader, TeamMemberWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

pub fn list_team<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<TeamMember>>
where
    R: TeamMemberReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;
    Ok(repo.list_team_members(false)?)
}

pub fn add_team_member<R>(
    repo: &R,
    user: &AuthenticatedUser,
    new_member: NewTeamMember,
) -> ServiceResult<TeamMember>
where
    R: TeamMemberWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    repo.create_team_member(&new_member).map_err(|err| {
        log::error!("Failed to add team member: {err}");
        ServiceError::from(err)
    })
}

pub fn save_team_member<R>(
    repo: &R,
    user: &AuthenticatedUser,
    member_id: i32,
    updates: UpdateTeamMember,
) -> ServiceResult<TeamMember>
where
    R: TeamMemberReader + TeamMemberWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    if repo.get_team_member_by_id(member_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.update_team_member(member_id, &updates).map_err(|err| {
        log::error!("Failed to update team member {member_id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_team_member<R>(
    repo: &R,
    user: &AuthenticatedUser,
    member_id: i32,
) -> ServiceResult<()>
where
    R: TeamMemberWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;
    repo.delete_team_member(member_id)?;
    Ok(())
}
