//! Request handlers behind the route definitions. Each controller maps a
//! decoded request onto repository calls and wraps the result in the
//! `ApiResponse` envelope.

pub mod breed;
pub mod listing;
pub mod organization;
pub mod pet;
pub mod user;

use std::collections::HashSet;

use crate::{
    models::{ApiError, AppState},
    repositories::{OrganizationRepository, UserRepository},
};

/// Flattens owner- and organization-level constraints into a single optional
/// owner-id set. `None` means "no owner constraint"; an empty set matches
/// nothing (e.g. an unknown organization).
pub(crate) async fn resolve_owner_ids(
    state: &AppState,
    owner_id: Option<String>,
    organization_id: Option<String>,
    organization_name: Option<&str>,
    is_charity: Option<bool>,
) -> Result<Option<HashSet<String>>, ApiError> {
    let mut owner_ids: Option<HashSet<String>> = None;

    if organization_id.is_some() || organization_name.is_some() || is_charity.is_some() {
        let mut organization_ids = state
            .organization_repository
            .ids_matching(organization_name, is_charity)
            .await?;
        if let Some(organization_id) = organization_id {
            organization_ids.retain(|id| *id == organization_id);
        }
        let members = state
            .user_repository
            .ids_in_organizations(&organization_ids)
            .await?;
        owner_ids = Some(members.into_iter().collect());
    }

    if let Some(owner_id) = owner_id {
        owner_ids = Some(match owner_ids {
            Some(set) if set.contains(&owner_id) => HashSet::from([owner_id]),
            Some(_) => HashSet::new(),
            None => HashSet::from([owner_id]),
        });
    }

    Ok(owner_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{OrganizationProfile, User},
        repositories::Repository,
        utils::generate_uuid,
    };
    use chrono::Utc;

    async fn state_with_org_member() -> (AppState, String, String) {
        let state = AppState::new();
        let organization = OrganizationProfile {
            id: generate_uuid(),
            name: "Happy Paws Shelter".to_string(),
            address: None,
            is_charity: true,
            logo_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let user = User {
            id: generate_uuid(),
            email: "shelter@example.com".to_string(),
            first_name: None,
            last_name: None,
            phone: None,
            organization_id: Some(organization.id.clone()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        state
            .organization_repository
            .create(organization.clone())
            .await
            .unwrap();
        state.user_repository.create(user.clone()).await.unwrap();
        (state, organization.id, user.id)
    }

    #[tokio::test]
    async fn test_no_constraints_yields_none() {
        let (state, _, _) = state_with_org_member().await;
        let resolved = resolve_owner_ids(&state, None, None, None, None).await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_organization_resolves_to_member_ids() {
        let (state, organization_id, user_id) = state_with_org_member().await;
        let resolved = resolve_owner_ids(&state, None, Some(organization_id), None, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved, HashSet::from([user_id]));
    }

    #[tokio::test]
    async fn test_unknown_organization_matches_nothing() {
        let (state, _, _) = state_with_org_member().await;
        let resolved = resolve_owner_ids(&state, None, Some("missing".to_string()), None, None)
            .await
            .unwrap()
            .unwrap();
        assert!(resolved.is_empty());
    }

    #[tokio::test]
    async fn test_owner_outside_organization_matches_nothing() {
        let (state, organization_id, _) = state_with_org_member().await;
        let resolved = resolve_owner_ids(
            &state,
            Some("someone-else".to_string()),
            Some(organization_id),
            None,
            None,
        )
        .await
        .unwrap()
        .unwrap();
        assert!(resolved.is_empty());
    }

    #[tokio::test]
    async fn test_charity_flag_resolves_members() {
        let (state, _, user_id) = state_with_org_member().await;
        let resolved = resolve_owner_ids(&state, None, None, None, Some(true))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved, HashSet::from([user_id]));
    }
}
