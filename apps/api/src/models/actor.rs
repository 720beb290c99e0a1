//! Identity of the caller, forwarded by the federation gateway

use crate::error::{ApiError, ApiResult};

/// Header carrying the authenticated user id
pub const ACTOR_ID_HEADER: &str = "x-user-id";

/// Header carrying the authenticated user's role
pub const ACTOR_ROLE_HEADER: &str = "x-user-role";

/// Caller identity injected into the GraphQL request data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub role: Option<String>,
}

impl Actor {
    /// Build an actor from raw header values; blank ids yield `None`
    pub fn from_parts(id: Option<&str>, role: Option<&str>) -> Option<Self> {
        let id = id.map(str::trim).filter(|id| !id.is_empty())?;
        let role = role
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_string);

        Some(Self {
            id: id.to_string(),
            role,
        })
    }
}

/// Identity acting on a mutation
///
/// An explicit id argument wins over the request actor. Blank or missing
/// identities are rejected.
pub fn resolve_actor_id(explicit: Option<&str>, actor: Option<&Actor>) -> ApiResult<String> {
    explicit
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .or_else(|| actor.map(|a| a.id.clone()))
        .ok_or(ApiError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_from_parts() {
        let actor = Actor::from_parts(Some(" seller-1 "), Some("SELLER")).unwrap();
        assert_eq!(actor.id, "seller-1");
        assert_eq!(actor.role.as_deref(), Some("SELLER"));

        assert!(Actor::from_parts(Some("   "), None).is_none());
        assert!(Actor::from_parts(None, Some("ADMIN")).is_none());
        assert_eq!(Actor::from_parts(Some("a"), Some("")).unwrap().role, None);
    }

    #[test]
    fn test_explicit_id_wins() {
        let actor = Actor::from_parts(Some("from-header"), None);
        let id = resolve_actor_id(Some("explicit"), actor.as_ref()).unwrap();
        assert_eq!(id, "explicit");
    }

    #[test]
    fn test_falls_back_to_request_actor() {
        let actor = Actor::from_parts(Some("from-header"), None);
        assert_eq!(resolve_actor_id(None, actor.as_ref()).unwrap(), "from-header");
        assert_eq!(resolve_actor_id(Some("  "), actor.as_ref()).unwrap(), "from-header");
    }

    #[test]
    fn test_missing_identity_is_unauthorized() {
        assert_matches!(resolve_actor_id(None, None), Err(ApiError::Unauthorized));
        assert_matches!(resolve_actor_id(Some(""), None), Err(ApiError::Unauthorized));
    }
}
