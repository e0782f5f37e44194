//! Cross-cutting ownership guard.
//!
//! Every mutating or reading operation on an owned resource funnels through
//! [`authorize_owner`] so the access rules live in exactly one place. The
//! guard deliberately reports an owner mismatch with the same error as a
//! missing credential: a non-owner must not learn that the resource exists.

use crate::domain::error::Error;
use crate::domain::user::UserId;

/// Uniform message for missing credentials and ownership failures.
pub(crate) const NOT_AUTHORIZED: &str = "not authorized";

/// Identity of the verified caller, resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: UserId,
    pub email: String,
}

/// Capability exposed by every owned resource.
pub trait Owned {
    /// The user id of the resource's sole authorized mutator.
    fn owner_id(&self) -> UserId;
}

/// Resolve a fetched resource against the caller.
///
/// `NotFound` when the resource is absent; `Unauthorized` when it exists but
/// belongs to someone else.
pub fn authorize_owner<T: Owned>(
    caller: &Caller,
    resource: Option<T>,
    kind: &str,
) -> Result<T, Error> {
    let resource = resource.ok_or_else(|| Error::not_found(format!("{kind} not found")))?;
    if resource.owner_id() != caller.id {
        return Err(Error::unauthorized(NOT_AUTHORIZED));
    }
    Ok(resource)
}

/// Self-only guard for operations on the user record itself.
pub fn authorize_self(caller: &Caller, user_id: UserId) -> Result<(), Error> {
    if caller.id != user_id {
        return Err(Error::unauthorized(NOT_AUTHORIZED));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::error::ErrorCode;
    use rstest::rstest;

    #[derive(Debug)]
    struct Widget {
        owner: UserId,
    }

    impl Owned for Widget {
        fn owner_id(&self) -> UserId {
            self.owner
        }
    }

    fn caller(id: i64) -> Caller {
        Caller {
            id: UserId::new(id),
            email: "rider@example.com".to_owned(),
        }
    }

    #[rstest]
    fn absent_resource_is_not_found() {
        let err = authorize_owner::<Widget>(&caller(1), None, "widget").expect_err("absent");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "widget not found");
    }

    #[rstest]
    fn foreign_resource_is_unauthorized_not_404() {
        let widget = Widget {
            owner: UserId::new(2),
        };
        let err = authorize_owner(&caller(1), Some(widget), "widget").expect_err("foreign");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    fn owned_resource_passes_through() {
        let widget = Widget {
            owner: UserId::new(7),
        };
        let widget = authorize_owner(&caller(7), Some(widget), "widget").expect("owned");
        assert_eq!(widget.owner_id(), UserId::new(7));
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    fn self_guard(#[case] caller_id: i64, #[case] target: i64, #[case] allowed: bool) {
        let result = authorize_self(&caller(caller_id), UserId::new(target));
        assert_eq!(result.is_ok(), allowed);
    }
}
