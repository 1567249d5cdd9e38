use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::auth::TokenKind;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// The identity behind a bearer access token. Extraction fails with 401 when
/// the header is missing or the token does not verify.
pub struct AuthorizedUser {
    user_id: UserId,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user_id
    }

    /// Owner-scoped routes: the token identity must match the resource
    /// owner, otherwise 403 (the caller is authenticated, just not allowed).
    pub fn ensure_owner(&self, owner_id: UserId) -> AppResult<()> {
        if self.user_id != owner_id {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(())
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::UnauthenticatedError)?;

        let user_id = registry
            .token_service()
            .verify(bearer.token(), TokenKind::Access)?;

        Ok(Self { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_owner_rejects_a_different_identity() {
        let me = UserId::new();
        let user = AuthorizedUser { user_id: me };

        assert!(user.ensure_owner(me).is_ok());
        assert!(matches!(
            user.ensure_owner(UserId::new()),
            Err(AppError::ForbiddenOperation)
        ));
    }
}
