use garde::Validate;
use kernel::model::id::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[garde(required, length(min = 1))]
    pub email: Option<String>,
    #[garde(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccessTokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let req = LoginRequest {
            email: Some("a@b.com".into()),
            password: None,
        };
        assert!(req.validate(&()).is_err());

        let req = LoginRequest {
            email: Some("a@b.com".into()),
            password: Some("pw".into()),
        };
        assert!(req.validate(&()).is_ok());
    }
}
