use serde::{Deserialize, Serialize};

/// Short-lived credential proving recent authentication.
#[derive(Debug, Clone)]
pub struct AccessToken(pub String);

/// Longer-lived credential used only to mint new access tokens.
#[derive(Debug, Clone)]
pub struct RefreshToken(pub String);

/// Discriminates the two token flavors inside the signed claims so one can
/// never be presented where the other is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}
