use kernel::model::id::MembershipId;
use kernel::model::membership::Membership;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MembershipResponse {
    pub id: MembershipId,
    pub name: String,
    pub price: f64,
    pub features: Option<String>,
}

impl From<Membership> for MembershipResponse {
    fn from(value: Membership) -> Self {
        let Membership {
            membership_id,
            name,
            price,
            features,
        } = value;
        Self {
            id: membership_id,
            name,
            price,
            features,
        }
    }
}
