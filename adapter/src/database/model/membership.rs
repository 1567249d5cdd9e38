use kernel::model::id::MembershipId;
use kernel::model::membership::Membership;

#[derive(sqlx::FromRow)]
pub struct MembershipRow {
    pub membership_id: MembershipId,
    pub name: String,
    pub price: f64,
    pub features: Option<String>,
}

impl From<MembershipRow> for Membership {
    fn from(value: MembershipRow) -> Self {
        let MembershipRow {
            membership_id,
            name,
            price,
            features,
        } = value;
        Membership {
            membership_id,
            name,
            price,
            features,
        }
    }
}
