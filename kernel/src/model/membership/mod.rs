use crate::model::id::MembershipId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Membership {
    pub membership_id: MembershipId,
    pub name: String,
    pub price: f64,
    pub features: Option<String>,
}
