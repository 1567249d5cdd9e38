use crate::model::id::SpaceId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Space {
    pub space_id: SpaceId,
    pub name: String,
    pub location: String,
    pub price: f64,
    pub availability: bool,
    pub image_path: Option<String>,
}
