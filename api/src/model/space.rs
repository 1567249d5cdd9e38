use kernel::model::id::SpaceId;
use kernel::model::space::Space;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SpaceResponse {
    pub id: SpaceId,
    pub name: String,
    pub location: String,
    pub price: f64,
    pub availability: bool,
    pub image_path: Option<String>,
}

impl From<Space> for SpaceResponse {
    fn from(value: Space) -> Self {
        let Space {
            space_id,
            name,
            location,
            price,
            availability,
            image_path,
        } = value;
        Self {
            id: space_id,
            name,
            location,
            price,
            availability,
            image_path,
        }
    }
}
