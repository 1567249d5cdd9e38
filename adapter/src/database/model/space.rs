use kernel::model::id::SpaceId;
use kernel::model::space::Space;

#[derive(sqlx::FromRow)]
pub struct SpaceRow {
    pub space_id: SpaceId,
    pub name: String,
    pub location: String,
    pub price: f64,
    pub availability: bool,
    pub image_path: Option<String>,
}

impl From<SpaceRow> for Space {
    fn from(value: SpaceRow) -> Self {
        let SpaceRow {
            space_id,
            name,
            location,
            price,
            availability,
            image_path,
        } = value;
        Space {
            space_id,
            name,
            location,
            price,
            availability,
            image_path,
        }
    }
}
