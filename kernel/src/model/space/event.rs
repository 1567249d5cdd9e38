use derive_new::new;

#[derive(Debug, new)]
pub struct CreateSpace {
    pub name: String,
    pub location: String,
    pub price: f64,
    pub availability: bool,
    pub image_path: Option<String>,
}
