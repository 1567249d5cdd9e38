use derive_new::new;

#[derive(Debug, new)]
pub struct CreateMembership {
    pub name: String,
    pub price: f64,
    pub features: Option<String>,
}
