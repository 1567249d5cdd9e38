use derive_new::new;

#[derive(Debug, new)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
