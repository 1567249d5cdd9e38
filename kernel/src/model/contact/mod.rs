use crate::model::id::ContactMessageId;

pub mod event;

#[derive(Debug)]
pub struct ContactMessage {
    pub contact_message_id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub message: String,
}
