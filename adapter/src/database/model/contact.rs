use kernel::model::contact::ContactMessage;
use kernel::model::id::ContactMessageId;

#[derive(sqlx::FromRow)]
pub struct ContactMessageRow {
    pub contact_message_id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactMessageRow> for ContactMessage {
    fn from(value: ContactMessageRow) -> Self {
        let ContactMessageRow {
            contact_message_id,
            name,
            email,
            message,
        } = value;
        ContactMessage {
            contact_message_id,
            name,
            email,
            message,
        }
    }
}
