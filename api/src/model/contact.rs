use garde::Validate;
use kernel::model::contact::{event::CreateContactMessage, ContactMessage};
use kernel::model::id::ContactMessageId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct ContactMessageRequest {
    #[garde(required, length(min = 1))]
    pub name: Option<String>,
    #[garde(required, length(min = 1))]
    pub email: Option<String>,
    #[garde(required, length(min = 1))]
    pub message: Option<String>,
}

impl From<ContactMessageRequest> for CreateContactMessage {
    fn from(value: ContactMessageRequest) -> Self {
        let ContactMessageRequest {
            name,
            email,
            message,
        } = value;
        CreateContactMessage {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            message: message.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactMessageResponse {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(value: ContactMessage) -> Self {
        let ContactMessage {
            contact_message_id,
            name,
            email,
            message,
        } = value;
        Self {
            id: contact_message_id,
            name,
            email,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_message_requires_every_field() {
        let req = ContactMessageRequest {
            name: Some("Visitor".into()),
            email: Some("visitor@example.com".into()),
            message: None,
        };
        assert!(req.validate(&()).is_err());

        let req = ContactMessageRequest {
            name: Some("Visitor".into()),
            email: Some("visitor@example.com".into()),
            message: Some("Hello".into()),
        };
        assert!(req.validate(&()).is_ok());
    }
}
