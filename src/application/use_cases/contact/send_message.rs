use crate::application::validation::FieldErrors;

#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Fire-and-forget contact handling: validate, log, acknowledge. Nothing
/// is persisted; wiring a real notification channel is a later concern.
pub struct SendContactMessage;

impl SendContactMessage {
    pub fn execute(&self, msg: ContactMessage) -> anyhow::Result<()> {
        let mut errs = FieldErrors::new();
        let name = errs.require("name", msg.name.as_deref());
        let email = errs.require("email", msg.email.as_deref());
        let message = errs.require("message", msg.message.as_deref());
        errs.finish()?;

        tracing::info!(
            name = name.as_deref().unwrap_or_default(),
            email = email.as_deref().unwrap_or_default(),
            len = message.as_deref().map(|m| m.len()).unwrap_or_default(),
            "contact_form_submission"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::ValidationError;

    #[test]
    fn accepts_complete_message() {
        let msg = ContactMessage {
            name: Some("Jane".into()),
            email: Some("jane@example.com".into()),
            message: Some("Hello".into()),
        };
        assert!(SendContactMessage.execute(msg).is_ok());
    }

    #[test]
    fn enumerates_missing_fields() {
        let err = SendContactMessage
            .execute(ContactMessage::default())
            .unwrap_err();
        let validation = err.downcast_ref::<ValidationError>().unwrap();
        let fields: Vec<_> = validation.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }
}
