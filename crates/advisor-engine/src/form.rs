//! Form binding for the message field.
//!
//! The widget never touches a concrete input control. It talks to a
//! [`FormController`], so the same state machine drives the terminal input,
//! the one-shot CLI and the tests.

use crate::validation::{MessageSchema, ValidationError};

/// Capability the widget needs from the form it is bound to.
pub trait FormController {
    /// Current field value.
    fn value(&self) -> &str;

    /// Replace the field value.
    ///
    /// After a rejected submission the field is revalidated on every change.
    fn set_value(&mut self, value: String);

    /// Validate the current value, recording the inline error on failure.
    fn validate(&mut self) -> Result<String, ValidationError>;

    /// Inline error currently attached to the field.
    fn error(&self) -> Option<&ValidationError>;

    /// Clear the value, the inline error and the revalidation mode.
    fn reset(&mut self);
}

/// Plain in-memory form with a single `message` field.
#[derive(Debug, Clone, Default)]
pub struct MessageForm {
    value: String,
    error: Option<ValidationError>,
    schema: MessageSchema,
    revalidate: bool,
}

impl MessageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: MessageSchema) -> Self {
        Self {
            schema,
            ..Self::default()
        }
    }
}

impl FormController for MessageForm {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        if self.revalidate {
            self.error = self.schema.validate(&self.value).err();
        }
    }

    fn validate(&mut self) -> Result<String, ValidationError> {
        self.revalidate = true;
        match self.schema.validate(&self.value) {
            Ok(()) => {
                self.error = None;
                Ok(self.value.clone())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    fn reset(&mut self) {
        self.value.clear();
        self.error = None;
        self.revalidate = false;
    }
}
