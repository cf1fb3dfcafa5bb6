//! The chat input bound to the widget as its form.

use advisor_engine::{FormController, MessageSchema, ValidationError};

use crate::ui::widgets::TextInputState;

/// Editable message field with inline validation.
#[derive(Debug, Clone, Default)]
pub struct InputForm {
    input: TextInputState,
    schema: MessageSchema,
    error: Option<ValidationError>,
    revalidate: bool,
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    /// Apply an editing operation, then revalidate if a submit was rejected.
    pub fn edit(&mut self, op: impl FnOnce(&mut TextInputState)) {
        op(&mut self.input);
        self.refresh_error();
    }

    fn refresh_error(&mut self) {
        if self.revalidate {
            self.error = self.schema.validate(self.input.content()).err();
        }
    }
}

impl FormController for InputForm {
    fn value(&self) -> &str {
        self.input.content()
    }

    fn set_value(&mut self, value: String) {
        self.input.set(value);
        self.refresh_error();
    }

    fn validate(&mut self) -> Result<String, ValidationError> {
        self.revalidate = true;
        match self.schema.validate(self.input.content()) {
            Ok(()) => {
                self.error = None;
                Ok(self.input.content().to_string())
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
        self.input.clear();
        self.error = None;
        self.revalidate = false;
    }
}
