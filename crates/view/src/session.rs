//! Drives a live form through its rendered view, one user action at a time.

use contact_form_core::{ContactForm, Field};
use regex::Regex;

use crate::error::ViewError;
use crate::screen::Screen;

/// A user interacting with one form instance.
///
/// Every action locates its target on a fresh render, then dispatches the
/// matching event to the form, so a control that is not on screen cannot be
/// used.
pub struct UserSession<'a> {
    form: &'a mut ContactForm,
}

impl<'a> UserSession<'a> {
    pub fn new(form: &'a mut ContactForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &ContactForm {
        self.form
    }

    pub fn screen(&self) -> Screen {
        Screen::render(self.form)
    }

    /// Type `text` into the control labelled by `label`, appending to its
    /// current value one character at a time. Typing nothing sends no event.
    pub fn type_text(&mut self, label: &Regex, text: &str) -> Result<(), ViewError> {
        let field = self.field_for_label(label)?;
        let mut value = self.form.fields().get(field).to_string();
        for c in text.chars() {
            value.push(c);
            self.form.set_field(field, value.clone());
        }
        Ok(())
    }

    /// Empty the control labelled by `label`.
    pub fn clear(&mut self, label: &Regex) -> Result<(), ViewError> {
        let field = self.field_for_label(label)?;
        self.form.set_field(field, "");
        Ok(())
    }

    /// Click the only button on screen; a submit button submits the form.
    pub fn click_button(&mut self) -> Result<(), ViewError> {
        let is_submit = self.screen().get_by_role("button")?.attr("type") == Some("submit");
        if is_submit {
            self.form.submit();
        }
        Ok(())
    }

    fn field_for_label(&self, label: &Regex) -> Result<Field, ViewError> {
        let screen = self.screen();
        let control = screen.get_by_label_text(label)?;
        let name = control
            .attr("name")
            .ok_or_else(|| ViewError::NotFound(format!("name on control labelled {label}")))?;
        Ok(Field::from_name(name)?)
    }
}
