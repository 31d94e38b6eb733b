//! Presentation: builds the view tree for a [`ContactForm`].

use contact_form_core::validation::ValidationErrors;
use contact_form_core::{ContactForm, Field, SubmittedSnapshot};

use crate::node::{Element, Node};

/// Test id carried by every error indicator.
pub const ERROR_TEST_ID: &str = "error";

/// Render the whole component: header, inputs, visible errors, submit
/// button and, once accepted, the submitted values.
pub fn render(form: &ContactForm) -> Node {
    let errors = form.visible_errors();

    let mut body = Element::new("form")
        .with_attr("class", "contact-form")
        .with_child(Element::new("h1").with_text(form.config().header.as_str()));
    for field in Field::ALL {
        body = body.with_child(render_field(form, field, &errors));
    }
    body = body.with_child(
        Element::new("button")
            .with_attr("type", "submit")
            .with_text("Submit"),
    );

    let mut root = Element::new("div")
        .with_attr("class", "contact-form-root")
        .with_child(body);
    if let Some(snapshot) = form.snapshot() {
        root = root.with_child(render_snapshot(snapshot));
    }

    tracing::trace!(
        visible_errors = errors.len(),
        submitted = form.snapshot().is_some(),
        "Rendered contact form"
    );
    root.into()
}

fn render_field(form: &ContactForm, field: Field, errors: &ValidationErrors) -> Element {
    let label = if field.is_required() {
        format!("{}*", field.label())
    } else {
        field.label().to_string()
    };

    let input = match field {
        Field::Message => Element::new("textarea")
            .with_attr("id", field.name())
            .with_attr("name", field.name())
            .with_text(form.fields().get(field)),
        Field::Email => text_input(field, "email", form.fields().get(field)),
        _ => text_input(field, "text", form.fields().get(field)),
    };

    let mut group = Element::new("div")
        .with_child(
            Element::new("label")
                .with_attr("for", field.name())
                .with_text(label),
        )
        .with_child(input);
    if let Some(violation) = errors.for_field(field) {
        group = group.with_child(
            Element::new("p")
                .with_attr("data-testid", ERROR_TEST_ID)
                .with_text(format!("Error: {violation}")),
        );
    }
    group
}

fn text_input(field: Field, kind: &str, value: &str) -> Element {
    Element::new("input")
        .with_attr("type", kind)
        .with_attr("id", field.name())
        .with_attr("name", field.name())
        .with_attr("value", value)
}

/// The message line is only present when a non-empty message was submitted.
fn render_snapshot(snapshot: &SubmittedSnapshot) -> Element {
    let mut out = Element::new("div")
        .with_attr("class", "submitted")
        .with_child(Element::new("p").with_text("You Submitted:"));
    for field in [Field::FirstName, Field::LastName, Field::Email] {
        out = out.with_child(
            Element::new("p").with_text(format!("{}: {}", field.label(), snapshot.get(field))),
        );
    }
    if let Some(message) = snapshot.message() {
        out = out.with_child(Element::new("p").with_text(format!("Message: {message}")));
    }
    out
}
