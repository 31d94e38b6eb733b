//! Presentation layer for the contact form.
//!
//! Turns a [`contact_form_core::ContactForm`] into a declarative view tree,
//! serializes it to HTML, and offers page-level queries and a user session
//! driver for rendering environments and behavioral tests.

pub mod error;
pub mod html;
pub mod node;
pub mod render;
pub mod screen;
pub mod session;

pub use error::ViewError;
pub use html::to_html;
pub use node::{Element, Node};
pub use render::{render, ERROR_TEST_ID};
pub use screen::Screen;
pub use session::UserSession;
