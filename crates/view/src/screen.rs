//! Queries over a rendered view, the way a user (or a behavioral test)
//! finds things on the page: by visible text, label, role or test id.

use contact_form_core::ContactForm;
use regex::Regex;

use crate::error::ViewError;
use crate::html::to_html;
use crate::node::{Element, Node};
use crate::render::render;

/// A rendered view frozen at one point in time.
#[derive(Debug, Clone)]
pub struct Screen {
    root: Node,
}

impl Screen {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Render `form` as it currently stands.
    pub fn render(form: &ContactForm) -> Self {
        Self::new(render(form))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn to_html(&self) -> String {
        to_html(&self.root)
    }

    fn elements(&self) -> Vec<&Element> {
        self.root
            .as_element()
            .map(Element::descendants)
            .unwrap_or_default()
    }

    /// Elements whose own text matches `pattern`.
    pub fn query_all_by_text(&self, pattern: &Regex) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| {
                let text = el.own_text();
                !text.is_empty() && pattern.is_match(&text)
            })
            .collect()
    }

    /// At most one element whose own text matches `pattern`.
    pub fn query_by_text(&self, pattern: &Regex) -> Result<Option<&Element>, ViewError> {
        single(
            self.query_all_by_text(pattern),
            format!("with text {pattern}"),
        )
    }

    pub fn get_by_text(&self, pattern: &Regex) -> Result<&Element, ViewError> {
        let query = format!("with text {pattern}");
        single(self.query_all_by_text(pattern), query.clone())?.ok_or(ViewError::NotFound(query))
    }

    pub fn query_all_by_test_id(&self, id: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.attr("data-testid") == Some(id))
            .collect()
    }

    /// One or more elements tagged with `data-testid = id`.
    pub fn get_all_by_test_id(&self, id: &str) -> Result<Vec<&Element>, ViewError> {
        let found = self.query_all_by_test_id(id);
        if found.is_empty() {
            return Err(ViewError::NotFound(format!("by test id {id}")));
        }
        Ok(found)
    }

    /// The control bound to the single label matching `pattern`.
    pub fn get_by_label_text(&self, pattern: &Regex) -> Result<&Element, ViewError> {
        let query = format!("with label {pattern}");
        let labels = self
            .elements()
            .into_iter()
            .filter(|el| el.tag == "label" && pattern.is_match(&el.text_content()))
            .collect();
        let label = single(labels, query.clone())?.ok_or(ViewError::NotFound(query.clone()))?;
        let target = label
            .attr("for")
            .ok_or_else(|| ViewError::NotFound(format!("{query}: label has no `for`")))?;
        self.elements()
            .into_iter()
            .find(|el| el.attr("id") == Some(target))
            .ok_or_else(|| ViewError::NotFound(format!("{query}: no element with id {target}")))
    }

    pub fn get_by_role(&self, role: &str) -> Result<&Element, ViewError> {
        let query = format!("with role {role}");
        let found = self
            .elements()
            .into_iter()
            .filter(|el| el.role() == Some(role))
            .collect();
        single(found, query.clone())?.ok_or(ViewError::NotFound(query))
    }
}

fn single<'a>(found: Vec<&'a Element>, query: String) -> Result<Option<&'a Element>, ViewError> {
    match found.len() {
        0 => Ok(None),
        1 => Ok(found.into_iter().next()),
        count => Err(ViewError::Multiple { query, count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn finds_header_by_text() {
        let screen = Screen::render(&ContactForm::new());
        let header = screen.get_by_text(&re("(?i)contact form")).unwrap();
        assert_eq!(header.tag, "h1");
    }

    #[test]
    fn label_resolves_to_bound_input() {
        let screen = Screen::render(&ContactForm::new());
        let input = screen.get_by_label_text(&re("(?i)last name")).unwrap();
        assert_eq!(input.attr("name"), Some("lastName"));
        let textarea = screen.get_by_label_text(&re("(?i)message")).unwrap();
        assert_eq!(textarea.tag, "textarea");
    }

    #[test]
    fn ambiguous_label_query_is_an_error() {
        let screen = Screen::render(&ContactForm::new());
        assert_matches!(
            screen.get_by_label_text(&re("(?i)name")),
            Err(ViewError::Multiple { count: 2, .. })
        );
    }

    #[test]
    fn missing_test_id_is_not_found() {
        let screen = Screen::render(&ContactForm::new());
        assert_matches!(screen.get_all_by_test_id("error"), Err(ViewError::NotFound(_)));
        assert!(screen.query_by_text(&re("(?i)message:")).unwrap().is_none());
    }

    #[test]
    fn single_button() {
        let screen = Screen::render(&ContactForm::new());
        let button = screen.get_by_role("button").unwrap();
        assert_eq!(button.attr("type"), Some("submit"));
    }
}
