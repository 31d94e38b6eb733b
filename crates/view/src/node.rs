//! Declarative view tree.

use serde::Serialize;

/// A node in the rendered view: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(el) => el.text_content(),
            Self::Text { text } => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Builder: append a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder: append a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::text(text))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Text of the direct text children only.
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text { text } => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// This element and every element below it, in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            if let Node::Element(el) = child {
                out.extend(el.descendants());
            }
        }
        out
    }

    /// Implicit accessibility role, for the handful of tags the form uses.
    pub fn role(&self) -> Option<&'static str> {
        match self.tag.as_str() {
            "button" => Some("button"),
            "input" => match self.attr("type").unwrap_or("text") {
                "submit" | "button" | "reset" => Some("button"),
                "checkbox" => Some("checkbox"),
                _ => Some("textbox"),
            },
            "textarea" => Some("textbox"),
            "form" => Some("form"),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some("heading"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_attr("id", "root")
            .with_text("a")
            .with_child(Element::new("p").with_text("b"))
            .with_child(Element::new("button").with_text("c"))
    }

    #[test]
    fn text_content_includes_descendants() {
        let el = sample();
        assert_eq!(el.text_content(), "abc");
        assert_eq!(el.own_text(), "a");
    }

    #[test]
    fn descendants_are_in_document_order() {
        let tags: Vec<_> = sample().descendants().iter().map(|e| e.tag.clone()).collect();
        assert_eq!(tags, vec!["div", "p", "button"]);
    }

    #[test]
    fn roles_follow_tags() {
        assert_eq!(Element::new("button").role(), Some("button"));
        assert_eq!(
            Element::new("input").with_attr("type", "submit").role(),
            Some("button")
        );
        assert_eq!(Element::new("input").role(), Some("textbox"));
        assert_eq!(Element::new("p").role(), None);
    }

    #[test]
    fn attr_lookup() {
        assert_eq!(sample().attr("id"), Some("root"));
        assert_eq!(sample().attr("class"), None);
    }
}
