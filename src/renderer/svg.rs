//! Minimal SVG element tree.
//!
//! Just enough DOM to build a chart, update attributes in place, and
//! serialize the result.

use std::fmt::Write;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// An SVG element with ordered attributes and child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing any previous value but keeping its
    /// position.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    /// Set several attributes at once.
    pub fn set_attributes<K, V>(&mut self, attrs: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in attrs {
            self.set_attribute(key.as_ref(), value);
        }
    }

    pub fn with_attributes<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        self.set_attributes(attrs);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn append_child(&mut self, child: SvgElement) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[SvgElement] {
        &self.children
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut SvgElement> {
        self.children.get_mut(index)
    }

    /// Serialize this element and its subtree with two-space indentation.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, 0);
        out
    }

    fn write_markup(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, self.tag);
        for (key, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", key, xml_escape(value));
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            child.write_markup(out, depth + 1);
        }
        let _ = writeln!(out, "{}</{}>", indent, self.tag);
    }
}

/// Escape the five XML special characters for use in attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut el = SvgElement::new("path").with_attributes([("d", "M 0 0"), ("fill", "red")]);
        el.set_attribute("d", "M 1 1");
        assert_eq!(el.attribute("d"), Some("M 1 1"));
        assert_eq!(el.to_markup(), "<path d=\"M 1 1\" fill=\"red\"/>\n");
    }

    #[test]
    fn test_nested_markup() {
        let mut svg = SvgElement::new("svg").with_attributes([("xmlns", SVG_NAMESPACE)]);
        let mut g = SvgElement::new("g");
        g.append_child(SvgElement::new("path"));
        svg.append_child(g);

        assert_eq!(
            svg.to_markup(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <g>\n    <path/>\n  </g>\n</svg>\n"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let el = SvgElement::new("g").with_attributes([("data-label", "R&D <\"core\">")]);
        assert_eq!(
            el.to_markup(),
            "<g data-label=\"R&amp;D &lt;&quot;core&quot;&gt;\"/>\n"
        );
    }
}
