//! Rendering of parsed trees: a human-readable dump and XML output

use std::fmt::{self, Write};

use crate::xml::model::{Document, Element};

/// Indented, one-line-per-element dump of a tree
///
/// ```text
/// XML version: 1.0
///
/// root [id=1, ]
///  child [] = text
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TreePrinter {
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self { indent: 1 }
    }
}

impl TreePrinter {
    pub fn document(&self, doc: &Document) -> String {
        let mut output = String::new();
        // writing into a String cannot fail
        let _ = self.write_document(&mut output, doc);
        output
    }

    pub fn element(&self, element: &Element) -> String {
        let mut output = String::new();
        let _ = self.write_element(&mut output, element, 0);
        output
    }

    pub fn write_document<W: Write>(&self, out: &mut W, doc: &Document) -> fmt::Result {
        writeln!(out, "XML version: {}", doc.version)?;
        writeln!(out)?;
        if let Some(root) = &doc.root {
            self.write_element(out, root, 0)?;
        }
        Ok(())
    }

    fn write_element<W: Write>(&self, out: &mut W, element: &Element, depth: usize) -> fmt::Result {
        write!(out, "{:width$}{} [", "", element.name, width = depth * self.indent)?;
        for (key, value) in &element.attributes {
            write!(out, "{key}={value}, ")?;
        }
        write!(out, "]")?;
        if !element.value.is_empty() {
            write!(out, " = {}", element.value)?;
        }
        writeln!(out)?;

        for child in &element.children {
            self.write_element(out, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::default().write_document(f, self)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::default().write_element(f, self, 0)
    }
}

impl Document {
    /// Serialize back into XML, starting with a declaration.
    ///
    /// The dialect has no escapes: text containing `<`, or an attribute value
    /// containing both quote characters, cannot be written back faithfully.
    pub fn to_xml(&self) -> String {
        let mut output = format!("<?xml version=\"{}\"?>\n", self.version);
        if let Some(root) = &self.root {
            serialize_element(root, &mut output);
        }
        output
    }
}

impl Element {
    /// Serialize this element and its subtree into XML
    pub fn to_xml(&self) -> String {
        let mut output = String::new();
        serialize_element(self, &mut output);
        output
    }
}

fn serialize_element(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.name);

    for (key, value) in &element.attributes {
        let quote = if value.contains('"') { '\'' } else { '"' };
        output.push(' ');
        output.push_str(key);
        output.push('=');
        output.push(quote);
        output.push_str(value);
        output.push(quote);
    }

    if element.is_empty() {
        output.push_str("/>");
        return;
    }

    output.push('>');
    if element.children.is_empty() {
        output.push_str(&element.value);
    } else {
        for child in &element.children {
            serialize_element(child, output);
        }
    }
    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let root = Element::new("root")
            .with_attribute("id", "1")
            .with_child(Element::new("child").with_value("text"))
            .with_child(Element::new("leaf").with_attribute("q", "say \"hi\""));
        Document {
            version: "1.0".to_string(),
            root: Some(root),
        }
    }

    #[test]
    fn test_tree_dump() {
        let expected = "XML version: 1.0\n\nroot [id=1, ]\n child [] = text\n leaf [q=say \"hi\", ]\n";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_tree_dump_indent() {
        let printer = TreePrinter { indent: 4 };
        let el = Element::new("a").with_child(Element::new("b").with_child(Element::new("c")));
        assert_eq!(printer.element(&el), "a []\n    b []\n        c []\n");
    }

    #[test]
    fn test_tree_dump_without_root() {
        assert_eq!(TreePrinter::default().document(&Document::default()), "XML version: 1.0\n\n");
    }

    #[test]
    fn test_to_xml() {
        assert_eq!(
            sample().to_xml(),
            "<?xml version=\"1.0\"?>\n<root id=\"1\"><child>text</child><leaf q='say \"hi\"'/></root>"
        );
    }

    #[test]
    fn test_empty_element_is_self_closing() {
        assert_eq!(Element::new("x").to_xml(), "<x/>");
    }
}
