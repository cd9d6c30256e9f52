//! HTML5 parsing using html5ever
//!
//! Editor content arrives as an HTML fragment (generated article body, stored
//! draft, or previously serialized blocks). It is parsed with html5ever, which
//! implements the WHATWG parsing algorithm, so malformed markup yields the same
//! tree a browser would build and never an error.
//!
//! The fragment is parsed as a full document; html5ever synthesizes the
//! `html`/`head`/`body` scaffolding and block conversion starts from `body`.
//!
//! # Examples
//!
//! ```rust
//! use recipe_block_converter::parser::{body, element_name, parse_fragment};
//!
//! let dom = parse_fragment("<h2>Title<p>unclosed");
//! let body = body(&dom).expect("html5ever always creates a body");
//! let names: Vec<_> = body
//!     .children
//!     .borrow()
//!     .iter()
//!     .filter_map(|child| element_name(child).map(str::to_string))
//!     .collect();
//! assert_eq!(names, vec!["h2"]);
//! ```

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML fragment into a DOM tree
///
/// Never fails: empty input produces an empty body, broken markup is
/// repaired per the HTML5 tree construction rules.
pub fn parse_fragment(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// Locate the `body` element of a parsed document
pub fn body(dom: &RcDom) -> Option<Handle> {
    let html = find_child_element(&dom.document, "html")?;
    find_child_element(&html, "body")
}

fn find_child_element(node: &Handle, tag: &str) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|child| element_name(child) == Some(tag))
        .cloned()
}

/// Local tag name of an element node, `None` for other node types
pub fn element_name(node: &Handle) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Value of the named attribute, if the node is an element carrying it
pub fn attribute(node: &Handle, attr_name: &str) -> Option<String> {
    if let NodeData::Element { ref attrs, .. } = node.data {
        attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == attr_name)
            .map(|attr| attr.value.to_string())
    } else {
        None
    }
}

/// True if the element's `class` attribute lists `class_name`
pub fn has_class(node: &Handle, class_name: &str) -> bool {
    attribute(node, "class")
        .map(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}
