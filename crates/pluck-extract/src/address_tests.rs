use pluck_dom::{Document, DocumentBuilder, NodeId};
use pluck_path::{PathValue, Selector};

use crate::address_of;

/// Body with two divs; the second div holds a span and two ps.
fn fixture() -> (Document, NodeId, NodeId) {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    b.elem(body, "div");
    let div2 = b.elem(body, "div");
    let span = b.elem(div2, "span");
    b.elem(div2, "p");
    let p2 = b.elem(div2, "p");
    let _ = span;
    (b.build(), div2, p2)
}

#[test]
fn predicates_appear_only_among_same_tag_siblings() {
    let (doc, div2, p2) = fixture();
    assert_eq!(address_of(&doc, div2).to_string(), "/html/body/div[2]");
    assert_eq!(address_of(&doc, p2).to_string(), "/html/body/div[2]/p[2]");
}

#[test]
fn unique_children_get_bare_steps() {
    let (doc, div2, _) = fixture();
    let span = doc
        .element_children(div2)
        .find(|&c| doc.tag(c) == Some("span"))
        .unwrap();
    // span shares its parent with two p siblings, but no other span.
    assert_eq!(address_of(&doc, span).to_string(), "/html/body/div[2]/span");
}

#[test]
fn root_is_the_absolute_prefix() {
    let (doc, _, _) = fixture();
    assert_eq!(address_of(&doc, doc.root()).to_string(), "/html");
}

#[test]
fn address_selects_exactly_the_original_node() {
    let (doc, _, _) = fixture();
    let mut all = vec![doc.root()];
    all.extend(doc.descendant_elements(doc.root()));

    for node in all {
        let address = address_of(&doc, node);
        let selector = Selector {
            alternatives: vec![address],
        };
        let results = selector.evaluate(&doc);
        assert_eq!(results, [PathValue::Element(node)]);
    }
}

#[test]
fn text_node_resolves_to_its_enclosing_element() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let li = b.elem(body, "li");
    let text = b.text(li, "hi");
    let doc = b.build();
    assert_eq!(address_of(&doc, text).to_string(), "/html/body/li");
}
