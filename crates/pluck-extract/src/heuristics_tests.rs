use pluck_dom::{Document, DocumentBuilder, NodeId};
use pluck_path::Selector;

use crate::heuristics::AnchorKind;
use crate::{ColumnDef, extract, synthesize};

fn names(columns: &[ColumnDef]) -> Vec<&str> {
    columns.iter().map(|c| c.name.as_str()).collect()
}

fn selectors(columns: &[ColumnDef]) -> Vec<&str> {
    columns.iter().map(|c| c.selector.as_str()).collect()
}

/// Table with `Name`/`Age` headers and three data rows; returns a data
/// cell of the second row as the pick target.
fn headed_table() -> (Document, NodeId) {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let table = b.elem(body, "table");
    let header = b.elem(table, "tr");
    for title in ["Name", "Age"] {
        let th = b.elem(header, "th");
        b.text(th, title);
    }
    let mut picked = None;
    for (name, age) in [("Ada", "36"), ("Grace", "85"), ("Edsger", "72")] {
        let tr = b.elem(table, "tr");
        let td1 = b.elem(tr, "td");
        b.text(td1, name);
        let td2 = b.elem(tr, "td");
        b.text(td2, age);
        if name == "Grace" {
            picked = Some(td1);
        }
    }
    (b.build(), picked.unwrap())
}

#[test]
fn classify_covers_known_tags_and_falls_back() {
    assert_eq!(AnchorKind::classify("tr"), AnchorKind::TableRow);
    assert_eq!(AnchorKind::classify("h4"), AnchorKind::Heading);
    assert_eq!(AnchorKind::classify("ol"), AnchorKind::List);
    assert_eq!(AnchorKind::classify("footer"), AnchorKind::HeaderFooter);
    assert_eq!(AnchorKind::classify("marquee"), AnchorKind::Default);
}

#[test]
fn table_cell_pick_yields_header_named_columns() {
    let (doc, cell) = headed_table();
    let config = synthesize(&doc, cell);

    // Row generalized: all three data rows, header row excluded.
    insta::assert_snapshot!(config.main_selector, @"//tr[td]");
    assert_eq!(
        Selector::parse(&config.main_selector).unwrap().count(&doc),
        3
    );
    assert_eq!(names(&config.columns), ["Name", "Age"]);
    assert_eq!(selectors(&config.columns), ["td[1]", "td[2]"]);

    // End to end: the synthesized config extracts the table body.
    let result = extract(&doc, &config).unwrap();
    assert_eq!(result.data.len(), 3);
    assert_eq!(result.data[1].data["Name"], "Grace");
    assert_eq!(result.data[2].data["Age"], "72");
}

#[test]
fn header_count_mismatch_falls_back_to_generic_names() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let table = b.elem(body, "table");
    let header = b.elem(table, "tr");
    b.elem(header, "th"); // one header, two data cells
    let tr = b.elem(table, "tr");
    let td = b.elem(tr, "td");
    b.elem(tr, "td");
    let doc = b.build();

    let config = synthesize(&doc, td);
    assert_eq!(names(&config.columns), ["Column 1", "Column 2"]);
    assert_eq!(selectors(&config.columns), ["td[1]", "td[2]"]);
}

#[test]
fn blank_header_cells_get_positional_names() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let table = b.elem(body, "table");
    let header = b.elem(table, "tr");
    let th1 = b.elem(header, "th");
    b.text(th1, "Name");
    b.elem(header, "th"); // blank
    let tr = b.elem(table, "tr");
    let td = b.elem(tr, "td");
    b.elem(tr, "td");
    let doc = b.build();

    let config = synthesize(&doc, td);
    assert_eq!(names(&config.columns), ["Name", "Column 2"]);
}

#[test]
fn row_without_data_cells_gets_a_self_text_column() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let table = b.elem(body, "table");
    let tr = b.elem(table, "tr");
    let th = b.elem(tr, "th");
    b.text(th, "only headers");
    let doc = b.build();

    let config = synthesize(&doc, th);
    assert_eq!(selectors(&config.columns), ["."]);
}

#[test]
fn link_template_with_data_attributes() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let a = b.elem_with(
        body,
        "a",
        &[("href", "/x"), ("data-id", "7"), ("data-track", "nav")],
    );
    b.text(a, "Go");
    let doc = b.build();

    let config = synthesize(&doc, a);
    assert_eq!(
        names(&config.columns),
        ["Text", "URL", "Rel", "Target", "data-id", "data-track"]
    );
    assert_eq!(
        selectors(&config.columns),
        [".", "@href", "@rel", "@target", "@data-id", "@data-track"]
    );
}

#[test]
fn nearest_interesting_ancestor_wins() {
    // span inside a inside li: the link is nearer than the list item.
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let ul = b.elem(body, "ul");
    let li = b.elem(ul, "li");
    let a = b.elem_with(li, "a", &[("href", "/only")]);
    let span = b.elem(a, "span");
    b.text(span, "label");
    let doc = b.build();

    let config = synthesize(&doc, span);
    assert_eq!(&names(&config.columns)[..2], ["Text", "URL"]);

    // Picking the li itself still gets the list-item template.
    let config = synthesize(&doc, li);
    assert_eq!(names(&config.columns), ["Text", "Link Text", "Link URL"]);
}

#[test]
fn definition_term_reaches_its_definition() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let dl = b.elem(body, "dl");
    let dt = b.elem(dl, "dt");
    b.text(dt, "Pluck");
    let dd = b.elem(dl, "dd");
    b.text(dd, "to pull sharply");
    let doc = b.build();

    let config = synthesize(&doc, dt);
    assert_eq!(
        selectors(&config.columns),
        [".", "following-sibling::dd"]
    );
    let result = extract(&doc, &config).unwrap();
    assert_eq!(result.data[0].data["Definition"], "to pull sharply");
}

#[test]
fn unknown_tag_falls_back_to_the_default_template() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let widget = b.elem_with(
        body,
        "blink",
        &[("aria-label", "legacy"), ("data-era", "90s")],
    );
    let doc = b.build();

    let config = synthesize(&doc, widget);
    assert_eq!(names(&config.columns), ["ARIA Label", "Text", "data-era"]);
}

#[test]
fn default_template_omits_aria_label_when_absent() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let widget = b.elem(body, "blink");
    let doc = b.build();

    let config = synthesize(&doc, widget);
    assert_eq!(names(&config.columns), ["Text"]);
}

#[test]
fn non_row_anchors_keep_their_singleton_selector() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    for href in ["/a", "/b"] {
        let a = b.elem_with(body, "a", &[("href", href)]);
        b.text(a, href);
    }
    let doc = b.build();
    let second = doc
        .descendant_elements(doc.root())
        .into_iter()
        .filter(|&n| doc.tag(n) == Some("a"))
        .nth(1)
        .unwrap();

    let config = synthesize(&doc, second);
    insta::assert_snapshot!(config.main_selector, @"//a[2]");
    assert_eq!(
        Selector::parse(&config.main_selector).unwrap().count(&doc),
        1
    );
}

#[test]
fn image_template() {
    let mut b = DocumentBuilder::new("html");
    let body = b.elem(b.root(), "body");
    let img = b.elem_with(body, "img", &[("src", "/cat.png"), ("alt", "a cat")]);
    let doc = b.build();

    let config = synthesize(&doc, img);
    assert_eq!(names(&config.columns), ["Alt", "Source", "Title"]);
    let result = extract(&doc, &config).unwrap();
    assert_eq!(result.data[0].data["Source"], "/cat.png");
    assert_eq!(result.data[0].data["Title"], "");
}
