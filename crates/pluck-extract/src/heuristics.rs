//! Heuristic configuration synthesis.
//!
//! Given one anchor node (the element a user pointed at), guess a complete
//! extraction rule: walk up to the nearest semantically meaningful
//! ancestor, minimize its selector, then emit a tag-specific column
//! template. Templates are a snapshot decision; attributes appearing after
//! synthesis do not grow new columns.

use pluck_dom::{Document, NodeId};
use pluck_path::{Path, Predicate, Start, Step as PathStep};

use crate::config::{ColumnDef, ScrapeConfig};
use crate::minimize::{minimize_to_path, strip_final_positions};

/// Tags worth anchoring a rule to, in preference order for documentation;
/// the ancestor walk itself takes the nearest match, not the best one.
const INTERESTING_TAGS: [&str; 20] = [
    "tr", "a", "img", "dt", "li", "button", "input", "textarea", "select", "h1", "h2", "h3", "h4",
    "h5", "h6", "article", "section", "main", "aside", "figure",
];

/// Semantic role of the chosen anchor, the single dispatch point for the
/// column templates. Closed: unknown tags land on `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    TableRow,
    Link,
    Image,
    DefinitionTerm,
    ListItem,
    Button,
    Input,
    TextArea,
    Select,
    Heading,
    Sectioning,
    Figure,
    Blockquote,
    Code,
    Table,
    List,
    DefinitionList,
    Form,
    Nav,
    HeaderFooter,
    Media,
    Details,
    Summary,
    Default,
}

impl AnchorKind {
    pub fn classify(tag: &str) -> Self {
        match tag {
            "tr" => Self::TableRow,
            "a" => Self::Link,
            "img" => Self::Image,
            "dt" => Self::DefinitionTerm,
            "li" => Self::ListItem,
            "button" => Self::Button,
            "input" => Self::Input,
            "textarea" => Self::TextArea,
            "select" => Self::Select,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Self::Heading,
            "article" | "section" | "main" | "aside" => Self::Sectioning,
            "figure" => Self::Figure,
            "blockquote" => Self::Blockquote,
            "code" | "pre" => Self::Code,
            "table" => Self::Table,
            "ul" | "ol" => Self::List,
            "dl" => Self::DefinitionList,
            "form" => Self::Form,
            "nav" => Self::Nav,
            "header" | "footer" => Self::HeaderFooter,
            "video" | "audio" => Self::Media,
            "details" => Self::Details,
            "summary" => Self::Summary,
            _ => Self::Default,
        }
    }
}

/// Derives a full [`ScrapeConfig`] from a single anchor element.
///
/// The main selector comes from minimizing the nearest interesting
/// ancestor-or-self (falling back to the anchor itself); the columns come
/// from that element's [`AnchorKind`] template plus one synthetic column
/// per `data-*` attribute present at synthesis time.
pub fn synthesize(doc: &Document, anchor: NodeId) -> ScrapeConfig {
    let target = interesting_ancestor(doc, anchor).unwrap_or(anchor);
    let kind = AnchorKind::classify(doc.tag(target).unwrap_or(""));

    let mut main = minimize_to_path(doc, target);
    if kind == AnchorKind::TableRow {
        // Generalize from "this row" to "rows like it": drop the row's
        // position and require at least one data cell, which also keeps
        // header/footer rows out.
        strip_final_positions(&mut main);
        if let Some(step) = main.steps.last_mut() {
            step.predicates.push(Predicate::Exists(Path {
                start: Start::Relative,
                steps: vec![PathStep::named("td")],
            }));
        }
    }
    debug_assert_eq!(main.start, Start::Absolute);

    let mut columns = template_columns(kind, doc, target);
    columns.extend(data_attr_columns(doc, target));

    ScrapeConfig {
        main_selector: main.to_string(),
        columns,
    }
}

/// Nearest ancestor-or-self whose tag is interesting. Walks upward from
/// the node; first hit wins.
fn interesting_ancestor(doc: &Document, node: NodeId) -> Option<NodeId> {
    let start = doc_node_or_self(doc, node);
    std::iter::once(start)
        .chain(doc.ancestors(start))
        .find(|&id| {
            doc.tag(id)
                .is_some_and(|tag| INTERESTING_TAGS.contains(&tag))
        })
}

/// Text anchors resolve to their enclosing element before the walk.
fn doc_node_or_self(doc: &Document, node: NodeId) -> NodeId {
    if doc.is_element(node) {
        node
    } else {
        doc.parent(node).unwrap_or(node)
    }
}

fn template_columns(kind: AnchorKind, doc: &Document, target: NodeId) -> Vec<ColumnDef> {
    use AnchorKind::*;

    let fixed: &[(&str, &str)] = match kind {
        TableRow => return table_row_columns(doc, target),
        Link => &[
            ("Text", "."),
            ("URL", "@href"),
            ("Rel", "@rel"),
            ("Target", "@target"),
        ],
        Image => &[("Alt", "@alt"), ("Source", "@src"), ("Title", "@title")],
        DefinitionTerm => &[("Term", "."), ("Definition", "following-sibling::dd")],
        ListItem => &[("Text", "."), ("Link Text", "a"), ("Link URL", "a/@href")],
        Button => &[
            ("Text", "."),
            ("Type", "@type"),
            ("Name", "@name"),
            ("Value", "@value"),
            ("Disabled", "@disabled"),
        ],
        Input => &[
            ("Value", "@value"),
            ("Placeholder", "@placeholder"),
            ("Name", "@name"),
            ("Type", "@type"),
            ("Checked", "@checked"),
        ],
        TextArea => &[
            ("Text", "."),
            ("Placeholder", "@placeholder"),
            ("Name", "@name"),
        ],
        Select => &[
            ("Name", "@name"),
            ("Selected Option", "option[@selected]"),
            ("First Option", "option"),
        ],
        Heading => &[("Text", "."), ("Anchor", "@id"), ("Link URL", "a/@href")],
        Sectioning => &[
            ("Heading", ".//h1 | .//h2 | .//h3"),
            ("Text", "."),
            ("Link URL", ".//a/@href"),
        ],
        Figure => &[
            ("Image Source", ".//img/@src"),
            ("Image Alt", ".//img/@alt"),
            ("Image Title", ".//img/@title"),
            ("Caption", "figcaption"),
            ("Text", "."),
        ],
        Blockquote => &[("Quote", "."), ("Citation URL", "@cite"), ("Source", "cite")],
        Code => &[("Code", "."), ("Class", "@class")],
        Table => &[
            ("Caption", "caption"),
            ("First Header", ".//th"),
            ("Summary", "@summary"),
        ],
        List => &[
            ("Text", "."),
            ("First Item", "li"),
            ("First Link URL", ".//a/@href"),
        ],
        DefinitionList => &[
            ("First Term", "dt"),
            ("First Definition", "dd"),
            ("Text", "."),
        ],
        Form => &[
            ("Action", "@action"),
            ("Method", "@method"),
            ("Name", "@name"),
            ("Id", "@id"),
        ],
        Nav => &[
            ("Text", "."),
            ("First Link", ".//a"),
            ("First Link URL", ".//a/@href"),
        ],
        HeaderFooter => &[("Text", "."), ("Heading", ".//h1 | .//h2 | .//h3")],
        Media => &[
            ("Source", "@src"),
            ("Child Source", "source/@src"),
            ("Poster", "@poster"),
            ("Controls", "@controls"),
        ],
        Details => &[("Summary", "summary"), ("Open", "@open"), ("Text", ".")],
        Summary => &[("Text", "."), ("Open", "ancestor::details/@open")],
        Default => {
            let mut columns = Vec::new();
            if doc.attr(target, "aria-label").is_some() {
                columns.push(ColumnDef::new("ARIA Label", "@aria-label"));
            }
            columns.push(ColumnDef::new("Text", "."));
            return columns;
        }
    };

    fixed
        .iter()
        .map(|(name, selector)| ColumnDef::new(*name, *selector))
        .collect()
}

/// Row template: one column per header when the table's header cells line
/// up with this row's data cells, generic `Column N` names otherwise.
fn table_row_columns(doc: &Document, row: NodeId) -> Vec<ColumnDef> {
    let cells: Vec<NodeId> = doc
        .element_children(row)
        .filter(|&c| doc.tag(c) == Some("td"))
        .collect();

    if cells.is_empty() {
        return vec![ColumnDef::new("Text", ".")];
    }

    let headers = enclosing_table_headers(doc, row);
    let matched = headers.len() == cells.len();

    (0..cells.len())
        .map(|i| {
            let fallback = format!("Column {}", i + 1);
            let name = if matched {
                let text = doc.text_content(headers[i]);
                if text.is_empty() { fallback } else { text }
            } else {
                fallback
            };
            ColumnDef::new(name, format!("td[{}]", i + 1))
        })
        .collect()
}

/// Header cells of the nearest enclosing table, in document order.
fn enclosing_table_headers(doc: &Document, row: NodeId) -> Vec<NodeId> {
    let Some(table) = doc
        .ancestors(row)
        .into_iter()
        .find(|&id| doc.tag(id) == Some("table"))
    else {
        return Vec::new();
    };
    doc.descendant_elements(table)
        .into_iter()
        .filter(|&id| doc.tag(id) == Some("th"))
        .collect()
}

/// One synthetic column per `data-*` attribute, in attribute order,
/// appended after every template.
fn data_attr_columns(doc: &Document, target: NodeId) -> Vec<ColumnDef> {
    doc.attrs(target)
        .iter()
        .filter(|(name, _)| name.starts_with("data-"))
        .map(|(name, _)| ColumnDef::new(name.clone(), format!("@{name}")))
        .collect()
}
