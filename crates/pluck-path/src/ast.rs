//! Selector AST.
//!
//! The tree is deliberately small and fully public: the selector minimizer
//! edits `Path` values structurally (dropping predicates, trimming leading
//! steps) and relies on `Display` to round-trip back to selector text.

use std::fmt;

/// How a path anchors to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    /// Leading `/` or `//`: evaluation begins at the synthetic document
    /// node, whose only child is the root element.
    Absolute,
    /// Bare steps or a leading `.`: evaluation begins at the context node.
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Child,
    FollowingSibling,
    Ancestor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTest {
    /// Element by tag name.
    Name(String),
    /// `*`: any element.
    Wildcard,
    /// `text()`: text children of the context element.
    Text,
    /// `@name`: attribute value on the context element.
    Attr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `[n]`: 1-based position within each context group.
    Index(usize),
    /// `[path]`: keep candidates where the path matches at least once.
    Exists(Path),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// True when the step was written after `//`: the context expands to
    /// descendant-or-self before the step applies, so positional predicates
    /// still group per parent (XPath abbreviation semantics).
    pub descendant: bool,
    pub axis: Axis,
    pub test: NodeTest,
    pub predicates: Vec<Predicate>,
}

/// One alternation branch: an anchored list of steps.
///
/// `.` alone parses to a relative path with no steps and evaluates to the
/// context node itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub start: Start,
    pub steps: Vec<Step>,
}

impl Step {
    pub fn named(tag: impl Into<String>) -> Self {
        Self {
            descendant: false,
            axis: Axis::Child,
            test: NodeTest::Name(tag.into()),
            predicates: Vec::new(),
        }
    }

    pub fn at_position(mut self, index: usize) -> Self {
        self.predicates.push(Predicate::Index(index));
        self
    }

    /// Index of the last positional predicate, if any.
    pub fn last_index_predicate(&self) -> Option<usize> {
        self.predicates
            .iter()
            .rposition(|p| matches!(p, Predicate::Index(_)))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return match self.start {
                Start::Absolute => f.write_str("/"),
                Start::Relative => f.write_str("."),
            };
        }

        for (i, step) in self.steps.iter().enumerate() {
            let sep = match (i, self.start, step.descendant) {
                (0, Start::Relative, true) => ".//",
                (_, _, true) => "//",
                (0, Start::Absolute, false) => "/",
                (0, Start::Relative, false) => "",
                (_, _, false) => "/",
            };
            f.write_str(sep)?;
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.axis {
            Axis::Child => {}
            Axis::FollowingSibling => f.write_str("following-sibling::")?,
            Axis::Ancestor => f.write_str("ancestor::")?,
        }
        match &self.test {
            NodeTest::Name(name) => f.write_str(name)?,
            NodeTest::Wildcard => f.write_str("*")?,
            NodeTest::Text => f.write_str("text()")?,
            NodeTest::Attr(name) => write!(f, "@{name}")?,
        }
        for predicate in &self.predicates {
            match predicate {
                Predicate::Index(n) => write!(f, "[{n}]")?,
                Predicate::Exists(path) => write!(f, "[{path}]")?,
            }
        }
        Ok(())
    }
}
