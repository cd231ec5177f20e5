//! Two-phase selector minimization.
//!
//! Starting from the exact address of a node, the minimizer shortens the
//! expression while the match *count* stays what it was. It never
//! re-verifies node identity after a trim: dropping a trailing positional
//! predicate can only widen the match set, so count preservation is exact
//! there, while the leading trim could in principle land on a different
//! singleton elsewhere in the document. That asymmetry is deliberate and
//! documented in `minimize_tests::keeps_count_not_identity`.

use pluck_dom::{Document, NodeId};
use pluck_path::{Path, Predicate, Selector, Start};

use crate::address::address_of;

/// Shortest expression that still matches the same number of nodes as the
/// exact address of `node` (always one, for a well-formed document).
///
/// Deterministic for a fixed document and node.
pub fn minimize(doc: &Document, node: NodeId) -> String {
    minimize_to_path(doc, node).to_string()
}

/// Structured form of [`minimize`], used by the synthesizer when it needs
/// to edit the result further (the table-row `[td]` filter).
pub(crate) fn minimize_to_path(doc: &Document, node: NodeId) -> Path {
    let mut path = address_of(doc, node);

    // An address with no positional predicate is already as anonymous as
    // it gets; trimming it further has no target count to preserve.
    if last_positional(&path).is_none() {
        return path;
    }

    // Phase 1: trailing-predicate relaxation. Walk predicates right to
    // left; a predicate whose removal widens the match set past one is
    // load-bearing and ends the phase.
    loop {
        let Some((step_idx, pred_idx)) = last_positional(&path) else {
            break;
        };
        let mut candidate = path.clone();
        candidate.steps[step_idx].predicates.remove(pred_idx);
        if count(doc, &candidate) > 1 {
            break;
        }
        path = candidate;
    }

    let target_count = count(doc, &path);

    // Phase 2: leading-segment trimming. Strip the first step and let the
    // remainder float as a descendant match; keep going while the count
    // holds, revert as soon as it moves.
    while path.steps.len() > 1 {
        let mut candidate = path.clone();
        candidate.steps.remove(0);
        candidate.steps[0].descendant = true;
        if count(doc, &candidate) != target_count {
            break;
        }
        path = candidate;
    }

    path
}

/// Rightmost positional predicate as (step index, predicate index).
fn last_positional(path: &Path) -> Option<(usize, usize)> {
    path.steps
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, step)| step.last_index_predicate().map(|p| (i, p)))
}

fn count(doc: &Document, path: &Path) -> usize {
    debug_assert_eq!(path.start, Start::Absolute);
    Selector {
        alternatives: vec![path.clone()],
    }
    .count(doc)
}

/// Drops trailing positional predicates from the final step, in place.
/// Used by the table-row template before it appends its `[td]` filter.
pub(crate) fn strip_final_positions(path: &mut Path) {
    if let Some(step) = path.steps.last_mut() {
        step.predicates
            .retain(|p| !matches!(p, Predicate::Index(_)));
    }
}
