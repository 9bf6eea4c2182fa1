//! View Composition
//!
//! Derives the displayed collection from the base collection,
//! the search term and the sort spec.

use std::cmp::Ordering;

use crate::record::Record;
use crate::search::matches;
use crate::sort::{SortDirection, SortSpec};

/// Filter `base` by `term`, then order the survivors by `spec`.
///
/// Returns references into `base`; the input is never reordered.
/// The sort is stable, so records with equal keys keep their base order
/// in either direction.
pub fn compose<'a>(base: &'a [Record], term: &str, spec: SortSpec) -> Vec<&'a Record> {
    let mut result: Vec<&Record> = base.iter().filter(|record| matches(record, term)).collect();

    result.sort_by(|a, b| compare(a, b, spec));
    result
}

fn compare(a: &Record, b: &Record, spec: SortSpec) -> Ordering {
    let ordering = spec.key.field(a).cmp(spec.key.field(b));
    match spec.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
