//! The filter pipeline: narrow a static collection by criteria
//!
//! This is the one piece of logic every page of the source system repeats:
//! free-text search over designated fields, AND-combined categorical
//! selectors, and an optional sort. The pipeline is a pure function — it
//! holds no state, never mutates its input, and runs to completion
//! synchronously within the caller's turn.

use crate::core::criteria::{Criteria, SortDirection, SortSpec};
use crate::core::error::CriteriaError;
use crate::core::field::FieldValue;
use crate::core::paginate::{Page, PageRequest, paginate};
use crate::core::record::Record;
use std::cmp::Ordering;

/// Whether a record matches the free-text query.
///
/// An empty query matches everything; otherwise at least one searchable
/// field must contain the query as a case-insensitive substring. Records
/// missing every searchable field never match a non-empty query.
pub fn matches_query<R: Record>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    R::searchable_fields().iter().any(|field| {
        record
            .field_value(field)
            .is_some_and(|value| value.contains_ignore_case(query))
    })
}

/// Whether a record satisfies every active selector.
///
/// Selectors compare exactly and case-sensitively. A record missing a
/// constrained field does not match (fail-closed), and an unknown selector
/// value simply matches nothing.
pub fn matches_selectors<R: Record>(record: &R, criteria: &Criteria) -> bool {
    criteria.active_selectors().all(|(field, value)| {
        record
            .field_value(field)
            .is_some_and(|field_value| field_value.matches_tag(value))
    })
}

/// The comparable sort key a record contributes for a field.
///
/// Absent fields, nulls (an `Option::None` field comes through as
/// `FieldValue::Null`), and NaN yield no key; keyless records sort after
/// keyed ones in their original relative order.
fn sort_key<R: Record>(record: &R, field: &str) -> Option<FieldValue> {
    match record.field_value(field) {
        None | Some(FieldValue::Null) => None,
        Some(FieldValue::Float(f)) if f.is_nan() => None,
        Some(value) => Some(value),
    }
}

// Cross-family keys group by family so the comparator stays a total order.
fn family_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Boolean(_) => 0,
        FieldValue::Integer(_) | FieldValue::Float(_) => 1,
        FieldValue::String(_) => 2,
        FieldValue::DateTime(_) => 3,
        FieldValue::Null => 4,
    }
}

fn compare_keys(
    a: &Option<FieldValue>,
    b: &Option<FieldValue>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => match left.compare(right) {
            Some(ordering) => match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            },
            None => family_rank(left).cmp(&family_rank(right)),
        },
        // Keyless records go last regardless of direction
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_results<R: Record>(results: Vec<R>, spec: &SortSpec) -> Vec<R> {
    let mut keyed: Vec<(Option<FieldValue>, R)> = results
        .into_iter()
        .map(|record| (sort_key(&record, &spec.field), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, spec.direction));
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Produce the Result Sequence for a collection and criteria.
///
/// Returns a newly constructed sequence; the source is never mutated.
/// Matching records keep their original relative order unless an explicit
/// sort criterion is supplied, in which case a stable sort by the sort
/// field is applied. An empty result is a normal outcome, not an error.
///
/// O(n × f) over n records and f searchable fields; the collections this
/// serves are tens of records, so no indexing is justified.
pub fn apply<R: Record>(records: &[R], criteria: &Criteria) -> Vec<R> {
    let mut results: Vec<R> = records
        .iter()
        .filter(|record| {
            matches_query(*record, &criteria.query) && matches_selectors(*record, criteria)
        })
        .cloned()
        .collect();

    if let Some(spec) = &criteria.sort {
        results = sort_results(results, spec);
    }

    tracing::debug!(
        collection = R::collection(),
        total = records.len(),
        matched = results.len(),
        query = %criteria.query,
        "filter pass complete"
    );

    results
}

/// Strict variant of [`apply`] that rejects criteria naming fields outside
/// the record's declared schema.
///
/// The infallible [`apply`] treats unknown fields as non-matching, which is
/// the behavior a display layer wants; this variant is for callers wiring
/// criteria from untrusted or hand-written sources who would rather hear
/// about a typo than silently get an empty result.
pub fn apply_checked<R: Record>(
    records: &[R],
    criteria: &Criteria,
) -> Result<Vec<R>, CriteriaError> {
    for (field, _) in criteria.active_selectors() {
        if !R::filterable_fields().contains(&field) {
            return Err(CriteriaError::UnknownField {
                field: field.to_string(),
                collection: R::collection().to_string(),
            });
        }
    }

    if let Some(spec) = &criteria.sort {
        if !R::sortable_fields().contains(&spec.field.as_str()) {
            return Err(CriteriaError::UnknownField {
                field: spec.field.clone(),
                collection: R::collection().to_string(),
            });
        }
    }

    Ok(apply(records, criteria))
}

/// An immutable, insertion-ordered record collection.
///
/// Wraps the static source sequence a page is loaded with. The collection
/// is never mutated after construction; every [`Collection::apply`] call
/// derives a fresh result from the same source.
#[derive(Debug, Clone)]
pub struct Collection<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Collection<R> {
    /// Wrap a static source sequence
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// The full source sequence, in insertion order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Produce the Result Sequence for the given criteria
    pub fn apply(&self, criteria: &Criteria) -> Vec<R> {
        apply(&self.records, criteria)
    }

    /// Strict variant rejecting criteria with unknown fields
    pub fn apply_checked(&self, criteria: &Criteria) -> Result<Vec<R>, CriteriaError> {
        apply_checked(&self.records, criteria)
    }

    /// Filter, then slice the result into one page
    pub fn apply_paged(&self, criteria: &Criteria, request: PageRequest) -> Page<R> {
        let results = self.apply(criteria);
        paginate(&results, request)
    }
}

impl<R: Record> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
