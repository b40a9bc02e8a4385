//! Client-side record filtering shared by every list page.
//!
//! A page keeps its filter criteria in a [`FilterState`] and passes it,
//! together with its fixed record sequence, to [`filter_records`]. The
//! result is the ordered sub-sequence of records satisfying every active
//! criterion. Nothing is cached: each call scans the whole sequence.

use serde::{Deserialize, Serialize};

/// Wire value of the "criterion inactive" selector option.
pub const ALL_SENTINEL: &str = "all";

/// Records that can be matched by free-text query and categorical selectors.
pub trait Filterable {
    /// Fields the free-text query is matched against (case-insensitive substring).
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical field by name, `None` when the record has no such value.
    fn field(&self, name: &str) -> Option<&str>;
}

/// One categorical criterion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selector {
    #[default]
    All,
    Exact(String),
}

impl Selector {
    /// Builds a selector from a select control value; `"all"` turns the criterion off.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Selector::All
        } else {
            Selector::Exact(value.to_string())
        }
    }

    /// Value to put back into the select control.
    pub fn as_value(&self) -> &str {
        match self {
            Selector::All => ALL_SENTINEL,
            Selector::Exact(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// Exact, case-sensitive comparison. A missing field only passes `All`.
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            Selector::All => true,
            Selector::Exact(expected) => value == Some(expected.as_str()),
        }
    }
}

/// Filter criteria of one page: free-text query plus named selectors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub selectors: Vec<(String, Selector)>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets (or replaces) the selector for `field`.
    pub fn with_selector(mut self, field: &str, selector: Selector) -> Self {
        self.set_selector(field, selector);
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_selector(&mut self, field: &str, selector: Selector) {
        match self.selectors.iter_mut().find(|(name, _)| name == field) {
            Some((_, existing)) => *existing = selector,
            None => self.selectors.push((field.to_string(), selector)),
        }
    }

    /// Current selector for `field`, `All` when it was never set.
    pub fn selector(&self, field: &str) -> Selector {
        self.selectors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, selector)| selector.clone())
            .unwrap_or_default()
    }

    /// A whitespace-only query is no text criterion. A real one is matched as typed.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Number of criteria that currently narrow the result.
    pub fn active_count(&self) -> usize {
        let query = usize::from(self.has_query());
        query + self.selectors.iter().filter(|(_, s)| !s.is_all()).count()
    }

    /// True when the state selects the whole sequence.
    pub fn is_inactive(&self) -> bool {
        self.active_count() == 0
    }
}

type Predicate<'p, T> = Box<dyn Fn(&T) -> bool + 'p>;

/// Conjunction of record predicates.
///
/// Each page either builds one from a [`FilterState`] via [`RecordFilter::for_state`]
/// or chains its own predicates with [`RecordFilter::with`].
pub struct RecordFilter<'p, T> {
    predicates: Vec<Predicate<'p, T>>,
}

impl<'p, T> Default for RecordFilter<'p, T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<'p, T> RecordFilter<'p, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate; the record must satisfy it in addition to all others.
    pub fn with(mut self, predicate: impl Fn(&T) -> bool + 'p) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, record: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(record))
    }

    /// Ordered sub-sequence of `records` accepted by every predicate.
    pub fn apply<'r>(&self, records: &'r [T]) -> Vec<&'r T> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

impl<'p, T: Filterable + 'p> RecordFilter<'p, T> {
    /// Case-insensitive substring match over the record's searchable fields.
    /// A blank query adds no predicate; otherwise surrounding spaces take part in the match.
    pub fn matching_query(self, query: &str) -> Self {
        if query.trim().is_empty() {
            return self;
        }
        let needle = query.to_lowercase();
        self.with(move |record: &T| {
            record
                .search_fields()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
    }

    /// Exact match of one categorical field. `All` adds no predicate.
    pub fn matching_selector(self, field: &str, selector: &Selector) -> Self {
        if selector.is_all() {
            return self;
        }
        let field = field.to_string();
        let selector = selector.clone();
        self.with(move |record: &T| selector.accepts(record.field(&field)))
    }

    pub fn for_state(state: &FilterState) -> Self {
        state
            .selectors
            .iter()
            .fold(Self::new().matching_query(&state.query), |filter, (field, selector)| {
                filter.matching_selector(field, selector)
            })
    }
}

/// Visible subset of `records` under `state`, in original order.
pub fn filter_records<'r, T: Filterable>(records: &'r [T], state: &FilterState) -> Vec<&'r T> {
    RecordFilter::for_state(state).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        team: &'static str,
        lead: Option<&'static str>,
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.id]
        }

        fn field(&self, name: &str) -> Option<&str> {
            match name {
                "team" => Some(self.team),
                "lead" => self.lead,
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "R1", name: "Emily Brown", team: "HR", lead: Some("Ann") },
            Row { id: "R2", name: "Mike Davis", team: "IT", lead: None },
            Row { id: "R3", name: "Remy Stone", team: "IT", lead: Some("Bob") },
            Row { id: "R4", name: "John Smith", team: "Finance", lead: None },
        ]
    }

    fn ids(result: &[&Row]) -> Vec<&'static str> {
        result.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_inactive_state_returns_everything() {
        let data = rows();
        let state = FilterState::new()
            .with_query("   ")
            .with_selector("team", Selector::from_value("all"));
        assert!(state.is_inactive());
        assert_eq!(ids(&filter_records(&data, &state)), vec!["R1", "R2", "R3", "R4"]);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let data = rows();
        let state = FilterState::new().with_query("EM");
        assert_eq!(ids(&filter_records(&data, &state)), vec!["R1", "R3"]);

        let by_id = FilterState::new().with_query("r4");
        assert_eq!(ids(&filter_records(&data, &by_id)), vec!["R4"]);
    }

    #[test]
    fn test_query_keeps_surrounding_spaces() {
        let data = rows();
        let trailing = FilterState::new().with_query("Brown ");
        assert!(filter_records(&data, &trailing).is_empty());
        assert_eq!(trailing.active_count(), 1);

        let inner = FilterState::new().with_query("y b");
        assert_eq!(ids(&filter_records(&data, &inner)), vec!["R1"]);

        let leading = FilterState::new().with_query(" stone");
        assert_eq!(ids(&filter_records(&data, &leading)), vec!["R3"]);
    }

    #[test]
    fn test_selector_is_exact_and_case_sensitive() {
        let data = rows();
        let state = FilterState::new().with_selector("team", Selector::from_value("IT"));
        assert_eq!(ids(&filter_records(&data, &state)), vec!["R2", "R3"]);

        let lower = FilterState::new().with_selector("team", Selector::from_value("it"));
        assert!(filter_records(&data, &lower).is_empty());
    }

    #[test]
    fn test_unknown_selector_value_gives_empty_result() {
        let data = rows();
        let state = FilterState::new().with_selector("team", Selector::from_value("nonexistent-value"));
        assert!(filter_records(&data, &state).is_empty());
    }

    #[test]
    fn test_missing_field_only_passes_all() {
        let data = rows();
        let state = FilterState::new().with_selector("lead", Selector::Exact("Bob".into()));
        assert_eq!(ids(&filter_records(&data, &state)), vec!["R3"]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let data = rows();
        let state = FilterState::new()
            .with_query("e")
            .with_selector("team", Selector::from_value("IT"));
        assert_eq!(ids(&filter_records(&data, &state)), vec!["R2", "R3"]);
        assert_eq!(state.active_count(), 2);

        let narrower = state.with_query("stone");
        assert_eq!(ids(&filter_records(&data, &narrower)), vec!["R3"]);
    }

    #[test]
    fn test_filtering_is_idempotent_and_order_preserving() {
        let data = rows();
        let state = FilterState::new().with_query("i");
        let once: Vec<Row> = filter_records(&data, &state).into_iter().cloned().collect();
        let twice = filter_records(&once, &state);
        assert_eq!(twice.into_iter().cloned().collect::<Vec<_>>(), once);

        let positions: Vec<usize> = once
            .iter()
            .map(|r| data.iter().position(|d| d == r).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_set_selector_replaces_previous_value() {
        let mut state = FilterState::new().with_selector("team", Selector::from_value("HR"));
        state.set_selector("team", Selector::from_value("all"));
        assert_eq!(state.selectors.len(), 1);
        assert_eq!(state.selector("team"), Selector::All);
        assert_eq!(state.selector("never-set").as_value(), ALL_SENTINEL);
    }

    #[test]
    fn test_custom_predicates_combine_with_and() {
        let data = rows();
        let filter = RecordFilter::new()
            .with(|r: &Row| r.team != "HR")
            .with(|r: &Row| r.lead.is_none());
        assert_eq!(filter.len(), 2);
        assert_eq!(ids(&filter.apply(&data)), vec!["R2", "R4"]);
        assert!(RecordFilter::<Row>::new().is_empty());
    }
}
