/// Helpers shared by the list pages (filter state assembly, match highlighting)
use contracts::shared::record_filter::{filter_records, Filterable, FilterState, Selector};
use leptos::prelude::*;

/// Builds the filter state from the raw control values of a page.
///
/// `selectors` pairs a field name with the current select value; the "all"
/// option turns the criterion off.
pub fn filter_state_from(query: &str, selectors: &[(&str, String)]) -> FilterState {
    selectors
        .iter()
        .fold(FilterState::new().with_query(query), |state, (field, value)| {
            state.with_selector(field, Selector::from_value(value))
        })
}

/// Owned copy of the visible records, ready to keep in a `Memo`
pub fn visible_records<T: Filterable + Clone>(records: &[T], state: &FilterState) -> Vec<T> {
    filter_records(records, state).into_iter().cloned().collect()
}

/// Splits `text` into (fragment, is_match) pairs for a case-insensitive `needle`
pub fn split_matches(text: &str, needle: &str) -> Vec<(String, bool)> {
    if needle.trim().is_empty() {
        return vec![(text.to_string(), false)];
    }
    let needle = needle.to_lowercase();

    // Lower-casing may change byte lengths per char, so keep (lowered, original)
    // offsets of every char boundary.
    let mut lowered = String::with_capacity(text.len());
    let mut boundaries = Vec::new();
    for (offset, ch) in text.char_indices() {
        boundaries.push((lowered.len(), offset));
        lowered.extend(ch.to_lowercase());
    }
    boundaries.push((lowered.len(), text.len()));
    let original_at = |pos: usize| {
        boundaries
            .iter()
            .find(|(lowered_pos, _)| *lowered_pos == pos)
            .map(|(_, offset)| *offset)
    };

    let mut parts = Vec::new();
    let mut last_pos = 0;
    let mut search_from = 0;
    while let Some(pos) = lowered[search_from..].find(&needle) {
        let start = search_from + pos;
        let end = start + needle.len();
        match (original_at(start), original_at(end)) {
            (Some(from), Some(to)) => {
                if from > last_pos {
                    parts.push((text[last_pos..from].to_string(), false));
                }
                parts.push((text[from..to].to_string(), true));
                last_pos = to;
                search_from = end;
            }
            // Match covers only part of a lowered char
            _ => {
                search_from = start + lowered[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Wraps case-insensitive matches of `filter` in `<mark>`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = split_matches(text, filter)
        .into_iter()
        .map(|(fragment, is_match)| {
            if is_match {
                view! { <mark class="search-highlight">{fragment}</mark> }.into_any()
            } else {
                view! { <span>{fragment}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_employee::EMPLOYEES;

    #[test]
    fn test_filter_state_from_controls() {
        let state = filter_state_from(
            " em ",
            &[("department", "all".to_string()), ("status", "active".to_string())],
        );
        assert_eq!(state.active_count(), 2);
        assert_eq!(state.selector("department"), Selector::All);
        assert_eq!(state.selector("status"), Selector::Exact("active".to_string()));
    }

    #[test]
    fn test_visible_records_keep_order() {
        let state = filter_state_from("", &[("department", "Finance".to_string())]);
        let visible = visible_records(&EMPLOYEES, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].department, "Finance");

        let all = visible_records(&EMPLOYEES, &FilterState::new());
        assert_eq!(all, *EMPLOYEES);
    }

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Emily Brown", "em"),
            vec![("Em".to_string(), true), ("ily Brown".to_string(), false)]
        );
        assert_eq!(split_matches("abc", ""), vec![("abc".to_string(), false)]);
        assert_eq!(split_matches("abab", "b").iter().filter(|(_, m)| *m).count(), 2);
    }

    #[test]
    fn test_split_matches_keeps_surrounding_spaces() {
        assert_eq!(
            split_matches("Emily Brown", "y b"),
            vec![
                ("Emil".to_string(), false),
                ("y B".to_string(), true),
                ("rown".to_string(), false),
            ]
        );
        assert_eq!(
            split_matches("Emily Brown", "Brown "),
            vec![("Emily Brown".to_string(), false)]
        );
        assert_eq!(split_matches("Emily", "  "), vec![("Emily".to_string(), false)]);
    }

    #[test]
    fn test_split_matches_with_changing_char_widths() {
        // 'İ' lowers to two chars, 'ẞ' to a shorter 'ß'
        assert_eq!(
            split_matches("İẞ", "ß"),
            vec![("İ".to_string(), false), ("ẞ".to_string(), true)]
        );
        assert_eq!(split_matches("İx", "i"), vec![("İx".to_string(), false)]);
        assert_eq!(
            split_matches("Straße", "SS"),
            vec![("Straße".to_string(), false)]
        );
    }
}
