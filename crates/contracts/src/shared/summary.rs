//! Counters behind the stat cards on list pages.

use super::record_filter::Filterable;

pub fn count_where<T>(records: &[T], pred: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|record| pred(record)).count()
}

/// Number of records whose categorical `field` equals `value` exactly.
pub fn count_by_field<T: Filterable>(records: &[T], field: &str, value: &str) -> usize {
    count_where(records, |record| record.field(field) == Some(value))
}

/// Distinct values of `field` in first-seen order; records without the field are skipped.
pub fn distinct_values<'r, T: Filterable>(records: &'r [T], field: &str) -> Vec<&'r str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in records.iter().filter_map(|record| record.field(field)) {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, Option<&'static str>);

    impl Filterable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }

        fn field(&self, name: &str) -> Option<&str> {
            match name {
                "group" => self.1,
                _ => None,
            }
        }
    }

    #[test]
    fn test_count_by_field() {
        let items = vec![Item("a", Some("x")), Item("b", Some("y")), Item("c", Some("x"))];
        assert_eq!(count_by_field(&items, "group", "x"), 2);
        assert_eq!(count_by_field(&items, "group", "z"), 0);
        assert_eq!(count_where(&items, |i| i.0 != "a"), 2);
    }

    #[test]
    fn test_distinct_values_keeps_first_seen_order() {
        let items = vec![
            Item("a", Some("y")),
            Item("b", None),
            Item("c", Some("x")),
            Item("d", Some("y")),
        ];
        assert_eq!(distinct_values(&items, "group"), vec!["y", "x"]);
    }
}
