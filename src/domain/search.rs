//! Case-insensitive free-text filtering and field sorting over fetched collections.
//!
//! Both functions are pure: they borrow the input, never reorder or mutate it,
//! and keep no state between calls, so callers may invoke them on every
//! keystroke.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// Typed value of a named record field.
///
/// The `Display` form is what search terms are matched against.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
        }
    }
}

/// Exposes record fields by their column name.
pub trait Searchable {
    /// Returns the value of `name`, or `None` when the field is unknown or null.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Sort direction for [`sort_by_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Returns the items where at least one of `fields` contains `term`, ignoring case.
///
/// An empty `term` returns the whole collection. Absent fields never match.
///
/// # Examples
///
/// ```ignore
/// let found = filter(&teachers, "math", &["name", "specialty"]);
/// ```
pub fn filter<T>(items: &[T], term: &str, fields: &[&str]) -> Vec<T>
where
    T: Searchable + Clone,
{
    if term.is_empty() {
        return items.to_vec();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| matches(*item, &needle, fields))
        .cloned()
        .collect()
}

fn matches<T: Searchable>(item: &T, needle: &str, fields: &[&str]) -> bool {
    fields.iter().any(|name| {
        item.field(name)
            .is_some_and(|value| value.to_string().to_lowercase().contains(needle))
    })
}

/// Returns a copy of `items` stably sorted by `field`.
///
/// Items lacking the field sort after every item that has it, in both directions.
pub fn sort_by_field<T>(items: &[T], field: &str, direction: SortDirection) -> Vec<T>
where
    T: Searchable + Clone,
{
    let mut keyed: Vec<(Option<FieldValue>, &T)> =
        items.iter().map(|item| (item.field(field), item)).collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Search term plus optional sort key, as entered in a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub sort_by: Option<String>,
    pub direction: SortDirection,
}

impl ListQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(field.into());
        self.direction = direction;
        self
    }

    /// Filters `items` on `fields`, then sorts if a key is set.
    pub fn apply<T>(&self, items: &[T], fields: &[&str]) -> Vec<T>
    where
        T: Searchable + Clone,
    {
        let found = filter(items, self.search.trim(), fields);
        match &self.sort_by {
            Some(field) => sort_by_field(&found, field, self.direction),
            None => found,
        }
    }
}
