use crate::imports::*;
use std::num::NonZeroUsize;

mod extract;
mod frequency;

pub use extract::{GeoPoint, extract_coordinates, extract_numeric, extract_speeds, extract_valid};
pub use frequency::FrequencyTable;

/*
    Aggregator - pure functions over extracted values and records.
    (PUBLIC METHODS)
    * distinct_sorted - Deduplicated, ascending lexicographic
    * count_by_value - Frequency table, keys kept in first-seen order
    * top_n - Highest counts first, truncated to n, ties stay in first-seen order
    * ranked - The whole table highest counts first
    * search_substring - Case-insensitive containment match on one field
*/
pub fn distinct_sorted<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(Into::into)
        .collect::<std::collections::BTreeSet<String>>()
        .into_iter()
        .collect()
}

pub fn count_by_value<I, S>(values: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = FrequencyTable::new();
    for value in values {
        table.increment(value.into());
    }
    table
}

pub fn top_n(table: &FrequencyTable, n: NonZeroUsize) -> Vec<(String, usize)> {
    let mut ranking = ranked(table);
    ranking.truncate(n.get());
    ranking
}

pub fn ranked(table: &FrequencyTable) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = table
        .iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    // sort_by is stable, equal counts keep first-seen order
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

pub fn search_substring<'a>(
    records: &'a [Record],
    field: &impl FieldKey,
    query: &str,
) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    let matches: Vec<&Record> = records
        .iter()
        .filter(|record| {
            record
                .valid_text(field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
        .collect();

    tracing::debug!(
        field = %field.field_key(),
        query = %query,
        matches = matches.len(),
        "Substring search complete"
    );
    matches
}
