//! Property-based tests for the list query pipeline.

use proptest::prelude::*;
use roster_seeker::{Dir, Number, QueryConfig, QueryState, Seekable, Sort, SortKind, Value};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: usize,
    name: String,
    tags: Vec<String>,
    status: String,
    score: i64,
}

impl Seekable for Row {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            "tags" => Value::List(&self.tags),
            "status" => Value::String(&self.status),
            "score" => Value::Number(Number::I64(self.score)),
            _ => Value::None,
        }
    }
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (
            "[a-zA-Z]{1,8}",
            prop::collection::vec("[a-z]{1,5}", 0..3),
            prop::sample::select(vec!["open", "closed", "paused"]),
            // Narrow range so ties are common
            0i64..5,
        ),
        0..60,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(id, (name, tags, status, score))| Row {
                id,
                name,
                tags,
                status: status.to_string(),
                score,
            })
            .collect()
    })
}

fn state_strategy() -> impl Strategy<Value = QueryState> {
    (
        prop::option::of("[a-z]{0,2}"),
        prop::option::of(prop::sample::select(vec!["open", "closed", "all"])),
        prop::option::of((
            prop::sample::select(vec!["name", "score", "status"]),
            any::<bool>(),
        )),
    )
        .prop_map(|(term, status, sort)| {
            let mut state = QueryState::new();
            if let Some(term) = term {
                state.set_search_term(term);
            }
            if let Some(status) = status {
                state.set_filter("status", status);
            }
            if let Some((field, desc)) = sort {
                let dir = if desc { Dir::Desc } else { Dir::Asc };
                state.set_sort(Sort::new(field, dir));
            }
            state
        })
}

fn config(page_size: usize) -> QueryConfig<Row> {
    QueryConfig::new()
        .searchable("name")
        .searchable("tags")
        .filterable("status")
        .sortable("name", SortKind::Text)
        .sortable("score", SortKind::Number)
        .sortable("status", SortKind::Text)
        .page_size(page_size)
        .build()
}

fn ids(rows: &[&Row]) -> Vec<usize> {
    rows.iter().map(|r| r.id).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// With no search and no filters, everything matches.
    #[test]
    fn unconstrained_query_matches_all(
        rows in rows_strategy(),
        page_size in 0usize..15,
    ) {
        let result = config(page_size).query(&rows, &QueryState::new());
        prop_assert_eq!(result.total_matches, rows.len());
    }

    /// Re-running a query over its own full result changes nothing.
    #[test]
    fn filtering_is_idempotent(
        rows in rows_strategy(),
        state in state_strategy(),
    ) {
        let config = config(0);
        let first: Vec<Row> = config.select(&rows, &state).into_iter().cloned().collect();
        let second: Vec<Row> = config.select(&first, &state).into_iter().cloned().collect();
        prop_assert_eq!(first, second);
    }

    /// Records with equal sort keys keep their input order in both directions.
    #[test]
    fn sort_is_stable(
        rows in rows_strategy(),
        desc in any::<bool>(),
    ) {
        let dir = if desc { Dir::Desc } else { Dir::Asc };
        let state = QueryState::new().with_sort(Sort::new("score", dir));
        let sorted = config(0).select(&rows, &state);

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.score == b.score {
                prop_assert!(a.id < b.id, "tie reordered: {} before {}", a.id, b.id);
            } else if desc {
                prop_assert!(a.score > b.score);
            } else {
                prop_assert!(a.score < b.score);
            }
        }
    }

    /// Concatenating every page reproduces the unpaginated result exactly.
    #[test]
    fn pages_partition_result(
        rows in rows_strategy(),
        state in state_strategy(),
        page_size in 1usize..12,
    ) {
        let config = config(page_size);
        let full = ids(&config.select(&rows, &state));

        let first = config.query(&rows, &state.clone().with_page(1));
        let mut joined = Vec::new();
        for page in 1..=first.total_pages {
            let result = config.query(&rows, &state.clone().with_page(page));
            prop_assert_eq!(result.page, page);
            prop_assert!(result.items.len() <= page_size);
            joined.extend(ids(&result.items));
        }

        prop_assert_eq!(joined, full);
    }

    /// The returned page is always within [1, total_pages].
    #[test]
    fn page_is_always_in_range(
        rows in rows_strategy(),
        state in state_strategy(),
        page in 0usize..40,
        page_size in 0usize..12,
    ) {
        let result = config(page_size).query(&rows, &state.with_page(page));
        prop_assert!(result.total_pages >= 1);
        prop_assert!(result.page >= 1);
        prop_assert!(result.page <= result.total_pages);
        if page_size > 0 {
            prop_assert_eq!(
                result.total_pages,
                result.total_matches.div_ceil(page_size).max(1)
            );
        }
    }

    /// Changing the search term or a filter always lands on page 1.
    #[test]
    fn narrowing_resets_page(
        page in 1usize..40,
        term in "[a-z]{0,4}",
        status in prop::sample::select(vec!["open", "closed", "all"]),
    ) {
        let mut state = QueryState::new().with_page(page);
        state.set_search_term(term);
        prop_assert_eq!(state.page(), 1);

        state.set_page(page);
        state.set_filter("status", status);
        prop_assert_eq!(state.page(), 1);
    }
}
