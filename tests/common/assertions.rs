//! Domain-specific assertion macros for rolo harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! search-contract guarantee was violated.

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that a result set contains a contact with the given name.
///
/// ```rust
/// assert_results_contain!(page.results, "Jane Doe");
/// ```
#[macro_export]
macro_rules! assert_results_contain {
    ($results:expr, $name:expr) => {{
        let results: &[rolo_core::Contact] = &$results;
        let name: &str = $name;
        if !results.iter().any(|c| c.name == name) {
            panic!(
                "assert_results_contain! failed: no contact named {:?}.\n  Got: {:?}",
                name,
                results.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
            );
        }
    }};
}

/// Assert that every contact in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(page.results, |c| c.country == "USA");
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results: &[rolo_core::Contact] = &$results;
        fn __constrain_pred<F: Fn(&rolo_core::Contact) -> bool>(f: F) -> F {
            f
        }
        let pred = __constrain_pred($pred);
        let failing: Vec<_> = results.iter().filter(|c| !pred(*c)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} contacts did not satisfy predicate.\n  First failing: {:?}",
                failing.len(),
                results.len(),
                failing[0]
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Page assertions
// ---------------------------------------------------------------------------

/// Assert a page's slice length and total match count at once.
///
/// ```rust
/// assert_page!(page, len = 15, total = 55);
/// ```
#[macro_export]
macro_rules! assert_page {
    ($page:expr, len = $len:expr, total = $total:expr) => {{
        let page: &rolo_core::SearchPage = &$page;
        if page.results.len() != $len || page.total != $total {
            panic!(
                "assert_page! failed:\n  expected: len {} / total {}\n  actual:   len {} / total {}",
                $len,
                $total,
                page.results.len(),
                page.total
            );
        }
    }};
}
