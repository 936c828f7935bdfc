use crate::router::handle;
use crate::tests::utils::{body_string, data_rows, empty_rows, get, FailingSource, StaticSource};

fn table(source: &StaticSource, query: &str) -> String {
    let resp = handle(get(&format!("/programs/table?{query}")), source)
        .expect("table request failed");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn rendered_rows_follow_page_window() {
    for n in [0usize, 3, 12, 30] {
        let source = StaticSource::numbered(n);
        for s in [5usize, 10, 25] {
            for p in 0..4usize {
                let html = table(&source, &format!("rows={s}&page={p}"));
                let expected = s.min(n.saturating_sub(p * s));

                assert_eq!(data_rows(&html), expected, "n={n} s={s} p={p}");
                assert_eq!(empty_rows(&html), usize::from(expected == 0), "n={n} s={s} p={p}");
            }
        }
    }
}

#[test]
fn filter_selects_matching_titles_on_first_page() {
    let source = StaticSource::titled(&["Math Grant", "Physics Grant"]);

    let html = table(&source, "q=math&rows=5");

    assert_eq!(data_rows(&html), 1);
    assert!(html.contains("<td>Math Grant</td>"));
    assert!(!html.contains("Physics Grant"));
    assert!(html.contains("1–1 of 1"));
}

#[test]
fn filter_is_case_insensitive_substring() {
    let source = StaticSource::titled(&["Engineering Scholarship", "Arts Award"]);

    let html = table(&source, "q=eng");

    assert_eq!(data_rows(&html), 1);
    assert!(html.contains("Engineering Scholarship"));
}

#[test]
fn new_filter_without_page_starts_at_first_page() {
    let source = StaticSource::numbered(12);

    let html = table(&source, "q=grant&rows=5");

    assert!(html.contains("<td>Grant 01</td>"));
    assert!(html.contains("1–5 of 12"));
}

#[test]
fn page_size_change_returns_to_first_page() {
    let source = StaticSource::numbered(12);

    let before = table(&source, "rows=5&page=2");
    assert_eq!(data_rows(&before), 2);
    assert!(before.contains("11–12 of 12"));

    // The size selector submits rows without a page.
    let after = table(&source, "rows=25");
    assert_eq!(data_rows(&after), 12);
    assert!(after.contains("1–12 of 12"));
    assert!(after.contains(r#"<option value="25" selected>25</option>"#));
}

#[test]
fn empty_result_renders_single_full_width_row() {
    let source = StaticSource::titled(&["Math Grant"]);

    let html = table(&source, "q=biology");

    assert_eq!(data_rows(&html), 0);
    assert_eq!(empty_rows(&html), 1);
    assert!(html.contains(r#"<td colspan="15">No data found.</td>"#));
    assert_eq!(html.matches("<th>").count(), 15);
}

#[test]
fn failed_fetch_renders_empty_table() {
    let resp = handle(get("/programs/table"), &FailingSource).expect("failure must not propagate");

    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert_eq!(data_rows(&html), 0);
    assert!(html.contains(r#"<td colspan="15">No data found.</td>"#));
    assert!(html.contains("0–0 of 0"));
    assert!(!html.contains(r#"class="spinner""#));
}

#[test]
fn each_table_request_fetches_once() {
    let source = StaticSource::numbered(3);

    table(&source, "");
    assert_eq!(source.calls.get(), 1);

    table(&source, "page=1");
    assert_eq!(source.calls.get(), 2);
}

#[test]
fn out_of_range_page_is_empty_not_an_error() {
    let source = StaticSource::numbered(4);

    let html = table(&source, "page=99");

    assert_eq!(data_rows(&html), 0);
    assert_eq!(empty_rows(&html), 1);
}

#[test]
fn pagination_links_carry_filter_and_size() {
    let source = StaticSource::numbered(12);

    let first = table(&source, "q=grant&rows=5");
    assert!(first.contains(r#"href="/programs?q=grant&amp;rows=5&amp;page=1""#));
    assert!(first.contains(r#"hx-get="/programs/table?q=grant&amp;rows=5&amp;page=1""#));
    assert!(first.contains(r#"<a class="disabled previous" aria-disabled="true">"#));

    let last = table(&source, "q=grant&rows=5&page=2");
    assert!(last.contains(r#"href="/programs?q=grant&amp;rows=5&amp;page=1""#));
    assert!(last.contains(r#"<a class="disabled next" aria-disabled="true">"#));
}

#[test]
fn page_label_counts_filtered_pages() {
    let source = StaticSource::numbered(12);

    assert!(table(&source, "rows=5").contains("Page 1 of 3"));
    assert!(table(&source, "rows=5&page=2").contains("Page 3 of 3"));
    assert!(table(&source, "q=grant+01&rows=10").contains("Page 1 of 1"));
    assert!(table(&source, "q=nothing").contains("Page 1 of 1"));
}

#[test]
fn fragment_keeps_search_rows_in_step() {
    let source = StaticSource::numbered(3);

    let html = table(&source, "rows=25");

    assert!(html.contains(
        r#"<input type="hidden" id="search-rows" name="rows" value="25" hx-swap-oob="true">"#
    ));
}

#[test]
fn unsupported_page_size_is_rejected_before_fetching() {
    let source = StaticSource::numbered(3);

    let err = handle(get("/programs/table?rows=7"), &source).unwrap_err();

    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
    assert_eq!(source.calls.get(), 0);
}
