use crate::domain::{PageSize, PageState, TableQuery};
use crate::templates::pages::programs::{PAGE_PATH, TABLE_PATH};
use maud::{html, Markup};

/// Rows-per-page selector, "from–to of total" and "Page x of y" labels,
/// previous/next links.
///
/// Changing the size submits `rows` without `page`; the links carry all three.
pub fn pagination_control(filter: &str, pages: PageState, total: usize) -> Markup {
    let query = TableQuery {
        filter: filter.to_string(),
        rows: pages.page_size(),
        page: None,
    };
    let (from, to) = pages.displayed_range(total);
    let page = pages.page();
    let page_count = pages.page_count(total).max(1);

    html! {
        div class="pagination" {
            form
                class="rows-per-page"
                method="get"
                action=(PAGE_PATH)
                hx-get=(TABLE_PATH)
                hx-target="#programs-table"
                hx-swap="innerHTML"
                hx-trigger="change"
                hx-include="#search"
            {
                label for="rows" { "Rows per page:" }
                " "
                select id="rows" name="rows" {
                    @for size in PageSize::OPTIONS {
                        option value=(size.rows()) selected[size == pages.page_size()] { (size.rows()) }
                    }
                }
                noscript {
                    input type="hidden" name="q" value=(filter);
                    " "
                    button type="submit" { "Apply" }
                }
            }

            span class="displayed-rows" { (from) "–" (to) " of " (total) }

            span class="page-number" { "Page " (page.saturating_add(1)) " of " (page_count) }

            nav class="page-links" aria-label="Pagination" {
                @if pages.has_previous() {
                    (page_link(&query, page.saturating_sub(1), "‹ Previous", "previous"))
                } @else {
                    a class="disabled previous" aria-disabled="true" { "‹ Previous" }
                }
                " "
                @if pages.has_next(total) {
                    (page_link(&query, page + 1, "Next ›", "next"))
                } @else {
                    a class="disabled next" aria-disabled="true" { "Next ›" }
                }
            }
        }
    }
}

fn page_link(query: &TableQuery, page: usize, label: &str, class: &str) -> Markup {
    html! {
        a
            class=(class)
            href=(query.href(PAGE_PATH, Some(page)))
            hx-get=(query.href(TABLE_PATH, Some(page)))
            hx-target="#programs-table"
            hx-swap="innerHTML"
        { (label) }
    }
}
