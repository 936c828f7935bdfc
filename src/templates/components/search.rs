use crate::domain::TableQuery;
use crate::templates::pages::programs::{PAGE_PATH, TABLE_PATH};
use maud::{html, Markup};

/// Title search. Its requests never carry `page`, so every edit lands on page 0.
/// The hidden `rows` field is refreshed by each table fragment.
pub fn search_box(query: &TableQuery) -> Markup {
    html! {
        div class="card-body search" {
            form
                method="get"
                action=(PAGE_PATH)
                hx-get=(TABLE_PATH)
                hx-target="#programs-table"
                hx-swap="innerHTML"
                hx-trigger="input changed delay:300ms from:#search, submit"
            {
                input type="hidden" id="search-rows" name="rows" value=(query.rows.rows());
                label class="sr-only" for="search" { "Search by Title" }
                input
                    type="text"
                    id="search"
                    name="q"
                    value=(query.filter)
                    placeholder="Search by Title"
                    autocomplete="off";
            }
        }
    }
}
