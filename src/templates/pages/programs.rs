// templates/pages/programs.rs

use crate::domain::{ProgramsView, TableQuery, ViewState};
use crate::loader::Listing;
use crate::templates::{
    button,
    components::{pagination_control, person_block, professor_block, search_box, spinner},
    desktop_layout,
};
use maud::{html, Markup};

pub const TABLE_PATH: &str = "/programs/table";
/// Full page with the table rendered in place, for browsers without scripts.
pub const PAGE_PATH: &str = "/programs";

pub const COLUMNS: [&str; 15] = [
    "Title",
    "Country",
    "University",
    "Major",
    "Funding",
    "Type",
    "Level",
    "Language Tests",
    "Images",
    "Course Value",
    "University Details",
    "Qualifications",
    "University Website",
    "Department Head",
    "Contact Professors",
];

pub const EMPTY_MESSAGE: &str = "No data found.";

/// The page shell. The table itself is fetched by the browser once the shell
/// has loaded, so the spinner stays up while the listings feed is read.
pub fn programs_page(query: &TableQuery) -> Markup {
    page_shell(
        query,
        html! {
            div
                id="programs-table"
                hx-get=(query.href(TABLE_PATH, query.page))
                hx-trigger="load"
                hx-swap="innerHTML"
            {
                (spinner())
                noscript {
                    p class="card-body" {
                        a href=(query.href(PAGE_PATH, query.page)) { "Show programs" }
                    }
                }
            }
        },
    )
}

/// The same shell with an already loaded view rendered inside it.
pub fn programs_full_page(query: &TableQuery, view: &ProgramsView) -> Markup {
    page_shell(
        query,
        html! {
            div id="programs-table" {
                (programs_table(view))
            }
        },
    )
}

fn page_shell(query: &TableQuery, table: Markup) -> Markup {
    desktop_layout(
        "Programs",
        html! {
            main class="container" {
                div class="page-title" {
                    h1 { "Programs" }
                    (button("Add Program"))
                }

                div class="card" {
                    (search_box(query))
                    (table)
                }
            }
        },
    )
}

/// What the table endpoint returns: the table plus an out-of-band update of
/// the search form's `rows` field, so later searches keep the chosen size.
pub fn programs_fragment(view: &ProgramsView) -> Markup {
    html! {
        (programs_table(view))
        input
            type="hidden"
            id="search-rows"
            name="rows"
            value=(view.pages().page_size().rows())
            hx-swap-oob="true";
    }
}

/// Table fragment: spinner while loading, otherwise the visible rows and the
/// pagination control.
pub fn programs_table(view: &ProgramsView) -> Markup {
    let state = view.state();
    if state == ViewState::Loading {
        return spinner();
    }

    let visible = view.visible();
    let total = view.filtered().len();

    html! {
        div class="table-scroll" {
            table class="programs" border="1" {
                thead {
                    tr {
                        @for column in COLUMNS {
                            th { (column) }
                        }
                    }
                }
                tbody {
                    @for listing in &visible {
                        (listing_row(listing))
                    }
                    @if state == ViewState::LoadedEmpty {
                        tr class="empty-row" {
                            td colspan=(COLUMNS.len()) { (EMPTY_MESSAGE) }
                        }
                    }
                }
            }
        }

        (pagination_control(view.filter(), view.pages(), total))
    }
}

pub fn listing_row(listing: &Listing) -> Markup {
    html! {
        tr class="listing-row" data-key=[listing.row_key()] {
            td { (listing.title) }
            td { (listing.country) }
            td { (listing.university) }
            td { (listing.major) }
            td { (listing.funding) }
            td { (listing.program_type) }
            td { (listing.level) }
            td { (listing.language_tests_text()) }
            td { (listing.images_text()) }
            td { (listing.course_value) }
            td { (listing.university_details) }
            td { (listing.qualifications) }
            td {
                a href=(listing.university_website) target="_blank" rel="noopener noreferrer" {
                    (listing.university_website)
                }
            }
            td { (person_block(&listing.department_head)) }
            td {
                @for professor in &listing.contact_professors {
                    (professor_block(professor))
                }
            }
        }
    }
}
