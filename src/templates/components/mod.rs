use maud::{html, Markup};

pub mod error;
pub mod pagination;
pub mod person;
pub mod search;

pub use error::error_page;
pub use pagination::pagination_control;
pub use person::{person_block, professor_block};
pub use search::search_box;

pub fn button(label: &str) -> Markup {
    html! {
        button type="button" class="btn" { (label) }
    }
}

pub fn spinner() -> Markup {
    html! {
        div class="spinner-box" {
            div class="spinner" role="progressbar" aria-label="Loading" {}
        }
    }
}
