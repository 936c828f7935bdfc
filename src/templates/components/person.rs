use crate::loader::Person;
use maud::{html, Markup};

/// Name / position / email / research / office, one labeled line each.
pub fn person_block(person: &Person) -> Markup {
    html! {
        b { "Name:" } " " (person.name)
        br;
        b { "Position:" } " " (person.position)
        br;
        b { "Email:" } " " (person.email)
        br;
        b { "Research:" } " " (person.research)
        br;
        b { "Office:" } " " (person.office)
    }
}

/// A contact professor entry, closed by a rule so consecutive entries stay apart.
pub fn professor_block(person: &Person) -> Markup {
    html! {
        div class="professor" {
            (person_block(person))
            br;
            hr;
        }
    }
}
