pub mod programs;

pub use programs::{
    programs_fragment, programs_full_page, programs_page, PAGE_PATH, TABLE_PATH,
};
