pub mod filter;
pub mod paginator;
pub mod query;
pub mod view;

pub use filter::filter_by_title;
pub use paginator::{PageSize, PageState};
pub use query::TableQuery;
pub use view::{ProgramsView, ViewState};
