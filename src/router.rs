use crate::domain::{ProgramsView, TableQuery};
use crate::errors::ServerError;
use crate::loader::ListingSource;
use crate::responses::ResultResp;
use crate::responses::{html_response, text_response};
use crate::templates;
use crate::templates::pages::{PAGE_PATH, TABLE_PATH};
use astra::Request;
use log::debug;

pub fn handle(req: Request, source: &dyn ListingSource) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    debug!("{method} {}", req.uri());

    match (method, path) {
        ("GET", "/") => {
            let query = TableQuery::parse(req.uri().query())?;
            html_response(templates::pages::programs_page(&query))
        }

        // One view per request: activate (single fetch), apply the table
        // parameters, render.
        ("GET", TABLE_PATH) => {
            let query = TableQuery::parse(req.uri().query())?;
            let view = mount_view(source, &query);
            html_response(templates::pages::programs_fragment(&view))
        }

        ("GET", PAGE_PATH) => {
            let query = TableQuery::parse(req.uri().query())?;
            let view = mount_view(source, &query);
            html_response(templates::pages::programs_full_page(&query, &view))
        }

        ("GET", "/health") => text_response("ok"),

        _ => Err(ServerError::NotFound),
    }
}

fn mount_view(source: &dyn ListingSource, query: &TableQuery) -> ProgramsView {
    let mut view = ProgramsView::new();
    view.activate(source);
    view.apply(query);
    view
}
