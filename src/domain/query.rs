// src/domain/query.rs

use crate::domain::PageSize;
use crate::errors::ServerError;
use url::form_urlencoded;

/// The table parameters carried in a request's query string:
/// `q` (title filter), `rows` (page size) and `page` (zero-based index).
///
/// `page` is absent whenever the filter or the page size was just changed,
/// so the view lands on the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub filter: String,
    pub rows: PageSize,
    pub page: Option<usize>,
}

impl TableQuery {
    pub fn parse(query: Option<&str>) -> Result<Self, ServerError> {
        let mut parsed = TableQuery::default();

        let Some(query) = query else {
            return Ok(parsed);
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "q" => parsed.filter = value.into_owned(),
                "rows" if !value.is_empty() => {
                    let rows: usize = value
                        .parse()
                        .map_err(|_| ServerError::BadRequest(format!("invalid rows: {value}")))?;
                    parsed.rows = PageSize::from_rows(rows).ok_or_else(|| {
                        ServerError::BadRequest(format!("rows must be one of 5, 10, 25, got {rows}"))
                    })?;
                }
                "page" if !value.is_empty() => {
                    let page = value
                        .parse::<usize>()
                        .map_err(|_| ServerError::BadRequest(format!("invalid page: {value}")))?;
                    parsed.page = Some(page);
                }
                _ => {}
            }
        }

        Ok(parsed)
    }

    /// Link to `path` with the same filter and size, on `page`.
    pub fn href(&self, path: &str, page: Option<usize>) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if !self.filter.is_empty() {
            ser.append_pair("q", &self.filter);
        }
        ser.append_pair("rows", &self.rows.to_string());
        if let Some(page) = page {
            ser.append_pair("page", &page.to_string());
        }
        format!("{path}?{}", ser.finish())
    }
}
