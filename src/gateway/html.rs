//! HTML surface: book list page and creation form.
//!
//! GET renders the catalog listing; POST registers a book through the
//! catalog service and redirects back to GET. Notices travel in the redirect
//! query string, so no session state is kept between the two requests.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use serde_json::json;

use super::{client::CatalogApi, GatewayState};
use crate::models::book::Book;

/// Notices carried across the redirect
#[derive(Debug, Default, Deserialize)]
pub struct Notices {
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// Raw form fields. `publication_year` stays a string so a non-numeric value
/// becomes a user-visible notice instead of a rejected request.
#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub publication_year: String,
    pub available: Option<String>,
}

/// Display route: list the catalog, or an empty page with an error notice
/// when the catalog cannot be consulted.
pub async fn show_books(
    State(state): State<GatewayState>,
    Query(notices): Query<Notices>,
) -> Html<String> {
    let mut error = notices.error;
    let mut books: Vec<Book> = Vec::new();

    match state.catalog.list_books().await {
        Ok(upstream) if upstream.status == StatusCode::OK => {
            match serde_json::from_value(upstream.body) {
                Ok(listed) => books = listed,
                Err(e) => {
                    tracing::error!("unexpected list body from catalog: {}", e);
                    error = Some("The catalog returned an unreadable response.".to_string());
                }
            }
        }
        Ok(upstream) => {
            error = Some(format!(
                "Could not fetch books from the catalog (status {}).",
                upstream.status.as_u16()
            ));
        }
        Err(e) => {
            tracing::warn!("{}", e);
            error = Some(
                "Connection error: the catalog service is not available.".to_string(),
            );
        }
    }

    Html(render_page(&books, notices.notice.as_deref(), error.as_deref()))
}

/// Submission route: register a book, then always redirect back to `/`.
pub async fn submit_book(
    State(state): State<GatewayState>,
    Form(form): Form<BookForm>,
) -> Redirect {
    match process_submission(state.catalog.as_ref(), form).await {
        Ok(notice) => redirect_with("notice", &notice),
        Err(error) => redirect_with("error", &error),
    }
}

/// Parse the form, call the catalog, and produce the notice text.
/// A non-numeric year fails before any catalog call.
async fn process_submission(catalog: &dyn CatalogApi, form: BookForm) -> Result<String, String> {
    let publication_year: i32 = form
        .publication_year
        .trim()
        .parse()
        .map_err(|_| "The publication year must be a valid integer.".to_string())?;

    let payload = json!({
        "title": form.title,
        "author": form.author,
        "publication_year": publication_year,
        "available": checkbox_checked(form.available.as_deref()),
    });

    match catalog.create_book(&payload).await {
        Ok(upstream) if upstream.status == StatusCode::CREATED => {
            Ok("Book registered successfully!".to_string())
        }
        Ok(upstream) => Err(format!(
            "Could not register the book (status {}): {}",
            upstream.status.as_u16(),
            upstream.detail()
        )),
        Err(e) => {
            tracing::warn!("{}", e);
            Err("Connection error: check that the catalog service is running.".to_string())
        }
    }
}

/// Browsers submit `on` for a checked box and omit the field otherwise
fn checkbox_checked(value: Option<&str>) -> bool {
    value == Some("on")
}

fn redirect_with(kind: &str, message: &str) -> Redirect {
    Redirect::to(&format!("/?{}={}", kind, urlencoding::encode(message)))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_page(books: &[Book], notice: Option<&str>, error: Option<&str>) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Estante - Library Catalog</title>\n\
         </head>\n\
         <body>\n\
         <h1>Estante</h1>\n",
    );

    if let Some(notice) = notice {
        page.push_str(&format!(
            "<p class=\"notice success\">{}</p>\n",
            escape(notice)
        ));
    }
    if let Some(error) = error {
        page.push_str(&format!("<p class=\"notice error\">{}</p>\n", escape(error)));
    }

    page.push_str("<h2>Register a book</h2>\n");
    page.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <label>Title <input type=\"text\" name=\"title\" required></label>\n\
         <label>Author <input type=\"text\" name=\"author\" required></label>\n\
         <label>Publication year <input type=\"text\" name=\"publication_year\" required></label>\n\
         <label><input type=\"checkbox\" name=\"available\" checked> Available</label>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n",
    );

    page.push_str("<h2>Books</h2>\n");
    if books.is_empty() {
        page.push_str("<p>No books registered.</p>\n");
    } else {
        page.push_str(
            "<table>\n<tr><th>ID</th><th>Title</th><th>Author</th>\
             <th>Year</th><th>Status</th></tr>\n",
        );
        for book in books {
            let status = if book.available { "Available" } else { "Borrowed" };
            page.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                book.id,
                escape(&book.title),
                escape(&book.author),
                book.publication_year,
                status
            ));
        }
        page.push_str("</table>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::client::{CatalogUnreachable, MockCatalogApi, UpstreamResponse};
    use serde_json::Value;

    fn form(title: &str, year: &str, available: Option<&str>) -> BookForm {
        BookForm {
            title: title.to_string(),
            author: "Autor Teste".to_string(),
            publication_year: year.to_string(),
            available: available.map(str::to_string),
        }
    }

    fn created(payload: &Value) -> Result<UpstreamResponse, CatalogUnreachable> {
        Ok(UpstreamResponse {
            status: StatusCode::CREATED,
            body: payload.clone(),
        })
    }

    #[test]
    fn test_checkbox_mapping() {
        assert!(checkbox_checked(Some("on")));
        assert!(!checkbox_checked(Some("off")));
        assert!(!checkbox_checked(None));
    }

    #[tokio::test]
    async fn test_bad_year_fails_without_catalog_call() {
        let mut mock = MockCatalogApi::new();
        mock.expect_create_book().never();

        let err = process_submission(&mock, form("1984", "mil novecentos", None))
            .await
            .unwrap_err();
        assert!(err.contains("integer"));
    }

    #[tokio::test]
    async fn test_checked_box_sends_available_true() {
        let mut mock = MockCatalogApi::new();
        mock.expect_create_book()
            .withf(|payload| payload["available"] == true)
            .returning(|payload| created(payload));

        let notice = process_submission(&mock, form("1984", "1949", Some("on")))
            .await
            .unwrap();
        assert!(notice.contains("successfully"));
    }

    #[tokio::test]
    async fn test_absent_box_sends_available_false() {
        let mut mock = MockCatalogApi::new();
        mock.expect_create_book()
            .withf(|payload| payload["available"] == false)
            .returning(|payload| created(payload));

        process_submission(&mock, form("1984", "1949", None))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_upstream_error_carries_status_and_detail() {
        let mut mock = MockCatalogApi::new();
        mock.expect_create_book().returning(|_| {
            Ok(UpstreamResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                body: serde_json::json!({"detail": {"title": ["must not be empty"]}}),
            })
        });

        let err = process_submission(&mock, form("", "1949", None))
            .await
            .unwrap_err();
        assert!(err.contains("422"));
        assert!(err.contains("title"));
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_a_connection_notice() {
        let mut mock = MockCatalogApi::new();
        mock.expect_create_book()
            .returning(|_| Err(CatalogUnreachable("connection refused".to_string())));

        let err = process_submission(&mock, form("1984", "1949", None))
            .await
            .unwrap_err();
        assert!(err.contains("Connection error"));
    }

    #[test]
    fn test_page_escapes_book_fields() {
        let books = vec![Book {
            id: 1,
            title: "<script>alert(1)</script>".to_string(),
            author: "A & B".to_string(),
            publication_year: 2000,
            available: true,
        }];

        let page = render_page(&books, None, None);
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("A &amp; B"));
        assert!(!page.contains("<script>alert"));
    }

    #[test]
    fn test_page_shows_notices_and_empty_state() {
        let page = render_page(&[], Some("saved"), Some("down"));
        assert!(page.contains("saved"));
        assert!(page.contains("down"));
        assert!(page.contains("No books registered."));
    }
}
