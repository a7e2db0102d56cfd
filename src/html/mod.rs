//! HTML page rendering
//!
//! Small server-rendered pages, built as plain strings. Every piece of
//! dynamic text goes through `html-escape` before it reaches a page.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::db::HistoryEntry;

/// Shared page shell
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{} - Audiobrief</title>\n\
         </head>\n\
         <body>\n{}</body>\n\
         </html>\n",
        encode_text(title),
        body
    )
}

/// Render the optional notice/error banners
fn banners(message: Option<&str>, error: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(message) = message {
        out.push_str(&format!(
            "<p class=\"notice\">{}</p>\n",
            encode_text(message)
        ));
    }
    if let Some(error) = error {
        out.push_str(&format!("<p class=\"error\">{}</p>\n", encode_text(error)));
    }
    out
}

/// Login page
pub fn login_page(message: Option<&str>, error: Option<&str>) -> String {
    let body = format!(
        "<h1>Log in</h1>\n\
         {}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\" required></label>\n\
         <label>Password <input name=\"password\" type=\"password\" required></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p>No account? <a href=\"/register\">Register</a></p>\n",
        banners(message, error)
    );
    page("Log in", &body)
}

/// Registration page
pub fn register_page(message: Option<&str>, error: Option<&str>) -> String {
    let body = format!(
        "<h1>Register</h1>\n\
         {}\
         <form method=\"post\" action=\"/register\">\n\
         <label>Username <input name=\"username\" required></label>\n\
         <label>Password <input name=\"password\" type=\"password\" required></label>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         <p>Already registered? <a href=\"/login\">Log in</a></p>\n",
        banners(message, error)
    );
    page("Register", &body)
}

/// Home page: upload form, the freshly produced summary (if any), and the
/// user's history newest-first.
pub fn home_page(
    username: &str,
    summary: Option<&[String]>,
    error: Option<&str>,
    history: &[HistoryEntry],
) -> String {
    let mut body = format!(
        "<h1>Audiobrief</h1>\n\
         <p>Logged in as <strong>{}</strong> &middot; <a href=\"/logout\">Log out</a></p>\n\
         <form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"file\" accept=\"application/pdf\">\n\
         <button type=\"submit\">Summarize</button>\n\
         </form>\n",
        encode_text(username)
    );

    body.push_str(&banners(None, error));

    if let Some(sentences) = summary {
        body.push_str("<h2>Summary</h2>\n<ol>\n");
        for sentence in sentences {
            body.push_str(&format!("<li>{}</li>\n", encode_text(sentence)));
        }
        body.push_str("</ol>\n");
    }

    body.push_str("<h2>History</h2>\n");
    if history.is_empty() {
        body.push_str("<p>No uploads yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for entry in history {
            body.push_str(&format!(
                "<li>\n\
                 <strong>{}</strong> <em>{}</em>\n\
                 <pre>{}</pre>\n\
                 <audio controls src=\"/history/{}/audio\"></audio>\n\
                 </li>\n",
                encode_text(&entry.pdf_filename),
                encode_text(&entry.created_at),
                encode_text(&entry.summary),
                encode_double_quoted_attribute(&entry.id),
            ));
        }
        body.push_str("</ul>\n");
    }

    page("Home", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, filename: &str, summary: &str) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            pdf_filename: filename.to_string(),
            summary: summary.to_string(),
            created_at: "2026-08-07T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn dynamic_text_is_escaped() {
        let rows = vec![entry("e1", "<script>alert(1)</script>.pdf", "a & b")];
        let html = home_page("<bob>", None, None, &rows);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;bob&gt;"));
    }

    #[test]
    fn summary_sentences_are_listed() {
        let html = home_page("alice", Some(&["First.".to_string()]), None, &[]);
        assert!(html.contains("<li>First.</li>"));
    }

    #[test]
    fn history_links_audio_by_entry_id() {
        let rows = vec![entry("abc-123", "doc.pdf", "Summary.")];
        let html = home_page("alice", None, None, &rows);
        assert!(html.contains("/history/abc-123/audio"));
    }

    #[test]
    fn error_banner_rendered() {
        let html = login_page(None, Some("Invalid credentials."));
        assert!(html.contains("Invalid credentials."));
        assert!(html.contains("class=\"error\""));
    }
}
