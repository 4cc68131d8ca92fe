//! Common test utilities

/// A page exercising every extraction rule at once: a padded title,
/// head and inline noise tags, and multiple text fragments.
pub const SAMPLE_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>  Rust in Production  </title>
  <style>body { color: red; }</style>
  <script>var beacon = "tracking";</script>
</head>
<body>
  <h1>Rust in Production</h1>
  <p>Fast and reliable services.</p>
  <script>console.log("inline analytics");</script>
  <noscript>Please enable JavaScript.</noscript>
  <p>Second paragraph.</p>
</body>
</html>"#;

/// Build a minimal page with the given title and one paragraph
#[allow(dead_code)]
pub fn page_html(title: &str, body: &str) -> String {
    format!("<html><head><title>{title}</title></head><body><p>{body}</p></body></html>")
}

/// Build a page that has no title element at all
#[allow(dead_code)]
pub fn untitled_page_html(body: &str) -> String {
    format!("<html><body><p>{body}</p></body></html>")
}
