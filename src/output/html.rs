//! HTML page rendering
//!
//! Pages are assembled with plain string formatting. Every value that comes
//! from the analyzed page or the request goes through [`escape_html`].

use crate::analyzer::AnalysisResult;

const STYLE: &str = "body{font-family:sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:.3rem .6rem;text-align:left}\
details{margin:.5rem 0}";

/// Escapes text for use in HTML element content and quoted attributes
///
/// # Examples
///
/// ```
/// use web_analyzer::output::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps a body fragment into a complete page
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

/// Renders the page with the URL submission form
pub fn render_form_page() -> String {
    let body = "<h1>Web Page Analyzer</h1>\n\
        <form method=\"post\" action=\"/\">\n\
        <label for=\"url\">URL to analyze</label>\n\
        <input type=\"text\" id=\"url\" name=\"url\" placeholder=\"https://example.com\" size=\"60\" required>\n\
        <button type=\"submit\">Analyze</button>\n\
        </form>\n";

    page("Web Page Analyzer", body)
}

/// Renders a collapsible list of links
fn link_list(label: &str, links: &[String]) -> String {
    let mut html = format!(
        "<details>\n<summary>{} ({})</summary>\n<ul>\n",
        escape_html(label),
        links.len()
    );
    for link in links {
        let link = escape_html(link);
        html.push_str(&format!("<li><a href=\"{0}\">{0}</a></li>\n", link));
    }
    html.push_str("</ul>\n</details>\n");
    html
}

/// Renders the analysis result page
///
/// # Arguments
///
/// * `url` - The analyzed page URL
/// * `result` - The analysis result
pub fn render_result_page(url: &str, result: &AnalysisResult) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<h1>Analysis of <a href=\"{0}\">{0}</a></h1>\n",
        escape_html(url)
    ));

    body.push_str("<table>\n");
    body.push_str(&format!(
        "<tr><th>HTML version</th><td>{}</td></tr>\n",
        escape_html(result.html_version.label())
    ));
    body.push_str(&format!(
        "<tr><th>Title</th><td>{}</td></tr>\n",
        escape_html(&result.title)
    ));
    body.push_str(&format!(
        "<tr><th>Login form</th><td>{}</td></tr>\n",
        if result.has_login_form { "Yes" } else { "No" }
    ));
    body.push_str(&format!(
        "<tr><th>Internal links</th><td>{}</td></tr>\n",
        result.internal_links.len()
    ));
    body.push_str(&format!(
        "<tr><th>External links</th><td>{}</td></tr>\n",
        result.external_links.len()
    ));
    body.push_str(&format!(
        "<tr><th>Inaccessible links</th><td>{}</td></tr>\n",
        result.inaccessible_link_count
    ));
    body.push_str("</table>\n");

    body.push_str("<h2>Headings</h2>\n");
    if result.headings.is_empty() {
        body.push_str("<p>No headings found.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Level</th><th>Count</th><th>Texts</th></tr>\n");
        for (tag, texts) in &result.headings {
            let items: String = texts
                .iter()
                .map(|text| format!("<li>{}</li>", escape_html(text.trim())))
                .collect();
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td><ul>{}</ul></td></tr>\n",
                escape_html(tag),
                texts.len(),
                items
            ));
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Links</h2>\n");
    body.push_str(&link_list("Internal links", &result.internal_links));
    body.push_str(&link_list("External links", &result.external_links));

    body.push_str("<p><a href=\"/\">Analyze another page</a></p>\n");

    page(&format!("Analysis of {}", url), &body)
}
