//! Plain-text summary generation

use crate::analyzer::AnalysisResult;

/// Formats an analysis result as a human-readable text report
///
/// # Arguments
///
/// * `url` - The analyzed page URL
/// * `result` - The analysis result
///
/// # Returns
///
/// A multi-line report ending with a newline
pub fn format_text_summary(url: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Analysis of {} ===\n\n", url));
    out.push_str(&format!("HTML version:       {}\n", result.html_version));
    out.push_str(&format!("Title:              {}\n", result.title));
    out.push_str(&format!(
        "Login form:         {}\n",
        if result.has_login_form { "yes" } else { "no" }
    ));

    out.push_str("\nHeadings:\n");
    if result.headings.is_empty() {
        out.push_str("  (none)\n");
    }
    for (tag, texts) in &result.headings {
        out.push_str(&format!("  {}: {}\n", tag, texts.len()));
        for text in texts {
            out.push_str(&format!("    - {}\n", text.trim()));
        }
    }

    out.push_str(&format!("\nTotal links:        {}\n", result.total_links()));
    out.push_str(&format!(
        "Internal links:     {}\n",
        result.internal_links.len()
    ));
    out.push_str(&format!(
        "External links:     {}\n",
        result.external_links.len()
    ));
    out.push_str(&format!(
        "Inaccessible links: {}\n",
        result.inaccessible_link_count
    ));

    out
}
