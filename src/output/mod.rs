//! Output module for presenting analysis results
//!
//! This module handles:
//! - Rendering the URL form and the result page as HTML
//! - Formatting a plain-text summary for the command line
//!
//! Renderers only read an [`AnalysisResult`](crate::AnalysisResult); they
//! never change it.

mod html;
mod text;

pub use html::{escape_html, render_form_page, render_result_page};
pub use text::format_text_summary;
