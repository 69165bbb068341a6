//! HTML rendering: a Tera fragment injected into the user's page template.

use tera::{Context, Tera};

use crate::dto::report::ReportDto;
use crate::services::{ServiceError, ServiceResult};

const CLEARANCES_TEMPLATE_NAME: &str = "clearances.html";
const CLEARANCES_TEMPLATE: &str = include_str!("../../../templates/clearances.html");

/// Placeholder the page template must contain.
pub const CONTENT_PLACEHOLDER: &str = "content";

/// Renders the report body. Interpolated values are HTML-escaped.
pub fn render_fragment(report: &ReportDto) -> ServiceResult<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(CLEARANCES_TEMPLATE_NAME, CLEARANCES_TEMPLATE)
        .map_err(template_error)?;

    let mut context = Context::new();
    context.insert("report", report);
    tera.render(CLEARANCES_TEMPLATE_NAME, &context)
        .map_err(template_error)
}

/// Renders the full page by substituting the fragment into `page_template`.
pub fn render_page(page_template: &str, report: &ReportDto) -> ServiceResult<String> {
    let fragment = render_fragment(report)?;

    let mut context = Context::new();
    context.insert(CONTENT_PLACEHOLDER, &fragment);
    Tera::one_off(page_template, &context, false).map_err(template_error)
}

fn template_error(err: tera::Error) -> ServiceError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    ServiceError::Template(message)
}
