use tera::{Context, Tera};
use tracing::debug;

use assessa_core::models::submission::Submission;

use crate::error::ExportError;

/// Built-in Markdown report, laid out like the review step.
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/report.md");

/// Render a Tera template with a Submission.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The `submission` fields become the template context variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    submission: &Submission,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(submission)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    debug!(
        instrument_id = %submission.instrument_id,
        template_name,
        bytes = rendered.len(),
        "report rendered"
    );
    Ok(rendered)
}

/// Render a submission with [`DEFAULT_TEMPLATE`].
pub fn render_report(submission: &Submission) -> Result<String, ExportError> {
    render_template("report.md", DEFAULT_TEMPLATE, submission)
}
