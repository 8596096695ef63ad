use tera::{Context, Tera};

use simillimum_core::models::session::Session;

use crate::error::RenderError;
use crate::view::PageView;

const BASE: &str = include_str!("../templates/base.html");
const PAGE: &str = include_str!("../templates/page.html");
const CASE_PANEL: &str = include_str!("../templates/case_panel.html");
const ANALYSIS_PANEL: &str = include_str!("../templates/analysis_panel.html");

const PAGE_TEMPLATE: &str = "page.html";

/// The compiled template set for the case-recording page.
///
/// Template names end in `.html`, so Tera autoescapes every interpolated
/// value, including everything typed by the user or returned by the model.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("case_panel.html", CASE_PANEL),
            ("analysis_panel.html", ANALYSIS_PANEL),
            (PAGE_TEMPLATE, PAGE),
        ])
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Render the whole page for the session's current state.
    pub fn render_page(&self, session: &Session) -> Result<String, RenderError> {
        self.render_view(&PageView::from_session(session))
    }

    pub fn render_view(&self, view: &PageView) -> Result<String, RenderError> {
        let value = serde_json::to_value(view)?;
        let context =
            Context::from_value(value).map_err(|e| RenderError::TemplateRender(e.to_string()))?;

        let rendered = self.tera.render(PAGE_TEMPLATE, &context)?;
        tracing::debug!(state = ?view.state, bytes = rendered.len(), "rendered page");
        Ok(rendered)
    }
}
