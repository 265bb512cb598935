//! Step indicator rendering.
//!
//! Pure presentation: a step renders as an index badge, a label, optional
//! detail, and an action hint shown only while the step is both active and
//! enabled. No internal state.

/// One step of the indicator.
#[derive(Clone, Debug)]
pub struct StepView {
    /// Zero-based position; rendered as a 1-based badge.
    pub index: usize,
    pub label: String,
    /// Dimmed secondary line under the label.
    pub detail: Option<String>,
    /// Action name hinted at while the step is actionable.
    pub cta: Option<String>,
    pub active: bool,
    pub enabled: bool,
}

impl StepView {
    pub fn render(&self) -> String {
        let marker = if self.active { '>' } else { ' ' };
        let mut out = format!("{marker} [{}] {}", self.index + 1, self.label);
        if let Some(detail) = &self.detail {
            out.push_str(&format!("\n      {detail}"));
        }
        if self.active && self.enabled {
            if let Some(cta) = &self.cta {
                out.push_str(&format!("\n      press Enter to {cta}"));
            }
        }
        out
    }
}

/// Render the whole indicator, one step per block.
pub fn render_steps(steps: &[StepView]) -> String {
    steps
        .iter()
        .map(StepView::render)
        .collect::<Vec<_>>()
        .join("\n")
}
