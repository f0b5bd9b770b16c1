pub mod html;
pub mod json;

use crate::aggregator::Summary;
use crate::model::Checklist;

/// Everything a renderer needs for one report.
///
/// The generation timestamp is owned by the caller so summarization itself
/// stays deterministic.
pub struct Report<'a> {
    pub title: &'a str,
    pub generated_at: String,
    pub summary: &'a Summary,
    pub checklists: &'a [Checklist],
}

pub trait Reporter {
    fn report(&self, report: &Report) -> String;
}
