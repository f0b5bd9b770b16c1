use crate::aggregator::Summary;
use crate::model::Checklist;
use crate::reporter::{Report, Reporter};
use serde::Serialize;

/// Machine-readable alternative to the HTML dashboard.
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    generated_at: &'a str,
    version: &'a str,
    summary: &'a Summary,
    hosts: Vec<HostRow<'a>>,
}

#[derive(Serialize)]
struct HostRow<'a> {
    host_name: &'a str,
    host_ip: &'a str,
    fqdn: &'a str,
    role: &'a str,
    stig_title: &'a str,
    release_info: &'a str,
    file_name: &'a str,
    findings: usize,
    open: usize,
}

impl<'a> HostRow<'a> {
    fn from_checklist(checklist: &'a Checklist) -> Self {
        Self {
            host_name: &checklist.host_name,
            host_ip: &checklist.host_ip,
            fqdn: &checklist.fqdn,
            role: &checklist.role,
            stig_title: &checklist.stig_title,
            release_info: &checklist.release_info,
            file_name: &checklist.file_name,
            findings: checklist.findings.len(),
            open: checklist.open_count(),
        }
    }
}

impl Reporter for JsonReporter {
    fn report(&self, report: &Report) -> String {
        let view = JsonReport {
            title: report.title,
            generated_at: &report.generated_at,
            version: env!("CARGO_PKG_VERSION"),
            summary: report.summary,
            hosts: report
                .checklists
                .iter()
                .map(HostRow::from_checklist)
                .collect(),
        };
        serde_json::to_string_pretty(&view)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize report: {}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Severity, Status};
    use crate::test_utils::fixtures::{create_checklist, create_finding, create_report_parts};

    #[test]
    fn test_json_output_structure() {
        let (summary, checklists) = create_report_parts(vec![]);
        let report = Report {
            title: "Dashboard",
            generated_at: "2026-08-25T12:00:00Z".to_string(),
            summary: &summary,
            checklists: &checklists,
        };
        let output = JsonReporter::new().report(&report);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["title"], "Dashboard");
        assert_eq!(parsed["summary"]["checklists"], 0);
        assert_eq!(parsed["summary"]["status"]["open"], 0);
        assert!(parsed["hosts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_output_with_findings() {
        let checklist = create_checklist(
            "web01",
            "web01.cklb",
            vec![
                create_finding("V-1", "Apache 2.4", Status::Open, Severity::High),
                create_finding("V-2", "Apache 2.4", Status::NotReviewed, Severity::Low),
            ],
        );
        let (summary, checklists) = create_report_parts(vec![checklist]);
        let report = Report {
            title: "Dashboard",
            generated_at: "2026-08-25T12:00:00Z".to_string(),
            summary: &summary,
            checklists: &checklists,
        };
        let output = JsonReporter::new().report(&report);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["summary"]["status"]["open"], 1);
        assert_eq!(parsed["summary"]["open_by_severity"]["high"], 1);
        assert_eq!(parsed["summary"]["unique_findings"][0]["vuln_id"], "V-1");
        assert_eq!(
            parsed["summary"]["unique_findings"][0]["hosts"][0]["host_name"],
            "web01"
        );
        assert_eq!(parsed["hosts"][0]["findings"], 2);
        assert_eq!(parsed["hosts"][0]["open"], 1);
    }
}
