#[cfg(test)]
pub mod fixtures {
    use crate::aggregator::Summary;
    use crate::model::{Checklist, Finding, Severity, Status};

    pub fn create_finding(
        vuln_id: &str,
        stig_title: &str,
        status: Status,
        severity: Severity,
    ) -> Finding {
        Finding {
            vuln_id: vuln_id.to_string(),
            rule_id: format!("SV-{}_rule", vuln_id.trim_start_matches("V-")),
            rule_title: format!("Rule for {vuln_id}"),
            group_title: "SRG-OS-000001".to_string(),
            severity,
            status,
            stig_title: stig_title.to_string(),
            finding_details: "detail".to_string(),
            comments: String::new(),
            discussion: "discussion".to_string(),
            check_content: "check".to_string(),
            fix_text: "fix".to_string(),
        }
    }

    pub fn create_checklist(host: &str, file: &str, findings: Vec<Finding>) -> Checklist {
        let stig_title = findings
            .first()
            .map(|f| f.stig_title.clone())
            .unwrap_or_default();
        Checklist {
            file_name: file.to_string(),
            host_name: host.to_string(),
            host_ip: format!("10.0.0.{}", host.len()),
            host_mac: String::new(),
            fqdn: format!("{host}.example.mil"),
            role: "Member Server".to_string(),
            technology_area: String::new(),
            stig_title,
            version: "3".to_string(),
            release_info: "Release: 2".to_string(),
            findings,
        }
    }

    /// Summary plus owned checklists, ready for a `Report`.
    pub fn create_report_parts(checklists: Vec<Checklist>) -> (Summary, Vec<Checklist>) {
        let summary = Summary::from_checklists(&checklists);
        (summary, checklists)
    }
}
