//! Builds one `Checklist` from a parsed source document.

use crate::model::Checklist;
use crate::normalize::normalize_rule;
use crate::parser::RawDocument;

/// Build a checklist from one parsed document.
///
/// Checklist-level STIG metadata comes from the first section in the file and
/// is never overridden by later sections. Each finding keeps its own
/// section's display title so a multi-STIG file groups correctly downstream.
pub fn build_checklist(file_name: &str, doc: &RawDocument) -> Checklist {
    let mut checklist = Checklist {
        file_name: file_name.to_string(),
        host_name: doc.target_data.host_name.clone(),
        host_ip: doc.target_data.ip_address.clone(),
        host_mac: doc.target_data.mac_address.clone(),
        fqdn: doc.target_data.fqdn.clone(),
        role: doc.target_data.role.clone(),
        technology_area: doc.target_data.technology_area.clone(),
        stig_title: String::new(),
        version: String::new(),
        release_info: String::new(),
        findings: Vec::new(),
    };

    for (index, stig) in doc.stigs.iter().enumerate() {
        if index == 0 {
            checklist.stig_title = stig.title().to_string();
            checklist.version = stig.version.clone();
            checklist.release_info = stig.release_info.clone();
        }
        for rule in &stig.rules {
            let mut finding = normalize_rule(rule);
            finding.stig_title = stig.title().to_string();
            checklist.findings.push(finding);
        }
    }

    checklist
}
