//! Cross-checklist summarization.
//!
//! Merges a batch of checklists into overall status tallies, per-severity
//! open counts, per-STIG rollups and a deduplicated unique-finding index.
//! Everything here is a pure function of its input: the same checklist set
//! always yields an identical summary.

use crate::model::{Checklist, Severity, Status};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Finding tallies by canonical status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    pub not_a_finding: usize,
    pub not_reviewed: usize,
    pub not_applicable: usize,
    pub other: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.open + self.not_a_finding + self.not_reviewed + self.not_applicable + self.other
    }

    fn tally(&mut self, status: &Status) {
        match status {
            Status::Open => self.open += 1,
            Status::NotAFinding => self.not_a_finding += 1,
            Status::NotReviewed => self.not_reviewed += 1,
            Status::NotApplicable => self.not_applicable += 1,
            Status::Other(_) => self.other += 1,
        }
    }
}

/// Open finding tallies by severity tier.
///
/// Findings with an unknown severity stay out of the three CAT buckets but
/// still count toward the global Open total. That asymmetry matches the
/// upstream data convention and is intentional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpenCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl OpenCounts {
    fn tally(&mut self, severity: Severity) {
        match severity {
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
            Severity::Unknown => {}
        }
    }
}

/// Open counts for one STIG title, accumulated across the whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct StigRollup {
    pub stig_title: String,
    pub open: OpenCounts,
    pub open_total: usize,
    /// All findings seen for this STIG, regardless of status.
    pub findings: usize,
}

/// One host reporting a finding, identified by name, address and source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRef {
    pub host_name: String,
    pub host_ip: String,
    pub file_name: String,
}

/// One logical open finding with the distinct hosts reporting it.
///
/// Two checklists reporting the same `(stig_title, vuln_id)` as Open are the
/// same finding on multiple hosts, not two findings.
#[derive(Debug, Clone, Serialize)]
pub struct UniqueFinding {
    pub stig_title: String,
    pub vuln_id: String,
    pub rule_id: String,
    pub rule_title: String,
    pub severity: Severity,
    pub hosts: Vec<HostRef>,
}

#[derive(Default)]
struct RollupAcc {
    open: OpenCounts,
    open_total: usize,
    findings: usize,
}

/// Aggregate view over a batch of checklists.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub checklists: usize,
    pub status: StatusCounts,
    pub open_by_severity: OpenCounts,
    pub stig_rollups: Vec<StigRollup>,
    pub unique_findings: Vec<UniqueFinding>,
}

impl Summary {
    /// Summarize an ordered batch of checklists.
    pub fn from_checklists(checklists: &[Checklist]) -> Self {
        let mut status = StatusCounts::default();
        let mut open_by_severity = OpenCounts::default();
        let mut rollups: BTreeMap<String, RollupAcc> = BTreeMap::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut unique: Vec<UniqueFinding> = Vec::new();

        for checklist in checklists {
            for finding in &checklist.findings {
                status.tally(&finding.status);

                let rollup = rollups.entry(finding.stig_title.clone()).or_default();
                rollup.findings += 1;

                if finding.status != Status::Open {
                    continue;
                }
                open_by_severity.tally(finding.severity);
                rollup.open.tally(finding.severity);
                rollup.open_total += 1;

                let host = HostRef {
                    host_name: checklist.host_name.clone(),
                    host_ip: checklist.host_ip.clone(),
                    file_name: checklist.file_name.clone(),
                };
                let key = (finding.stig_title.clone(), finding.vuln_id.clone());
                match index.get(&key) {
                    Some(&slot) => {
                        let hosts = &mut unique[slot].hosts;
                        if !hosts.contains(&host) {
                            hosts.push(host);
                        }
                    }
                    None => {
                        index.insert(key, unique.len());
                        unique.push(UniqueFinding {
                            stig_title: finding.stig_title.clone(),
                            vuln_id: finding.vuln_id.clone(),
                            rule_id: finding.rule_id.clone(),
                            rule_title: finding.rule_title.clone(),
                            severity: finding.severity,
                            hosts: vec![host],
                        });
                    }
                }
            }
        }

        // Presentation order: STIG title, then severity rank; the stable sort
        // keeps insertion order inside each group.
        unique.sort_by(|a, b| {
            a.stig_title
                .cmp(&b.stig_title)
                .then(a.severity.cmp(&b.severity))
        });

        let stig_rollups = rollups
            .into_iter()
            .map(|(stig_title, acc)| StigRollup {
                stig_title,
                open: acc.open,
                open_total: acc.open_total,
                findings: acc.findings,
            })
            .collect();

        Summary {
            checklists: checklists.len(),
            status,
            open_by_severity,
            stig_rollups,
            unique_findings: unique,
        }
    }

    pub fn total_findings(&self) -> usize {
        self.status.total()
    }

    /// A bucket's share of the total finding count, rounded to one decimal.
    pub fn percent_of_total(&self, count: usize) -> f64 {
        percent(count, self.status.total())
    }
}

/// `round(count / total * 100, 1)`; 0 when `total` is 0.
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}
