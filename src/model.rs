use serde::{Serialize, Serializer};

/// Canonical rule result status.
///
/// Source documents encode status as lowercase snake_case strings. Anything
/// outside the known vocabulary is carried through unchanged in `Other` so a
/// nonstandard checklist still shows up in the report rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Open,
    NotAFinding,
    NotReviewed,
    NotApplicable,
    Other(String),
}

impl Status {
    /// Map a raw source status into the canonical vocabulary.
    ///
    /// The match is exact and case-sensitive on the raw side; unrecognized
    /// values pass through unchanged.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "open" => Status::Open,
            "not_a_finding" => Status::NotAFinding,
            "not_reviewed" => Status::NotReviewed,
            "not_applicable" => Status::NotApplicable,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Open => "Open",
            Status::NotAFinding => "Not a Finding",
            Status::NotReviewed => "Not Reviewed",
            Status::NotApplicable => "Not Applicable",
            Status::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Canonical severity tier.
///
/// Variant order is the presentation rank: high sorts before medium before
/// low, with unresolvable severities last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl Severity {
    /// Canonicalize a raw severity value by trimming whitespace and
    /// lowercasing, so `"High "`, `"HIGH"` and `"high"` are equivalent.
    /// Anything unrecognized stays `Unknown`; a value is never fabricated.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Unknown => "unknown",
        }
    }

    /// DISA category tier label; `None` for severities outside the three
    /// tiers.
    pub fn cat_label(&self) -> Option<&'static str> {
        match self {
            Severity::High => Some("CAT I"),
            Severity::Medium => Some("CAT II"),
            Severity::Low => Some("CAT III"),
            Severity::Unknown => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Severity override carried by a rule record.
///
/// Source documents encode this either as a bare string or as an object with
/// `new_value`/`value` fields; `Absent` covers records with no override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeverityOverride {
    #[default]
    Absent,
    Direct(String),
    Structured {
        new_value: Option<String>,
        value: Option<String>,
    },
}

/// The evaluated result of one compliance rule against one host.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub vuln_id: String,
    pub rule_id: String,
    pub rule_title: String,
    pub group_title: String,
    pub severity: Severity,
    pub status: Status,
    /// Display title of the STIG section that owns this rule. A single file
    /// may carry several STIGs, so this is per-finding, not per-checklist.
    pub stig_title: String,
    pub finding_details: String,
    pub comments: String,
    pub discussion: String,
    pub check_content: String,
    pub fix_text: String,
}

/// The full set of findings for one host from one source file.
///
/// Immutable once built; a file that fails to parse contributes no checklist
/// at all.
#[derive(Debug, Clone, Serialize)]
pub struct Checklist {
    pub file_name: String,
    pub host_name: String,
    pub host_ip: String,
    pub host_mac: String,
    pub fqdn: String,
    pub role: String,
    pub technology_area: String,
    /// STIG metadata from the first section in the file; later sections never
    /// override these.
    pub stig_title: String,
    pub version: String,
    pub release_info: String,
    /// Findings in source order.
    pub findings: Vec<Finding>,
}

impl Checklist {
    pub fn open_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.status == Status::Open)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_table() {
        assert_eq!(Status::from_raw("open"), Status::Open);
        assert_eq!(Status::from_raw("not_a_finding"), Status::NotAFinding);
        assert_eq!(Status::from_raw("not_reviewed"), Status::NotReviewed);
        assert_eq!(Status::from_raw("not_applicable"), Status::NotApplicable);
    }

    #[test]
    fn test_status_unknown_passes_through() {
        assert_eq!(
            Status::from_raw("under_review"),
            Status::Other("under_review".to_string())
        );
        assert_eq!(Status::from_raw(""), Status::Other(String::new()));
    }

    #[test]
    fn test_status_mapping_is_case_sensitive() {
        // Only the exact lowercase vocabulary is recognized.
        assert_eq!(Status::from_raw("Open"), Status::Other("Open".to_string()));
        assert_eq!(
            Status::from_raw("NOT_A_FINDING"),
            Status::Other("NOT_A_FINDING".to_string())
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Open.to_string(), "Open");
        assert_eq!(Status::NotAFinding.to_string(), "Not a Finding");
        assert_eq!(Status::NotReviewed.to_string(), "Not Reviewed");
        assert_eq!(Status::NotApplicable.to_string(), "Not Applicable");
        assert_eq!(Status::Other("custom".to_string()).to_string(), "custom");
    }

    #[test]
    fn test_status_serializes_as_string() {
        let json = serde_json::to_string(&Status::NotAFinding).unwrap();
        assert_eq!(json, "\"Not a Finding\"");
        let json = serde_json::to_string(&Status::Other("weird".to_string())).unwrap();
        assert_eq!(json, "\"weird\"");
    }

    #[test]
    fn test_severity_from_raw_case_and_whitespace() {
        assert_eq!(Severity::from_raw("high"), Severity::High);
        assert_eq!(Severity::from_raw("HIGH"), Severity::High);
        assert_eq!(Severity::from_raw("High "), Severity::High);
        assert_eq!(Severity::from_raw("  medium\t"), Severity::Medium);
        assert_eq!(Severity::from_raw("low"), Severity::Low);
    }

    #[test]
    fn test_severity_from_raw_never_fabricates() {
        assert_eq!(Severity::from_raw(""), Severity::Unknown);
        assert_eq!(Severity::from_raw("   "), Severity::Unknown);
        assert_eq!(Severity::from_raw("critical"), Severity::Unknown);
    }

    #[test]
    fn test_severity_from_raw_idempotent() {
        for raw in ["high", "MEDIUM", " low ", "bogus"] {
            let once = Severity::from_raw(raw);
            let twice = Severity::from_raw(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_severity_presentation_rank() {
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
        assert!(Severity::Low < Severity::Unknown);
    }

    #[test]
    fn test_severity_cat_labels() {
        assert_eq!(Severity::High.cat_label(), Some("CAT I"));
        assert_eq!(Severity::Medium.cat_label(), Some("CAT II"));
        assert_eq!(Severity::Low.cat_label(), Some("CAT III"));
        assert_eq!(Severity::Unknown.cat_label(), None);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::High), "HIGH");
        assert_eq!(format!("{}", Severity::Unknown), "UNKNOWN");
    }

    #[test]
    fn test_severity_serialization() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Severity::Unknown).unwrap(),
            "\"unknown\""
        );
    }
}
