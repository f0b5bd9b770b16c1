//! Record normalization: canonical status mapping and severity override
//! resolution for raw rule records.

use crate::model::{Finding, Severity, SeverityOverride, Status};
use crate::parser::cklb::RawRule;

/// Resolve the effective severity for a rule record.
///
/// Priority: a bare override string is used directly; a structured override
/// prefers `new_value`, falling back to `value`; with no usable override the
/// record's base severity applies. The result is canonicalized (trimmed,
/// lowercased) and an unresolvable value stays `Unknown`.
pub fn resolve_severity(base: &str, severity_override: &SeverityOverride) -> Severity {
    let raw = match severity_override {
        SeverityOverride::Direct(s) => Some(s.as_str()),
        SeverityOverride::Structured { new_value, value } => {
            new_value.as_deref().or(value.as_deref())
        }
        SeverityOverride::Absent => None,
    };
    Severity::from_raw(raw.unwrap_or(base))
}

/// Build a canonical finding from one raw rule record.
///
/// The owning STIG section's display title is stamped by the aggregator; it
/// is not part of the record itself. Field anomalies have already been
/// absorbed to empty strings by the parser, so this never fails.
pub fn normalize_rule(rule: &RawRule) -> Finding {
    Finding {
        vuln_id: rule.group_id.clone(),
        rule_id: rule.rule_id.clone(),
        rule_title: rule.rule_title.clone(),
        group_title: rule.group_title.clone(),
        severity: resolve_severity(&rule.severity, &rule.severity_override()),
        status: Status::from_raw(&rule.status),
        stig_title: String::new(),
        finding_details: rule.finding_details.clone(),
        comments: rule.comments.clone(),
        discussion: rule.discussion.clone(),
        check_content: rule.check_content.clone(),
        fix_text: rule.fix_text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_override_uses_base() {
        assert_eq!(
            resolve_severity("medium", &SeverityOverride::Absent),
            Severity::Medium
        );
    }

    #[test]
    fn test_direct_override_wins_over_base() {
        assert_eq!(
            resolve_severity("low", &SeverityOverride::Direct("High".to_string())),
            Severity::High
        );
    }

    #[test]
    fn test_structured_override_prefers_new_value() {
        let ov = SeverityOverride::Structured {
            new_value: Some("low".to_string()),
            value: Some("high".to_string()),
        };
        assert_eq!(resolve_severity("medium", &ov), Severity::Low);
    }

    #[test]
    fn test_structured_override_falls_back_to_value() {
        let ov = SeverityOverride::Structured {
            new_value: None,
            value: Some("high".to_string()),
        };
        assert_eq!(resolve_severity("medium", &ov), Severity::High);
    }

    #[test]
    fn test_empty_structured_override_falls_back_to_base() {
        let ov = SeverityOverride::Structured {
            new_value: None,
            value: None,
        };
        assert_eq!(resolve_severity("medium", &ov), Severity::Medium);
    }

    #[test]
    fn test_override_is_case_and_whitespace_insensitive() {
        assert_eq!(
            resolve_severity("low", &SeverityOverride::Direct(" HIGH ".to_string())),
            Severity::High
        );
    }

    #[test]
    fn test_unresolvable_severity_stays_unknown() {
        assert_eq!(
            resolve_severity("", &SeverityOverride::Absent),
            Severity::Unknown
        );
        assert_eq!(
            resolve_severity("bogus", &SeverityOverride::Direct("also bogus".to_string())),
            Severity::Unknown
        );
    }

    #[test]
    fn test_normalize_rule_with_override() {
        // not_a_finding with an absent base severity but a structured
        // override still resolves: status and severity are independent.
        let raw = serde_json::from_str::<RawRule>(
            r#"{
                "group_id": "V-1001",
                "rule_id": "SV-1001r1_rule",
                "rule_title": "Password complexity",
                "status": "not_a_finding",
                "overrides": {"severity": {"new_value": "High"}}
            }"#,
        )
        .unwrap();

        let finding = normalize_rule(&raw);
        assert_eq!(finding.status, Status::NotAFinding);
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(finding.vuln_id, "V-1001");
        assert!(finding.stig_title.is_empty());
        assert!(finding.comments.is_empty());
    }

    #[test]
    fn test_normalize_rule_unknown_status_passes_through() {
        let raw = serde_json::from_str::<RawRule>(
            r#"{"group_id": "V-2", "status": "deferred", "severity": "low"}"#,
        )
        .unwrap();

        let finding = normalize_rule(&raw);
        assert_eq!(finding.status, Status::Other("deferred".to_string()));
        assert_eq!(finding.severity, Severity::Low);
    }
}
