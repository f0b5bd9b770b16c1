//! Raw CKLB document structures.
//!
//! Scalar fields are read leniently: a missing or non-string value becomes
//! the empty string, so one malformed record never takes down the file it
//! lives in. Only a malformed top-level document is a file-level error.

use crate::model::SeverityOverride;
use serde::{Deserialize, Deserializer};

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_overrides<'de, D>(deserializer: D) -> Result<RawOverrides, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// One parsed checklist document.
#[derive(Debug, Default, Deserialize)]
pub struct RawDocument {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default)]
    pub target_data: RawTarget,
    #[serde(default)]
    pub stigs: Vec<RawStig>,
}

/// Host/target metadata block. Absent fields stay empty; no validation.
#[derive(Debug, Default, Deserialize)]
pub struct RawTarget {
    #[serde(default, deserialize_with = "lenient_string")]
    pub host_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ip_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mac_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fqdn: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub technology_area: String,
}

/// One STIG section with its rules, in source order.
#[derive(Debug, Default, Deserialize)]
pub struct RawStig {
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stig_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stig_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub release_info: String,
    #[serde(default)]
    pub rules: Vec<RawRule>,
}

impl RawStig {
    /// Display title of the section, falling back to the internal STIG name.
    pub fn title(&self) -> &str {
        if self.display_name.is_empty() {
            &self.stig_name
        } else {
            &self.display_name
        }
    }
}

/// One rule record as it appears in the source file.
#[derive(Debug, Default, Deserialize)]
pub struct RawRule {
    #[serde(default, deserialize_with = "lenient_string")]
    pub group_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rule_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rule_title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub group_title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub severity: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub finding_details: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub comments: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub discussion: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub check_content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fix_text: String,
    #[serde(default, deserialize_with = "lenient_overrides")]
    pub overrides: RawOverrides,
}

impl RawRule {
    /// The rule's severity override as an explicit sum type.
    pub fn severity_override(&self) -> SeverityOverride {
        match &self.overrides.severity {
            None => SeverityOverride::Absent,
            Some(RawSeverityOverride::Direct(s)) => SeverityOverride::Direct(s.clone()),
            Some(RawSeverityOverride::Structured { new_value, value }) => {
                SeverityOverride::Structured {
                    new_value: new_value.clone(),
                    value: value.clone(),
                }
            }
            Some(RawSeverityOverride::Other(_)) => SeverityOverride::Absent,
        }
    }
}

/// Per-rule override container.
#[derive(Debug, Default, Deserialize)]
pub struct RawOverrides {
    #[serde(default)]
    pub severity: Option<RawSeverityOverride>,
}

/// The `severity` override is either a bare string or an object carrying
/// `new_value`/`value`; any other shape is treated as no override.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSeverityOverride {
    Direct(String),
    Structured {
        #[serde(default)]
        new_value: Option<String>,
        #[serde(default)]
        value: Option<String>,
    },
    Other(serde_json::Value),
}
