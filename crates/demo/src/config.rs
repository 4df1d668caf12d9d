//! Walkthrough configuration, read from the environment.

use std::path::PathBuf;

use personae_core::{DomainError, DomainResult};

pub const FIRST_NAME_VAR: &str = "PERSONAE_FIRST_NAME";
pub const LAST_NAME_VAR: &str = "PERSONAE_LAST_NAME";
pub const ALIAS_LAST_NAME_VAR: &str = "PERSONAE_ALIAS_LAST_NAME";
pub const GPA_VAR: &str = "PERSONAE_GPA";
pub const EXPORT_PATH_VAR: &str = "PERSONAE_EXPORT_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub first_name: String,
    pub last_name: String,
    /// Last name the student is temporarily renamed to.
    pub alias_last_name: String,
    pub gpa: f64,
    /// Where to write the student's record, if anywhere.
    pub export_path: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            first_name: "Scott".to_string(),
            last_name: "Hunter".to_string(),
            alias_last_name: "Hanselman".to_string(),
            gpa: 3.8,
            export_path: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let defaults = Self::default();

        let gpa = match lookup(GPA_VAR) {
            Some(raw) => parse_gpa(&raw)?,
            None => defaults.gpa,
        };

        Ok(Self {
            first_name: lookup(FIRST_NAME_VAR).unwrap_or(defaults.first_name),
            last_name: lookup(LAST_NAME_VAR).unwrap_or(defaults.last_name),
            alias_last_name: lookup(ALIAS_LAST_NAME_VAR).unwrap_or(defaults.alias_last_name),
            gpa,
            export_path: lookup(EXPORT_PATH_VAR)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_gpa(raw: &str) -> DomainResult<f64> {
    let gpa: f64 = raw
        .trim()
        .parse()
        .map_err(|e| DomainError::validation(format!("{GPA_VAR}: {e}")))?;
    if !gpa.is_finite() {
        return Err(DomainError::validation(format!("{GPA_VAR}: must be finite")));
    }
    Ok(gpa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_use_defaults() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn keys_override_defaults() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (FIRST_NAME_VAR, "Ada"),
            (LAST_NAME_VAR, "Lovelace"),
            (ALIAS_LAST_NAME_VAR, "King"),
            (GPA_VAR, " 3.25 "),
            (EXPORT_PATH_VAR, "/tmp/ada.txt"),
        ]))
        .unwrap();

        assert_eq!(config.first_name, "Ada");
        assert_eq!(config.last_name, "Lovelace");
        assert_eq!(config.alias_last_name, "King");
        assert_eq!(config.gpa, 3.25);
        assert_eq!(config.export_path, Some(PathBuf::from("/tmp/ada.txt")));
    }

    #[test]
    fn blank_export_path_means_no_export() {
        let config = DemoConfig::from_lookup(lookup_from(&[(EXPORT_PATH_VAR, "  ")])).unwrap();
        assert_eq!(config.export_path, None);
    }

    #[test]
    fn malformed_gpa_is_rejected() {
        let err = DemoConfig::from_lookup(lookup_from(&[(GPA_VAR, "excellent")])).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains(GPA_VAR)),
            _ => panic!("Expected Validation error for malformed gpa"),
        }
    }

    #[test]
    fn non_finite_gpa_is_rejected() {
        let err = DemoConfig::from_lookup(lookup_from(&[(GPA_VAR, "NaN")])).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
