use std::path::Path;

use anyhow::{Context, Result};
use prefmatch_core::ProfileConfig;

/// Load a profile form export. `.toml` files are parsed as TOML, anything
/// else as JSON.
pub fn load_profile(path: &Path) -> Result<ProfileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let config: ProfileConfig = if is_toml(path) {
        toml::from_str(&content)
            .with_context(|| format!("failed to parse TOML profile {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON profile {}", path.display()))?
    };

    tracing::debug!(
        "loaded profile {} ({} slots configured)",
        path.display(),
        config.len()
    );
    Ok(config)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefmatch_core::{Attr, Policy, UnknownHandling};

    #[test]
    fn test_toml_profile() {
        let cfg: ProfileConfig = toml::from_str(
            r#"
            [EXACT_AGE]
            value = 29
            policy = "CRITERIA"
            unknownHandling = "LENIENT"
            prefMin = 25
            prefMax = 35

            [RELIGION]
            value = 3
            policy = "DEALBREAKER"
            acceptedValues = [3]
            "#,
        )
        .unwrap();
        let age = cfg.get(Attr::ExactAge).unwrap();
        assert_eq!(age.policy, Policy::Criteria);
        assert_eq!(age.unknown_handling, UnknownHandling::Lenient);
        assert_eq!((age.pref_min, age.pref_max), (Some(25), Some(35)));
        assert_eq!(cfg.get(Attr::Religion).unwrap().accepted_values, vec![3]);
        assert!(cfg.get(Attr::Kids).is_none());
    }

    #[test]
    fn test_is_toml() {
        assert!(is_toml(Path::new("me.toml")));
        assert!(is_toml(Path::new("ME.TOML")));
        assert!(!is_toml(Path::new("me.json")));
        assert!(!is_toml(Path::new("me")));
    }
}
