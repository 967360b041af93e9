//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LabConfig;
use crate::domain::errors::LabError;
use crate::domain::result::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static ENV_VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LabConfig
/// 4. Applies environment variable overrides (LAB_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`LabError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, parsing fails, or the
/// result does not validate.
///
/// # Examples
///
/// ```no_run
/// use labkit::config::loader::load_config;
///
/// let config = load_config("labkit.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LabConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LabError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LabError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text, with substitution and overrides
pub fn parse_config(contents: &str) -> Result<LabConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: LabConfig = toml::from_str(&contents)
        .map_err(|e| LabError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LabError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_VAR_RE.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LabError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using LAB_* prefix
///
/// Environment variables follow the pattern: LAB_<SECTION>_<KEY>
/// For example: LAB_API_BASE_URL, LAB_VALIDATION_NORMALIZE_CASE
fn apply_env_overrides(config: &mut LabConfig) {
    if let Ok(val) = std::env::var("LAB_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("LAB_API_BASE_URL") {
        config.api.base_url = val;
    }

    if let Ok(val) = std::env::var("LAB_LIVENESS_INTERVAL_SECONDS") {
        if let Ok(interval) = val.parse() {
            config.liveness.interval_seconds = interval;
        }
    }
    if let Ok(val) = std::env::var("LAB_LIVENESS_ENDPOINT") {
        config.liveness.endpoint = val;
    }

    if let Ok(val) = std::env::var("LAB_VALIDATION_NORMALIZE_CASE") {
        if let Ok(flag) = val.parse() {
            config.validation.normalize_case = flag;
        }
    }
    if let Ok(val) = std::env::var("LAB_VALIDATION_REQUIRE_LEADING_ZERO") {
        if let Ok(flag) = val.parse() {
            config.validation.require_leading_zero = flag;
        }
    }
    if let Ok(val) = std::env::var("LAB_VALIDATION_VERBOSE_REASONS") {
        if let Ok(flag) = val.parse() {
            config.validation.verbose_reasons = flag;
        }
    }

    if let Ok(val) = std::env::var("LAB_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("LAB_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("LABKIT_UNIT_TEST_HOST", "lab.example.it");
        let input = "base_url = \"https://${LABKIT_UNIT_TEST_HOST}/api/\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "base_url = \"https://lab.example.it/api/\"\n");
        std::env::remove_var("LABKIT_UNIT_TEST_HOST");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("LABKIT_UNIT_TEST_MISSING");
        let input = "base_url = \"${LABKIT_UNIT_TEST_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("LABKIT_UNIT_TEST_MISSING"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# base_url = \"${LABKIT_UNIT_TEST_COMMENTED}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${LABKIT_UNIT_TEST_COMMENTED}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(LabError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[api]
base_url = "http://localhost:5000/api/"

[liveness]
interval_seconds = 30
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api/");
        assert_eq!(config.liveness.interval_seconds, 30);
    }
}
