//! Tests for loading pipeline configuration from disk.

use std::io::Write;

use hospital_model::{ConfigError, LineRange, PipelineConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_load_custom_layouts() {
    let file = write_config(
        r#"
[[layouts]]
name = "legacy"
lines = { first = 2, last = 40 }
min_columns = 7
name_column = 1
district_column = 2
state_column = 3
contact_column = 4
email_column = 5
specialties_from = 6

[[layouts]]
name = "current"
lines = { first = 42 }
min_columns = 8
name_column = 1
city_column = 2
district_column = 3
state_column = 4
contact_column = 5
email_column = 6
specialties_from = 7

[report]
scheme = "PMJAY"
"#,
    );

    let config = PipelineConfig::load(file.path()).unwrap();

    assert_eq!(config.layouts.len(), 2);
    assert_eq!(config.layouts[0].lines, LineRange::new(2, Some(40)));
    assert_eq!(config.layouts[0].city_column, None);
    assert_eq!(config.layouts[1].lines, LineRange::new(42, None));
    assert_eq!(config.layouts[1].city_column, Some(2));
    assert_eq!(config.report.scheme, "PMJAY");
    assert_eq!(config.report.limit, 5);
}

#[test]
fn test_load_rejects_invalid_layout() {
    let file = write_config(
        r#"
[[layouts]]
name = "broken"
lines = { first = 1 }
min_columns = 7
name_column = 1
district_column = 2
state_column = 3
contact_column = 4
email_column = 5
specialties_from = 6
"#,
    );

    let result = PipelineConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::InvalidLayout { .. })));
}

#[test]
fn test_load_reports_parse_errors() {
    let file = write_config("[report\nlimit = 3");
    let result = PipelineConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = PipelineConfig::load(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}
