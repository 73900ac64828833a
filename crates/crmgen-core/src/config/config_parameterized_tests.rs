#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized config TOML parsing tests
// ============================================================================

#[test_case(r#"log_level = "info""#, "info")]
#[test_case(r#"log_level = "debug""#, "debug")]
#[test_case(r#"log_level = "warn""#, "warn")]
#[test_case(r#"log_level = "trace""#, "trace")]
fn GeneratorConfig___log_level_toml___parses_correctly(toml: &str, expected_level: &str) {
    let config = GeneratorConfig::from_toml(toml).unwrap();
    assert_eq!(config.log_level, expected_level);
}

#[test_case(r#"placeholder = "<%content%>""#, "<%content%>")]
#[test_case(r#"placeholder = "{{body}}""#, "{{body}}")]
#[test_case("", "{#rendered_content#}")]
fn GeneratorConfig___placeholder_toml___parses_correctly(toml: &str, expected: &str) {
    let config = GeneratorConfig::from_toml(toml).unwrap();
    assert_eq!(config.placeholder, expected);
}

// ============================================================================
// Parameterized validation tests
// ============================================================================

#[test_case(r#"namespace = """#)]
#[test_case(r#"namespace = "   ""#)]
#[test_case(r#"class_file = """#)]
#[test_case(r#"module_file = " ""#)]
fn GeneratorConfig___blank_required_field___fails_validation(toml: &str) {
    let config = GeneratorConfig::from_toml(toml).unwrap();
    assert!(config.validate().is_err());
}

#[test_case("trace")]
#[test_case("debug")]
#[test_case("info")]
#[test_case("warn")]
#[test_case("error")]
#[test_case("off")]
#[test_case("WARN")]
fn GeneratorConfig___known_log_level___passes_validation(level: &str) {
    let config = GeneratorConfig {
        log_level: level.to_string(),
        ..GeneratorConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test_case("warning")]
#[test_case("verbose")]
#[test_case("crmgen=debug")]
#[test_case("")]
fn GeneratorConfig___unknown_log_level___fails_validation(level: &str) {
    let config = GeneratorConfig {
        log_level: level.to_string(),
        ..GeneratorConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("unknown log level"));
}
