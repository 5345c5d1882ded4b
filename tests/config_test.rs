use serde::Deserialize;

use alarm_theme::theme::{Surface, ThemePreference};

#[derive(Debug, Deserialize)]
struct HostConfig {
    theme: ThemePreference,
    #[serde(default)]
    surfaces: Vec<Surface>,
}

#[test]
fn parse_preference_from_host_config() {
    let config: HostConfig = toml::from_str(r#"theme = "light""#).unwrap();
    assert_eq!(config.theme, ThemePreference::Light);
    assert!(config.surfaces.is_empty());
}

#[test]
fn parse_surfaces() {
    let toml = r#"
theme = "dark"
surfaces = ["alarm_alert", "time_picker"]
"#;
    let config: HostConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.surfaces, [Surface::AlarmAlert, Surface::TimePicker]);
}

#[test]
fn parse_invalid_preference_fails() {
    let result: Result<HostConfig, _> = toml::from_str(r#"theme = "sepia""#);
    assert!(result.is_err());
}

#[test]
fn preference_serializes_lowercase() {
    #[derive(serde::Serialize)]
    struct Out {
        theme: ThemePreference,
    }
    let out = toml::to_string(&Out {
        theme: ThemePreference::Dark,
    })
    .unwrap();
    assert_eq!(out.trim(), r#"theme = "dark""#);
}

#[test]
fn default_preference_is_dark() {
    assert_eq!(ThemePreference::default(), ThemePreference::Dark);
}
