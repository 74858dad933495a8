use super::*;
use config::FileFormat;

fn env(pairs: &[(&str, &str)]) -> Environment {
    environment(Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    ))
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = build_settings(File::from_str("", FileFormat::Toml), env(&[])).expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.response_delay(), Duration::ZERO);
}

#[test]
fn file_values_override_defaults() {
    let file = File::from_str(
        r#"
server_bind = "0.0.0.0:9000"
locations = ["Oslo", "  Lima ", ""]
taken_names = ["Bob"]
response_delay_ms = 250
"#,
        FileFormat::Toml,
    );
    let settings = build_settings(file, env(&[])).expect("settings");

    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.locations, vec!["Oslo".to_string(), "Lima".to_string()]);
    assert_eq!(settings.taken_names, vec!["bob".to_string()]);
    assert_eq!(settings.response_delay(), Duration::from_millis(250));
}

#[test]
fn environment_overrides_file() {
    let file = File::from_str(r#"server_bind = "0.0.0.0:9000""#, FileFormat::Toml);
    let settings = build_settings(
        file,
        env(&[
            ("APP__SERVER_BIND", "127.0.0.1:7000"),
            ("APP__LOCATIONS", "Paris,Rome"),
            ("APP__TAKEN_NAMES", "Alice,Carol"),
            ("APP__RESPONSE_DELAY_MS", "40"),
        ]),
    )
    .expect("settings");

    assert_eq!(settings.server_bind, "127.0.0.1:7000");
    assert_eq!(settings.locations, vec!["Paris".to_string(), "Rome".to_string()]);
    assert_eq!(
        settings.taken_names,
        vec!["alice".to_string(), "carol".to_string()]
    );
    assert_eq!(settings.response_delay_ms, 40);
}

#[test]
fn blank_bind_address_falls_back_to_default() {
    let file = File::from_str(r#"server_bind = "   ""#, FileFormat::Toml);
    let settings = build_settings(file, env(&[])).expect("settings");
    assert_eq!(settings.server_bind, Settings::default().server_bind);
}

#[test]
fn malformed_delay_is_rejected() {
    let file = File::from_str(r#"response_delay_ms = "soon""#, FileFormat::Toml);
    assert!(build_settings(file, env(&[])).is_err());
}
