use super::settings::{CONTENT_TYPE, INSECURE, METHOD, RUN_COUNT, URI};
use super::{Settings, load_config, load_config_file, parse_overrides, resolve_settings};
use crate::error::{AppError, ConfigError, ValidationError};
use std::collections::BTreeMap;
use tempfile::tempdir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn parse_toml_config_flat_table() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("mercury.toml");
    let content = r#"
uri = "https://localhost:3000/api/items"
method = "post"
cookie = "session=abc"
payload = '{"id":1}'
contentType = "application/json"
runCount = 20
insecure = false
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path)?;
    let settings = Settings::from_config(config)?;
    if settings.get(URI) != Some("https://localhost:3000/api/items") {
        return Err("Unexpected uri".to_owned());
    }
    if settings.get(RUN_COUNT) != Some("20") {
        return Err(format!("Unexpected runCount: {:?}", settings.get(RUN_COUNT)));
    }
    if settings.get(INSECURE) != Some("false") {
        return Err("Unexpected insecure".to_owned());
    }
    if settings.get("payload") != Some(r#"{"id":1}"#) {
        return Err("Unexpected payload".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config_flat_table() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("mercury.json");
    let content = r#"{
  "uri": "http://localhost:3000",
  "method": "GET",
  "runCount": 5
}"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let settings = Settings::from_config(load_config_file(&path)?)?;
    if settings.get(METHOD) != Some("GET") {
        return Err("Unexpected method".to_owned());
    }
    if settings.get(RUN_COUNT) != Some("5") {
        return Err("Unexpected runCount".to_owned());
    }
    Ok(())
}

#[test]
fn config_rejects_nested_values() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("mercury.toml");
    std::fs::write(&path, "uri = \"http://x\"\n[extra]\nkey = 1\n")
        .map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path)?;
    match Settings::from_config(config) {
        Err(AppError::Config(ConfigError::UnsupportedValue { key })) if key == "extra" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected nested table to be rejected".to_owned()),
    }
}

#[test]
fn config_rejects_unknown_extension() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("mercury.yaml");
    std::fs::write(&path, "uri: x").map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected unsupported extension".to_owned()),
    }
}

#[test]
fn explicit_missing_config_is_an_error() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("absent.toml");
    let path = path.to_string_lossy().into_owned();
    match load_config(Some(&path)) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected read failure".to_owned()),
    }
}

#[test]
fn overrides_parse_in_pairs() -> Result<(), String> {
    let pairs = parse_overrides(&["-uri", "http://a", "-runCount", "-1"])
        .map_err(|err| err.to_string())?;
    let expected = vec![
        ("uri".to_owned(), "http://a".to_owned()),
        ("runCount".to_owned(), "-1".to_owned()),
    ];
    if pairs != expected {
        return Err(format!("Unexpected pairs: {:?}", pairs));
    }
    Ok(())
}

#[test]
fn overrides_require_flag_marker() -> Result<(), String> {
    match parse_overrides(&["uri", "http://a"]) {
        Err(ValidationError::ArgumentFormat { token }) if token == "uri" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected format error".to_owned()),
    }
}

#[test]
fn overrides_reject_bare_marker() -> Result<(), String> {
    match parse_overrides(&["-", "value"]) {
        Err(ValidationError::ArgumentFormat { .. }) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected format error".to_owned()),
    }
}

#[test]
fn overrides_require_trailing_value() -> Result<(), String> {
    match parse_overrides(&["-uri", "http://a", "-method"]) {
        Err(ValidationError::MissingArgumentValue { name }) if name == "method" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected missing value error".to_owned()),
    }
}

#[test]
fn overrides_last_write_wins() -> Result<(), String> {
    let tokens = ["-method", "get", "-uri", "http://a", "-method", "post"];
    let settings = resolve_settings(None, no_env, &tokens)?;
    if settings.get(METHOD) != Some("post") {
        return Err(format!("Unexpected method: {:?}", settings.get(METHOD)));
    }
    if settings.len() != 2 {
        return Err(format!("Unexpected settings: {:?}", settings));
    }
    Ok(())
}

#[test]
fn layers_apply_file_then_env_then_cli() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("mercury.toml");
    std::fs::write(
        &path,
        "uri = \"http://file\"\nmethod = \"get\"\ncontentType = \"text/plain\"\n",
    )
    .map_err(|err| format!("write failed: {}", err))?;
    let config = load_config_file(&path)?;

    let mut env = BTreeMap::new();
    env.insert("MERCURY_URI", "http://env".to_owned());
    env.insert("MERCURY_METHOD", "post".to_owned());
    let lookup = |key: &str| env.get(key).cloned();

    let settings = resolve_settings(Some(config), lookup, &["-uri", "http://cli"])?;
    if settings.get(URI) != Some("http://cli") {
        return Err("CLI should override env and file".to_owned());
    }
    if settings.get(METHOD) != Some("post") {
        return Err("Env should override file".to_owned());
    }
    if settings.get(CONTENT_TYPE) != Some("text/plain") {
        return Err("File value should survive".to_owned());
    }
    Ok(())
}

#[test]
fn require_reports_missing_setting() -> Result<(), String> {
    let settings = Settings::default();
    match settings.require(URI) {
        Err(ValidationError::MissingSetting { name }) if name == URI => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected missing setting".to_owned()),
    }
}
