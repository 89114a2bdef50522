use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["masterRoot"], "./master");
    assert_eq!(parsed["outputRoot"], "./translations");
    assert_eq!(parsed["sourceLanguage"], "en");
    assert_eq!(parsed["platformNames"]["ios"], "iOS");
    assert_eq!(parsed["platformNames"]["android"], "Android");
    assert_eq!(parsed["platformNames"]["react"], "React");

    assert!(
        content.contains("\n  \"masterRoot\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .lingorc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".lingorc.json").exists());
    let content = test.read_file(".lingorc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".lingorc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains(".lingorc.json already exists"));
    assert_eq!(test.read_file(".lingorc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("master/en/common.jsonc", r#"{ "ok": "OK" }"#)?;

    let output = test.build_command().output()?;
    assert!(
        output.status.success(),
        "Build command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.exists("translations/react/en/common.json"));

    Ok(())
}
