use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

fn setup_master(test: &CliTest) -> Result<()> {
    test.write_file(
        "master/en/common.jsonc",
        r#"{
  // Buttons
  "ok": "OK",
  "cancel": "Cancel", // secondary action

  /* Greeting shown on launch */
  "greeting": "Welcome to {{platform}}",
}
"#,
    )?;
    test.write_file(
        "master/fr/common.jsonc",
        r#"{
  // Boutons
  "ok": "D'accord",
  "greeting": "Bienvenue sur {{platform}}"
}
"#,
    )?;
    test.write_file(
        "master/en/settings.jsonc",
        r#"{
  "title": "Settings & <Privacy>"
}
"#,
    )
}

#[test]
fn test_build_generates_all_platforms() -> Result<()> {
    let test = CliTest::new()?;
    setup_master(&test)?;

    assert_cmd_snapshot!(test.build_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Generating translations...

    Modules: common, settings
    Languages: en, fr

    ✓ iOS: Common.xcstrings
    ✓ iOS: Settings.xcstrings

    ✓ Android (en): strings_common.xml
    ✓ Android (en): strings_settings.xml
    ✓ Android (fr): strings_common.xml

    ✓ React (en): common.json
    ✓ React (en): settings.json
    ✓ React (fr): common.json

    ✓ Done: 8 files generated

    ----- stderr -----
    ");

    let catalog: Value = serde_json::from_str(&test.read_file("translations/ios/Common.xcstrings")?)
        .context("Catalog should be valid JSON")?;
    assert_eq!(catalog["sourceLanguage"], "en");
    assert_eq!(catalog["version"], "1.0");
    assert_eq!(catalog["strings"]["cancel"]["extractionState"], "manual");
    assert!(catalog["strings"]["cancel"]["localizations"].get("fr").is_none());
    assert_eq!(
        catalog["strings"]["greeting"]["localizations"]["fr"]["stringUnit"]["value"],
        "Bienvenue sur iOS"
    );

    assert_eq!(
        test.read_file("translations/android/values-fr/strings_common.xml")?,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <resources>\n\
         \n    <!-- Boutons -->\n\
         \x20   <string name=\"ok\">D\\'accord</string>\n\
         \x20   <string name=\"greeting\">Bienvenue sur Android</string>\n\
         </resources>\n"
    );
    assert!(
        test.read_file("translations/android/values/strings_settings.xml")?
            .contains("<string name=\"title\">Settings &amp; &lt;Privacy&gt;</string>")
    );

    let react: Value = serde_json::from_str(&test.read_file("translations/react/en/common.json")?)?;
    assert_eq!(react["greeting"], "Welcome to React");
    assert_eq!(react["cancel"], "Cancel");
    assert!(!test.exists("translations/react/fr/settings.json"));

    Ok(())
}

#[test]
fn test_build_with_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lingorc.json",
        r#"{
            "masterRoot": "./i18n",
            "outputRoot": "./generated",
            "sourceLanguage": "fr",
            "platformNames": { "android": "Droid" }
        }"#,
    )?;
    test.write_file("i18n/en/common.jsonc", "{\n  \"hi\": \"Hi {{platform}}\"\n}\n")?;
    test.write_file(
        "i18n/fr/common.jsonc",
        "{\n  \"hi\": \"Salut {{platform}}\"\n}\n",
    )?;

    let output = test.build_command().output()?;
    assert!(output.status.success());

    assert!(
        test.read_file("generated/android/values/strings_common.xml")?
            .contains("Salut Droid")
    );
    assert!(
        test.read_file("generated/android/values-en/strings_common.xml")?
            .contains("Hi Droid")
    );
    assert!(
        test.read_file("generated/ios/Common.xcstrings")?
            .contains("\"sourceLanguage\" : \"fr\"")
    );
    assert!(!test.exists("translations"));

    Ok(())
}

#[test]
fn test_build_single_line_master_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("master/en/common.jsonc", r#"{ "hi": "Hi {{platform}}" }"#)?;

    let output = test.build_command().output()?;
    assert!(output.status.success());

    // Android entries are read line by line, so a one-line object yields none.
    assert_eq!(
        test.read_file("translations/android/values/strings_common.xml")?,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n</resources>\n"
    );

    let react: Value =
        serde_json::from_str(&test.read_file("translations/react/en/common.json")?)?;
    assert_eq!(react["hi"], "Hi React");

    let catalog: Value =
        serde_json::from_str(&test.read_file("translations/ios/Common.xcstrings")?)?;
    assert_eq!(
        catalog["strings"]["hi"]["localizations"]["en"]["stringUnit"]["value"],
        "Hi iOS"
    );

    Ok(())
}

#[test]
fn test_build_cli_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", r#"{ "masterRoot": "./missing" }"#)?;
    test.write_file("strings/ko/home.jsonc", r#"{ "title": "홈" }"#)?;

    let output = test
        .build_command()
        .args(["--master-root", "strings", "--output-root", "out"])
        .args(["--source-language", "ko", "--target", "android"])
        .output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(test.exists("out/android/values/strings_home.xml"));
    assert!(!test.exists("out/ios"));
    assert!(!test.exists("out/react"));

    Ok(())
}

#[test]
fn test_build_removes_previous_output() -> Result<()> {
    let test = CliTest::new()?;
    setup_master(&test)?;
    test.write_file("translations/react/de/common.json", "{}")?;

    let output = test.build_command().output()?;
    assert!(output.status.success());

    assert!(!test.exists("translations/react/de"));
    assert!(test.exists("translations/react/fr/common.json"));

    Ok(())
}

#[test]
fn test_build_malformed_master_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_master(&test)?;
    test.write_file("master/fr/settings.jsonc", r#"{ "title": "Réglages" "#)?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Failed to parse master file:"));
    assert!(stderr.contains("settings.jsonc"));
    assert!(!test.exists("translations"));

    Ok(())
}

#[test]
fn test_build_missing_master_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));

    Ok(())
}

#[test]
fn test_build_rejects_output_containing_master() -> Result<()> {
    let test = CliTest::new()?;
    setup_master(&test)?;

    let output = test.build_command().args(["--output-root", "."]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(test.exists("master/en/common.jsonc"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));

    Ok(())
}
