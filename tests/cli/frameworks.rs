use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_framework_detected_from_pubspec() -> Result<()> {
    let test = CliTest::getx_project("lib/main.dart", "void main() {}\n")?;

    let output = run(test.frameworks_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "flutter-getx  Flutter (GetX)  active\n");

    Ok(())
}

#[test]
fn test_framework_not_detected() -> Result<()> {
    let test = CliTest::with_file(
        "pubspec.yaml",
        "name: app\ndependencies:\n  provider: ^6.0.0\n",
    )?;

    let output = run(test.frameworks_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "flutter-getx  Flutter (GetX)  not detected\n");

    Ok(())
}

#[test]
fn test_framework_from_config() -> Result<()> {
    let test = CliTest::with_file(".dartglotrc.json", r#"{ "framework": "flutter-getx" }"#)?;

    let output = run(test.frameworks_command())?;

    assert_eq!(output.stdout, "flutter-getx  Flutter (GetX)  active\n");

    Ok(())
}

#[test]
fn test_verbose_lists_usage_patterns() -> Result<()> {
    let test = CliTest::getx_project("lib/main.dart", "void main() {}\n")?;

    let mut cmd = test.frameworks_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert!(output.stdout.contains(r"= LocaleKeys\.([\w.\-\[\] ]+?)\.tr\b"));

    Ok(())
}

#[test]
fn test_invalid_pubspec_warns() -> Result<()> {
    let test = CliTest::with_file("pubspec.yaml", "dependencies: [unclosed")?;

    let output = run(test.frameworks_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("warning:"));
    assert!(output.stderr.contains("pubspec.yaml"));
    assert_eq!(output.stdout, "flutter-getx  Flutter (GetX)  not detected\n");

    Ok(())
}
