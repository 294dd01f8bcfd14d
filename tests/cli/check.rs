use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

const LOGIN_PAGE: &str = r#"import 'package:flutter/material.dart';

class LoginPage extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return Column(children: [
      Text('login.title'.tr),
      Text('Welcome back'),
    ]);
  }
}
"#;

#[test]
fn test_hardcoded_text() -> Result<()> {
    let test = CliTest::getx_project("lib/login_page.dart", LOGIN_PAGE)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("error: \"Welcome back\"  hardcoded\n"));
    assert!(output.stdout.contains("  --> lib/login_page.dart:8:12\n"));
    assert!(output.stdout.contains("8 |       Text('Welcome back'),\n"));
    assert!(output.stdout.contains("= hint: replace with 'welcome_back'.tr\n"));
    assert!(output.stdout.contains("1 problem (1 error, 0 warnings)"));
    assert!(!output.stdout.contains("login.title"));
    assert!(!output.stdout.contains("package:flutter"));

    Ok(())
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::getx_project(
        "lib/main.dart",
        r#"
// TODO: 'Remove this later'
Widget build(BuildContext context) => Text('home.title'.tr);
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(
        output
            .stdout
            .contains("Checked 1 source file - no issues found")
    );

    Ok(())
}

#[test]
fn test_no_hint_without_framework() -> Result<()> {
    let test = CliTest::with_file("lib/main.dart", "final label = Text('Sign in to continue');\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\"Sign in to continue\""));
    assert!(!output.stdout.contains("hint:"));

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::getx_project("lib/login_page.dart", LOGIN_PAGE)?;

    let mut cmd = test.check_command();
    cmd.args(["--format", "json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    let value: Value = serde_json::from_str(&output.stdout)?;
    let issues = value.as_array().expect("JSON array");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["file"], "lib/login_page.dart");
    assert_eq!(issues[0]["line"], 8);
    assert_eq!(issues[0]["col"], 12);
    assert_eq!(issues[0]["text"], "Welcome back");
    assert_eq!(issues[0]["fullText"], "'Welcome back'");
    assert_eq!(issues[0]["source"], "dart-string");
    assert_eq!(issues[0]["rule"], "hardcoded");

    Ok(())
}

#[test]
fn test_json_format_without_issues() -> Result<()> {
    let test = CliTest::with_file("lib/main.dart", "void main() {}\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--format", "json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout.trim(), "[]");

    Ok(())
}

#[test]
fn test_path_argument() -> Result<()> {
    let test = CliTest::with_file("app/lib/main.dart", "Text('Order confirmed');\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--path", "app"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("app/lib/main.dart:1:6"));

    Ok(())
}

#[test]
fn test_test_and_generated_files_are_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/main.dart", "void main() {}\n")?;
    test.write_file("lib/cart_test.dart", "expect(find.text('Cart is empty'), findsOneWidget);\n")?;
    test.write_file("lib/model.g.dart", "const label = 'Generated label';\n")?;
    test.write_file("test/widget_test.dart", "find.text('Add to cart');\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(
        output
            .stdout
            .contains("Checked 1 source file - no issues found")
    );

    Ok(())
}

#[test]
fn test_config_ignore_texts() -> Result<()> {
    let test = CliTest::with_file("lib/main.dart", "MaterialApp(title: 'Flutter Demo');\n")?;
    test.write_file(".dartglotrc.json", r#"{ "ignoreTexts": ["Flutter Demo"] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);

    Ok(())
}

#[test]
fn test_config_ignore_texts_with_interpolation() -> Result<()> {
    let test = CliTest::with_file("lib/main.dart", "Text('Hello, $name!');\n")?;
    test.write_file(".dartglotrc.json", r#"{ "ignoreTexts": ["Hello, $name!"] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);

    Ok(())
}

#[test]
fn test_config_includes_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".dartglotrc.json",
        r#"{
         "includes": ["lib", "packages/*/lib"],
         "ignores": ["**/legacy/**"]
     }"#,
    )?;
    test.write_file("lib/main.dart", "Text('Checkout now');\n")?;
    test.write_file("packages/ui/lib/button.dart", "Text('Tap to retry');\n")?;
    test.write_file("lib/legacy/old.dart", "Text('Old screen title');\n")?;
    test.write_file("tool/gen.dart", "print('Generating sources');\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\"Checkout now\""));
    assert!(output.stdout.contains("\"Tap to retry\""));
    assert!(!output.stdout.contains("Old screen title"));
    assert!(!output.stdout.contains("Generating sources"));
    assert!(output.stdout.contains("2 problems (2 errors, 0 warnings)"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("lib/main.dart", "void main() {}\n")?;
    test.write_file(".dartglotrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error:"));
    assert!(output.stderr.contains("ignores"));

    Ok(())
}

#[test]
fn test_unreadable_file_is_reported() -> Result<()> {
    let test = CliTest::with_file("lib/main.dart", "void main() {}\n")?;
    std::fs::write(test.root().join("lib/binary.dart"), [0xff, 0xfe, 0x00])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("read-error"));
    assert!(output.stdout.contains("--> lib/binary.dart\n"));
    assert!(output.stderr.contains("1 file(s) could not be read"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    for command in ["check", "usages", "frameworks", "init"] {
        assert!(output.stdout.contains(command), "missing {}", command);
    }

    Ok(())
}
