use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

const HOME_PAGE: &str = r#"class HomePage extends GetView<HomeController> {
  @override
  Widget build(BuildContext context) {
    return Column(children: [
      Text('home.title'.tr),
      Text('home.greeting'.trParams({'name': controller.name})),
      Text(LocaleKeys.home_footer.tr),
    ]);
  }
}
"#;

#[test]
fn test_lists_key_usages() -> Result<()> {
    let test = CliTest::getx_project("lib/home_page.dart", HOME_PAGE)?;

    let output = run(test.usages_command())?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "lib/home_page.dart:5:12  home.title  'home.title'.tr",
            "lib/home_page.dart:6:12  home.greeting  'home.greeting'.trParams(",
            "lib/home_page.dart:7:12  home_footer  LocaleKeys.home_footer.tr",
            "\u{2713} Found 3 key usages in 1 file (Flutter (GetX))",
        ]
    );

    Ok(())
}

#[test]
fn test_usages_json() -> Result<()> {
    let test = CliTest::getx_project("lib/home_page.dart", HOME_PAGE)?;

    let mut cmd = test.usages_command();
    cmd.args(["--format", "json"]);
    let output = run(cmd)?;

    let value: Value = serde_json::from_str(&output.stdout)?;
    let keys: Vec<&str> = value
        .as_array()
        .expect("JSON array")
        .iter()
        .filter_map(|u| u["key"].as_str())
        .collect();
    assert_eq!(keys, vec!["home.title", "home.greeting", "home_footer"]);

    Ok(())
}

#[test]
fn test_usages_without_framework() -> Result<()> {
    let test = CliTest::with_file("lib/home_page.dart", HOME_PAGE)?;

    let output = run(test.usages_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.is_empty());
    assert!(
        output
            .stderr
            .contains("No localization framework detected")
    );

    Ok(())
}

#[test]
fn test_usages_with_framework_flag() -> Result<()> {
    let test = CliTest::with_file("lib/home_page.dart", HOME_PAGE)?;

    let mut cmd = test.usages_command();
    cmd.args(["--framework", "flutter-getx"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Found 3 key usages"));

    Ok(())
}

#[test]
fn test_unknown_framework_flag() -> Result<()> {
    let test = CliTest::with_file("lib/home_page.dart", HOME_PAGE)?;

    let mut cmd = test.usages_command();
    cmd.args(["--framework", "flutter-intl"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Unknown framework: \"flutter-intl\""));

    Ok(())
}
