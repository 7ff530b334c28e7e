use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, git_available, stderr, stdout};

const INTRO: &str = "\
<para>
<!--
 PostgreSQL is a database.
-->
PostgreSQLはデータベースです。
</para>
";

#[test]
fn test_extract_para_writes_dictionary() -> Result<()> {
    let test = CliTest::with_file("intro.sgml", INTRO)?;

    let output = test.extract_command().arg("--para").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 1 pair from 1 file (documents)"));

    assert_eq!(
        test.read_file(".jpug-doc-tool/intro.sgml.t")?,
        "␝␟PostgreSQL is a database.␟PostgreSQLはデータベースです。\n</para>␞\n"
    );
    assert!(test.root().join(".jpug-doc-tool/ref").is_dir());

    Ok(())
}

#[test]
fn test_extract_para_skips_denylisted_files() -> Result<()> {
    let test = CliTest::with_file("intro.sgml", INTRO)?;
    test.write_file("func0.sgml", INTRO)?;
    test.write_file("ref/jpug-doc.sgml", INTRO)?;
    test.write_file("ref/select.sgml", INTRO)?;

    let output = test.extract_command().args(["--para", "-v"]).output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    assert!(test.root().join(".jpug-doc-tool/intro.sgml.t").exists());
    assert!(test.root().join(".jpug-doc-tool/ref/select.sgml.t").exists());
    assert!(!test.root().join(".jpug-doc-tool/func0.sgml.t").exists());
    assert!(!test.root().join(".jpug-doc-tool/ref/jpug-doc.sgml.t").exists());

    Ok(())
}

#[test]
fn test_extract_honors_config_ignores() -> Result<()> {
    let test = CliTest::with_file("intro.sgml", INTRO)?;
    test.write_file("release-16.sgml", INTRO)?;
    test.write_file(".jpug-doc-tool.json", r#"{ "ignores": ["release-*.sgml"] }"#)?;

    let output = test.extract_command().arg("--para").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(!test.root().join(".jpug-doc-tool/release-16.sgml.t").exists());

    Ok(())
}

#[test]
fn test_extract_without_targets_warns() -> Result<()> {
    let test = CliTest::with_file("README.md", "not documentation")?;

    let output = test.extract_command().arg("--para").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: No SGML files found"));
    assert!(!test.root().join(".jpug-doc-tool").exists());

    Ok(())
}

#[test]
fn test_extract_without_version_file_fails() -> Result<()> {
    let test = CliTest::with_file("intro.sgml", INTRO)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));
    assert!(stderr(&output).contains("version.sgml"));

    Ok(())
}

#[test]
fn test_extract_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file("intro.sgml", INTRO)?;
    test.write_file(".jpug-doc-tool.json", r#"{ "diffContext": 0 }"#)?;

    let output = test.extract_command().arg("--para").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("diffContext"));

    Ok(())
}

#[test]
fn test_extract_from_git_diff() -> Result<()> {
    if !git_available() {
        eprintln!("git not available, skipping");
        return Ok(());
    }

    let test = CliTest::with_file("version.sgml", "<!ENTITY version \"16.0\">\n")?;
    test.write_file("intro.sgml", "<para>\n PostgreSQL is a database.\n</para>\n")?;
    test.git(&["init", "-q"])?;
    test.git(&["add", "."])?;
    test.git(&["commit", "-q", "-m", "upstream"])?;
    test.git(&["tag", "REL_16_0"])?;

    test.write_file(
        "intro.sgml",
        "<para>\n<!--\n PostgreSQL is a database.\n-->\nPostgreSQLはデータベースです。\n</para>\n",
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("diff against REL_16_0"));

    assert_eq!(
        test.read_file(".jpug-doc-tool/intro.sgml.t")?,
        "␝ <para>␟PostgreSQL is a database.␟PostgreSQLはデータベースです。␞\n"
    );

    Ok(())
}
