use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, git_available, stderr, stdout};

/// A repository tagged at the upstream text, with the translation applied
/// on top in the working tree.
fn translated_repo() -> Result<CliTest> {
    let test = CliTest::with_file("version.sgml", "<!ENTITY version \"16.0\">\n")?;
    test.write_file(
        "func.sgml",
        "<para>\n The foo function.\n</para>\n<para>\n A table.\n</para>\n",
    )?;
    test.git(&["init", "-q"])?;
    test.git(&["add", "."])?;
    test.git(&["commit", "-q", "-m", "upstream"])?;
    test.git(&["tag", "REL_16_0"])?;

    test.write_file(
        "func.sgml",
        "<para>\n<!--\n The foo function.\n-->\nある関数。\n</para>\n\
         <para>\n<!--\n A table.\n-->\nテーブルです。\n</para>\n",
    )?;
    Ok(test)
}

#[test]
fn test_check_word_reports_mismatch() -> Result<()> {
    if !git_available() {
        eprintln!("git not available, skipping");
        return Ok(());
    }
    let test = translated_repo()?;

    let output = test.check_word_command().args(["foo", "バー"]).output()?;
    assert_eq!(output.status.code(), Some(1), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("func.sgml\nThe foo function.\nある関数。\n"));
    assert!(out.contains("Found 1 pair with \"foo\" but no \"バー\""));

    Ok(())
}

#[test]
fn test_check_word_consistent() -> Result<()> {
    if !git_available() {
        eprintln!("git not available, skipping");
        return Ok(());
    }
    let test = translated_repo()?;

    let output = test
        .check_word_command()
        .args(["table", "テーブル", "func.sgml"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("✓ Checked 1 file against REL_16_0"));

    Ok(())
}

#[test]
fn test_check_word_requires_words() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.check_word_command().arg("foo").output()?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
