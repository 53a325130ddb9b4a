//! Tests for layered settings loading

use std::fs;
use std::path::Path;

use rstest::rstest;
use rstree::config::{RenderStyle, Settings, SettingsError};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[rstest]
fn given_no_files_when_loading_then_defaults() {
    let settings = Settings::load_from(None, None).unwrap();
    assert_eq!(settings, Settings::default());
}

#[rstest]
fn given_explicit_file_when_loading_then_values_applied() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "rstree.toml", "indent_width = 4\nstyle = \"tree\"\n");

    let settings = Settings::load_from(None, Some(&path)).unwrap();

    assert_eq!(settings.indent_width, 4);
    assert_eq!(settings.style, RenderStyle::Tree);
}

#[rstest]
fn given_global_and_explicit_files_when_loading_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "indent_width = 8\nstyle = \"tree\"\n");
    let explicit = write_config(&dir, "local.toml", "indent_width = 3\n");

    let settings = Settings::load_from(Some(&global), Some(&explicit)).unwrap();

    assert_eq!(settings.indent_width, 3);
    assert_eq!(settings.style, RenderStyle::Tree);
}

#[rstest]
fn given_missing_global_file_when_loading_then_skipped() {
    let settings =
        Settings::load_from(Some(Path::new("/nonexistent/rstree/rstree.toml")), None).unwrap();
    assert_eq!(settings.indent_width, 2);
}

#[rstest]
fn given_missing_explicit_file_when_loading_then_error() {
    let result = Settings::load_from(None, Some(Path::new("/nonexistent/rstree.toml")));
    assert!(matches!(result, Err(SettingsError::Load(_))));
}

#[rstest]
fn given_invalid_style_when_loading_then_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "style = \"sideways\"\n");
    assert!(Settings::load_from(None, Some(&path)).is_err());
}
