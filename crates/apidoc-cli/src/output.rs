//! Delivering rendered documents: files on disk, stdout, and the viewer

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use apidoc_core::RenderedDocument;

/// File name for a package's rendered page
pub fn file_name(package: &str) -> String {
    let safe: String = package
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();
    format!("apidoc_{}.html", safe)
}

/// Fail when two packages would be written to the same file
///
/// Takes `(package id, package name)` pairs; names that differ only in
/// characters replaced by [`file_name`] also collide.
pub fn check_distinct_files<'a>(
    packages: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<()> {
    let mut claimed: HashMap<String, &str> = HashMap::new();
    for (id, name) in packages {
        let file = file_name(name);
        if let Some(first) = claimed.get(&file) {
            bail!(
                "Packages '{}' and '{}' would both be written to '{}'",
                first,
                id,
                file
            );
        }
        claimed.insert(file, id);
    }
    Ok(())
}

/// Write a document into `dir`, returning the path written
pub fn write_file(document: &RenderedDocument, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory '{}'", dir.display()))?;

    let path = dir.join(file_name(document.package()));
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create '{}'", path.display()))?;
    document
        .write_to(std::io::BufWriter::new(file))
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    tracing::info!(path = %path.display(), "wrote documentation");
    Ok(path)
}

/// Write a document to stdout
pub fn write_stdout(document: &RenderedDocument) -> Result<()> {
    let stdout = std::io::stdout();
    document
        .write_to(stdout.lock())
        .context("Failed to write to stdout")?;
    Ok(())
}

/// Open a file with `browser`, or the platform's default opener
pub fn open_in_browser(path: &Path, browser: Option<&str>) -> Result<()> {
    if let Some(browser) = browser.filter(|b| !b.trim().is_empty()) {
        std::process::Command::new(browser)
            .arg(path)
            .spawn()
            .with_context(|| format!("Failed to launch '{}'", browser))?;
        return Ok(());
    }

    let url = format!("file://{}", path.canonicalize()?.display());

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(&url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(&url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_core::{generate, Package, RenderConfig};

    #[test]
    fn test_file_name_is_path_safe() {
        assert_eq!(file_name("stack"), "apidoc_stack.html");
        assert_eq!(file_name("net/http"), "apidoc_net_http.html");
    }

    #[test]
    fn test_colliding_file_names_rejected() {
        assert!(check_distinct_files([("a.json", "util"), ("b.json", "list")]).is_ok());

        let err = check_distinct_files([("a.json", "util"), ("b.json", "util")]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'a.json'") && msg.contains("'b.json'"));
        assert!(msg.contains("apidoc_util.html"));

        let err = check_distinct_files([("x", "net/http"), ("y", "net_http")]).unwrap_err();
        assert!(err.to_string().contains("apidoc_net_http.html"));
    }

    #[test]
    fn test_write_file_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("docs");
        let doc = generate(&Package::new("stack", "example.com/stack"), &RenderConfig::default())
            .unwrap();

        let path = write_file(&doc, &out).unwrap();
        assert_eq!(path, out.join("apidoc_stack.html"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), doc.as_str());
    }
}
