//! apidoc CLI - generates HTML API documentation from symbol models

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use apidoc_core::{render_all, Package, RenderError, SourceInspector};

mod config;
mod inspector;
mod output;

use inspector::ModelFileInspector;

#[derive(Parser, Debug)]
#[command(name = "apidoc")]
#[command(version = apidoc_core::VERSION)]
#[command(about = "Generates API documentation to HTML", long_about = None)]
#[command(after_help = "If BROWSER is set, the generated file is automatically opened.")]
struct Cli {
    /// Packages to document (a model file, a directory with apidoc.json, or a name in --model-dir)
    #[arg(default_value = ".")]
    packages: Vec<String>,

    /// Write the generated HTML to stdout instead of a file
    #[arg(short = 'w', long)]
    write_to_stdout: bool,

    /// Directory for generated files (defaults to the system temp directory)
    #[arg(short = 'd', long)]
    out_dir: Option<PathBuf>,

    /// Directory holding <package>.json symbol models
    #[arg(long, default_value = ".")]
    model_dir: PathBuf,

    /// Render configuration file (defaults to ./apidoc.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open the first generated file in a browser
    #[arg(long, conflicts_with = "write_to_stdout")]
    open: bool,
}

fn main() {
    // Logs go to stderr so stdout stays clean for --write-to-stdout
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();
    let browser = std::env::var("BROWSER").ok();
    if let Err(e) = run(&cli, browser.as_deref()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, browser: Option<&str>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let render_config = config::resolve(cli.config.as_deref(), &cwd)?;
    let inspector = ModelFileInspector::new(&cli.model_dir);

    let models = load_models(&inspector, &cli.packages)?;
    if !cli.write_to_stdout {
        output::check_distinct_files(
            cli.packages
                .iter()
                .map(String::as_str)
                .zip(models.iter().map(|m| m.name.as_str())),
        )?;
    }
    let mut documents = Vec::with_capacity(models.len());
    for (name, result) in cli.packages.iter().zip(render_all(&models, &render_config)) {
        documents.push(result.with_context(|| format!("Failed to document '{}'", name))?);
    }

    if cli.write_to_stdout {
        for document in &documents {
            output::write_stdout(document)?;
        }
        return Ok(());
    }

    let out_dir = cli.out_dir.clone().unwrap_or_else(std::env::temp_dir);
    let mut written = Vec::with_capacity(documents.len());
    for document in &documents {
        let path = output::write_file(document, &out_dir)?;
        println!("{}", path.display());
        written.push(path);
    }

    if cli.open || browser.is_some() {
        if let Some(first) = written.first() {
            open(first, browser);
        }
    }

    Ok(())
}

/// Resolve every package before rendering any of them
fn load_models(inspector: &dyn SourceInspector, packages: &[String]) -> Result<Vec<Package>> {
    packages
        .iter()
        .map(|name| {
            inspector.inspect(name).map_err(|source| {
                anyhow::Error::from(RenderError::Unresolvable {
                    package: name.clone(),
                    source,
                })
            })
        })
        .collect()
}

fn open(path: &Path, browser: Option<&str>) {
    if let Err(e) = output::open_in_browser(path, browser) {
        tracing::warn!("Could not open browser: {:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_arguments() {
        let cli = Cli::try_parse_from(["apidoc"]).unwrap();
        assert_eq!(cli.packages, vec!["."]);
        assert!(!cli.write_to_stdout);
        assert!(cli.out_dir.is_none());
    }

    #[test]
    fn test_write_to_stdout_flag() {
        let cli = Cli::try_parse_from(["apidoc", "-w", "stack", "queue"]).unwrap();
        assert!(cli.write_to_stdout);
        assert_eq!(cli.packages, vec!["stack", "queue"]);
    }

    #[test]
    fn test_bad_flag_rejected() {
        assert!(Cli::try_parse_from(["apidoc", "--no-such"]).is_err());
        assert!(Cli::try_parse_from(["apidoc", "-w", "--open"]).is_err());
    }

    #[test]
    fn test_run_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("stack.json"),
            r#"{ "name": "stack", "types": [{ "name": "Stack", "decl": "type Stack struct{}" }] }"#,
        )
        .unwrap();
        let out = dir.path().join("out");

        let cli = Cli::try_parse_from([
            "apidoc",
            "--model-dir",
            dir.path().to_str().unwrap(),
            "--out-dir",
            out.to_str().unwrap(),
            "--config",
            dir.path().join("none.toml").to_str().unwrap(),
            "stack",
        ])
        .unwrap();

        // The config file does not exist, so the run fails before rendering
        assert!(run(&cli, None).is_err());
        assert!(!out.exists());

        std::fs::write(dir.path().join("none.toml"), "banner = \"Test\"\n").unwrap();
        run(&cli, None).unwrap();
        let html = std::fs::read_to_string(out.join("apidoc_stack.html")).unwrap();
        assert!(html.contains("<div class=\"top\">Test</div>"));
        assert!(html.contains("id=\"Stack\""));
    }

    #[test]
    fn test_run_rejects_same_output_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{ "name": "util", "doc": "FIRST" }"#).unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{ "name": "util", "doc": "SECOND" }"#).unwrap();
        std::fs::write(dir.path().join("empty.toml"), "").unwrap();
        let out = dir.path().join("out");

        let cli = Cli::try_parse_from([
            "apidoc",
            "--model-dir",
            dir.path().to_str().unwrap(),
            "--out-dir",
            out.to_str().unwrap(),
            "--config",
            dir.path().join("empty.toml").to_str().unwrap(),
            "a",
            "b",
        ])
        .unwrap();

        let err = run(&cli, None).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("'a'") && msg.contains("'b'"));
        assert!(!out.exists());
    }

    #[test]
    fn test_run_unresolvable_package() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "apidoc",
            "--model-dir",
            dir.path().to_str().unwrap(),
            "--out-dir",
            dir.path().to_str().unwrap(),
            "--config",
            dir.path().join("empty.toml").to_str().unwrap(),
            "missing",
        ])
        .unwrap();
        std::fs::write(dir.path().join("empty.toml"), "").unwrap();

        let err = run(&cli, None).unwrap_err();
        assert!(format!("{:#}", err).contains("cannot resolve package 'missing'"));
    }
}
