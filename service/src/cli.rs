//! Command-line interface for xml2class.
//!
//! This module provides the `xml2class` tool:
//! - Class inference from a sample XML document
//! - JSON, YAML or human-readable output

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::{Xml2ClassConfig, load_config};
use crate::inference::{ClassIntrospector, ClassSet, XmlClassIntrospector};

/// Infer a class schema from an example XML document
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Pretty,
    /// `JSON` output
    Json,
    /// `YAML` output
    Yaml,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Infer classes from a sample document
    Infer {
        /// Sample XML document
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, default_value = "pretty")]
        format: OutputFormat,
    },
}

/// Parse arguments and run the selected command
///
/// # Errors
///
/// Returns error if the configuration, input document or output file cannot
/// be processed.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    info!("Starting xml2class");

    match execute(&cli).await {
        Ok(()) => {
            info!("Command completed successfully");
            Ok(())
        }
        Err(err) => {
            error!("Command failed: {err:#}");
            Err(err)
        }
    }
}

/// Configure tracing subscriber based on CLI flags
fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        tracing::Level::ERROR
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Xml2ClassConfig::default(),
    };

    match &cli.command {
        Commands::Infer {
            input,
            output,
            format,
        } => infer_command(&config, input, output.as_deref(), *format).await,
    }
}

async fn infer_command(
    config: &Xml2ClassConfig,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let introspector = XmlClassIntrospector::new(config.loader.clone(), config.inference.clone())?;
    let classes = introspector
        .analyze_file(input)
        .await
        .with_context(|| format!("failed to infer classes from {}", input.display()))?;

    let stats = classes.stats();
    info!(
        "Inferred {} classes ({} candidates, {} dropped, {} renamed)",
        classes.len(),
        stats.candidates,
        stats.dropped,
        stats.suffixed
    );

    let rendered = render(&classes, format)?;
    match output {
        Some(path) => tokio::fs::write(path, rendered)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Render a class set in the requested format
///
/// # Errors
///
/// Returns error if serialization or formatting fails.
pub fn render(classes: &ClassSet, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(classes)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(classes)?),
        OutputFormat::Pretty => Ok(render_pretty(classes)?),
    }
}

/// One block per class: a header line, then one indented line per field
fn render_pretty(classes: &ClassSet) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for class in classes {
        let marker = if class.name == classes.root_name() {
            " (root)"
        } else {
            ""
        };
        write!(out, "{}{} <{}>", class.name.bold(), marker, class.xml_name)?;
        if !class.namespace.is_empty() {
            write!(out, " {}", class.namespace.dimmed())?;
        }
        out.push('\n');

        for field in &class.fields {
            writeln!(
                out,
                "    {}: {} [{}, xml: {}]",
                field.name,
                field.field_type.cyan(),
                field.xml_type,
                field.xml_name
            )?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::infer_classes;
    use xml2class_core::Element;

    fn sample() -> ClassSet {
        let root = Element::new("Root")
            .with_attribute("id", "5")
            .with_child(Element::new("Child"));
        infer_classes(&root).unwrap()
    }

    #[test]
    fn test_cli_parses_infer() {
        let cli = Cli::try_parse_from(["xml2class", "-v", "infer", "doc.xml", "-f", "json"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Infer { input, format, output } => {
                assert_eq!(input, PathBuf::from("doc.xml"));
                assert_eq!(format, OutputFormat::Json);
                assert!(output.is_none());
            }
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["xml2class", "-v", "-q", "infer", "doc.xml"]).is_err());
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["root"], "Root");
        assert_eq!(value["classes"][0]["fields"][0]["name"], "RootChild");
        assert_eq!(value["classes"][0]["fields"][1]["xml_type"], "attribute");
    }

    #[test]
    fn test_render_pretty() {
        colored::control::set_override(false);
        let text = render(&sample(), OutputFormat::Pretty).unwrap();
        assert!(text.starts_with("Root (root) <Root>\n"));
        assert!(text.contains("    RootChild: String [Element, xml: Child]\n"));
        assert!(text.contains("    id: String [Attribute, xml: id]\n"));
    }

    #[test]
    fn test_render_pretty_nested_namespaced() {
        colored::control::set_override(false);
        let root = Element::new("feed")
            .with_namespace("urn:feed")
            .with_child(
                Element::new("entry")
                    .with_namespace("urn:feed")
                    .with_attribute("id", "1"),
            );
        let set = infer_classes(&root).unwrap();

        let text = render(&set, OutputFormat::Pretty).unwrap();
        assert_eq!(
            text,
            "feedentry <entry> urn:feed\n    id: String [Attribute, xml: id]\n\
             feed (root) <feed> urn:feed\n    feedentry: feedentry [Element, xml: entry]\n"
        );
    }
}
