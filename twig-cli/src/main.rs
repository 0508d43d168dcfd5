//! Twig CLI
//!
//! Parses a twig document and prints its tokens, tree, canonical
//! rendering, or JSON form.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use twig_common::warning::clear_warnings;
use twig_dom::{Node, render};
use twig_html::{Token, TreeBuilder, print_tree, tokenize};

/// Demo document parsed when no input is given.
const SAMPLE_DOCUMENT: &str = "<p>I'm NIX</p>
<div>
    <div>
        <p>Hello</p>
        <p>World</p>
    </div>
</div>";

/// Parse simple HTML-like markup into a tree
#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Parse the built-in sample document
    twig

    # Parse a file and print only the tree
    twig --emit tree ./page.twig

    # Parse inline markup as JSON
    twig --emit json --html '<a href=https://apple.com>Apple</a>'
"#)]
struct Cli {
    /// Path to a markup file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse this string instead of a file
    #[arg(long, value_name = "MARKUP")]
    html: Option<String>,

    /// Which stage to print
    #[arg(long, value_enum, default_value_t = Emit::All)]
    emit: Emit,

    /// Log tokenizer and tree builder activity to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Name of the element wrapping multiple top-level nodes
    #[arg(long, value_name = "NAME", default_value = twig_dom::ROOT_ELEMENT_NAME)]
    root_name: String,
}

/// Output stage selected with `--emit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
enum Emit {
    Tokens,
    Tree,
    Render,
    Json,
    All,
}

impl Emit {
    /// Stages printed for this selection, in pipeline order.
    fn stages(self) -> Vec<Self> {
        if self == Self::All {
            Self::iter().filter(|stage| *stage != Self::All).collect()
        } else {
            vec![self]
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = load_source(&cli)?;
    run(&cli, &source)
}

/// Read the document named on the command line.
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(ref markup) = cli.html {
        Ok(markup.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        debug!("no input given, using sample document");
        Ok(SAMPLE_DOCUMENT.to_owned())
    }
}

fn run(cli: &Cli, source: &str) -> Result<()> {
    clear_warnings();
    let tokens = tokenize(source).context("failed to tokenize input")?;
    let stages = cli.emit.stages();

    if stages.contains(&Emit::Tokens) {
        print_tokens(&tokens);
    }

    let tree = TreeBuilder::new(tokens)
        .with_root_name(cli.root_name.as_str())
        .run()
        .context("failed to build tree")?;

    for stage in stages {
        match stage {
            Emit::Tree => {
                header(stage);
                print_tree(&tree);
            }
            Emit::Render => {
                header(stage);
                println!("{}", render(&tree));
            }
            Emit::Json => {
                header(stage);
                println!("{}", to_json(&tree)?);
            }
            Emit::Tokens | Emit::All => {}
        }
    }
    Ok(())
}

fn header(stage: Emit) {
    println!("{}", format!("=== {stage} ===").bold().cyan());
}

fn print_tokens(tokens: &[Token]) {
    header(Emit::Tokens);
    for token in tokens {
        println!("{} {token}", format!("{:<9}", token.kind()).dimmed());
    }
}

fn to_json(tree: &Node) -> Result<String> {
    serde_json::to_string_pretty(tree).context("failed to serialize tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expands_to_every_stage() {
        assert_eq!(
            Emit::All.stages(),
            vec![Emit::Tokens, Emit::Tree, Emit::Render, Emit::Json]
        );
        assert_eq!(Emit::Json.stages(), vec![Emit::Json]);
    }

    #[test]
    fn test_emit_names_match_cli_values() {
        for stage in Emit::iter() {
            let value = stage.to_possible_value().unwrap();
            assert_eq!(value.get_name(), stage.to_string());
        }
    }

    #[test]
    fn test_sample_document_parses() {
        let tree = twig_html::parse(SAMPLE_DOCUMENT).unwrap();
        assert_eq!(tree.children().len(), 2);
        assert!(to_json(&tree).unwrap().contains("\"I'm NIX\""));
    }

    #[test]
    fn test_cli_rejects_path_and_html_together() {
        let result = Cli::try_parse_from(["twig", "file.twig", "--html", "<p>x</p>"]);
        assert!(result.is_err());
    }
}
