//! `jsontree` CLI — inspect JSON documents as trees from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Render a document as an indented outline (stdin → stdout)
//! echo '{"name":"Alice","scores":[95,87]}' | jsontree view
//!
//! # Render from file, collapsing everything below depth 2
//! jsontree view -i data.json --depth 2
//!
//! # Validate a file and report how many root documents it contains
//! jsontree check -i data.json
//!
//! # Per-kind node counts and maximum nesting depth
//! jsontree stats -i data.json
//! ```
//!
//! Inputs may contain any number of concatenated root-level JSON values;
//! every subcommand handles all of them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::io::{self, Read};

use jsontree_core::{parse, Scalar, TreeNode};

/// Rendered in place of children hidden by `--depth`, mirroring a
/// collapsed subtree. Scoped here: the parsing core knows nothing of it.
const COLLAPSED_PLACEHOLDER: &str = ". . .";

#[derive(Parser)]
#[command(name = "jsontree", version, about = "Inspect JSON documents as trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render each root document as an indented outline
    View {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Collapse nodes deeper than this many levels
        #[arg(long)]
        depth: Option<usize>,
    },
    /// Validate the input and report the number of root documents
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show node counts and maximum nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::View {
            input,
            output,
            depth,
        } => {
            let text = read_input(input.as_deref())?;
            let roots = parse(&text).context("Failed to parse input")?;
            let mut out = String::new();
            for root in &roots {
                render_node(root, 0, depth, &mut out);
            }
            write_output(output.as_deref(), &out)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let roots = parse(&text).context("Invalid input")?;
            match roots.len() {
                1 => println!("OK: 1 root document"),
                n => println!("OK: {n} root documents"),
            }
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let roots = parse(&text).context("Failed to parse input")?;
            let mut stats = Stats::default();
            for root in &roots {
                stats.visit(root, 1);
            }
            println!("Roots:      {}", roots.len());
            println!("Objects:    {}", stats.objects);
            println!("Arrays:     {}", stats.arrays);
            println!("Properties: {}", stats.properties);
            println!("Scalars:    {}", stats.scalars);
            println!("Max depth:  {}", stats.max_depth);
        }
    }

    Ok(())
}

/// The label vocabulary of the tree outline: containers announce their
/// kind, properties their name, scalars their value.
fn label(node: &TreeNode) -> String {
    match node {
        TreeNode::Object(_) => "JSON".to_string(),
        TreeNode::Array(_) => "ARRAY".to_string(),
        TreeNode::Scalar(s) => scalar_label(s),
    }
}

fn scalar_label(scalar: &Scalar) -> String {
    match scalar {
        Scalar::String(text) => text.clone(),
        Scalar::Number(n) => format!("{n}"),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Null => "NULL".to_string(),
    }
}

/// Render one node and its subtree at the given indent level. When `limit`
/// is reached, a node that still has children renders the collapsed
/// placeholder instead of them.
fn render_node(node: &TreeNode, level: usize, limit: Option<usize>, out: &mut String) {
    let _ = writeln!(out, "{}{}", "  ".repeat(level), label(node));

    let has_children = match node {
        TreeNode::Object(obj) => !obj.is_empty(),
        TreeNode::Array(arr) => !arr.is_empty(),
        TreeNode::Scalar(_) => false,
    };
    if !has_children {
        return;
    }
    if limit.is_some_and(|max| level + 1 >= max) {
        let _ = writeln!(out, "{}{}", "  ".repeat(level + 1), COLLAPSED_PLACEHOLDER);
        return;
    }

    match node {
        TreeNode::Object(obj) => {
            for prop in obj.properties() {
                let _ = writeln!(out, "{}{}", "  ".repeat(level + 1), prop.name());
                render_node(prop.value(), level + 2, limit, out);
            }
        }
        TreeNode::Array(arr) => {
            for element in arr.elements() {
                render_node(element, level + 1, limit, out);
            }
        }
        TreeNode::Scalar(_) => {}
    }
}

#[derive(Default)]
struct Stats {
    objects: usize,
    arrays: usize,
    properties: usize,
    scalars: usize,
    max_depth: usize,
}

impl Stats {
    fn visit(&mut self, node: &TreeNode, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match node {
            TreeNode::Object(obj) => {
                self.objects += 1;
                self.properties += obj.len();
                for prop in obj.properties() {
                    self.visit(prop.value(), depth + 1);
                }
            }
            TreeNode::Array(arr) => {
                self.arrays += 1;
                for element in arr.elements() {
                    self.visit(element, depth + 1);
                }
            }
            TreeNode::Scalar(_) => self.scalars += 1,
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
