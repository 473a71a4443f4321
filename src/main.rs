//! mermaid-graph CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use mermaid_graph::ExportConfig;
use mermaid_graph::parse;
use mermaid_graph::renderers::{ElementsRenderer, Renderer, SummaryRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Element list, legend and cycles as JSON
    Json,
    /// Human-readable counts and cycle report
    Summary,
}

/// Parse a Mermaid flowchart and report its structure and cycles.
#[derive(Parser, Debug)]
#[command(
    name = "mermaid-graph",
    version = env!("MERMAID_GRAPH_VERSION"),
    about = "Parse a Mermaid flowchart and report its structure and cycles"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Node to select; adds its highlighted/dimmed partition
    #[arg(short = 's', long = "select")]
    select: Option<String>,

    /// Emit single-line JSON
    #[arg(long = "compact")]
    compact: bool,

    /// Leave enumerated cycles out of the JSON output
    #[arg(long = "no-cycles")]
    no_cycles: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };
    debug!(bytes = text.len(), "read input");

    let graph = match parse(&text) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    info!(edges = graph.edges.len(), subgraphs = graph.subgraphs.len(), "parsed diagram");

    let rendered = match cli.format {
        Format::Json => {
            let config = ExportConfig {
                include_cycles: !cli.no_cycles,
                pretty: !cli.compact,
                ..ExportConfig::default()
            };
            let mut renderer = ElementsRenderer::new(config);
            if let Some(node) = &cli.select {
                renderer = renderer.with_selection(node.as_str());
            }
            renderer.render(&graph)
        }
        Format::Summary => {
            let mut renderer = SummaryRenderer::new();
            if let Some(node) = &cli.select {
                renderer = renderer.with_selection(node.as_str());
            }
            renderer.render(&graph)
        }
    };
    let mut rendered = match rendered {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
