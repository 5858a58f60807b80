//! Cutvertex CLI — build undirected graphs and find their articulation points
//!
//! Drives a `cutvertex::Session` from a script file, from command-line
//! arguments, or from an interactive shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use cutvertex::{
    execute, parse_command, run_script_file, AnalysisReport, Command, NodeId, Outcome,
    ScriptReport, Session, SessionConfig, Traversal,
};
use cutvertex::command::Rejection;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cutvertex", version, about = "Find articulation points (cut vertices) of undirected graphs")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log level written to stderr
    #[arg(long, default_value = "warn", global = true, env = "CUTVERTEX_LOG")]
    log_level: tracing::Level,

    /// Session configuration file (JSON)
    #[arg(long, global = true, env = "CUTVERTEX_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of nodes in the graph
    #[arg(long, global = true)]
    max_nodes: Option<usize>,

    /// Distance within which a position selects a node
    #[arg(long, global = true)]
    hit_radius: Option<f64>,

    /// Use the recursive DFS instead of the explicit-stack one
    #[arg(long, global = true)]
    recursive: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a command script (node / edge / analyze / ...)
    Run {
        /// Script file
        file: PathBuf,
    },
    /// Analyze a graph given on the command line
    Analyze {
        /// Number of nodes, identified 0..N-1
        #[arg(long)]
        nodes: usize,

        /// Edge as A-B; repeat for more edges
        #[arg(long = "edge", value_parser = parse_edge)]
        edges: Vec<(NodeId, NodeId)>,
    },
    /// Start an interactive shell
    Shell,
}

fn parse_edge(raw: &str) -> Result<(NodeId, NodeId), String> {
    let (a, b) = raw
        .split_once('-')
        .ok_or_else(|| format!("expected A-B, got '{}'", raw))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<u64>()
            .map(NodeId::new)
            .map_err(|_| format!("invalid node id '{}'", s))
    };
    Ok((parse(a)?, parse(b)?))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let mut session = Session::new(config);

    match cli.command {
        Commands::Run { ref file } => {
            let report = run_script_file(&mut session, file)
                .with_context(|| format!("running script {}", file.display()))?;
            print_report(&report, &cli.format)
        }
        Commands::Analyze { nodes, ref edges } => {
            let report = run_one_shot(&mut session, nodes, edges)?;
            print_report(&report, &cli.format)
        }
        Commands::Shell => run_shell(&mut session, &cli.format),
    }
}

fn build_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(max) = cli.max_nodes {
        config.max_nodes = Some(max);
    }
    if let Some(radius) = cli.hit_radius {
        anyhow::ensure!(
            radius.is_finite() && radius >= 0.0,
            "hit radius must be a non-negative number, got {}",
            radius
        );
        config.hit_radius = radius;
    }
    if cli.recursive {
        config.traversal = Traversal::Recursive;
    }
    Ok(config)
}

fn run_one_shot(
    session: &mut Session,
    nodes: usize,
    edges: &[(NodeId, NodeId)],
) -> Result<ScriptReport> {
    for _ in 0..nodes {
        session.add_node()?;
    }

    let mut report = ScriptReport::default();
    for (idx, &(a, b)) in edges.iter().enumerate() {
        if let Err(e) = execute(session, Command::AddEdge(a, b)) {
            report.rejected.push(Rejection {
                line: idx + 1,
                message: e.to_string(),
            });
        }
    }
    report.outcomes.push(execute(session, Command::Analyze)?);
    Ok(report)
}

fn print_report(report: &ScriptReport, format: &OutputFormat) -> Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for rejection in &report.rejected {
        eprintln!("warning: #{}: {}", rejection.line, rejection.message);
    }
    for outcome in &report.outcomes {
        print_outcome(outcome, format)?;
    }
    Ok(())
}

fn print_outcome(outcome: &Outcome, format: &OutputFormat) -> Result<()> {
    match (format, outcome) {
        (OutputFormat::Json, _) => println!("{}", serde_json::to_string(outcome)?),
        // Mutations stay quiet in table mode; the analysis is what matters
        (OutputFormat::Table, Outcome::NodeAdded { .. } | Outcome::EdgeAdded { .. }) => {}
        (OutputFormat::Table, Outcome::Analysis(report)) => print_analysis_table(report),
        (OutputFormat::Table, other) => println!("{}", other),
    }
    Ok(())
}

fn print_analysis_table(report: &AnalysisReport) {
    let points: Vec<String> = report.points.iter().map(ToString::to_string).collect();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Nodes", "Edges", "Components", "Articulation points"]);
    table.add_row(vec![
        report.node_count.to_string(),
        report.edge_count.to_string(),
        report.components.to_string(),
        if points.is_empty() { "-".to_string() } else { points.join(", ") },
    ]);

    println!("{}", table);
    println!("{}", report.summary());
}

fn run_shell(session: &mut Session, format: &OutputFormat) -> Result<()> {
    println!("Cutvertex Interactive Shell v{}", cutvertex::version());
    println!("Type commands, or :help for help. :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("cutvertex> ");

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  node [X Y]    — Add a node, optionally at a position");
                println!("  edge A B      — Connect nodes A and B");
                println!("  neighbors A   — List the neighbors of A");
                println!("  edges         — List every edge");
                println!("  analyze       — Find articulation points");
                println!("  stats         — Graph statistics");
                println!("  clear         — Remove every node and edge");
                println!("  :quit         — Exit shell");
            }
            input => match parse_command(input) {
                Ok(None) => {}
                Ok(Some(command)) => match execute(session, command) {
                    // Echo mutations in the shell even in table mode
                    Ok(outcome @ (Outcome::NodeAdded { .. } | Outcome::EdgeAdded { .. }))
                        if matches!(format, OutputFormat::Table) =>
                    {
                        println!("{}", outcome)
                    }
                    Ok(outcome) => print_outcome(&outcome, format)?,
                    Err(e) => eprintln!("Error: {}", e),
                },
                Err(e) => eprintln!("Error: {}", e),
            },
        }
    }

    println!("Bye!");
    Ok(())
}
