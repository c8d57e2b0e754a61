extern crate clap;
extern crate log4rs;
#[macro_use]
extern crate log;
extern crate rpaths;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

use clap::{Parser, Subcommand};

use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use rpaths::digraph::Digraph;
use rpaths::errors::*;
use rpaths::graph::{Edge, Node};
use rpaths::path::{hop_count, print_path, Path};
use rpaths::random::{node_at, random_graph};
use rpaths::recursion::towers_moves;
use rpaths::search::{bfs_traced, hop_distance, shortest_path_traced, LogTrace, NoTrace, Trace};
use rpaths::square::SquareGrid;
use rpaths::xorshift::XorShift128Plus;
use rpaths::Kind;

use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Shortest paths by depth-first and breadth-first search")]
struct Cli {
    /// Also write the log to this file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short)]
    verbose: bool,

    /// Log every partial path the searches visit (implies --verbose)
    #[arg(long, short)]
    trace: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the six-node example graph from 0 to 5
    Demo,
    /// Search a random graph built from a seed
    Random {
        #[arg(long, short, default_value_t = 8)]
        nodes: usize,
        #[arg(long, short, default_value_t = 0.3)]
        prob: f64,
        #[arg(long, short, default_value_t = 1)]
        seed: u64,
        /// Mirror every edge
        #[arg(long, short)]
        undirected: bool,
        /// Index of the start node
        #[arg(long, default_value_t = 0)]
        from: usize,
        /// Index of the end node [default: the last node]
        #[arg(long)]
        to: Option<usize>,
    },
    /// Search a square grid from one corner to the other
    Grid {
        #[arg(long, short, default_value_t = 3)]
        rows: usize,
        #[arg(long, short, default_value_t = 4)]
        cols: usize,
    },
    /// List the moves solving the Towers of Hanoi
    Hanoi {
        disks: u32,
        #[arg(long, default_value = "a")]
        from: String,
        #[arg(long, default_value = "b")]
        to: String,
        #[arg(long, default_value = "spare")]
        spare: String,
    },
}

/// What `--json` prints for a pair of searches.
#[derive(Serialize)]
struct Report<'a> {
    start: &'a Node,
    end: &'a Node,
    nodes: usize,
    arcs: usize,
    distance: Option<usize>,
    dfs: Option<&'a Path>,
    bfs: Option<&'a Path>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(ref e) = run(cli) {
        use std::io::Write;
        let stderr = &mut ::std::io::stderr();
        let errmsg = "Error writing to stderr";

        writeln!(stderr, "error: {}", e).expect(errmsg);

        for e in e.iter().skip(1) {
            writeln!(stderr, "caused by: {}", e).expect(errmsg);
        }

        // The backtrace is not always generated. Try to run this example
        // with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            writeln!(stderr, "backtrace: {:?}", backtrace).expect(errmsg);
        }

        ::std::process::exit(1);
    }
}

/// Log to stderr, and to `cli.log` if given.
fn init_logging(cli: &Cli) -> Result<log4rs::Handle> {
    let level = if cli.verbose || cli.trace { LevelFilter::Debug } else { LevelFilter::Info };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {M} - {m}\n")))
        .build();

    let mut config = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(ref log) = cli.log {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{l} {M} - {m}\n")))
            .build(log)
            .chain_err(|| format!("unable to open log file {}", log.display()))?;
        config = config.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
    }

    let config = config
        .build(root.build(level))
        .chain_err(|| "bad logging configuration")?;
    log4rs::init_config(config).chain_err(|| "unable to install logger")
}

fn run(cli: Cli) -> Result<()> {
    let _handle = init_logging(&cli)?;
    let mut trace: Box<dyn Trace> = if cli.trace { Box::new(LogTrace) } else { Box::new(NoTrace) };

    match cli.command {
        Command::Demo => {
            let (graph, nodes) = six_node_graph()?;
            if !cli.json {
                println!("{}", graph);
            }
            search_both(&graph, &nodes[0], &nodes[5], &mut *trace, cli.json)
        }
        Command::Random { nodes, prob, seed, undirected, from, to } => {
            let kind = if undirected { Kind::Undirected } else { Kind::Directed };
            let mut rng = XorShift128Plus::from_u64(seed);
            let graph = random_graph(&mut rng, nodes, prob, kind)
                .chain_err(|| "unable to build random graph")?;
            info!("random graph, seed {}: {} nodes, {} arcs",
                  seed, graph.node_count(), graph.edge_count());

            let start = node_at(&graph, from)?;
            let end = node_at(&graph, to.unwrap_or_else(|| nodes.saturating_sub(1)))?;
            search_both(&graph, start, end, &mut *trace, cli.json)
        }
        Command::Grid { rows, cols } => {
            let grid = SquareGrid::new(rows, cols);
            let graph = grid.build()?;
            let start = grid.node(&graph, 0, 0)?;
            let end = grid.node(&graph, rows.saturating_sub(1), cols.saturating_sub(1))?;
            search_both(&graph, start, end, &mut *trace, cli.json)
        }
        Command::Hanoi { disks, from, to, spare } => {
            let moves = towers_moves(disks, &from, &to, &spare);
            if cli.json {
                let json = serde_json::to_string_pretty(&moves)
                    .chain_err(|| "unable to serialize moves")?;
                println!("{}", json);
            } else {
                for m in &moves {
                    println!("{}", m);
                }
            }
            info!("{} disks: {} moves", disks, moves.len());
            Ok(())
        }
    }
}

/// Build the six-node directed graph whose only three-hop path from 0 to 5
/// is 0->2->3->5.
fn six_node_graph() -> Result<(Digraph, Vec<Node>)> {
    let nodes: Vec<Node> = (0..6).map(|i| Node::new(i.to_string())).collect();
    let mut graph = Digraph::new();
    for node in &nodes {
        graph.add_node(node.clone())?;
    }
    for &(src, dest) in &[(0, 1), (1, 2), (2, 3), (2, 4), (3, 4),
                          (3, 5), (0, 2), (1, 0), (3, 1), (4, 0)] {
        graph.add_edge(Edge::new(nodes[src].clone(), nodes[dest].clone()))?;
    }
    Ok((graph, nodes))
}

fn describe(path: &Option<Path>) -> String {
    match *path {
        Some(ref path) => format!("{} ({} hops)", print_path(path), hop_count(path)),
        None => "no path".to_owned(),
    }
}

/// Run both searches from `start` to `end` and print what they found.
fn search_both(graph: &Digraph, start: &Node, end: &Node, trace: &mut dyn Trace, json: bool)
               -> Result<()>
{
    let by_dfs = shortest_path_traced(graph, start, end, &mut *trace)?;
    let by_bfs = bfs_traced(graph, start, end, &mut *trace)?;
    let distance = hop_distance(graph, start, end)?;

    if json {
        let report = Report {
            start,
            end,
            nodes: graph.node_count(),
            arcs: graph.edge_count(),
            distance,
            dfs: by_dfs.as_ref(),
            bfs: by_bfs.as_ref(),
        };
        let json = serde_json::to_string_pretty(&report)
            .chain_err(|| "unable to serialize search report")?;
        println!("{}", json);
    } else {
        println!("Searching from {} to {}", start, end);
        println!("Shortest path found by DFS: {}", describe(&by_dfs));
        println!("Shortest path found by BFS: {}", describe(&by_bfs));
    }
    Ok(())
}
