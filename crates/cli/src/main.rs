//! Dots-and-boxes turn and game tree enumeration tool.
//!
//! Seeds a board from explicit moves or a random opening, then lists its
//! moves, its possible turns, or the per-ply sizes of its game tree.

mod export;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotsearch_board::{Board, BoardOptions, Cell, DotsAndBoxes};
use dotsearch_core::Depth;
use dotsearch_search::{GameTreeBuilder, LineageOrder, SearchConfig, TurnExpander};
use export::{display_rows, TreeRecord};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

/// Enumerate dots-and-boxes turns and game trees.
#[derive(Parser)]
#[command(name = "dotsearch")]
#[command(about = "Enumerate the turns and game tree of a dots-and-boxes position")]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,

    #[command(subcommand)]
    command: Commands,
}

/// How the starting board is set up.
#[derive(Args, Debug)]
struct BoardArgs {
    /// Boxes per side.
    #[arg(short = 'n', long, default_value = "2", global = true)]
    size: usize,

    /// Moves to draw first, as "row,col;row,col;...".
    #[arg(short, long, global = true)]
    moves: Option<String>,

    /// Number of random moves to draw after --moves.
    #[arg(short, long, default_value = "0", global = true)]
    random: usize,

    /// Random seed for reproducibility.
    #[arg(long, default_value = "42", global = true)]
    seed: u64,

    /// Start with every edge line drawn.
    #[arg(long, global = true)]
    boundary: bool,

    /// Show boxes as 2 and lines as 1 when printing boards.
    #[arg(long, global = true)]
    colored: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List valid moves and whether each completes a box.
    Moves,

    /// List every possible turn of the player to move.
    Turns {
        /// Order of the moves within each turn.
        #[arg(short, long, value_enum, default_value_t = Order::Chronological)]
        order: Order,

        /// Maximum number of moves in one turn.
        #[arg(long)]
        max_chain: Option<usize>,
    },

    /// Build the game tree and report its size per ply.
    Tree {
        /// Number of turns to look ahead.
        #[arg(short, long, default_value = "2", allow_negative_numbers = true)]
        depth: i64,

        /// Build sibling subtrees in parallel.
        #[arg(short, long)]
        parallel: bool,

        /// Order of the moves within each turn.
        #[arg(short, long, value_enum, default_value_t = Order::Chronological)]
        order: Order,

        /// Write the whole tree as JSON to this file.
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    Chronological,
    LeafToRoot,
}

impl From<Order> for LineageOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Chronological => LineageOrder::Chronological,
            Order::LeafToRoot => LineageOrder::LeafToRoot,
        }
    }
}

/// Parse "row,col;row,col" into cells. Empty entries are skipped.
fn parse_moves(text: &str) -> Result<Vec<Cell>> {
    text.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<Cell>()
                .with_context(|| format!("Invalid move {part:?}"))
        })
        .collect()
}

/// Build the starting board from the command-line options.
fn seed_board(args: &BoardArgs) -> Result<Board> {
    let options = BoardOptions {
        boundary: args.boundary,
        colored: args.colored,
    };
    let mut board = Board::with_options(args.size, options)
        .with_context(|| format!("Failed to create a board of size {}", args.size))?;

    if let Some(text) = &args.moves {
        for cell in parse_moves(text)? {
            board
                .try_play(cell)
                .with_context(|| format!("Failed to play seed move {cell}"))?;
        }
    }

    if args.random > 0 {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        board = board.with_random_moves(args.random, &mut rng);
    }

    Ok(board)
}

fn print_board(board: &Board) {
    for row in display_rows(board) {
        let line: Vec<String> = row.iter().map(u8::to_string).collect();
        println!("  {}", line.join(" "));
    }
    println!(
        "Drawn {}/{} lines, {} boxes complete",
        board.drawn_count(),
        board.line_count(),
        board.completed_boxes().len()
    );
}

fn cmd_moves(board: &Board) {
    print_board(board);
    println!();

    let moves = board.valid_moves();
    println!("{} valid moves:", moves.len());
    for mv in moves {
        let marker = if board.would_complete_square(mv) {
            "  completes a box"
        } else {
            ""
        };
        println!("  {mv}{marker}");
    }
}

fn cmd_turns(board: &Board, order: Order, max_chain: Option<usize>) -> Result<()> {
    let game = DotsAndBoxes::from_board(board.clone());
    let turns = TurnExpander::new(&game)
        .with_max_chain_length(max_chain)
        .turn_sequences(board, order.into())
        .context("Failed to expand turns")?;

    println!("{} turns:", turns.len());
    for turn in &turns {
        println!("  {turn}");
    }
    Ok(())
}

fn cmd_tree(
    board: Board,
    depth: i64,
    parallel: bool,
    order: Order,
    json: Option<PathBuf>,
) -> Result<()> {
    let depth = Depth::new(depth).context("Invalid search depth")?;
    let config = SearchConfig {
        lineage_order: order.into(),
        parallel,
        ..Default::default()
    };
    let builder = GameTreeBuilder::new(DotsAndBoxes::from_board(board.clone()), config);

    eprintln!(
        "Building tree to depth {} ({})...",
        depth,
        if builder.config().parallel {
            "parallel"
        } else {
            "sequential"
        }
    );
    let start = Instant::now();
    let tree = builder
        .build(board, i64::from(depth.get()))
        .context("Failed to build game tree")?;
    let elapsed = start.elapsed();

    println!("Ply  Nodes");
    for (ply, count) in tree.ply_counts().iter().enumerate() {
        println!("{ply:>3}  {count}");
    }
    println!("Total nodes: {}", tree.len());
    eprintln!("Completed in {:.2}s", elapsed.as_secs_f64());

    if let Some(path) = json {
        let file =
            File::create(&path).with_context(|| format!("Failed to create file: {:?}", path))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &TreeRecord::from_tree(&tree, depth.get()))
            .with_context(|| format!("Failed to write tree to {:?}", path))?;
        eprintln!("Tree saved to: {:?}", path);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let board = seed_board(&cli.board)?;

    match cli.command {
        Commands::Moves => {
            cmd_moves(&board);
            Ok(())
        }
        Commands::Turns { order, max_chain } => cmd_turns(&board, order, max_chain),
        Commands::Tree {
            depth,
            parallel,
            order,
            json,
        } => cmd_tree(board, depth, parallel, order, json),
    }
}
