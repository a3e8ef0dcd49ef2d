use binheap::{
    commands::{apply_script, drain_heap, show_heap},
    options::HeapOptions,
};
use clap::{Parser, Subcommand};

/// Array-backed binary heap tool
#[derive(Debug, Parser)]
#[command(name = "binheap")]
#[command(about = "Build, inspect, and drain array-backed binary heaps.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a heap from the given values and print it level by level
    #[command(arg_required_else_help = true)]
    Show {
        /// Values to insert, in order
        #[arg(num_args(1..), allow_negative_numbers = true)]
        values: Vec<i64>,

        #[command(flatten)]
        options: HeapOptions,
    },

    /// Build a heap from the given values and pop the root until it is empty
    #[command(arg_required_else_help = true)]
    Drain {
        /// Values to insert, in order
        #[arg(num_args(1..), allow_negative_numbers = true)]
        values: Vec<i64>,

        #[command(flatten)]
        options: HeapOptions,
    },

    /// Run a script of actions against an empty heap
    #[command(arg_required_else_help = true)]
    Apply {
        /// Actions to apply in order: an integer inserts it, 'pop' removes the root
        #[arg(num_args(1..), allow_negative_numbers = true)]
        actions: Vec<String>,

        #[command(flatten)]
        options: HeapOptions,
    },
}

fn main() -> std::io::Result<()> {
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { values, options } => {
            show_heap(&values, options.polarity)?;
        }
        Commands::Drain { values, options } => {
            drain_heap(&values, options.polarity)?;
        }
        Commands::Apply { actions, options } => {
            apply_script(&actions, options.polarity)?;
        }
    }
    Ok(())
}
