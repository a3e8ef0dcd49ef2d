use clap::Args;

use crate::heap::Polarity;

/// Options shared by all of the heap commands
#[derive(Debug, Args)]
pub struct HeapOptions {
    /// Whether the root holds the largest or the smallest value
    #[arg(long, value_enum, default_value = "max")]
    pub polarity: Polarity,
}
