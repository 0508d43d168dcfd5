//! Tree construction from a token stream.

/// Stack-based tree builder.
pub mod core;

pub use self::core::{TreeBuilder, build_tree, format_tree, print_tree};
