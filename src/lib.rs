//! # Buffer Ownership
//!
//! A fixed-size byte buffer taken through its whole life: allocated, read
//! into, aliased, duplicated, wiped and released. Aliases are borrows and
//! duplicates are explicit deep copies, so which one is meant is visible in
//! the types. An allocation ledger counts every buffer in and out.
//!
//! ## Modules
//!
//! - `buffer` - owned fixed-capacity buffer, `fgets`-style reads, wiping
//! - `ledger` - per-thread allocation and release counters
//! - `lineage` - alias and deep-copy lineage, and which copies were freed unwiped
//! - `process` - the process-wide buffer slot
//! - `copy` - duplication routine
//! - `driver` - the read / alias / duplicate / wipe / release sequence
//! - `arith` and `control_flow` - a sum driven through every loop form
//! - `config` and `error` - settings and error types
//!
//! ## Running
//!
//! ```bash
//! echo hello | cargo run
//! cargo run < /dev/null   # prints "fgets() failed"
//! ```

pub mod arith;
pub mod buffer;
pub mod config;
pub mod control_flow;
pub mod copy;
pub mod driver;
pub mod error;
pub mod ledger;
pub mod lineage;
pub mod process;

pub use buffer::{zero_out_memory, Buffer};
pub use config::DemoConfig;
pub use error::{ConfigError, DemoError, Result};
