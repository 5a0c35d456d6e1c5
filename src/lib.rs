//! Two Sum: 在整数序列中找出两个和为目标值的位置。
//!
//! ```rust
//! use twosum::finder::{find_pair, PairIndices};
//!
//! assert_eq!(find_pair(&[2, 7, 11, 15], 9), Some(PairIndices::new(0, 1)));
//! assert_eq!(find_pair(&[1, 2, 3], 100), None);
//! ```

pub mod check;
pub mod config;
pub mod finder;
pub mod input;
pub mod io;
pub mod options;
pub mod report;

pub use finder::{Outcome, PairIndices, find_pair, solve};
pub use input::{InputError, Problem};
pub use report::{OutputStyle, render};
