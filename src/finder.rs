//! 配对求和查找: 单次线性扫描, 哈希表记录每个值最早出现的位置.
use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::input::Problem;

/// 两个不同位置, 恒有 `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairIndices {
    pub first: usize,
    pub second: usize,
}

impl PairIndices {
    pub fn new(first: usize, second: usize) -> Self {
        debug_assert!(first < second);
        Self { first, second }
    }
}

impl fmt::Display for PairIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// 一次查找的结果. 未找到是正常结果, 不是错误.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found(PairIndices),
    NotFound,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn indices(&self) -> Option<PairIndices> {
        match self {
            Outcome::Found(pair) => Some(*pair),
            Outcome::NotFound => None,
        }
    }
}

impl From<Option<PairIndices>> for Outcome {
    fn from(pair: Option<PairIndices>) -> Self {
        pair.map_or(Outcome::NotFound, Outcome::Found)
    }
}

/// Returns the first pair completed during a left-to-right scan whose values
/// sum to `target`.
pub fn find_pair(nums: &[i64], target: i64) -> Option<PairIndices> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (k, &value) in nums.iter().enumerate() {
        // 溢出说明补数不在 i64 范围内, 不可能有配对
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&earlier) = seen.get(&complement) {
                debug!("pair found: nums[{earlier}] + nums[{k}] = {target}");
                return Some(PairIndices::new(earlier, k));
            }
        } else {
            trace!("complement of nums[{k}] = {value} overflows, skipping lookup");
        }
        seen.entry(value).or_insert(k);
    }

    debug!("no pair sums to {target} among {} values", nums.len());
    None
}

pub fn solve(problem: &Problem) -> Outcome {
    find_pair(&problem.nums, problem.target).into()
}
