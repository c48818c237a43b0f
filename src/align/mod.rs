//! 朴素（无索引）模式匹配。
//!
//! 三种匹配方式共用 [`scan::bounded_scan`]：精确匹配、正反链精确匹配、
//! 允许有限错配的匹配。错配容忍与反向互补互相独立，不会自动组合。
//! 所有结果都是升序、无重复的参考序列起点（从 0 开始）。

pub mod scan;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Result, SeqError};
use crate::io::fastq::Read;
use crate::util::dna;

pub use scan::{bounded_scan, merge_occurrences, par_bounded_scan, within_budget};

/// 精确匹配
pub fn match_exact(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    bounded_scan(pattern, text, 0)
}

/// 正链与反向互补链的精确匹配取并集。参考序列本身不做互补；
/// 回文序列在同一位置同时命中两条链时只报告一次。
pub fn match_exact_with_revcomp(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>> {
    let rc = dna::reverse_complement(pattern)?;
    Ok(merge_occurrences(match_exact(pattern, text), match_exact(&rc, text)))
}

/// 允许至多 `max_mismatches` 个错配（只比较正链）。
/// 错配数 >= pattern 长度时每个起点都命中；负数返回 `InvalidParameter`。
pub fn match_with_mismatches(pattern: &[u8], text: &[u8], max_mismatches: i64) -> Result<Vec<usize>> {
    let budget = mismatch_budget(max_mismatches)?;
    Ok(bounded_scan(pattern, text, budget))
}

fn mismatch_budget(max_mismatches: i64) -> Result<usize> {
    usize::try_from(max_mismatches).map_err(|_| {
        SeqError::invalid_parameter("max_mismatches", format!("must be >= 0, got {}", max_mismatches))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    ExactWithRevcomp,
    Mismatches(i64),
}

impl MatchMode {
    pub fn run(self, pattern: &[u8], text: &[u8]) -> Result<Vec<usize>> {
        match self {
            MatchMode::Exact => Ok(match_exact(pattern, text)),
            MatchMode::ExactWithRevcomp => match_exact_with_revcomp(pattern, text),
            MatchMode::Mismatches(k) => match_with_mismatches(pattern, text, k),
        }
    }

    /// 与 [`MatchMode::run`] 结果相同，但把候选起点分片后并行扫描。
    pub fn run_sharded(self, pattern: &[u8], text: &[u8], shard_len: usize) -> Result<Vec<usize>> {
        match self {
            MatchMode::Exact => Ok(par_bounded_scan(pattern, text, 0, shard_len)),
            MatchMode::ExactWithRevcomp => {
                let rc = dna::reverse_complement(pattern)?;
                let (fwd, rev) = rayon::join(
                    || par_bounded_scan(pattern, text, 0, shard_len),
                    || par_bounded_scan(&rc, text, 0, shard_len),
                );
                Ok(merge_occurrences(fwd, rev))
            }
            MatchMode::Mismatches(k) => {
                let budget = mismatch_budget(k)?;
                Ok(par_bounded_scan(pattern, text, budget, shard_len))
            }
        }
    }
}

/// 匹配参数
#[derive(Debug, Clone, Copy)]
pub struct MatchOpt {
    pub mode: MatchMode,
    pub threads: usize,
    pub shard_len: usize,
}

impl Default for MatchOpt {
    fn default() -> Self {
        Self { mode: MatchMode::Exact, threads: 1, shard_len: scan::DEFAULT_SHARD_LEN }
    }
}

impl MatchOpt {
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(SeqError::invalid_parameter("threads", "must be >= 1"));
        }
        if self.shard_len == 0 {
            return Err(SeqError::invalid_parameter("shard_len", "must be >= 1"));
        }
        if let MatchMode::Mismatches(k) = self.mode {
            mismatch_budget(k)?;
        }
        Ok(())
    }

    /// 单个 pattern：单线程时串行扫描，多线程时分片并行。
    pub fn run(&self, pattern: &[u8], text: &[u8]) -> Result<Vec<usize>> {
        self.validate()?;
        if self.threads > 1 {
            self.mode.run_sharded(pattern, text, self.shard_len)
        } else {
            self.mode.run(pattern, text)
        }
    }
}

/// 单条 read 的匹配结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadHits {
    pub name: String,
    pub offsets: Vec<usize>,
}

/// 对每条 read 执行同一种匹配；按 read 并行，输出顺序与输入一致。
pub fn match_reads(text: &[u8], reads: &[Read], opt: &MatchOpt) -> Result<Vec<ReadHits>> {
    opt.validate()?;
    let hits = reads
        .par_iter()
        .map(|r| {
            let offsets = opt.mode.run(&r.seq, text)?;
            Ok(ReadHits { name: r.name.clone(), offsets })
        })
        .collect::<Result<Vec<_>>>()?;
    let n_hit = hits.iter().filter(|h| !h.offsets.is_empty()).count();
    debug!("matched {} reads, {} with at least one hit", hits.len(), n_hit);
    Ok(hits)
}
