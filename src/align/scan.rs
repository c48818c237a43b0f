use rayon::prelude::*;

/// 默认的并行分片大小（候选起点个数）
pub const DEFAULT_SHARD_LEN: usize = 1 << 16;

/// 比较 pattern 与等长窗口，错配数超过 budget 时立即放弃。
#[inline]
pub fn within_budget(pattern: &[u8], window: &[u8], budget: usize) -> bool {
    debug_assert_eq!(pattern.len(), window.len());
    let mut mm = 0usize;
    for (&p, &t) in pattern.iter().zip(window) {
        if p != t {
            mm += 1;
            if mm > budget {
                return false;
            }
        }
    }
    true
}

/// 候选起点个数：`n - m + 1`；空 pattern 或 pattern 比文本长时为 0。
#[inline]
fn num_offsets(m: usize, n: usize) -> usize {
    if m == 0 || m > n {
        0
    } else {
        n - m + 1
    }
}

fn scan_range(pattern: &[u8], text: &[u8], budget: usize, start: usize, end: usize) -> Vec<usize> {
    let m = pattern.len();
    (start..end)
        .filter(|&i| within_budget(pattern, &text[i..i + m], budget))
        .collect()
}

/// 朴素比对扫描：返回所有错配数 <= budget 的起点（升序）。
pub fn bounded_scan(pattern: &[u8], text: &[u8], budget: usize) -> Vec<usize> {
    let n_off = num_offsets(pattern.len(), text.len());
    scan_range(pattern, text, budget, 0, n_off)
}

/// 将候选起点区间切成互不相交的分片并行扫描，结果与 [`bounded_scan`] 一致。
pub fn par_bounded_scan(pattern: &[u8], text: &[u8], budget: usize, shard_len: usize) -> Vec<usize> {
    let n_off = num_offsets(pattern.len(), text.len());
    let shard_len = shard_len.max(1);
    if n_off <= shard_len {
        return scan_range(pattern, text, budget, 0, n_off);
    }
    let n_shards = (n_off + shard_len - 1) / shard_len;
    let parts: Vec<Vec<usize>> = (0..n_shards)
        .into_par_iter()
        .map(|s| {
            let start = s * shard_len;
            let end = (start + shard_len).min(n_off);
            scan_range(pattern, text, budget, start, end)
        })
        .collect();
    merge_occurrences(Vec::new(), parts.concat())
}

/// 两个位置集合取并集，升序去重。
pub fn merge_occurrences(mut a: Vec<usize>, b: Vec<usize>) -> Vec<usize> {
    a.extend(b);
    a.sort_unstable();
    a.dedup();
    a
}
