//! Phred+33 质量值解码。
//!
//! 质量字符 c 对应的分数为 `c - 33`。可打印 ASCII 范围 33..=126 之外的字节
//! 采用饱和处理：低于 33 记为 0，高于 126 记为 93。函数对任意字节都有定义，不会 panic。

/// Phred+33 偏移量
pub const PHRED_OFFSET: u8 = 33;

/// 最大质量值（'~' - 33）
pub const MAX_PHRED: u8 = 93;

#[inline]
pub fn decode_quality(c: u8) -> u8 {
    c.saturating_sub(PHRED_OFFSET).min(MAX_PHRED)
}

pub fn decode_qualities(qual: &[u8]) -> Vec<u8> {
    qual.iter().map(|&c| decode_quality(c)).collect()
}
