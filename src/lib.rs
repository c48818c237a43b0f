//! # seqmatch
//!
//! 面向核苷酸序列的小型工具集：读取参考基因组和短 read 文件、解码质量值、
//! 计算反向互补，以及朴素（无索引）的精确 / 近似子串匹配。
//!
//! ## 快速示例
//!
//! ```rust
//! use std::io::Cursor;
//! use seqmatch::align;
//! use seqmatch::io::fasta;
//!
//! let genome = fasta::read_genome(Cursor::new(&b">ref\nCCATAAG\nCCTT\n"[..])).unwrap();
//! assert_eq!(align::match_exact(b"ATAAGCC", genome.as_bytes()), vec![2]);
//!
//! let hits = align::match_exact_with_revcomp(b"AGC", b"AGCGCT").unwrap();
//! assert_eq!(hits, vec![0, 3]);
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA（基因组）/ FASTQ（read 集合）解析
//! - [`align`] — 精确、正反链、有限错配三种匹配及共享的扫描原语
//! - [`util`] — 字母表、反向互补、Phred+33 质量解码
//! - [`error`] — 错误类型

pub mod error;
pub mod io;
pub mod util;
pub mod align;

pub use error::{Result, SeqError};
