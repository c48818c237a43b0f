//! 库内错误类型。
//!
//! 所有错误都是确定性的输入校验失败，直接返回给调用者，不做重试或静默修复。

use thiserror::Error;

/// Result type alias for seqmatch operations
pub type Result<T> = std::result::Result<T, SeqError>;

#[derive(Error, Debug)]
pub enum SeqError {
    /// 序列中出现 {A,C,G,T,N} 以外的字符
    #[error("invalid symbol '{}' at position {position}", .symbol.escape_default())]
    InvalidSymbol { symbol: char, position: usize },

    /// 读文件时遇到的非法字符（行号、列号均从 1 开始）
    #[error("invalid symbol '{}' at line {line}, column {column}", .symbol.escape_default())]
    InvalidSymbolAtLine { symbol: char, line: usize, column: usize },

    /// 同一条 read 的序列与质量长度不一致
    #[error("record {record}: sequence length {seq_len} != quality length {qual_len}")]
    MalformedRecord { record: usize, seq_len: usize, qual_len: usize },

    /// 序列行非空但记录在文件末尾被截断
    #[error("record {record}: stream ended before {missing} line")]
    TruncatedRecord { record: usize, missing: &'static str },

    #[error("invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SeqError {
    pub(crate) fn invalid_parameter(parameter: &str, reason: impl Into<String>) -> Self {
        SeqError::InvalidParameter { parameter: parameter.to_string(), reason: reason.into() }
    }
}
