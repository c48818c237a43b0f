pub mod fasta;
pub mod fastq;

use std::io::BufRead;

use crate::error::{Result, SeqError};
use crate::util::dna;

/// 按字节读一行（不要求 UTF-8），返回是否读到了内容（false 表示 EOF）。
fn read_line_bytes<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    let n = reader.read_until(b'\n', buf)?;
    Ok(n > 0)
}

/// 去掉行尾的 ASCII 空白（含 '\r'、'\n'）。
fn trim_end_bytes(line: &[u8]) -> &[u8] {
    let end = line.iter().rposition(|b| !b.is_ascii_whitespace()).map_or(0, |i| i + 1);
    &line[..end]
}

/// 校验并追加一行序列；非法字符的位置换算为文件中的行号/列号（均从 1 开始）。
fn push_seq_line(out: &mut Vec<u8>, line: &[u8], line_no: usize) -> Result<()> {
    match dna::normalize_seq(line) {
        Ok(norm) => {
            out.extend_from_slice(&norm);
            Ok(())
        }
        Err(SeqError::InvalidSymbol { symbol, position }) => {
            Err(SeqError::InvalidSymbolAtLine { symbol, line: line_no, column: position + 1 })
        }
        Err(e) => Err(e),
    }
}
