use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// 参考基因组：文件中所有非 header 行按顺序拼接成的单条序列。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genome {
    pub seq: Vec<u8>,
}

impl Genome {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.seq
    }
}

/// 逐行读取参考序列。以 '>' 开头的行整行丢弃（不做任何校验），
/// 其余行去掉行尾空白后转大写、校验字母表并追加。空输入得到空基因组。
pub fn read_genome<R: BufRead>(mut reader: R) -> Result<Genome> {
    let mut seq: Vec<u8> = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut line_no = 0usize;
    let mut n_headers = 0usize;

    loop {
        if !super::read_line_bytes(&mut reader, &mut buf)? {
            break;
        }
        line_no += 1;
        if buf.first() == Some(&b'>') {
            n_headers += 1;
            continue;
        }
        super::push_seq_line(&mut seq, super::trim_end_bytes(&buf), line_no)?;
    }

    debug!("genome: {} lines, {} headers, {} bp", line_no, n_headers, seq.len());
    Ok(Genome { seq })
}

pub fn read_genome_path<P: AsRef<Path>>(path: P) -> Result<Genome> {
    let fh = std::fs::File::open(path)?;
    read_genome(std::io::BufReader::new(fh))
}
