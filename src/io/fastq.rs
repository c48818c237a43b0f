use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::error::{Result, SeqError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Read {
    pub name: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

/// 按输入顺序保存的 read 集合；`sequences()` 与 `qualities()` 的第 i 项始终属于同一条 read。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadSet {
    pub reads: Vec<Read>,
}

impl ReadSet {
    pub fn len(&self) -> usize {
        self.reads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }

    pub fn sequences(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.reads.iter().map(|r| r.seq.as_slice())
    }

    pub fn qualities(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.reads.iter().map(|r| r.qual.as_slice())
    }
}

/// 固定 4 行一组的 FASTQ 读取器：名称行、序列行、分隔行、质量行。
///
/// 序列行去尾部空白后为空即视为输入结束；序列非空但后续行缺失则报
/// `TruncatedRecord`，序列与质量长度不等则报 `MalformedRecord`。
pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    n_records: usize,
    done: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new(), line_no: 0, n_records: 0, done: false }
    }

    /// 读一行到内部缓冲区，返回是否读到了内容（false 表示 EOF）。
    fn next_line(&mut self) -> Result<bool> {
        let got = super::read_line_bytes(&mut self.reader, &mut self.buf)?;
        if got {
            self.line_no += 1;
        }
        Ok(got)
    }

    pub fn next_record(&mut self) -> Result<Option<Read>> {
        if self.done {
            return Ok(None);
        }
        let record = self.n_records + 1;

        // name line
        self.next_line()?;
        let header = super::trim_end_bytes(&self.buf);
        let name = String::from_utf8_lossy(header.strip_prefix(b"@").unwrap_or(header)).into_owned();

        // sequence line
        self.next_line()?;
        let raw_seq = super::trim_end_bytes(&self.buf);
        if raw_seq.is_empty() {
            self.done = true;
            return Ok(None);
        }
        let mut seq = Vec::with_capacity(raw_seq.len());
        super::push_seq_line(&mut seq, raw_seq, self.line_no)?;

        // separator line
        if !self.next_line()? {
            return Err(SeqError::TruncatedRecord { record, missing: "separator" });
        }

        // quality line
        if !self.next_line()? {
            return Err(SeqError::TruncatedRecord { record, missing: "quality" });
        }
        let qual = super::trim_end_bytes(&self.buf).to_vec();

        if qual.len() != seq.len() {
            return Err(SeqError::MalformedRecord { record, seq_len: seq.len(), qual_len: qual.len() });
        }

        self.n_records = record;
        Ok(Some(Read { name, seq, qual }))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<Read>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(r)) => Some(Ok(r)),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

pub fn read_read_set<R: BufRead>(reader: R) -> Result<ReadSet> {
    let reads = FastqReader::new(reader).collect::<Result<Vec<_>>>()?;
    debug!("read set: {} reads", reads.len());
    Ok(ReadSet { reads })
}

pub fn read_read_set_path<P: AsRef<Path>>(path: P) -> Result<ReadSet> {
    let fh = std::fs::File::open(path)?;
    read_read_set(std::io::BufReader::new(fh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_two_records() {
        let data = b"@r1 desc\nACgT\n+\nIIII\n@r2\nNNA\n+r2\n#!5\n";
        let rs = read_read_set(Cursor::new(&data[..])).unwrap();
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.reads[0].name, "r1 desc");
        assert_eq!(rs.reads[0].seq, b"ACGT");
        assert_eq!(rs.reads[0].qual, b"IIII");
        assert_eq!(rs.reads[1].seq, b"NNA");
        assert_eq!(rs.reads[1].qual, b"#!5");

        let seqs: Vec<&[u8]> = rs.sequences().collect();
        let quals: Vec<&[u8]> = rs.qualities().collect();
        assert_eq!(seqs, vec![&b"ACGT"[..], &b"NNA"[..]]);
        assert_eq!(quals, vec![&b"IIII"[..], &b"#!5"[..]]);
    }

    #[test]
    fn complete_record_without_trailing_newline() {
        let data = b"@r1\nACGT\n+\nIIII";
        let rs = read_read_set(Cursor::new(&data[..])).unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.reads[0].qual, b"IIII");
    }

    #[test]
    fn crlf_line_endings() {
        let data = b"@r1\r\nACGT\r\n+\r\nIIII\r\n";
        let rs = read_read_set(Cursor::new(&data[..])).unwrap();
        assert_eq!(rs.reads[0].seq, b"ACGT");
        assert_eq!(rs.reads[0].qual, b"IIII");
    }

    #[test]
    fn empty_stream_is_empty_read_set() {
        let rs = read_read_set(Cursor::new(&b""[..])).unwrap();
        assert!(rs.is_empty());
    }

    #[test]
    fn blank_sequence_line_ends_input() {
        let data = b"@r1\nACGT\n+\nIIII\n\n\n\n\n@r2\nAAAA\n+\n####\n";
        let rs = read_read_set(Cursor::new(&data[..])).unwrap();
        assert_eq!(rs.len(), 1);
    }

    #[test]
    fn truncated_after_sequence_line() {
        let data = b"@r1\nACGT\n+\nIIII\n@r2\nACGT\n";
        match read_read_set(Cursor::new(&data[..])) {
            Err(SeqError::TruncatedRecord { record, missing }) => {
                assert_eq!(record, 2);
                assert_eq!(missing, "separator");
            }
            other => panic!("expected TruncatedRecord, got {:?}", other),
        }
    }

    #[test]
    fn truncated_before_quality_line() {
        let data = b"@r1\nACGT\n+\n";
        let err = read_read_set(Cursor::new(&data[..])).unwrap_err();
        assert!(matches!(err, SeqError::TruncatedRecord { record: 1, missing: "quality" }));
    }

    #[test]
    fn length_mismatch_is_malformed() {
        let data = b"@r1\nACGT\n+\nIII\n";
        let err = read_read_set(Cursor::new(&data[..])).unwrap_err();
        assert!(matches!(err, SeqError::MalformedRecord { record: 1, seq_len: 4, qual_len: 3 }));
    }

    #[test]
    fn invalid_base_reports_sequence_line() {
        let data = b"@r1\nACGT\n+\nIIII\n@r2\nACXT\n+\nIIII\n";
        let err = read_read_set(Cursor::new(&data[..])).unwrap_err();
        assert!(matches!(err, SeqError::InvalidSymbolAtLine { symbol: 'X', line: 6, column: 3 }));
    }

    #[test]
    fn non_utf8_name_is_kept_lossily() {
        let data = b"@r\xE91\nACGT\n+\nIIII\n";
        let rs = read_read_set(Cursor::new(&data[..])).unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.reads[0].name, "r\u{FFFD}1");
        assert_eq!(rs.reads[0].seq, b"ACGT");
    }

    #[test]
    fn non_ascii_byte_in_sequence_is_invalid_symbol() {
        let data = b"@r1\nAC\xFFT\n+\nIIII\n";
        let err = read_read_set(Cursor::new(&data[..])).unwrap_err();
        assert!(matches!(err, SeqError::InvalidSymbolAtLine { symbol: '\u{FF}', line: 2, column: 3 }));
    }

    #[test]
    fn reader_stops_after_error() {
        let data = b"@r1\nACGT\n+\nII\n@r2\nACGT\n+\nIIII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next().unwrap().is_err());
        assert!(r.next().is_none());
    }
}
