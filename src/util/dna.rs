use crate::error::{Result, SeqError};

/// 核苷酸字母表 {A, C, G, T, N}。N 表示未知碱基，是一个具体符号而非通配符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
    N,
}

impl Base {
    /// 解析单个字节（大小写不敏感）。
    #[inline]
    pub fn from_ascii(b: u8) -> Option<Base> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            b'N' => Some(Base::N),
            _ => None,
        }
    }

    #[inline]
    pub fn to_ascii(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::T => b'T',
            Base::N => b'N',
        }
    }

    #[inline]
    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::T,
            Base::C => Base::G,
            Base::G => Base::C,
            Base::T => Base::A,
            Base::N => Base::N,
        }
    }
}

#[inline]
fn parse_base(b: u8, position: usize) -> Result<Base> {
    Base::from_ascii(b).ok_or(SeqError::InvalidSymbol { symbol: b as char, position })
}

/// 转大写并校验字母表，遇到非法字符立即报错（不替换为 N）。
pub fn normalize_seq(seq: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(seq.len());
    for (i, &b) in seq.iter().enumerate() {
        out.push(parse_base(b, i)?.to_ascii());
    }
    Ok(out)
}

/// 反向互补：输出第 i 位是输入第 len-1-i 位的互补碱基。
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(seq.len());
    for (i, &b) in seq.iter().enumerate().rev() {
        out.push(parse_base(b, i)?.complement().to_ascii());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_seq(len: usize, seed: u32) -> Vec<u8> {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut x = seed;
        (0..len)
            .map(|_| {
                x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                bases[(x >> 16) as usize % 4]
            })
            .collect()
    }

    #[test]
    fn complement_is_involution() {
        for b in [Base::A, Base::C, Base::G, Base::T, Base::N] {
            assert_eq!(b.complement().complement(), b);
        }
        assert_eq!(Base::N.complement(), Base::N);
    }

    #[test]
    fn revcomp_basic() {
        assert_eq!(reverse_complement(b"GTAAG").unwrap(), b"CTTAC");
        assert_eq!(reverse_complement(b"").unwrap(), b"");
    }

    #[test]
    fn revcomp_keeps_n_and_reverses() {
        assert_eq!(reverse_complement(b"GTAAGN").unwrap(), b"NCTTAC");
    }

    #[test]
    fn revcomp_uppercases_input() {
        assert_eq!(reverse_complement(b"acgtn").unwrap(), b"NACGT");
    }

    #[test]
    fn revcomp_twice_is_identity() {
        for len in 0..40 {
            let s = make_seq(len, 7 + len as u32);
            let rc = reverse_complement(&s).unwrap();
            assert_eq!(rc.len(), s.len());
            assert_eq!(reverse_complement(&rc).unwrap(), s, "len={}", len);
        }
    }

    #[test]
    fn revcomp_rejects_unknown_symbol() {
        match reverse_complement(b"ACXGT") {
            Err(SeqError::InvalidSymbol { symbol, position }) => {
                assert_eq!(symbol, 'X');
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidSymbol, got {:?}", other),
        }
        // U 不属于字母表
        assert!(reverse_complement(b"ACGU").is_err());
    }

    #[test]
    fn normalize_uppercases() {
        assert_eq!(normalize_seq(b"acGtn").unwrap(), b"ACGTN");
    }

    #[test]
    fn normalize_rejects_whitespace() {
        let err = normalize_seq(b"AC GT").unwrap_err();
        assert!(matches!(err, SeqError::InvalidSymbol { symbol: ' ', position: 2 }));
    }
}
