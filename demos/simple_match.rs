//! 演示如何在 library 模式下使用 seqmatch 进行朴素匹配。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_match
//! ```

use std::io::Cursor;

use seqmatch::align::{self, MatchMode, MatchOpt};
use seqmatch::io::{fasta, fastq};
use seqmatch::util::{dna, qual};

fn main() -> seqmatch::Result<()> {
    // 1. 读取参考序列（header 行被丢弃，其余行拼接）
    let fa = b">ref1 demo\nACGTACGTAGCTGATCGTAG\nCTAGCTAGCTGATCGTAGCT\nAGCTAGCTGAT\n";
    let genome = fasta::read_genome(Cursor::new(&fa[..]))?;
    println!("参考长度: {} bp", genome.len());

    // 2. 精确匹配
    let pattern = b"GCTGATCGTAG";
    let hits = align::match_exact(pattern, genome.as_bytes());
    println!("精确匹配 '{}': {:?}", String::from_utf8_lossy(pattern), hits);

    // 3. 正反链匹配
    let rc = dna::reverse_complement(b"AGCTAG")?;
    println!("AGCTAG 的反向互补: {}", String::from_utf8_lossy(&rc));
    let hits = align::match_exact_with_revcomp(b"AGCTAG", genome.as_bytes())?;
    println!("正反链匹配 'AGCTAG': {:?}", hits);

    // 4. 允许 2 个错配
    let hits = align::match_with_mismatches(b"GCTGTTCGTAG", genome.as_bytes(), 2)?;
    println!("2 错配匹配 'GCTGTTCGTAG': {:?}", hits);

    // 5. 读取 reads 并批量匹配
    let fq = b"@read1\nTGATCGTAG\n+\nIIIII#III\n@read2\nCTACGATCA\n+\n!!!!!!!!!\n";
    let reads = fastq::read_read_set(Cursor::new(&fq[..]))?;
    for r in &reads.reads {
        println!("{} 质量值: {:?}", r.name, qual::decode_qualities(&r.qual));
    }
    let opt = MatchOpt { mode: MatchMode::ExactWithRevcomp, ..MatchOpt::default() };
    for h in align::match_reads(genome.as_bytes(), &reads.reads, &opt)? {
        println!("  {} -> {:?}", h.name, h.offsets);
    }

    println!("\n完成！");
    Ok(())
}
