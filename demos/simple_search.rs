//! 演示如何在 library 模式下使用 bwt-index 构建索引、搜索与逆变换。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_search
//! ```

use bwt_index::index::{inverse, FmIndex};

fn main() -> bwt_index::Result<()> {
    // 1. 构建索引（`$` 自动追加）
    let reference = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    println!("参考序列: {}", String::from_utf8_lossy(reference));
    println!("参考长度: {} bp", reference.len());

    let fm = FmIndex::build(reference)?;
    println!("FM 索引构建完成：BWT 长度={}, SA 长度={}", fm.bwt().len(), fm.suffix_array().len());
    println!("BWT: {}", String::from_utf8_lossy(&fm.bwt()));

    // 2. 精确匹配搜索
    for pattern in [&b"GCTGATCGTAG"[..], b"AGCT", b"TTTT", b""] {
        let positions = fm.search(pattern)?;
        println!(
            "精确匹配 '{}': 找到 {} 处 {:?}",
            String::from_utf8_lossy(pattern),
            positions.len(),
            positions
        );
    }

    // 3. 并行批量查询
    let batch = ["ACGT", "GAT", "CTAG"];
    for (p, res) in batch.iter().zip(fm.search_batch(&batch)) {
        println!("批量 '{}': {:?}", p, res?);
    }

    // 4. 逆变换（只用 BWT）
    let restored = inverse::decode(&fm.bwt())?;
    println!("逆变换: {}", String::from_utf8_lossy(&restored));
    println!("与原文一致: {}", restored[..restored.len() - 1] == reference[..]);

    Ok(())
}
