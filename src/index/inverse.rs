//! 逆 BWT：只依赖 BWT 本身（不需要后缀数组）还原原始序列。

use crate::error::{IndexError, Result};
use crate::util::alphabet::{Alphabet, SENTINEL, SENTINEL_CODE};

use super::rank::RankIndex;

/// 沿 LF 映射还原编码文本。
///
/// 第 0 行是以 `$` 开头的旋转，它最后一列的符号就是原文 `$` 前的那个符号；
/// 每走一步 LF 就向前推进一个位置。结果末尾为 `$`（编码 0）。
pub fn invert_codes(bwt: &[u8], lf: &[u32]) -> Vec<u8> {
    let n = bwt.len();
    if n == 0 {
        return Vec::new();
    }
    let mut text = vec![SENTINEL_CODE; n];
    let mut row = 0usize;
    for i in (0..n - 1).rev() {
        text[i] = bwt[row];
        row = lf[row] as usize;
    }
    text
}

/// 检查 BWT 中恰好有一个 `$`。
fn check_sentinel(bwt: &[u8]) -> Result<()> {
    let mut hits = bwt.iter().enumerate().filter(|(_, &b)| b == SENTINEL).map(|(i, _)| i);
    match (hits.next(), hits.next()) {
        (Some(_), None) => Ok(()),
        (Some(_), Some(dup)) => Err(IndexError::InvalidSentinel { position: dup }),
        (None, _) => Err(IndexError::InvalidSentinel { position: bwt.len() }),
    }
}

/// 从字节形式的 BWT（含 `$`）还原原始序列，结果包含末尾的 `$`。
///
/// 空 BWT 返回空序列；非空 BWT 中 `$` 缺失或重复时返回 `InvalidSentinel`。
pub fn decode(bwt: &[u8]) -> Result<Vec<u8>> {
    if bwt.is_empty() {
        return Ok(Vec::new());
    }
    check_sentinel(bwt)?;
    let alphabet = Alphabet::from_bwt(bwt);
    let codes = alphabet.encode_seq(bwt);
    let rank = RankIndex::build(codes, alphabet.sigma(), 64);
    let lf = rank.lf_mapping();
    Ok(alphabet.decode_seq(&invert_codes(rank.bwt(), &lf)))
}

/// 排序表法：n 轮 "把 BWT 作为新的一列拼到每行前面，再整体排序"，
/// 最后以 `$` 结尾的那一行即为原文。O(n² log n)，只作参照实现。
pub fn decode_by_sorting(bwt: &[u8]) -> Result<Vec<u8>> {
    if bwt.is_empty() {
        return Ok(Vec::new());
    }
    check_sentinel(bwt)?;
    let alphabet = Alphabet::from_bwt(bwt);
    let codes = alphabet.encode_seq(bwt);
    let n = codes.len();

    let mut table: Vec<Vec<u8>> = vec![Vec::with_capacity(n); n];
    for _ in 0..n {
        for (row, &ch) in table.iter_mut().zip(&codes) {
            row.insert(0, ch);
        }
        table.sort();
    }
    let row = table
        .into_iter()
        .find(|row| row.last() == Some(&SENTINEL_CODE))
        .unwrap_or_default();
    Ok(alphabet.decode_seq(&row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_banana() {
        assert_eq!(decode(b"annb$aa").unwrap(), b"banana$");
        assert_eq!(decode_by_sorting(b"annb$aa").unwrap(), b"banana$");
    }

    #[test]
    fn decode_single_symbol() {
        assert_eq!(decode(b"$").unwrap(), b"$");
        assert_eq!(decode(b"a$").unwrap(), b"a$");
    }

    #[test]
    fn decode_empty_is_empty() {
        assert!(decode(b"").unwrap().is_empty());
        assert!(decode_by_sorting(b"").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_bad_sentinel() {
        assert_eq!(decode(b"annbaa"), Err(IndexError::InvalidSentinel { position: 6 }));
        assert_eq!(decode(b"a$n$"), Err(IndexError::InvalidSentinel { position: 3 }));
        assert!(decode_by_sorting(b"abc").is_err());
    }

    #[test]
    fn both_methods_agree() {
        for bwt in [&b"TT$AACCGG"[..], b"ipssm$pissii", b"aaaaaa$", b"!$ "] {
            assert_eq!(decode(bwt).unwrap(), decode_by_sorting(bwt).unwrap(), "bwt={:?}", bwt);
        }
    }
}
