use std::time::Instant;

use rayon::prelude::*;

use crate::error::{IndexError, Result};
use crate::util::alphabet::{Alphabet, SENTINEL, SENTINEL_CODE};

use super::rank::RankIndex;
use super::search::{backward_search, SearchInterval};
use super::{bwt, inverse, sa};

/// 索引构建参数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOpt {
    /// Occ 采样间隔（行数），越小查询越快、占用越大
    pub occ_block: usize,
}

impl Default for IndexOpt {
    fn default() -> Self {
        Self { occ_block: 64 }
    }
}

/// FM 索引：BWT + 完整后缀数组 + LF 映射。
///
/// - 由 [`FmIndex::build`] 一次性构建，之后只读，可在多个线程间共享查询。
/// - 输入序列不应含 `$`，构建时自动在末尾追加。
/// - `Default` 得到的是未构建的空索引，查询时返回 [`IndexError::IndexNotBuilt`]。
#[derive(Debug, Clone, Default)]
pub struct FmIndex {
    alphabet: Alphabet,
    /// C 表、Occ 采样与 BWT 编码序列
    rank: RankIndex,
    /// 完整 SA，sa[k] 为第 k 小旋转的起始位置
    sa: Vec<u32>,
    /// lf[i] = 第 i 行最后一列符号在第一列中的行号
    lf: Vec<u32>,
}

impl FmIndex {
    pub fn build(seq: &[u8]) -> Result<Self> {
        Self::build_with_opt(seq, IndexOpt::default())
    }

    pub fn build_with_opt(seq: &[u8], opt: IndexOpt) -> Result<Self> {
        if seq.is_empty() {
            return Err(IndexError::EmptyInput);
        }
        let alphabet = Alphabet::from_text(seq)?;
        let started = Instant::now();

        let mut text = alphabet.encode_seq(seq);
        text.push(SENTINEL_CODE);

        let sa_arr = sa::build_sa(&text);
        let bwt_arr = bwt::build_bwt(&text, &sa_arr);
        let rank = RankIndex::build(bwt_arr, alphabet.sigma(), opt.occ_block);
        let lf = rank.lf_mapping();

        log::debug!(
            "built FM index: n={}, sigma={}, occ_block={}, elapsed={:?}",
            text.len(),
            alphabet.sigma(),
            opt.occ_block,
            started.elapsed()
        );

        Ok(Self { alphabet, rank, sa: sa_arr, lf })
    }

    fn ensure_built(&self) -> Result<()> {
        if self.sa.is_empty() || self.rank.len() != self.sa.len() {
            return Err(IndexError::IndexNotBuilt);
        }
        Ok(())
    }

    /// 文本长度（含 `$`）。
    #[inline]
    pub fn text_len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_built(&self) -> bool {
        !self.sa.is_empty()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn suffix_array(&self) -> &[u32] {
        &self.sa
    }

    pub fn lf_mapping(&self) -> &[u32] {
        &self.lf
    }

    /// 字节形式的 BWT（含 `$`）。
    pub fn bwt(&self) -> Vec<u8> {
        self.alphabet.decode_seq(self.rank.bwt())
    }

    /// 字节形式的第一列。
    pub fn first_column(&self) -> Vec<u8> {
        self.alphabet.decode_seq(&self.rank.first_column())
    }

    /// 把模式编码为字母表内部编码；含 `$` 时报错，含字母表外字节时返回 None。
    fn encode_pattern(&self, pattern: &[u8]) -> Result<Option<Vec<u8>>> {
        if let Some(position) = pattern.iter().position(|&b| b == SENTINEL) {
            return Err(IndexError::PatternContainsSentinel { position });
        }
        Ok(pattern.iter().map(|&b| self.alphabet.encode(b)).collect())
    }

    /// 反向搜索，返回匹配的 SA 行区间。空模式返回全部行。
    pub fn search_rows(&self, pattern: &[u8]) -> Result<SearchInterval> {
        self.ensure_built()?;
        let iv = match self.encode_pattern(pattern)? {
            Some(codes) => backward_search(&self.rank, &codes),
            None => SearchInterval::empty(),
        };
        log::trace!("search {:?}: rows {:?}", String::from_utf8_lossy(pattern), iv.rows());
        Ok(iv)
    }

    /// 出现次数，不解析位置。
    pub fn count(&self, pattern: &[u8]) -> Result<usize> {
        Ok(self.search_rows(pattern)?.len())
    }

    /// 返回模式在原文中所有出现位置（从 0 开始，升序）。
    ///
    /// 空模式匹配每一行，结果为 `0..n`，包括 `$` 所在的位置 n-1。
    pub fn search(&self, pattern: &[u8]) -> Result<Vec<u32>> {
        let iv = self.search_rows(pattern)?;
        let mut positions = self.sa[iv.rows()].to_vec();
        positions.sort_unstable();
        Ok(positions)
    }

    /// 并行查询多个模式，结果与输入顺序一一对应。
    pub fn search_batch<P>(&self, patterns: &[P]) -> Vec<Result<Vec<u32>>>
    where
        P: AsRef<[u8]> + Sync,
    {
        patterns.par_iter().map(|p| self.search(p.as_ref())).collect()
    }

    /// 只用 BWT 与 LF 映射还原原始序列（含末尾 `$`）。
    pub fn decode(&self) -> Result<Vec<u8>> {
        self.ensure_built()?;
        let codes = inverse::invert_codes(self.rank.bwt(), &self.lf);
        Ok(self.alphabet.decode_seq(&codes))
    }
}
