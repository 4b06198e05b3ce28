use super::rank::RankIndex;

/// 反向搜索中的行区间 `[top, bottom]`（闭区间）。
///
/// `top > bottom` 表示空区间，即无匹配；始终满足 `top <= bottom + 1`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInterval {
    pub top: usize,
    /// 用 `top - 1` 表示空区间会在 top = 0 时下溢，这里存 bottom + 1
    end: usize,
}

impl SearchInterval {
    /// 覆盖全部 n 行的初始区间。
    pub fn full(n: usize) -> Self {
        Self { top: 0, end: n }
    }

    pub fn empty() -> Self {
        Self { top: 0, end: 0 }
    }

    /// 由闭区间端点构造。
    pub fn new(top: usize, bottom: usize) -> Self {
        Self { top, end: bottom + 1 }
    }

    /// 闭区间上界；空区间返回 None。
    pub fn bottom(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end - 1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top >= self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.top)
    }

    pub fn rows(&self) -> std::ops::Range<usize> {
        self.top..self.end.max(self.top)
    }

    /// 用秩结构向左扩展一个符号：
    /// `top' = C[a] + occ(a, top)`，`bottom' = C[a] + occ(a, bottom + 1) - 1`。
    pub fn narrow_by_rank(&self, rank: &RankIndex, a: u8) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let c0 = rank.c(a);
        let top = c0 + rank.occ(a, self.top);
        let end = c0 + rank.occ(a, self.end);
        if top >= end {
            return Self::empty();
        }
        Self { top, end }
    }

    /// 顺扫区间内的 BWT，找到符号 a 第一次与最后一次出现的行，再经 LF 映射。
    /// 与 [`Self::narrow_by_rank`] 结果一致，复杂度与区间长度成正比。
    pub fn narrow_by_scan(&self, bwt: &[u8], lf: &[u32], a: u8) -> Self {
        let rows = &bwt[self.rows()];
        let first = rows.iter().position(|&ch| ch == a);
        let last = rows.iter().rposition(|&ch| ch == a);
        match (first, last) {
            (Some(f), Some(l)) => Self::new(lf[self.top + f] as usize, lf[self.top + l] as usize),
            _ => Self::empty(),
        }
    }
}

/// 对编码后的模式做反向搜索，从最后一个符号向前处理，区间变空时立即停止。
pub fn backward_search(rank: &RankIndex, pattern: &[u8]) -> SearchInterval {
    let mut iv = SearchInterval::full(rank.len());
    for &a in pattern.iter().rev() {
        iv = iv.narrow_by_rank(rank, a);
        if iv.is_empty() {
            break;
        }
    }
    iv
}
