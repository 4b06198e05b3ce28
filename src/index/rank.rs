/// BWT 上的秩结构：
/// - C 表：`c[a]` = BWT 中编码小于 a 的符号数量，`c[sigma] = n`。
/// - Occ 采样：每 `block` 行记录一次各符号的前缀计数，查询时从检查点顺扫补偿。
#[derive(Debug, Clone, Default)]
pub struct RankIndex {
    sigma: usize,
    block: usize,
    c: Vec<u32>,
    /// BWT 编码序列
    bwt: Vec<u8>,
    /// occ_samples[block_id * sigma + a] = bwt[0..block_id * block) 中 a 的数量
    occ_samples: Vec<u32>,
}

impl RankIndex {
    pub fn build(bwt: Vec<u8>, sigma: usize, block: usize) -> Self {
        let n = bwt.len();
        // 采样间隔不超过文本长度，超大取值退化为单个检查点
        let block = block.clamp(1, n.max(1));

        let mut freq = vec![0u32; sigma];
        for &ch in &bwt {
            freq[ch as usize] += 1;
        }
        let mut c = Vec::with_capacity(sigma + 1);
        let mut acc = 0u32;
        for &f in &freq {
            c.push(acc);
            acc += f;
        }
        c.push(acc);

        // 检查点覆盖 pos = 0..=n
        let num_blocks = n / block + 1;
        let mut occ_samples = Vec::with_capacity(num_blocks * sigma);
        let mut running = vec![0u32; sigma];
        for bi in 0..num_blocks {
            occ_samples.extend_from_slice(&running);
            let start = bi * block;
            let end = ((bi + 1) * block).min(n);
            for &ch in &bwt[start..end] {
                running[ch as usize] += 1;
            }
        }

        Self { sigma, block, c, bwt, occ_samples }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bwt.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bwt.is_empty()
    }

    #[inline]
    pub fn sigma(&self) -> usize {
        self.sigma
    }

    pub fn bwt(&self) -> &[u8] {
        &self.bwt
    }

    /// 第一列中编码 a 的起始行。
    #[inline]
    pub fn c(&self, a: u8) -> usize {
        self.c[a as usize] as usize
    }

    /// 编码 a 在文本中出现的次数。
    #[inline]
    pub fn symbol_count(&self, a: u8) -> usize {
        (self.c[a as usize + 1] - self.c[a as usize]) as usize
    }

    /// 返回 bwt[0..pos) 中 a 的出现次数。
    #[inline]
    pub fn occ(&self, a: u8, pos: usize) -> usize {
        let bi = pos / self.block;
        let base = self.occ_samples[bi * self.sigma + a as usize] as usize;
        let add = self.bwt[bi * self.block..pos].iter().filter(|&&ch| ch == a).count();
        base + add
    }

    /// 第 i 行最后一列符号在第一列中的行号。
    #[inline]
    pub fn lf(&self, i: usize) -> usize {
        let a = self.bwt[i];
        self.c(a) + self.occ(a, i)
    }

    /// 完整 LF 映射，一次顺扫 O(n)。
    pub fn lf_mapping(&self) -> Vec<u32> {
        let mut seen = vec![0u32; self.sigma];
        self.bwt
            .iter()
            .map(|&a| {
                let row = self.c[a as usize] + seen[a as usize];
                seen[a as usize] += 1;
                row
            })
            .collect()
    }

    /// 由 C 表还原排好序的第一列。
    pub fn first_column(&self) -> Vec<u8> {
        let mut col = Vec::with_capacity(self.len());
        for a in 0..self.sigma {
            let cnt = self.symbol_count(a as u8);
            col.extend(std::iter::repeat(a as u8).take(cnt));
        }
        col
    }
}

/// 在 `col` 中找第 `index` 次（从 1 开始计数）出现的 `elem`，返回其下标。
pub fn find_ith_occ(col: &[u8], elem: u8, index: usize) -> Option<usize> {
    if index == 0 {
        return None;
    }
    col.iter()
        .enumerate()
        .filter(|(_, &ch)| ch == elem)
        .nth(index - 1)
        .map(|(j, _)| j)
}

/// 朴素 LF 映射：对每个位置统计前缀出现次数，再到排序后的第一列里查找，O(n²)。
pub fn lf_mapping_naive(bwt: &[u8]) -> Vec<u32> {
    let mut first = bwt.to_vec();
    first.sort_unstable();
    bwt.iter()
        .enumerate()
        .map(|(i, &ch)| {
            let occ = bwt[..i].iter().filter(|&&x| x == ch).count();
            find_ith_occ(&first, ch, occ + 1).map_or(u32::MAX, |j| j as u32)
        })
        .collect()
}
