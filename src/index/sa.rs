/// 构建后缀数组（循环倍增法，O(n log² n)）。
///
/// 输入为编码后的文本，末尾必须是唯一的 0（`$`）。每轮按 `(rank[i], rank[(i + k) % n])`
/// 排序，比较的是完整的循环旋转；由于终止符唯一，旋转顺序与后缀顺序一致且没有并列。
pub fn build_sa(text: &[u8]) -> Vec<u32> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = text.iter().map(|&b| b as usize).collect();
    let mut tmp: Vec<usize> = vec![0; n];

    let mut k = 1usize;
    loop {
        let key = |i: usize| (rank[i], rank[(i + k) % n]);
        sa.sort_unstable_by_key(|&i| key(i));

        tmp[sa[0]] = 0;
        for w in 1..n {
            let (a, b) = (sa[w - 1], sa[w]);
            tmp[b] = tmp[a] + usize::from(key(a) != key(b));
        }
        rank.copy_from_slice(&tmp);

        // 所有 rank 互不相同时排序完成
        if rank[sa[n - 1]] == n - 1 || k >= n {
            break;
        }
        k <<= 1;
    }

    sa.into_iter().map(|x| x as u32).collect()
}

/// 朴素实现：逐个比较完整旋转后排序，O(n² log n)。仅用于校验。
pub fn sort_rotations(text: &[u8]) -> Vec<u32> {
    let n = text.len();
    let mut offsets: Vec<usize> = (0..n).collect();
    offsets.sort_by(|&a, &b| {
        let ra = text[a..].iter().chain(&text[..a]);
        let rb = text[b..].iter().chain(&text[..b]);
        ra.cmp(rb)
    });
    offsets.into_iter().map(|x| x as u32).collect()
}
