/// 根据后缀数组构建 BWT：`bwt[k] = text[(sa[k] + n - 1) % n]`。
/// text 为编码后的文本（末尾唯一的 0 为 `$`），sa 为 [`super::sa::build_sa`] 的结果。
pub fn build_bwt(text: &[u8], sa: &[u32]) -> Vec<u8> {
    let n = text.len();
    sa.iter().map(|&p| text[(p as usize + n - 1) % n]).collect()
}

/// 终止符在 BWT 中所在的行（即 SA 中值为 0 的行）。
pub fn primary_row(sa: &[u32]) -> Option<usize> {
    sa.iter().position(|&p| p == 0)
}
