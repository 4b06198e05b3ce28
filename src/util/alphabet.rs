use crate::error::{IndexError, Result};

/// 保留的终止符字节。
pub const SENTINEL: u8 = b'$';
/// 终止符在内部编码中的取值，小于所有字母。
pub const SENTINEL_CODE: u8 = 0;

/// 由文本中出现过的字节构成的有序字母表。
///
/// 字节按升序编码为 `1..=sigma`，`0` 预留给 `$`。这样无论字母本身的字节值
/// 是否小于 `$`（例如空格、`!`），终止符在比较时始终最小。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    /// 升序排列的不重复字母（不含 `$`）
    symbols: Vec<u8>,
}

impl Alphabet {
    /// 从文本收集字母表；文本中出现 `$` 即视为非法。
    pub fn from_text(text: &[u8]) -> Result<Self> {
        let mut seen = [false; 256];
        for (i, &b) in text.iter().enumerate() {
            if b == SENTINEL {
                return Err(IndexError::InvalidSentinel { position: i });
            }
            seen[b as usize] = true;
        }
        let symbols = (0..=255u8).filter(|&b| seen[b as usize]).collect();
        Ok(Self { symbols })
    }

    /// 从 BWT 收集字母表，`$` 被跳过。
    pub(crate) fn from_bwt(bwt: &[u8]) -> Self {
        let mut seen = [false; 256];
        for &b in bwt {
            seen[b as usize] = true;
        }
        seen[SENTINEL as usize] = false;
        let symbols = (0..=255u8).filter(|&b| seen[b as usize]).collect();
        Self { symbols }
    }

    /// 编码数量，含终止符。
    #[inline]
    pub fn sigma(&self) -> usize {
        self.symbols.len() + 1
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// 字节 -> 编码。不在字母表中的字节返回 None。
    #[inline]
    pub fn encode(&self, b: u8) -> Option<u8> {
        if b == SENTINEL {
            return Some(SENTINEL_CODE);
        }
        self.symbols.binary_search(&b).ok().map(|i| (i + 1) as u8)
    }

    #[inline]
    pub fn decode(&self, code: u8) -> u8 {
        match code {
            SENTINEL_CODE => SENTINEL,
            c => self.symbols[c as usize - 1],
        }
    }

    /// 编码整条序列；调用方保证所有字节都在字母表内。
    pub fn encode_seq(&self, seq: &[u8]) -> Vec<u8> {
        seq.iter().filter_map(|&b| self.encode(b)).collect()
    }

    pub fn decode_seq(&self, codes: &[u8]) -> Vec<u8> {
        codes.iter().map(|&c| self.decode(c)).collect()
    }
}
