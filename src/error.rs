use thiserror::Error;

/// 索引构建与查询过程中的错误。
///
/// "未找到匹配" 与 "空模式匹配全部行" 都是正常返回值，不属于错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("input sequence is empty")]
    EmptyInput,
    /// 输入中出现了保留的终止符 `$`，或 BWT 中终止符数量不是恰好一个
    #[error("invalid sentinel at position {position}")]
    InvalidSentinel { position: usize },
    #[error("pattern contains the reserved sentinel at position {position}")]
    PatternContainsSentinel { position: usize },
    #[error("index has not been built")]
    IndexNotBuilt,
}

pub type Result<T> = std::result::Result<T, IndexError>;
