//! # bwt-index
//!
//! 任意字节序列上的 Burrows–Wheeler 变换与 FM 索引。
//!
//! - **索引构建**：循环倍增法构建后缀数组，并由此得到 BWT
//! - **秩结构**：C 表 + Occ 采样，给出 LF 映射与第一列
//! - **反向搜索**：按模式长度（而非文本长度）收缩行区间，定位全部出现位置
//! - **逆变换**：仅凭 BWT 还原原始序列
//!
//! ## 快速示例
//!
//! ```rust
//! use bwt_index::index::FmIndex;
//!
//! // `$` 在构建时自动追加
//! let fm = FmIndex::build(b"banana").unwrap();
//! assert_eq!(fm.bwt(), b"annb$aa");
//! assert_eq!(fm.search(b"ana").unwrap(), vec![1, 3]);
//! assert_eq!(fm.decode().unwrap(), b"banana$");
//! ```
//!
//! ## 模块说明
//!
//! - [`index`] — 后缀数组、BWT、秩结构、反向搜索、逆变换
//! - [`util`] — 字母表编码
//! - [`error`] — 错误类型

pub mod error;
pub mod index;
pub mod util;

pub use error::{IndexError, Result};
pub use index::{FmIndex, IndexOpt, SearchInterval};
