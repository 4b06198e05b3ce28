pub mod bwt;
pub mod fm;
pub mod inverse;
pub mod rank;
pub mod sa;
pub mod search;

pub use fm::{FmIndex, IndexOpt};
pub use search::SearchInterval;
