/// Analysis modules — the aggregation pass and post-pass rankings.

pub mod aggregate;
pub mod top_extensions;

pub use aggregate::aggregate;
pub use top_extensions::{largest_first, top_extensions};
