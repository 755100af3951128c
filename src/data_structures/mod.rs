pub mod distance_queue;
pub mod dp_table;
pub mod subsets;

pub use distance_queue::DistanceQueue;
pub use dp_table::DpTable;
pub use subsets::{bit, contains, members, Subsets};
