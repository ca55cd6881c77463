//! Implicit-key treap.
//!
//! A randomized binary search tree kept in max-heap order on per-node
//! priorities and augmented with subtree sizes. The size augmentation lets
//! the same tree be split and merged by rank, which turns it into a sequence
//! with logarithmic cut, splice, and positional lookup.

mod node;
mod priority;
mod traits;
mod treap;
mod view;

pub use node::Pivot;
pub use priority::{PrioritySource, RngPriority, XorShift64};
pub use traits::{SequenceBase, SequenceSplitMerge};
pub use treap::{Iter, Treap};
pub use view::NodeRef;
