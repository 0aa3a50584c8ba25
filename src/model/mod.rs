//! Data model for outline entries, page ranges and classified pieces.
//!
//! Every value here is derived from a document snapshot and never mutated
//! in place; a changed document is segmented again from scratch.

mod outline;
mod piece;
mod range;

pub use outline::{OutlineEntry, RawOutlineItem};
pub use piece::ClassifiedPiece;
pub use range::{PageRange, RangeSource};
