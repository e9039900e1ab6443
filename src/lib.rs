//! An ordered map from byte-sequence keys to arbitrary values. Keys are
//! compared lexicographically as raw bytes, and the map supports bounded
//! ascending and descending range iteration in addition to the usual
//! insert/get/remove operations.

mod entry;
pub mod treap;
