pub mod counting;
pub mod ranking;

pub use counting::{count_shorter_than, count_up_to, valid_count};
pub use ranking::SequenceNumbering;
