pub mod channels;
pub mod merge;
