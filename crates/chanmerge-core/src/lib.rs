pub mod error;
pub mod channel;
pub mod index;
pub mod matcher;
pub mod compose;
pub mod io;
pub mod merge;
