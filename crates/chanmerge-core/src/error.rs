use thiserror::Error;

use crate::channel::Channel;

#[derive(Error, Debug)]
pub enum ChanmergeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Position {key}: no matching file for channel {channel}")]
    UnmatchedPosition { key: String, channel: Channel },

    #[error("Channel image is {got_width}x{got_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        got_width: u32,
        got_height: u32,
    },

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ChanmergeError>;
