pub mod discover;
pub mod tiff;
