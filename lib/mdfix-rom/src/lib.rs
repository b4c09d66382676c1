pub mod checksum;
pub mod header;
mod image;
mod repair;
mod report;

pub use header::{FieldError, HeaderField, Width};
pub use image::{Image, ImageError, Padding, RomError};
pub use repair::Repair;
pub use report::Report;
