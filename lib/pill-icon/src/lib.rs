pub mod geometry;
pub mod render;
pub mod shape;
pub mod style;

pub use geometry::{Bounds, IconLayout};
pub use render::{render, render_icon, render_icon_with_style};
pub use style::IconStyle;

use image::RgbImage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Image error")]
    Image(#[source] image::ImageError),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::Image(other),
        }
    }
}

/// Something that can be painted onto an icon canvas.
pub trait Draw {
    fn draw(&self, canvas: &mut RgbImage);
}
