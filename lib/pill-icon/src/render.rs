use crate::{
    Bounds, Draw, Error, IconLayout, IconStyle, Result,
    shape::{draw_filled_bounds_mut, draw_filled_rounded_rect_mut},
};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// The white capsule in the middle of the icon.
#[derive(Debug, Clone, Copy)]
pub struct Pill {
    pub bounds: Bounds,
    pub radius: u32,
    pub color: Rgb<u8>,
}

impl Draw for Pill {
    fn draw(&self, canvas: &mut RgbImage) {
        draw_filled_rounded_rect_mut(canvas, self.bounds, self.radius, self.color);
    }
}

/// One arm of the plus mark.
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    pub bounds: Bounds,
    pub color: Rgb<u8>,
}

impl Draw for Bar {
    fn draw(&self, canvas: &mut RgbImage) {
        draw_filled_bounds_mut(canvas, self.bounds, self.color);
    }
}

/// Shapes in paint order: pill, vertical arm, horizontal arm.
pub fn shapes(layout: &IconLayout, style: &IconStyle) -> Vec<Box<dyn Draw>> {
    vec![
        Box::new(Pill {
            bounds: layout.pill,
            radius: layout.radius,
            color: style.pill,
        }),
        Box::new(Bar {
            bounds: layout.vertical_arm,
            color: style.plus(),
        }),
        Box::new(Bar {
            bounds: layout.horizontal_arm,
            color: style.plus(),
        }),
    ]
}

/// Paint a `size × size` icon in memory.
pub fn render(size: u32, style: &IconStyle) -> Result<RgbImage> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }

    let layout = IconLayout::new(size, style);
    let mut canvas = RgbImage::from_pixel(size, size, style.background);

    for shape in shapes(&layout, style) {
        shape.draw(&mut canvas);
    }

    Ok(canvas)
}

/// Render the default icon and write it as PNG, replacing any existing file.
pub fn render_icon(size: u32, path: impl AsRef<Path>) -> Result<()> {
    render_icon_with_style(size, path, &IconStyle::default())
}

pub fn render_icon_with_style(size: u32, path: impl AsRef<Path>, style: &IconStyle) -> Result<()> {
    let path = path.as_ref();
    let canvas = render(size, style)?;

    canvas.save_with_format(path, ImageFormat::Png)?;
    log::info!("saved {size}x{size} icon to {}", path.display());

    Ok(())
}
