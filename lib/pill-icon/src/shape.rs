//! Filled shape primitives on top of `imageproc`.
//!
//! A pixel belongs to a shape when its center `(x + 0.5, y + 0.5)` lies inside
//! the shape's continuous outline. Empty bounds draw nothing.

use crate::Bounds;
use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

fn to_rect(x: u32, y: u32, width: u32, height: u32) -> Rect {
    Rect::at(x as i32, y as i32).of_size(width, height)
}

pub fn draw_filled_bounds_mut(canvas: &mut RgbImage, bounds: Bounds, color: Rgb<u8>) {
    if bounds.is_empty() {
        return;
    }

    draw_filled_rect_mut(
        canvas,
        to_rect(bounds.x, bounds.y, bounds.width, bounds.height),
        color,
    );
}

/// Fill a rectangle whose corners are quarter circles of `radius`.
///
/// The radius is clamped to half of the shorter side, so a radius of half the
/// height on a wide box gives a stadium. Each covered row is emitted as one
/// horizontal span.
pub fn draw_filled_rounded_rect_mut(
    canvas: &mut RgbImage,
    bounds: Bounds,
    radius: u32,
    color: Rgb<u8>,
) {
    if bounds.is_empty() {
        return;
    }

    let r = f64::from(radius.min(bounds.width / 2).min(bounds.height / 2));
    let (left, right) = (f64::from(bounds.x), f64::from(bounds.right()));
    let (top, bottom) = (f64::from(bounds.y), f64::from(bounds.bottom()));

    for y in bounds.y..bounds.bottom() {
        let cy = f64::from(y) + 0.5;
        let dy = if cy < top + r {
            top + r - cy
        } else if cy > bottom - r {
            cy - (bottom - r)
        } else {
            0.0
        };

        let inset = r - (r * r - dy * dy).max(0.0).sqrt();
        let start = (left + inset - 0.5).ceil() as u32;
        let end = (right - inset - 0.5).floor() as u32 + 1;

        if end > start {
            draw_filled_rect_mut(canvas, to_rect(start, y, end - start, 1), color);
        }
    }
}
