//! Icon layout derived from the canvas side length.
//!
//! All arithmetic is integer. Centering uses floor division, so a shape whose
//! free space is odd sits one pixel towards the top-left.

use crate::IconStyle;

/// An axis-aligned box of whole pixels. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box placed so the free space of a `size`-wide square is split evenly.
    pub fn centered_in(size: u32, width: u32, height: u32) -> Self {
        Self::new(
            size.saturating_sub(width) / 2,
            size.saturating_sub(height) / 2,
            width,
            height,
        )
    }

    /// Box whose top-left is `(cx - width / 2, cy - height / 2)`.
    pub fn around(cx: u32, cy: u32, width: u32, height: u32) -> Self {
        Self::new(
            cx.saturating_sub(width / 2),
            cy.saturating_sub(height / 2),
            width,
            height,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Where the pill and the two plus arms land on a `size × size` canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub pill: Bounds,
    pub radius: u32,
    pub vertical_arm: Bounds,
    pub horizontal_arm: Bounds,
}

impl IconLayout {
    pub fn new(size: u32, style: &IconStyle) -> Self {
        // percentages above 100 are treated as 100, so no shape outgrows the canvas
        let scale = |percent: u32| (u64::from(size) * u64::from(percent.min(100)) / 100) as u32;

        let pill_width = scale(style.pill_width_percent);
        let pill_height = scale(style.pill_height_percent);
        let length = scale(style.plus_length_percent);
        let thickness = scale(style.plus_thickness_percent);

        let (cx, cy) = (size / 2, size / 2);

        let layout = Self {
            size,
            pill: Bounds::centered_in(size, pill_width, pill_height),
            radius: pill_height / 2,
            vertical_arm: Bounds::around(cx, cy, thickness, length),
            horizontal_arm: Bounds::around(cx, cy, length, thickness),
        };

        log::debug!("icon layout for {size}x{size}: {layout:?}");
        layout
    }

    pub fn plus_length(&self) -> u32 {
        self.vertical_arm.height
    }

    pub fn plus_thickness(&self) -> u32 {
        self.vertical_arm.width
    }
}
