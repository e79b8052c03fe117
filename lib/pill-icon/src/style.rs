use derivative::Derivative;
use derive_setters::Setters;
use image::Rgb;

/// Material green, `#4CAF50`.
pub const BACKGROUND: Rgb<u8> = Rgb([0x4C, 0xAF, 0x50]);
pub const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Colors and proportions of the icon.
///
/// Ratios are integer percentages of the canvas side, so every derived
/// dimension is `size * percent / 100` rounded down.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct IconStyle {
    #[derivative(Default(value = "BACKGROUND"))]
    pub background: Rgb<u8>,

    #[derivative(Default(value = "WHITE"))]
    pub pill: Rgb<u8>,

    #[derivative(Default(value = "52"))]
    pub pill_width_percent: u32,

    #[derivative(Default(value = "21"))]
    pub pill_height_percent: u32,

    #[derivative(Default(value = "12"))]
    pub plus_length_percent: u32,

    #[derivative(Default(value = "5"))]
    pub plus_thickness_percent: u32,
}

impl IconStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The plus is cut out of the pill with the background color.
    pub fn plus(&self) -> Rgb<u8> {
        self.background
    }
}
