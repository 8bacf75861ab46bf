//! Pixel types, generic over the channel type.

use derive_more::{Display, From};

/// A pixel made up of red, green and blue channels.
///
/// # Examples
/// ```
/// # use owned_array::pixel::Rgb;
/// let pixel = Rgb::from((128_u8, 0, 255));
/// assert_eq!(pixel.g, 0);
/// assert_eq!(pixel.to_string(), "RGB(128, 0, 255)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
#[display("RGB({r}, {g}, {b})")]
pub struct Rgb<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Rgb { r: 0.5, g: 1.0, b: 0.0 }.to_string(), "RGB(0.5, 1, 0)");
        assert_eq!(Rgb::<u32>::default().to_string(), "RGB(0, 0, 0)");
    }

    #[test]
    fn test_from_tuple() {
        let pixel: Rgb<u32> = (255, 255, 255).into();
        assert_eq!(pixel, Rgb { r: 255, g: 255, b: 255 });
    }
}
