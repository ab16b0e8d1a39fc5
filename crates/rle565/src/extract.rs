//! Permissive extraction of RGB565 image data from header text.
//!
//! This is deliberately a tolerant scan, not a structural C parser: existing
//! asset headers vary in formatting, trailing comments and surrounding
//! boilerplate, and the firmware projects that produce them only agree on
//! two conventions: a `#define <NAME>_WIDTH` / `#define <NAME>_HEIGHT` pair
//! and a stream of 4-digit hex literals in reading order. The extractor
//! matches exactly those. A stricter grammar could replace this module
//! without touching the encoder or serializer.

use crate::{HeaderError, Result};
use regex::Regex;
use std::sync::LazyLock;

static WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#define\s+\w+_WIDTH\s+(\d+)").unwrap());

static HEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#define\s+\w+_HEIGHT\s+(\d+)").unwrap());

static PIXEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"0x[0-9A-Fa-f]{4}").unwrap());

/// An RGB565 image pulled out of a source header.
///
/// Pixels are stored as 16-bit values in order of appearance in the source
/// text. Row-major layout is assumed, matching how display firmware blits
/// these arrays, but only the total count is ever verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Pixel values, `width * height` entries
    pub pixels: Vec<u16>,
}

/// Extracts an [`Image`] from RGB565 header text.
///
/// # Matching rules
///
/// - Width and height come from the first `#define <NAME>_WIDTH <n>` and
///   `#define <NAME>_HEIGHT <n>` in the text. Later duplicate declarations
///   are ignored.
/// - Every `0xHHHH` literal (exactly four hex digits, either case) counts as
///   one pixel, wherever it appears.
///
/// The pixel count must equal the declared `width * height`; a truncated or
/// padded array is rejected rather than silently clipped.
///
/// # Errors
///
/// - [`HeaderError::MissingDimension`] if either declaration is absent
/// - [`HeaderError::NoPixelData`] if the text holds no pixel literals
/// - [`HeaderError::PixelCountMismatch`] if the count disagrees with the
///   declared area
/// - [`HeaderError::IntegerOverflow`] if a dimension literal or the area
///   does not fit a `usize`
///
/// # Example
///
/// ```
/// use rle565::extract_image;
///
/// let text = "#define DOT_WIDTH 2\n#define DOT_HEIGHT 1\n\
///             const uint16_t dot[] = { 0xF800, 0x07E0 };\n";
/// let image = extract_image(text)?;
/// assert_eq!(image.width, 2);
/// assert_eq!(image.pixels, vec![0xF800, 0x07E0]);
/// # Ok::<(), rle565::HeaderError>(())
/// ```
pub fn extract_image(text: &str) -> Result<Image> {
    let width = find_dimension(text, &WIDTH_RE, "WIDTH")?;
    let height = find_dimension(text, &HEIGHT_RE, "HEIGHT")?;
    let expected = width
        .checked_mul(height)
        .ok_or(HeaderError::IntegerOverflow)?;

    let pixels: Vec<u16> = PIXEL_RE
        .find_iter(text)
        .map(|m| parse_pixel(m.as_str()))
        .collect();

    if pixels.is_empty() {
        return Err(HeaderError::NoPixelData);
    }
    if pixels.len() != expected {
        return Err(HeaderError::PixelCountMismatch {
            found: pixels.len(),
            expected,
        });
    }

    Ok(Image {
        width,
        height,
        pixels,
    })
}

fn find_dimension(text: &str, re: &Regex, which: &'static str) -> Result<usize> {
    let caps = re
        .captures(text)
        .ok_or(HeaderError::MissingDimension { which })?;
    caps[1]
        .parse::<usize>()
        .map_err(|_| HeaderError::IntegerOverflow)
}

#[inline]
fn parse_pixel(token: &str) -> u16 {
    // token is `0x` plus exactly four hex digits, which always fits a u16
    u16::from_str_radix(&token[2..], 16).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: usize, height: usize, pixels: &[u16]) -> String {
        let mut text = format!("#define IMG_WIDTH {width}\n#define IMG_HEIGHT {height}\n\n");
        text.push_str("const uint16_t img[] = {\n");
        for px in pixels {
            text.push_str(&format!("    0x{px:04X},\n"));
        }
        text.push_str("};\n");
        text
    }

    #[test]
    fn test_extract_valid_header() {
        let text = header(2, 2, &[0xF800, 0x07E0, 0x001F, 0xFFFF]);
        let image = extract_image(&text).unwrap();
        assert_eq!(image.width, 2);
        assert_eq!(image.height, 2);
        assert_eq!(image.pixels, vec![0xF800, 0x07E0, 0x001F, 0xFFFF]);
    }

    #[test]
    fn test_missing_width() {
        let text = "#define IMG_HEIGHT 1\n0x0000\n";
        assert_eq!(
            extract_image(text),
            Err(HeaderError::MissingDimension { which: "WIDTH" })
        );
    }

    #[test]
    fn test_missing_height() {
        let text = "#define IMG_WIDTH 1\n0x0000\n";
        assert_eq!(
            extract_image(text),
            Err(HeaderError::MissingDimension { which: "HEIGHT" })
        );
    }

    #[test]
    fn test_no_pixel_data() {
        let text = "#define IMG_WIDTH 2\n#define IMG_HEIGHT 2\n";
        assert_eq!(extract_image(text), Err(HeaderError::NoPixelData));
    }

    #[test]
    fn test_pixel_count_mismatch() {
        // 2x2 declared, three tokens present
        let text = header(2, 2, &[0x0000, 0x0001, 0x0002]);
        assert_eq!(
            extract_image(&text),
            Err(HeaderError::PixelCountMismatch {
                found: 3,
                expected: 4
            })
        );
    }

    #[test]
    fn test_first_dimension_declaration_wins() {
        let text = "#define A_WIDTH 1\n#define B_WIDTH 99\n\
                    #define A_HEIGHT 1\n#define B_HEIGHT 99\n0x1234\n";
        let image = extract_image(text).unwrap();
        assert_eq!((image.width, image.height), (1, 1));
    }

    #[test]
    fn test_lowercase_hex_accepted() {
        let text = "#define IMG_WIDTH 2\n#define IMG_HEIGHT 1\n0xf800, 0x07e0\n";
        let image = extract_image(text).unwrap();
        assert_eq!(image.pixels, vec![0xF800, 0x07E0]);
    }

    #[test]
    fn test_short_hex_literals_are_not_pixels() {
        // 0xFF is two digits and must not count as pixel data
        let text = "#define IMG_WIDTH 1\n#define IMG_HEIGHT 1\n0xFF, 0xABCD\n";
        let image = extract_image(text).unwrap();
        assert_eq!(image.pixels, vec![0xABCD]);
    }

    #[test]
    fn test_dimension_overflow() {
        let text = "#define IMG_WIDTH 99999999999999999999999999\n\
                    #define IMG_HEIGHT 1\n0x0000\n";
        assert_eq!(extract_image(text), Err(HeaderError::IntegerOverflow));
    }

    #[test]
    fn test_area_overflow() {
        let text = format!(
            "#define IMG_WIDTH {m}\n#define IMG_HEIGHT {m}\n0x0000\n",
            m = usize::MAX
        );
        assert_eq!(extract_image(&text), Err(HeaderError::IntegerOverflow));
    }
}
