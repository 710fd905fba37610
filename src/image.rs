use crate::color::Rgba;
use std::io::{self, Write};

//===========================================================================//

// Size limits for rendered images:
const MIN_WIDTH: u32 = 1;
const MIN_HEIGHT: u32 = 1;

//===========================================================================//

/// A rendered RGBA image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconImage {
    width: u32,
    height: u32,
    rgba_data: Vec<u8>,
}

impl IconImage {
    /// Creates a new image with the given dimensions and RGBA data.  The
    /// `width` and `height` must be nonzero, and `rgba_data` must have `4 *
    /// width * height` bytes and be in row-major order from top to bottom.
    /// Panics if the dimensions are out of range or if `rgba_data` is the
    /// wrong length.
    pub fn from_rgba_data(
        width: u32,
        height: u32,
        rgba_data: Vec<u8>,
    ) -> IconImage {
        check_dimensions(width, height);
        let expected_data_len = (width as u64) * (height as u64) * 4;
        if (rgba_data.len() as u64) != expected_data_len {
            panic!(
                "Invalid data length (was {}, but must be {} for {}x{} image)",
                rgba_data.len(),
                expected_data_len,
                width,
                height
            );
        }
        IconImage { width, height, rgba_data }
    }

    /// Creates a new image with every pixel set to `color`.  Panics if either
    /// dimension is zero.
    pub fn filled(width: u32, height: u32, color: Rgba) -> IconImage {
        check_dimensions(width, height);
        let num_pixels = (width as usize) * (height as usize);
        let mut rgba_data = Vec::with_capacity(num_pixels * 4);
        for _ in 0..num_pixels {
            rgba_data.extend_from_slice(&color.to_array());
        }
        IconImage { width, height, rgba_data }
    }

    /// Encodes the image as a PNG file.  Fully opaque images are written
    /// without an alpha channel.
    pub fn write_png<W: Write>(&self, writer: W) -> io::Result<()> {
        match self.write_png_enc(writer) {
            Ok(()) => Ok(()),
            Err(png::EncodingError::IoError(error)) => Err(error),
            Err(png::EncodingError::Format(error)) => {
                invalid_input!("PNG format error: {}", error);
            }
            Err(png::EncodingError::LimitsExceeded) => {
                invalid_input!("PNG limits exceeded");
            }
            Err(png::EncodingError::Parameter(error)) => {
                invalid_input!("PNG parameter error: {}", error);
            }
        }
    }

    fn write_png_enc<W: Write>(
        &self,
        writer: W,
    ) -> Result<(), png::EncodingError> {
        let has_alpha = self.has_alpha();
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_depth(png::BitDepth::Eight);
        if has_alpha {
            encoder.set_color(png::ColorType::Rgba);
        } else {
            encoder.set_color(png::ColorType::Rgb);
        }
        let mut writer = encoder.write_header()?;
        if has_alpha {
            writer.write_image_data(&self.rgba_data)?;
        } else {
            let rgb_data: Vec<u8> = self
                .rgba_data
                .chunks_exact(4)
                .flat_map(|pixel| pixel[..3].iter().copied())
                .collect();
            writer.write_image_data(&rgb_data)?;
        }
        Ok(())
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGBA data for this image, in row-major order from top to
    /// bottom.
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }

    /// Returns the color of the pixel at (`x`, `y`), counting from the top
    /// left.  Panics if the position is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let start = self.offset(x, y);
        let data = &self.rgba_data[start..][..4];
        Rgba::new(data[0], data[1], data[2], data[3])
    }

    /// Composites `color` over the pixel at (`x`, `y`).  Positions outside
    /// the image are ignored.
    pub(crate) fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64
        {
            return;
        }
        let start = self.offset(x as u32, y as u32);
        let dest = self.pixel(x as u32, y as u32);
        let blended = color.over(dest);
        self.rgba_data[start..][..4].copy_from_slice(&blended.to_array());
    }

    /// Returns true if any pixel is not fully opaque.
    pub fn has_alpha(&self) -> bool {
        self.rgba_data.chunks_exact(4).any(|pixel| pixel[3] != u8::MAX)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        if x >= self.width || y >= self.height {
            panic!(
                "Pixel ({}, {}) is outside of {}x{} image",
                x, y, self.width, self.height
            );
        }
        4 * ((y as usize) * (self.width as usize) + (x as usize))
    }
}

fn check_dimensions(width: u32, height: u32) {
    if width < MIN_WIDTH {
        panic!(
            "Invalid width (was {}, but must be at least {})",
            width, MIN_WIDTH
        );
    }
    if height < MIN_HEIGHT {
        panic!(
            "Invalid height (was {}, but must be at least {})",
            height, MIN_HEIGHT
        );
    }
}

//===========================================================================//


//===========================================================================//
