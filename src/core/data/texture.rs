use crate::adapters::pixel_format::rgb_to_rgba;
use crate::core::actions::fill::fill_rect;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 4;

fn texture_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextureError {
    PixelOutsideBounds {
        pixel: Point,
        bounds: PixelRect,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "texture needs {} bytes but buffer holds {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, bounds } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of texture bounds {}x{}",
                    pixel.x,
                    pixel.y,
                    bounds.width(),
                    bounds.height()
                )
            }
        }
    }
}

impl Error for TextureError {}

/// An off-screen RGBA surface, row-major, anchored at the origin.
///
/// Producers draw into a texture and hand it to the visualizer, which scales
/// it onto the window on the next paint. Window frames use the same type.
#[derive(Clone, PartialEq)]
pub struct Texture {
    bounds: PixelRect,
    data: Vec<u8>,
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl Texture {
    /// Allocates a fully transparent texture.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bounds: PixelRect::from_size(width, height),
            data: vec![0; texture_buffer_size(width, height)],
        }
    }

    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TextureError> {
        let expected_size = texture_buffer_size(width, height);

        if expected_size != data.len() {
            return Err(TextureError::BoundsMismatch {
                expected_size,
                buffer_size: data.len(),
            });
        }

        Ok(Self {
            bounds: PixelRect::from_size(width, height),
            data,
        })
    }

    /// Builds an opaque texture from tightly packed RGB triples.
    pub fn from_rgb(width: u32, height: u32, data: &[u8]) -> Result<Self, TextureError> {
        let expected_size = width as usize * height as usize * 3;

        if expected_size != data.len() {
            return Err(TextureError::BoundsMismatch {
                expected_size,
                buffer_size: data.len(),
            });
        }

        Self::from_rgba(width, height, rgb_to_rgba(data))
    }

    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.index_of(pixel)?;
        let bytes = &self.data[index..index + BYTES_PER_PIXEL];

        Some(Colour::from_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), TextureError> {
        let Some(index) = self.index_of(pixel) else {
            return Err(TextureError::PixelOutsideBounds {
                pixel,
                bounds: self.bounds,
            });
        };

        self.data[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_bytes());

        Ok(())
    }

    /// Overwrites `rect`, clipped to the texture bounds, with `colour`.
    pub fn fill(&mut self, rect: PixelRect, colour: Colour) {
        fill_rect(self, rect, colour);
    }

    /// Byte offset of `pixel` in the buffer, `None` when outside the bounds.
    pub(crate) fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.bounds.contains_point(pixel) {
            return None;
        }

        let x = pixel.x as usize;
        let y = pixel.y as usize;

        Some((y * self.width() as usize + x) * BYTES_PER_PIXEL)
    }
}
