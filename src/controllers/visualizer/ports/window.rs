use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::texture::Texture;

/// Drawing and control surface of the visualizer window.
///
/// The loop only ever talks to the window through this trait, so the host
/// toolkit can be swapped (or recorded in tests).
pub trait WindowPort {
    /// The window was resized; the next frame covers `bounds`.
    fn resize(&mut self, bounds: PixelRect);
    fn fill(&mut self, rect: PixelRect, colour: Colour);
    /// Stretches `src` of `texture` over `dst`.
    fn scale(&mut self, dst: PixelRect, texture: &Texture, src: PixelRect);
    /// Shows the frame drawn so far.
    fn publish(&mut self);
    /// Asks the host to deliver a paint event.
    fn request_paint(&self);
    /// The loop has ended and the window may be closed.
    fn release(&mut self);
}
