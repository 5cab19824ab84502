use crate::core::data::texture::Texture;

/// Receives finished frames and control requests on behalf of the host
/// toolkit. Called from the visualizer loop thread.
pub trait FrameSink: Send + Sync {
    fn publish(&self, frame: Texture);
    fn request_paint(&self);
    fn release(&self);
}
