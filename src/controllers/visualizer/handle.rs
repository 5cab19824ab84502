use crossbeam::channel::Sender;

use crate::controllers::visualizer::errors::VisualizerError;
use crate::core::data::texture::Texture;

/// Submits textures to a running visualizer from any thread.
#[derive(Debug, Clone)]
pub struct VisualizerHandle {
    textures: Sender<Texture>,
}

impl VisualizerHandle {
    pub fn new(textures: Sender<Texture>) -> Self {
        Self { textures }
    }

    /// Hands `texture` to the visualizer loop and asks for a repaint.
    ///
    /// Blocks until the loop takes the texture. Fails with
    /// [`VisualizerError::Closed`] once the loop has exited.
    pub fn update(&self, texture: Texture) -> Result<(), VisualizerError> {
        self.textures
            .send(texture)
            .map_err(|_| VisualizerError::Closed)
    }
}
