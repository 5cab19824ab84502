use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualizerError {
    #[cfg(feature = "gui")]
    #[error("failed to create the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[cfg(feature = "gui")]
    #[error("failed to initialize the app window: {0}")]
    Window(#[from] winit::error::OsError),

    #[cfg(feature = "gui")]
    #[error("failed to render to the window surface: {0}")]
    Surface(#[from] pixels::Error),

    #[cfg(feature = "gui")]
    #[error("failed to resize the window surface: {0}")]
    SurfaceSize(#[from] pixels::TextureError),

    #[error("failed to start the visualizer loop: {0}")]
    Thread(#[from] std::io::Error),

    #[error("the visualizer loop has exited")]
    Closed,
}
