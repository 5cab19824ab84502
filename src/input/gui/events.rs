/// Custom user events for the GUI event loop.
///
/// These let the visualizer loop thread wake the main UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A finished frame is parked in the presenter adapter.
    FrameReady,
    /// The visualizer wants a paint event; the handler calls
    /// `window.request_redraw()`.
    RepaintRequested,
    /// The visualizer loop has exited; the window can go.
    Released,
}
