use crate::controllers::visualizer::events::{
    Direction, KeyCode, KeyEvent, LifecycleEvent, LifecycleStage, VisualizerEvent,
};

/// Reports whether `event` ends the session: the window is being destroyed or
/// Escape was pressed.
#[must_use]
pub fn detect_terminate(event: &VisualizerEvent) -> bool {
    match event {
        VisualizerEvent::Lifecycle(LifecycleEvent { to, .. }) => *to == LifecycleStage::Dead,
        VisualizerEvent::Key(KeyEvent {
            code: KeyCode::Escape,
            direction: Direction::Press,
        }) => true,
        _ => false,
    }
}
