use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Window lifecycle stages, ordered from least to most active.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifecycleStage {
    #[default]
    Dead,
    Alive,
    Visible,
    Focused,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub from: LifecycleStage,
    pub to: LifecycleStage,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Motion without a button or key transition.
    None,
    Press,
    Release,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    None,
    Left,
    Middle,
    Right,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MouseEvent {
    pub position: Point,
    pub button: MouseButton,
    pub direction: Direction,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub direction: Direction,
}

/// Platform events as seen by the visualizer loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VisualizerEvent {
    Lifecycle(LifecycleEvent),
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// The window now covers these bounds.
    Resize(PixelRect),
    Paint,
}

impl VisualizerEvent {
    #[must_use]
    pub fn left_press(position: Point) -> Self {
        Self::Mouse(MouseEvent {
            position,
            button: MouseButton::Left,
            direction: Direction::Press,
        })
    }

    #[must_use]
    pub fn key_press(code: KeyCode) -> Self {
        Self::Key(KeyEvent {
            code,
            direction: Direction::Press,
        })
    }

    #[must_use]
    pub fn lifecycle(from: LifecycleStage, to: LifecycleStage) -> Self {
        Self::Lifecycle(LifecycleEvent { from, to })
    }
}
