use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::controllers::visualizer::events::{
    Direction, KeyCode, KeyEvent, LifecycleStage, MouseButton, MouseEvent, VisualizerEvent,
};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Turns `winit` window events into `VisualizerEvent`s.
///
/// winit reports button presses without a position, so the last cursor
/// position is tracked here. Lifecycle transitions are synthesised from
/// resume, focus, occlusion and close notifications.
#[derive(Debug, Default)]
pub struct WindowEventTranslator {
    cursor: Point,
    stage: LifecycleStage,
}

impl WindowEventTranslator {
    pub fn resumed(&mut self) -> Option<VisualizerEvent> {
        if self.stage >= LifecycleStage::Visible {
            return None;
        }
        self.transition(LifecycleStage::Visible)
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<VisualizerEvent> {
        match event {
            WindowEvent::Resized(size) => {
                Some(VisualizerEvent::Resize(PixelRect::from_size(size.width, size.height)))
            }
            WindowEvent::RedrawRequested => Some(VisualizerEvent::Paint),
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.transition(LifecycleStage::Dead)
            }
            WindowEvent::Focused(true) => self.transition(LifecycleStage::Focused),
            WindowEvent::Focused(false) => self.transition(LifecycleStage::Visible),
            WindowEvent::Occluded(true) => self.transition(LifecycleStage::Alive),
            WindowEvent::Occluded(false) => self.transition(LifecycleStage::Visible),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as i32, position.y as i32);
                Some(VisualizerEvent::Mouse(MouseEvent {
                    position: self.cursor,
                    button: MouseButton::None,
                    direction: Direction::None,
                }))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(VisualizerEvent::Mouse(MouseEvent {
                    position: self.cursor,
                    button: mouse_button(*button),
                    direction: direction(*state),
                }))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let code = match event.physical_key {
                    PhysicalKey::Code(WinitKeyCode::Escape) => KeyCode::Escape,
                    _ => KeyCode::Other,
                };
                Some(VisualizerEvent::Key(KeyEvent {
                    code,
                    direction: direction(event.state),
                }))
            }
            _ => None,
        }
    }

    fn transition(&mut self, to: LifecycleStage) -> Option<VisualizerEvent> {
        if self.stage == to {
            return None;
        }

        let from = std::mem::replace(&mut self.stage, to);
        Some(VisualizerEvent::lifecycle(from, to))
    }
}

fn direction(state: ElementState) -> Direction {
    match state {
        ElementState::Pressed => Direction::Press,
        ElementState::Released => Direction::Release,
    }
}

fn mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}
