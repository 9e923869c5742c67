//! Clickable buttons for the pause and results overlays

use glam::Vec2;

use crate::input::{InputEvent, MouseButton};
use crate::render::{palette, FontSize, Renderer};
use crate::sim::Rect;

/// A labeled rectangle that highlights under the pointer and reacts to
/// left clicks
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
        }
    }

    pub fn hovered(&self, mouse: Vec2) -> bool {
        self.rect.contains_point(mouse)
    }

    /// True for a left click landing on the button
    pub fn clicked(&self, event: &InputEvent) -> bool {
        matches!(
            event,
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos,
            } if self.rect.contains_point(*pos)
        )
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R, mouse: Vec2) {
        let fill = if self.hovered(mouse) {
            palette::BUTTON_HOVER
        } else {
            palette::BUTTON
        };
        renderer.fill_rect(fill, self.rect);
        renderer.text(&self.label, FontSize::Label, palette::WHITE, self.rect.center());
    }
}
