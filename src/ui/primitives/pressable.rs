//! Pressable wrapper primitive
//!
//! Wraps any element in a tappable region with press feedback and an
//! enable/disable fade. The fade lives in [`PressableState`], owned by the
//! caller; the widget only reads its current opacity.

use std::time::Instant;

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, Operation, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::mouse;
use iced::{Background, Border, Color, Element, Length, Rectangle, Size, Theme};

use crate::ui::animation::FadeAnimation;
use crate::ui::theme;

/// Opacity when fully disabled
const DISABLED_OPACITY: f32 = 0.4;
/// Opacity of the child while pressed with `press_dim`
const PRESS_DIM_OPACITY: f32 = 0.5;

/// Enable/disable state of one pressable
#[derive(Debug)]
pub struct PressableState {
    fade: FadeAnimation,
    disabled: bool,
    disabled_no_opacity: bool,
}

impl PressableState {
    /// The fade starts at 0 and heads to 1 unless `disabled`
    pub fn new(disabled: bool) -> Self {
        let mut fade = FadeAnimation::new(0.0);
        if !disabled {
            fade.animate_to(1.0);
        }
        Self {
            fade,
            disabled,
            disabled_no_opacity: false,
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled == disabled {
            return;
        }
        self.disabled = disabled;
        self.fade.animate_to(if disabled { 0.0 } else { 1.0 });
    }

    /// Block interaction without fading
    pub fn set_disabled_no_opacity(&mut self, disabled: bool) {
        self.disabled_no_opacity = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.disabled_no_opacity
    }

    /// Opacity in `[0.4, 1]`
    pub fn opacity(&self) -> f32 {
        DISABLED_OPACITY + (1.0 - DISABLED_OPACITY) * self.fade.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.fade.tick(now);
    }
}

impl Default for PressableState {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Visual response to a press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    /// Tint drawn over the child
    Overlay(Color),
    /// Ripple tint, above the child when `foreground`, else beneath it
    Ripple { color: Color, foreground: bool },
}

impl Feedback {
    /// Ripple on Android, overlay everywhere else
    pub fn platform_default(foreground: bool) -> Self {
        if cfg!(target_os = "android") {
            Feedback::Ripple {
                color: theme::PRESS_OVERLAY,
                foreground,
            }
        } else {
            Feedback::Overlay(theme::PRESS_OVERLAY)
        }
    }
}

/// Tappable wrapper around a child element
pub struct Pressable<'a, Message> {
    content: Element<'a, Message>,
    on_press: Option<Message>,
    opacity: f32,
    interactive: bool,
    feedback: Feedback,
    press_dim: bool,
    border: Border,
    width: Length,
    height: Length,
}

impl<'a, Message> Pressable<'a, Message> {
    pub fn new(content: impl Into<Element<'a, Message>>) -> Self {
        Self {
            content: content.into(),
            on_press: None,
            opacity: 1.0,
            interactive: true,
            feedback: Feedback::platform_default(false),
            press_dim: false,
            border: Border::default(),
            width: Length::Shrink,
            height: Length::Shrink,
        }
    }

    /// Take opacity and interactivity from `state`
    pub fn state(mut self, state: &PressableState) -> Self {
        self.opacity = state.opacity();
        self.interactive = state.is_interactive();
        self
    }

    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = feedback;
        self
    }

    /// Dim the child while pressed
    pub fn press_dim(mut self, dim: bool) -> Self {
        self.press_dim = dim;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Whether a press starting inside (`over`) or outside the bounds is tracked
    fn accepts_press(&self, over: bool) -> bool {
        self.interactive && over
    }
}

impl<Message: Clone> Pressable<'_, Message> {
    /// Message for a tracked press released inside (`over`) or outside the bounds
    fn release_message(&self, over: bool) -> Option<Message> {
        if self.interactive && over {
            self.on_press.clone()
        } else {
            None
        }
    }
}

/// State for the pressable widget
#[derive(Debug, Clone, Copy, Default)]
struct State {
    is_pressed: bool,
}

impl<'a, Message> Widget<Message, Theme, iced::Renderer> for Pressable<'a, Message>
where
    Message: Clone,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        let child = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &limits);
        let size = limits.resolve(self.width, self.height, child.size());
        layout::Node::with_children(size, vec![child])
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &iced::Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(child_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                child_layout,
                renderer,
                operation,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &iced::Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(child_layout) = layout.children().next() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                child_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
        if shell.is_event_captured() {
            return;
        }

        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(iced::touch::Event::FingerPressed { .. }) => {
                if self.accepts_press(cursor.is_over(bounds)) {
                    state.is_pressed = true;
                    shell.request_redraw();
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(iced::touch::Event::FingerLifted { .. }) => {
                if state.is_pressed {
                    state.is_pressed = false;
                    shell.request_redraw();
                    if let Some(message) = self.release_message(cursor.is_over(bounds)) {
                        shell.publish(message);
                    }
                    shell.capture_event();
                }
            }
            Event::Touch(iced::touch::Event::FingerLost { .. }) => {
                state.is_pressed = false;
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let pressed = state.is_pressed && self.interactive;
        let radius = self.border.radius;

        let fill = |renderer: &mut iced::Renderer, color: Color| {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border: Border {
                        radius,
                        ..Default::default()
                    },
                    ..Default::default()
                },
                Background::Color(color),
            );
        };

        renderer.with_layer(bounds, |renderer| {
            if let Feedback::Ripple {
                color,
                foreground: false,
            } = self.feedback
                && pressed
            {
                fill(renderer, color);
            }

            if let Some(child_layout) = layout.children().next() {
                self.content.as_widget().draw(
                    &tree.children[0],
                    renderer,
                    theme,
                    style,
                    child_layout,
                    cursor,
                    viewport,
                );
            }

            if pressed {
                match self.feedback {
                    Feedback::Overlay(color)
                    | Feedback::Ripple {
                        color,
                        foreground: true,
                    } => fill(renderer, color),
                    Feedback::Ripple { .. } => {}
                }
                if self.press_dim {
                    fill(renderer, theme::BACKDROP.scale_alpha(1.0 - PRESS_DIM_OPACITY));
                }
            }

            if self.opacity < 1.0 {
                fill(renderer, theme::BACKDROP.scale_alpha(1.0 - self.opacity));
            }

            if self.border.width > 0.0 {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds,
                        border: self.border,
                        ..Default::default()
                    },
                    Background::Color(Color::TRANSPARENT),
                );
            }
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if self.interactive && cursor.is_over(layout.bounds()) {
            return mouse::Interaction::Pointer;
        }
        layout
            .children()
            .next()
            .map(|child_layout| {
                self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    child_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
            .unwrap_or_default()
    }
}

impl<'a, Message> From<Pressable<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(pressable: Pressable<'a, Message>) -> Self {
        Element::new(pressable)
    }
}

/// Wrap `content` in a pressable
pub fn pressable<'a, Message>(content: impl Into<Element<'a, Message>>) -> Pressable<'a, Message> {
    Pressable::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::FADE_DURATION;

    fn settled(mut state: PressableState) -> PressableState {
        state.tick(Instant::now() + FADE_DURATION * 4);
        state
    }

    #[test]
    fn enabled_fades_in_to_full_opacity() {
        let state = settled(PressableState::new(false));
        assert!((state.opacity() - 1.0).abs() < 1e-3, "got {}", state.opacity());
        assert!(state.is_interactive());
    }

    #[test]
    fn disabled_rests_at_minimum_opacity() {
        let state = PressableState::new(true);
        assert!((state.opacity() - 0.4).abs() < 1e-6);
        assert!(!state.is_interactive());
        assert!(!state.is_animating());
    }

    #[test]
    fn set_disabled_only_animates_on_change() {
        let mut state = settled(PressableState::new(false));
        state.set_disabled(false);
        assert!(!state.is_animating(), "same flag must not restart the fade");

        state.set_disabled(true);
        assert!(state.is_disabled());
        let state = settled(state);
        assert!((state.opacity() - 0.4).abs() < 1e-3);
    }

    #[test]
    fn disabled_no_opacity_blocks_without_fading() {
        let mut state = settled(PressableState::new(false));
        state.set_disabled_no_opacity(true);
        assert!(!state.is_interactive());
        assert!(!state.is_animating());
        assert!((state.opacity() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn desktop_feedback_is_overlay() {
        if !cfg!(target_os = "android") {
            assert_eq!(
                Feedback::platform_default(true),
                Feedback::Overlay(theme::PRESS_OVERLAY)
            );
        }
    }

    mod press {
        use super::*;

        fn thumb(state: &PressableState) -> Pressable<'static, usize> {
            Pressable::new(iced::widget::text("thumb")).state(state).on_press(7)
        }

        #[test]
        fn release_inside_publishes() {
            let state = settled(PressableState::new(false));
            let pressable = thumb(&state);
            assert!(pressable.accepts_press(true));
            assert_eq!(pressable.release_message(true), Some(7));
        }

        #[test]
        fn release_outside_publishes_nothing() {
            let state = settled(PressableState::new(false));
            let pressable = thumb(&state);
            assert!(!pressable.accepts_press(false), "press must start inside");
            assert_eq!(pressable.release_message(false), None);
        }

        #[test]
        fn disabled_no_opacity_blocks_press_and_release() {
            let mut state = settled(PressableState::new(false));
            state.set_disabled_no_opacity(true);
            let pressable = thumb(&state);
            assert!(!pressable.accepts_press(true));
            assert_eq!(pressable.release_message(true), None);
        }

        #[test]
        fn disabled_blocks_press() {
            let state = PressableState::new(true);
            let pressable = thumb(&state);
            assert!(!pressable.accepts_press(true));
            assert_eq!(pressable.release_message(true), None);
        }

        #[test]
        fn without_on_press_nothing_is_published() {
            let state = settled(PressableState::new(false));
            let pressable: Pressable<'_, usize> =
                Pressable::new(iced::widget::text("thumb")).state(&state);
            assert!(pressable.accepts_press(true));
            assert_eq!(pressable.release_message(true), None);
        }
    }
}
