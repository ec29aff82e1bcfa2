//! The widget stack: items, scroll state, gestures, and per-frame output.

use stackpose_animation::Spring;
use stackpose_foundation::{PointerEvent, PointerEventKind};
use stackpose_layout::{overscroll_translate, CardVisuals, StackLayout, StackMetrics};

use crate::gesture::StackGestureDetector;
use crate::item::StackItem;
use crate::scroll::ScrollState;

/// A vertically stacked list of widget cards with scroll-driven peeling.
///
/// The stack owns the item sequence, the scroll location, and an optional
/// settle spring. A host drives it with three calls per frame cycle:
/// [`handle_pointer`](Self::handle_pointer) for each input event,
/// [`tick`](Self::tick) with the frame delta, and [`frame`](Self::frame) to
/// read the visual properties it should draw.
#[derive(Debug)]
pub struct WidgetStack<T> {
    items: Vec<StackItem<T>>,
    layout: StackLayout,
    scroll: ScrollState,
    detector: StackGestureDetector,
    settle: Option<Spring>,
    viewport_height: f32,
    theme_name: String,
}

impl<T> WidgetStack<T> {
    /// Mounts a stack. `viewport_height` is the visible height of the host
    /// surface, used to bound how far past the last card the stack may rest.
    pub fn new(items: Vec<StackItem<T>>, metrics: StackMetrics, viewport_height: f32) -> Self {
        let scroll = ScrollState::new(0.0);
        let detector = StackGestureDetector::new(scroll.clone());
        Self {
            items,
            layout: StackLayout::new(metrics),
            scroll,
            detector,
            settle: None,
            viewport_height,
            theme_name: "light".to_owned(),
        }
    }

    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme_name = name.into();
        self
    }

    pub fn items(&self) -> &[StackItem<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn metrics(&self) -> &StackMetrics {
        self.layout.metrics()
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn set_theme_name(&mut self, name: impl Into<String>) {
        self.theme_name = name.into();
    }

    /// A shared handle to the scroll position.
    pub fn scroll(&self) -> ScrollState {
        self.scroll.clone()
    }

    pub fn location(&self) -> f32 {
        self.scroll.location()
    }

    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
    }

    /// How far past the top of the last fully-visible position the stack may
    /// rest. Zero when every card fits in the viewport.
    pub fn max_overscroll(&self) -> f32 {
        let metrics = self.layout.metrics();
        let stack_height = metrics.item_height() * self.items.len() as f32;
        (stack_height - self.viewport_height + metrics.item_height()).max(0.0)
    }

    /// Dispatches one pointer event and returns whether it was consumed.
    ///
    /// A new press interrupts any running settle animation, exactly like
    /// catching a list mid-bounce. A release outside the legal range arms
    /// the settle spring, seeded with the measured release velocity.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if self.settle.take().is_some() {
                    log::debug!("stack: settle interrupted by new press");
                }
                self.detector.on_down(event.position, event.time_ms)
            }
            PointerEventKind::Move => {
                self.detector
                    .on_move(event.position, event.buttons, event.time_ms)
            }
            PointerEventKind::Up => {
                let release = self.detector.on_up(event.time_ms);
                if release.was_dragging {
                    self.settle_after_release(release.velocity);
                }
                release.was_dragging
            }
            PointerEventKind::Cancel => self.detector.on_cancel(),
        }
    }

    /// Advances the settle animation by `dt` seconds. Returns `true` while
    /// an animation is still running and further frames are needed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if let Some(spring) = &mut self.settle {
            let value = spring.step(dt);
            self.scroll.set_position(value);
            if spring.is_done() {
                log::debug!("stack: settled at {value}");
                self.settle = None;
            }
        }
        self.settle.is_some()
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Visual properties for every card at the current location, in item
    /// order.
    pub fn frame(&self) -> Vec<CardVisuals> {
        self.layout
            .visuals(self.scroll.location(), self.items.len())
            .collect()
    }

    /// Rubber-band translate the host applies to the whole stack container
    /// this frame.
    pub fn stack_translate(&self) -> f32 {
        overscroll_translate(self.scroll.location())
    }

    fn settle_after_release(&mut self, velocity: f32) {
        let location = self.scroll.location();
        let max = self.max_overscroll();
        let target = if location < 0.0 {
            Some(0.0)
        } else if location > max {
            Some(max)
        } else {
            None
        };

        if let Some(target) = target {
            log::debug!("stack: release at {location}, settling to {target}");
            self.settle = Some(Spring::new(location, target).with_velocity(velocity));
        }
    }
}
