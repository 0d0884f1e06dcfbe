//! Gesture router.
//!
//! Consumes the queued [`PointerEvent`](crate::resources::input::PointerEvent)s
//! and turns them into [`DragEvent`]s for the pad observers.
//!
//! - A pointer-down on a pad claims it when no other pointer owns a pad.
//!   Presses outside the pads, or by a second pointer, are ignored here (the
//!   pinch providers still see them).
//! - The press becomes a drag once the pointer travels `drag_threshold`
//!   pixels. That move emits `BeginDrag` followed by `Drag`.
//! - While a pinch is active the drag does not begin.
//! - Pointer-up ends the gesture; `EndDrag` is emitted only if a drag began.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::events::drag::{DragEvent, DragPhase};
use crate::resources::dragregions::DragRegions;
use crate::resources::gesture::{GestureState, PointerGesture};
use crate::resources::input::{PointerInput, PointerPhase};
use crate::resources::rigconfig::RigConfig;

pub fn route_pointer_input(
    mut input: ResMut<PointerInput>,
    mut gesture: ResMut<GestureState>,
    regions: Res<DragRegions>,
    config: Res<RigConfig>,
    mut commands: Commands,
) {
    for event in input.take_events() {
        let pos = event.position;
        match event.phase {
            PointerPhase::Down => {
                if gesture.active.is_some() {
                    continue;
                }
                let Some(pad) = regions.hit(pos) else {
                    continue;
                };
                debug!("pointer {} claimed {:?} pad", event.id, pad);
                gesture.active = Some(PointerGesture::new(event.id, pad, pos));
                commands.trigger(DragEvent::new(pad, DragPhase::PointerDown, pos));
            }
            PointerPhase::Move => {
                let Some(mut g) = gesture.active.filter(|g| g.id == event.id) else {
                    continue;
                };
                if g.dragging {
                    let delta = Vector2::new(pos.x - g.current.x, pos.y - g.current.y);
                    g.current = pos;
                    commands.trigger(DragEvent::new(g.pad, DragPhase::Drag, pos).with_delta(delta));
                } else if g.travel(pos) >= config.drag_threshold && !gesture.is_pinching() {
                    debug!("{:?} pad drag started", g.pad);
                    g.dragging = true;
                    g.current = pos;
                    commands.trigger(DragEvent::new(g.pad, DragPhase::BeginDrag, pos));
                    commands.trigger(DragEvent::new(g.pad, DragPhase::Drag, pos));
                }
                gesture.active = Some(g);
            }
            PointerPhase::Up => {
                let Some(g) = gesture.active.filter(|g| g.id == event.id) else {
                    continue;
                };
                gesture.active = None;
                if g.dragging {
                    debug!("{:?} pad drag ended", g.pad);
                    commands.trigger(DragEvent::new(g.pad, DragPhase::EndDrag, pos));
                }
            }
        }
    }
}
