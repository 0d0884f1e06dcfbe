//! Virtual joystick widget.
//!
//! Display-only mirror of the movement pad. The widget is a cluster of
//! graphics drawn around a root point in pad-local space:
//! - the base disc, which fades and scales in when a drag starts;
//! - the ring, drawn at the drag limit and hidden when the drag saturates;
//! - the inner handle needle, pointing along the drag;
//! - the outer handle needle, showing the camera/body yaw offset.
//!
//! Two cancellable animations drive it. The *act* slot moves the root and
//! fades the base on show/hide. The *open* slot switches between the open
//! look (full scale, full colours) and the closed look (shrunk, dimmed)
//! when the drag crosses the snap distance. Nothing here feeds back into
//! movement.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

use crate::angles::drag_angle;
use crate::components::tween::{Easing, Lerp, Tween, TweenSlot};
use crate::resources::rigconfig::RigConfig;

/// Transparent white, the fade-out target of base and ring.
pub const COLOR_HIDDEN: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 0,
};
/// Base scale when hidden.
pub const BASE_SCALE_HIDDEN: f32 = 0.2;
/// Root scale for the closed look.
pub const ROOT_SCALE_CLOSED: f32 = 0.6;
/// Ring and handles vanish this long before a hide finishes.
const HIDE_CUE_LEAD: f32 = 0.1;

/// Colours captured when the widget is built.
#[derive(Clone, Copy, Debug)]
pub struct WidgetPalette {
    pub base: Color,
    /// Base colour for the closed look, at 70% alpha.
    pub base_light: Color,
    pub ring: Color,
}

impl WidgetPalette {
    pub fn new(base: Color, ring: Color) -> Self {
        let base_light = Color::new(base.r, base.g, base.b, (base.a as f32 * 0.7).round() as u8);
        Self {
            base,
            base_light,
            ring,
        }
    }
}

impl Default for WidgetPalette {
    fn default() -> Self {
        Self::new(Color::new(255, 255, 255, 200), Color::new(140, 210, 255, 230))
    }
}

/// Animated values of the show/hide animation.
#[derive(Clone, Copy, Debug)]
pub struct ActPose {
    pub root: Vector2,
    pub base_color: Color,
    pub base_scale: f32,
}

impl Lerp for ActPose {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            root: <Vector2 as Lerp>::lerp(a.root, b.root, t),
            base_color: <Color as Lerp>::lerp(a.base_color, b.base_color, t),
            base_scale: <f32 as Lerp>::lerp(a.base_scale, b.base_scale, t),
        }
    }
}

/// Animated values of the open/close animation.
#[derive(Clone, Copy, Debug)]
pub struct OpenPose {
    pub root_scale: f32,
    pub base_color: Color,
    pub ring_color: Color,
}

impl Lerp for OpenPose {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            root_scale: <f32 as Lerp>::lerp(a.root_scale, b.root_scale, t),
            base_color: <Color as Lerp>::lerp(a.base_color, b.base_color, t),
            ring_color: <Color as Lerp>::lerp(a.ring_color, b.ring_color, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActKind {
    Show,
    Hide,
}

#[derive(Component, Clone, Debug)]
pub struct JoystickWidget {
    /// Displayed root position, pad-local.
    pub root: Vector2,
    /// Latest drag anchor. A running show animation homes in on it.
    pub anchor: Vector2,
    pub root_scale: f32,
    pub base_scale: f32,
    pub base_color: Color,
    pub ring_color: Color,
    pub ring_visible: bool,
    pub handles_visible: bool,
    /// Inner needle rotation in degrees, 0 = up.
    pub handle_angle: f32,
    /// Outer needle rotation in degrees.
    pub secondary_angle: f32,
    /// Closed look is active.
    pub closed: bool,
    /// Drag length at which the widget closes.
    pub snap_distance: f32,
    /// Ring radius in pixels.
    pub ring_radius: f32,
    pub duration: f32,
    pub easing: Easing,
    pub palette: WidgetPalette,
    act: TweenSlot<ActPose>,
    act_kind: Option<ActKind>,
    open: TweenSlot<OpenPose>,
}

impl JoystickWidget {
    /// Build a hidden widget.
    pub fn new(palette: WidgetPalette, config: &RigConfig) -> Self {
        let mut w = Self {
            root: Vector2::zero(),
            anchor: Vector2::zero(),
            root_scale: 1.0,
            base_scale: 1.0,
            base_color: palette.base,
            ring_color: palette.ring,
            ring_visible: true,
            handles_visible: true,
            handle_angle: 0.0,
            secondary_angle: 0.0,
            closed: false,
            snap_distance: config.snap_distance(),
            ring_radius: config.drag_max_distance,
            duration: config.widget_duration,
            easing: config.widget_easing,
            palette,
            act: TweenSlot::default(),
            act_kind: None,
            open: TweenSlot::default(),
        };
        w.hide(0.0, w.easing);
        w.step(0.0);
        w
    }

    pub fn from_config(config: &RigConfig) -> Self {
        Self::new(WidgetPalette::default(), config)
    }

    fn act_pose(&self) -> ActPose {
        ActPose {
            root: self.root,
            base_color: self.base_color,
            base_scale: self.base_scale,
        }
    }

    fn open_pose(&self) -> OpenPose {
        OpenPose {
            root_scale: self.root_scale,
            base_color: self.base_color,
            ring_color: self.ring_color,
        }
    }

    /// A drag started at `anchor` and is currently at `drag_point`.
    ///
    /// Snaps to the open look, then glides the root from where it is to the
    /// anchor while the base fades and scales in.
    pub fn show(&mut self, drag_point: Vector2, anchor: Vector2, duration: f32, easing: Easing) {
        self.ring_visible = true;
        self.handles_visible = true;
        self.open.cancel();
        self.closed = false;
        self.root_scale = 1.0;
        self.base_color = self.palette.base;
        self.ring_color = self.palette.ring;

        self.anchor = anchor;
        self.handle_angle = drag_angle(Vector2::new(drag_point.x - anchor.x, drag_point.y - anchor.y));

        let to = ActPose {
            root: anchor,
            base_color: self.palette.base,
            base_scale: 1.0,
        };
        self.act
            .start(Tween::new(self.act_pose(), to, duration).with_easing(easing));
        self.act_kind = Some(ActKind::Show);
    }

    /// The drag ended. Root returns to the origin and the base fades out; the
    /// ring and handles switch off shortly before the end.
    pub fn hide(&mut self, duration: f32, easing: Easing) {
        self.open.cancel();
        let to = ActPose {
            root: Vector2::zero(),
            base_color: COLOR_HIDDEN,
            base_scale: BASE_SCALE_HIDDEN,
        };
        self.act.start(
            Tween::new(self.act_pose(), to, duration)
                .with_easing(easing)
                .with_cue(duration - HIDE_CUE_LEAD),
        );
        self.act_kind = Some(ActKind::Hide);
    }

    /// Mirror the current drag. `drag` is measured from the anchor.
    pub fn update_drag(&mut self, drag: Vector2, anchor: Vector2) {
        self.anchor = anchor;
        if !self.act.is_playing() {
            self.root = anchor;
        }
        self.handle_angle = drag_angle(drag);
        if drag.length() < self.snap_distance {
            self.open_look();
        } else {
            self.close_look();
        }
    }

    pub fn set_secondary_indicator_angle(&mut self, angle: f32) {
        self.secondary_angle = angle;
    }

    fn open_look(&mut self) {
        if !self.closed {
            return;
        }
        self.closed = false;
        let to = OpenPose {
            root_scale: 1.0,
            base_color: self.palette.base,
            ring_color: self.palette.ring,
        };
        self.open
            .start(Tween::new(self.open_pose(), to, self.duration).with_easing(self.easing));
    }

    fn close_look(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let to = OpenPose {
            root_scale: ROOT_SCALE_CLOSED,
            base_color: self.palette.base_light,
            ring_color: COLOR_HIDDEN,
        };
        self.open
            .start(Tween::new(self.open_pose(), to, self.duration).with_easing(self.easing));
    }

    pub fn is_animating(&self) -> bool {
        self.act.is_playing() || self.open.is_playing()
    }

    /// Visible at all: a hidden widget has a transparent base.
    pub fn is_visible(&self) -> bool {
        self.base_color.a > 0 || self.ring_visible
    }

    /// Advance both animations by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if self.act_kind == Some(ActKind::Show) {
            let anchor = self.anchor;
            if let Some(tween) = self.act.tween_mut() {
                tween.to.root = anchor;
            }
        }
        if let Some(step) = self.act.step(dt) {
            self.root = step.value.root;
            self.base_color = step.value.base_color;
            self.base_scale = step.value.base_scale;
            if step.cue_fired {
                self.ring_visible = false;
                self.handles_visible = false;
            }
            if step.finished {
                self.act_kind = None;
            }
        }
        if let Some(step) = self.open.step(dt) {
            self.root_scale = step.value.root_scale;
            self.base_color = step.value.base_color;
            self.ring_color = step.value.ring_color;
        }
    }
}
