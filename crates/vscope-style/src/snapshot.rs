//! Resolved-style snapshots and snapshot diffing.
//!
//! A [`StyleSnapshot`] captures the fixed set of observable properties the
//! interaction differ monitors: transform, box-shadow, background-color,
//! color, border, outline, and opacity. Diffing two snapshots yields a
//! [`ChangeMask`] naming which properties visibly differ.
//!
//! # Tolerances
//!
//! Colors and border/outline widths compare exactly (per channel / per
//! unit). Transform and shadow geometry compare against
//! [`MOTION_EPSILON`] so sub-microscopic deltas do not count as visible
//! motion; opacity compares against [`OPACITY_EPSILON`].

use tracing::{instrument, trace};

use crate::color::Rgba;

/// Geometry deltas below this magnitude are not a visible change.
pub const MOTION_EPSILON: f64 = 1e-3;
/// Opacity deltas below this are not a visible change.
pub const OPACITY_EPSILON: f64 = 0.01;

/// Monitored-property flags (one bit per property).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ChangeMask(pub u16);

impl ChangeMask {
    /// No properties differ.
    pub const NONE: Self = Self(0);
    pub const TRANSFORM: Self = Self(1 << 0);
    pub const BOX_SHADOW: Self = Self(1 << 1);
    pub const BACKGROUND: Self = Self(1 << 2);
    pub const COLOR: Self = Self(1 << 3);
    pub const BORDER: Self = Self(1 << 4);
    pub const OUTLINE: Self = Self(1 << 5);
    pub const OPACITY: Self = Self(1 << 6);

    /// Check if this mask contains another mask entirely.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if this mask shares any bit with another mask.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Insert flags into this mask.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Check if no property differs.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two masks.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Names of the set properties, in declaration order.
    #[must_use]
    pub fn property_names(self) -> Vec<&'static str> {
        const TABLE: [(ChangeMask, &str); 7] = [
            (ChangeMask::TRANSFORM, "transform"),
            (ChangeMask::BOX_SHADOW, "box-shadow"),
            (ChangeMask::BACKGROUND, "background-color"),
            (ChangeMask::COLOR, "color"),
            (ChangeMask::BORDER, "border"),
            (ChangeMask::OUTLINE, "outline"),
            (ChangeMask::OPACITY, "opacity"),
        ];
        TABLE
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl core::ops::BitOr for ChangeMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for ChangeMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// 2D transform: translation plus uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    #[must_use]
    pub const fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            scale: 1.0,
        }
    }

    #[must_use]
    pub const fn scaled(scale: f64) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale,
        }
    }

    /// Largest per-component magnitude difference to another transform.
    #[must_use]
    pub fn delta(self, other: Self) -> f64 {
        let dx = (self.translate_x - other.translate_x).abs();
        let dy = (self.translate_y - other.translate_y).abs();
        let ds = (self.scale - other.scale).abs();
        dx.max(dy).max(ds)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Box shadow geometry and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Rgba,
}

impl Shadow {
    #[must_use]
    pub const fn new(offset_x: f64, offset_y: f64, blur: f64, spread: f64, color: Rgba) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    /// Largest geometry magnitude difference to another shadow.
    #[must_use]
    pub fn delta(self, other: Self) -> f64 {
        let dx = (self.offset_x - other.offset_x).abs();
        let dy = (self.offset_y - other.offset_y).abs();
        let db = (self.blur - other.blur).abs();
        let dsp = (self.spread - other.spread).abs();
        dx.max(dy).max(db).max(dsp)
    }
}

/// Border width and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f64,
    pub color: Rgba,
}

impl Border {
    /// No border.
    pub const NONE: Self = Self {
        width: 0.0,
        color: Rgba::TRANSPARENT,
    };

    #[must_use]
    pub const fn new(width: f64, color: Rgba) -> Self {
        Self { width, color }
    }
}

/// Focus outline width and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub width: f64,
    pub color: Rgba,
}

impl Outline {
    /// No outline.
    pub const NONE: Self = Self {
        width: 0.0,
        color: Rgba::TRANSPARENT,
    };

    #[must_use]
    pub const fn new(width: f64, color: Rgba) -> Self {
        Self { width, color }
    }
}

/// Snapshot of the monitored style properties of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSnapshot {
    pub transform: Transform,
    pub box_shadow: Option<Shadow>,
    pub background_color: Rgba,
    pub color: Rgba,
    pub border: Border,
    pub outline: Outline,
    pub opacity: f64,
}

impl StyleSnapshot {
    /// Snapshot of an unstyled node: black text, no paint, no decoration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transform: Transform::IDENTITY,
            box_shadow: None,
            background_color: Rgba::TRANSPARENT,
            color: Rgba::opaque(0, 0, 0),
            border: Border::NONE,
            outline: Outline::NONE,
            opacity: 1.0,
        }
    }

    /// Builder: set text color.
    #[must_use]
    pub const fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Builder: set background color.
    #[must_use]
    pub const fn with_background(mut self, color: Rgba) -> Self {
        self.background_color = color;
        self
    }

    /// Builder: set transform.
    #[must_use]
    pub const fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder: set box shadow.
    #[must_use]
    pub const fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.box_shadow = Some(shadow);
        self
    }

    /// Builder: set border.
    #[must_use]
    pub const fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Builder: set outline.
    #[must_use]
    pub const fn with_outline(mut self, outline: Outline) -> Self {
        self.outline = outline;
        self
    }

    /// Builder: set opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Which monitored properties visibly differ from `base`.
    #[instrument(skip(self, base), level = "trace")]
    #[must_use]
    pub fn diff(&self, base: &StyleSnapshot) -> ChangeMask {
        let mut mask = ChangeMask::NONE;
        if self.transform.delta(base.transform) > MOTION_EPSILON {
            mask.insert(ChangeMask::TRANSFORM);
        }
        if shadow_differs(self.box_shadow, base.box_shadow) {
            mask.insert(ChangeMask::BOX_SHADOW);
        }
        if self.background_color != base.background_color {
            mask.insert(ChangeMask::BACKGROUND);
        }
        if self.color != base.color {
            mask.insert(ChangeMask::COLOR);
        }
        if self.border != base.border {
            mask.insert(ChangeMask::BORDER);
        }
        if self.outline != base.outline {
            mask.insert(ChangeMask::OUTLINE);
        }
        if (self.opacity - base.opacity).abs() > OPACITY_EPSILON {
            mask.insert(ChangeMask::OPACITY);
        }
        trace!(?mask, "snapshot diff");
        mask
    }
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

fn shadow_differs(a: Option<Shadow>, b: Option<Shadow>) -> bool {
    match (a, b) {
        (None, None) => false,
        (Some(_), None) | (None, Some(_)) => true,
        (Some(a), Some(b)) => a.delta(b) > MOTION_EPSILON || a.color != b.color,
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_rgba() -> impl Strategy<Value = Rgba> {
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
    }

    fn arb_snapshot() -> impl Strategy<Value = StyleSnapshot> {
        (
            (-10.0f64..10.0, -10.0f64..10.0, 0.5f64..1.5),
            proptest::option::of((0.0f64..8.0, 0.0f64..8.0, arb_rgba())),
            arb_rgba(),
            arb_rgba(),
            0.0f64..=1.0,
        )
            .prop_map(|((tx, ty, scale), shadow, bg, fg, opacity)| {
                let mut snap = StyleSnapshot::new()
                    .with_transform(Transform {
                        translate_x: tx,
                        translate_y: ty,
                        scale,
                    })
                    .with_background(bg)
                    .with_color(fg)
                    .with_opacity(opacity);
                if let Some((dy, blur, color)) = shadow {
                    snap = snap.with_shadow(Shadow::new(0.0, dy, blur, 0.0, color));
                }
                snap
            })
    }

    proptest! {
        #[test]
        fn diff_with_self_is_empty(snap in arb_snapshot()) {
            prop_assert_eq!(snap.diff(&snap), ChangeMask::NONE);
        }

        #[test]
        fn diff_is_symmetric(a in arb_snapshot(), b in arb_snapshot()) {
            prop_assert_eq!(a.diff(&b), b.diff(&a));
        }

        #[test]
        fn diff_is_deterministic(a in arb_snapshot(), b in arb_snapshot()) {
            prop_assert_eq!(a.diff(&b), a.diff(&b));
        }
    }
}
