//! Canonical widget fixtures.
//!
//! Each preset mirrors a component archetype the engine is expected to
//! audit: a fully styled action button, a ghost button that inherits its
//! background, a static text label, a deliberately faint label, and a
//! "frozen" button with no state feedback at all.

use vscope_scene::NodeId;
use vscope_style::color::Rgba;
use vscope_style::contrast::FontMetrics;
use vscope_style::snapshot::{Outline, Shadow, StyleSnapshot, Transform};

use crate::fixture::{FixtureNode, FixtureScene};

const INK: Rgba = Rgba::opaque(51, 51, 51);
const PAPER: Rgba = Rgba::opaque(255, 255, 255);
const PRIMARY: Rgba = Rgba::opaque(30, 58, 138);
const PRIMARY_HOVER: Rgba = Rgba::opaque(29, 78, 216);
const FOCUS_RING: Rgba = Rgba::opaque(0, 95, 204);

/// White card container; the usual root for the other presets.
pub fn card(scene: &mut FixtureScene) -> NodeId {
    let base = StyleSnapshot::new().with_color(INK).with_background(PAPER);
    scene.attach(FixtureNode::new("card", base), None)
}

/// Fully styled button: distinct hover, active, focus, and disabled
/// presentations; AAA-clearing label contrast.
pub fn action_button(scene: &mut FixtureScene, parent: Option<NodeId>) -> NodeId {
    let base = StyleSnapshot::new()
        .with_color(PAPER)
        .with_background(PRIMARY);
    let node = FixtureNode::new("Save", base)
        .interactive()
        .with_font(FontMetrics::new(12.0, true))
        .on_hover(
            base.with_background(PRIMARY_HOVER)
                .with_shadow(Shadow::new(0.0, 4.0, 12.0, 0.0, Rgba::new(0, 0, 0, 64)))
                .with_transform(Transform::translate(0.0, -1.0)),
        )
        .on_active(base.with_transform(Transform::scaled(0.97)))
        .on_focus(base.with_outline(Outline::new(2.0, FOCUS_RING)))
        .on_disabled(base.with_opacity(0.45));
    scene.attach(node, parent)
}

/// Borderless button with a transparent background: contrast resolves
/// through the parent; hover paints a background in.
pub fn ghost_button(scene: &mut FixtureScene, parent: Option<NodeId>) -> NodeId {
    let base = StyleSnapshot::new()
        .with_color(INK)
        .with_background(Rgba::TRANSPARENT);
    let node = FixtureNode::new("Cancel", base)
        .interactive()
        .on_hover(base.with_background(Rgba::opaque(240, 240, 240)))
        .on_focus(base.with_outline(Outline::new(2.0, FOCUS_RING)))
        .on_disabled(base.with_color(Rgba::opaque(160, 160, 160)));
    scene.attach(node, parent)
}

/// Non-interactive body text over a transparent background.
pub fn static_label(scene: &mut FixtureScene, parent: Option<NodeId>) -> NodeId {
    let base = StyleSnapshot::new()
        .with_color(INK)
        .with_background(Rgba::TRANSPARENT);
    let node = FixtureNode::new("body text", base).with_font(FontMetrics::new(12.0, false));
    scene.attach(node, parent)
}

/// Deliberately low-contrast caption (~2:1 on white).
pub fn faint_label(scene: &mut FixtureScene, parent: Option<NodeId>) -> NodeId {
    let base = StyleSnapshot::new()
        .with_color(Rgba::opaque(184, 184, 184))
        .with_background(Rgba::TRANSPARENT);
    let node = FixtureNode::new("caption", base).with_font(FontMetrics::new(10.0, false));
    scene.attach(node, parent)
}

/// Interactive node with no state styling whatsoever; every state
/// feedback audit against it must fail.
pub fn frozen_button(scene: &mut FixtureScene, parent: Option<NodeId>) -> NodeId {
    let base = StyleSnapshot::new()
        .with_color(PAPER)
        .with_background(PRIMARY);
    scene.attach(FixtureNode::new("Frozen", base).interactive(), parent)
}
