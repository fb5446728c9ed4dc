//! Scene-wide visual complexity and focus budgets.
//!
//! Complexity is a 0–100 score weighing element count, distinct paint
//! colors, distinct font treatments, and interactive-element density.
//! Scores above [`COMPLEXITY_WARN`] are worth flagging; scores above
//! [`COMPLEXITY_NOTE`] are acceptable but noted. The focus budget caps
//! how many interactive elements one scene can carry before keyboard
//! traversal becomes a chore.

use std::collections::HashSet;

use vscope_scene::Scene;

/// Score above which complexity is flagged.
pub const COMPLEXITY_WARN: f64 = 60.0;
/// Score above which complexity is noted as merely acceptable.
pub const COMPLEXITY_NOTE: f64 = 30.0;
/// Maximum interactive elements before focus traversal is flagged.
pub const FOCUS_BUDGET: usize = 15;

/// Measured complexity of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityReport {
    pub element_count: usize,
    /// Distinct text + background paints across the scene.
    pub distinct_colors: usize,
    /// Distinct (size, weight) font treatments.
    pub distinct_fonts: usize,
    pub interactive_count: usize,
    /// Weighted score in [0, 100].
    pub score: f64,
}

/// Walk the scene and measure its complexity.
#[must_use]
pub fn measure(scene: &dyn Scene) -> ComplexityReport {
    let mut colors: HashSet<u32> = HashSet::new();
    let mut fonts: HashSet<(u64, bool)> = HashSet::new();
    let mut element_count = 0usize;
    let mut interactive_count = 0usize;

    for node in scene.nodes() {
        element_count += 1;
        if let Some(snapshot) = scene.snapshot(node) {
            colors.insert(snapshot.color.as_key());
            colors.insert(snapshot.background_color.as_key());
        }
        if let Some(font) = scene.font(node) {
            fonts.insert((font.size_pt.to_bits(), font.bold));
        }
        if scene.is_interactive(node) {
            interactive_count += 1;
        }
    }

    let score = weighted_score(
        element_count,
        colors.len(),
        fonts.len(),
        interactive_count,
    );
    ComplexityReport {
        element_count,
        distinct_colors: colors.len(),
        distinct_fonts: fonts.len(),
        interactive_count,
        score,
    }
}

/// Component weights: elements up to 30, colors up to 30, fonts up to 20,
/// interactive density up to 20.
fn weighted_score(elements: usize, colors: usize, fonts: usize, interactive: usize) -> f64 {
    let part = |count: usize, per: f64, cap: f64| (count as f64 / per * cap).min(cap);
    let element_score = part(elements, 50.0, 30.0);
    let color_score = part(colors, 10.0, 30.0);
    let font_score = part(fonts, 5.0, 20.0);
    let interactive_score = part(interactive, 5.0, 20.0);
    element_score + color_score + font_score + interactive_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use vscope_scene::{NodeId, Stimulus};
    use vscope_style::color::Rgba;
    use vscope_style::contrast::FontMetrics;
    use vscope_style::snapshot::StyleSnapshot;

    #[derive(Default)]
    struct FlatScene {
        snapshots: HashMap<NodeId, StyleSnapshot>,
        fonts: HashMap<NodeId, FontMetrics>,
        interactive: HashSet<NodeId>,
    }

    impl FlatScene {
        fn push(&mut self, id: NodeId, fg: Rgba, bg: Rgba, interactive: bool) {
            self.snapshots
                .insert(id, StyleSnapshot::new().with_color(fg).with_background(bg));
            if interactive {
                self.interactive.insert(id);
            }
        }
    }

    impl Scene for FlatScene {
        fn contains(&self, node: NodeId) -> bool {
            self.snapshots.contains_key(&node)
        }
        fn parent(&self, _node: NodeId) -> Option<NodeId> {
            None
        }
        fn snapshot(&self, node: NodeId) -> Option<StyleSnapshot> {
            self.snapshots.get(&node).copied()
        }
        fn font(&self, node: NodeId) -> Option<FontMetrics> {
            self.fonts.get(&node).copied()
        }
        fn label(&self, _node: NodeId) -> Option<String> {
            None
        }
        fn is_interactive(&self, node: NodeId) -> bool {
            self.interactive.contains(&node)
        }
        fn nodes(&self) -> Vec<NodeId> {
            let mut ids: Vec<NodeId> = self.snapshots.keys().copied().collect();
            ids.sort_unstable();
            ids
        }
        fn dispatch(&mut self, node: NodeId, _stimulus: Stimulus) -> bool {
            self.contains(node)
        }
        fn scroll_into_view(&mut self, _node: NodeId) {}
    }

    #[test]
    fn empty_scene_scores_zero() {
        let scene = FlatScene::default();
        let report = measure(&scene);
        assert_eq!(report.element_count, 0);
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn counts_distinct_paints_not_occurrences() {
        let mut scene = FlatScene::default();
        let fg = Rgba::opaque(51, 51, 51);
        let bg = Rgba::opaque(255, 255, 255);
        for id in 0..4 {
            scene.push(id, fg, bg, false);
        }
        let report = measure(&scene);
        assert_eq!(report.element_count, 4);
        assert_eq!(report.distinct_colors, 2);
    }

    #[test]
    fn component_caps_hold() {
        // 1000 elements with wild colors cannot exceed 30 + 30 + 20 + 20.
        let mut scene = FlatScene::default();
        for id in 0..1000u64 {
            let channel = (id % 256) as u8;
            scene.push(
                id,
                Rgba::opaque(channel, 0, 0),
                Rgba::opaque(0, channel, 0),
                id % 2 == 0,
            );
        }
        let report = measure(&scene);
        assert!(report.score <= 100.0);
        assert!(report.score > COMPLEXITY_WARN);
    }

    #[test]
    fn small_scene_stays_under_note_threshold() {
        let mut scene = FlatScene::default();
        scene.push(0, Rgba::opaque(51, 51, 51), Rgba::opaque(255, 255, 255), false);
        scene.push(1, Rgba::opaque(255, 255, 255), Rgba::opaque(30, 58, 138), true);
        let report = measure(&scene);
        assert!(report.score < COMPLEXITY_NOTE, "score {}", report.score);
        assert_eq!(report.interactive_count, 1);
    }

    #[test]
    fn distinct_fonts_counted_by_size_and_weight() {
        let mut scene = FlatScene::default();
        for id in 0..3 {
            scene.push(id, Rgba::opaque(0, 0, 0), Rgba::TRANSPARENT, false);
        }
        scene.fonts.insert(0, FontMetrics::new(12.0, false));
        scene.fonts.insert(1, FontMetrics::new(12.0, false));
        scene.fonts.insert(2, FontMetrics::new(12.0, true));
        assert_eq!(measure(&scene).distinct_fonts, 2);
    }
}
