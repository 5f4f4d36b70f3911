//! Deterministic child traversal and point lookup.
//!
//! Input routing and hit-testing visit children front-to-back: floating
//! children (depth above zero) by descending depth, then embedded children
//! in reverse insertion order. Drawing uses the exact opposite order, so
//! the widget drawn on top is also the first one offered an event.

use trellis_core::WidgetId;
use trellis_render::Point;

use super::tree::WidgetTree;

impl WidgetTree {
    /// Visible children of `id` in event-routing order: floating children
    /// by descending depth, then embedded children in reverse insertion
    /// order. Equal floating depths keep their insertion order.
    pub fn children_reverse_depth_order(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut floating = Vec::new();
        let mut embedded = Vec::new();
        for &child in self.children(id) {
            let Some(w) = self.widget(child) else {
                continue;
            };
            if !w.visible() {
                continue;
            }
            if w.depth() > 0 {
                floating.push(child);
            } else {
                embedded.push(child);
            }
        }
        floating.sort_by_key(|&c| {
            std::cmp::Reverse(self.widget(c).map_or(0, |w| w.depth()))
        });
        floating.extend(embedded.into_iter().rev());
        floating
    }

    /// The deepest visible widget under `pos`, where `pos` is given in
    /// `id`'s parent frame.
    ///
    /// Children are tried in routing order, so overlapping siblings resolve
    /// to the one drawn on top. Falls back to `id` itself when no child
    /// contains the point, or `None` when `id` does not either.
    pub fn find_widget(&self, id: WidgetId, pos: Point) -> Option<WidgetId> {
        let w = self.widget(id)?;
        let local = pos - w.pos();
        for child in self.children_reverse_depth_order(id) {
            if self.widget(child).is_some_and(|cw| cw.contains(local)) {
                return self.find_widget(child, local);
            }
        }
        if w.contains(pos) { Some(id) } else { None }
    }
}
