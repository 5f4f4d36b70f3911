//! Single-focus management.
//!
//! At most one widget holds keyboard focus per tree. Focus moves through
//! [`WidgetTree::request_focus`], which validates attachment and then
//! performs the transition: the old holder is notified before the new one,
//! so no moment exists where two widgets both believe they are focused.

use tracing::{debug, error};
use trellis_core::WidgetId;
use trellis_core::logging::targets;

use crate::error::{TreeError, TreeResult};

use super::tree::WidgetTree;

impl WidgetTree {
    /// The widget currently holding keyboard focus, if any.
    #[inline]
    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Move keyboard focus to `id`.
    ///
    /// The node must be attached under the tree root; requests from
    /// detached subtrees fail without changing the current focus.
    pub fn request_focus(&mut self, id: WidgetId) -> TreeResult<()> {
        if self.arena.root_of(id)? != self.root {
            error!(target: targets::FOCUS, id = ?id, "focus requested by detached widget");
            return Err(TreeError::NodeDetached(id));
        }
        self.update_focus(id);
        Ok(())
    }

    /// Perform the focus transition without attachment checks.
    ///
    /// Re-focusing the current holder is a no-op; otherwise the old holder
    /// receives `focus_event(false)` first, then the new one receives
    /// `focus_event(true)`. Prefer [`request_focus`](Self::request_focus)
    /// unless the id is already known to be attached.
    pub fn update_focus(&mut self, id: WidgetId) {
        if self.focused == Some(id) {
            return;
        }
        if let Some(old) = self.focused.take() {
            if let Some(w) = self.widget_mut(old) {
                w.focus_event(false);
            }
        }
        if let Some(w) = self.widget_mut(id) {
            w.focus_event(true);
            self.focused = Some(id);
            debug!(target: targets::FOCUS, id = ?id, "focus moved");
        }
    }

    /// Drop keyboard focus entirely. The old holder receives
    /// `focus_event(false)`.
    pub fn clear_focus(&mut self) {
        if let Some(old) = self.focused.take() {
            if let Some(w) = self.widget_mut(old) {
                w.focus_event(false);
            }
            debug!(target: targets::FOCUS, id = ?old, "focus cleared");
        }
    }
}
