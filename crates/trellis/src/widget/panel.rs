//! Plain container widget.

use std::any::Any;

use super::base::WidgetBase;
use super::traits::Widget;

/// A widget with no behavior of its own: it groups children, and a layout
/// strategy attached to its base arranges them.
#[derive(Default)]
pub struct Panel {
    base: WidgetBase,
}

impl Panel {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
        }
    }

    /// Create an empty panel with a string id.
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut base = WidgetBase::new();
        base.set_id(id);
        Self { base }
    }
}

impl Widget for Panel {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "panel"
    }
}
