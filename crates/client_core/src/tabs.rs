use shared::domain::WorkflowKind;

/// Selects which workflow view is visible. Holds no business data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabController {
    active: WorkflowKind,
}

impl Default for TabController {
    fn default() -> Self {
        Self {
            active: WorkflowKind::PlacementPredict,
        }
    }
}

impl TabController {
    pub fn active(&self) -> WorkflowKind {
        self.active
    }

    /// Returns whether the visible view changed.
    pub fn select(&mut self, kind: WorkflowKind) -> bool {
        let changed = self.active != kind;
        self.active = kind;
        changed
    }

    pub fn is_visible(&self, kind: WorkflowKind) -> bool {
        self.active == kind
    }
}
