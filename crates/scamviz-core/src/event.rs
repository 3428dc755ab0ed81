// File: crates/scamviz-core/src/event.rs
// Summary: Typed selection events, shared selection state, and the bus.
//
// RULE: charts communicate only through these events. A renderer never
// reaches into another renderer's state.

/// Cross-chart selection events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A level-2 category became the active selection.
    Changed { category: String },
    /// The active selection was dismissed.
    Cleared,
}

/// Process-wide selection state: at most one selected level-2 key.
///
/// Selecting a new key implicitly replaces the previous one. Mutated only
/// through the bus; reset on dataset filter change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.as_deref() == Some(key)
    }

    pub fn apply(&mut self, event: &SelectionEvent) {
        match event {
            SelectionEvent::Changed { category } => self.selected = Some(category.clone()),
            SelectionEvent::Cleared => self.selected = None,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Receiver side of the bus. Charts update their visual state here and
/// nowhere else.
pub trait SelectionListener {
    fn on_selection(&mut self, event: &SelectionEvent);
}

/// Synchronous fan-out of selection events.
///
/// `publish` applies the event to the shared state, then delivers it to
/// every listener in registration (slice) order before returning, so the
/// whole broadcast completes inside the triggering input event.
#[derive(Debug, Default)]
pub struct SelectionBus {
    state: Selection,
}

impl SelectionBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.state
    }

    pub fn publish(&mut self, event: SelectionEvent, listeners: &mut [&mut dyn SelectionListener]) {
        match &event {
            SelectionEvent::Changed { category } => log::debug!("selection changed: {category}"),
            SelectionEvent::Cleared => log::debug!("selection cleared"),
        }
        self.state.apply(&event);
        for listener in listeners.iter_mut() {
            listener.on_selection(&event);
        }
    }

    /// Drop the active selection without notifying listeners. Used when the
    /// listeners are about to be rebuilt wholesale (dataset filter change).
    pub fn reset(&mut self) {
        self.state.clear();
    }
}
