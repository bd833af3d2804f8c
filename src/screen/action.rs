/// The operations a row offers, in the order a widget presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    Delete,
    ToggleFavorite,
    ToggleMute,
}

/// Rendering hint for an action button; `Destructive` marks an irreversible
/// action. The hint has no effect on dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Destructive,
    Normal,
}

/// Background tint hint for an action button. The host maps these to its own
/// palette; the destructive action carries no accent because its style
/// already implies the host's destructive color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Orange,
}

/// One swipe action as the widget should present it right now: what it does,
/// what its button says, and how to paint it.
///
/// Labels are derived from the record's current flags, so a descriptor is
/// only valid until the next mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub kind: RowActionKind,
    pub label: &'static str,
    pub style: ActionStyle,
    pub accent: Option<Accent>,
}

/// Instruction handed back to the hosting widget after an action is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowUpdate {
    /// Remove the visual row at `index`; the record is already gone from the
    /// roster.
    Remove { index: usize },
    /// Re-render the visual row at `index`; its flags, and therefore its
    /// action labels, changed.
    Refresh { index: usize },
}
