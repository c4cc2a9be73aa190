//! Pointer-Event-Vokabular des Replays.
//!
//! Die Sequenzen bilden die native Browser-Ordnung ab: Leave-Familie auf
//! dem alten Ziel vor Enter-Familie auf dem neuen, Move-Familie danach.
//! Hover-abhängige UI (kaskadierende Menüs) verlässt sich auf exakt diese
//! Reihenfolge.

/// Einzelner Pointer-Event-Typ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    PointerOut,
    PointerLeave,
    MouseOut,
    MouseLeave,
    PointerOver,
    PointerEnter,
    MouseOver,
    MouseEnter,
    PointerMove,
    MouseMove,
}

/// Leave-Familie in Dispatch-Reihenfolge (auf dem alten Ziel).
pub const LEAVE_SEQUENCE: [PointerEventKind; 4] = [
    PointerEventKind::PointerOut,
    PointerEventKind::PointerLeave,
    PointerEventKind::MouseOut,
    PointerEventKind::MouseLeave,
];

/// Enter-Familie in Dispatch-Reihenfolge (auf dem neuen Ziel).
pub const ENTER_SEQUENCE: [PointerEventKind; 4] = [
    PointerEventKind::PointerOver,
    PointerEventKind::PointerEnter,
    PointerEventKind::MouseOver,
    PointerEventKind::MouseEnter,
];

/// Move-Familie, unabhängig vom Zielwechsel bei jedem Sample.
pub const MOVE_SEQUENCE: [PointerEventKind; 2] =
    [PointerEventKind::PointerMove, PointerEventKind::MouseMove];

impl PointerEventKind {
    /// Ob der Event-Typ im Host-UI-Baum bubbelt. Enter/Leave sind
    /// non-bubbling, alle anderen bubbeln.
    pub fn bubbles(self) -> bool {
        !matches!(
            self,
            PointerEventKind::PointerEnter
                | PointerEventKind::PointerLeave
                | PointerEventKind::MouseEnter
                | PointerEventKind::MouseLeave
        )
    }

    /// DOM-Event-Name für Host-Adapter.
    pub fn dom_name(self) -> &'static str {
        match self {
            PointerEventKind::PointerOut => "pointerout",
            PointerEventKind::PointerLeave => "pointerleave",
            PointerEventKind::MouseOut => "mouseout",
            PointerEventKind::MouseLeave => "mouseleave",
            PointerEventKind::PointerOver => "pointerover",
            PointerEventKind::PointerEnter => "pointerenter",
            PointerEventKind::MouseOver => "mouseover",
            PointerEventKind::MouseEnter => "mouseenter",
            PointerEventKind::PointerMove => "pointermove",
            PointerEventKind::MouseMove => "mousemove",
        }
    }
}
