//! Order details drawer: visibility state machine and fulfillment dropdown.
//!
//! ```text
//! closed --open--> opening --ack(g)--> open --close--> closing --ack(g)--> closed
//! ```
//!
//! Every open or close starts a new generation. A transition only completes
//! when the acknowledgment carries the current generation, so a late
//! acknowledgment from an earlier cycle cannot release the scroll lock.

use std::fmt;

use serde::Serialize;

/// Visibility phase of the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl ModalPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closing => "closing",
        }
    }
}

impl fmt::Display for ModalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open/close lifecycle of the drawer.
#[derive(Debug, Clone, Default)]
pub struct ModalVisibility {
    phase: ModalPhase,
    generation: u64,
}

impl ModalVisibility {
    #[must_use]
    pub const fn phase(&self) -> ModalPhase {
        self.phase
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Page scroll is locked from the start of opening until fully closed.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        !matches!(self.phase, ModalPhase::Closed)
    }

    /// The visible flag: set while opening or open, cleared once closing starts.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    /// Whether the drawer is in the page at all.
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        self.scroll_locked()
    }

    /// Begin opening. Returns the generation of a newly started transition,
    /// or `None` if the drawer is already opening or open.
    pub const fn open(&mut self) -> Option<u64> {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => {
                self.generation += 1;
                self.phase = ModalPhase::Opening;
                Some(self.generation)
            }
            ModalPhase::Opening | ModalPhase::Open => None,
        }
    }

    /// Begin closing. Returns the generation of a newly started transition,
    /// or `None` if the drawer is already closing or closed.
    pub const fn close(&mut self) -> Option<u64> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => {
                self.generation += 1;
                self.phase = ModalPhase::Closing;
                Some(self.generation)
            }
            ModalPhase::Closed | ModalPhase::Closing => None,
        }
    }

    /// Transition-end acknowledgment from the page (or the fallback timer).
    ///
    /// Returns `true` if it completed the running transition.
    pub const fn acknowledge(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Open;
                true
            }
            ModalPhase::Closing => {
                self.phase = ModalPhase::Closed;
                true
            }
            ModalPhase::Closed | ModalPhase::Open => false,
        }
    }
}

/// Fulfillment methods offered in the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum FulfillmentMethod {
    #[default]
    Standard,
    Express,
    SameDay,
}

impl FulfillmentMethod {
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::SameDay];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Express => "Express",
            Self::SameDay => "Same-day",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.label() == label)
    }
}

/// The "Fulfill with:" dropdown.
#[derive(Debug, Clone, Default)]
pub struct FulfillmentDropdown {
    open: bool,
    choice: FulfillmentMethod,
}

impl FulfillmentDropdown {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn choice(&self) -> FulfillmentMethod {
        self.choice
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Pick a method; picking always closes the list.
    pub const fn choose(&mut self, method: FulfillmentMethod) {
        self.choice = method;
        self.open = false;
    }

    /// Any pointer-down outside the dropdown dismisses it.
    pub const fn pointer_down(&mut self, inside: bool) {
        if !inside {
            self.open = false;
        }
    }

    pub const fn dismiss(&mut self) {
        self.open = false;
    }
}
