//! Status lifecycle tables.
//!
//! # Design
//!
//! Which status may follow which is described once, in a static table per
//! status enum. Field validation never consults these tables: a booking that
//! arrives as `COMPLETED` is a valid booking whatever it was before. The
//! tables are for callers that move an entity from one status to another.
//!
//! # Adding a Status
//!
//! 1. Add the variant and its literal in `value_objects.rs`
//! 2. Add one [`TransitionDef`] row to the enum's table below
//! 3. The `every_status_has_a_row` test fails until step 2 is done

use crate::domain::error::DomainError;
use crate::domain::value_objects::{BookingStatus, TicketStatus};

/// Allowed successors of one status.
#[derive(Debug, Clone, Copy)]
pub struct TransitionDef<S: 'static> {
    pub from: S,
    /// Empty for terminal statuses.
    pub to: &'static [S],
}

pub static BOOKING_TRANSITIONS: &[TransitionDef<BookingStatus>] = &[
    TransitionDef {
        from: BookingStatus::Pending,
        to: &[BookingStatus::Confirmed, BookingStatus::Cancelled],
    },
    TransitionDef {
        from: BookingStatus::Confirmed,
        to: &[BookingStatus::Completed, BookingStatus::Cancelled],
    },
    TransitionDef {
        from: BookingStatus::Completed,
        to: &[],
    },
    TransitionDef {
        from: BookingStatus::Cancelled,
        to: &[],
    },
];

pub static TICKET_TRANSITIONS: &[TransitionDef<TicketStatus>] = &[
    TransitionDef {
        from: TicketStatus::Open,
        to: &[TicketStatus::Closed],
    },
    TransitionDef {
        from: TicketStatus::Closed,
        to: &[],
    },
];

/// Status enums with a transition table.
pub trait Lifecycle: Copy + PartialEq + std::fmt::Display + 'static {
    /// Entity name used in errors and CLI output.
    const ENTITY: &'static str;

    fn table() -> &'static [TransitionDef<Self>];

    fn allowed_transitions(self) -> &'static [Self] {
        Self::table()
            .iter()
            .find(|row| row.from == self)
            .map(|row| row.to)
            .unwrap_or(&[])
    }

    fn can_transition_to(self, next: Self) -> bool {
        self.allowed_transitions().contains(&next)
    }

    fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// `next` if the move is allowed, otherwise [`DomainError::IllegalTransition`].
    fn transition(self, next: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::IllegalTransition {
                entity: Self::ENTITY,
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl Lifecycle for BookingStatus {
    const ENTITY: &'static str = "booking";

    fn table() -> &'static [TransitionDef<Self>] {
        BOOKING_TRANSITIONS
    }
}

impl Lifecycle for TicketStatus {
    const ENTITY: &'static str = "ticket";

    fn table() -> &'static [TransitionDef<Self>] {
        TICKET_TRANSITIONS
    }
}
