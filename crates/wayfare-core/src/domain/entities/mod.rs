pub mod booking;
pub mod experience;
pub mod review;
pub mod signin;
pub mod support_ticket;

use serde::Serialize;
use serde_json::Value;

use crate::domain::error::ValidationError;
use crate::domain::schema::{EntitySchema, Record};
use crate::domain::value_objects::EntityKind;

pub use booking::Booking;
pub use experience::Experience;
pub use review::Review;
pub use signin::SigninCredentials;
pub use support_ticket::SupportTicket;

/// A value that only exists once its input has passed a schema check.
///
/// Implementors describe their fields once, in the schema returned for
/// [`Entity::KIND`], and build themselves from the resulting [`Record`].
pub trait Entity: Sized + Serialize {
    const KIND: EntityKind;

    fn schema() -> &'static EntitySchema {
        Self::KIND.schema()
    }

    /// Build the entity from values the schema has already checked.
    fn from_record(record: Record) -> Result<Self, ValidationError>;

    /// Check `input` and build the entity, or report every violation.
    fn validate(input: &Value) -> Result<Self, ValidationError> {
        Self::schema().check(input).and_then(Self::from_record)
    }
}

/// Any validated entity, for callers that pick the kind at runtime.
///
/// Serializes to the inner entity's own JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyEntity {
    Signin(SigninCredentials),
    Review(Review),
    Booking(Booking),
    Experience(Experience),
    SupportTicket(SupportTicket),
}

impl AnyEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Signin(_) => EntityKind::Signin,
            Self::Review(_) => EntityKind::Review,
            Self::Booking(_) => EntityKind::Booking,
            Self::Experience(_) => EntityKind::Experience,
            Self::SupportTicket(_) => EntityKind::SupportTicket,
        }
    }

    /// One-line description for listings. Never includes secrets.
    pub fn summary(&self) -> String {
        match self {
            Self::Signin(c) => format!("sign-in as '{}'", c.username()),
            Self::Review(r) => format!("review {} of guide {}: {}", r.id(), r.guide_id(), r.title()),
            Self::Booking(b) => format!(
                "booking {} [{}] {:.2} for package {}",
                b.id(),
                b.booking_status(),
                b.total_price(),
                b.pkg_id()
            ),
            Self::Experience(e) => format!("experience {} by guide {}: {}", e.id(), e.guide_id(), e.title()),
            Self::SupportTicket(t) => format!("ticket {} [{}] {}", t.id(), t.status(), t.subject()),
        }
    }
}

macro_rules! any_entity_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for AnyEntity {
                fn from(entity: $ty) -> Self {
                    Self::$variant(entity)
                }
            }
        )*
    };
}

any_entity_from! {
    Signin(SigninCredentials),
    Review(Review),
    Booking(Booking),
    Experience(Experience),
    SupportTicket(SupportTicket),
}
