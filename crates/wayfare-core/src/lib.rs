//! Wayfare Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Wayfare
//! entity validation layer, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           wayfare-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ValidationService, SchemaCatalog)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (PayloadSource)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    wayfare-adapters (Infrastructure)    │
//! │  (JsonFileSource, DirectorySource, ..)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Schemas, Entities, Lifecycle tables)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use wayfare_core::domain::{BookingStatus, validate_booking};
//!
//! let booking = validate_booking(&json!({
//!     "id": "b-1",
//!     "touristId": "t-1",
//!     "pkgId": "p-1",
//!     "totalPrice": 99.5,
//!     "bookingStatus": "PENDING",
//!     "bookingDate": "2025-07-01",
//!     "createdAt": "2025-06-01T10:00:00Z",
//! }))
//! .unwrap();
//! assert_eq!(booking.booking_status(), BookingStatus::Pending);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, Payload, PayloadSource, SchemaCatalog, ValidationReport,
        ValidationService, Verdict,
    };
    pub use crate::domain::{
        AnyEntity, Booking, BookingStatus, DomainError, Entity, EntityKind, Experience,
        Lifecycle, Review, SigninCredentials, SupportTicket, TicketStatus, ValidationError,
        ValidationOptions, validate, validate_any, validate_booking, validate_experience,
        validate_review, validate_signin, validate_support_ticket,
    };
    pub use crate::error::{CoreResult, WayfareError};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
