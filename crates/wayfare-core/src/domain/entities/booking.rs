use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    entities::Entity,
    error::{DomainError, ValidationError},
    schema::{EntitySchema, FieldDef, FieldKind, Record, Rule},
    value_objects::{BookingStatus, EntityId, EntityKind},
};

pub const NEGATIVE_TOTAL_PRICE: &str = "Total price must not be negative";

pub static BOOKING_SCHEMA: EntitySchema = EntitySchema {
    entity: EntityKind::Booking,
    fields: &[
        FieldDef::required("id", FieldKind::Text),
        FieldDef::required("touristId", FieldKind::Text),
        FieldDef::required("pkgId", FieldKind::Text),
        FieldDef::required("totalPrice", FieldKind::Number).with_rules(&[Rule::NonNegative {
            message: NEGATIVE_TOTAL_PRICE,
        }]),
        FieldDef::required("bookingStatus", FieldKind::Choice(BookingStatus::LITERALS)),
        FieldDef::required("bookingDate", FieldKind::Timestamp),
        FieldDef::required("createdAt", FieldKind::Timestamp),
    ],
};

/// A tourist's booking of a tour package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    id: EntityId,
    tourist_id: EntityId,
    pkg_id: EntityId,
    total_price: f64,
    booking_status: BookingStatus,
    booking_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl Booking {
    pub fn id(&self) -> &EntityId {
        &self.id
    }
    pub fn tourist_id(&self) -> &EntityId {
        &self.tourist_id
    }
    pub fn pkg_id(&self) -> &EntityId {
        &self.pkg_id
    }
    pub fn total_price(&self) -> f64 {
        self.total_price
    }
    pub fn booking_status(&self) -> BookingStatus {
        self.booking_status
    }
    pub fn booking_date(&self) -> DateTime<Utc> {
        self.booking_date
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Booking {
    const KIND: EntityKind = EntityKind::Booking;

    fn from_record(mut record: Record) -> Result<Self, ValidationError> {
        let status = record.choice("bookingStatus")?;
        Ok(Self {
            id: record.text("id")?.into(),
            tourist_id: record.text("touristId")?.into(),
            pkg_id: record.text("pkgId")?.into(),
            total_price: record.number("totalPrice")?,
            booking_status: status
                .parse()
                .map_err(|e: DomainError| ValidationError::single("bookingStatus", e.to_string()))?,
            booking_date: record.timestamp("bookingDate")?,
            created_at: record.timestamp("createdAt")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn booking(status: &str) -> Value {
        json!({
            "id": "b-1",
            "touristId": "t-3",
            "pkgId": "pkg-lisbon-3d",
            "totalPrice": 420.0,
            "bookingStatus": status,
            "bookingDate": "2025-07-14",
            "createdAt": "2025-06-01T09:30:00Z",
        })
    }

    #[rstest]
    #[case("PENDING", BookingStatus::Pending)]
    #[case("CONFIRMED", BookingStatus::Confirmed)]
    #[case("COMPLETED", BookingStatus::Completed)]
    #[case("CANCELLED", BookingStatus::Cancelled)]
    fn every_listed_status_is_accepted(#[case] raw: &str, #[case] expected: BookingStatus) {
        let booking = Booking::validate(&booking(raw)).unwrap();
        assert_eq!(booking.booking_status(), expected);
    }

    #[rstest]
    #[case("SHIPPED")]
    #[case("confirmed")]
    #[case("REFUNDED")]
    fn statuses_outside_the_set_are_rejected(#[case] raw: &str) {
        let err = Booking::validate(&booking(raw)).unwrap_err();
        assert_eq!(
            err.messages_for("bookingStatus"),
            [format!(
                "Invalid enum value. Expected 'PENDING' | 'CONFIRMED' | 'COMPLETED' | 'CANCELLED', received '{raw}'"
            )]
        );
        assert_eq!(err.fields().count(), 1);
    }

    #[test]
    fn negative_total_is_rejected() {
        let mut input = booking("PENDING");
        input["totalPrice"] = json!(-5);
        let err = Booking::validate(&input).unwrap_err();
        assert_eq!(err.messages_for("totalPrice"), [NEGATIVE_TOTAL_PRICE]);
    }

    #[test]
    fn zero_total_is_allowed() {
        let mut input = booking("PENDING");
        input["totalPrice"] = json!(0);
        assert_eq!(Booking::validate(&input).unwrap().total_price(), 0.0);
    }

    #[test]
    fn total_from_form_text_is_coerced() {
        let mut input = booking("CONFIRMED");
        input["totalPrice"] = json!("120.50");
        assert_eq!(Booking::validate(&input).unwrap().total_price(), 120.5);
    }

    #[test]
    fn date_only_booking_date_is_midnight_utc() {
        let booking = Booking::validate(&booking("PENDING")).unwrap();
        assert_eq!(booking.booking_date().to_rfc3339(), "2025-07-14T00:00:00+00:00");
    }

    #[test]
    fn validation_is_idempotent() {
        let good = booking("PENDING");
        let bad = booking("SHIPPED");
        assert_eq!(Booking::validate(&good), Booking::validate(&good));
        assert_eq!(Booking::validate(&bad), Booking::validate(&bad));
    }
}
