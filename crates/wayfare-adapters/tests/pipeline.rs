//! Sources feeding the validation service end to end.

use std::fs;

use tempfile::TempDir;
use wayfare_adapters::{DirectorySource, FormBodySource, InMemorySource, source_for_path};
use wayfare_core::prelude::*;

const BOOKING_FORM: &str = "id=b-1&touristId=t-1&pkgId=p-1&totalPrice=120.50\
&bookingStatus=PENDING&bookingDate=2025-07-01&createdAt=2025-06-01T10%3A00%3A00Z";

#[test]
fn form_encoded_booking_validates() {
    let source = FormBodySource::from_body("checkout", BOOKING_FORM);
    let report = ValidationService::default()
        .validate_source(EntityKind::Booking, &source, |_| {})
        .unwrap();

    assert!(report.is_clean());
    let Verdict::Accepted {
        entity: AnyEntity::Booking(booking),
    } = &report.outcomes()[0].verdict
    else {
        panic!("booking should be accepted");
    };
    assert_eq!(booking.total_price(), 120.5);
}

#[test]
fn directory_batch_reports_each_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.json"),
        r#"[{"username": "joanna", "password": "pw"}, {"username": "jo", "password": "pw"}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("b.toml"), "username = \"maria\"\npassword = \"\"\n").unwrap();
    fs::write(dir.path().join("c.json"), "{").unwrap();

    let report = ValidationService::default()
        .validate_source(EntityKind::Signin, &DirectorySource::new(dir.path()), |_| {})
        .unwrap();

    assert_eq!(report.total(), 4);
    assert_eq!(report.accepted(), 1);
    assert_eq!(report.rejected(), 2);
    assert_eq!(report.unreadable(), 1);
}

#[test]
fn strict_ticket_check_through_memory_source() {
    let source = InMemorySource::new();
    source
        .push(
            "ticket",
            serde_json::json!({
                "id": "st-1",
                "userId": "u-1",
                "subject": "Refund",
                "description": "Tour cancelled",
                "status": "OPEN",
                "createdAt": "2025-06-01",
                "updatedAt": "2025-06-02",
                "adminResponse": "Refund issued",
            }),
        )
        .unwrap();

    let report = ValidationService::new(ValidationOptions::strict())
        .validate_source(EntityKind::SupportTicket, &source, |_| {})
        .unwrap();
    assert_eq!(report.rejected(), 1);
}

#[test]
fn empty_directory_is_an_empty_source() {
    let dir = TempDir::new().unwrap();
    let source = source_for_path(dir.path(), false);
    let err = ValidationService::default()
        .validate_source(EntityKind::Review, source.as_ref(), |_| {})
        .unwrap_err();
    assert!(matches!(
        err,
        WayfareError::Application(ApplicationError::EmptySource { .. })
    ));
}

#[test]
fn toml_experience_with_local_datetime_validates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kayak.toml");
    fs::write(
        &path,
        r#"
id = "x-1"
guideId = "g-7"
title = "Sunrise kayak"
description = "Paddle out before breakfast"
experiencedAt = 2025-05-20T05:45:00
createdAt = 2025-05-21T18:00:00Z
"#,
    )
    .unwrap();

    let payloads = source_for_path(&path, false).load().unwrap();
    let experience = validate_experience(&payloads[0].body).unwrap();
    assert_eq!(
        experience.experienced_at().to_rfc3339(),
        "2025-05-20T05:45:00+00:00"
    );
}
