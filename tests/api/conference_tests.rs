//! Conference API Tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use conference_booking::config::Settings;

use crate::common::{conference_body, date, json_body, text_body, TestApp, TestUser, BOB, JOHN_DOE};

#[tokio::test]
async fn test_organize_requires_authentication() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/conference",
            None,
            Some(conference_body("My first conference", 100, 4, 2)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await,
        json!({ "code": 10003, "message": "Missing authorization header" })
    );
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let app = TestApp::new().await;
    let impostor = TestUser {
        password: "not-the-password",
        ..JOHN_DOE
    };

    let response = app
        .request(
            Method::POST,
            "/conference",
            Some(impostor),
            Some(conference_body("My first conference", 100, 4, 2)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["message"], "Wrong credentials");
}

#[tokio::test]
async fn test_organize_conference() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/conference",
            Some(JOHN_DOE),
            Some(conference_body("My first conference", 100, 4, 2)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_organize_conference_too_close() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/conference",
            Some(JOHN_DOE),
            Some(conference_body("My first conference", 100, 2, 2)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["message"],
        "The conference must happen in at least 3 days"
    );
}

#[tokio::test]
async fn test_organize_conference_with_empty_title() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/conference",
            Some(JOHN_DOE),
            Some(conference_body("", 100, 4, 2)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({
            "code": 10007,
            "message": "title: Title must be 1-200 characters",
            "errors": [{ "field": "title", "message": "Title must be 1-200 characters" }],
        })
    );
}

#[tokio::test]
async fn test_organize_conference_without_seats() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/conference",
            Some(JOHN_DOE),
            Some(json!({
                "title": "My first conference",
                "startDate": date(4, 0),
                "endDate": date(4, 2),
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], 10002);
    assert!(body["message"].as_str().unwrap().contains("seats"));
}

#[tokio::test]
async fn test_change_dates_with_unparsable_date() {
    let app = TestApp::new().await;
    let id = app.organize(JOHN_DOE, 100).await;

    let response = app
        .request(
            Method::PATCH,
            &format!("/conference/dates/{}", id),
            Some(JOHN_DOE),
            Some(json!({ "startDate": "tomorrow", "endDate": date(10, 2) })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], 10002);
    assert!(body["message"].as_str().unwrap().contains("startDate"));
}

#[tokio::test]
async fn test_change_seats() {
    let app = TestApp::new().await;
    let id = app.organize(JOHN_DOE, 100).await;

    let response = app
        .request(
            Method::PATCH,
            &format!("/conference/seats/{}", id),
            Some(JOHN_DOE),
            Some(json!({ "seats": 200 })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "The number of seats was changed correctly" })
    );
}

#[tokio::test]
async fn test_change_seats_of_someone_else() {
    let app = TestApp::new().await;
    let id = app.organize(JOHN_DOE, 100).await;

    let response = app
        .request(
            Method::PATCH,
            &format!("/conference/seats/{}", id),
            Some(BOB),
            Some(json!({ "seats": 200 })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(response).await["message"],
        "You are not allowed to update this conference"
    );
}

#[tokio::test]
async fn test_change_seats_of_unknown_conference() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::PATCH,
            "/conference/seats/non-existing-id",
            Some(JOHN_DOE),
            Some(json!({ "seats": 200 })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["message"], "Conference not found");
}

#[tokio::test]
async fn test_change_seats_out_of_bounds() {
    let app = TestApp::new().await;
    let id = app.organize(JOHN_DOE, 100).await;

    let response = app
        .request(
            Method::PATCH,
            &format!("/conference/seats/{}", id),
            Some(JOHN_DOE),
            Some(json!({ "seats": 1001 })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["message"],
        "The conference must have a maximum of 1000 seats and minimum of 20 seats"
    );
}

#[tokio::test]
async fn test_change_dates_notifies_attendees() {
    let app = TestApp::new().await;
    let id = app.organize(JOHN_DOE, 100).await;
    let booked = app
        .request(Method::POST, &format!("/conference/book/{}", id), Some(BOB), None)
        .await;
    assert_eq!(booked.status(), StatusCode::CREATED);

    let response = app
        .request(
            Method::PATCH,
            &format!("/conference/dates/{}", id),
            Some(JOHN_DOE),
            Some(json!({ "startDate": date(10, 0), "endDate": date(10, 2) })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "The dates of the conference were changed correctly" })
    );

    let emails = app.mailer.sent_emails();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].to, BOB.email);
    assert_eq!(emails[0].subject, "The dates of the conference have changed");
}

#[tokio::test]
async fn test_change_dates_too_long() {
    let app = TestApp::new().await;
    let id = app.organize(JOHN_DOE, 100).await;

    let response = app
        .request(
            Method::PATCH,
            &format!("/conference/dates/{}", id),
            Some(JOHN_DOE),
            Some(json!({ "startDate": date(10, 0), "endDate": date(10, 4) })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["message"],
        "The conference is too long (> 3 hours)"
    );
}

#[tokio::test]
async fn test_book_seat() {
    let app = TestApp::new().await;
    let id = app.organize(JOHN_DOE, 100).await;

    let response = app
        .request(Method::POST, &format!("/conference/book/{}", id), Some(BOB), None)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "The booking has been validated" })
    );
    assert!(app.mailer.sent_emails().is_empty());
}

#[tokio::test]
async fn test_book_seat_twice() {
    let app = TestApp::new().await;
    let id = app.organize(JOHN_DOE, 100).await;
    let uri = format!("/conference/book/{}", id);
    app.request(Method::POST, &uri, Some(BOB), None).await;

    let response = app.request(Method::POST, &uri, Some(BOB), None).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        json_body(response).await["message"],
        "User already booked this conference."
    );
}

#[tokio::test]
async fn test_book_unknown_conference() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/conference/book/non-existing-id", Some(BOB), None)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["message"], "Conference not found");
}

#[tokio::test]
async fn test_book_seat_with_notifications() {
    let mut settings = Settings::defaults().unwrap();
    settings.notifications.on_booking = true;
    let app = TestApp::with_settings(settings).await;
    let id = app.organize(JOHN_DOE, 100).await;

    let response = app
        .request(Method::POST, &format!("/conference/book/{}", id), Some(BOB), None)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let recipients: Vec<String> = app
        .mailer
        .sent_emails()
        .into_iter()
        .map(|email| email.to)
        .collect();
    assert_eq!(recipients, vec![BOB.email, JOHN_DOE.email]);
}

#[tokio::test]
async fn test_bookings_are_counted_in_metrics() {
    let app = TestApp::new().await;
    let id = app.organize(JOHN_DOE, 100).await;
    app.request(Method::POST, &format!("/conference/book/{}", id), Some(BOB), None)
        .await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = text_body(response).await;
    assert!(body.contains("conference_booking_bookings_total{outcome=\"created\"}"));
    assert!(body.contains("conference_booking_conference_changes_total{kind=\"organized\"}"));
}
