//! Common Test Utilities
//!
//! An in-memory application driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use axum_extra::headers::{Authorization, HeaderMapExt};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use conference_booking::config::{SeedUser, Settings};
use conference_booking::infrastructure::generators::{FixedDateGenerator, RandomIdGenerator};
use conference_booking::infrastructure::mailer::InMemoryMailer;
use conference_booking::startup::{build_router, seed_users, AppState, Dependencies, Repositories};

/// Credentials of a seeded account
#[derive(Debug, Clone, Copy)]
pub struct TestUser {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

pub const JOHN_DOE: TestUser = TestUser {
    id: "john-doe",
    email: "johndoe@gmail.com",
    password: "qwerty",
};

pub const BOB: TestUser = TestUser {
    id: "bob",
    email: "bob@gmail.com",
    password: "azerty",
};

/// Frozen clock of the test application
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// RFC 3339 timestamp `days` after `now()`, plus `hours`
pub fn date(days: i64, hours: i64) -> String {
    (now() + Duration::days(days) + Duration::hours(hours)).to_rfc3339()
}

/// Test application over in-memory storage
pub struct TestApp {
    pub router: Router,
    pub mailer: Arc<InMemoryMailer>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_settings(Settings::defaults().unwrap()).await
    }

    pub async fn with_settings(settings: Settings) -> Self {
        let repositories = Repositories::in_memory();
        let seeds: Vec<SeedUser> = [JOHN_DOE, BOB]
            .iter()
            .map(|user| SeedUser {
                id: user.id.to_string(),
                email_address: user.email.to_string(),
                password: user.password.to_string(),
            })
            .collect();
        seed_users(repositories.users.as_ref(), &seeds)
            .await
            .unwrap();

        let mailer = Arc::new(InMemoryMailer::new());
        let deps = Dependencies {
            repositories,
            mailer: mailer.clone(),
            id_generator: Arc::new(RandomIdGenerator),
            date_generator: Arc::new(FixedDateGenerator::new(now())),
        };

        Self {
            router: build_router(AppState::new(settings, deps)),
            mailer,
        }
    }

    /// Send a request, optionally with Basic credentials and a JSON body
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        user: Option<TestUser>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let mut request = builder
            .body(body.map_or_else(Body::empty, |json| Body::from(json.to_string())))
            .unwrap();

        if let Some(user) = user {
            request
                .headers_mut()
                .typed_insert(Authorization::basic(user.email, user.password));
        }

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri, None, None).await
    }

    /// Organize a valid conference as `user` and return its id
    pub async fn organize(&self, user: TestUser, seats: i64) -> String {
        let response = self
            .request(
                Method::POST,
                "/conference",
                Some(user),
                Some(conference_body("My first conference", seats, 4, 2)),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        json_body(response).await["id"]
            .as_str()
            .unwrap()
            .to_string()
    }
}

/// JSON body of a conference starting `days` from now and lasting `hours`
pub fn conference_body(title: &str, seats: i64, days: i64, hours: i64) -> Value {
    serde_json::json!({
        "title": title,
        "seats": seats,
        "startDate": date(days, 0),
        "endDate": date(days, hours),
    })
}

/// Read and parse a JSON response body
pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text
pub async fn text_body(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
