use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use clinic_relay::application::context::AppContext;
use clinic_relay::application::usecases::balance_reminder_sweep::BalanceReminderSweepUseCase;
use clinic_relay::config::{BalanceSweep, Db, Delivery, Observability, Server, Settings};
use clinic_relay::domain::value_objects::timestamps::Timestamp;
use clinic_relay::infrastructure::db::dto::{BookingDetailsRow, WebhookRow};
use clinic_relay::infrastructure::db::memory::{
    InMemoryBookingStore, InMemoryDeliveryLogStore, InMemoryWebhookStore,
};
use clinic_relay::infrastructure::db::repositories::Repositories;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use time::Duration;

fn base_settings() -> Settings {
    Settings {
        server: Server {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        db: Db {
            url: "postgres://unused".to_string(),
        },
        delivery: Delivery {
            request_timeout_ms: 2000,
            response_body_max_chars: 1000,
            log_default_limit: 50,
            log_max_limit: 200,
        },
        balance_sweep: BalanceSweep {
            enabled: true,
            poll_interval_ms: 1000,
            window_days: 30,
        },
        observability: Observability {
            service_name: "clinic-relay".to_string(),
            enable_metrics: false,
        },
    }
}

fn booking_details(booking_id: uuid::Uuid, clinic_date: time::Date) -> BookingDetailsRow {
    BookingDetailsRow {
        booking_id,
        deposit_amount: Some(50_000),
        balance_due: Some(100_000),
        client_name: "Robin Shore".to_string(),
        client_email: "robin@example.com".to_string(),
        client_phone: None,
        clinic_id: uuid::Uuid::new_v4(),
        clinic_title: "Autumn Clinic".to_string(),
        clinic_date,
        clinic_coach: None,
        clinic_deposit_amount: Some(50_000),
        clinic_price: 150_000,
    }
}

type Received = Arc<Mutex<Vec<Value>>>;

async fn spawn_receiver() -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let state = received.clone();
    let app = Router::new()
        .route(
            "/hook",
            post(
                |State(state): State<Received>, body: Bytes| async move {
                    let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
                    state.lock().unwrap().push(parsed);
                    StatusCode::OK
                },
            ),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind receiver");
    let addr = listener.local_addr().expect("get addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}/hook"), received)
}

#[tokio::test]
async fn given_bookings_inside_and_outside_window_when_swept_should_remind_inside_only() {
    let bookings = Arc::new(InMemoryBookingStore::new());
    let repos = Repositories::with_stores(
        Arc::new(InMemoryWebhookStore::new()),
        Arc::new(InMemoryDeliveryLogStore::new()),
        bookings.clone(),
    );
    let ctx = AppContext::new(repos, base_settings());

    let now = Timestamp::now_utc();
    let due_booking = uuid::Uuid::new_v4();
    let far_booking = uuid::Uuid::new_v4();
    let unpaid_booking = uuid::Uuid::new_v4();
    // Clinic in 20 days: inside the 30-day window.
    bookings.put(
        booking_details(due_booking, now.date() + Duration::days(20)),
        "deposit_paid",
    );
    // Clinic in 60 days: outside the window.
    bookings.put(
        booking_details(far_booking, now.date() + Duration::days(60)),
        "deposit_paid",
    );
    // Inside the window but nothing paid yet: not a reminder candidate.
    bookings.put(
        booking_details(unpaid_booking, now.date() + Duration::days(10)),
        "pending",
    );

    let (url, received) = spawn_receiver().await;
    let stamp = Timestamp::now_utc().as_inner();
    ctx.repos
        .webhook
        .upsert(&WebhookRow {
            id: uuid::Uuid::new_v4(),
            name: "reminders".to_string(),
            url,
            secret: None,
            is_active: true,
            events: vec!["balance.due".to_string()],
            created_at: stamp,
            updated_at: stamp,
        })
        .await
        .unwrap();

    let result = BalanceReminderSweepUseCase::run_once(&ctx, now).await.unwrap();

    assert_eq!(result.scanned, 1);
    assert_eq!(result.triggered, 1);

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0]["booking_id"].as_str().unwrap(),
        due_booking.to_string()
    );
    assert_eq!(received[0]["event"], "balance.due");
}

#[tokio::test]
async fn given_no_subscribers_when_swept_should_trigger_nothing() {
    let bookings = Arc::new(InMemoryBookingStore::new());
    let repos = Repositories::with_stores(
        Arc::new(InMemoryWebhookStore::new()),
        Arc::new(InMemoryDeliveryLogStore::new()),
        bookings.clone(),
    );
    let ctx = AppContext::new(repos, base_settings());

    let now = Timestamp::now_utc();
    bookings.put(
        booking_details(uuid::Uuid::new_v4(), now.date() + Duration::days(5)),
        "deposit_paid",
    );

    let result = BalanceReminderSweepUseCase::run_once(&ctx, now).await.unwrap();

    assert_eq!(result.scanned, 1);
    assert_eq!(result.triggered, 0);
    assert!(ctx
        .repos
        .delivery_log
        .list(None, 100)
        .await
        .unwrap()
        .is_empty());
}
