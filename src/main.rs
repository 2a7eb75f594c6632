use std::env;

use db_outage::models::{Settings, TestInvocation};
use db_outage::utils::constant::DEFAULT_BIND_ADDRESS;
use db_outage::utils::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let subscriber = get_subscriber("db-outage", "db_outage=info,tower_http=info");
    init_subscriber(subscriber).expect("Failed to set tracing subscriber");

    let settings =
        Settings::from_env().with_test_invocation(TestInvocation::from_args(env::args()));

    let database_url = env::var("DATABASE_URL").expect("Env variable `DATABASE_URL` should be set");

    // Lazy so the server still comes up, and serves the outage page, when the database is down
    let db_pool = PgPoolOptions::new()
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy(&database_url)
        .expect("Failed to parse `DATABASE_URL`");

    let app = db_outage::app_with_email_service(db_pool, settings, None);

    let addr = env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    info!("Server starting at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
