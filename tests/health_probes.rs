//! Probe routes through the full application wiring.

#[expect(
    dead_code,
    reason = "Shared helpers include functions used only by other integration suites."
)]
mod support;

use actix_web::http::header;

use support::{get, spawn_app};

#[actix_web::test]
async fn probes_answer_without_authentication() {
    let app = spawn_app().await;

    let live = get(&app, "/healthz/live", None).await;
    assert_eq!(live.status(), 200);

    let ready = get(&app, "/healthz/ready", None).await;
    assert_eq!(ready.status(), 200);
    assert_eq!(
        ready
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("no-store")
    );
}
