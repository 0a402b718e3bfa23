use aesthetics_preview::compare::Channel;
use aesthetics_preview::config::{Config, OverlayConfig};
use aesthetics_preview::overlay::{Overlay, OverlayOutcome, OverlaySettings, run_for_page};
use aesthetics_preview::render::{OutputFormat, render_table};
use aesthetics_preview::scoring::ScoringClient;
use aesthetics_preview::{ComparisonTable, FetchFailure};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = "https://main--site--org.hlx.page/blog";
const LIVE: &str = "https://main--site--org.hlx.live/blog";
const PREVIEW: &str = "https://main--site--org.hlx.page/blog?aesthetics=disabled";

fn scores(pairs: &[(&str, serde_json::Value)]) -> serde_json::Value {
    let entries: Vec<_> = pairs
        .iter()
        .map(|(name, value)| json!({ "feature_name": name, "feature_value": value }))
        .collect();
    json!({ "aesthetics_scores": entries })
}

async fn mount(server: &MockServer, target: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/score"))
        .and(query_param("url", target))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> ScoringClient {
    ScoringClient::new(&format!("{}/score", server.uri()), "test-key", None)
}

fn ready(outcome: OverlayOutcome) -> ComparisonTable {
    match outcome {
        OverlayOutcome::Ready(table) => table,
        other => panic!("expected a ready table, got {other:?}"),
    }
}

#[tokio::test]
async fn live_failure_still_renders_preview_only() {
    let server = MockServer::start().await;
    mount(&server, LIVE, ResponseTemplate::new(500)).await;
    mount(
        &server,
        PREVIEW,
        ResponseTemplate::new(200).set_body_json(scores(&[("visual_balance", json!(0.5))])),
    )
    .await;

    let client = client_for(&server);
    let config = OverlayConfig::default();
    let table = ready(
        Overlay::new(&client, &config)
            .run(PAGE, OverlaySettings::enabled())
            .await
            .unwrap(),
    );

    assert!(!table.has_live_column);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].metric_name, "visual balance");
    assert_eq!(table.rows[0].preview_value, "0.50");
    assert_eq!(table.rows[0].live_value, None);
    assert_eq!(table.rows[0].highlight, None);
}

#[tokio::test]
async fn both_scores_produce_highlighted_rows() {
    let server = MockServer::start().await;
    mount(
        &server,
        LIVE,
        ResponseTemplate::new(200).set_body_json(scores(&[
            ("contrast", json!(0.5)),
            ("clutter", json!("0.7")),
            ("legacy_only", json!(0.1)),
        ])),
    )
    .await;
    mount(
        &server,
        PREVIEW,
        ResponseTemplate::new(200).set_body_json(scores(&[
            ("contrast", json!(0.8)),
            ("clutter", json!(0.2)),
            ("symmetry", json!(0.4)),
        ])),
    )
    .await;

    let client = client_for(&server);
    let config = OverlayConfig::default();
    let table = ready(
        Overlay::new(&client, &config)
            .run(PAGE, OverlaySettings::enabled())
            .await
            .unwrap(),
    );

    assert!(table.has_live_column);
    let names: Vec<_> = table.rows.iter().map(|r| r.metric_name.as_str()).collect();
    assert_eq!(names, ["contrast", "clutter", "symmetry"]);

    let up = table.rows[0].highlight.unwrap();
    assert_eq!(up.channel, Channel::Positive);
    assert_eq!(up.delta, 0.6);

    let down = table.rows[1].highlight.unwrap();
    assert_eq!(down.channel, Channel::Negative);
    assert_eq!(down.delta, -1.0);
    assert_eq!(down.intensity, 1.0);

    assert_eq!(table.rows[2].live_value, None);
    assert_eq!(table.rows[2].highlight, None);

    let html = render_table(&table, OutputFormat::Html, &config.stylesheet).unwrap();
    assert!(html.contains("rgba(0,200,0,0.60)"));
    assert!(html.contains("rgba(200,0,0,1.00)"));
    assert!(!html.contains("legacy only"));
}

#[tokio::test]
async fn preview_failure_leaves_no_overlay() {
    let server = MockServer::start().await;
    mount(
        &server,
        LIVE,
        ResponseTemplate::new(200).set_body_json(scores(&[("contrast", json!(0.5))])),
    )
    .await;
    mount(&server, PREVIEW, ResponseTemplate::new(503)).await;

    let client = client_for(&server);
    let config = OverlayConfig::default();
    let outcome = Overlay::new(&client, &config)
        .run(PAGE, OverlaySettings::enabled())
        .await
        .unwrap();

    assert_eq!(outcome, OverlayOutcome::Unavailable(FetchFailure::Status(503)));
}

#[tokio::test]
async fn disabled_page_sends_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.scoring.endpoint = format!("{}/score", server.uri());
    let client = ScoringClient::from_config(&config.scoring);

    let outcome = run_for_page(&client, &config, PREVIEW).await.unwrap();
    assert_eq!(outcome, OverlayOutcome::Disabled);
}
