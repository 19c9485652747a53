//! `location` command: mount a page session, fetch, and print the result.

use std::sync::Arc;

use odyssey_core::{AppConfig, LocationId};
use odyssey_graphql::GraphqlClient;
use odyssey_page::route::parse_location_route;
use odyssey_page::{spawn_load, Applied, PageSession, RenderModel};
use tokio::sync::mpsc;

use crate::render::render_text;

/// Accepts either a bare id or a `/location/{id}` path.
pub(crate) fn parse_target(raw: &str) -> anyhow::Result<LocationId> {
    if raw.starts_with('/') {
        return parse_location_route(raw)
            .ok_or_else(|| anyhow::anyhow!("'{raw}' is not a /location/{{id}} path"));
    }
    Ok(LocationId::parse(raw)?)
}

/// Renders the page for `target`.
///
/// Returns `Ok(false)` when the fetch failed and only the error fallback was
/// printed.
///
/// # Errors
///
/// Returns an error if the target is invalid or the client cannot be built.
pub(crate) async fn run_location(
    config: &AppConfig,
    target: &str,
    json: bool,
) -> anyhow::Result<bool> {
    let location_id = parse_target(target)?;
    let client = Arc::new(
        GraphqlClient::new(config)
            .map_err(|e| anyhow::anyhow!("failed to build GraphQL client: {e}"))?,
    );

    let mut session = PageSession::mount(location_id.clone());
    if !json {
        print!("{}", render_text(&session.render()));
    }

    tracing::info!(
        location_id = %location_id,
        endpoint = %client.endpoint(),
        "fetching location page"
    );
    let (tx, mut rx) = mpsc::channel(1);
    spawn_load(client, location_id, tx);

    while let Some(settled) = rx.recv().await {
        match session.apply(settled) {
            Applied::Accepted => {
                tracing::debug!(
                    location_id = %session.location_id(),
                    "location outcome applied"
                );
                break;
            }
            Applied::Stale | Applied::AlreadySettled | Applied::StillPending => {}
        }
    }

    let model = session.render();
    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print!("{}", render_text(&model));
    }

    Ok(!matches!(model, RenderModel::Error { .. } | RenderModel::Loading))
}

#[cfg(test)]
mod tests {
    use odyssey_core::Environment;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server: &MockServer) -> AppConfig {
        AppConfig {
            graphql_url: format!("{}/graphql", server.uri()),
            api_token: None,
            env: Environment::Test,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "debug".to_string(),
            request_timeout_secs: 5,
            user_agent: "odyssey-test".to_string(),
            max_retries: 0,
            retry_backoff_base_ms: 0,
        }
    }

    #[tokio::test]
    async fn run_location_reports_success_for_page() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "location": { "id": "42", "name": "Mars", "reviews": [] } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ok = run_location(&config_for(&server), "/location/42", true)
            .await
            .unwrap();
        assert!(ok);
    }

    #[tokio::test]
    async fn run_location_reports_failure_for_error_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": null,
                "errors": [{ "message": "not found" }]
            })))
            .mount(&server)
            .await;

        let ok = run_location(&config_for(&server), "7", false).await.unwrap();
        assert!(!ok);
    }

    #[test]
    fn bare_id_is_accepted() {
        assert_eq!(parse_target("42").unwrap().as_str(), "42");
    }

    #[test]
    fn route_path_is_accepted() {
        assert_eq!(parse_target("/location/42").unwrap().as_str(), "42");
    }

    #[test]
    fn foreign_route_is_rejected() {
        assert!(parse_target("/activity/42").is_err());
    }

    #[test]
    fn blank_id_is_rejected() {
        assert!(parse_target("  ").is_err());
    }
}
