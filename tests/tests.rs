#[cfg(test)]
mod tests {
    use roombook::hooks::use_query::{QueryState, initial_state};
    use roombook::models::{error::AppError, health::HealthStatus};
    use roombook::query::{QueryClient, QueryKey};
    use std::rc::Rc;

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_mount_point_display() {
        let error = AppError::MountPointMissing("root".to_string());
        assert_eq!(error.to_string(), "Mount point #root not found in document");
    }

    // ===== Health Model Tests =====

    #[test]
    fn test_health_deserialization() {
        let json = r#"{"status": "ok"}"#;

        let health: Result<HealthStatus, _> = serde_json::from_str(json);
        assert!(health.is_ok());

        let health = health.unwrap();
        assert_eq!(health.status, "ok");
        assert!(health.is_ok());
    }

    #[test]
    fn test_health_not_ok() {
        assert!(!HealthStatus::new("degraded").is_ok());
        assert!(!HealthStatus::new("OK").is_ok());
        assert!(HealthStatus::new("ok").is_ok());
    }

    #[test]
    fn test_health_missing_status_is_rejected() {
        let health: Result<HealthStatus, _> = serde_json::from_str("{}");
        assert!(health.is_err());
    }

    // ===== QueryState Tests =====

    #[test]
    fn test_query_state_data_extraction() {
        let health = Rc::new(HealthStatus::new("ok"));
        let loaded = QueryState::Loaded(health.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &health);
        assert!(!loaded.is_loading());

        let loading: QueryState<HealthStatus> = QueryState::Loading;
        assert!(loading.data().is_none());
        assert!(loading.is_loading());

        let error: QueryState<HealthStatus> = QueryState::Error("Test error".to_string());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_query_state_equality() {
        let state1: QueryState<HealthStatus> = QueryState::Loading;
        let state2: QueryState<HealthStatus> = QueryState::Loading;
        assert_eq!(state1, state2);

        let state3: QueryState<HealthStatus> = QueryState::Error("Test error".to_string());
        let state4: QueryState<HealthStatus> = QueryState::Error("Test error".to_string());
        assert_eq!(state3, state4);

        let state5 = QueryState::Loaded(Rc::new(HealthStatus::new("ok")));
        let state6 = QueryState::Loaded(Rc::new(HealthStatus::new("ok")));
        assert_eq!(state5, state6);
        assert_ne!(state5, state1);
    }

    #[test]
    fn test_initial_state_without_client() {
        let state = initial_state::<HealthStatus>(None, &QueryKey::from(["health"]));
        assert_eq!(
            state,
            QueryState::Error("query client not provided".to_string())
        );
    }

    #[test]
    fn test_initial_state_uses_cached_data() {
        let client = QueryClient::default();
        let key = QueryKey::from(["health"]);

        let state = initial_state::<HealthStatus>(Some(&client), &key);
        assert!(state.is_loading());

        client.set_query_data(key.clone(), Rc::new(HealthStatus::new("ok")));
        let state = initial_state::<HealthStatus>(Some(&client), &key);
        assert_eq!(state.data().map(|h| h.status.as_str()), Some("ok"));
    }

    // ===== Query Client Defaults =====

    #[test]
    fn test_query_client_reports_default_freshness_window() {
        let client = QueryClient::default();
        let options = client.default_options();
        assert_eq!(options.queries.stale_time.num_milliseconds(), 60_000);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod render_tests {
    use roombook::components::status::{Status, StatusProps};
    use roombook::hooks::use_query::QueryState;
    use roombook::models::health::HealthStatus;
    use roombook::query::QueryClient;
    use roombook::routes::AppRoutes;
    use std::rc::Rc;
    use yew::prelude::*;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, History, MemoryHistory};
    use yew_router::Router;

    #[derive(Properties, PartialEq)]
    struct ShellProps {
        path: AttrValue,
    }

    /// The application tree with an in-memory history positioned at `path`.
    #[function_component(Shell)]
    fn shell(props: &ShellProps) -> Html {
        let client = use_state(QueryClient::default);
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(props.path.to_string());

        html! {
            <ContextProvider<QueryClient> context={(*client).clone()}>
                <Router history={history}>
                    <AppRoutes />
                </Router>
            </ContextProvider<QueryClient>>
        }
    }

    async fn render_path(path: &'static str) -> String {
        LocalServerRenderer::<Shell>::with_props(ShellProps { path: path.into() })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_root_path_renders_title() {
        let html = render_path("/").await;
        assert!(html.contains("Roombook"), "{html}");
        assert!(html.contains("회의실 예약 시스템"), "{html}");
        assert!(html.contains("Checking API..."), "{html}");
        assert!(!html.contains("404"), "{html}");
    }

    #[tokio::test]
    async fn test_unknown_path_renders_not_found() {
        let html = render_path("/anything").await;
        assert!(html.contains("404"), "{html}");
        assert!(html.contains("Page not found"), "{html}");
        assert!(!html.contains("회의실 예약 시스템"), "{html}");
    }

    #[tokio::test]
    async fn test_status_renders_each_state() {
        let render = |state: QueryState<HealthStatus>| async move {
            LocalServerRenderer::<Status>::with_props(StatusProps { state })
                .hydratable(false)
                .render()
                .await
        };

        let ok = render(QueryState::Loaded(Rc::new(HealthStatus::new("ok")))).await;
        assert!(ok.contains("API online"), "{ok}");

        let degraded = render(QueryState::Loaded(Rc::new(HealthStatus::new("degraded")))).await;
        assert!(degraded.contains("API reports degraded"), "{degraded}");

        let error = render(QueryState::Error("Rate limited".to_string())).await;
        assert!(error.contains("Rate limited"), "{error}");
    }
}
