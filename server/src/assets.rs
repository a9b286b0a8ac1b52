//! Serving the embedded front-end bundle.
//!
//! `index.html` is always served with the front-end configuration injected in
//! place of [`CONFIG_PLACEHOLDER`], including when it stands in for a
//! client-side route. Every other path is looked up in the embedded assets.

use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::marker::PhantomData;
use std::sync::Arc;
use task_api::FrontendConfig;

const INDEX_HTML: &str = "index.html";

/// Marker in `index.html` replaced by the config `<script>` element.
pub const CONFIG_PLACEHOLDER: &str = "<!--TASK_DESK_CONFIG-->";

/// `index.html` with the front-end configuration injected.
pub struct IndexPage<A: RustEmbed> {
    config: FrontendConfig,
    _assets: PhantomData<A>,
}

impl<A: RustEmbed> IndexPage<A> {
    pub fn new(config: FrontendConfig) -> Self {
        Self {
            config,
            _assets: PhantomData,
        }
    }
}

impl<A: RustEmbed> IntoResponse for IndexPage<A> {
    fn into_response(self) -> Response {
        let config_json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize front-end config: {e}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to serialize front-end config: {e}"),
                )
                    .into_response();
            }
        };

        let Some(content) = A::get(INDEX_HTML) else {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Front-end assets not found. Did you build the front-end?",
            )
                .into_response();
        };

        let html = String::from_utf8_lossy(&content.data);
        let script = format!(
            r#"<script id="{}" type="application/json">{}</script>"#,
            FrontendConfig::ELEMENT_ID,
            config_json.replace("</", "<\\/")
        );
        Html(html.replace(CONFIG_PLACEHOLDER, &script)).into_response()
    }
}

/// Serve an embedded asset by path, falling back to the configured `index.html`.
pub async fn static_handler<A: RustEmbed>(
    State(config): State<Arc<FrontendConfig>>,
    uri: Uri,
) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = A::get(path).filter(|_| path != INDEX_HTML) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            [(header::CONTENT_TYPE, mime.as_ref().to_string())],
            content.data.into_owned(),
        )
            .into_response();
    }

    if A::get(INDEX_HTML).is_none() {
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    }
    IndexPage::<A>::new(config.as_ref().clone()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[derive(RustEmbed)]
    #[folder = "src/test_assets/"]
    struct TestAssets;

    #[derive(RustEmbed)]
    #[folder = "src/test_assets_no_index/"]
    struct TestAssetsNoIndex;

    fn config(url: &str) -> FrontendConfig {
        FrontendConfig {
            api_base_url: url.into(),
        }
    }

    async fn serve<A: RustEmbed>(path: &str) -> Response {
        let state = State(Arc::new(config("https://tasks.test")));
        static_handler::<A>(state, path.parse().unwrap()).await
    }

    async fn body_to_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn index_injects_config() {
        let page: IndexPage<TestAssets> = IndexPage::new(config("https://tasks.test"));
        let response = page.into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response).await;
        assert!(body.contains(r#"<script id="task-desk-config" type="application/json">"#));
        assert!(body.contains(r#""apiBaseUrl":"https://tasks.test""#));
        assert!(!body.contains(CONFIG_PLACEHOLDER));
    }

    #[tokio::test]
    async fn index_escapes_script_closing_tag() {
        let page: IndexPage<TestAssets> = IndexPage::new(config("</script><script>alert(1)"));
        let body = body_to_string(page.into_response()).await;

        assert!(body.contains(r#"<\/script>"#));
        assert!(!body.contains("</script><script>"));
    }

    #[tokio::test]
    async fn index_without_assets_is_a_server_error() {
        let page: IndexPage<TestAssetsNoIndex> = IndexPage::new(FrontendConfig::default());
        assert_eq!(page.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn serves_wasm_with_correct_mime() {
        let response = serve::<TestAssets>("/task_frontend_bg.wasm").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/wasm"
        );
    }

    #[tokio::test]
    async fn serves_js_with_correct_mime() {
        let response = serve::<TestAssets>("/task_frontend.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/javascript"
        );
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_configured_index() {
        let response = serve::<TestAssets>("/tasks/42").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response).await;
        assert!(body.contains(r#""apiBaseUrl":"https://tasks.test""#));
        assert!(!body.contains(CONFIG_PLACEHOLDER));
    }

    #[tokio::test]
    async fn index_by_name_is_configured() {
        let body = body_to_string(serve::<TestAssets>("/index.html").await).await;

        assert!(body.contains(r#""apiBaseUrl":"https://tasks.test""#));
        assert!(!body.contains(CONFIG_PLACEHOLDER));
    }

    #[tokio::test]
    async fn unknown_path_without_index_is_not_found() {
        let response = serve::<TestAssetsNoIndex>("/tasks/42").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
