//! Development server implementation.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path as UrlPath, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use stylekit_content::documentation;
use stylekit_site::assets::AssetPipeline;
use stylekit_site::{BuildConfig, DocumentRenderer};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{hmr_client_script, HmrHub, HmrMessage};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Site settings shared with the static build
    pub site: BuildConfig,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            site: BuildConfig {
                minify: false,
                ..Default::default()
            },
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

impl DevServerConfig {
    /// Paths whose changes trigger a reload: extra stylesheets and the public
    /// directory.
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.site.styles.iter().map(PathBuf::from).collect();
        if let Some(public_dir) = &self.site.public_dir {
            paths.push(public_dir.clone());
        }
        paths
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    AddressError(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

/// Shared server state.
struct ServerState {
    config: DevServerConfig,
    hmr: HmrHub,
    renderer: DocumentRenderer,
}

impl ServerState {
    fn new(mut config: DevServerConfig) -> Result<Self, ServerError> {
        // Routes are mounted at the root, so links must be too.
        if config.site.base_url != "/" {
            tracing::debug!(
                "Serving at / instead of base URL {}",
                config.site.base_url
            );
            config.site.base_url = "/".to_string();
        }

        let renderer =
            DocumentRenderer::new().map_err(|e| ServerError::RenderError(e.to_string()))?;

        Ok(Self {
            config,
            hmr: HmrHub::new(),
            renderer,
        })
    }

    /// Compose and render the page with the reload client attached.
    fn render_index(&self) -> Result<String, ServerError> {
        self.renderer
            .render(&documentation(), &self.config.site, true)
            .map_err(|e| ServerError::RenderError(e.to_string()))
    }

    /// Find a configured extra stylesheet by its served file name.
    fn find_style(&self, file: &str) -> Option<PathBuf> {
        self.config
            .site
            .styles
            .iter()
            .map(PathBuf::from)
            .find(|path| path.file_name().and_then(|f| f.to_str()) == Some(file))
    }

    /// Message to broadcast for a file change.
    fn reload_message(&self, event: &WatchEvent) -> HmrMessage {
        match event {
            WatchEvent::StylesheetModified(path) => HmrMessage::ReloadStyles {
                path: self.display_path(path),
            },
            WatchEvent::Created(_) | WatchEvent::Deleted(_) | WatchEvent::Modified(_) => {
                HmrMessage::Reload
            }
        }
    }

    fn display_path(&self, path: &Path) -> String {
        self.config
            .site
            .public_dir
            .as_ref()
            .and_then(|dir| path.strip_prefix(dir).ok())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::AddressError(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let state = Arc::new(ServerState::new(self.config.clone())?);

        // Set up file watcher
        let (watcher, mut rx) = FileWatcher::new(&self.config.watch_paths())
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        // Spawn file watch handler
        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                tracing::info!("Changed: {}", event.path().display());
                tracing::debug!(
                    "Notifying {} client(s)",
                    state_clone.hmr.subscriber_count()
                );
                state_clone.hmr.send(state_clone.reload_message(&event));
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = router(state, self.config.site.public_dir.as_deref());

        tracing::info!("Starting dev server at http://{}", addr);

        // Open browser if configured
        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

fn router(state: Arc<ServerState>, public_dir: Option<&Path>) -> Router {
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/assets/{file}", get(asset_handler))
        .route("/__hmr", get(ws_handler))
        .route("/__hmr.js", get(hmr_script_handler))
        .with_state(state);

    match public_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    }
}

/// Handler for the index page. The page is recomposed on every request.
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    match state.render_index() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Handler for generated and configured assets.
async fn asset_handler(
    State(state): State<Arc<ServerState>>,
    UrlPath(file): UrlPath<String>,
) -> Response {
    match file.as_str() {
        "main.css" => css_response(AssetPipeline::generate_css()),
        "main.js" => (
            [(header::CONTENT_TYPE, "application/javascript")],
            AssetPipeline::generate_js(),
        )
            .into_response(),
        _ => match state.find_style(&file) {
            Some(path) => match tokio::fs::read_to_string(&path).await {
                Ok(css) => css_response(css),
                Err(e) => {
                    tracing::warn!("Failed to read stylesheet {}: {}", path.display(), e);
                    StatusCode::NOT_FOUND.into_response()
                }
            },
            None => StatusCode::NOT_FOUND.into_response(),
        },
    }
}

fn css_response(css: String) -> Response {
    ([(header::CONTENT_TYPE, "text/css")], css).into_response()
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.hmr.subscribe();

    if !send_message(&mut socket, &HmrMessage::Connected).await {
        return;
    }

    // Forward reload messages to the client
    while let Ok(msg) = rx.recv().await {
        if !send_message(&mut socket, &msg).await {
            break;
        }
    }
}

/// Send a message, returning whether the client is still reachable.
async fn send_message(socket: &mut WebSocket, msg: &HmrMessage) -> bool {
    let json = match serde_json::to_string(msg) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to encode reload message: {}", e);
            return false;
        }
    };
    socket.send(Message::Text(json.into())).await.is_ok()
}

/// Handler for the reload client script.
async fn hmr_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        hmr_client_script("/__hmr"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn state_with(site: BuildConfig) -> ServerState {
        ServerState::new(DevServerConfig {
            site,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert!(!server.config.site.minify);
    }

    #[test]
    fn renders_index_with_reload_client() {
        let state = state_with(BuildConfig::default());
        let html = state.render_index().unwrap();

        assert!(html.contains("<title>StyleKit - Documentation</title>"));
        assert!(html.contains("__hmr.js"));
        assert!(html.contains("id=\"installation\""));
    }

    #[test]
    fn watches_styles_and_public_dir() {
        let config = DevServerConfig {
            site: BuildConfig {
                styles: vec!["theme/brand.css".to_string()],
                public_dir: Some(PathBuf::from("public")),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            config.watch_paths(),
            vec![PathBuf::from("theme/brand.css"), PathBuf::from("public")]
        );
    }

    #[test]
    fn finds_configured_stylesheet_by_name() {
        let state = state_with(BuildConfig {
            styles: vec!["theme/brand.css".to_string()],
            ..Default::default()
        });

        assert_eq!(state.find_style("brand.css"), Some(PathBuf::from("theme/brand.css")));
        assert_eq!(state.find_style("other.css"), None);
    }

    #[test]
    fn stylesheet_changes_reload_styles_only() {
        let state = state_with(BuildConfig {
            public_dir: Some(PathBuf::from("public")),
            ..Default::default()
        });

        assert_eq!(
            state.reload_message(&WatchEvent::StylesheetModified(PathBuf::from(
                "public/css/extra.css"
            ))),
            HmrMessage::ReloadStyles {
                path: "css/extra.css".to_string()
            }
        );
        assert_eq!(
            state.reload_message(&WatchEvent::Modified(PathBuf::from("public/logo.svg"))),
            HmrMessage::Reload
        );
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    /// Same-origin `href`/`src` targets in a rendered page.
    fn local_links(html: &str) -> Vec<String> {
        let mut links = Vec::new();
        for attr in ["href=\"", "src=\""] {
            for rest in html.split(attr).skip(1) {
                let Some(end) = rest.find('"') else { continue };
                let link = rest[..end].replace("&#x2f;", "/");
                if link.starts_with('/') && !link.starts_with("//") {
                    links.push(link);
                }
            }
        }
        links
    }

    #[tokio::test]
    async fn serves_linked_assets_under_a_base_url() {
        let state = Arc::new(state_with(BuildConfig {
            base_url: "/docs/".to_string(),
            ..Default::default()
        }));

        let (status, html) = get(router(Arc::clone(&state), None), "/").await;
        assert_eq!(status, StatusCode::OK);

        let links = local_links(&html);
        assert!(links.contains(&"/assets/main.css".to_string()));
        assert!(links.contains(&"/__hmr.js".to_string()));

        for link in links {
            let (status, _) = get(router(Arc::clone(&state), None), &link).await;
            assert_eq!(status, StatusCode::OK, "GET {}", link);
        }
    }

    #[tokio::test]
    async fn unknown_asset_is_not_found() {
        let state = Arc::new(state_with(BuildConfig::default()));
        let (status, _) = get(router(state, None), "/assets/missing.css").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
