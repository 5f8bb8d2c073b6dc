//! Language server backend
//!
//! Keeps the text of open documents and answers `textDocument/foldingRange`
//! from a fresh engine run on every request.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tagfold_core::{FoldingEngine, FoldingError, Settings};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tower_lsp::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    FoldingRange, FoldingRangeParams, FoldingRangeProviderCapability, InitializeParams,
    InitializeResult, InitializedParams, MessageType, ServerCapabilities, ServerInfo,
    TextDocumentSyncCapability, TextDocumentSyncKind, Url,
};
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, info, warn};

use crate::convert::{client_range_limit, to_lsp_ranges};

/// LSP Backend state
pub struct Backend {
    /// LSP client for sending notifications
    client: Client,
    /// Document store for open documents
    documents: Arc<RwLock<HashMap<Url, String>>>,
    /// Engine built from the initialization options
    engine: Arc<RwLock<Arc<FoldingEngine>>>,
    /// `rangeLimit` from the client capabilities
    range_limit: Arc<RwLock<Option<usize>>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
            engine: Arc::new(RwLock::new(Arc::new(FoldingEngine::default()))),
            range_limit: Arc::new(RwLock::new(None)),
        }
    }

    async fn get_document(&self, uri: &Url) -> Option<String> {
        let docs = self.documents.read().await;
        docs.get(uri).cloned()
    }

    async fn store_document(&self, uri: Url, text: String) {
        let mut docs = self.documents.write().await;
        docs.insert(uri, text);
    }

    async fn remove_document(&self, uri: &Url) {
        let mut docs = self.documents.write().await;
        docs.remove(uri);
    }

    /// Replace the engine with one built from client-supplied settings
    async fn configure(&self, options: Option<Value>) {
        let engine = match settings_from_options(options) {
            Ok(None) => return,
            Ok(Some(settings)) => FoldingEngine::new(settings).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match engine {
            Ok(engine) => {
                info!("Using folding settings from initialization options");
                *self.engine.write().await = Arc::new(engine);
            }
            Err(e) => {
                warn!("Ignoring invalid initialization options: {}", e);
                self.client
                    .show_message(
                        MessageType::WARNING,
                        format!("tagfold: invalid settings, using defaults ({})", e),
                    )
                    .await;
            }
        }
    }
}

/// Settings carried in `initializationOptions`, if any
///
/// The options use the same shape as the TOML settings file.
pub fn settings_from_options(options: Option<Value>) -> serde_json::Result<Option<Settings>> {
    options
        .filter(|value| !value.is_null())
        .map(serde_json::from_value)
        .transpose()
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("tagfold LSP server initializing");

        let limit = client_range_limit(&params.capabilities);
        debug!("Client folding range limit: {:?}", limit);
        *self.range_limit.write().await = limit;

        self.configure(params.initialization_options).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                folding_range_provider: Some(FoldingRangeProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "tagfold-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("tagfold LSP server initialized");
        self.client
            .log_message(MessageType::INFO, "tagfold language server ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("tagfold LSP server shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        debug!("Document opened: {}", params.text_document.uri);
        self.store_document(params.text_document.uri, params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        debug!("Document changed: {}", params.text_document.uri);
        // FULL sync: the last change holds the whole document
        if let Some(change) = params.content_changes.into_iter().last() {
            self.store_document(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        debug!("Document closed: {}", params.text_document.uri);
        self.remove_document(&params.text_document.uri).await;
    }

    async fn folding_range(
        &self,
        params: FoldingRangeParams,
    ) -> Result<Option<Vec<FoldingRange>>> {
        let uri = params.text_document.uri;
        debug!("Folding range request for: {}", uri);

        let Some(text) = self.get_document(&uri).await else {
            warn!("Document not found for folding: {}", uri);
            return Ok(None);
        };

        let engine = Arc::clone(&*self.engine.read().await);
        let limit = *self.range_limit.read().await;

        // Dropping this future on $/cancelRequest cancels the computation
        let cancel = CancellationToken::new();
        let _guard = cancel.clone().drop_guard();

        let computed =
            tokio::task::spawn_blocking(move || engine.compute_cancellable(&text, limit, &cancel))
                .await;

        match computed {
            Ok(Ok(ranges)) => {
                debug!("Generated {} folding ranges for {}", ranges.len(), uri);
                Ok(Some(to_lsp_ranges(&ranges)))
            }
            Ok(Err(FoldingError::Cancelled)) => {
                debug!("Folding range request cancelled for {}", uri);
                Err(Error::request_cancelled())
            }
            Ok(Err(e)) => Err(Error {
                code: ErrorCode::InternalError,
                message: e.to_string().into(),
                data: None,
            }),
            Err(e) => {
                warn!("Folding task failed for {}: {}", uri, e);
                Err(Error::internal_error())
            }
        }
    }
}

/// Run the language server on stdin/stdout until the client exits
pub async fn run_server() {
    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting tagfold Language Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_options() {
        assert!(settings_from_options(None).unwrap().is_none());
        assert!(settings_from_options(Some(Value::Null)).unwrap().is_none());
    }

    #[test]
    fn test_options_use_settings_shape() {
        let settings = settings_from_options(Some(json!({
            "folding": { "range_limit": 100 },
            "embedded": { "enabled": false }
        })))
        .unwrap()
        .unwrap();

        assert_eq!(settings.folding.range_limit, Some(100));
        assert!(!settings.embedded.enabled);
        assert_eq!(settings.folding.region_start, Settings::default().folding.region_start);
    }

    #[test]
    fn test_invalid_options() {
        assert!(settings_from_options(Some(json!({ "folding": { "range_limit": "many" } }))).is_err());
    }
}
