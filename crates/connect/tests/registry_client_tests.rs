//! Registry client tests against an in-process fake registry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode as HttpStatus},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use chainreg_connect::{RegistryApiClient, RegistryClientConfig, REGISTRY_SERVICE};
use chainreg_core::assets::{AssetCandidate, AssetKind, CreateAssetRequest};
use chainreg_core::chains::{ChainCandidate, CreateChainRequest};
use chainreg_core::deployments::{CreateDeploymentRequest, DeploymentCandidate, ZERO_ADDRESS};
use chainreg_core::registry::{CreateOutcome, RegistryClient, StatusCode};
use chainreg_core::seed::{NoOpProgressReporter, SeedOrchestrator, StageKind};
use chainreg_core::source::StaticRecordSource;

// ============================================================================
// Fake registry
// ============================================================================

#[derive(Default)]
struct FakeRegistry {
    assets: Mutex<Vec<(String, String)>>,
    deployments: Mutex<Vec<Value>>,
    auth_headers: Mutex<Vec<String>>,
    list_calls: AtomicUsize,
}

impl FakeRegistry {
    fn record_auth(&self, headers: &HeaderMap) {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        self.auth_headers.lock().unwrap().push(value);
    }
}

async fn create_chain(
    State(state): State<Arc<FakeRegistry>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (HttpStatus, String) {
    state.record_auth(&headers);
    if body["chainId"] == "CHAIN_TYPE_BROKEN" {
        return (
            HttpStatus::SERVICE_UNAVAILABLE,
            "<html>upstream unavailable</html>".to_string(),
        );
    }
    (
        HttpStatus::OK,
        json!({ "chain": { "id": body["chainId"] } }).to_string(),
    )
}

async fn create_asset(
    State(state): State<Arc<FakeRegistry>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (HttpStatus, Json<Value>) {
    state.record_auth(&headers);
    let symbol = body["symbol"].as_str().unwrap_or_default().to_string();
    if body.get("logoUrl").is_some() {
        return (
            HttpStatus::BAD_REQUEST,
            Json(json!({ "code": "invalid_argument", "message": "logo url rejected" })),
        );
    }

    let mut assets = state.assets.lock().unwrap();
    if assets.iter().any(|(_, s)| *s == symbol) {
        return (
            HttpStatus::CONFLICT,
            Json(json!({ "code": "already_exists", "message": format!("asset {} already exists", symbol) })),
        );
    }
    let id = format!("asset-{}", assets.len() + 1);
    assets.push((id.clone(), symbol.clone()));
    (
        HttpStatus::OK,
        Json(json!({ "asset": { "id": id, "symbol": symbol } })),
    )
}

async fn create_deployment(
    State(state): State<Arc<FakeRegistry>>,
    Json(body): Json<Value>,
) -> (HttpStatus, Json<Value>) {
    if body["contractAddress"] == "cancel-me" {
        return (
            HttpStatus::from_u16(499).unwrap(),
            Json(json!({ "code": "canceled", "message": "client closed request" })),
        );
    }
    state.deployments.lock().unwrap().push(body);
    (HttpStatus::OK, Json(json!({ "deployment": {} })))
}

async fn list_assets(
    State(state): State<Arc<FakeRegistry>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.list_calls.fetch_add(1, Ordering::SeqCst);
    let page_size = body["pageSize"].as_u64().unwrap_or(500) as usize;
    let start: usize = body["pageToken"]
        .as_str()
        .and_then(|t| t.parse().ok())
        .unwrap_or(0);

    let assets = state.assets.lock().unwrap();
    let page: Vec<Value> = assets
        .iter()
        .skip(start)
        .take(page_size)
        .map(|(id, symbol)| json!({ "id": id, "symbol": symbol }))
        .collect();
    let next = start + page.len();
    let next_page_token = if next < assets.len() {
        next.to_string()
    } else {
        String::new()
    };
    Json(json!({ "assets": page, "nextPageToken": next_page_token }))
}

async fn spawn_registry(state: Arc<FakeRegistry>) -> String {
    let app = Router::new()
        .route(&format!("/{}/CreateChain", REGISTRY_SERVICE), post(create_chain))
        .route(&format!("/{}/CreateAsset", REGISTRY_SERVICE), post(create_asset))
        .route(
            &format!("/{}/CreateAssetDeployment", REGISTRY_SERVICE),
            post(create_deployment),
        )
        .route(&format!("/{}/ListAssets", REGISTRY_SERVICE), post(list_assets))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn asset_request(symbol: &str) -> CreateAssetRequest {
    CreateAssetRequest {
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        asset_type: AssetKind::FungibleToken,
        category: None,
        description: None,
        logo_url: None,
    }
}

// ============================================================================
// Client calls
// ============================================================================

#[tokio::test]
async fn create_asset_then_conflict() {
    let state = Arc::new(FakeRegistry::default());
    let url = spawn_registry(state.clone()).await;
    let client = RegistryApiClient::new(&url, Some("secret")).unwrap();

    let first = client.create_asset(asset_request("USDC")).await.unwrap();
    assert_eq!(
        first,
        CreateOutcome::Created {
            id: Some("asset-1".to_string())
        }
    );

    let second = client.create_asset(asset_request("USDC")).await.unwrap();
    assert_eq!(
        second,
        CreateOutcome::Conflict {
            detail: "asset USDC already exists".to_string()
        }
    );

    let auth = state.auth_headers.lock().unwrap().clone();
    assert_eq!(auth, vec!["Bearer secret", "Bearer secret"]);
}

#[tokio::test]
async fn create_asset_rejection_is_failure() {
    let state = Arc::new(FakeRegistry::default());
    let url = spawn_registry(state).await;
    let client = RegistryApiClient::new(&url, None).unwrap();

    let mut request = asset_request("BAD");
    request.logo_url = Some("ftp://logo".to_string());

    match client.create_asset(request).await.unwrap() {
        CreateOutcome::Failed(failure) => {
            assert_eq!(failure.code, StatusCode::InvalidArgument);
            assert_eq!(failure.message, "logo url rejected");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_uses_http_status() {
    let state = Arc::new(FakeRegistry::default());
    let url = spawn_registry(state).await;
    let client = RegistryApiClient::new(&url, None).unwrap();

    let outcome = client
        .create_chain(CreateChainRequest {
            chain_id: "CHAIN_TYPE_BROKEN".to_string(),
            name: "Broken".to_string(),
            block_explorer_url: None,
        })
        .await
        .unwrap();

    match outcome {
        CreateOutcome::Failed(failure) => assert_eq!(failure.code, StatusCode::Unavailable),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn canceled_call_is_fatal() {
    let state = Arc::new(FakeRegistry::default());
    let url = spawn_registry(state).await;
    let client = RegistryApiClient::new(&url, None).unwrap();

    let err = client
        .create_asset_deployment(CreateDeploymentRequest {
            asset_id: "asset-1".to_string(),
            chain_id: "ethereum".to_string(),
            contract_address: "cancel-me".to_string(),
            decimals: 18,
            is_native: false,
        })
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn unreachable_registry_is_item_failure() {
    let client = RegistryApiClient::new("http://127.0.0.1:1", None).unwrap();

    match client.create_asset(asset_request("ETH")).await.unwrap() {
        CreateOutcome::Failed(failure) => assert_eq!(failure.code, StatusCode::Unavailable),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(client.list_assets().await.is_err());
}

#[tokio::test]
async fn list_assets_follows_page_tokens() {
    let state = Arc::new(FakeRegistry::default());
    {
        let mut assets = state.assets.lock().unwrap();
        for (i, symbol) in ["ETH", "USDC", "SOL", "BNB", "DAI"].iter().enumerate() {
            assets.push((format!("asset-{}", i + 1), symbol.to_string()));
        }
    }
    let url = spawn_registry(state.clone()).await;
    let config = RegistryClientConfig {
        page_size: 2,
        ..RegistryClientConfig::default()
    };
    let client = RegistryApiClient::with_config(&url, None, config).unwrap();

    let assets = client.list_assets().await.unwrap();

    assert_eq!(assets.len(), 5);
    assert_eq!(assets[4].symbol, "DAI");
    assert_eq!(assets[4].asset_id, "asset-5");
    assert_eq!(state.list_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn list_assets_respects_max_pages() {
    let state = Arc::new(FakeRegistry::default());
    {
        let mut assets = state.assets.lock().unwrap();
        for i in 0..10 {
            assets.push((format!("asset-{}", i), format!("SYM{}", i)));
        }
    }
    let url = spawn_registry(state).await;
    let config = RegistryClientConfig {
        page_size: 1,
        max_pages: 3,
        ..RegistryClientConfig::default()
    };
    let client = RegistryApiClient::with_config(&url, None, config).unwrap();

    let err = client.list_assets().await.unwrap_err();
    assert!(err.to_string().contains("max pages"));
}

// ============================================================================
// End to end
// ============================================================================

#[tokio::test]
async fn seeding_run_against_fake_registry() {
    let state = Arc::new(FakeRegistry::default());
    let url = spawn_registry(state.clone()).await;
    let client = RegistryApiClient::new(&url, Some("secret")).unwrap();

    let source = StaticRecordSource::new(
        vec![
            ChainCandidate {
                chain_id: "ethereum".to_string(),
                display_name: "Ethereum".to_string(),
                chain_type: "CHAIN_TYPE_ETHEREUM".to_string(),
                native_asset_symbol: "ETH".to_string(),
                rpc_urls: vec![],
                block_explorer_url: "https://etherscan.io".to_string(),
            },
            ChainCandidate {
                chain_id: "broken".to_string(),
                display_name: "Broken".to_string(),
                chain_type: "CHAIN_TYPE_BROKEN".to_string(),
                native_asset_symbol: "BRK".to_string(),
                rpc_urls: vec![],
                block_explorer_url: String::new(),
            },
        ],
        vec![AssetCandidate {
            id: "ethereum".to_string(),
            symbol: "ETH".to_string(),
            display_name: "Ether".to_string(),
            source_type: "ASSET_TYPE_NATIVE".to_string(),
            category: Some(String::new()),
            description: None,
            logo_url: Some(String::new()),
            website_url: None,
            external_reference_id: Some("ethereum".to_string()),
            metadata: None,
        }],
        vec![DeploymentCandidate {
            asset_symbol: "ETH".to_string(),
            chain_id: "ethereum".to_string(),
            contract_address: ZERO_ADDRESS.to_string(),
            decimals: 18,
            is_native: true,
        }],
    );

    let orchestrator = SeedOrchestrator::new(Arc::new(NoOpProgressReporter));
    let first = orchestrator.run(&source, &client).await;

    assert!(!first.is_fatal());
    let chains = first.stage(StageKind::Chains).unwrap();
    assert_eq!((chains.created, chains.failed), (1, 1));
    assert_eq!(chains.failures[0].key, "broken");
    // Blank logo url is omitted, so the fake registry accepts the asset
    assert_eq!(first.stage(StageKind::Assets).unwrap().created, 1);
    assert_eq!(first.stage(StageKind::Deployments).unwrap().created, 1);

    let deployments = state.deployments.lock().unwrap().clone();
    assert_eq!(deployments[0]["assetId"], "asset-1");
    assert_eq!(deployments[0]["contractAddress"], "native");
    assert_eq!(deployments[0]["isNative"], true);

    let second = orchestrator.run(&source, &client).await;
    let assets = second.stage(StageKind::Assets).unwrap();
    assert_eq!(assets.skipped_duplicate, assets.attempted);
}
