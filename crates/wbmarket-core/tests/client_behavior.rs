//! Behavior-driven tests for the marketplace client.
//!
//! A recording transport stands in for the vendor so each test can check both
//! what was sent and how the reply was mapped.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use wbmarket_core::{
    ApiErrorKind, ApiKey, ClientConfig, HttpClient, HttpError, HttpRequest, HttpResponse,
    MarketplaceClient, Pagination, SupplyId, WarehouseIds,
};

const WAREHOUSES_JSON: &str = r#"[
    {"ID": 1, "name": "Alpha", "address": "ул. Первая, 1", "workTime": "24/7",
     "acceptsQR": true, "isActive": true, "isTransitActive": false},
    {"ID": 2, "name": "beta", "address": "ул. Вторая, 2", "workTime": "09:00-18:00",
     "acceptsQR": false, "isActive": false, "isTransitActive": true},
    {"ID": 3, "name": "Gamma", "address": "ул. Третья, 3", "workTime": "24/7",
     "acceptsQR": false, "isActive": true, "isTransitActive": true},
    {"ID": 4, "name": "Омск", "address": "ул. Четвёртая, 4", "workTime": "24/7",
     "acceptsQR": false, "isActive": true, "isTransitActive": false}
]"#;

const COEFFICIENTS_JSON: &str = r#"[
    {"date": "2024-04-11T00:00:00Z", "coefficient": 1, "warehouseID": 507,
     "warehouseName": "Коледино", "allowUnload": true, "boxTypeName": "Короба",
     "boxTypeID": 2, "isSortingCenter": false},
    {"date": "2024-04-12T00:00:00Z", "coefficient": 1, "warehouseID": 507,
     "warehouseName": "КОЛЕДИНО", "allowUnload": false, "boxTypeName": "Короба",
     "boxTypeID": 2, "isSortingCenter": false},
    {"date": "2024-04-13T00:00:00Z", "coefficient": 5, "warehouseID": 507,
     "warehouseName": "Коледино", "allowUnload": true, "boxTypeName": "Монопаллеты",
     "boxTypeID": 5, "isSortingCenter": false},
    {"date": "2024-04-14T00:00:00Z", "coefficient": null, "warehouseID": 507,
     "warehouseName": "коледино", "allowUnload": true, "boxTypeName": "Суперсейф",
     "boxTypeID": 6, "isSortingCenter": false},
    {"date": "2024-04-15T00:00:00Z", "coefficient": 1, "warehouseID": 117501,
     "warehouseName": "Подольск", "allowUnload": true, "boxTypeName": "Короба",
     "boxTypeID": 2, "isSortingCenter": false},
    {"date": "2024-04-16T00:00:00Z", "coefficient": 1.0, "warehouseID": 507,
     "warehouseName": "коледино", "allowUnload": true, "boxTypeName": "Короба",
     "boxTypeID": 2, "isSortingCenter": true}
]"#;

const SUPPLY_JSON: &str = r#"{
    "id": "WB-GI-166688565",
    "done": true,
    "createdAt": "2022-05-04T07:56:29Z",
    "closedAt": "2022-05-04T07:56:29Z",
    "scanDt": "2022-05-04T07:56:29Z",
    "name": "Test supply_1",
    "cargoType": 0
}"#;

struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(HttpResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(error: HttpError) -> Arc<Self> {
        Arc::new(Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    fn last_request(&self) -> HttpRequest {
        self.recorded_requests()
            .pop()
            .expect("at least one request should be recorded")
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

fn client_with(transport: Arc<RecordingHttpClient>) -> MarketplaceClient {
    let config = ClientConfig::new(ApiKey::new("test-key"))
        .with_marketplace_url("https://marketplace.test/api")
        .with_supplies_url("https://supplies.test/api")
        .with_timeout_ms(1_500);
    MarketplaceClient::with_http_client(config, transport)
}

// =============================================================================
// Successful responses
// =============================================================================

#[tokio::test]
async fn when_warehouses_respond_ok_every_field_is_mapped_by_key() {
    // Given: the supplies host returns a known warehouse list
    let transport = RecordingHttpClient::replying(200, WAREHOUSES_JSON);
    let client = client_with(transport.clone());

    // When: warehouses are fetched
    let warehouses = client.fetch_warehouses().await.expect("warehouses should load");

    // Then: all records and fields are mapped
    assert_eq!(warehouses.len(), 4);
    let beta = &warehouses[1];
    assert_eq!(beta.id, 2);
    assert_eq!(beta.name, "beta");
    assert_eq!(beta.address, "ул. Вторая, 2");
    assert_eq!(beta.work_time, "09:00-18:00");
    assert!(!beta.accepts_qr);
    assert!(!beta.is_active);
    assert!(beta.is_transit_active);

    let request = transport.last_request();
    assert_eq!(request.url, "https://supplies.test/api/v1/warehouses");
    assert!(request.query.is_empty());
}

#[tokio::test]
async fn every_request_carries_raw_api_key_and_json_content_type() {
    // Given: any successful call
    let transport = RecordingHttpClient::replying(200, "[]");
    let client = client_with(transport.clone());

    // When: a request is issued
    client.fetch_warehouses().await.expect("empty list is fine");

    // Then: the key is sent without a scheme prefix and the timeout is applied
    let request = transport.last_request();
    assert_eq!(
        request.headers.get("authorization").map(String::as_str),
        Some("test-key")
    );
    assert_eq!(
        request.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(request.timeout_ms, 1_500);
}

#[tokio::test]
async fn pagination_values_are_passed_through_unchanged() {
    // Given: the marketplace host returns one page
    let body = format!(r#"{{"next": 98765, "supplies": [{SUPPLY_JSON}]}}"#);
    let transport = RecordingHttpClient::replying(200, &body);
    let client = client_with(transport.clone());

    // When: supplies are requested with an explicit limit and cursor
    let supplies = client
        .fetch_supplies(250, 12345)
        .await
        .expect("supplies should load");

    // Then: limit and next reach the query string verbatim
    assert_eq!(supplies.len(), 1);
    assert_eq!(supplies[0].id, "WB-GI-166688565");
    let request = transport.last_request();
    assert_eq!(request.url, "https://marketplace.test/api/v3/supplies");
    assert_eq!(request.query_value("limit"), Some("250"));
    assert_eq!(request.query_value("next"), Some("12345"));
}

#[tokio::test]
async fn supplies_page_exposes_next_cursor() {
    let transport = RecordingHttpClient::replying(200, r#"{"next": 7, "supplies": []}"#);
    let client = client_with(transport);

    let page = client
        .fetch_supplies_page(Pagination::default())
        .await
        .expect("page should load");

    assert!(page.supplies.is_empty());
    assert_eq!(page.next, 7);
}

#[tokio::test]
async fn single_supply_is_fetched_by_encoded_id() {
    // Given: a supply id containing a path-reserved character
    let transport = RecordingHttpClient::replying(200, SUPPLY_JSON);
    let client = client_with(transport.clone());
    let id = SupplyId::parse("WB-GI/1").expect("valid id");

    // When: the supply is fetched
    let supply = client.fetch_supply(&id).await.expect("supply should load");

    // Then: the id is percent-encoded in the path and the record is mapped
    assert_eq!(
        transport.last_request().url,
        "https://marketplace.test/api/v3/supplies/WB-GI%2F1"
    );
    assert!(supply.done);
    assert_eq!(supply.name, "Test supply_1");
    assert_eq!(supply.cargo_type, 0);
    assert_eq!(supply.scan_dt.as_deref(), Some("2022-05-04T07:56:29Z"));
}

#[tokio::test]
async fn coefficient_filter_is_sent_only_when_ids_are_given() {
    let transport = RecordingHttpClient::replying(200, COEFFICIENTS_JSON);
    let client = client_with(transport.clone());

    client
        .fetch_acceptance_coefficients(None)
        .await
        .expect("all coefficients");
    client
        .fetch_acceptance_coefficients(Some(&WarehouseIds::default()))
        .await
        .expect("empty filter behaves like none");
    let ids: WarehouseIds = "302988,215020,301760".parse().expect("valid ids");
    let rows = client
        .fetch_acceptance_coefficients(Some(&ids))
        .await
        .expect("filtered coefficients");

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[0].url,
        "https://supplies.test/api/v1/acceptance/coefficients"
    );
    assert_eq!(requests[0].query_value("warehouseIDs"), None);
    assert_eq!(requests[1].query_value("warehouseIDs"), None);
    assert_eq!(
        requests[2].query_value("warehouseIDs"),
        Some("302988,215020,301760")
    );
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[3].coefficient, None);
}

// =============================================================================
// Client-side filters
// =============================================================================

#[tokio::test]
async fn find_warehouses_by_name_matches_substring_ignoring_case() {
    let transport = RecordingHttpClient::replying(200, WAREHOUSES_JSON);
    let client = client_with(transport);

    let names: Vec<String> = client
        .find_warehouses_by_name("MM")
        .await
        .expect("lookup should succeed")
        .into_iter()
        .map(|w| w.name)
        .collect();

    assert_eq!(names, vec![String::from("Gamma")]);

    let cyrillic = client
        .find_warehouses_by_name("омс")
        .await
        .expect("lookup should succeed");
    assert_eq!(cyrillic.len(), 1);
    assert_eq!(cyrillic[0].id, 4);
}

#[tokio::test]
async fn find_available_coefficients_keeps_only_unloadable_exact_matches() {
    // Given: rows with mixed unload flags, coefficients and name casing
    let transport = RecordingHttpClient::replying(200, COEFFICIENTS_JSON);
    let client = client_with(transport.clone());

    // When: searching for coefficient 1 at Коледино
    let rows = client
        .find_available_coefficients(1.0, "Коледино")
        .await
        .expect("lookup should succeed");

    // Then: only allowUnload rows with coefficient 1 at that warehouse survive
    let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-04-11T00:00:00Z", "2024-04-16T00:00:00Z"]);
    assert_eq!(transport.last_request().query_value("warehouseIDs"), None);
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn non_200_status_is_an_error_for_every_fetch() {
    // Given: the vendor rejects every call
    let transport = RecordingHttpClient::replying(
        500,
        r#"{"title":"internal","detail":"try later","status":500}"#,
    );
    let client = client_with(transport.clone());
    let id = SupplyId::parse("WB-GI-1").expect("valid id");

    // When / Then: each call returns an error value instead of panicking
    let errors = vec![
        client.fetch_supplies(1, 0).await.expect_err("supplies"),
        client.fetch_supply(&id).await.expect_err("supply"),
        client.fetch_warehouses().await.expect_err("warehouses"),
        client
            .fetch_acceptance_coefficients(None)
            .await
            .expect_err("coefficients"),
        client.find_warehouses_by_name("a").await.expect_err("find"),
        client
            .find_available_coefficients(1.0, "Коледино")
            .await
            .expect_err("available"),
    ];

    for error in &errors {
        assert_eq!(error.kind(), ApiErrorKind::Status);
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.message(), "internal: try later");
    }
    assert_eq!(transport.recorded_requests().len(), 6);
}

#[tokio::test]
async fn unauthorized_and_rate_limited_are_classified() {
    let client = client_with(RecordingHttpClient::replying(401, "{}"));
    let error = client.fetch_warehouses().await.expect_err("401");
    assert_eq!(error.kind(), ApiErrorKind::Unauthorized);
    assert_eq!(error.message(), "upstream returned status 401");

    let client = client_with(RecordingHttpClient::replying(
        429,
        r#"{"code":"TooManyRequests","message":"limit exceeded"}"#,
    ));
    let error = client.fetch_warehouses().await.expect_err("429");
    assert_eq!(error.kind(), ApiErrorKind::RateLimited);
    assert_eq!(error.message(), "TooManyRequests: limit exceeded");
}

#[tokio::test]
async fn transport_failure_is_surfaced_as_transport_error() {
    let client = client_with(RecordingHttpClient::failing(HttpError::new("connection failed: refused")));

    let error = client.fetch_warehouses().await.expect_err("transport");

    assert_eq!(error.kind(), ApiErrorKind::Transport);
    assert_eq!(error.message(), "connection failed: refused");
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn transport_timeout_is_classified_separately() {
    // Given: the transport gives up waiting for the vendor
    let client = client_with(RecordingHttpClient::failing(HttpError::timeout(
        "request timeout: deadline has elapsed",
    )));

    // When: any fetch is issued
    let error = client.fetch_warehouses().await.expect_err("timeout");

    // Then: callers can tell a timeout from other transport failures
    assert_eq!(error.kind(), ApiErrorKind::Timeout);
    assert_eq!(error.message(), "request timeout: deadline has elapsed");
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn unexpected_body_shape_is_a_decode_error() {
    let client = client_with(RecordingHttpClient::replying(200, r#"{"warehouses": []}"#));

    let error = client.fetch_warehouses().await.expect_err("decode");

    assert_eq!(error.kind(), ApiErrorKind::Decode);
}

#[tokio::test]
async fn invalid_limit_is_rejected_before_any_request() {
    let transport = RecordingHttpClient::replying(200, r#"{"next": 0, "supplies": []}"#);
    let client = client_with(transport.clone());

    let error = client.fetch_supplies(0, 0).await.expect_err("limit 0");

    assert_eq!(error.kind(), ApiErrorKind::InvalidRequest);
    assert!(error.message().contains("limit"), "{}", error.message());
    assert!(transport.recorded_requests().is_empty());
}
