use bold_api::{
    BoldClient, BoldError, ClientConfig, PublicDataQuery, ReturnFormat, SummaryDataType,
    SummaryStats, TaxonNameQuery,
};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BoldClient {
    BoldClient::with_config(ClientConfig::default().with_base_url(&server.uri()))
}

#[tokio::test]
async fn test_specimen_request_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API_Public/specimen"))
        .and(query_param("taxon", "Bombus|Apis"))
        .and(query_param("geo", "France"))
        .and(query_param("format", "tsv"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"col1\tcol2\n".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let query = PublicDataQuery::new()
        .taxon(["Bombus", "Apis"])
        .geo(["France"]);
    let body = client_for(&server).specimens(&query, None).await.unwrap();

    assert_eq!(body, b"col1\tcol2\n");
}

#[tokio::test]
async fn test_summary_json_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API_Public/stats"))
        .and(query_param("dataType", "overview"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"total_records": 7})),
        )
        .mount(&server)
        .await;

    let stats = client_for(&server)
        .summary_stats(
            &PublicDataQuery::new().taxon(["Bombus"]),
            Some(ReturnFormat::Json),
            SummaryDataType::Overview,
        )
        .await
        .unwrap();

    match stats {
        SummaryStats::Json(value) => assert_eq!(value["total_records"], 7),
        other => panic!("unexpected summary: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API_Tax/TaxonSearch"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .taxon_by_name(&TaxonNameQuery::new(["Diplura"]).fuzzy(true))
        .await
        .unwrap_err();

    match err {
        BoldError::Http { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, b"maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API_Tax/TaxonSearch"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = ClientConfig::default().with_base_url(&server.uri());
    config.timeout = Duration::from_millis(200);
    let client = BoldClient::with_config(config);

    let err = client
        .taxon_by_name(&TaxonNameQuery::new(["Diplura"]))
        .await
        .unwrap_err();

    assert!(matches!(err, BoldError::Transport(_)));
}
