use super::*;

fn test_client(base_url: &str) -> MarketClient {
    MarketClient::with_base_url("test-token", 30, "mktsync-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn campaign_url_appends_to_base() {
    let client = test_client("https://api.partner.market.yandex.ru");
    let url = client.campaign_url("2100", "offers/stocks").unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.partner.market.yandex.ru/campaigns/2100/offers/stocks"
    );
}

#[test]
fn campaign_url_keeps_base_path_prefix() {
    let client = test_client("http://127.0.0.1:8080/proxy/");
    let url = client
        .campaign_url("7", "offer-prices/updates")
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:8080/proxy/campaigns/7/offer-prices/updates"
    );
}

#[test]
fn with_base_url_rejects_relative_url() {
    let result = MarketClient::with_base_url("t", 30, "ua", "not a url");
    assert!(
        matches!(result, Err(MarketError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn decode_reports_context() {
    let err = MarketClient::decode::<ApiResponse<OfferMappingPage>, _>("{", || {
        "offer-mapping-entries(campaign=1)".to_string()
    })
    .unwrap_err();
    assert!(
        matches!(err, MarketError::Deserialize { ref context, .. } if context.contains("campaign=1")),
        "got: {err:?}"
    );
}

#[test]
fn decode_keeps_only_the_result_payload() {
    let body = r#"{"status":"OK","result":{"offerMappingEntries":[{"offer":{"shopSku":"A"}}],"paging":{}}}"#;
    let envelope =
        MarketClient::decode::<ApiResponse<OfferMappingPage>, _>(body, || "page".to_string())
            .unwrap();
    assert_eq!(envelope.result.offer_mapping_entries.len(), 1);
    assert!(envelope.result.paging.next_page_token.is_none());
}
