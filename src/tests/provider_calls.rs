#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::store::{TokenStore, TOKEN_KEY};
    use crate::tests::common::{mock_settings, sample_sell_request};
    use crate::{KktClient, MemoryStore};
    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;
    use serde_json::json;

    async fn client_with_token(server: &MockServer, token: &str) -> KktClient<MemoryStore> {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, token, 500).await;
        KktClient::new(mock_settings(&server.base_url()), store).unwrap()
    }

    #[tokio::test]
    async fn sell_attaches_token_and_returns_ack_unchanged() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/grp1/sell")
                    .header("Token", "xyz")
                    .header("Content-type", "application/json; charset=utf-8");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"error": null, "uuid": "u1", "status": "wait"}));
            })
            .await;

        let client = client_with_token(&server, "xyz").await;
        let request = sample_sell_request(&mock_settings(&server.base_url()));

        let ack = client.sell(&request).await.unwrap();
        mock.assert_async().await;
        assert_eq!(ack, json!({"error": null, "uuid": "u1", "status": "wait"}));
    }

    #[tokio::test]
    async fn sell_sends_the_receipt_document() {
        let server = MockServer::start_async().await;
        let settings = mock_settings(&server.base_url());
        let request = sample_sell_request(&settings);

        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/grp1/sell")
                    .json_body(serde_json::to_value(&request).unwrap());
                then.status(200).json_body(json!({"error": null, "uuid": "u2"}));
            })
            .await;

        let client = client_with_token(&server, "xyz").await;
        client.sell(&request).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn sell_rejection_maps_to_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/grp1/sell");
                then.status(200).json_body(json!({"error": "incoming document validation"}));
            })
            .await;

        let client = client_with_token(&server, "xyz").await;
        let request = sample_sell_request(&mock_settings(&server.base_url()));

        let err = client.sell(&request).await.unwrap_err();
        match err {
            Error::SellRejected(reason) => assert_eq!(reason, "incoming document validation"),
            other => panic!("expected SellRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn report_hits_uuid_path_with_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/grp1/report/u1").header("Token", "xyz");
                then.status(200)
                    .json_body(json!({"error": null, "uuid": "u1", "status": "done"}));
            })
            .await;

        let client = client_with_token(&server, "xyz").await;
        let status = client.report("u1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(status["status"], "done");
    }

    #[tokio::test]
    async fn report_rejection_maps_to_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/grp1/report/u1");
                then.status(200).json_body(json!({"error": "not found"}));
            })
            .await;

        let client = client_with_token(&server, "xyz").await;
        let err = client.report("u1").await.unwrap_err();
        match err {
            Error::ReportRejected(reason) => assert_eq!(reason, "not found"),
            other => panic!("expected ReportRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn expired_token_is_refreshed_before_the_next_call() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method(POST).path("/getToken");
                then.status(200).json_body(json!({"error": null, "token": "renewed"}));
            })
            .await;
        let sell = server
            .mock_async(|when, then| {
                when.method(POST).path("/grp1/sell").header("Token", "renewed");
                then.status(200).json_body(json!({"error": null, "uuid": "u3"}));
            })
            .await;

        // store is empty, as if the previous token's TTL elapsed
        let store = MemoryStore::new();
        let client = KktClient::new(mock_settings(&server.base_url()), store).unwrap();
        let request = sample_sell_request(&mock_settings(&server.base_url()));

        client.sell(&request).await.unwrap();
        auth.assert_async().await;
        sell.assert_async().await;
    }
}
