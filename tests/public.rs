#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

mod common;

mod api_version {
    use httpmock::{Method::GET, MockServer};
    use nicehash_client_sdk::error::{ApiError, Kind};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::create_unauthenticated;

    #[tokio::test]
    async fn api_version_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_unauthenticated(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(StatusCode::OK).json_body(json!({
                "result": {"api_version": "1.2.7"},
                "method": null
            }));
        });

        let version = client.api_version().await?;

        assert_eq!(version, "1.2.7");
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn api_version_missing_field_should_fail() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_unauthenticated(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(StatusCode::OK)
                .json_body(json!({"result": {"version": "1.2.7"}}));
        });

        let err = client.api_version().await.unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteResponse);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn api_version_in_band_error_should_fail() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_unauthenticated(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(StatusCode::OK)
                .json_body(json!({"result": {"error": "Service unavailable"}}));
        });

        let err = client.api_version().await.unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteResponse);
        assert_eq!(
            err.downcast_ref::<ApiError>().unwrap().message,
            "Service unavailable"
        );
        mock.assert();

        Ok(())
    }
}

mod profitability {
    use httpmock::{Method::GET, MockServer};
    use nicehash_client_sdk::error::Kind;
    use nicehash_client_sdk::types::Location;
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::create_unauthenticated;

    #[tokio::test]
    async fn profitability_should_key_by_algorithm_name() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_unauthenticated(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api")
                .query_param("method", "stats.global.current")
                .query_param("location", "0");
            then.status(StatusCode::OK).json_body(json!({
                "result": {"stats": [{"algo": 0, "price": 1.5}, {"algo": 3, "price": 2.0}]}
            }));
        });

        let profitability = client.profitability("europe").await?;

        assert_eq!(
            serde_json::to_value(&profitability)?,
            json!({"Scrypt": {"price": 1.5}, "X11": {"price": 2.0}})
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn profitability_global_should_send_empty_location() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_unauthenticated(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api")
                .query_param("method", "stats.global.current")
                .query_param("location", "");
            then.status(StatusCode::OK).json_body(json!({
                "result": {"stats": [
                    {"profitability_above_ltc": "-4.45", "price": "0.0129", "profitability_ltc": "0.0135", "algo": 20, "speed": "2390.81"}
                ]},
                "method": "stats.global.current"
            }));
        });

        let profitability = client.profitability(Location::Global).await?;

        let stats = &profitability["DaggerHashimoto"];
        assert_eq!(stats["price"], "0.0129");
        assert_eq!(stats["speed"], "2390.81");
        assert!(!stats.contains_key("algo"));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn profitability_unknown_algorithm_index_should_fail() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_unauthenticated(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(StatusCode::OK).json_body(json!({
                "result": {"stats": [{"algo": 0, "price": 1.5}, {"algo": 99, "price": 2.0}]}
            }));
        });

        let err = client.profitability(1).await.unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteResponse);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn profitability_unknown_location_should_not_send() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_unauthenticated(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(StatusCode::OK)
                .json_body(json!({"result": {"stats": []}}));
        });

        let err = client.profitability("mars").await.unwrap_err();

        assert_eq!(err.kind(), Kind::UnknownLocation);
        mock.assert_calls(0);

        Ok(())
    }
}

mod transport {
    use std::time::Duration;

    use httpmock::{Method::GET, MockServer};
    use nicehash_client_sdk::error::{Kind, Status};
    use nicehash_client_sdk::{Client, Config};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::create_unauthenticated;

    #[tokio::test]
    async fn server_error_should_be_remote_request() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_unauthenticated(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(StatusCode::INTERNAL_SERVER_ERROR)
                .body("maintenance");
        });

        let err = client.api_version().await.unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteRequest);
        let status = err.downcast_ref::<Status>().unwrap();
        assert_eq!(status.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status.message, "maintenance");
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn non_json_body_should_be_remote_response() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_unauthenticated(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(StatusCode::OK).body("<html>busy</html>");
        });

        let err = client.balance().await.unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteResponse);
        let source = err.downcast_ref::<reqwest::Error>().unwrap();
        assert!(source.is_decode());
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn timeout_should_be_remote_request() -> anyhow::Result<()> {
        let server = MockServer::start();
        let config = Config::builder()
            .timeout(Duration::from_millis(100))
            .build();
        let client = Client::new(&server.base_url(), config)?;

        server.mock(|when, then| {
            when.method(GET).path("/api");
            then.status(StatusCode::OK)
                .delay(Duration::from_secs(2))
                .json_body(json!({"result": {"api_version": "1.2.7"}}));
        });

        let err = client.api_version().await.unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteRequest);

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_host_should_be_remote_request() -> anyhow::Result<()> {
        // Port 9 (discard) on localhost is not expected to be listening
        let client = Client::new("http://127.0.0.1:9/", Config::default())?;

        let err = client.api_version().await.unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteRequest);

        Ok(())
    }
}
