use vlc_api::{ApiError, Credentials, HttpClient, PlayOption, Transport, VlcClient};
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// HttpClient tests
// ---------------------------------------------------------------------------

mod http_client {
    use super::*;

    #[test]
    fn new_with_valid_url() {
        let client = HttpClient::new("http://localhost:8080", Credentials::password("secret"));
        assert!(client.is_ok());
    }

    #[test]
    fn new_with_invalid_url() {
        let result = HttpClient::new("not a url", Credentials::default());
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)), "got: {err}");
    }

    #[test]
    fn base_url_trims_trailing_slash() {
        let client = HttpClient::new("http://example.com:8080/", Credentials::default()).unwrap();
        assert_eq!(client.base_url(), "http://example.com:8080");
    }

    #[test]
    fn debug_impl_hides_credentials() {
        let client =
            HttpClient::new("http://example.com:8080", Credentials::new("user", "hunter2")).unwrap();
        let debug = format!("{client:?}");
        assert!(
            debug.contains("http://example.com:8080"),
            "Debug output should contain base_url, got: {debug}"
        );
        assert!(
            !debug.contains("hunter2"),
            "Debug output must not contain the password, got: {debug}"
        );
    }

    #[tokio::test]
    async fn get_returns_body_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/example"))
            .and(basic_auth("", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string("response"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&server.uri(), Credentials::password("secret")).unwrap();
        let body = client.get("example").await.unwrap();
        assert_eq!(body, b"response");
    }

    #[tokio::test]
    async fn get_sends_any_password_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/status.json"))
            .and(basic_auth("us\ter", "pa\x01ss\nword"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(
            &server.uri(),
            Credentials::new("us\ter", "pa\x01ss\nword"),
        )
        .unwrap();
        let body = client.get("requests/status.json").await.unwrap();
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn get_returns_api_error_on_401() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/status.json"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = HttpClient::new(&server.uri(), Credentials::password("wrong")).unwrap();
        match client.get("requests/status.json").await.unwrap_err() {
            ApiError::ApiResponse { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized");
            }
            other => panic!("expected ApiResponse, got: {other}"),
        }
    }

    #[tokio::test]
    async fn get_accepts_any_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/status.json"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = HttpClient::new(&server.uri(), Credentials::default()).unwrap();
        let body = client.get("requests/status.json").await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn get_returns_request_error_when_unreachable() {
        // Nothing listens on port 1.
        let client = HttpClient::new("http://127.0.0.1:1", Credentials::default()).unwrap();
        let err = client.get("requests/status.json").await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)), "got: {err}");
    }
}

// ---------------------------------------------------------------------------
// VlcClient over HTTP
// ---------------------------------------------------------------------------

mod vlc_client {
    use super::*;

    async fn connect(server: &MockServer) -> VlcClient {
        VlcClient::connect(&server.uri(), Credentials::password("secret")).unwrap()
    }

    fn status_json() -> serde_json::Value {
        serde_json::json!({
            "fullscreen": 0,
            "apiversion": 3,
            "currentplid": 4,
            "time": 12,
            "volume": 256,
            "length": 215,
            "rate": 1.0,
            "state": "paused",
            "loop": false,
            "random": true,
            "repeat": false,
            "version": "3.0.20 Vetinari",
            "position": 0.05,
            "equalizer": [],
            "information": {
                "chapter": 0,
                "chapters": [],
                "title": 0,
                "titles": [],
                "category": {
                    "meta": {"filename": "a.mp3", "title": "A"},
                    "Stream 0": {"Type": "Audio", "Codec": "MPEG Audio layer 1/2 (mpga)", "Sample_rate": "44100 Hz"}
                }
            },
            "stats": {"inputbitrate": 0.04, "readbytes": 120000, "decodedaudio": 900}
        })
    }

    #[tokio::test]
    async fn status_full_stack() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/status.json"))
            .and(basic_auth("", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_json()))
            .expect(1)
            .mount(&server)
            .await;

        let status = connect(&server).await.status().await.unwrap();
        assert_eq!(status.state, "paused");
        assert_eq!(status.volume, 256);
        assert!(status.random);
        assert!(!status.fullscreen);
        assert_eq!(status.current_plid, 4);

        let meta = status.category("meta").unwrap();
        assert_eq!(meta.filename.as_deref(), Some("a.mp3"));
        let stream = status.category("Stream 0").unwrap();
        assert_eq!(stream.sample_rate.as_deref(), Some("44100 Hz"));

        let stats = status.stats.unwrap();
        assert_eq!(stats.read_bytes, 120_000);
        assert_eq!(stats.decoded_audio, 900);
    }

    #[tokio::test]
    async fn play_source_sends_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/status.json"))
            .and(query_param("command", "in_play"))
            .and(query_param("input", "file:///music/my song.mp3"))
            .and(query_param("option", "noaudio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_json()))
            .expect(1)
            .mount(&server)
            .await;

        let vlc = connect(&server).await;
        vlc.play_source("file:///music/my song.mp3", Some(PlayOption::NoAudio))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn sort_playlist_sends_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/status.json"))
            .and(query_param("command", "pl_sort"))
            .and(query_param("id", "1"))
            .and(query_param("val", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_json()))
            .expect(1)
            .mount(&server)
            .await;

        connect(&server).await.sort_playlist(1, 3).await.unwrap();
    }

    #[tokio::test]
    async fn invalid_volume_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_json()))
            .expect(0)
            .mount(&server)
            .await;

        let err = connect(&server).await.set_volume("loud").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "got: {err}");
    }

    #[tokio::test]
    async fn playlist_full_stack() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/playlist.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ro": "rw", "type": "node", "name": "", "id": "0",
                "children": [{
                    "ro": "ro", "type": "node", "name": "Playlist", "id": "1",
                    "children": [{
                        "ro": "rw", "type": "leaf", "name": "a.mp3", "id": "4",
                        "uri": "file:///a.mp3", "duration": 215, "current": "current"
                    }]
                }]
            })))
            .mount(&server)
            .await;

        let playlist = connect(&server).await.playlist().await.unwrap();
        let current = playlist.current_item().unwrap();
        assert_eq!(current.name, "a.mp3");
    }

    #[tokio::test]
    async fn browse_uri_full_stack() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/browse.json"))
            .and(query_param("uri", "file:///music"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "element": [
                    {"type": "dir", "path": "/music/..", "name": "..", "uri": "file:///"},
                    {"type": "file", "path": "/music/a.mp3", "name": "a.mp3",
                     "uri": "file:///music/a.mp3", "size": 4096, "mode": 33188}
                ]
            })))
            .mount(&server)
            .await;

        let browse = connect(&server).await.browse_uri("file:///music").await.unwrap();
        assert_eq!(browse.elements.len(), 2);
        assert!(browse.elements[0].is_dir());
        assert_eq!(browse.elements[1].size, 4096);
    }

    #[tokio::test]
    async fn vlm_command_full_stack() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/vlm_cmd.xml"))
            .and(query_param("command", "show media"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"yes\" ?><vlm><error></error></vlm>"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let vlm = connect(&server).await.run_vlm_command("show media").await.unwrap();
        assert!(!vlm.is_error());
    }

    #[tokio::test]
    async fn vlm_html_page_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/vlm.xml"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body><error>gateway login</error></body></html>"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = connect(&server).await.vlm_elements().await.unwrap_err();
        assert!(matches!(err, ApiError::Xml(_)), "got: {err}");
    }

    #[tokio::test]
    async fn status_error_surfaces_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/status.json"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let err = connect(&server).await.status().await.unwrap_err();
        assert!(matches!(err, ApiError::ApiResponse { status: 500, .. }), "got: {err}");
    }
}
