// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

#[cfg(test)]
mod oauth_tests {
    use crate::common::http_stub::HttpStub;
    use crate::common::{Error, ErrorKind};
    use crate::log::{Severity, StringLogger};
    use crate::oauth::{AccessToken, ClientSecret, GoogleInstalledFlow, TokenCache, Url};
    use hyper::StatusCode;
    use std::io::Write;

    const INSTALLED_JSON: &str = r#"{
        "installed": {
            "client_id": "123-abc.apps.googleusercontent.com",
            "project_id": "caption-lister",
            "auth_uri": "https://accounts.google.com/o/oauth2/auth",
            "token_uri": "https://oauth2.googleapis.com/token",
            "auth_provider_x509_cert_url": "https://www.googleapis.com/oauth2/v1/certs",
            "client_secret": "shh",
            "redirect_uris": ["http://localhost"]
        }
    }"#;

    fn secret_for(server: &HttpStub) -> ClientSecret {
        let mut secret = ClientSecret::from_json(INSTALLED_JSON).expect("installed");
        secret.token_uri = format!("{}/token", server.base());
        secret
    }

    fn scopes() -> Vec<String> {
        vec![
            "https://www.googleapis.com/auth/youtube.force-ssl".to_string(),
            "https://www.googleapis.com/auth/youtube.readonly".to_string(),
        ]
    }

    #[test]
    fn client_secret_tests() {
        let secret = ClientSecret::from_json(INSTALLED_JSON).expect("installed");
        assert_eq!(secret.client_id, "123-abc.apps.googleusercontent.com");
        assert_eq!(secret.client_secret, "shh");
        assert_eq!(secret.redirect_uri(), "http://localhost");

        let web = ClientSecret::from_json(
            r#"{"web": {"client_id": "web-id", "client_secret": "web-secret"}}"#,
        )
        .expect("web");
        assert_eq!(web.client_id, "web-id");
        assert_eq!(web.token_uri, "https://oauth2.googleapis.com/token");
        assert_eq!(web.redirect_uri(), "urn:ietf:wg:oauth:2.0:oob");

        match ClientSecret::from_json(r#"{"service_account": {}}"#) {
            Err(e) => assert_eq!(e.kind(), ErrorKind::AuthFailure),
            Ok(secret) => panic!("unexpected {secret:?}"),
        }
        assert!(ClientSecret::from_json("not json").is_err());
    }

    #[test]
    fn client_secret_file_tests() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(INSTALLED_JSON.as_bytes()).expect("write");
        let secret = ClientSecret::from_file(file.path()).expect("from_file");
        assert_eq!(secret.client_secret, "shh");

        let missing = ClientSecret::from_file(std::path::Path::new("/nonexistent/secret.json"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }

    #[test]
    fn authorization_url_tests() {
        let secret = ClientSecret::from_json(INSTALLED_JSON).expect("installed");
        let flow = GoogleInstalledFlow::new(secret, StringLogger::default()).expect("flow");
        let url = flow.authorization_url(&scopes()).expect("url");
        assert_eq!(url.host_str(), Some("accounts.google.com"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let get = |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get("client_id").as_deref(), Some("123-abc.apps.googleusercontent.com"));
        assert_eq!(get("response_type").as_deref(), Some("code"));
        assert_eq!(get("access_type").as_deref(), Some("offline"));
        assert_eq!(get("redirect_uri").as_deref(), Some("http://localhost"));
        assert_eq!(get("scope"), Some(scopes().join(" ")));
    }

    #[tokio::test]
    async fn token_precondition_tests() {
        let secret = ClientSecret::from_json(INSTALLED_JSON).expect("installed");
        let flow = GoogleInstalledFlow::new(secret, StringLogger::default()).expect("flow");
        let never = |_: &Url| -> Result<String, Error> { panic!("prompt must not be shown") };
        match flow.token(&[], &never).await {
            Err(e) => assert_eq!(e.kind(), ErrorKind::PreconditionMissing),
            Ok(token) => panic!("unexpected {token:?}"),
        }

        let blank = |_: &Url| -> Result<String, Error> { Ok("  \n".to_string()) };
        match flow.token(&scopes(), &blank).await {
            Err(Error::Auth(mesg)) => assert!(mesg.contains("no authorization code")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn token_cache_tests() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = TokenCache::new(dir.path().join("token.json"));
        assert!(cache.load().is_none());

        let token = AccessToken {
            access_token: "ya29.abc".to_string(),
            refresh_token: Some("1//refresh".to_string()),
            expires_in: 3599,
            scope: None,
        };
        cache.store(&token).expect("store");
        assert_eq!(cache.load(), Some(token));

        std::fs::write(cache.path(), "garbage").expect("write");
        assert!(cache.load().is_none());
    }

    #[test]
    fn access_token_tests() {
        let token = AccessToken::from_json(
            r#"{"access_token": "ya29.new", "expires_in": 3599, "token_type": "Bearer"}"#,
        )
        .expect("parse");
        assert_eq!(token.refresh_token, None);
        let token = token.or_refresh_token(Some("1//kept".to_string()));
        assert_eq!(token.refresh_token.as_deref(), Some("1//kept"));

        let json = serde_json::to_string(&AccessToken {
            access_token: "t".to_string(),
            ..Default::default()
        })
        .expect("serialize");
        assert_eq!(json, r#"{"access_token":"t"}"#);

        assert!(AccessToken::from_json("{}").is_err());
    }

    #[tokio::test]
    async fn refresh_cached_token_tests() {
        let server = HttpStub::start(vec![(
            StatusCode::OK,
            r#"{"access_token": "ya29.fresh", "expires_in": 3599, "token_type": "Bearer"}"#,
        )])
        .await;
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = TokenCache::new(dir.path().join("token.json"));
        cache
            .store(&AccessToken {
                access_token: "ya29.stale".to_string(),
                refresh_token: Some("1//cached".to_string()),
                ..Default::default()
            })
            .expect("store");

        let flow = GoogleInstalledFlow::new(secret_for(&server), StringLogger::default())
            .expect("flow")
            .token_cache(Some(cache.clone()));
        let never = |_: &Url| -> Result<String, Error> { panic!("prompt must not be shown") };
        let token = flow.token(&scopes(), &never).await.expect("token");
        assert_eq!(token.access_token, "ya29.fresh");
        assert_eq!(token.refresh_token.as_deref(), Some("1//cached"));
        assert_eq!(cache.load(), Some(token));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("POST /token HTTP/1.1\r\n"), "{}", requests[0]);
        assert!(requests[0]
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(requests[0].contains("grant_type=refresh_token"));
        assert!(requests[0].contains("refresh_token=1%2F%2Fcached"));
        assert!(requests[0].contains("client_id=123-abc.apps.googleusercontent.com"));
    }

    #[tokio::test]
    async fn rejected_refresh_tests() {
        let server = HttpStub::start(vec![
            (
                StatusCode::BAD_REQUEST,
                r#"{"error": "invalid_grant", "error_description": "Token has been expired or revoked."}"#,
            ),
            (
                StatusCode::OK,
                r#"{"access_token": "ya29.consented", "refresh_token": "1//new", "expires_in": 3599}"#,
            ),
        ])
        .await;
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = TokenCache::new(dir.path().join("token.json"));
        cache
            .store(&AccessToken {
                access_token: "ya29.stale".to_string(),
                refresh_token: Some("1//revoked".to_string()),
                ..Default::default()
            })
            .expect("store");

        let logger = StringLogger::default();
        let flow = GoogleInstalledFlow::new(secret_for(&server), logger.clone())
            .expect("flow")
            .token_cache(Some(cache.clone()));
        let code = |url: &Url| -> Result<String, Error> {
            assert!(url.as_str().contains("access_type=offline"));
            Ok("4/consent".to_string())
        };
        let token = flow.token(&scopes(), &code).await.expect("token");
        assert_eq!(token.access_token, "ya29.consented");
        assert_eq!(cache.load().and_then(|t| t.refresh_token).as_deref(), Some("1//new"));

        let warnings = logger.records_at(Severity::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].line.contains("invalid_grant"));

        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].contains("grant_type=refresh_token"));
        assert!(requests[1].contains("grant_type=authorization_code"));
        assert!(requests[1].contains("code=4%2Fconsent"));
    }

    #[tokio::test]
    async fn token_post_failure_tests() {
        let server = HttpStub::start(vec![(
            StatusCode::UNAUTHORIZED,
            r#"{"error": "invalid_client"}"#,
        )])
        .await;
        let flow = GoogleInstalledFlow::new(secret_for(&server), StringLogger::default())
            .expect("flow");
        match flow.exchange_code("4/code").await {
            Err(Error::Auth(mesg)) => assert!(mesg.contains("invalid_client"), "{mesg}"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
