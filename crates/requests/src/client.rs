use serde::Serialize;
use tracing::debug;

use crate::{
    api::{error::RequestError, payloads::AuthUser, Endpoint},
    config::RequestConfig,
    location::OriginProvider,
    request::JsonRequest,
    transport::Transport,
};

/// JSON-over-HTTP calls against the chat backend
///
/// Every call sends `Content-Type: application/json` with credentials
/// included. The response is returned whatever its status, checking it is up
/// to the caller. Nothing is retried.
#[derive(Debug, Clone)]
pub struct RequestClient<T: Transport, O: OriginProvider> {
    config: RequestConfig,
    transport: T,
    origin: O,
}

impl<T: Transport, O: OriginProvider> RequestClient<T, O> {
    pub fn new(config: RequestConfig, transport: T, origin: O) -> Self {
        Self { config, transport, origin }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// POST `body` as json to `url`
    ///
    /// Fails with [`RequestError::Serialization`] without sending anything if
    /// `body` can't be represented as json
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T::Response, RequestError> {
        debug!("post_json({url})");
        let request = JsonRequest::post(url, body)?;
        self.transport.send(request).await
    }

    /// GET `url`
    pub async fn get_json(&self, url: &str) -> Result<T::Response, RequestError> {
        debug!("get_json({url})");
        self.transport.send(JsonRequest::get(url)).await
    }

    /// `<page protocol>//<backend host><path>`
    ///
    /// The host is used verbatim. An empty one gives `https:///user/me`, which
    /// a url parser reads as host `user` with path `/me`
    pub fn backend_url(&self, path: &str) -> Result<String, RequestError> {
        let protocol = self.origin.protocol()?;
        Ok(format!("{protocol}//{}{path}", self.config.backend_host()))
    }

    /// GET the logged in user from `/user/me`
    pub async fn request_profile(&self) -> Result<T::Response, RequestError> {
        let url = self.backend_url(Endpoint::UserMe.path())?;
        self.get_json(&url).await
    }

    pub async fn login(&self, user: &AuthUser) -> Result<T::Response, RequestError> {
        let url = self.backend_url(Endpoint::UserLogin.path())?;
        self.post_json(&url, user).await
    }

    pub async fn register(&self, user: &AuthUser) -> Result<T::Response, RequestError> {
        let url = self.backend_url(Endpoint::UserRegister.path())?;
        self.post_json(&url, user).await
    }

    /// Ends the session behind the current cookie
    pub async fn logout(&self) -> Result<T::Response, RequestError> {
        let url = self.backend_url(Endpoint::UserLogout.path())?;
        self.post_json(&url, &serde_json::Map::new()).await
    }

    /// GET another user by id. Needs a logged in session
    pub async fn user_info(&self, id: usize) -> Result<T::Response, RequestError> {
        let url = self.backend_url(Endpoint::UserInfo.path())?;
        self.get_json(&format!("{url}?id={id}")).await
    }
}

#[cfg(feature = "wasm")]
impl RequestClient<crate::transport::FetchTransport, crate::location::BrowserLocation> {
    /// Client for the current page using the compiled in backend host
    pub fn browser() -> Result<Self, RequestError> {
        crate::utils::tracing::configure_console_tracing_once();
        Ok(Self::new(
            RequestConfig::from_build_env()?,
            crate::transport::FetchTransport,
            crate::location::BrowserLocation,
        ))
    }
}

#[cfg(test)]
mod test {
    use futures::join;
    use http::Method;
    use serde::ser::{Error as _, Serializer};
    use serde_json::{json, Value};
    use tokio_test::block_on;

    use super::*;
    use crate::{
        api::payloads::User,
        location::FixedOrigin,
        request::Credentials,
        transport::{JsonResponse, MockResponse, RecordingTransport},
    };

    fn client(host: &str) -> (RequestClient<RecordingTransport, FixedOrigin>, RecordingTransport) {
        let transport = RecordingTransport::new();
        let client =
            RequestClient::new(RequestConfig::new(host), transport.clone(), FixedOrigin::https());
        (client, transport)
    }

    /// Refuses to serialize, the way a cyclic structure would
    struct Cyclic;

    impl Serialize for Cyclic {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cycle detected"))
        }
    }

    #[test]
    fn test_post_json_login_example() {
        let (client, transport) = client("api.chat");
        block_on(client.post_json("/login", &json!({"user": "a", "pass": "b"}))).unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let r = &requests[0];
        assert_eq!(r.method(), &Method::POST);
        assert_eq!(r.url(), "/login");
        assert_eq!(r.content_type(), Some("application/json"));
        assert_eq!(r.credentials(), Credentials::Include);
        assert_eq!(r.body(), Some(r#"{"user":"a","pass":"b"}"#));
    }

    #[test]
    fn test_post_json_body_round_trips() {
        let (client, transport) = client("api.chat");
        let bodies = [
            json!(null),
            json!([1, "two", 3.5, false]),
            json!({"nested": {"list": [], "map": {}}, "unicode": "olá"}),
        ];
        for body in &bodies {
            block_on(client.post_json("/echo", body)).unwrap();
        }

        let sent: Vec<Value> = transport
            .requests()
            .iter()
            .map(|r| serde_json::from_str(r.body().unwrap()).unwrap())
            .collect();
        assert_eq!(sent, bodies);
    }

    #[test]
    fn test_get_json_sends_no_body() {
        let (client, transport) = client("api.chat");
        block_on(client.get_json("http://api.chat/chat")).unwrap();

        let r = transport.last_request().unwrap();
        assert_eq!(r.method(), &Method::GET);
        assert_eq!(r.url(), "http://api.chat/chat");
        assert_eq!(r.content_type(), Some("application/json"));
        assert_eq!(r.credentials(), Credentials::Include);
        assert_eq!(r.body(), None);
    }

    #[test]
    fn test_unserializable_body_fails_before_sending() {
        let (client, transport) = client("api.chat");
        let err = block_on(client.post_json("/login", &Cyclic)).unwrap_err();

        assert!(matches!(err, RequestError::Serialization { .. }));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_transport_errors_propagate_unchanged() {
        let (client, transport) = client("api.chat");
        let offline = RequestError::Transport { message: "dns lookup failed".to_string() };
        transport.fail(offline.clone()).fail(offline.clone());

        let err = block_on(client.get_json("/chat")).unwrap_err();
        assert_eq!(err.to_string(), offline.to_string());
        assert!(matches!(err, RequestError::Transport { .. }));

        let err = block_on(client.post_json("/chat", &json!({}))).unwrap_err();
        assert_eq!(err.to_string(), offline.to_string());
        assert!(matches!(err, RequestError::Transport { .. }));
    }

    #[test]
    fn test_not_found_is_not_an_error() {
        let (client, transport) = client("api.chat");
        transport.reply(MockResponse::new(404).with_text("Usuario nao encontrado"));

        let response = block_on(client.get_json("/user/info?id=9")).unwrap();
        assert_eq!(response.status(), 404);
        assert!(!response.ok());
    }

    #[test]
    fn test_request_profile_url() {
        let transport = RecordingTransport::new();
        let client = RequestClient::new(
            RequestConfig::new("localhost:8080"),
            transport.clone(),
            FixedOrigin::http(),
        );
        block_on(client.request_profile()).unwrap();

        let r = transport.last_request().unwrap();
        assert_eq!(r.method(), &Method::GET);
        assert_eq!(r.url(), "http://localhost:8080/user/me");
        assert_eq!(r.credentials(), Credentials::Include);
        assert_eq!(r.body(), None);
    }

    #[test]
    fn test_request_profile_empty_host_is_not_validated() {
        let (client, transport) = client("");
        block_on(client.request_profile()).unwrap();
        assert_eq!(transport.last_request().unwrap().url(), "https:///user/me");
    }

    #[test]
    fn test_request_profile_decodes_user() {
        let (client, transport) = client("api.chat");
        let user = User {
            user_id: 3,
            user_nick: "bia".to_string(),
            user_name: Some("Beatriz".to_string()),
            user_status: None,
            user_email: None,
        };
        transport.reply(MockResponse::new(200).with_json(&user).unwrap());

        let response = block_on(client.request_profile()).unwrap();
        assert!(response.ok());
        assert!(response.is_json());
        assert_eq!(block_on(response.json::<User>()).unwrap(), user);
    }

    #[test]
    fn test_user_scope_calls() {
        let (client, transport) = client("api.chat");
        let user = AuthUser::new("bia", "segredo");
        block_on(async {
            client.register(&user).await.unwrap();
            client.login(&user).await.unwrap();
            client.user_info(12).await.unwrap();
            client.logout().await.unwrap();
        });

        let sent: Vec<(Method, String, Option<String>)> = transport
            .requests()
            .into_iter()
            .map(|r| (r.method().clone(), r.url().to_string(), r.body().map(str::to_owned)))
            .collect();
        let login_body = Some(r#"{"usuario":"bia","senha":"segredo"}"#.to_string());
        assert_eq!(sent, vec![
            (Method::POST, "https://api.chat/user/registrar".to_string(), login_body.clone()),
            (Method::POST, "https://api.chat/user/login".to_string(), login_body),
            (Method::GET, "https://api.chat/user/info?id=12".to_string(), None),
            (Method::POST, "https://api.chat/user/sair".to_string(), Some("{}".to_string())),
        ]);
    }

    #[test]
    fn test_concurrent_calls_are_independent() {
        let (client, transport) = client("api.chat");
        transport.reply(MockResponse::new(200)).reply(MockResponse::new(500));

        let (a, b) = block_on(async { join!(client.get_json("/a"), client.get_json("/b")) });
        assert_eq!(a.unwrap().status(), 200);
        assert_eq!(b.unwrap().status(), 500);
        assert_eq!(transport.requests().len(), 2);
    }
}
