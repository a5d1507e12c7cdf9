#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use application::UseCases;
use infrastructure::{Infrastructure, InfrastructureConfig, TokenConfig, UuidIdGenerator};
use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::oneshot};
use web_api::{router, AppState};

pub const PASSWORD: &str = "secret";

pub fn token_config() -> TokenConfig {
    TokenConfig {
        access_token_key: "test-access-token-key-with-enough-length".into(),
        refresh_token_key: "test-refresh-token-key-with-enough-length".into(),
        access_token_age_seconds: 3000,
    }
}

fn test_config() -> InfrastructureConfig {
    InfrastructureConfig {
        database_url: "postgres://unused".into(),
        max_connections: 1,
        acquire_timeout: Duration::from_secs(1),
        bcrypt_cost: Some(4),
        token: token_config(),
    }
}

/// 基于内存存储的测试服务器，drop 时优雅关闭
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn spawn_server() -> TestServer {
    let infrastructure = Infrastructure::in_memory(&test_config(), Arc::new(UuidIdGenerator));
    let use_cases = Arc::new(UseCases::new(infrastructure.use_case_dependencies()));
    let state = AppState::new(use_cases, infrastructure.token_manager_trait());
    let app = router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(async {
                let _ = rx.await;
            })
            .await
            .expect("server error");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        client: Client::new(),
        shutdown: Some(tx),
    }
}

pub async fn json_body(response: Response) -> Value {
    response.json::<Value>().await.expect("json body")
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 注册用户并返回其 id
    pub async fn register(&self, username: &str) -> String {
        let response = self
            .client
            .post(self.url("/users"))
            .json(&json!({
                "username": username,
                "password": PASSWORD,
                "fullname": "Dicoding Indonesia",
            }))
            .send()
            .await
            .expect("register request");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        body["data"]["addedUser"]["id"]
            .as_str()
            .expect("user id")
            .to_owned()
    }

    /// 登录，返回 (accessToken, refreshToken)
    pub async fn login(&self, username: &str) -> (String, String) {
        let response = self
            .client
            .post(self.url("/authentications"))
            .json(&json!({ "username": username, "password": PASSWORD }))
            .send()
            .await
            .expect("login request");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        (
            body["data"]["accessToken"].as_str().expect("access").to_owned(),
            body["data"]["refreshToken"].as_str().expect("refresh").to_owned(),
        )
    }

    /// 注册并登录，返回访问令牌
    pub async fn user_token(&self, username: &str) -> String {
        self.register(username).await;
        self.login(username).await.0
    }

    pub async fn create_thread(&self, token: &str) -> String {
        let response = self
            .client
            .post(self.url("/threads"))
            .bearer_auth(token)
            .json(&json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
            .send()
            .await
            .expect("thread request");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        body["data"]["addedThread"]["id"]
            .as_str()
            .expect("thread id")
            .to_owned()
    }

    pub async fn create_comment(&self, token: &str, thread_id: &str, content: &str) -> String {
        let response = self
            .client
            .post(self.url(&format!("/threads/{thread_id}/comments")))
            .bearer_auth(token)
            .json(&json!({ "content": content }))
            .send()
            .await
            .expect("comment request");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        body["data"]["addedComment"]["id"]
            .as_str()
            .expect("comment id")
            .to_owned()
    }

    pub async fn create_reply(
        &self,
        token: &str,
        thread_id: &str,
        comment_id: &str,
        content: &str,
    ) -> String {
        let response = self
            .client
            .post(self.url(&format!(
                "/threads/{thread_id}/comments/{comment_id}/replies"
            )))
            .bearer_auth(token)
            .json(&json!({ "content": content }))
            .send()
            .await
            .expect("reply request");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        body["data"]["addedReply"]["id"]
            .as_str()
            .expect("reply id")
            .to_owned()
    }

    pub async fn thread_detail(&self, thread_id: &str) -> Value {
        let response = self
            .client
            .get(self.url(&format!("/threads/{thread_id}")))
            .send()
            .await
            .expect("detail request");
        assert_eq!(response.status(), StatusCode::OK);
        json_body(response).await
    }
}
