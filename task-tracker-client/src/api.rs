// task-tracker-client/src/api.rs

use crate::error::{ClientError, ClientResult};
use crate::model::{CreateTaskRequest, Task, UpdateTaskRequest};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// タスクAPIへのアクセス境界
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self) -> ClientResult<Vec<Task>>;
    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<Task>;
    async fn update_task(&self, id: i32, request: &UpdateTaskRequest) -> ClientResult<Task>;
    async fn delete_task(&self, id: i32) -> ClientResult<()>;
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    #[allow(dead_code)]
    message: String,
}

/// reqwestを使ったHTTP実装
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
    access_token: String,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.bearer_auth(&self.access_token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map_or_else(|_| status.to_string(), |body| body.message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        self.send(self.client.get(self.url("/tasks"))).await
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<Task> {
        self.send(self.client.post(self.url("/tasks")).json(request))
            .await
    }

    async fn update_task(&self, id: i32, request: &UpdateTaskRequest) -> ClientResult<Task> {
        self.send(
            self.client
                .put(self.url(&format!("/tasks/{}", id)))
                .json(request),
        )
        .await
    }

    async fn delete_task(&self, id: i32) -> ClientResult<()> {
        let _: DeleteResponse = self
            .send(self.client.delete(self.url(&format!("/tasks/{}", id))))
            .await?;
        Ok(())
    }
}
