use crate::domain::ports::{Clock, HttpResponse, HttpTransport, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

pub(crate) type Reply = std::result::Result<HttpResponse, TransportError>;

/// 依 URL 片段回傳預先排好的回應；最後一筆會一直重複
pub(crate) struct ScriptedTransport {
    routes: Vec<(String, Mutex<VecDeque<Reply>>)>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self {
            routes: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn always(reply: Reply) -> Self {
        Self::new().route("", vec![reply])
    }

    pub(crate) fn route(mut self, url_part: &str, replies: Vec<Reply>) -> Self {
        self.routes
            .push((url_part.to_string(), Mutex::new(replies.into())));
        self
    }

    pub(crate) fn status(status: u16) -> Reply {
        Ok(HttpResponse {
            status,
            body: String::new(),
        })
    }

    pub(crate) fn json(status: u16, body: &str) -> Reply {
        Ok(HttpResponse {
            status,
            body: body.to_string(),
        })
    }

    pub(crate) fn timeout() -> Reply {
        Err(TransportError::Timeout("operation timed out".to_string()))
    }

    pub(crate) async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    pub(crate) async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Reply {
        self.requests.lock().await.push(url.to_string());

        for (url_part, replies) in &self.routes {
            if url.contains(url_part.as_str()) {
                let mut replies = replies.lock().await;
                return match replies.len() {
                    0 => Err(TransportError::Other("no scripted reply".to_string())),
                    1 => replies[0].clone(),
                    _ => replies.pop_front().unwrap(),
                };
            }
        }

        Err(TransportError::Other(format!("no route for {}", url)))
    }
}

pub(crate) struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
