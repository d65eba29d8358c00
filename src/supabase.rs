/// Supabase (PostgREST) client for the `tools` table
/// Uses web-sys fetch in the browser; native builds report `RemoteError::Unavailable`

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::error::RemoteError;
use crate::store::{Filter, SelectQuery, TOOLS_TABLE, ToolStore};
use crate::tool_data::{NewTool, Tool, ToolPatch};

#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
}

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<String>,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TOOLS_TABLE)
    }

    /// Table URL with encoded query pairs
    pub fn endpoint(&self, pairs: &[(String, String)]) -> Result<String, RemoteError> {
        let mut url = Url::parse(&self.table_url())
            .map_err(|e| RemoteError::Transport(format!("bad Supabase URL: {}", e)))?;

        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key, value);
            }
        }

        Ok(url.to_string())
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn headers(&self, writes: bool) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("apikey", self.anon_key.clone()),
            ("Authorization", format!("Bearer {}", self.anon_key)),
        ];
        if writes {
            headers.push(("Content-Type", "application/json".to_string()));
            headers.push(("Prefer", "return=minimal".to_string()));
        }
        headers
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(
        &self,
        method: &str,
        url: &str,
        body: Option<String>,
    ) -> Result<String, RemoteError> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let headers = Headers::new().map_err(|e| RemoteError::Transport(format!("{:?}", e)))?;
        for (name, value) in self.headers(body.is_some()) {
            headers
                .set(name, &value)
                .map_err(|e| RemoteError::Transport(format!("{:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&headers);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| RemoteError::Transport(format!("request error: {:?}", e)))?;

        let window = web_sys::window().ok_or(RemoteError::Unavailable)?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| RemoteError::Transport(format!("fetch error: {:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| RemoteError::Decode("response is not a Response".to_string()))?;

        let text_promise = resp
            .text()
            .map_err(|e| RemoteError::Decode(format!("text promise error: {:?}", e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| RemoteError::Decode(format!("text error: {:?}", e)))?
            .as_string()
            .unwrap_or_default();

        if !resp.ok() {
            return Err(http_error(resp.status(), &text));
        }

        Ok(text)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(
        &self,
        _method: &str,
        _url: &str,
        _body: Option<String>,
    ) -> Result<String, RemoteError> {
        Err(RemoteError::Unavailable)
    }
}

/// Turn a non-2xx response into an error, preferring the PostgREST message
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn http_error(status: u16, body: &str) -> RemoteError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
            details,
        }) => match details {
            Some(details) if !details.is_empty() => format!("{} ({})", message, details),
            _ => message,
        },
        _ => body.to_string(),
    };

    RemoteError::Http { status, message }
}

fn encode<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, RemoteError> {
    serde_json::to_string(value).map_err(|e| RemoteError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ToolStore for SupabaseClient {
    async fn select(&self, query: &SelectQuery) -> Result<Vec<Tool>, RemoteError> {
        let url = self.endpoint(&query.to_query_pairs())?;
        let body = self.send("GET", &url, None).await?;

        serde_json::from_str(&body).map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn insert(&self, rows: &[NewTool]) -> Result<(), RemoteError> {
        let url = self.endpoint(&[])?;
        self.send("POST", &url, Some(encode(rows)?)).await?;
        Ok(())
    }

    async fn update(&self, patch: &ToolPatch, filter: &Filter) -> Result<(), RemoteError> {
        let url = self.endpoint(&[filter.to_query_pair()])?;
        self.send("PATCH", &url, Some(encode(patch)?)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Order;
    use futures::executor::block_on;

    fn create_test_client() -> SupabaseClient {
        SupabaseClient::new("https://abc.supabase.co/", "anon-key")
    }

    #[test]
    fn test_table_url_trims_slash() {
        assert_eq!(create_test_client().table_url(), "https://abc.supabase.co/rest/v1/tools");
    }

    #[test]
    fn test_endpoint_encodes_query() {
        let query = SelectQuery::all()
            .filter(Filter::Or(vec![
                Filter::contains("name", "back"),
                Filter::contains("description", "back"),
            ]))
            .order(Order::descending("created_at"));

        let url = create_test_client().endpoint(&query.to_query_pairs()).unwrap();

        assert_eq!(
            url,
            "https://abc.supabase.co/rest/v1/tools?select=*\
             &or=%28name.ilike.%25back%25%2Cdescription.ilike.%25back%25%29\
             &order=created_at.desc"
        );
    }

    #[test]
    fn test_endpoint_without_query() {
        let url = create_test_client().endpoint(&[]).unwrap();

        assert_eq!(url, "https://abc.supabase.co/rest/v1/tools");
    }

    #[test]
    fn test_endpoint_rejects_bad_base() {
        let client = SupabaseClient::new("not a url", "anon-key");

        assert!(matches!(client.endpoint(&[]), Err(RemoteError::Transport(_))));
    }

    #[test]
    fn test_write_headers() {
        let headers = create_test_client().headers(true);

        assert!(headers.contains(&("apikey", "anon-key".to_string())));
        assert!(headers.contains(&("Authorization", "Bearer anon-key".to_string())));
        assert!(headers.contains(&("Prefer", "return=minimal".to_string())));
        assert_eq!(create_test_client().headers(false).len(), 2);
    }

    #[test]
    fn test_http_error_uses_postgrest_message() {
        let body = r#"{"code":"23502","message":"null value in column \"url\"","details":null,"hint":null}"#;

        assert_eq!(
            http_error(400, body),
            RemoteError::Http {
                status: 400,
                message: "null value in column \"url\"".to_string(),
            }
        );
    }

    #[test]
    fn test_http_error_falls_back_to_body() {
        assert_eq!(
            http_error(502, "Bad Gateway"),
            RemoteError::Http {
                status: 502,
                message: "Bad Gateway".to_string(),
            }
        );
    }

    #[test]
    fn test_native_build_has_no_transport() {
        let result = block_on(create_test_client().select(&SelectQuery::all()));

        assert_eq!(result, Err(RemoteError::Unavailable));
    }
}
