use serde_json::json;

use crate::mock::{compile, CompileRequest, CompileResponse};

/// Status code and JSON body, independent of any HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    fn json(status: u16, body: &impl serde::Serialize) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|err| {
            log::error!("failed to encode compile reply: {err}");
            String::from(r#"{"success":false}"#)
        });
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Handles a POSTed compile request body.
pub fn handle_compile_request(body: &str) -> HttpReply {
    let request: CompileRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("malformed compile request: {err}");
            return HttpReply::json(500, &CompileResponse::failed(err));
        }
    };

    if request.code.is_empty() || request.language.is_empty() {
        return HttpReply::json(
            400,
            &json!({ "success": false, "error": "Code and language are required" }),
        );
    }

    HttpReply::json(200, &compile(&request))
}
