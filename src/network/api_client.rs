//! Request builders for the CHAP endpoints the page talks to.
//!
//! Building a request and sending it are separate steps: `ApiClient` only
//! produces [`HttpRequest`] values, and a [`super::Transport`] executes them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Sent verbatim, without any re-encoding.
    pub body: Option<String>,
}

impl HttpRequest {
    fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            body: None,
        }
    }
}

// REST client for the workflow builder page
pub struct ApiClient<'a> {
    base: &'a str,
}

impl<'a> ApiClient<'a> {
    /// `base` is expected without a trailing slash (see `SessionContext`).
    pub fn new(base: &'a str) -> Self {
        Self { base }
    }

    // Workflow configuration text
    pub fn get_config(&self, workflow: &str) -> HttpRequest {
        HttpRequest::get(format!("{}/chap/config/{}", self.base, workflow))
    }

    // Persist edited configuration text
    pub fn save_config(&self, workflow: &str, text: &str) -> HttpRequest {
        HttpRequest {
            method: Method::Post,
            url: format!("{}/chap/config/{}", self.base, workflow),
            body: Some(text.to_string()),
        }
    }

    // Rendered documentation for a reader / writer / processor
    pub fn get_doc(&self, doc_id: &str) -> HttpRequest {
        HttpRequest::get(format!("{}/chap/doc/{}", self.base, doc_id))
    }

    // Ask the server to pack the workflow area into a tarball
    pub fn get_tarball(&self, workflow: &str) -> HttpRequest {
        HttpRequest::get(format!("{}/chap/tar/{}", self.base, workflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hang_off_the_base() {
        let api = ApiClient::new("https://chap.example.org");
        assert_eq!(
            api.get_config("basic").url,
            "https://chap.example.org/chap/config/basic"
        );
        assert_eq!(api.get_doc("CSVReader").url, "https://chap.example.org/chap/doc/CSVReader");
        assert_eq!(api.get_tarball("basic").url, "https://chap.example.org/chap/tar/basic");
        assert_eq!(api.get_tarball("basic").method, Method::Get);
    }

    #[test]
    fn save_posts_body_untouched() {
        let text = "key: value2\n# comment & <tag>\n";
        let request = ApiClient::new("").save_config("basic", text);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/chap/config/basic");
        assert_eq!(request.body.as_deref(), Some(text));
    }
}
