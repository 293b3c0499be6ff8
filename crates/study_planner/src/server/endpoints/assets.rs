//! Browser UI assets, compiled into the binary.

use axum::{
    http::header,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../../../public/index.html");
const SCRIPT_JS: &str = include_str!("../../../public/script.js");
const STYLE_CSS: &str = include_str!("../../../public/style.css");

/// GET /
pub async fn get_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /script.js
pub async fn get_script() -> Response {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
        .into_response()
}

/// GET /style.css
pub async fn get_stylesheet() -> Response {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_content_type() {
        let response = get_script().await;
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/javascript; charset=utf-8"
        );
    }

    #[test]
    fn test_index_references_assets() {
        assert!(INDEX_HTML.contains("/script.js"));
        assert!(INDEX_HTML.contains("/style.css"));
        assert!(SCRIPT_JS.contains("\"/generate\""));
    }
}
