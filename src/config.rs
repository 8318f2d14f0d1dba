use axum::http::{HeaderValue, Method, header};
use clap::Parser;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS_ORIGINでどのオリジンも許可することを表す値
pub const ANY_ORIGIN: &str = "*";

/// 設定エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// HTTPヘッダー値として不正なオリジン
    #[error("Invalid CORS origin: {origin}")]
    InvalidCorsOrigin {
        origin: String,
        #[source]
        source: header::InvalidHeaderValue,
    },
}

/// サーバー設定
///
/// コマンドライン引数、または同名の環境変数から読み込む。
#[derive(Parser, Debug, Clone)]
#[clap(name = "books-api")]
#[clap(about = "In-memory Books REST API", long_about = None)]
pub struct AppConfig {
    /// Host to bind to
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[clap(short, long, env = "PORT", default_value = "4000")]
    pub port: u16,

    /// Allowed CORS origin ("*" allows any origin)
    #[clap(long, env = "CORS_ORIGIN", default_value = ANY_ORIGIN)]
    pub cors_origin: String,
}

impl AppConfig {
    /// 待ち受けアドレス（host:port）
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 設定されたオリジンに対するCORSレイヤー
    ///
    /// 許可メソッドは GET / POST / PUT / DELETE。
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let origin = if self.cors_origin == ANY_ORIGIN {
            AllowOrigin::any()
        } else {
            let value = HeaderValue::from_str(&self.cors_origin).map_err(|source| {
                ConfigError::InvalidCorsOrigin {
                    origin: self.cors_origin.clone(),
                    source,
                }
            })?;
            AllowOrigin::exact(value)
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("books-api").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_explicit_arguments() {
        let config = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--cors-origin",
            "http://localhost:3000",
        ]);

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.cors_origin, "http://localhost:3000");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = AppConfig::try_parse_from(["books-api", "--port", "not-a-port"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cors_layer_accepts_wildcard_and_exact_origin() {
        let mut config = parse(&["--cors-origin", "*"]);
        assert!(config.cors_layer().is_ok());

        config.cors_origin = "https://books.example.com".to_string();
        assert!(config.cors_layer().is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let mut config = parse(&[]);
        config.cors_origin = "bad\norigin".to_string();

        let err = config.cors_layer().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCorsOrigin { .. }));
    }
}
