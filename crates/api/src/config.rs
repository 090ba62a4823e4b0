/// Fallback CORS allow-list: local dev frontend plus the production host.
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:34568,http://127.0.0.1:34568,http://45.120.177.170:34568,https://45.120.177.170:34568,http://45.120.177.170,https://45.120.177.170";

/// Fallback frontend origin URLs (the dev server and the hosted frontend).
const DEFAULT_FRONTEND_URLS: &str = "http://localhost:34568,http://127.0.0.1:34568,http://45.120.177.170:34568,https://45.120.177.170:34568";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables (or a `.env` file picked up by
/// `dotenvy`). This is the single configuration source for the process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `34567`).
    pub port: u16,
    /// Selects a verbose fallback log filter when `RUST_LOG` is unset.
    pub debug: bool,
    /// Public IP the service is hosted on.
    pub production_ip: String,
    /// Frontend origin URLs, parsed from comma-separated `FRONTEND_URLS`.
    pub frontend_urls: Vec<String>,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Default generated-image width in pixels.
    pub default_image_width: u32,
    /// Default generated-image height in pixels.
    pub default_image_height: u32,
    /// Maximum accepted screenshot width in pixels.
    pub max_image_width: u32,
    /// Maximum accepted screenshot height in pixels.
    pub max_image_height: u32,
    /// Directory generated images would be written to. The stub generator
    /// never writes files; the directory is configuration surface only.
    pub generated_images_dir: String,
    /// Directory for static assets.
    pub static_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `34567`                         |
    /// | `DEBUG`                | `true`                          |
    /// | `PRODUCTION_IP`        | `45.120.177.170`                |
    /// | `FRONTEND_URLS`        | local + production frontend     |
    /// | `CORS_ORIGINS`         | frontend URLs + production host |
    /// | `DEFAULT_IMAGE_WIDTH`  | `512`                           |
    /// | `DEFAULT_IMAGE_HEIGHT` | `512`                           |
    /// | `MAX_IMAGE_WIDTH`      | `1024`                          |
    /// | `MAX_IMAGE_HEIGHT`     | `1024`                          |
    /// | `GENERATED_IMAGES_DIR` | `generated_images`              |
    /// | `STATIC_DIR`           | `static`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "34567".into())
            .parse()
            .expect("PORT must be a valid u16");

        let debug: bool = std::env::var("DEBUG")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("DEBUG must be true or false");

        let production_ip =
            std::env::var("PRODUCTION_IP").unwrap_or_else(|_| "45.120.177.170".into());

        let frontend_urls = parse_list(
            &std::env::var("FRONTEND_URLS").unwrap_or_else(|_| DEFAULT_FRONTEND_URLS.into()),
        );

        let cors_origins = parse_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
        );

        let default_image_width: u32 = std::env::var("DEFAULT_IMAGE_WIDTH")
            .unwrap_or_else(|_| "512".into())
            .parse()
            .expect("DEFAULT_IMAGE_WIDTH must be a valid u32");

        let default_image_height: u32 = std::env::var("DEFAULT_IMAGE_HEIGHT")
            .unwrap_or_else(|_| "512".into())
            .parse()
            .expect("DEFAULT_IMAGE_HEIGHT must be a valid u32");

        let max_image_width: u32 = std::env::var("MAX_IMAGE_WIDTH")
            .unwrap_or_else(|_| "1024".into())
            .parse()
            .expect("MAX_IMAGE_WIDTH must be a valid u32");

        let max_image_height: u32 = std::env::var("MAX_IMAGE_HEIGHT")
            .unwrap_or_else(|_| "1024".into())
            .parse()
            .expect("MAX_IMAGE_HEIGHT must be a valid u32");

        let generated_images_dir =
            std::env::var("GENERATED_IMAGES_DIR").unwrap_or_else(|_| "generated_images".into());

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        Self {
            host,
            port,
            debug,
            production_ip,
            frontend_urls,
            cors_origins,
            default_image_width,
            default_image_height,
            max_image_width,
            max_image_height,
            generated_images_dir,
            static_dir,
        }
    }
}

/// Split a comma-separated env value into trimmed, non-empty entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
