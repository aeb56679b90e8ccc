//! Configuration loading

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CacheConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, ModerationConfig, RateLimitConfig, RedisConfig, ServerConfig,
};
