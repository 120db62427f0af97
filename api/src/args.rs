use clap::{Args as ClapArgs, Parser};
use pantry_core::domain::common::{
    AuthConfig, DatabaseConfig, ObjectStorageConfig, PantryConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pantry-api", about = "Storefront and meal-plan order API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub object_storage: ObjectStorageArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Insert the sample catalog when it is empty, then keep serving.
    #[arg(long, env = "SEED", default_value_t = false)]
    pub seed: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "pantry")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ObjectStorageArgs {
    #[arg(
        long = "object-storage-endpoint",
        env = "OBJECT_STORAGE_ENDPOINT",
        default_value = "http://localhost:9000"
    )]
    pub endpoint: String,

    #[arg(
        long = "object-storage-region",
        env = "OBJECT_STORAGE_REGION",
        default_value = "us-east-1"
    )]
    pub region: String,

    #[arg(
        long = "object-storage-access-key",
        env = "OBJECT_STORAGE_ACCESS_KEY",
        default_value = "minioadmin"
    )]
    pub access_key: String,

    #[arg(
        long = "object-storage-secret-key",
        env = "OBJECT_STORAGE_SECRET_KEY",
        default_value = "minioadmin"
    )]
    pub secret_key: String,

    #[arg(
        long = "object-storage-bucket",
        env = "OBJECT_STORAGE_BUCKET",
        default_value = "pantry"
    )]
    pub bucket: String,

    #[arg(
        long = "object-storage-public-url",
        env = "OBJECT_STORAGE_PUBLIC_URL",
        default_value = "http://localhost:9000/pantry"
    )]
    pub public_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    /// Shared HS256 secret of the identity provider.
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub jwt_secret: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        default_value = "info,pantry_api=debug,pantry_core=debug"
    )]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for PantryConfig {
    fn from(args: Args) -> Self {
        PantryConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.object_storage.endpoint,
                region: args.object_storage.region,
                access_key: args.object_storage.access_key,
                secret_key: args.object_storage.secret_key,
                bucket: args.object_storage.bucket,
                public_base_url: args.object_storage.public_base_url,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "pantry-api",
            "--jwt-secret",
            "secret",
            "--server-allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_args_convert_into_core_config() {
        let args = Args::parse_from([
            "pantry-api",
            "--jwt-secret",
            "secret",
            "--database-name",
            "orders",
        ]);

        let config = PantryConfig::from(args);
        assert_eq!(config.database.name, "orders");
        assert_eq!(config.auth.jwt_secret, "secret");
    }
}
