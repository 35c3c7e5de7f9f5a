use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(default_value_t = 3000, long, env = "PORT")]
    pub http_port: u16,
    #[arg(default_value_t = String::from("0.0.0.0"), long, env = "HTTP_ADDRESS")]
    pub http_address: String,
    #[arg(default_value_t = String::from("ws://localhost:8000"), long, env = "SURREAL_DB_CONNECTION")]
    pub surreal_db_connection: String,
    #[arg(default_value_t = String::from("contacts"), long, env = "SURREAL_DB_NAMESPACE")]
    pub surreal_db_namespace: String,
    #[arg(default_value_t = String::from("contacts"), long, env = "SURREAL_DB_DATABASE")]
    pub surreal_db_database: String,
    /// Base URL clients reach the service at, used when pointing them to existing routes
    #[arg(long, env = "PUBLIC_URL")]
    pub public_url: Option<String>,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }

    pub fn public_url(&self) -> String {
        match self.public_url {
            Some(ref url) => url.trim_end_matches('/').to_owned(),
            None => format!("http://localhost:{}", self.http_port),
        }
    }

    pub fn api_config(&self) -> contacts_api::Config {
        contacts_api::Config {
            surreal_db_connection: self.surreal_db_connection.clone(),
            surreal_db_namespace: self.surreal_db_namespace.clone(),
            surreal_db_database: self.surreal_db_database.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_is_normalized() {
        let conf = Config::parse_from([
            "contacts-web",
            "--http-address",
            "0.0.0.0",
            "--http-port",
            "8080",
            "--public-url",
            "https://contacts.example.com/",
        ]);
        assert_eq!(conf.http_listen_url(), "http://0.0.0.0:8080");
        assert_eq!(conf.public_url(), "https://contacts.example.com");

        let conf = Config {
            public_url: None,
            ..conf
        };
        assert_eq!(conf.public_url(), "http://localhost:8080");
    }
}
