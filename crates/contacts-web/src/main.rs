use anyhow::Result;
use clap::Parser;
use config::Config;
use contacts_api::get_db_context;
use contacts_api::service::create_service_context;
use log::{error, info};

mod api_docs;
mod config;
mod constants;
mod data;
mod error;
mod handlers;
mod router;

// MAIN
#[macro_use]
extern crate lazy_static;
lazy_static! {
    pub static ref CONFIG: Config = Config::parse();
}

#[tokio::main]
async fn main() -> Result<()> {
    // a missing .env file is fine, the environment and the command line are enough
    dotenvy::dotenv().ok();
    env_logger::init();
    let conf = CONFIG.clone();
    let api_config = conf.api_config();

    // Without a working database there is nothing to serve
    let db = match get_db_context(&api_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Could not connect to the database: {e}");
            return Err(e.into());
        }
    };
    info!("Connected to the database");

    let service_context = create_service_context(api_config, db);

    router::rocket_main(conf, service_context).launch().await?;

    info!("Web server was shut down");
    Ok(())
}
