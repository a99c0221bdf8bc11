use std::io;
use std::sync::Arc;

use clap::Parser;

use bucketty::api::http::HttpStorageClient;
use bucketty::app::App;
use bucketty::config::{Cli, Config};

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::from_cli(Cli::parse());
    let _logging_guard = bucketty::logging::init(&config.log_file)?;

    let client = HttpStorageClient::new(config.server_url.clone());
    let mut app = App::new(Arc::new(client), config);
    app.start_initial_load();

    bucketty::runtime::run(&mut app).await
}
