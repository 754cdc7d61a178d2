// same report, with credentials baked in; edit before use

use std::process::ExitCode;

use dbsizes::credentials::StaticCredentials;

#[tokio::main]
async fn main() -> ExitCode {
    dbsizes::run(StaticCredentials::default()).await
}
