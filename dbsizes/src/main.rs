use std::process::ExitCode;

use dbsizes::credentials::EnvCredentials;

#[tokio::main]
async fn main() -> ExitCode {
    dbsizes::run(EnvCredentials::default()).await
}
