use siteforge::cli;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
