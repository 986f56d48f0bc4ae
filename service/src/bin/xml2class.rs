//! `xml2class` command-line interface
//!
//! This binary infers a class schema from a sample XML document and prints it
//! as JSON, YAML or a readable listing.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    xml2class_service::cli::run().await
}
