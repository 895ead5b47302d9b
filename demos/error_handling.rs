//! Shows the error variants a caller can match on.
//!
//! Run with: `cargo run --example error_handling`

use follow_up_boss::resources::deal_attachments::DealAttachmentLink;
use follow_up_boss::{Client, ClientBuilder, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("follow_up_boss=debug,error_handling=info")
        .init();

    println!("=== Missing credentials ===");
    match Client::builder().ignore_env().build() {
        Ok(_) => println!("Unexpected success"),
        Err(Error::Configuration(message)) => println!("Configuration error: {message}"),
        Err(e) => println!("Other error: {e}"),
    }
    println!();

    let client = ClientBuilder::from_dotenv().build()?;

    println!("=== Local validation ===");
    // Rejected before any request is made.
    let blank = DealAttachmentLink {
        deal_id: 1,
        ..Default::default()
    };
    match client.deal_attachments().link(&blank).await {
        Ok(_) => println!("Unexpected success"),
        Err(Error::Validation(message)) => println!("Validation error: {message}"),
        Err(e) => println!("Other error: {e}"),
    }
    println!();

    println!("=== API errors ===");
    match client.people().retrieve(u64::MAX, None).await {
        Ok(_) => println!("Unexpected success"),
        Err(Error::Api(api)) => {
            println!("API error: {api}");
            println!("  Status: {:?}", api.status);
            println!("  Message: {}", api.message);
            if let Some(body) = &api.response_data {
                println!("  Body: {body}");
            }
        }
        Err(e) => println!("Other error: {e}"),
    }
    println!();

    println!("=== Transport errors ===");
    let unreachable = Client::builder()
        .api_key("unused")
        .ignore_env()
        .base_url("http://127.0.0.1:9")?
        .build()?;
    match unreachable.identity().get().await {
        Ok(_) => println!("Unexpected success"),
        Err(e) => {
            println!("Error: {e}");
            println!("  Status code: {:?}", e.status());
            if let Error::Api(api) = &e {
                println!("  Transport failure: {}", api.is_transport());
            }
        }
    }

    Ok(())
}
