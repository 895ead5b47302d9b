//! Reads the account identity and lists a few people.
//!
//! Credentials come from the environment or a `.env` file:
//! `FOLLOW_UP_BOSS_API_KEY`, and optionally `X_SYSTEM` / `X_SYSTEM_KEY`.
//!
//! Run with: `cargo run --example basic_call`

use follow_up_boss::query::Page;
use follow_up_boss::resources::people::PeopleFilter;
use follow_up_boss::{ClientBuilder, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("follow_up_boss=debug,basic_call=info")
        .init();

    let client = ClientBuilder::from_dotenv().build()?;

    println!("=== Identity ===");
    let identity = client.identity().get().await?;
    println!("Account: {}", identity["account"]["name"]);
    println!("User: {}", identity["user"]["email"]);
    println!();

    println!("=== People ===");
    let people = client
        .people()
        .list(&PeopleFilter {
            page: Page::new().limit(5),
            ..Default::default()
        })
        .await?;
    for person in people["people"].as_array().into_iter().flatten() {
        println!("{} {} (id {})", person["firstName"], person["lastName"], person["id"]);
    }
    println!("Count: {}", people["count"]);

    Ok(())
}
