//! Runs a round of calls against a live Listmonk server and reports what
//! worked.
//!
//! ```text
//! cargo run --example api_validator -- -b http://localhost:9000/api -u api-user -p token all
//! ```

use clap::{Parser, Subcommand};
use listmonk_client::{HttpLogLevel, ListmonkClient, ListmonkResult, Payload, TransactionalMessage};
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short = 'b', long)]
    base_url: String,

    #[arg(short = 'u', long)]
    username: Option<String>,

    #[arg(short = 'p', long)]
    password: Option<String>,

    /// Log every request and response body.
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    All,
    Health,
    Lists,
    Subscribers,
    Campaigns,
    /// Send a transactional message.
    Tx {
        #[arg(long)]
        template_id: i64,

        #[arg(long)]
        email: String,
    },
}

fn payload(value: serde_json::Value) -> Payload {
    value.as_object().cloned().unwrap_or_default()
}

async fn validate_health(client: &ListmonkClient) -> ListmonkResult<()> {
    let reply = client.health().check().await?;
    if reply.data() == Some(&true) {
        println!("✅ Health check passed");
    } else {
        println!("❌ Health check failed: {}", reply.status());
    }
    Ok(())
}

async fn validate_lists(client: &ListmonkClient) -> ListmonkResult<()> {
    let reply = client.lists().list().per_page(5).send().await?;
    match reply.data() {
        Some(lists) => println!("✅ Listed {} mailing lists", lists.len()),
        None => println!("❌ Listing mailing lists failed: {}", reply.status()),
    }
    Ok(())
}

async fn validate_subscribers(client: &ListmonkClient) -> ListmonkResult<()> {
    let email = format!("validator-{:08x}@example.com", rand::random::<u32>());

    let created = client
        .subscribers()
        .create(payload(json!({
            "email": email,
            "name": "API Validator",
            "status": "enabled"
        })))
        .await?;

    let Some(subscriber) = created.data() else {
        println!("❌ Creating subscriber failed: {}", created.status());
        return Ok(());
    };
    println!("✅ Created subscriber {} ({})", subscriber.id, subscriber.email);

    let updated = client
        .subscribers()
        .update(subscriber.id, payload(json!({ "name": "API Validator (updated)" })))
        .await?;
    if updated.is_success() {
        println!("✅ Updated subscriber");
    } else {
        println!("❌ Updating subscriber failed: {}", updated.status());
    }

    let fetched = client.subscribers().get(subscriber.id).await?;
    if fetched.data().map(|s| s.email.as_str()) == Some(email.as_str()) {
        println!("✅ Fetched subscriber");
    } else {
        println!("❌ Fetching subscriber failed: {}", fetched.status());
    }

    let deleted = client.subscribers().delete(subscriber.id).await?;
    if deleted.is_success() {
        println!("✅ Deleted subscriber");
    } else {
        println!("❌ Deleting subscriber failed: {}", deleted.status());
    }

    let missing = client.subscribers().get(subscriber.id).await?;
    if missing.status() == http::StatusCode::NOT_FOUND {
        println!("✅ Deleted subscriber is gone");
    } else {
        println!("❌ Deleted subscriber still answers with {}", missing.status());
    }

    Ok(())
}

async fn validate_campaigns(client: &ListmonkClient) -> ListmonkResult<()> {
    let reply = client.campaigns().list().per_page(5).send().await?;
    match reply.data() {
        Some(campaigns) => {
            println!("✅ Listed {} campaigns", campaigns.len());
            for campaign in campaigns {
                println!("   {} [{}] {}", campaign.id, campaign.status, campaign.name);
            }
        }
        None => println!("❌ Listing campaigns failed: {}", reply.status()),
    }
    Ok(())
}

async fn send_tx(client: &ListmonkClient, template_id: i64, email: String) -> ListmonkResult<()> {
    let message = TransactionalMessage::builder(template_id)
        .subscriber_email(email)
        .data_entry("source", "api_validator")
        .build()?;

    let reply = client.transactional().send(&message).await?;
    match reply.error() {
        None => println!("✅ Transactional message accepted"),
        Some(err) => println!(
            "❌ Transactional message rejected ({}): {}",
            reply.status(),
            err.message.as_deref().unwrap_or(&err.raw)
        ),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ListmonkResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = ListmonkClient::builder()
        .base_url(&cli.base_url)
        .logging(cli.verbose)
        .logging_level(HttpLogLevel::Body);
    if let Some(username) = cli.username {
        builder = builder.username(username);
    }
    if let Some(password) = cli.password {
        builder = builder.password(password);
    }
    let client = builder.build()?;

    match cli.command.unwrap_or(Commands::All) {
        Commands::Health => validate_health(&client).await?,
        Commands::Lists => validate_lists(&client).await?,
        Commands::Subscribers => validate_subscribers(&client).await?,
        Commands::Campaigns => validate_campaigns(&client).await?,
        Commands::Tx { template_id, email } => send_tx(&client, template_id, email).await?,
        Commands::All => {
            println!("Running all validators...");
            validate_health(&client).await?;
            validate_lists(&client).await?;
            validate_subscribers(&client).await?;
            validate_campaigns(&client).await?;
        }
    }

    Ok(())
}
