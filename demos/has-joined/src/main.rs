//! Verifies a player's session the way a game server's login handler does.
//!
//! ```text
//! has-joined <username> <shared-secret-hex> <public-key-der-hex> [ip]
//! ```
//!
//! Set `YGGDRASIL_HOST` to target something other than the production
//! service, and `RUST_LOG=debug` to see the requests.

use yggdrasil::prelude::*;

const USAGE: &str = "usage: has-joined <username> <shared-secret-hex> <public-key-der-hex> [ip]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(username), Some(secret), Some(public_key)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let ip = args.next();

    let secret = hex::decode(secret)?;
    let public_key = hex::decode(public_key)?;

    let mut builder = SessionClient::builder();
    if let Ok(host) = std::env::var("YGGDRASIL_HOST") {
        builder = builder.host(&host);
    }
    let client = builder.build()?;

    let bundle = ConnectionBundle::new("", &secret, &public_key);
    tracing::info!(host = client.host(), server_id = %bundle.server_hash(), "verifying {username}");

    match client.has_joined(&username, &bundle, ip.as_deref()).await {
        Ok(profile) => {
            println!("{profile}");
            for property in &profile.properties {
                println!("  {} ({} bytes)", property.name, property.value.len());
            }
            Ok(())
        }
        Err(e) if e.is_rejection() => {
            eprintln!("rejected: {e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
