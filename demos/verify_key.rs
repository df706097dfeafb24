use std::io;

use akismet::{Checker, Credentials};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let key = std::env::var("AKISMET_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "AKISMET_KEY environment variable is required",
        )
    })?;
    let site = std::env::var("AKISMET_SITE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "AKISMET_SITE environment variable is required",
        )
    })?;

    let checker = Checker::new(Credentials::new(key, site)?);
    checker.verify().await?;
    println!("key verified: {}", checker.is_verified());

    Ok(())
}
