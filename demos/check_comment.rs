use std::io;
use std::sync::{Arc, Mutex};

use akismet::http::with_dump;
use akismet::{Checker, Comment, Credentials};

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
    // "viagra-test-123" always triggers a spam verdict.
    let author = std::env::var("AKISMET_AUTHOR").unwrap_or_else(|_| "viagra-test-123".to_owned());

    let mut builder = Checker::builder(Credentials::new(key, site)?)
        .user_agent("akismet-demos/0.1.0")
        .test_mode(true);
    if std::env::var_os("AKISMET_DUMP").is_some() {
        builder = builder.adapter(with_dump(Arc::new(Mutex::new(io::stdout()))));
    }
    let checker = builder.build()?;

    let comment = Comment {
        user_ip: "127.0.0.1".to_owned(),
        user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0"
            .to_owned(),
        kind: "comment".to_owned(),
        author,
        content: "This is a test comment sent by the akismet demo.".to_owned(),
        timestamp: Some(chrono::Utc::now()),
        ..Default::default()
    };

    let status = checker.check(&comment.to_params()).await?;
    println!("status: {status}");

    Ok(())
}
