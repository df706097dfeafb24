use std::io;

use akismet::{Checker, Credentials, Params};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
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
    let kind = std::env::var("AKISMET_REPORT").unwrap_or_else(|_| "ham".to_owned());

    let checker = Checker::builder(Credentials::new(key, site)?)
        .test_mode(true)
        .build()?;
    let params = Params::from([
        ("user_ip", "127.0.0.1"),
        ("comment_type", "comment"),
        ("comment_author", "demo user"),
        ("comment_content", "Reported by the akismet demo."),
    ]);

    match kind.as_str() {
        "spam" => checker.report_spam(&params).await?,
        _ => checker.report_ham(&params).await?,
    }
    println!("reported as {kind}");

    Ok(())
}
