use color_eyre::Result;

use twify::api::{
    auth::Credentials,
    flow::{Config, Creds},
    HelixApi,
};
use twify::Error;

/// The streamer whose highlights get printed.
static STREAMER: &str = "smzinho";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let Some(credentials) = Credentials::from_env() else {
        println!("Failed to obtain access token.");
        println!("Missing TWITCH_CLIENT_ID or TWITCH_CLIENT_SECRET");
        return Ok(());
    };

    let twitch = Creds::setup(credentials, Config::default());

    let token = match twitch.request_access_token().await {
        Ok(token) => token,
        Err(error) => {
            println!("Failed to obtain access token.");
            report(&error);
            return Ok(());
        }
    };
    println!("Access Token: {}", token.access());

    match twitch.highlights(STREAMER).await {
        Ok(Some(highlights)) => {
            for video in highlights {
                println!("{video}");
            }
        }
        Ok(None) => println!("Failed to obtain user ID."),
        Err(error) => {
            println!("Failed to obtain streamer highlights.");
            report(&error);
        }
    }

    Ok(())
}

/// Endpoint failures print the status and raw body the server returned; other
/// failures fall back to their display text. The process still exits 0 either
/// way, matching how this tool has always behaved.
fn report(error: &Error) {
    match error {
        Error::Request { code, body } => {
            println!("Status Code: {code}");
            println!("Response: {body}");
        }
        other => println!("{other}"),
    }
}
