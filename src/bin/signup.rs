use account_client::client::{Client, Outcome};
use account_client::domain::SignupRequest;
use eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = Client::new();
    let request = SignupRequest {
        email: "jean".to_string(),
        first_name: "dadd".to_string(),
        last_name: "sadasdasda".to_string(),
        password: "yes".to_string(),
    };

    match client.signup(&request).await? {
        Outcome::Accepted => println!("Data successfully added."),
        Outcome::Rejected(detail) => println!("Error: {}", detail),
    }

    Ok(())
}
