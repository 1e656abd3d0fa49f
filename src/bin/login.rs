use account_client::client::{Client, Outcome};
use account_client::domain::LoginRequest;
use eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = Client::new();
    let request = LoginRequest {
        email: "jean".to_string(),
        password: "yes".to_string(),
    };

    match client.login(&request).await? {
        Outcome::Accepted => println!("Logged in succesfully."),
        Outcome::Rejected(detail) => println!("Error: {}", detail),
    }

    Ok(())
}
