use super::SubmitArgs;
use reviewkit::{Config, ReviewClient, SubmissionPayload};

pub async fn execute(args: SubmitArgs, config: &Config, host: &str) -> anyhow::Result<()> {
    let client = ReviewClient::connect(config, host)?;

    let payload = SubmissionPayload {
        name: args.name.trim().to_string(),
        city: args.city.trim().to_string(),
        message: args.message.trim().to_string(),
        email: args.email.trim().to_string(),
        rating: args.rating,
        website: args.website,
    };

    let ack = client.submit_review(&payload).await?;
    println!("{}", serde_json::to_string_pretty(&ack)?);
    Ok(())
}
