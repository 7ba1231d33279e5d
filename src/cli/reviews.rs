use super::ReviewsArgs;
use reviewkit::{Config, ReviewClient, ReviewRecord};

pub async fn execute(args: ReviewsArgs, config: &Config, host: &str) -> anyhow::Result<()> {
    let client = ReviewClient::connect(config, host)?;
    let reviews = client.fetch_reviews().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reviews)?);
        return Ok(());
    }

    if reviews.is_empty() {
        println!("No reviews yet.");
        return Ok(());
    }

    for review in &reviews {
        print_review(review);
    }
    println!("\n{} review(s)", reviews.len());
    Ok(())
}

fn print_review(review: &ReviewRecord) {
    let filled = review.rating.min(5) as usize;
    let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));

    let mut author = review.name.clone();
    if !review.city.is_empty() {
        author.push_str(&format!(", {}", review.city));
    }
    if let Some(approved_at) = review.approved_at {
        author.push_str(&format!(" ({})", approved_at.format("%Y-%m-%d")));
    }

    println!("\n{}  {}\n  {}", stars, author, review.message);
}
