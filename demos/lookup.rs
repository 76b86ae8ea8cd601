use std::env;

use tracing_subscriber::EnvFilter;

use fussball_scraper::{ClientConfig, FussballClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = env::args().nth(1).unwrap_or_else(|| "SG Wurgwitz".to_string());
    let client = FussballClient::with_config(ClientConfig::from_env().unwrap()).unwrap();

    let clubs = client.search_clubs(&query).await;
    println!("Found {} clubs for {query:?}", clubs.len());

    for club in &clubs {
        let Some(id) = club.external_club_id.as_deref() else {
            continue;
        };
        let profile = client.fetch_club_profile(id).await;
        println!("{}", serde_json::to_string_pretty(&profile).unwrap());
    }

    if let Some(team_id) = env::args().nth(2) {
        let fixtures = client.fetch_team_fixtures(&team_id).await;
        for fixture in &fixtures {
            println!(
                "{} {} {} - {} {}",
                fixture.date.as_deref().unwrap_or("?"),
                fixture.time.as_deref().unwrap_or("?"),
                fixture.home_team.name,
                fixture.away_team.name,
                fixture.score_or_status
            );
        }
        if let Some(match_id) = fixtures.iter().find_map(|f| f.external_match_id.as_deref()) {
            let details = client.fetch_match_details(match_id).await;
            println!("{}", serde_json::to_string_pretty(&details).unwrap());
        }
    }
}
