use fussball_scraper::{
    parse_club_profile, parse_club_search, parse_match_details, parse_upcoming_fixtures,
    ClientConfig, FixtureTeam, FussballClient, MatchEventType, ScheduledFixture, Side,
};

const FIXTURES_HTML: &str = include_str!("fixtures/team_fixtures.html");
const MATCH_HTML: &str = include_str!("fixtures/match_report.html");
const SEARCH_HTML: &str = include_str!("fixtures/club_search.html");
const PROFILE_HTML: &str = include_str!("fixtures/club_profile.html");

#[test]
fn forfeited_fixture_is_listed_with_status() {
    let fixtures = parse_upcoming_fixtures(FIXTURES_HTML);
    let forfeit = fixtures
        .iter()
        .find(|f| f.score_or_status == "Nichtantritt GAST")
        .expect("forfeited fixture");

    assert_eq!(
        forfeit,
        &ScheduledFixture {
            date: Some("24.08.2025".to_string()),
            time: Some("13:00".to_string()),
            competition_name: Some("Kreisoberliga".to_string()),
            home_team: FixtureTeam {
                name: "SpG SG Wurgwitz/\u{200B}SG 90 Braunsdorf".to_string(),
                profile_url: Some("https://www.fussball.de/mannschaft/spg-sg-wurgwitz-sg-90-braunsdorf-sg-wurgwitz-sachsen/-/saison/2526/team-id/02TD2NSG0C000000VS5489BSVTA87VEB".to_string()),
                external_team_id: Some("02TD2NSG0C000000VS5489BSVTA87VEB".to_string()),
            },
            away_team: FixtureTeam {
                name: "SV Chemie Dohna (9er NWM)".to_string(),
                profile_url: Some("https://www.fussball.de/mannschaft/sv-chemie-dohna-9er-nwm-sv-chemie-dohna-sachsen/-/saison/2526/team-id/02TAGQ40A4000000VS5489BSVV9JRPRB".to_string()),
                external_team_id: Some("02TAGQ40A4000000VS5489BSVV9JRPRB".to_string()),
            },
            match_url: Some("https://www.fussball.de/spiel/spg-sg-wurgwitz-sg-90-braunsdorf-sv-chemie-dohna/-/spiel/02TAGQ6UOK000000VS5489BTVSAK3FT3".to_string()),
            external_match_id: Some("02TAGQ6UOK000000VS5489BTVSAK3FT3".to_string()),
            score_or_status: "Nichtantritt GAST".to_string(),
        }
    );
}

#[test]
fn match_report_with_glyph_scores() {
    let details = parse_match_details(MATCH_HTML);
    assert_eq!(details.final_score.as_deref(), Some("0:0"));
    assert_eq!(details.half_time_score.as_deref(), Some("1:0"));
    assert_eq!(details.external_ids.season_id.as_deref(), Some("730090"));
    assert_eq!(details.external_ids.match_id.as_deref(), Some("730090003"));

    let first = &details.events[0];
    assert_eq!(first.minute.as_deref(), Some("12"));
    assert_eq!(first.event_type, Some(MatchEventType::Goal));
    assert_eq!(first.side, Some(Side::Home));
    assert!(first.player.as_ref().is_some_and(|p| p.name.is_some()));
}

#[test]
fn match_report_serializes_with_downstream_keys() {
    let json = serde_json::to_value(parse_match_details(MATCH_HTML)).unwrap();
    assert_eq!(json["result"], "0:0");
    assert_eq!(json["half_time_result"], "1:0");
    assert_eq!(json["ids"]["staffel"], "730090");
    assert_eq!(json["ids"]["spiel"], "730090003");
    assert_eq!(json["events"][0]["type"], "goal");
    assert_eq!(json["events"][0]["side"], "home");
    assert_eq!(json["events"][1]["type"], "yellow-card");
    assert_eq!(json["events"][2]["sub_in"]["name"], "Jonas Müller");
    assert!(json["events"][2].get("player").is_none());
    assert!(json["events"][4]["type"].is_null());
}

#[test]
fn substitution_names_both_players() {
    let details = parse_match_details(MATCH_HTML);
    let substitution = details
        .events
        .iter()
        .find(|e| e.event_type == Some(MatchEventType::Substitute))
        .expect("substitution event");

    let incoming = substitution.incoming_player.as_ref().expect("incoming player");
    let outgoing = substitution.outgoing_player.as_ref().expect("outgoing player");
    assert!(incoming.name.is_some());
    assert!(outgoing.name.is_some());
    assert_ne!(incoming.name, outgoing.name);
    assert_ne!(incoming.external_id, outgoing.external_id);
}

#[test]
fn club_pages() {
    let clubs = parse_club_search(SEARCH_HTML);
    assert_eq!(clubs.len(), 2);
    let club = &clubs[0];
    let id = club.external_club_id.as_deref().expect("club id");

    let profile = parse_club_profile(PROFILE_HTML, id, &club.link);
    assert_eq!(profile.name, "SG Wurgwitz e.V.");
    assert_eq!(profile.external_club_id, id);
    assert_eq!(profile.source_url, club.link);
}

#[tokio::test]
async fn unreachable_site_yields_empty_results() {
    let config = ClientConfig {
        timeout_secs: 2,
        ..ClientConfig::default()
    }
    .with_base_url("http://127.0.0.1:1");
    let client = FussballClient::with_config(config).unwrap();

    assert!(client.search_clubs("SG Wurgwitz").await.is_empty());
    assert!(client
        .fetch_team_fixtures("02TD2NSG0C000000VS5489BSVTA87VEB")
        .await
        .is_empty());
    assert!(client
        .fetch_match_details("02TAGQ6UOK000000VS5489BTVSAK3FT3")
        .await
        .events
        .is_empty());
}
