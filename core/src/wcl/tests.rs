use serde_json::json;

use super::*;

const URL: &str = API_URL;

fn fight(id: u32, keystone_level: Option<u32>) -> Fight {
    Fight {
        id,
        name: format!("Fight {id}"),
        start_time: 0.0,
        keystone_level,
    }
}

// ReportCode

#[test]
fn test_report_code_from_url() {
    let code =
        ReportCode::from_url("https://www.warcraftlogs.com/reports/aBcD1234eFgH5678").unwrap();
    assert_eq!(code.as_str(), "aBcD1234eFgH5678");
}

#[test]
fn test_report_code_strips_query_and_fragment() {
    let code = ReportCode::from_url(concat!(
        "https://www.warcraftlogs.com/reports/aBcD1234eFgH5678",
        "?fight=12&type=damage-done"
    ))
    .unwrap();
    assert_eq!(code.to_string(), "aBcD1234eFgH5678");

    let code =
        ReportCode::from_url("https://www.warcraftlogs.com/reports/aBcD1234eFgH5678#fight=last")
            .unwrap();
    assert_eq!(code.as_str(), "aBcD1234eFgH5678");
}

#[test]
fn test_report_code_rejects_wrong_length() {
    let err = ReportCode::from_url("https://www.warcraftlogs.com/reports/short").unwrap_err();
    assert!(matches!(err, WclError::InvalidReportUrl { .. }));

    assert!(ReportCode::from_url("https://www.warcraftlogs.com/character/eu/x").is_err());
}

// FightSelector

#[test]
fn test_fight_selector_parse() {
    assert_eq!("last".parse::<FightSelector>().unwrap(), FightSelector::Last);
    assert_eq!("LAST".parse::<FightSelector>().unwrap(), FightSelector::Last);
    assert_eq!("17".parse::<FightSelector>().unwrap(), FightSelector::Id(17));
    assert!(matches!(
        "first".parse::<FightSelector>(),
        Err(WclError::InvalidFightId { .. })
    ));
}

// select_fight

#[test]
fn test_select_last_prefers_keystone_fight() {
    let fights = vec![fight(1, None), fight(2, Some(15)), fight(3, None)];
    assert_eq!(select_fight(&fights, FightSelector::Last).unwrap().id, 2);
}

#[test]
fn test_select_last_falls_back_to_last_fight() {
    let fights = vec![fight(1, None), fight(2, None)];
    assert_eq!(select_fight(&fights, FightSelector::Last).unwrap().id, 2);
}

#[test]
fn test_select_by_id() {
    let fights = vec![fight(1, None), fight(5, Some(2))];
    assert_eq!(select_fight(&fights, FightSelector::Id(1)).unwrap().id, 1);
    assert!(matches!(
        select_fight(&fights, FightSelector::Id(9)),
        Err(WclError::FightNotFound { id: 9 })
    ));
}

#[test]
fn test_select_no_fights() {
    assert!(matches!(
        select_fight(&[], FightSelector::Last),
        Err(WclError::NoFights)
    ));
}

// response decoding

#[test]
fn test_parse_report_details() {
    let body = json!({
        "data": { "reportData": { "report": {
            "zone": { "id": 12 },
            "masterData": { "actors": [
                { "id": 41, "name": "Spiteful Shade", "gameID": 174773 },
                { "id": 42, "name": "Environment", "gameID": null }
            ]},
            "fights": [
                { "id": 1, "name": "Halls of Atonement", "startTime": 0, "keystoneLevel": 14 },
                { "id": 2, "name": "Echelon", "startTime": 1832000.0, "keystoneLevel": null }
            ]
        }}}
    })
    .to_string();

    let details = parse_report_details(URL, &body, FightSelector::Last).unwrap();

    assert_eq!(details.fight.id, 1);
    assert_eq!(details.fight.keystone_level, Some(14));
    assert_eq!(details.dungeon_id, Some(12));
    assert_eq!(details.actors.len(), 2);
    assert_eq!(details.actors[0].template_id, Some(174773));
}

#[test]
fn test_parse_report_details_missing_zone_and_actors() {
    let body = json!({
        "data": { "reportData": { "report": {
            "zone": null,
            "masterData": null,
            "fights": [{ "id": 3, "name": "Trash" }]
        }}}
    })
    .to_string();

    let details = parse_report_details(URL, &body, FightSelector::Id(3)).unwrap();

    assert_eq!(details.dungeon_id, None);
    assert!(details.actors.is_empty());
}

#[test]
fn test_parse_report_details_graphql_error() {
    let body = json!({
        "errors": [{ "message": "You do not have permission to view this report." }],
        "data": { "reportData": { "report": null } }
    })
    .to_string();

    let err = parse_report_details(URL, &body, FightSelector::Last).unwrap_err();
    match err {
        WclError::GraphQl { message } => assert!(message.contains("permission")),
        other => panic!("expected GraphQl error, got {other:?}"),
    }
}

#[test]
fn test_parse_report_details_missing_report() {
    let body = json!({ "data": { "reportData": { "report": null } } }).to_string();
    assert!(matches!(
        parse_report_details(URL, &body, FightSelector::Last),
        Err(WclError::ReportNotFound)
    ));
}

#[test]
fn test_parse_event_page_with_continuation() {
    let body = json!({
        "data": { "reportData": { "report": { "events": {
            "data": [
                { "timestamp": 10, "type": "cast", "sourceID": 41, "abilityGameID": 5 },
                { "timestamp": 12, "type": "damage", "sourceID": 1, "targetID": 41 }
            ],
            "nextPageTimestamp": 5321.0
        }}}}
    })
    .to_string();

    let page = parse_event_page(URL, &body).unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.continuation(), Some(5321.0));
}

#[test]
fn test_parse_event_page_last_page() {
    let body = json!({
        "data": { "reportData": { "report": { "events": {
            "data": [],
            "nextPageTimestamp": null
        }}}}
    })
    .to_string();

    let page = parse_event_page(URL, &body).unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.continuation(), None);
}

#[test]
fn test_parse_event_page_invalid_json() {
    assert!(matches!(
        parse_event_page(URL, "<html>502</html>"),
        Err(WclError::Decode { .. })
    ));
}

#[test]
fn test_parse_access_token() {
    let body = json!({
        "token_type": "Bearer",
        "expires_in": 31104000,
        "access_token": "abc"
    })
    .to_string();
    assert_eq!(parse_access_token(TOKEN_URL, &body).unwrap(), "abc");

    let body = json!({ "error": "invalid_client" }).to_string();
    assert!(matches!(
        parse_access_token(TOKEN_URL, &body),
        Err(WclError::MissingAccessToken)
    ));
}
