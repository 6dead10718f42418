//! GraphQL documents sent to the report API

/// Events requested per page
pub const EVENTS_PAGE_LIMIT: u32 = 10_000;

pub const REPORT_DETAILS_QUERY: &str = r#"
query($report_id: String!) {
  reportData {
    report(code: $report_id) {
      zone {
        id
      }
      masterData {
        actors(type: "NPC") {
          id
          name
          gameID
        }
      }
      fights {
        id
        name
        startTime
        keystoneLevel
      }
    }
  }
}
"#;

pub const EVENTS_QUERY: &str = r#"
query($report_id: String!, $fight_id: [Int!]!, $startTime: Float, $limit: Int) {
  reportData {
    report(code: $report_id) {
      events(fightIDs: $fight_id, startTime: $startTime, limit: $limit, dataType: All) {
        data
        nextPageTimestamp
      }
    }
  }
}
"#;
