use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRes {
    pub participation_rate: f64,
    pub active_enrollments: u64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LobbyTeamTotal {
    pub team: String,
    pub runs_this_week: u64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct LobbyCoworker {
    pub name: String,
    pub team: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LobbyRes {
    pub office_name: String,
    pub runs_today: u64,
    pub runs_this_week: u64,
    pub team_totals: Vec<LobbyTeamTotal>,
    pub coworkers: Vec<LobbyCoworker>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The frontend predates this service; the key spelling is the contract.
    #[test]
    fn lobby_serializes_with_camel_case_keys() {
        let lobby = LobbyRes {
            office_name: "HQ".to_string(),
            runs_today: 1,
            runs_this_week: 2,
            team_totals: vec![LobbyTeamTotal {
                team: "Engineering".to_string(),
                runs_this_week: 2,
            }],
            coworkers: vec![],
        };
        let json = serde_json::to_value(&lobby).unwrap();
        assert_eq!(json["officeName"], "HQ");
        assert_eq!(json["runsToday"], 1);
        assert_eq!(json["teamTotals"][0]["runsThisWeek"], 2);
    }

    #[test]
    fn participation_serializes_with_camel_case_keys() {
        let report = ParticipationRes {
            participation_rate: 33.33,
            active_enrollments: 4,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["participationRate"], 33.33);
        assert_eq!(json["activeEnrollments"], 4);
    }
}
