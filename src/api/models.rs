use serde::Deserialize;
use std::fmt;

// Account V1 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub puuid: String,
    #[serde(default)]
    pub name: String,
    pub summoner_level: i64,
}

// Match V5 response
#[derive(Debug, Deserialize, Clone)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Epoch milliseconds.
    #[serde(default)]
    pub game_start_timestamp: i64,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub riot_id_game_name: String,
    #[serde(default)]
    pub riot_id_tagline: String,
    #[serde(default)]
    pub summoner_level: i64,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

impl ParticipantDto {
    /// Name used both for the summoner lookup and as the dedup key.
    /// Falls back to the Riot ID once the legacy summoner name is blank.
    pub fn display_name(&self) -> String {
        if !self.summoner_name.is_empty() {
            self.summoner_name.clone()
        } else if !self.riot_id_game_name.is_empty() && !self.riot_id_tagline.is_empty() {
            format!("{}#{}", self.riot_id_game_name, self.riot_id_tagline)
        } else if !self.riot_id_game_name.is_empty() {
            self.riot_id_game_name.clone()
        } else {
            self.puuid.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueType {
    SoloQ,
    Flex,
}

impl QueueType {
    pub const ALL: [QueueType; 2] = [QueueType::SoloQ, QueueType::Flex];

    pub fn id(self) -> u16 {
        match self {
            QueueType::SoloQ => 420,
            QueueType::Flex => 440,
        }
    }
}

impl fmt::Display for QueueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueType::SoloQ => write!(f, "SoloQ"),
            QueueType::Flex => write!(f, "Flex"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_match() {
        let body = r#"{
            "metadata": { "matchId": "EUW1_7000000001", "participants": ["p1"] },
            "info": {
                "gameStartTimestamp": 1700000000000,
                "queueId": 420,
                "participants": [{
                    "puuid": "p1",
                    "summonerName": "",
                    "riotIdGameName": "Caps",
                    "riotIdTagline": "G2",
                    "summonerLevel": 512,
                    "championName": "Ahri",
                    "kills": 7,
                    "deaths": 2,
                    "assists": 9,
                    "win": true
                }]
            }
        }"#;

        let parsed: MatchDto = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.metadata.match_id, "EUW1_7000000001");
        assert_eq!(parsed.info.game_start_timestamp, 1_700_000_000_000);

        let participant = &parsed.info.participants[0];
        assert_eq!(participant.summoner_level, 512);
        assert_eq!(participant.display_name(), "Caps#G2");
    }

    #[test]
    fn test_display_name_prefers_summoner_name() {
        let participant = ParticipantDto {
            puuid: "p1".to_string(),
            summoner_name: "Faker".to_string(),
            riot_id_game_name: "Hide on bush".to_string(),
            riot_id_tagline: "KR1".to_string(),
            ..Default::default()
        };
        assert_eq!(participant.display_name(), "Faker");

        let anonymous = ParticipantDto {
            puuid: "p2".to_string(),
            ..Default::default()
        };
        assert_eq!(anonymous.display_name(), "p2");
    }

    #[test]
    fn test_queue_ids() {
        assert_eq!(QueueType::SoloQ.id(), 420);
        assert_eq!(QueueType::Flex.id(), 440);
        assert_eq!(QueueType::ALL, [QueueType::SoloQ, QueueType::Flex]);
    }
}
