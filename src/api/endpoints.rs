// URL builders for the Riot endpoints the detectors need.
// Platform hosts (euw1, na1, ...) serve summoner-v4; regional hosts serve match-v5 and account-v1.

use super::models::QueueType;

/// match-v5 rejects counts above this.
pub const MAX_MATCH_COUNT: usize = 100;

pub fn regional_routing(region: &str) -> &'static str {
    match region {
        "na1" | "br1" | "la1" | "la2" => "americas",
        "euw1" | "eun1" | "tr1" | "ru" | "me1" => "europe",
        "kr" | "jp1" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
        _ => "europe",
    }
}

// account-v1 has no "sea" cluster.
fn account_routing(region: &str) -> &'static str {
    match regional_routing(region) {
        "sea" => "asia",
        other => other,
    }
}

pub fn summoner_by_name(region: &str, name: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-name/{}",
        region, name
    )
}

pub fn summoner_by_puuid(region: &str, puuid: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/{}",
        region, puuid
    )
}

pub fn account_by_riot_id(region: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
        account_routing(region),
        game_name,
        tag_line
    )
}

pub fn match_ids(region: &str, puuid: &str, queue: QueueType, count: usize) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?queue={}&count={}",
        regional_routing(region),
        puuid,
        queue.id(),
        count.min(MAX_MATCH_COUNT)
    )
}

pub fn match_detail(region: &str, match_id: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
        regional_routing(region),
        match_id
    )
}
