use crate::api::models::ParticipantDto;

/// (kills + assists) / deaths, with deaths floored at 1.
pub fn kda(participant: &ParticipantDto) -> f64 {
    let takedowns = (participant.kills + participant.assists) as f64;
    takedowns / participant.deaths.max(1) as f64
}

/// Arithmetic mean, `None` for an empty window.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
