use super::domain::{ClassifiedPlayer, Player};
use super::history::FinalistIndex;
use super::normalizer::{name_key, registered_sports};

/// A player is a finalist when one of the sports they registered for is an
/// event their name-key medaled in.
pub fn classify(player: &Player, index: &FinalistIndex) -> bool {
    let Some(medaled) = index.events_for(&name_key(&player.name)) else {
        return false;
    };

    registered_sports(&player.sports_interested)
        .iter()
        .any(|sport| medaled.contains(sport))
}

impl ClassifiedPlayer {
    pub fn classify(player: &Player, index: &FinalistIndex) -> Self {
        Self {
            finalist: classify(player, index),
            player: player.clone(),
        }
    }
}
