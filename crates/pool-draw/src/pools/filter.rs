use super::domain::{ClassifiedPlayer, Pool, SportMatch};
use super::normalizer::{normalize_phrase, registered_sports};

/// Keeps, per pool, only the members registered for `sport`. Pool numbers and
/// member order are unchanged; pools left without members are still returned.
/// A blank sport matches nobody.
pub fn filter_by_sport(pools: &[Pool], sport: &str, mode: SportMatch) -> Vec<Pool> {
    let wanted = normalize_phrase(sport);
    if wanted.is_empty() {
        return pools.iter().map(|pool| Pool::empty(pool.number)).collect();
    }
    pools
        .iter()
        .map(|pool| Pool {
            number: pool.number,
            members: pool
                .members
                .iter()
                .filter(|member| plays(member, &wanted, mode))
                .cloned()
                .collect(),
        })
        .collect()
}

fn plays(member: &ClassifiedPlayer, wanted: &str, mode: SportMatch) -> bool {
    match mode {
        SportMatch::Substring => normalize_phrase(&member.player.sports_interested).contains(wanted),
        SportMatch::Token => registered_sports(&member.player.sports_interested).contains(wanted),
    }
}
