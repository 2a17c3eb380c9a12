use std::cmp::Ordering;

use super::domain::{ClassifiedPlayer, Player, Pool, PoolCount};
use super::history::FinalistIndex;

/// Classifies the roster, orders it by sex, finalists first, then youngest
/// first, and deals the ordered players round-robin into `pool_count` pools.
///
/// The sort is stable, so players with identical keys keep roster order, and
/// every pool number from 1 to `pool_count` is present even when empty.
pub fn assign(players: &[Player], index: &FinalistIndex, pool_count: PoolCount) -> Vec<Pool> {
    let mut ranked: Vec<ClassifiedPlayer> = players
        .iter()
        .map(|player| ClassifiedPlayer::classify(player, index))
        .collect();
    ranked.sort_by(draw_order);

    let count = pool_count.get();
    let mut pools: Vec<Pool> = (1..=count).map(Pool::empty).collect();
    for (position, member) in ranked.into_iter().enumerate() {
        pools[position % count].members.push(member);
    }
    pools
}

fn draw_order(left: &ClassifiedPlayer, right: &ClassifiedPlayer) -> Ordering {
    compare_sex(&left.player.sex, &right.player.sex)
        .then_with(|| right.finalist.cmp(&left.finalist))
        .then_with(|| compare_age(left.player.age, right.player.age))
}

/// Blank sex goes last, after every named group.
fn compare_sex(left: &str, right: &str) -> Ordering {
    let (left, right) = (left.trim(), right.trim());
    match (left.is_empty(), right.is_empty()) {
        (false, false) => left.cmp(right),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Missing ages go last.
fn compare_age(left: Option<u32>, right: Option<u32>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pools(count: usize) -> PoolCount {
        PoolCount::new(count).expect("positive pool count")
    }

    fn names(pool: &Pool) -> Vec<&str> {
        pool.members
            .iter()
            .map(|member| member.player.name.as_str())
            .collect()
    }

    #[test]
    fn empty_roster_yields_empty_pools() {
        let result = assign(&[], &FinalistIndex::default(), pools(4));
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(Pool::is_empty));
        let numbers: Vec<_> = result.iter().map(|pool| pool.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn sorts_by_sex_then_finalists_then_age() {
        let index = FinalistIndex::parse("Chess Gold Arjun\nChess Gold Meena");
        let roster = vec![
            Player::new("Ravi", "M", Some(30), "Chess"),
            Player::new("Meena", "F", Some(50), "Chess"),
            Player::new("Arjun", "M", Some(60), "Chess"),
            Player::new("Asha", "F", Some(20), "Chess"),
            Player::new("Dev", "M", Some(25), "Chess"),
        ];

        let result = assign(&roster, &index, pools(1));
        assert_eq!(names(&result[0]), vec!["Meena", "Asha", "Arjun", "Dev", "Ravi"]);
        assert_eq!(result[0].finalists(), 2);
    }

    #[test]
    fn missing_ages_sort_after_known_ages() {
        let roster = vec![
            Player::new("Unknown", "M", None, "Chess"),
            Player::new("Older", "M", Some(70), "Chess"),
            Player::new("Younger", "M", Some(18), "Chess"),
        ];
        let result = assign(&roster, &FinalistIndex::default(), pools(1));
        assert_eq!(names(&result[0]), vec!["Younger", "Older", "Unknown"]);
    }

    #[test]
    fn blank_sex_sorts_after_known_sexes() {
        let roster = vec![
            Player::new("Nobody", "", Some(20), "Chess"),
            Player::new("Ravi", "M", Some(40), "Chess"),
            Player::new("Asha", "F", Some(30), "Chess"),
        ];
        let result = assign(&roster, &FinalistIndex::default(), pools(1));
        assert_eq!(names(&result[0]), vec!["Asha", "Ravi", "Nobody"]);
    }

    #[test]
    fn equal_keys_keep_roster_order() {
        let roster = vec![
            Player::new("First", "M", Some(30), "Chess"),
            Player::new("Second", "M", Some(30), "Carrom"),
            Player::new("Third", "M", Some(30), "Chess"),
        ];
        let result = assign(&roster, &FinalistIndex::default(), pools(1));
        assert_eq!(names(&result[0]), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn nine_players_deal_into_three_two_two_two() {
        let index = FinalistIndex::parse(
            "Chess Gold Anil\nChess Silver Bala\nChess Bronze Chetan\nChess Gold Dinesh",
        );
        let roster = vec![
            Player::new("Eshan", "M", Some(21), "Chess"),
            Player::new("Dinesh", "M", Some(44), "Chess"),
            Player::new("Farid", "M", Some(22), "Chess"),
            Player::new("Chetan", "M", Some(43), "Chess"),
            Player::new("Gopal", "M", Some(23), "Chess"),
            Player::new("Bala", "M", Some(42), "Chess"),
            Player::new("Hari", "M", Some(24), "Chess"),
            Player::new("Anil", "M", Some(41), "Chess"),
            Player::new("Imran", "M", Some(25), "Chess"),
        ];

        let result = assign(&roster, &index, pools(4));
        let sizes: Vec<_> = result.iter().map(Pool::len).collect();
        assert_eq!(sizes, vec![3, 2, 2, 2]);
        assert_eq!(names(&result[0]), vec!["Anil", "Eshan", "Imran"]);
        assert_eq!(names(&result[1]), vec!["Bala", "Farid"]);
        assert_eq!(names(&result[2]), vec!["Chetan", "Gopal"]);
        assert_eq!(names(&result[3]), vec!["Dinesh", "Hari"]);
        assert!(result.iter().all(|pool| pool.finalists() == 1));
    }

    #[test]
    fn membership_is_a_permutation_with_balanced_sizes() {
        let roster: Vec<Player> = (0..23u32)
            .map(|n| {
                let sex = if n % 3 == 0 { "F" } else { "M" };
                Player::new(format!("Player{n}"), sex, Some(20 + n % 7), "Chess")
            })
            .collect();

        for count in 1..=7 {
            let result = assign(&roster, &FinalistIndex::default(), pools(count));
            assert_eq!(result.len(), count);

            let floor = roster.len() / count;
            let ceil = roster.len().div_ceil(count);
            assert!(result
                .iter()
                .all(|pool| pool.len() == floor || pool.len() == ceil));

            let mut seen: Vec<&str> = result.iter().flat_map(names).collect();
            seen.sort_unstable();
            let mut expected: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
            expected.sort_unstable();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn repeated_draws_are_identical() {
        let index = FinalistIndex::parse("Carrom Gold Meena");
        let roster = vec![
            Player::new("Meena", "F", Some(33), "Carrom"),
            Player::new("Ravi", "M", None, "Carrom"),
            Player::new("Asha", "F", Some(33), "Chess"),
            Player::new("Dev", "M", Some(19), "Carrom, Chess"),
        ];
        assert_eq!(
            assign(&roster, &index, pools(3)),
            assign(&roster, &index, pools(3))
        );
    }
}
