use std::io::Read;

use crate::pools::domain::Player;

pub(crate) fn parse_players<R: Read>(reader: R) -> Result<Vec<Player>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut players = Vec::new();

    for record in csv_reader.deserialize::<Player>() {
        let player = record?;
        if is_blank(&player) {
            continue;
        }
        players.push(player);
    }

    Ok(players)
}

/// Published sheets often carry trailing empty rows.
fn is_blank(player: &Player) -> bool {
    player.name.is_empty()
        && player.sex.is_empty()
        && player.age.is_none()
        && player.sports_interested.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_sheet_headers_and_ignores_extra_columns() {
        let csv = "Timestamp,Name,Sex,Age,Sports Interested\n\
2025-01-04,Suresh Kumar,M,34,\"Badminton, Chess\"\n\
2025-01-05, Meena Iyer ,F, 41.0 ,Table Tennis\n";
        let players = parse_players(Cursor::new(csv)).expect("roster parses");
        assert_eq!(
            players,
            vec![
                Player::new("Suresh Kumar", "M", Some(34), "Badminton, Chess"),
                Player::new("Meena Iyer", "F", Some(41), "Table Tennis"),
            ]
        );
    }

    #[test]
    fn blank_cells_and_rows_are_tolerated() {
        let csv = "name,sex,age,sports interested\nRavi,M,,\n,,,\n";
        let players = parse_players(Cursor::new(csv)).expect("roster parses");
        assert_eq!(players, vec![Player::new("Ravi", "M", None, "")]);
    }

    #[test]
    fn missing_columns_default_to_blank() {
        let players = parse_players(Cursor::new("Name\nAsha\n")).expect("roster parses");
        assert_eq!(players, vec![Player::new("Asha", "", None, "")]);
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let error = parse_players(Cursor::new("Name,Sex,Age\nDev,M,thirty\n"))
            .expect_err("age must be numeric");
        assert!(error.to_string().contains("thirty"));
    }
}
