//! Integration tests for knockout round grouping and seed derivation.

use chess_tournament_web::logic::newest_first;
use chess_tournament_web::{group_by_round, GameMatch, PlayerRef, Seed, SeedTeam};

fn player(id: i64, first: &str, last: &str) -> Option<PlayerRef> {
    Some(PlayerRef::new(id, first, last))
}

fn team(id: i64, name: &str) -> SeedTeam {
    SeedTeam {
        id,
        name: name.to_string(),
    }
}

#[test]
fn empty_input_gives_no_rounds() {
    assert!(group_by_round(&[]).is_empty());
}

#[test]
fn matches_without_round_type_are_dropped() {
    let matches = vec![
        GameMatch::new(1).in_round("Semi"),
        GameMatch::new(2),
        GameMatch::new(3).in_round("Final"),
        GameMatch::new(4).in_swiss_round(1),
    ];
    let rounds = group_by_round(&matches);
    let seeds: usize = rounds.iter().map(|r| r.seeds.len()).sum();
    let with_round = matches.iter().filter(|m| m.round_type.is_some()).count();
    assert_eq!(seeds, with_round);
    assert_eq!(seeds, 2);
}

#[test]
fn rounds_in_first_appearance_order() {
    let matches = vec![
        GameMatch::new(1).in_round("Final"),
        GameMatch::new(2).in_round("Semi"),
        GameMatch::new(3).in_round("Final"),
    ];
    let rounds = group_by_round(&matches);
    let titles: Vec<_> = rounds.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Final", "Semi"]);
    let final_ids: Vec<_> = rounds[0].seeds.iter().map(|s| s.id).collect();
    assert_eq!(final_ids, vec![1, 3]);
}

#[test]
fn round_names_are_not_sorted() {
    let matches = vec![
        GameMatch::new(1).in_round("Round 10"),
        GameMatch::new(2).in_round("Round 2"),
        GameMatch::new(3).in_round("Round 1"),
    ];
    let titles: Vec<_> = group_by_round(&matches)
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Round 10", "Round 2", "Round 1"]);
}

#[test]
fn team_order_follows_player_order() {
    let m = GameMatch::new(9)
        .with_players(player(5, "Magnus", "C"), player(3, "Hikaru", "N"))
        .in_round("Final");
    let seed = &group_by_round(&[m])[0].seeds[0];
    assert_eq!(seed.teams, [team(5, "Magnus C"), team(3, "Hikaru N")]);
}

#[test]
fn missing_player_is_pending() {
    let m = GameMatch::new(9)
        .with_players(player(5, "Magnus", "C"), None)
        .in_round("Final");
    let seed = &group_by_round(&[m])[0].seeds[0];
    assert_eq!(seed.teams[1], SeedTeam::pending());
    assert_eq!(seed.teams[1], team(0, "Pending"));
    assert!(!seed.is_auto_advance());
}

#[test]
fn auto_advance_needs_both_slots_empty_and_a_winner() {
    let bye = GameMatch::new(1).with_winner(Some(7)).in_round("Round 1");
    let open = GameMatch::new(2).in_round("Round 1");
    let rounds = group_by_round(&[bye, open]);
    let seeds = &rounds[0].seeds;

    assert_eq!(seeds[0].teams, [SeedTeam::pending(), SeedTeam::pending()]);
    assert_eq!(seeds[0].winner_id, Some(7));
    assert!(seeds[0].is_auto_advance());

    assert_eq!(seeds[1].winner_id, None);
    assert!(!seeds[1].is_auto_advance());
}

#[test]
fn grouping_is_repeatable() {
    let matches = vec![
        GameMatch::new(1)
            .with_players(player(1, "A", "X"), player(2, "B", "Y"))
            .with_winner(Some(2))
            .in_round("Semi"),
        GameMatch::new(2).in_round("Final"),
    ];
    assert_eq!(group_by_round(&matches), group_by_round(&matches));
}

#[test]
fn end_to_end_two_rounds() {
    let matches = vec![
        GameMatch::new(1)
            .with_players(player(10, "A", "X"), player(11, "B", "Y"))
            .with_winner(Some(10))
            .in_round("Round 1"),
        GameMatch::new(2).with_winner(Some(10)).in_round("Round 2"),
    ];
    let rounds = group_by_round(&matches);

    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0].title, "Round 1");
    assert_eq!(
        rounds[0].seeds,
        vec![Seed {
            id: 1,
            winner_id: Some(10),
            teams: [team(10, "A X"), team(11, "B Y")],
        }]
    );
    assert_eq!(rounds[1].title, "Round 2");
    assert_eq!(
        rounds[1].seeds,
        vec![Seed {
            id: 2,
            winner_id: Some(10),
            teams: [team(0, "Pending"), team(0, "Pending")],
        }]
    );
    assert!(rounds[1].seeds[0].is_auto_advance());

    let titles: Vec<_> = newest_first(rounds).into_iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["Round 2", "Round 1"]);
}

#[test]
fn deserializes_backend_match_json() {
    let json = r#"[
        {"id": 1, "player1": {"id": 10, "firstName": "A", "lastName": "X"},
         "player2": null, "winnerId": null, "roundType": {"id": 3, "roundName": "Quarterfinal"},
         "swissRoundNumber": null},
        {"id": 2}
    ]"#;
    let matches: Vec<GameMatch> = serde_json::from_str(json).unwrap();
    assert_eq!(matches[0].round_name(), Some("Quarterfinal"));
    assert_eq!(matches[0].player2, None);
    assert_eq!(matches[1].round_type, None);

    let rounds = group_by_round(&matches);
    assert_eq!(rounds.len(), 1);
    assert_eq!(rounds[0].seeds[0].teams[0], team(10, "A X"));
}
