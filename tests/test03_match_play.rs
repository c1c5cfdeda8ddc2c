mod common;

use common::{PEBBLE_INDICES, pebble_regular, player, tee_with_indices};
use rusty_golf_handicap::handicap::{course_handicap, field_match_play_strokes, match_play_strokes};
use rusty_golf_handicap::model::Tee;
use rusty_golf_handicap::score::net_score;

#[test]
fn test_match_play_higher_handicap_receives_difference() -> Result<(), Box<dyn std::error::Error>> {
    let tee = tee_with_indices(&PEBBLE_INDICES); // neutral: course handicap == rounded index
    let high = player("high", 14.0);
    let low = player("low", 9.0);

    let strokes = match_play_strokes(&high, &low, &tee)?;
    assert_eq!(strokes.iter().sum::<u32>(), 5);
    for (hole, s) in tee.holes.iter().zip(&strokes) {
        assert_eq!(*s, u32::from(hole.handicap <= 5));
    }
    Ok(())
}

#[test]
fn test_match_play_is_not_symmetric() -> Result<(), Box<dyn std::error::Error>> {
    let tee = pebble_regular();
    let a = player("a", 20.0);
    let b = player("b", 6.0);

    let a_vs_b = match_play_strokes(&a, &b, &tee)?;
    let b_vs_a = match_play_strokes(&b, &a, &tee)?;

    let diff = course_handicap(20.0, &tee)? - course_handicap(6.0, &tee)?;
    assert!(diff > 0);
    assert_eq!(a_vs_b.iter().sum::<u32>(), diff as u32);
    assert_eq!(b_vs_a, vec![0; 18]);
    Ok(())
}

#[test]
fn test_match_play_equal_handicaps_give_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let tee = pebble_regular();
    // 10.1 and 10.2 land on the same course handicap
    let strokes = match_play_strokes(&player("a", 10.1), &player("b", 10.2), &tee)?;
    assert_eq!(strokes, vec![0; 18]);
    Ok(())
}

#[test]
fn test_match_play_rejects_empty_tee() {
    let tee = Tee::new("Empty", 70.0, 113.0, vec![]);
    assert!(match_play_strokes(&player("a", 20.0), &player("b", 0.0), &tee).is_err());
    assert!(match_play_strokes(&player("a", 0.0), &player("b", 0.0), &tee).is_err());
}

#[test]
fn test_field_strokes_off_the_low_man() -> Result<(), Box<dyn std::error::Error>> {
    let tee = tee_with_indices(&PEBBLE_INDICES);
    let field = vec![player("a", 12.0), player("b", 4.0), player("c", 25.0)];

    let strokes = field_match_play_strokes(&field, &tee)?;
    let totals: Vec<(String, u32)> = strokes
        .iter()
        .map(|(id, s)| (id.clone(), s.iter().sum()))
        .collect();
    assert_eq!(
        totals,
        vec![("a".to_string(), 8), ("b".to_string(), 0), ("c".to_string(), 21)]
    );

    assert!(field_match_play_strokes(&[], &tee)?.is_empty());
    Ok(())
}

#[test]
fn test_net_score() {
    for gross in [1, 3, 4, 7, 12] {
        assert_eq!(net_score(gross, 0), gross as i32);
    }
    assert_eq!(net_score(5, 1), 4);
    assert_eq!(net_score(2, 3), -1);
}

#[test]
fn test_match_play_strokes_name_holes_by_number() -> Result<(), Box<dyn std::error::Error>> {
    // back nine played on its own, numbered 10 through 18
    let holes = (10..=18u32)
        .zip([5, 1, 9, 3, 7, 2, 8, 4, 6])
        .map(|(number, si)| {
            let mut hole = rusty_golf_handicap::model::Hole::new(4, 380, si);
            hole.hole_number = Some(number);
            hole
        })
        .collect();
    let tee = Tee::new("Back", 36.0, 113.0, holes);

    let strokes = match_play_strokes(&player("high", 38.0), &player("low", 36.0), &tee)?;
    let given: Vec<u32> = strokes
        .iter()
        .enumerate()
        .filter(|(_, s)| **s > 0)
        .map(|(i, _)| tee.hole_number_at(i))
        .collect();
    assert_eq!(given, vec![11, 15]);

    let unnumbered = tee_with_indices(&PEBBLE_INDICES);
    assert_eq!(unnumbered.hole_number_at(8), 9);
    Ok(())
}
