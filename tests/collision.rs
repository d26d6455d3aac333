//! Collision detection, merging, and field compaction.

use ledstrip_magnets::program::magnets::{
    Magnet, MagnetField, Polarity, detect_collision, led_pos, merge,
};
use rand::rngs::mock::StepRng;

/// RNG whose `u8` draws stay below the polarity reversal threshold.
fn always_flip_rng() -> StepRng {
    StepRng::new(0, 0)
}

/// RNG whose `u8` draws stay above the polarity reversal threshold.
fn never_flip_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

#[test]
fn separated_magnets_do_not_collide() {
    let mut left = Magnet::spawn(led_pos(10), led_pos(2), Polarity::North);
    let mut right = Magnet::spawn(led_pos(13), led_pos(2), Polarity::North);

    assert!(!detect_collision(&mut left, &mut right));
    assert_eq!(left.position(), led_pos(10));
}

#[test]
fn exactly_touching_edges_collide() {
    // Right edge of the left magnet lands on the left magnet's first pixel.
    let mut left = Magnet::spawn(led_pos(10), led_pos(2), Polarity::North);
    let mut right = Magnet::spawn(led_pos(12), led_pos(2), Polarity::North);

    assert!(detect_collision(&mut left, &mut right));
}

#[test]
fn collision_clips_left_magnet_to_abut_right() {
    let mut left = Magnet::spawn(led_pos(11), led_pos(2), Polarity::North);
    let mut right = Magnet::spawn(led_pos(12), led_pos(2), Polarity::North);

    assert!(detect_collision(&mut left, &mut right));
    assert_eq!(left.position(), led_pos(10));
}

#[test]
fn collision_clip_never_goes_negative() {
    let mut left = Magnet::spawn(0, led_pos(4), Polarity::North);
    let mut right = Magnet::spawn(led_pos(1), led_pos(2), Polarity::North);

    assert!(detect_collision(&mut left, &mut right));
    assert_eq!(left.position(), 0);
}

#[test]
fn merge_is_inelastic_and_sums_sizes() {
    let mut survivor = Magnet::spawn(led_pos(10), led_pos(2), Polarity::North);
    let mut absorbed = Magnet::spawn(led_pos(12), led_pos(2), Polarity::North);
    let total_size = survivor.size() + absorbed.size();

    merge(&mut survivor, &mut absorbed, &mut never_flip_rng());

    assert_eq!(survivor.position(), led_pos(10));
    assert_eq!(survivor.size(), total_size);
    assert_eq!(survivor.velocity(), 0);
    assert_eq!(survivor.acceleration(), 0);
    assert!(!absorbed.is_alive());
}

#[test]
fn merge_polarity_reversal_is_probabilistic() {
    let mut survivor = Magnet::spawn(led_pos(10), led_pos(2), Polarity::North);
    let mut absorbed = Magnet::spawn(led_pos(12), led_pos(2), Polarity::North);
    merge(&mut survivor, &mut absorbed, &mut always_flip_rng());
    assert_eq!(survivor.polarity(), Polarity::South);

    let mut survivor = Magnet::spawn(led_pos(10), led_pos(2), Polarity::North);
    let mut absorbed = Magnet::spawn(led_pos(12), led_pos(2), Polarity::North);
    merge(&mut survivor, &mut absorbed, &mut never_flip_rng());
    assert_eq!(survivor.polarity(), Polarity::North);
}

#[test]
fn compaction_removes_the_absorbed_slot() {
    let mut field = MagnetField::new();
    assert!(field.insert_sorted(Magnet::spawn(led_pos(10), led_pos(2), Polarity::North)));
    assert!(field.insert_sorted(Magnet::spawn(led_pos(12), led_pos(2), Polarity::South)));
    assert!(field.insert_sorted(Magnet::spawn(led_pos(40), led_pos(2), Polarity::North)));
    assert_eq!(field.len(), 3);

    // Merge the first adjacent pair, as the tick loop does.
    let mut left = field[0];
    let mut right = field[1];
    merge(&mut left, &mut right, &mut never_flip_rng());
    field[0] = left;
    field[1] = right;
    field.compact();

    assert_eq!(field.len(), 2);
    assert!(field.is_sorted());
    assert_eq!(field[0].size(), led_pos(4));
    assert_eq!(field[1].position(), led_pos(40));
}

#[test]
fn sorted_insertion_keeps_positions_ascending() {
    let mut field = MagnetField::new();
    field.insert_sorted(Magnet::spawn(led_pos(30), led_pos(2), Polarity::North));
    field.insert_sorted(Magnet::spawn(led_pos(5), led_pos(2), Polarity::South));
    field.insert_sorted(Magnet::spawn(led_pos(18), led_pos(2), Polarity::North));

    assert!(field.is_sorted());
    assert_eq!(field[0].position(), led_pos(5));
    assert_eq!(field[1].position(), led_pos(18));
    assert_eq!(field[2].position(), led_pos(30));

    // The field is bounded; a fourth insert is refused.
    assert!(!field.insert_sorted(Magnet::spawn(led_pos(50), led_pos(2), Polarity::North)));
    assert_eq!(field.len(), 3);
}
