//! Tests for disc motion through a full lift and place.

use strictly_hanoi::{HanoiConfig, MotionPhase, MoveError, PegId, Point, Rank, Tower};

#[test]
fn test_motion_follows_l_shaped_path() {
    let config = HanoiConfig::default().with_disc_count(3).with_step(7);
    let mut tower = Tower::new(&config);

    let rank = tower.lift(PegId::Left).expect("left peg holds discs");
    assert_eq!(rank, Rank::new(2));

    let start = *tower.disc(rank).expect("disc exists").position();
    let mut frames = 0;
    while tower.in_motion().is_some() {
        tower.tick_all();
        frames += 1;
        let disc = tower.disc(rank).expect("disc exists");
        assert_eq!(disc.position().x, start.x, "rising disc must not drift");
        assert!(disc.position().y >= *config.carry_height());
    }
    let expected_rise = (start.y - config.carry_height()) as usize;
    assert_eq!(frames, expected_rise.div_ceil(7));
    assert_eq!(
        *tower.disc(rank).expect("disc exists").position(),
        Point::new(start.x, *config.carry_height())
    );

    tower.place(rank, PegId::Right).expect("empty peg accepts any disc");
    let mut saw_descending = false;
    while tower.in_motion().is_some() {
        tower.tick_all();
        let disc = tower.disc(rank).expect("disc exists");
        if *disc.phase() == MotionPhase::Descending {
            saw_descending = true;
            assert_eq!(disc.position().x, config.peg_x(PegId::Right));
        } else if *disc.phase() == MotionPhase::Traversing {
            assert_eq!(disc.position().y, *config.carry_height());
        }
    }
    assert!(saw_descending);

    let rest = config.floor_y() - config.disc_thickness();
    assert_eq!(
        *tower.disc(rank).expect("disc exists").position(),
        Point::new(config.peg_x(PegId::Right), rest)
    );
    assert_eq!(*tower.disc(rank).expect("disc exists").phase(), MotionPhase::Idle);
}

#[test]
fn test_lift_rejected_while_moving() {
    let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(2));
    let rank = tower.lift(PegId::Left).expect("left peg holds discs");
    tower.tick_all();
    assert_eq!(tower.lift(PegId::Left), Err(MoveError::AlreadyBusy(rank)));
}

#[test]
fn test_lift_from_empty_peg() {
    let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(2));
    assert_eq!(
        tower.lift(PegId::Middle),
        Err(MoveError::EmptySourceSelection(PegId::Middle))
    );
}

#[test]
fn test_place_before_reaching_carry_height() {
    let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(2));
    let rank = tower.lift(PegId::Left).expect("left peg holds discs");
    assert_eq!(
        tower.place(rank, PegId::Right),
        Err(MoveError::AlreadyBusy(rank))
    );
}
