//! Tests for the optimal planner, replayed against a live tower.

use strictly_hanoi::{
    HanoiConfig, InvariantSet, PegId, Rank, Tower, TowerInvariants, move_count, plan,
};

fn settle(tower: &mut Tower) {
    let mut frames = 0;
    while tower.in_motion().is_some() {
        tower.tick_all();
        frames += 1;
        assert!(frames < 10_000, "tower never settled");
    }
}

#[test]
fn test_three_disc_textbook_plan() {
    let moves = plan(PegId::Left, PegId::Middle, PegId::Right, 3);
    let indices: Vec<_> = moves.iter().map(|mv| mv.as_indices()).collect();
    assert_eq!(
        indices,
        vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
    );
}

#[test]
fn test_plan_length_is_minimal() {
    for n in 0..=12 {
        let moves = plan(PegId::Left, PegId::Middle, PegId::Right, n);
        assert_eq!(moves.len() as u64, move_count(n), "wrong length for {n} discs");
    }
}

#[test]
fn test_plan_never_uses_same_peg_twice() {
    let moves = plan(PegId::Middle, PegId::Right, PegId::Left, 6);
    assert!(moves.iter().all(|mv| mv.from != mv.to));
}

#[test]
fn test_replay_solves_every_size() {
    for n in 1..=10 {
        let config = HanoiConfig::default().with_disc_count(n).with_step(1000);
        let mut tower = Tower::new(&config);

        for mv in plan(PegId::Left, PegId::Middle, PegId::Right, n) {
            let rank = tower.lift(mv.from).expect("plan lifts from a non-empty peg");
            settle(&mut tower);
            tower.place(rank, mv.to).expect("plan only makes legal moves");
            settle(&mut tower);
            <TowerInvariants as InvariantSet<Tower>>::check_all(&tower)
                .expect("invariants hold after every move");
        }

        assert!(tower.is_solved(PegId::Right), "{n} discs not solved");
        let expected: Vec<_> = (0..n).map(Rank::new).collect();
        assert_eq!(tower.peg(PegId::Right).stack(), &expected);
        assert!(tower.peg(PegId::Left).is_empty());
        assert!(tower.peg(PegId::Middle).is_empty());
    }
}
