use super::*;
use crate::services::cards::build_cards;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

// =============================================================================
// sample_unique_names
// =============================================================================

#[test]
fn sample_unique_names_are_distinct_and_from_pool() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let names = sample_unique_names(&NAME_POOL, INITIAL_PARTICIPANTS, &mut rng).unwrap();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), INITIAL_PARTICIPANTS);
        assert_eq!(unique.len(), INITIAL_PARTICIPANTS, "seed {seed}: {names:?}");
        assert!(names.iter().all(|n| NAME_POOL.contains(n)));
    }
}

#[test]
fn sample_unique_names_whole_pool_terminates() {
    let mut rng = StdRng::seed_from_u64(7);
    let names = sample_unique_names(&NAME_POOL, NAME_POOL.len(), &mut rng).unwrap();
    let unique: HashSet<_> = names.into_iter().collect();
    assert_eq!(unique.len(), NAME_POOL.len());
}

#[test]
fn sample_unique_names_rejects_oversized_sample() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = sample_unique_names(&["A", "B"], 3, &mut rng).unwrap_err();
    assert!(matches!(err, BoardError::NamePoolExhausted { requested: 3, available: 2 }));
}

#[test]
fn sample_unique_names_zero_is_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(sample_unique_names(&[], 0, &mut rng).unwrap().is_empty());
}

// =============================================================================
// votes
// =============================================================================

#[test]
fn random_vote_comes_from_deck() {
    let cards = build_cards(3);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let vote = random_vote(&cards, &mut rng).unwrap();
        assert!(cards.iter().any(|c| c.face_value == vote));
    }
}

#[test]
fn random_vote_empty_deck_is_error() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(random_vote(&[], &mut rng), Err(BoardError::EmptyDeck));
}

#[test]
fn generate_participants_empty_deck_is_error() {
    let mut rng = StdRng::seed_from_u64(4);
    let result = generate_participants(&[], INITIAL_PARTICIPANTS, &mut rng);
    assert_eq!(result, Err(BoardError::EmptyDeck));
}

#[test]
fn owner_participant_empty_deck_is_error() {
    let mut rng = StdRng::seed_from_u64(4);
    assert_eq!(owner_participant(&[], &mut rng), Err(BoardError::EmptyDeck));
}

#[test]
fn generate_participants_assigns_deck_votes() {
    let cards = build_cards(5);
    let mut rng = StdRng::seed_from_u64(11);
    let participants = generate_participants(&cards, INITIAL_PARTICIPANTS, &mut rng).unwrap();
    assert_eq!(participants.len(), INITIAL_PARTICIPANTS);
    for p in &participants {
        assert!(!p.is_owner());
        assert!(cards.iter().any(|c| c.face_value == p.vote), "{p:?}");
    }
}

#[test]
fn owner_participant_uses_sentinel() {
    let cards = build_cards(2);
    let mut rng = StdRng::seed_from_u64(5);
    let owner = owner_participant(&cards, &mut rng).unwrap();
    assert!(owner.is_owner());
    assert!(owner.vote == 0.5 || owner.vote == 1.0);
}
