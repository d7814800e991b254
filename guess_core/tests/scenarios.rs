//! End-to-end games against a store on disk.

use guess_core::testing::ScriptedPrompter;
use guess_core::{rank, Game, KnowledgeStore, SchemaRegistry};
use guess_rules::{AnswerMap, ResponseVocabulary, Subject};
use tempfile::TempDir;

fn answers(pairs: &[(&str, bool)]) -> AnswerMap {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

// =============================================================================
// Scenario A: equal score, popularity decides
// =============================================================================

#[test]
fn test_scenario_a_popularity_wins_tie() {
    let subjects = vec![
        Subject::new("Plain", "", "")
            .with_attribute("hair_dark", true)
            .with_attribute("wears_glasses", false),
        Subject::new("Popular", "", "")
            .with_attribute("hair_dark", true)
            .with_attribute("wears_glasses", true)
            .with_popularity(5),
    ];

    let ranking = rank(&subjects, &answers(&[("hair_dark", true)]));
    let best = ranking.best().unwrap();

    assert_eq!(subjects[best.index].name, "Popular");
    assert_eq!(best.score, 1);
}

// =============================================================================
// Scenario B: all unknown
// =============================================================================

#[test]
fn test_scenario_b_all_unknown_first_inserted_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("subjects.json");
    let store = KnowledgeStore::open(&path).unwrap();
    let mut game = Game::new(store, ResponseVocabulary::english());

    let mut script = vec!["unknown"; game.registry().len()];
    script.extend(["yes", "no"]);
    let mut prompter = ScriptedPrompter::new(script);

    game.run(&mut prompter).unwrap();

    assert!(prompter.said("Iron Man from Marvel"));
    assert_eq!(KnowledgeStore::load(&path).unwrap().subjects()[0].popularity, 1);
}

#[test]
fn test_scenario_b_all_unknown_most_popular_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("subjects.json");
    let mut store = KnowledgeStore::open(&path).unwrap();
    store.confirm(6).unwrap();

    let ranking = rank(store.subjects(), &AnswerMap::new());
    assert_eq!(store.subjects()[ranking.best().unwrap().index].name, "Elsa");
}

// =============================================================================
// Scenario C: teaching Neo
// =============================================================================

#[test]
fn test_scenario_c_learned_question_in_next_process() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("subjects.json");

    {
        let store = KnowledgeStore::open(&path).unwrap();
        let mut game = Game::new(store, ResponseVocabulary::english());
        let mut script = vec!["unknown"; game.registry().len()];
        script.extend([
            "no", // not Iron Man
            "Neo",
            "The Matrix",
            "Male",
            "Can dodge bullets?",
            "yes",
            "no", // quit
        ]);
        let mut prompter = ScriptedPrompter::new(script);
        let summary = game.run(&mut prompter).unwrap();
        assert_eq!(summary.learned, 1);
    }

    // A new process re-derives the registry from disk.
    let store = KnowledgeStore::open(&path).unwrap();
    let registry = SchemaRegistry::from_subjects(store.subjects());
    assert_eq!(registry.question_for("can_dodge_bullets"), Some("Can dodge bullets?"));

    let ranking = rank(store.subjects(), &answers(&[("can_dodge_bullets", true)]));
    let best = ranking.best().unwrap();
    assert_eq!(store.subjects()[best.index].name, "Neo");
    assert!(best.score >= 1);

    let neo = &store.subjects()[best.index];
    assert_eq!(neo.category, "The Matrix");
    assert_eq!(neo.group, "Male");
    assert_eq!(neo.popularity, 0);
    // Every session answer was "unknown", so only the taught key is set.
    assert_eq!(neo.attributes.len(), 1);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_store_survives_a_full_game() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("subjects.json");

    let store = KnowledgeStore::open(&path).unwrap();
    let mut game = Game::new(store, ResponseVocabulary::spanish());
    // Harry Potter: dark hair, glasses, hero, powers.
    let script: Vec<&str> = game
        .registry()
        .entries()
        .iter()
        .map(|entry| match entry.key.as_str() {
            "hair_dark" | "wears_glasses" | "is_hero" | "has_powers" | "is_human" => "si",
            _ => "no",
        })
        .chain(["si", "no"])
        .collect();
    let mut prompter = ScriptedPrompter::new(script);

    game.run(&mut prompter).unwrap();
    assert!(prompter.said("Harry Potter from Harry Potter"));

    let in_memory = game.into_store();
    let on_disk = KnowledgeStore::load(&path).unwrap();
    assert_eq!(in_memory.subjects(), on_disk.subjects());

    let harry = on_disk.subjects().iter().find(|s| s.name == "Harry Potter").unwrap();
    assert_eq!(harry.popularity, 1);
}

#[test]
fn test_duplicate_names_are_kept_apart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("subjects.json");

    let store = KnowledgeStore::open(&path).unwrap();
    let mut game = Game::new(store, ResponseVocabulary::english());
    let mut script = vec!["unknown"; game.registry().len()];
    script.extend(["no", "Iron Man", "Marvel", "Male", "Is the movie version", "yes", "no"]);
    let mut prompter = ScriptedPrompter::new(script);
    game.run(&mut prompter).unwrap();

    let store = KnowledgeStore::load(&path).unwrap();
    let iron_men: Vec<&Subject> = store
        .subjects()
        .iter()
        .filter(|s| s.name == "Iron Man")
        .collect();
    assert_eq!(iron_men.len(), 2);
    assert_ne!(iron_men[0].attributes, iron_men[1].attributes);
}
