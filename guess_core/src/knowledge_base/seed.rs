//! Starter collection used when no store exists yet.

use guess_rules::Subject;

/// Natural phrasing for the seed attribute keys.
pub const SEED_QUESTIONS: &[(&str, &str)] = &[
    ("hair_dark", "Does your character have dark hair?"),
    ("wears_glasses", "Does your character wear glasses?"),
    ("is_hero", "Is your character a hero or heroine?"),
    ("is_animated", "Does your character come from an animated series?"),
    ("has_powers", "Does your character have supernatural powers?"),
    ("is_human", "Is your character human?"),
    ("has_suit", "Does your character wear an iconic suit?"),
    ("is_villain", "Is your character a villain?"),
];

/// Phrasing for the Spanish keys found in stores written by the original tool.
pub const LEGACY_QUESTIONS: &[(&str, &str)] = &[
    ("cabello_oscuro", "¿Tiene cabello oscuro?"),
    ("usa_lentes", "¿Usa lentes?"),
    ("es_heroe", "¿Es un héroe o heroína?"),
    ("es_animado", "¿Pertenece a una serie animada?"),
    ("tiene_poderes", "¿Tiene poderes sobrenaturales?"),
    ("es_humano", "¿Es humano?"),
    ("tiene_traje", "¿Tiene un traje icónico?"),
    ("es_villano", "¿Es villano o villana?"),
];

const SEED_KEYS: [&str; 8] = [
    "hair_dark",
    "wears_glasses",
    "is_hero",
    "is_animated",
    "has_powers",
    "is_human",
    "has_suit",
    "is_villain",
];

fn profile(name: &str, group: &str, category: &str, values: [bool; 8]) -> Subject {
    Subject::new(name, category, group).with_attributes(SEED_KEYS.into_iter().zip(values))
}

/// The ten pop-culture characters every fresh store starts with.
///
/// Attribute order: hair_dark, wears_glasses, is_hero, is_animated,
/// has_powers, is_human, has_suit, is_villain.
pub fn seed_subjects() -> Vec<Subject> {
    vec![
        profile(
            "Iron Man",
            "Male",
            "Marvel",
            [true, false, true, false, false, true, true, false],
        ),
        profile(
            "Batman",
            "Male",
            "DC Comics",
            [true, false, true, false, false, true, true, false],
        ),
        profile(
            "Homer Simpson",
            "Male",
            "The Simpsons",
            [false, false, false, true, false, true, false, false],
        ),
        profile(
            "Darth Vader",
            "Male",
            "Star Wars",
            [false, false, false, false, true, false, true, true],
        ),
        profile(
            "Harry Potter",
            "Male",
            "Harry Potter",
            [true, true, true, false, true, true, false, false],
        ),
        profile(
            "Wonder Woman",
            "Female",
            "DC Comics",
            [true, false, true, false, true, true, true, false],
        ),
        profile(
            "Elsa",
            "Female",
            "Frozen",
            [false, false, true, true, true, true, true, false],
        ),
        profile(
            "Harley Quinn",
            "Female",
            "DC Comics",
            [false, false, false, false, false, true, true, true],
        ),
        profile(
            "Hermione Granger",
            "Female",
            "Harry Potter",
            [true, false, true, false, true, true, false, false],
        ),
        profile(
            "Lisa Simpson",
            "Female",
            "The Simpsons",
            [false, false, false, true, false, true, false, false],
        ),
    ]
}
