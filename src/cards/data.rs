//! Built-in card data and curated decks.
//!
//! Release order is the card's position in `CARDS` (1-based).

use super::definition::CardRecord;
use crate::deck::DeckPreset;

const ICON_BASE: &str = "https://cdn.royaleapi.com/static/img/cards-150";

/// (name, icon slug, elixir) in release order.
const CARDS: &[(&str, &str, u8)] = &[
    ("Knight", "knight", 3),
    ("Archers", "archers", 3),
    ("Goblins", "goblins", 2),
    ("Giant", "giant", 5),
    ("P.E.K.K.A", "pekka", 7),
    ("Minions", "minions", 3),
    ("Balloon", "balloon", 5),
    ("Witch", "witch", 5),
    ("Barbarians", "barbarians", 5),
    ("Golem", "golem", 8),
    ("Skeletons", "skeletons", 1),
    ("Valkyrie", "valkyrie", 4),
    ("Skeleton Army", "skeleton-army", 3),
    ("Bomber", "bomber", 2),
    ("Musketeer", "musketeer", 4),
    ("Baby Dragon", "baby-dragon", 4),
    ("Prince", "prince", 5),
    ("Wizard", "wizard", 5),
    ("Mini P.E.K.K.A", "mini-pekka", 4),
    ("Spear Goblins", "spear-goblins", 2),
    ("Giant Skeleton", "giant-skeleton", 6),
    ("Hog Rider", "hog-rider", 4),
    ("Minion Horde", "minion-horde", 5),
    ("Ice Wizard", "ice-wizard", 3),
    ("Royal Giant", "royal-giant", 6),
    ("Three Musketeers", "three-musketeers", 9),
    ("Arrows", "arrows", 3),
    ("Fireball", "fireball", 4),
    ("Zap", "zap", 2),
    ("Rocket", "rocket", 6),
    ("Lightning", "lightning", 6),
    ("Goblin Barrel", "goblin-barrel", 3),
    ("Freeze", "freeze", 4),
    ("Rage", "rage", 2),
    ("Poison", "poison", 4),
    ("Cannon", "cannon", 3),
    ("Goblin Hut", "goblin-hut", 5),
    ("Mortar", "mortar", 4),
    ("Inferno Tower", "inferno-tower", 5),
    ("Bomb Tower", "bomb-tower", 4),
    ("Barbarian Hut", "barbarian-hut", 7),
    ("Tesla", "tesla", 4),
    ("Elixir Collector", "elixir-collector", 6),
    ("X-Bow", "x-bow", 6),
    ("Tombstone", "tombstone", 3),
    ("Princess", "princess", 3),
    ("Dark Prince", "dark-prince", 4),
    ("Guards", "guards", 3),
    ("Lava Hound", "lava-hound", 7),
    ("Ice Spirit", "ice-spirit", 1),
    ("Fire Spirit", "fire-spirit", 1),
    ("Miner", "miner", 3),
    ("Sparky", "sparky", 6),
    ("The Log", "the-log", 2),
    ("Tornado", "tornado", 3),
    ("Bowler", "bowler", 5),
    ("Lumberjack", "lumberjack", 4),
    ("Battle Ram", "battle-ram", 4),
    ("Inferno Dragon", "inferno-dragon", 4),
    ("Ice Golem", "ice-golem", 2),
    ("Mega Minion", "mega-minion", 3),
    ("Dart Goblin", "dart-goblin", 3),
    ("Goblin Gang", "goblin-gang", 3),
    ("Electro Wizard", "electro-wizard", 4),
    ("Elite Barbarians", "elite-barbarians", 6),
    ("Hunter", "hunter", 4),
    ("Executioner", "executioner", 5),
    ("Bandit", "bandit", 3),
    ("Royal Recruits", "royal-recruits", 7),
    ("Night Witch", "night-witch", 4),
    ("Bats", "bats", 2),
    ("Royal Ghost", "royal-ghost", 3),
    ("Ram Rider", "ram-rider", 5),
    ("Zappies", "zappies", 4),
    ("Rascals", "rascals", 5),
    ("Cannon Cart", "cannon-cart", 5),
    ("Mega Knight", "mega-knight", 7),
    ("Skeleton Barrel", "skeleton-barrel", 3),
    ("Flying Machine", "flying-machine", 4),
    ("Wall Breakers", "wall-breakers", 2),
    ("Royal Hogs", "royal-hogs", 5),
    ("Goblin Giant", "goblin-giant", 6),
    ("Earthquake", "earthquake", 3),
    ("Barbarian Barrel", "barbarian-barrel", 2),
    ("Giant Snowball", "giant-snowball", 2),
    ("Fisherman", "fisherman", 3),
    ("Magic Archer", "magic-archer", 4),
    ("Electro Dragon", "electro-dragon", 5),
    ("Firecracker", "firecracker", 3),
    ("Royal Delivery", "royal-delivery", 3),
    ("Elixir Golem", "elixir-golem", 3),
    ("Battle Healer", "battle-healer", 4),
    ("Goblin Cage", "goblin-cage", 4),
    ("Skeleton Dragons", "skeleton-dragons", 4),
    ("Electro Spirit", "electro-spirit", 1),
    ("Electro Giant", "electro-giant", 7),
    ("Mother Witch", "mother-witch", 4),
    ("Goblin Drill", "goblin-drill", 4),
    ("Golden Knight", "golden-knight", 4),
    ("Skeleton King", "skeleton-king", 4),
    ("Archer Queen", "archer-queen", 5),
    ("Mighty Miner", "mighty-miner", 4),
    ("Monk", "monk", 5),
    ("Phoenix", "phoenix", 4),
];

/// Curated decks: (name, card names).
const TOP_DECKS: &[(&str, [&str; 8])] = &[
    (
        "Hog 2.6 Cycle",
        [
            "Hog Rider",
            "Musketeer",
            "Ice Golem",
            "Ice Spirit",
            "Skeletons",
            "Cannon",
            "Fireball",
            "The Log",
        ],
    ),
    (
        "Classic Log Bait",
        [
            "Goblin Barrel",
            "Princess",
            "Goblin Gang",
            "Knight",
            "Inferno Tower",
            "Rocket",
            "The Log",
            "Ice Spirit",
        ],
    ),
    (
        "Golem Beatdown",
        [
            "Golem",
            "Night Witch",
            "Baby Dragon",
            "Lumberjack",
            "Tornado",
            "Lightning",
            "Mega Minion",
            "Barbarian Barrel",
        ],
    ),
    (
        "Lava Loon",
        [
            "Lava Hound",
            "Balloon",
            "Mega Minion",
            "Minions",
            "Skeleton Dragons",
            "Tombstone",
            "Fireball",
            "Zap",
        ],
    ),
    (
        "X-Bow 3.0",
        [
            "X-Bow",
            "Tesla",
            "Archers",
            "Knight",
            "Ice Golem",
            "Skeletons",
            "Fireball",
            "The Log",
        ],
    ),
];

/// Card records for the built-in catalog.
#[must_use]
pub fn builtin_records() -> Vec<CardRecord> {
    CARDS
        .iter()
        .enumerate()
        .map(|(i, &(name, slug, elixir))| {
            CardRecord::new(name, format!("{}/{}.png", ICON_BASE, slug), elixir, i as u32 + 1)
        })
        .collect()
}

/// The curated deck list shown on the site.
#[must_use]
pub fn top_decks() -> Vec<DeckPreset> {
    TOP_DECKS
        .iter()
        .map(|(name, cards)| DeckPreset::new(*name, cards.iter().copied()))
        .collect()
}
