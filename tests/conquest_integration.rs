//! End-to-end tests for the conquest session

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use warmarch::catalog::{Difficulty, Race, UnitKind};
use warmarch::core::types::TerritoryId;
use warmarch::events::{Event, EventDeck, EventEffect};
use warmarch::player::Player;
use warmarch::session::{Session, SessionConfig, Verbosity};

fn easy_session(seed: u64) -> Session {
    Session::new(SessionConfig {
        race: Race::Human,
        difficulty: Difficulty::Easy,
        seed,
        verbosity: Verbosity::Quiet,
    })
}

/// Strip every territory of garrison and fortification so each assault is a
/// guaranteed victory.
fn raze_all_defenses(session: &mut Session) {
    let ids: Vec<TerritoryId> = session.map().territories().map(|t| t.id).collect();
    for id in ids {
        let territory = session.map_mut().get_mut(id).expect("known id");
        territory.base_defense = 0;
        territory.garrison.clear();
    }
}

#[test]
fn test_full_conquest_awards_every_stockpile() {
    let mut session = easy_session(42);
    raze_all_defenses(&mut session);
    session
        .player_mut()
        .units_mut()
        .add(UnitKind::HumanSoldier, 1000);

    let player_id = session.player().id;
    let mut expected = session.player().stockpile.clone();
    let mut battles = 0;

    while !session.map().is_conquered(player_id) {
        let target = session
            .map()
            .frontier_neutrals(player_id)
            .into_iter()
            .next()
            .expect("unconquered map has a frontier");

        let stores = session.map().get(target).unwrap().stockpile.clone();

        session
            .player_mut()
            .commit_to_attack(UnitKind::HumanSoldier, 10);
        let outcome = session.resolve_player_attack(target).unwrap();

        // Undefended ground cannot hold: win probability is exactly one.
        assert!(outcome.victory);
        assert_eq!(outcome.player_losses, 3);
        assert_eq!(session.map().get(target).unwrap().owner, Some(player_id));
        assert!(session.map().get(target).unwrap().garrison.is_empty());

        // Spoils are the full stockpile, credited past storage caps.
        expected.add(&stores);
        assert_eq!(session.player().stockpile.stone, expected.stone);
        assert_eq!(session.player().stockpile.wood, expected.wood);
        assert_eq!(session.player().stockpile.gold, expected.gold);

        battles += 1;
        assert!(battles <= 24, "easy map has 24 capturable territories");
    }

    assert_eq!(battles, 24);
    // Ten committed per battle, three fall each time, seven come home.
    assert_eq!(session.player().units().total(), 1000 - 3 * 24);
    assert!(session.player().attacking_units().is_empty());
}

#[test]
fn test_failed_assault_grinds_the_garrison() {
    let mut session = easy_session(7);
    let target = TerritoryId(2);

    {
        let territory = session.map_mut().get_mut(target).unwrap();
        territory.base_defense = 1_000_000_000_000;
        territory.garrison.clear();
        territory.garrison.add(UnitKind::OrcGrunt, 20);
    }

    session
        .player_mut()
        .units_mut()
        .add(UnitKind::HumanSoldier, 1);
    session
        .player_mut()
        .commit_to_attack(UnitKind::HumanSoldier, 1);

    let outcome = session.resolve_player_attack(target).unwrap();
    assert!(!outcome.victory);
    assert!(outcome.captured.is_none());

    // A tenth of sixty percent-plus rounds to nothing on one soldier; he
    // returns home to an unclaimed border.
    assert_eq!(session.player().units().count(UnitKind::HumanSoldier), 1);
    assert!(session.player().attacking_units().is_empty());
    assert_eq!(session.map().get(target).unwrap().owner, None);

    // The defenders lose 30%: six of twenty grunts.
    assert_eq!(outcome.enemy_losses, 6);
    assert_eq!(
        session
            .map()
            .get(target)
            .unwrap()
            .garrison
            .count(UnitKind::OrcGrunt),
        14
    );
}

#[test]
fn test_successful_defense_grinds_the_attacker() {
    let mut session = easy_session(9);
    let attacker = TerritoryId(25);

    {
        let territory = session.map_mut().get_mut(attacker).unwrap();
        territory.garrison.clear();
        territory.garrison.add(UnitKind::OrcGrunt, 10);
    }
    // The home fortress is unbreachable.
    let home = session.player().current_territory().unwrap();
    session.map_mut().get_mut(home).unwrap().base_defense = 1_000_000_000;

    session
        .player_mut()
        .units_mut()
        .add(UnitKind::HumanKnight, 10);

    let outcome = session.resolve_autonomous_attack(attacker).unwrap();
    assert!(outcome.victory);

    // Player loses the floor of 20%-plus of ten knights.
    assert_eq!(outcome.player_losses, 2);
    assert_eq!(session.player().units().count(UnitKind::HumanKnight), 8);

    // Eight of ten raiders fall, and attrition empties most of the garrison.
    assert_eq!(outcome.enemy_losses, 8);
    assert_eq!(
        session
            .map()
            .get(attacker)
            .unwrap()
            .garrison
            .count(UnitKind::OrcGrunt),
        2
    );
    // Home ground is untouched.
    assert_eq!(session.map().get(home).unwrap().owner, Some(session.player().id));
}

#[test]
fn test_failed_defense_costs_the_home_territory() {
    let mut session = easy_session(11);
    let player_id = session.player().id;
    let start = session.map().start();
    session.map_mut().capture(TerritoryId(2), player_id);

    let attacker = TerritoryId(6);
    {
        let territory = session.map_mut().get_mut(attacker).unwrap();
        territory.garrison.clear();
        territory.garrison.add(UnitKind::OrcGrunt, 1_000_000);
    }

    session
        .player_mut()
        .units_mut()
        .add(UnitKind::HumanSoldier, 10);

    let outcome = session.resolve_autonomous_attack(attacker).unwrap();
    assert!(!outcome.victory);

    // The horde takes just under 80% of the ten defenders.
    assert_eq!(outcome.player_losses, 7);
    assert_eq!(session.player().units().total(), 3);

    // Home falls to neutral hands and the player retreats to the next
    // held territory.
    assert_eq!(session.map().get(start).unwrap().owner, None);
    assert_eq!(session.player().current_territory(), Some(TerritoryId(2)));
    assert_eq!(session.map().player_territory_count(player_id), 1);

    // The victorious horde reports losses but its garrison stands; only a
    // lost battle grinds it down.
    assert_eq!(outcome.enemy_losses, 400_000);
    assert_eq!(
        session
            .map()
            .get(attacker)
            .unwrap()
            .garrison
            .count(UnitKind::OrcGrunt),
        1_000_000
    );
}

#[test]
fn test_same_seed_reproduces_the_world() {
    let a = easy_session(1234);
    let b = easy_session(1234);

    let snapshot = |s: &Session| {
        s.map()
            .territories()
            .map(|t| {
                (
                    t.id,
                    t.stockpile.clone(),
                    t.base_defense,
                    t.garrison.total(),
                )
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(snapshot(&a), snapshot(&b));
}

struct Tally(Arc<AtomicU32>);

impl EventEffect for Tally {
    fn apply(&self, _player: &mut Player) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_custom_deck_capabilities_are_invoked() {
    let counter = Arc::new(AtomicU32::new(0));
    let event = |name: &str| {
        Event::new(name, "", "", Box::new(Tally(Arc::clone(&counter))) as Box<dyn EventEffect>)
    };

    let deck = EventDeck::new(
        vec![event("boon")],
        vec![event("omen")],
        vec![event("blight")],
    )
    .unwrap();

    let mut session = Session::with_deck(
        SessionConfig {
            race: Race::Orc,
            difficulty: Difficulty::Hard,
            seed: 5,
            verbosity: Verbosity::Quiet,
        },
        deck,
    );

    for _ in 0..5 {
        session.apply_random_event();
    }
    assert_eq!(counter.load(Ordering::SeqCst), 5);
}
