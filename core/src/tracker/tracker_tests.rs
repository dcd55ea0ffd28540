//! Tests for the tracker state machine
//!
//! Drives the tracker with journal lines the way the watch loop does: every
//! line goes through the state monitor first, then the tracker.

use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use matfarm_types::TrackerConfig;
use serde_json::{Value, json};

use super::processor::{STATUS_HGE, STATUS_HGE_UNCONFIRMED, Tracker};
use super::state::TrackingState;
use crate::game_data::{
    MFG_EXQUISITEFOCUSCRYSTALS, MFG_IMPERIALSHIELDING, MFG_PROTOLIGHTALLOYS,
    MFG_PROTORADIOLICALLOYS, RAW_ANTIMONY, RAW_TIN, RAW_TUNGSTEN,
};
use crate::journal::{StateMonitor, parse_line};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 19, 0, 0).unwrap()
}

fn at(secs: i64) -> DateTime<Utc> {
    t0() + Duration::seconds(secs)
}

struct Harness {
    monitor: StateMonitor,
    tracker: Tracker,
    line: u64,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    fn with_config(config: TrackerConfig) -> Self {
        Self {
            monitor: StateMonitor::new(),
            tracker: Tracker::new(config),
            line: 0,
        }
    }

    /// Feed an event at `secs` after t0, using the entry time as "now"
    fn feed(&mut self, secs: i64, mut event: Value) -> bool {
        self.line += 1;
        event["timestamp"] = json!(at(secs).to_rfc3339_opts(SecondsFormat::Secs, true));
        let entry = parse_line(self.line, &event.to_string()).unwrap().unwrap();
        self.monitor.apply(&entry);
        self.tracker
            .handle_entry(&entry, self.monitor.snapshot(), entry.timestamp)
    }

    fn status(&self) -> &str {
        self.tracker.display().status()
    }

    fn labels(&self) -> Vec<String> {
        self.tracker
            .frame(t0())
            .rows
            .into_iter()
            .map(|row| row.label)
            .collect()
    }

    fn assert_exclusive(&self) {
        let state = self.tracker.state();
        assert!(!(state.location().is_some() && state.emission().is_some()));
    }
}

fn fsd_jump(system: &str, allegiance: &str, faction_state: &str, population: u64) -> Value {
    json!({
        "event": "FSDJump",
        "StarSystem": system,
        "SystemAllegiance": allegiance,
        "SystemFaction": { "Name": "Local Faction", "FactionState": faction_state },
        "Population": population,
    })
}

fn quiet_jump(system: &str) -> Value {
    json!({ "event": "FSDJump", "StarSystem": system, "Population": 0 })
}

fn approach(system: &str, body: &str) -> Value {
    json!({ "event": "ApproachBody", "StarSystem": system, "Body": body })
}

fn leave(system: &str, body: &str) -> Value {
    json!({ "event": "LeaveBody", "StarSystem": system, "Body": body })
}

fn hge_signal() -> Value {
    json!({
        "event": "FSSSignalDiscovered",
        "SignalName": "$USS_HighGradeEmissions;",
        "USSType": "$USS_Type_VeryValuableSalvage;",
    })
}

fn collected(category: &str, name: &str, count: u32) -> Value {
    json!({ "event": "MaterialCollected", "Category": category, "Name": name, "Count": count })
}

fn arrive_at_koli(harness: &mut Harness) {
    harness.feed(0, quiet_jump("Koli Discii"));
    harness.feed(60, approach("Koli Discii", "Koli Discii C 6 a"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Location tracking
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_known_location_shows_rows_with_caps() {
    let mut harness = Harness::new();
    harness.feed(0, quiet_jump("Koli Discii"));
    assert!(harness.tracker.state().is_idle());

    assert!(harness.feed(60, approach("Koli Discii", "Koli Discii C 6 a")));

    let location = harness.tracker.state().location().expect("tracking location");
    assert_eq!(location.body, "Koli Discii C 6 a");
    assert_eq!(harness.status(), "Crashed Anaconda");

    let frame = harness.tracker.frame(at(60));
    assert!(frame.visible);
    assert_eq!(
        harness.labels(),
        vec![
            "G4 Antimony",
            "G4 Ruthenium",
            "G4 Tellurium",
            "G3 Tungsten",
            "G2 Zirconium",
        ]
    );
    let caps: Vec<u32> = frame.rows.iter().map(|row| row.max_qty).collect();
    assert_eq!(caps, vec![150, 150, 150, 200, 250]);
    assert!(frame.rows.iter().all(|row| row.quantity == 0));
    assert!(frame.rows.iter().all(|row| row.expires_in_secs.is_none()));
}

#[test]
fn test_location_frame_carries_trader() {
    let mut harness = Harness::new();
    harness.feed(0, quiet_jump("HIP 12099"));
    harness.feed(30, approach("HIP 12099", "HIP 12099 1 b"));

    let trader = harness.tracker.frame(at(30)).trader.expect("trader");
    assert_eq!(trader.system, "Diaguandri");
    assert_eq!(trader.station, "Ray Gateway");
}

#[test]
fn test_leaving_location_clears_everything() {
    let mut harness = Harness::new();
    arrive_at_koli(&mut harness);
    assert!(!harness.tracker.display().is_empty());

    assert!(harness.feed(120, leave("Koli Discii", "Koli Discii C 6 a")));

    assert!(harness.tracker.state().is_idle());
    assert_eq!(harness.status(), "");
    assert!(harness.tracker.display().is_empty());
    assert!(!harness.tracker.frame(at(120)).visible);
}

#[test]
fn test_quantity_is_min_of_cap_and_count() {
    let mut harness = Harness::new();
    arrive_at_koli(&mut harness);

    harness.feed(
        90,
        json!({
            "event": "Materials",
            "Raw": [
                { "Name": "antimony", "Count": 400 },
                { "Name": "tungsten", "Count": 12 },
            ],
            "Manufactured": [],
            "Encoded": [],
        }),
    );

    let display = harness.tracker.display();
    assert_eq!(display.row(&RAW_ANTIMONY).unwrap().quantity, 150);
    assert_eq!(display.row(&RAW_TUNGSTEN).unwrap().quantity, 12);
    assert!(display
        .rows()
        .filter(|row| row.material != RAW_ANTIMONY && row.material != RAW_TUNGSTEN)
        .all(|row| row.quantity == 0));
}

#[test]
fn test_counts_known_before_arrival_show_on_acquisition() {
    let mut harness = Harness::new();
    harness.feed(0, quiet_jump("Koli Discii"));
    harness.feed(
        10,
        json!({ "event": "Materials", "Raw": [{ "Name": "tungsten", "Count": 33 }] }),
    );
    harness.feed(60, approach("Koli Discii", "Koli Discii C 6 a"));

    assert_eq!(
        harness.tracker.display().row(&RAW_TUNGSTEN).unwrap().quantity,
        33
    );
}

#[test]
fn test_localised_names_used_for_new_rows() {
    let mut harness = Harness::new();
    harness.feed(
        0,
        json!({
            "event": "Materials",
            "Raw": [{ "Name": "antimony", "Name_Localised": "Antimon", "Count": 1 }],
        }),
    );
    arrive_at_koli(&mut harness);

    assert_eq!(harness.labels()[0], "G4 Antimon");
}

// ─────────────────────────────────────────────────────────────────────────────
// Temporary rows
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_pickup_while_idle_adds_expiring_row() {
    let mut harness = Harness::new();
    harness.feed(0, quiet_jump("Sol"));

    assert!(harness.feed(10, collected("Raw", "antimony", 3)));
    assert!(harness.tracker.state().is_idle());

    let row = harness.tracker.display().row(&RAW_ANTIMONY).expect("temp row");
    assert_eq!(row.expiry, Some(at(10 + 90)));
    assert_eq!(row.quantity, 3);

    assert!(!harness.tracker.expire(at(10 + 89)));
    assert!(harness.tracker.expire(at(10 + 91)));
    assert!(harness.tracker.display().is_empty());
    assert!(!harness.tracker.frame(at(10 + 91)).visible);
}

#[test]
fn test_temp_row_ttl_is_configurable() {
    let config = TrackerConfig {
        temp_row_ttl_secs: 30,
        ..TrackerConfig::default()
    };
    let mut harness = Harness::with_config(config);
    harness.feed(0, collected("Raw", "tin", 1));

    assert_eq!(
        harness.tracker.display().row(&RAW_TIN).unwrap().expiry,
        Some(at(30))
    );
}

#[test]
fn test_pickup_never_downgrades_permanent_row() {
    let mut harness = Harness::new();
    arrive_at_koli(&mut harness);

    harness.feed(100, collected("Raw", "antimony", 2));

    let row = harness.tracker.display().row(&RAW_ANTIMONY).unwrap();
    assert!(row.is_permanent());
    assert_eq!(row.quantity, 2);
    assert!(!harness.tracker.expire(at(10_000)));
    assert_eq!(harness.tracker.display().len(), 5);
}

#[test]
fn test_unknown_pickup_is_ignored() {
    let mut harness = Harness::new();
    assert!(!harness.feed(0, collected("Raw", "unobtainium", 1)));
    assert!(harness.tracker.display().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Emissions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_matching_system_tracks_unconfirmed_emission() {
    let mut harness = Harness::new();
    assert!(harness.feed(0, fsd_jump("Achenar", "Empire", "Boom", 12_000_000)));

    let emission = harness.tracker.state().emission().expect("tracking emission");
    assert_eq!(emission.system.as_deref(), Some("Achenar"));
    assert_eq!(emission.emissions.len(), 2);
    assert_eq!(harness.status(), STATUS_HGE_UNCONFIRMED);

    let display = harness.tracker.display();
    for material in [
        MFG_IMPERIALSHIELDING,
        MFG_EXQUISITEFOCUSCRYSTALS,
        MFG_PROTOLIGHTALLOYS,
        MFG_PROTORADIOLICALLOYS,
    ] {
        assert!(display.row(&material).unwrap().is_permanent());
    }
}

#[test]
fn test_signal_confirms_emission() {
    let mut harness = Harness::new();
    harness.feed(0, fsd_jump("Achenar", "Empire", "Boom", 12_000_000));
    assert!(harness.feed(20, hge_signal()));

    assert_eq!(harness.status(), STATUS_HGE);
    assert!(harness.tracker.session().saw_valuable_signal);
}

#[test]
fn test_low_population_never_tracks_emission() {
    let mut harness = Harness::new();
    harness.feed(0, fsd_jump("Quiet Place", "Empire", "Boom", 5_000_000));

    assert!(harness.tracker.state().is_idle());
    assert_eq!(harness.status(), "");
    assert!(harness.tracker.display().is_empty());
}

#[test]
fn test_population_threshold_is_inclusive() {
    let mut harness = Harness::new();
    harness.feed(0, fsd_jump("Edge", "Federation", "None", 10_000_000));
    assert!(harness.tracker.state().emission().is_some());
}

#[test]
fn test_signal_alone_starts_emission_without_rows() {
    let mut harness = Harness::new();
    harness.feed(0, quiet_jump("Nowhere"));
    harness.feed(30, hge_signal());

    let emission = harness.tracker.state().emission().expect("tracking emission");
    assert!(emission.emissions.is_empty());
    assert_eq!(harness.status(), STATUS_HGE);
    assert!(harness.tracker.display().is_empty());
}

#[test]
fn test_jump_ends_emission_and_resets_signal() {
    let mut harness = Harness::new();
    harness.feed(0, quiet_jump("Nowhere"));
    harness.feed(30, hge_signal());
    assert!(harness.tracker.state().emission().is_some());

    assert!(harness.feed(90, quiet_jump("Elsewhere")));

    assert!(harness.tracker.state().is_idle());
    assert!(!harness.tracker.session().saw_valuable_signal);
    assert_eq!(harness.status(), "");
}

#[test]
fn test_body_ends_emission_and_location_takes_over() {
    let mut harness = Harness::new();
    harness.feed(0, quiet_jump("Koli Discii"));
    harness.feed(10, hge_signal());
    harness.feed(15, collected("Raw", "tin", 1));
    assert!(harness.tracker.state().emission().is_some());
    assert!(harness.tracker.display().row(&RAW_TIN).is_some());

    harness.feed(60, approach("Koli Discii", "Koli Discii C 6 a"));

    harness.assert_exclusive();
    assert!(matches!(harness.tracker.state(), TrackingState::Location(_)));
    assert_eq!(harness.status(), "Crashed Anaconda");
    // Rows from the emission, temp rows included, are gone
    assert!(harness.tracker.display().row(&RAW_TIN).is_none());
}

#[test]
fn test_dropping_out_at_a_star_ends_emission() {
    let mut harness = Harness::new();
    harness.feed(0, quiet_jump("Nowhere"));
    harness.feed(10, hge_signal());
    harness.feed(15, collected("Raw", "tin", 1));
    assert!(harness.tracker.state().emission().is_some());

    let star_exit = json!({ "event": "SupercruiseExit", "StarSystem": "Nowhere", "Body": "Nowhere A", "BodyType": "Star" });
    assert!(harness.feed(40, star_exit));
    assert!(harness.tracker.state().is_idle());
    assert_eq!(harness.status(), "");
    assert!(harness.tracker.display().row(&RAW_TIN).is_none());

    // Back in supercruise the signal still counts
    harness.feed(70, json!({ "event": "SupercruiseEntry", "StarSystem": "Nowhere" }));
    assert!(harness.tracker.state().emission().is_some());
    assert_eq!(harness.status(), STATUS_HGE);
}

#[test]
fn test_signal_does_not_override_location_status() {
    let mut harness = Harness::new();
    arrive_at_koli(&mut harness);

    assert!(!harness.feed(90, hge_signal()));
    assert_eq!(harness.status(), "Crashed Anaconda");
    assert!(harness.tracker.state().location().is_some());
}

#[test]
fn test_emission_tracking_can_be_disabled() {
    let config = TrackerConfig {
        track_emissions: false,
        ..TrackerConfig::default()
    };
    let mut harness = Harness::with_config(config);
    harness.feed(0, fsd_jump("Achenar", "Empire", "Boom", 12_000_000));

    assert!(harness.tracker.state().is_idle());
    assert!(harness.tracker.display().is_empty());
}

#[test]
fn test_signal_ignored_when_emissions_disabled() {
    let config = TrackerConfig {
        track_emissions: false,
        ..TrackerConfig::default()
    };
    let mut harness = Harness::with_config(config);
    harness.feed(0, quiet_jump("Nowhere"));

    assert!(!harness.feed(30, hge_signal()));
    assert!(harness.tracker.state().is_idle());
    assert_eq!(harness.status(), "");

    harness.feed(90, quiet_jump("Elsewhere"));
    harness.feed(180, quiet_jump("Further"));
    assert!(harness.tracker.state().is_idle());
    assert_eq!(harness.status(), "");
}

// ─────────────────────────────────────────────────────────────────────────────
// Inventory changes
// ─────────────────────────────────────────────────────────────────────────────

fn starting_inventory() -> Value {
    json!({
        "event": "Materials",
        "Raw": [
            { "Name": "antimony", "Count": 40 },
            { "Name": "tin", "Count": 10 },
        ],
    })
}

#[test]
fn test_trade_updates_displayed_quantity() {
    let mut harness = Harness::new();
    harness.feed(0, starting_inventory());
    arrive_at_koli(&mut harness);
    assert_eq!(harness.tracker.display().row(&RAW_ANTIMONY).unwrap().quantity, 40);

    let changed = harness.feed(
        120,
        json!({
            "event": "MaterialTrade",
            "MarketID": 128_666_762,
            "TraderType": "raw",
            "Paid": { "Material": "antimony", "Category": "Raw", "Quantity": 6 },
            "Received": { "Material": "tungsten", "Category": "Raw", "Quantity": 1 },
        }),
    );

    assert!(changed);
    let display = harness.tracker.display();
    assert_eq!(display.row(&RAW_ANTIMONY).unwrap().quantity, 34);
    assert_eq!(display.row(&RAW_TUNGSTEN).unwrap().quantity, 1);
}

#[test]
fn test_discard_updates_displayed_quantity() {
    let mut harness = Harness::new();
    harness.feed(0, starting_inventory());
    arrive_at_koli(&mut harness);

    assert!(harness.feed(120, json!({ "event": "MaterialDiscarded", "Category": "Raw", "Name": "antimony", "Count": 15 })));
    assert_eq!(harness.tracker.display().row(&RAW_ANTIMONY).unwrap().quantity, 25);

    // Counts for materials with no row change nothing on screen
    assert!(!harness.feed(130, json!({ "event": "MaterialDiscarded", "Category": "Raw", "Name": "tin", "Count": 2 })));
}

// ─────────────────────────────────────────────────────────────────────────────
// Shutdown & exclusivity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_shutdown_resets_tracker() {
    let mut harness = Harness::new();
    arrive_at_koli(&mut harness);
    harness.feed(90, hge_signal());

    assert!(harness.feed(120, json!({ "event": "Shutdown" })));

    assert!(harness.tracker.state().is_idle());
    assert_eq!(harness.status(), "");
    assert!(harness.tracker.display().is_empty());
    assert!(!harness.tracker.session().saw_valuable_signal);

    // Nothing left to clear
    assert!(!harness.feed(130, json!({ "event": "ShutDown" })));
}

#[test]
fn test_tracking_is_always_exclusive() {
    let mut harness = Harness::new();
    let events = vec![
        fsd_jump("Koli Discii", "Empire", "War", 20_000_000),
        hge_signal(),
        approach("Koli Discii", "Koli Discii C 6 a"),
        collected("Raw", "antimony", 1),
        leave("Koli Discii", "Koli Discii C 6 a"),
        quiet_jump("Orrere"),
        json!({ "event": "SupercruiseExit", "StarSystem": "Orrere", "Body": "Orrere 2 b", "BodyType": "Planet" }),
        json!({ "event": "Shutdown" }),
    ];

    for (idx, event) in events.into_iter().enumerate() {
        harness.feed(idx as i64 * 30, event);
        harness.assert_exclusive();
    }
}
