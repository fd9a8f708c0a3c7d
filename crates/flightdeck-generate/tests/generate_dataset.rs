use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use flightdeck_core::DatasetConfig;
use flightdeck_generate::{GenerateOptions, GenerationEngine, GenerationError};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("flightdeck_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn run_engine(config: &DatasetConfig, seed: u64, label: &str) -> PathBuf {
    let options = GenerateOptions {
        out_dir: temp_out_dir(label),
        seed,
    };
    let engine = GenerationEngine::new(options);
    engine.run(config).expect("run generation").run_dir
}

fn read_rows(run_dir: &PathBuf, table: &str) -> Vec<Vec<String>> {
    let contents =
        fs::read_to_string(run_dir.join(table)).unwrap_or_else(|_| panic!("missing {table}"));
    contents
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

#[test]
fn run_writes_all_tables_with_expected_headers() {
    let config = DatasetConfig {
        flights: 25,
        passengers: 60,
        gates: 12,
        routes: 30,
        ..DatasetConfig::default()
    };
    let run_dir = run_engine(&config, 7, "headers");

    let flights = read_rows(&run_dir, "flights.csv");
    assert_eq!(
        flights[0].join(","),
        "id,airline,origin,destination,departure,arrival,gate,price,seats,status"
    );
    assert_eq!(flights.len(), 26);

    let gates = read_rows(&run_dir, "gates.csv");
    assert_eq!(gates[0].join(","), "gate_number,terminal,status,flight_id");
    assert_eq!(gates.len(), 13);

    let passengers = read_rows(&run_dir, "passengers.csv");
    assert_eq!(
        passengers[0].join(","),
        "pnr,name,email,flight_id,seat,checked_in"
    );
    assert_eq!(passengers.len(), 61);

    let routes = read_rows(&run_dir, "routes.csv");
    assert_eq!(routes[0].join(","), "from,to,distance,price,duration,flight_id");
    assert!(routes.len() <= 31);
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let config = DatasetConfig {
        flights: 30,
        passengers: 40,
        gates: 15,
        routes: 25,
        ..DatasetConfig::default()
    };
    let run_a = run_engine(&config, 99, "det_a");
    let run_b = run_engine(&config, 99, "det_b");

    for table in ["flights.csv", "gates.csv", "passengers.csv", "routes.csv"] {
        let a = fs::read_to_string(run_a.join(table)).expect("read run A");
        let b = fs::read_to_string(run_b.join(table)).expect("read run B");
        assert_eq!(a, b, "{table} should be deterministic");
    }
}

#[test]
fn occupancy_cap_holds_for_ten_gates() {
    let config = DatasetConfig {
        flights: 10,
        passengers: 5,
        gates: 10,
        routes: 5,
        ..DatasetConfig::default()
    };
    let run_dir = run_engine(&config, 3, "cap");

    let gates = read_rows(&run_dir, "gates.csv");
    let occupied = gates[1..]
        .iter()
        .filter(|row| row[2] == "Occupied")
        .count();
    assert!(occupied <= 7, "got {occupied} occupied gates");
}

#[test]
fn occupied_gates_match_patched_flights() {
    let config = DatasetConfig {
        flights: 40,
        passengers: 10,
        gates: 20,
        routes: 10,
        ..DatasetConfig::default()
    };
    let run_dir = run_engine(&config, 11, "reconcile");

    let flights = read_rows(&run_dir, "flights.csv");
    let gates = read_rows(&run_dir, "gates.csv");

    for gate in &gates[1..] {
        if gate[2] != "Occupied" {
            assert!(gate[3].is_empty(), "idle gate {} has a flight", gate[0]);
            continue;
        }
        let code = &gate[0];
        let flight_id = &gate[3];
        assert!(
            flights[1..]
                .iter()
                .any(|row| &row[0] == flight_id && &row[6] == code),
            "gate {code} points at {flight_id} but no flight carries it"
        );
    }
}

#[test]
fn route_pairs_are_unique_and_shortfall_is_reported() {
    let config = DatasetConfig {
        flights: 20,
        passengers: 5,
        gates: 10,
        routes: 300,
        ..DatasetConfig::default()
    };
    let run_dir = run_engine(&config, 21, "routes");

    let routes = read_rows(&run_dir, "routes.csv");
    let mut seen = HashSet::new();
    for row in &routes[1..] {
        assert!(
            seen.insert((row[0].clone(), row[1].clone())),
            "duplicate pair {} -> {}",
            row[0],
            row[1]
        );
    }

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(run_dir.join("generation_report.json")).expect("read report"),
    )
    .expect("parse report");

    let tables = report["tables"].as_array().expect("tables array");
    let routes_report = tables
        .iter()
        .find(|table| table["table"] == "routes")
        .expect("routes report");
    let generated = routes_report["rows_generated"].as_u64().expect("generated");
    let dropped = report["duplicates_dropped"].as_u64().expect("dropped");

    assert_eq!(generated, (routes.len() - 1) as u64);
    assert_eq!(generated + dropped, 300);
}

#[test]
fn passenger_flight_ids_come_from_the_flight_table() {
    let config = DatasetConfig {
        flights: 15,
        passengers: 80,
        gates: 10,
        routes: 10,
        ..DatasetConfig::default()
    };
    let run_dir = run_engine(&config, 31, "refs");

    let flights = read_rows(&run_dir, "flights.csv");
    let ids: HashSet<&String> = flights[1..].iter().map(|row| &row[0]).collect();

    let passengers = read_rows(&run_dir, "passengers.csv");
    for row in &passengers[1..] {
        assert!(ids.contains(&row[3]), "unknown flight {}", row[3]);
    }
}

#[test]
fn zero_flights_fail_before_passengers_are_written() {
    let config = DatasetConfig {
        flights: 0,
        passengers: 10,
        gates: 5,
        routes: 10,
        ..DatasetConfig::default()
    };
    let options = GenerateOptions {
        out_dir: temp_out_dir("empty"),
        seed: 1,
    };
    let engine = GenerationEngine::new(options.clone());
    let err = engine.run(&config).expect_err("empty batch must fail");
    assert!(matches!(
        err,
        GenerationError::EmptyFlightBatch { stage: "passenger" }
    ));

    let run_dir = fs::read_dir(&options.out_dir)
        .expect("list out dir")
        .next()
        .expect("run dir entry")
        .expect("run dir entry")
        .path();
    assert!(run_dir.join("flights.csv").exists());
    assert!(run_dir.join("gates.csv").exists());
    assert!(!run_dir.join("passengers.csv").exists());
    assert!(!run_dir.join("routes.csv").exists());
}

#[test]
fn invalid_occupancy_is_rejected_before_any_output() {
    let config = DatasetConfig {
        gate_occupancy: 1.5,
        ..DatasetConfig::default()
    };
    let options = GenerateOptions {
        out_dir: temp_out_dir("invalid"),
        seed: 1,
    };
    let engine = GenerationEngine::new(options.clone());
    let err = engine.run(&config).expect_err("bad occupancy must fail");
    assert!(matches!(err, GenerationError::Config(_)));
    assert_eq!(
        fs::read_dir(&options.out_dir).expect("list out dir").count(),
        0
    );
}

#[test]
fn report_records_seed_and_occupancy() {
    let config = DatasetConfig {
        flights: 12,
        passengers: 6,
        gates: 8,
        routes: 6,
        ..DatasetConfig::default()
    };
    let options = GenerateOptions {
        out_dir: temp_out_dir("report"),
        seed: 4242,
    };
    let engine = GenerationEngine::new(options);
    let result = engine.run(&config).expect("run generation");

    assert_eq!(result.report.seed, 4242);
    assert!(result.report.gates_occupied <= 5); // floor(0.7 * 8)
    assert_eq!(result.report.tables.len(), 4);

    let gates = read_rows(&result.run_dir, "gates.csv");
    let occupied = gates[1..]
        .iter()
        .filter(|row| row[2] == "Occupied")
        .count() as u64;
    assert_eq!(result.report.gates_occupied, occupied);
}
