//! Integration tests for sk-output.

use sk_catalog::{NUM_EXPEDS, NUM_SHOP_ITEMS};
use sk_opt::{Allocation, Plan, ResourceLedger};
use sk_solver::SolveStatus;

fn plan() -> Plan {
    let mut run = [0.0; NUM_EXPEDS];
    run[4] = 372.0;
    let mut shop = [0.0; NUM_SHOP_ITEMS];
    shop[1] = 2.5;
    Plan {
        reward:       3_120.5,
        objective:    120.5,
        status:       SolveStatus::Optimal,
        action_names: vec!["1-5".into(), "5-4".into()],
        allocation:   Allocation {
            actions: vec![100.0, 10.25],
            run,
            off:     [0.0; NUM_EXPEDS],
            sleep:   [0.0; NUM_EXPEDS],
            shop,
        },
        ledger: ResourceLedger {
            offset:    [1000.0, 1000.0, 0.0, 0.0, 0.0],
            spent:     [500.0, 0.0, 0.0, 0.0, 0.0],
            earned:    [100.0, 0.0, 0.0, 0.0, 0.0],
            bought:    [0.0, 625.0, 0.0, 0.0, 0.0],
            remaining: [600.0, 1625.0, 0.0, 0.0, 0.0],
        },
        solver_log:   Vec::new(),
    }
}

// ── Row conversion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::{AllocationRow, LedgerRow, SummaryRow};

    #[test]
    fn allocation_rows_cover_every_variable() {
        let rows = AllocationRow::from_plan(&plan());
        assert_eq!(rows.len(), 2 + 3 * NUM_EXPEDS + NUM_SHOP_ITEMS);
        assert_eq!(rows[0].kind, "action");
        assert_eq!(rows[0].label, "1-5");
        assert_eq!(rows[1].value, 10.25);
        assert_eq!(rows[2].kind, "run");
        assert_eq!(rows[2].label, "E00a");

        let run4 = rows.iter().find(|r| r.kind == "run" && r.index == 4).unwrap();
        assert_eq!(run4.value, 372.0);
        assert_eq!(run4.label, "E02a");

        let ammo = rows.iter().find(|r| r.kind == "shop" && r.index == 1).unwrap();
        assert_eq!(ammo.label, "ammo crate");
        assert_eq!(ammo.value, 2.5);
    }

    #[test]
    fn ledger_rows_start_with_offset() {
        let rows = LedgerRow::from_ledger(&plan().ledger);
        let names: Vec<_> = rows.iter().map(|r| r.row).collect();
        assert_eq!(names, ["offset", "spent", "earned", "bought", "remaining"]);
        assert_eq!(rows[4].values[1], 1625.0);
    }

    #[test]
    fn ledger_headers_name_displayed_resources() {
        assert_eq!(LedgerRow::headers(), ["row", "fuel", "ammo", "steel", "bucket", "cond"]);
    }

    #[test]
    fn summary_uses_status_name() {
        let row = SummaryRow::from_plan(&plan());
        assert_eq!(row.status, "optimal");
        assert_eq!(row.reward, 3_120.5);
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::PlanWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("summary.csv").exists());
        assert!(dir.path().join("allocation.csv").exists());
        assert!(dir.path().join("ledger.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("march");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("ledger.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(dir.path().join("summary.csv")), ["reward", "objective", "status"]);
        assert_eq!(headers(dir.path().join("allocation.csv")), ["kind", "index", "label", "value"]);
        assert_eq!(
            headers(dir.path().join("ledger.csv")),
            ["row", "fuel", "ammo", "steel", "bucket", "cond"]
        );
    }

    #[test]
    fn csv_plan_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_plan(&plan()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("allocation.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2 + 3 * NUM_EXPEDS + NUM_SHOP_ITEMS);
        assert_eq!(&rows[0][2], "1-5");
        assert_eq!(&rows[0][3], "100");
        assert_eq!(&rows[1][3], "10.25");

        let mut rdr = csv::Reader::from_path(dir.path().join("ledger.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[4][0], "remaining");
        assert_eq!(&rows[4][2], "1625");

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][0], "3120.5");
        assert_eq!(&rows[0][2], "optimal");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_allocation_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_allocation(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        use sk_core::PlanParams;
        use sk_input::{ActionSpec, ActionTable};
        use sk_opt::Optimizer;

        use crate::observer::PlanOutputObserver;

        let actions = ActionTable::from_specs(vec![
            ActionSpec::new("1-5", [300.0, 300.0, 200.0, 2.0, 0.0, 600.0], 1.0, 1.0),
        ])
        .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = PlanOutputObserver::new(writer);
        Optimizer::standard()
            .solve_observed(&actions, &PlanParams::default(), &mut obs)
            .unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        obs.into_writer().finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("ledger.csv")).unwrap();
        assert_eq!(rdr.records().count(), 5);
    }
}
