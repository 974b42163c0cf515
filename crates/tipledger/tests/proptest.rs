//! Property-based tests driving the binary against a scratch store.

use std::path::Path;

use assert_cmd::Command;
use proptest::prelude::*;
use tempfile::TempDir;

fn tipledger(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tipledger").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("TIPLEDGER_KEY")
        .arg("--store")
        .arg(store);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Separate invocations accumulate into one persisted ledger.
    #[test]
    fn adds_across_runs_sum_up(tips in prop::collection::vec(1u64..1_000_000, 1..6)) {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("storage.json");

        for &c in &tips {
            tipledger(&store).args(["add", &format_cents(c)]).assert().success();
        }

        let total = stdout_of(tipledger(&store).args(["total", "-q"]));
        prop_assert_eq!(total, format!("{}\n", format_cents(tips.iter().sum())));

        let listed = stdout_of(tipledger(&store).args(["list", "-q"]));
        let expected: String = tips.iter().rev().map(|&c| format!("{}\n", format_cents(c))).collect();
        prop_assert_eq!(listed, expected);
    }

    /// Deleting positions from a later run removes exactly those entries.
    #[test]
    fn delete_in_later_run(
        tips in prop::collection::vec(1u64..1_000_000, 1..6),
        picks in prop::collection::btree_set(0usize..8, 1..4),
    ) {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("storage.json");
        for &c in &tips {
            tipledger(&store).args(["add", &format_cents(c)]).assert().success();
        }

        let mut args = vec!["delete".to_string()];
        args.extend(picks.iter().map(ToString::to_string));
        tipledger(&store).args(&args).assert().success();

        let newest_first: Vec<u64> = tips.iter().rev().copied().collect();
        let kept: u64 = newest_first
            .iter()
            .enumerate()
            .filter(|(i, _)| !picks.contains(i))
            .map(|(_, &c)| c)
            .sum();
        let total = stdout_of(tipledger(&store).args(["total", "-q"]));
        prop_assert_eq!(total, format!("{}\n", format_cents(kept)));
    }
}
