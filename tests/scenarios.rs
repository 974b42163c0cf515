//! Ledger walkthroughs across the core and presentation crates.

use tipledger_cli::output::format_currency;
use tipledger_cli::presenter::render_ledger;
use tipledger_core::{AddOutcome, AmountError, MemoryStore, TipLedger, DEFAULT_STORAGE_KEY};

fn cents(ledger: &TipLedger<MemoryStore>) -> Vec<u64> {
    ledger.entries().iter().map(|a| a.cents()).collect()
}

#[test]
fn adds_newest_first_and_skips_junk() {
    let mut ledger = TipLedger::open(MemoryStore::new());
    assert!(ledger.add("2.5").unwrap().is_added());
    assert!(ledger.add("3").unwrap().is_added());
    assert!(matches!(
        ledger.add("abc").unwrap(),
        AddOutcome::Rejected(AmountError::NotANumber(_))
    ));

    assert_eq!(cents(&ledger), vec![300, 250]);
    assert_eq!(format_currency(&ledger.total()), "$5.50");
    assert_eq!(
        render_ledger(ledger.entries(), &ledger.total()),
        "0  $3.00\n1  $2.50\nTotal: $5.50\n"
    );
}

#[test]
fn delete_middle_entry() {
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, "[3,2.5,1]");
    let mut ledger = TipLedger::open(store);
    assert_eq!(ledger.delete_at([1]).unwrap(), 1);

    assert_eq!(cents(&ledger), vec![300, 100]);
    assert_eq!(format_currency(&ledger.total()), "$4.00");
    assert_eq!(ledger.store().raw(DEFAULT_STORAGE_KEY), Some("[3,1]"));
}

#[test]
fn corrupt_snapshot_starts_empty() {
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, "{not json");
    let ledger = TipLedger::open(store);

    assert!(ledger.is_empty());
    assert_eq!(format_currency(&ledger.total()), "$0.00");
    assert!(render_ledger(ledger.entries(), &ledger.total()).starts_with("No tips yet"));
}

#[test]
fn clear_honours_the_gate() {
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, "[1,2]");
    let mut ledger = TipLedger::open(store);

    let mut asked = Vec::new();
    let mut decline = |prompt: &str| {
        asked.push(prompt.to_string());
        false
    };
    assert!(!ledger.clear(&mut decline).unwrap());
    assert_eq!(ledger.len(), 2);
    assert_eq!(asked, vec!["Clear all tips?".to_string()]);

    assert!(ledger.clear(&mut tipledger_core::AssumeYes).unwrap());
    assert!(ledger.is_empty());
    assert_eq!(ledger.store().raw(DEFAULT_STORAGE_KEY), Some("[]"));
}
