//! Shelfmark — real-time personal bookmark dashboard core.
//!
//! Entry point: runs a console walkthrough of the core against the
//! in-process store, including two dashboard sessions converging in real
//! time.

use std::sync::Arc;
use std::time::Duration;

use shelfmark::app::Dashboard;
use shelfmark::managers::collection::BookmarkCollection;
use shelfmark::managers::delete_confirm::{ConfirmAction, DeleteConfirm};
use shelfmark::services::deleter::DeleteOutcome;
use shelfmark::services::submitter::{normalize_url, validate_title, SubmitOutcome};
use shelfmark::store::{MemoryStore, RecordStore};
use shelfmark::types::bookmark::Bookmark;
use shelfmark::types::event::ChangeEvent;
use shelfmark::types::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               Shelfmark v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║       Real-time bookmark dashboard core walkthrough        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_validation();
    demo_reconciler();
    demo_delete_confirm();
    demo_dashboard().await;

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_validation() {
    section("Input Validation");

    println!("  normalize_url(\"example.com\") = {:?}", normalize_url("example.com").unwrap());
    println!("  normalize_url(\"  https://docs.rs/url  \") = {:?}", normalize_url("  https://docs.rs/url  ").unwrap());
    println!("  normalize_url(\"\") -> {}", normalize_url("").unwrap_err());
    println!("  normalize_url(\"exa mple.com\") -> {}", normalize_url("exa mple.com").unwrap_err());
    println!("  validate_title(\"   \") -> {}", validate_title("   ").unwrap_err());
    println!("  ✓ Validation OK");
    println!();
}

fn demo_reconciler() {
    section("Reconciler (idempotent merge)");

    let older = Bookmark {
        id: "a".to_string(),
        user_id: "ada".to_string(),
        title: "The Rust Book".to_string(),
        url: "https://doc.rust-lang.org/book".to_string(),
        created_at: 1_000,
    };
    let newer = Bookmark {
        id: "b".to_string(),
        user_id: "ada".to_string(),
        title: "crates.io".to_string(),
        url: "https://crates.io".to_string(),
        created_at: 2_000,
    };

    let mut collection = BookmarkCollection::new();
    collection.insert(older.clone());
    collection.insert(newer.clone());
    println!("  Inserted 2 records, newest first: {:?}",
        collection.records().iter().map(|b| &b.title).collect::<Vec<_>>());

    // The feed echo of an insert the submitter already applied is a no-op.
    let accepted = collection.apply(ChangeEvent::Inserted(older.clone()));
    println!("  Echoed insert accepted = {} (collection unchanged, len = {})", accepted, collection.len());

    collection.apply(ChangeEvent::Deleted { id: "a".to_string() });
    collection.apply(ChangeEvent::Deleted { id: "a".to_string() });
    println!("  Double delete absorbed, len = {}", collection.len());
    println!("  ✓ Reconciler OK");
    println!();
}

fn demo_delete_confirm() {
    section("Delete Confirmation Guard");

    let mut confirm = DeleteConfirm::with_window(Duration::from_millis(80));
    println!("  First press: {:?}", confirm.press("bm-1"));
    println!("  Armed for bm-1: {}", confirm.is_armed("bm-1"));
    println!("  Second press: {:?}", confirm.press("bm-1"));

    let first = confirm.press("bm-2");
    std::thread::sleep(Duration::from_millis(120));
    let after_expiry = confirm.press("bm-2");
    println!("  Press, wait past window, press again: {:?} then {:?}", first, after_expiry);
    assert_eq!(after_expiry, ConfirmAction::Armed);
    println!("  ✓ DeleteConfirm OK");
    println!();
}

async fn demo_dashboard() {
    section("Dashboard (two sessions, one store)");

    let store = MemoryStore::new();
    let shared: Arc<dyn RecordStore> = Arc::new(store.clone());

    let ada = Session::new("ada", "token-ada");
    let mut desk = Dashboard::open(ada.clone(), shared.clone(), &store).await.unwrap();
    let mut phone = Dashboard::open(ada, shared, &store).await.unwrap();
    println!("  Opened 2 dashboards, feed subscribers = {}", store.subscriber_count());

    let outcome = desk.add_bookmark("Rust std docs", "doc.rust-lang.org/std").await.unwrap();
    if let SubmitOutcome::Saved(record) = &outcome {
        println!("  Desk saved \"{}\" -> {}", record.title, record.url);
    }

    let applied = phone.pump();
    println!("  Phone pumped {} feed event(s), now lists {} bookmark(s)", applied, phone.len());

    let id = phone.bookmarks()[0].id.clone();
    assert_eq!(phone.request_delete(&id).await.unwrap(), DeleteOutcome::Armed);
    println!("  Phone armed delete (armed = {})", phone.is_delete_armed(&id));
    assert_eq!(phone.request_delete(&id).await.unwrap(), DeleteOutcome::Deleted);
    desk.pump();
    println!("  Phone confirmed; desk pumped the delete, lists {} bookmark(s)", desk.len());

    desk.close();
    phone.close();
    println!("  Closed both, feed subscribers = {}", store.subscriber_count());
    println!("  ✓ Dashboard OK");
    println!();
}
