//! End-to-end inventory scenarios against the in-memory collection.

use std::sync::Arc;

use async_trait::async_trait;
use stockroom_domain::{InventoryItem, ItemName, Quantity};
use stockroom_engine::infrastructure::clock::SystemClock;
use stockroom_engine::infrastructure::in_memory::InMemoryCollection;
use stockroom_engine::infrastructure::ports::{InventoryCollection, RepoError};
use stockroom_engine::stores::InventorySession;
use stockroom_engine::use_cases::inventory::{
    AddItem, AddOutcome, DecrementOutcome, IncrementOutcome, InventoryUseCases, RenameOutcome,
};
use tokio::sync::Barrier;

fn name(s: &str) -> ItemName {
    ItemName::new(s).unwrap()
}

fn session_over(collection: Arc<dyn InventoryCollection>) -> InventorySession {
    InventorySession::new(
        Arc::new(InventoryUseCases::for_collection(collection)),
        Arc::new(SystemClock::new()),
    )
}

fn quantity_of(session: &InventorySession, item: &str) -> Option<i64> {
    session.find(&name(item)).map(|i| i.quantity.value())
}

#[tokio::test]
async fn apple_lifecycle_ends_in_removal() {
    let collection = Arc::new(InMemoryCollection::new());
    let mut session = session_over(collection.clone());
    let apple = name("apple");

    session.add(&apple, Quantity::new(3)).await.unwrap();
    assert_eq!(quantity_of(&session, "apple"), Some(3));

    session.increment(&apple).await.unwrap();
    assert_eq!(quantity_of(&session, "apple"), Some(4));

    session.decrement(&apple).await.unwrap();
    session.decrement(&apple).await.unwrap();
    session.decrement(&apple).await.unwrap();
    assert_eq!(quantity_of(&session, "apple"), Some(1));

    let outcome = session.decrement(&apple).await.unwrap();
    assert_eq!(outcome, DecrementOutcome::Removed);
    assert_eq!(quantity_of(&session, "apple"), None);
    assert!(collection.is_empty());
}

#[tokio::test]
async fn adding_zero_twice_keeps_an_empty_record() {
    let mut session = session_over(Arc::new(InMemoryCollection::new()));
    let banana = name("banana");

    session.add(&banana, Quantity::ZERO).await.unwrap();
    let outcome = session.add(&banana, Quantity::ZERO).await.unwrap();

    assert_eq!(
        outcome,
        AddOutcome::Updated {
            previous: Quantity::ZERO,
            quantity: Quantity::ZERO
        }
    );
    assert_eq!(quantity_of(&session, "banana"), Some(0));
}

#[tokio::test]
async fn bulk_add_sums_onto_existing() {
    let mut session = session_over(Arc::new(InMemoryCollection::new()));
    let pear = name("pear");

    session.add(&pear, Quantity::new(5)).await.unwrap();
    session.add(&pear, Quantity::new(5)).await.unwrap();

    assert_eq!(quantity_of(&session, "pear"), Some(10));
}

#[tokio::test]
async fn missing_items_are_left_alone() {
    let collection = Arc::new(InMemoryCollection::with_items([InventoryItem::new(
        name("pear"),
        Quantity::new(2),
    )]));
    let mut session = session_over(collection.clone());
    let ghost = name("ghost");

    assert_eq!(
        session.increment(&ghost).await.unwrap(),
        IncrementOutcome::Missing
    );
    assert_eq!(
        session.decrement(&ghost).await.unwrap(),
        DecrementOutcome::Missing
    );
    assert_eq!(
        session.rename(&ghost, &name("spirit"), None).await.unwrap(),
        RenameOutcome::Missing
    );

    assert_eq!(collection.len(), 1);
    assert_eq!(quantity_of(&session, "pear"), Some(2));
}

#[tokio::test]
async fn rename_and_delete() {
    let collection = Arc::new(InMemoryCollection::with_items([
        InventoryItem::new(name("aple"), Quantity::new(2)),
        InventoryItem::new(name("flour"), Quantity::new(40)),
    ]));
    let mut session = session_over(collection.clone());

    session
        .rename(&name("aple"), &name("apple"), Some(Quantity::new(6)))
        .await
        .unwrap();
    assert_eq!(quantity_of(&session, "aple"), None);
    assert_eq!(quantity_of(&session, "apple"), Some(6));

    session
        .rename(&name("apple"), &name("apple"), Some(Quantity::new(-2)))
        .await
        .unwrap();
    assert_eq!(quantity_of(&session, "apple"), Some(-2));
    assert_eq!(session.items().len(), 2);

    session.delete(&name("flour")).await.unwrap();
    assert_eq!(quantity_of(&session, "flour"), None);
    assert_eq!(collection.len(), 1);
}

#[tokio::test]
async fn search_narrows_only_the_snapshot() {
    let collection = Arc::new(InMemoryCollection::with_items([
        InventoryItem::new(name("Apple"), Quantity::new(1)),
        InventoryItem::new(name("banana"), Quantity::new(1)),
        InventoryItem::new(name("Pineapple"), Quantity::new(1)),
    ]));
    let mut session = session_over(collection.clone());
    session.resync().await.unwrap();

    // Written behind the session's back; not visible until the next resync
    collection
        .set(&name("apple pie"), Quantity::new(1))
        .await
        .unwrap();

    let shown: Vec<String> = session
        .search("apple")
        .iter()
        .map(|i| i.name.to_string())
        .collect();
    assert_eq!(shown, vec!["Apple", "Pineapple"]);

    session.resync().await.unwrap();
    assert_eq!(session.filtered().len(), 4);
    assert_eq!(session.search("APPLE").len(), 3);
}

/// Collection whose reads wait for a second reader before returning, forcing
/// two read-modify-write sequences to interleave.
struct InterleavingCollection {
    inner: InMemoryCollection,
    barrier: Barrier,
}

#[async_trait]
impl InventoryCollection for InterleavingCollection {
    async fn list_all(&self) -> Result<Vec<InventoryItem>, RepoError> {
        self.inner.list_all().await
    }

    async fn get(&self, name: &ItemName) -> Result<Option<Quantity>, RepoError> {
        let current = self.inner.get(name).await;
        self.barrier.wait().await;
        current
    }

    async fn set(&self, name: &ItemName, quantity: Quantity) -> Result<(), RepoError> {
        self.inner.set(name, quantity).await
    }

    async fn delete(&self, name: &ItemName) -> Result<(), RepoError> {
        self.inner.delete(name).await
    }
}

#[tokio::test]
async fn concurrent_adds_lose_an_update() {
    let collection = Arc::new(InterleavingCollection {
        inner: InMemoryCollection::with_items([InventoryItem::new(name("apple"), Quantity::new(5))]),
        barrier: Barrier::new(2),
    });
    let add = AddItem::new(collection.clone());
    let apple = name("apple");

    let (first, second) = tokio::join!(
        add.execute(&apple, Quantity::ONE),
        add.execute(&apple, Quantity::ONE)
    );
    first.unwrap();
    second.unwrap();

    // Both read 5, both wrote 6
    assert_eq!(
        collection.inner.get(&apple).await.unwrap(),
        Some(Quantity::new(6))
    );
}

#[tokio::test]
async fn concurrent_creates_collapse_into_one() {
    let collection = Arc::new(InterleavingCollection {
        inner: InMemoryCollection::new(),
        barrier: Barrier::new(2),
    });
    let add = AddItem::new(collection.clone());
    let widget = name("widget");

    let (first, second) = tokio::join!(
        add.execute(&widget, Quantity::ONE),
        add.execute(&widget, Quantity::ONE)
    );

    assert!(matches!(first.unwrap(), AddOutcome::Created { .. }));
    assert!(matches!(second.unwrap(), AddOutcome::Created { .. }));
    assert_eq!(
        collection.inner.get(&widget).await.unwrap(),
        Some(Quantity::ONE)
    );
}
