use amex_mock::domain::card::CardRecord;
use amex_mock::domain::ports::{CardStoreBox, CardStoreFactory};
use amex_mock::infrastructure::in_memory::InMemoryCardStore;

#[tokio::test]
async fn test_factory_instantiation() {
    let factory: CardStoreFactory = Box::new(|| Box::new(InMemoryCardStore::new()) as CardStoreBox);

    let first = factory();
    let second = factory();

    // Each call yields an independent store
    first.register(CardRecord::new("378282246310005")).await.unwrap();
    assert_eq!(first.count().await.unwrap(), 1);
    assert_eq!(second.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_factory_in_task() {
    let factory: CardStoreFactory = Box::new(|| Box::new(InMemoryCardStore::new()) as CardStoreBox);

    let handle = tokio::spawn(async move {
        let store = factory();
        store.register(CardRecord::new("6011111111111117")).await.unwrap();
        store
            .find_by_card_number("6011111111111117")
            .await
            .unwrap()
            .unwrap()
    });

    let (token, record) = handle.await.unwrap();
    assert!(token.as_str().starts_with("tok_"));
    assert_eq!(record.card_number, "6011111111111117");
}
