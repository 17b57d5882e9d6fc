use super::*;

#[test]
fn handles_are_prefixed_and_never_reused() {
    let mut store = MemoryBlobStore::new();
    let a = store.create(vec![1, 2, 3], Some("image/png")).unwrap();
    assert!(a.as_str().starts_with(BLOB_PREFIX));
    assert!(store.is_local(a.as_str()));

    assert!(store.release(&a));
    assert!(!store.release(&a));
    let b = store.create(vec![4], None).unwrap();
    assert_ne!(a, b);
}

#[test]
fn read_returns_stored_bytes_until_released() {
    let mut store = MemoryBlobStore::new();
    let h = store.create(b"hello".to_vec(), Some("audio/mpeg")).unwrap();
    assert_eq!(store.read(&h).unwrap().as_slice(), b"hello");
    assert_eq!(store.mime(&h), Some("audio/mpeg"));
    assert_eq!(store.total_bytes(), 5);

    store.release(&h);
    let err = store.read(&h).unwrap_err();
    assert!(matches!(err, DeckError::Asset(_)));
    assert!(store.is_empty());
}

#[test]
fn parse_only_accepts_blob_references() {
    assert!(BlobHandle::parse("blob:ppdeck/9").is_some());
    assert!(BlobHandle::parse("assets/img_1.bin").is_none());
    assert!(BlobHandle::parse("https://example.com/a.png").is_none());
}
