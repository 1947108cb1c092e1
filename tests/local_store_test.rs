use bytes::Bytes;

use scribe::application::ports::{AudioStore, AudioStoreError};
use scribe::domain::StoragePath;
use scribe::infrastructure::storage::LocalAudioStore;

#[tokio::test]
async fn given_stored_audio_when_fetched_then_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::for_upload("clip.wav");

    store
        .store(&path, Bytes::from_static(b"pcm data"))
        .await
        .unwrap();

    let fetched = store.fetch(&path).await.unwrap();
    assert_eq!(fetched, b"pcm data");
}

#[tokio::test]
async fn given_stored_audio_when_deleted_then_gone_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::for_upload("clip.wav");

    store
        .store(&path, Bytes::from_static(b"pcm data"))
        .await
        .unwrap();
    store.delete(&path).await.unwrap();

    assert!(matches!(
        store.fetch(&path).await,
        Err(AudioStoreError::NotFound(_))
    ));
    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn given_unknown_path_when_deleting_then_reports_delete_failure() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();

    let result = store.delete(&StoragePath::from_raw("never-stored.wav")).await;

    assert!(matches!(result, Err(AudioStoreError::DeleteFailed(_))));
}

#[tokio::test]
async fn given_missing_base_directory_when_constructed_then_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("staging").join("audio");

    let store = LocalAudioStore::new(nested.clone()).unwrap();
    let path = StoragePath::for_upload("clip.wav");
    store
        .store(&path, Bytes::from_static(b"pcm"))
        .await
        .unwrap();

    assert!(nested.exists());
}
