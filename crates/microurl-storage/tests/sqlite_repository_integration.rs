use std::collections::HashSet;
use std::sync::Arc;

use microurl_core::{Micro, MicroRecord};
use microurl_storage::{ReadRepository, Repository, SqliteRepository, StorageError};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    repo: SqliteRepository,
}

impl Fixture {
    async fn start() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = SqliteRepository::connect(&database_url(&dir))
            .await
            .expect("open sqlite database");

        Self { dir, repo }
    }

    async fn reopen(self) -> Self {
        self.repo.close().await;
        let repo = SqliteRepository::connect(&database_url(&self.dir))
            .await
            .expect("reopen sqlite database");

        Self { dir: self.dir, repo }
    }
}

fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("url-db.sqlite").display())
}

fn micro(value: &str) -> Micro {
    Micro::new_unchecked(value)
}

fn record(code: &str, url: &str) -> MicroRecord {
    MicroRecord::new(micro(code), url)
}

#[tokio::test]
async fn insert_and_get_record() {
    let fixture = Fixture::start().await;
    let inserted = record("abc123", "https://example.com/very/long/path");

    fixture.repo.insert(inserted.clone()).await.unwrap();

    let got = fixture.repo.get(&micro("abc123")).await.unwrap().unwrap();
    assert_eq!(got.micro, inserted.micro);
    assert_eq!(got.url, "https://example.com/very/long/path");
    assert_eq!(
        got.created_at.as_microsecond(),
        inserted.created_at.as_microsecond()
    );
}

#[tokio::test]
async fn get_returns_none_for_unknown_micro() {
    let fixture = Fixture::start().await;

    assert!(fixture.repo.get(&micro("zzzzzz")).await.unwrap().is_none());
}

#[tokio::test]
async fn insert_conflicts_when_micro_already_exists() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(record("abc123", "https://one.example"))
        .await
        .unwrap();

    let err = fixture
        .repo
        .insert(record("abc123", "https://two.example"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::DuplicateKey(_)));

    let got = fixture.repo.get(&micro("abc123")).await.unwrap().unwrap();
    assert_eq!(got.url, "https://one.example");
}

#[tokio::test]
async fn lookup_is_case_sensitive() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(record("abcDEF", "https://upper.example"))
        .await
        .unwrap();
    fixture
        .repo
        .insert(record("abcdef", "https://lower.example"))
        .await
        .unwrap();

    let upper = fixture.repo.get(&micro("abcDEF")).await.unwrap().unwrap();
    let lower = fixture.repo.get(&micro("abcdef")).await.unwrap().unwrap();
    assert_eq!(upper.url, "https://upper.example");
    assert_eq!(lower.url, "https://lower.example");
}

#[tokio::test]
async fn list_is_empty_for_new_database() {
    let fixture = Fixture::start().await;

    assert!(fixture.repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_every_record() {
    let fixture = Fixture::start().await;

    for i in 0..5 {
        fixture
            .repo
            .insert(record(&format!("code{i}"), &format!("https://example{i}.com")))
            .await
            .unwrap();
    }

    let listed: HashSet<(String, String)> = fixture
        .repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| (r.micro.to_string(), r.url))
        .collect();

    let expected: HashSet<(String, String)> = (0..5)
        .map(|i| (format!("code{i}"), format!("https://example{i}.com")))
        .collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn records_survive_reopening_the_database() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(record("keepme", "https://durable.example"))
        .await
        .unwrap();

    let fixture = fixture.reopen().await;

    let got = fixture.repo.get(&micro("keepme")).await.unwrap().unwrap();
    assert_eq!(got.url, "https://durable.example");
    assert_eq!(fixture.repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_inserts_of_one_micro_have_a_single_winner() {
    let fixture = Fixture::start().await;
    let repo = Arc::new(fixture.repo.clone());
    let mut handles = vec![];

    for i in 0..16 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.insert(record("racing", &format!("https://example{i}.com")))
                .await
        }));
    }

    let mut winners = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => winners += 1,
            Err(StorageError::DuplicateKey(_)) => {}
            Err(other) => panic!("unexpected storage error: {other}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(fixture.repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn in_memory_database_round_trip() {
    let repo = SqliteRepository::in_memory().await.unwrap();

    repo.insert(record("mem001", "https://memory.example"))
        .await
        .unwrap();

    let got = repo.get(&micro("mem001")).await.unwrap().unwrap();
    assert_eq!(got.url, "https://memory.example");
}

#[tokio::test]
async fn failed_insert_leaves_no_record_behind() {
    let fixture = Fixture::start().await;
    fixture.repo.close().await;

    let err = fixture
        .repo
        .insert(record("lost01", "https://never.example"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));

    let fixture = fixture.reopen().await;
    assert!(fixture.repo.get(&micro("lost01")).await.unwrap().is_none());
    assert!(fixture.repo.list().await.unwrap().is_empty());
}
