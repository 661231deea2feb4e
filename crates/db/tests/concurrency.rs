//! Concurrent writers against a file-backed pool with several connections.

use tavern_db::models::character::CreateCharacter;
use tavern_db::models::comment::CreateComment;
use tavern_db::repositories::{CharacterRepo, CommentRepo};

const CHARACTERS: usize = 8;
const COMMENTS_PER_CHARACTER: usize = 20;

/// Appends racing on the same characters must all succeed; none may fail
/// with a lock error when another transaction committed first.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_add_comment_all_succeed() {
    let root = std::env::temp_dir().join(format!(
        "tavern-concurrency-{}-{}",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    let url = format!("sqlite://{}", root.join("db.sqlite3").display());

    let pool = tavern_db::create_pool(&url, 8).await.unwrap();
    tavern_db::run_migrations(&pool).await.unwrap();

    let mut ids = Vec::with_capacity(CHARACTERS);
    for i in 0..CHARACTERS {
        let created = CharacterRepo::create(&pool, &CreateCharacter::new(format!("Hero {i}"), 1, 0.0))
            .await
            .unwrap();
        ids.push(created.id);
    }

    let mut handles = Vec::new();
    for round in 0..COMMENTS_PER_CHARACTER {
        for &id in &ids {
            let pool = pool.clone();
            handles.push(tokio::spawn(async move {
                let input = CreateComment::new(format!("entry {round}"));
                CharacterRepo::add_comment(&pool, id, &input).await
            }));
        }
    }

    for handle in handles {
        let result = handle.await.unwrap();
        assert!(result.is_ok(), "add_comment failed: {result:?}");
    }

    let total = CommentRepo::count(&pool).await.unwrap();
    assert_eq!(total as usize, CHARACTERS * COMMENTS_PER_CHARACTER);
    for &id in &ids {
        let character = CharacterRepo::find_by_id(&pool, id).await.unwrap();
        assert_eq!(character.total_comments(), COMMENTS_PER_CHARACTER);
    }

    pool.close().await;
    let _ = std::fs::remove_dir_all(&root);
}
