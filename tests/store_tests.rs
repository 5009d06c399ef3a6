// tests/store_tests.rs

use std::path::PathBuf;

use quiz_backend::{
    error::AppError,
    models::{
        question::Question,
        result::{NOT_ANSWERED, QuizResult},
    },
    storage::{question_store::QuestionStore, result_store::ResultStore},
};

/// Creates a fresh, empty directory for one test.
fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quiz-store-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

fn result(name: &str, answers: Vec<Option<i64>>, score: usize) -> QuizResult {
    QuizResult {
        name: name.to_string(),
        answers,
        score,
        submitted_at: None,
    }
}

#[tokio::test]
async fn missing_file_opens_as_empty_bank() {
    let store = QuestionStore::open(temp_dir().join("questions.json")).await;
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn unparsable_file_opens_as_empty_bank() {
    let path = temp_dir().join("questions.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = QuestionStore::open(&path).await;
    assert!(store.load_all().await.is_empty());
}

#[tokio::test]
async fn appended_question_survives_reopen() {
    let path = temp_dir().join("questions.json");
    let question = Question::new("2+2?", ["3", "4", "5"], 1);

    let store = QuestionStore::open(&path).await;
    store.append(question.clone()).await.unwrap();

    let reopened = QuestionStore::open(&path).await;
    assert_eq!(reopened.load_all().await, vec![question]);
}

#[tokio::test]
async fn snapshot_uses_the_file_field_names() {
    let path = temp_dir().join("questions.json");
    let store = QuestionStore::open(&path).await;
    store
        .append(Question::new("2+2?", ["3", "4", "5"], 1))
        .await
        .unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!([{ "question": "2+2?", "options": ["3", "4", "5"], "correct": 1 }])
    );
}

#[tokio::test]
async fn load_all_is_stable_without_writes() {
    let path = temp_dir().join("questions.json");
    let store = QuestionStore::open(&path).await;
    store
        .append(Question::new("Capital of France?", ["Paris", "Rome", "Oslo"], 0))
        .await
        .unwrap();

    assert_eq!(store.load_all().await, store.load_all().await);
}

#[tokio::test]
async fn append_rejects_invalid_questions() {
    let path = temp_dir().join("questions.json");
    let store = QuestionStore::open(&path).await;

    let two_options = Question {
        text: "Too few".to_string(),
        options: vec!["a".to_string(), "b".to_string()],
        correct_index: 0,
    };
    let four_options = Question {
        text: "Too many".to_string(),
        options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        correct_index: 0,
    };
    let bad_index = Question::new("Index", ["a", "b", "c"], 3);
    let negative_index = Question::new("Index", ["a", "b", "c"], -1);
    let empty_text = Question::new("", ["a", "b", "c"], 0);

    for question in [two_options, four_options, bad_index, negative_index, empty_text] {
        let err = store.append(question).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "unexpected error: {err:?}");
    }

    assert!(store.is_empty().await);
    assert!(!path.exists(), "nothing valid was written");
}

#[tokio::test]
async fn append_batch_skips_invalid_candidates() {
    let path = temp_dir().join("questions.json");
    let store = QuestionStore::open(&path).await;

    let valid = Question::new("2+2?", ["3", "4", "5"], 1);
    let invalid = Question::new("2+3?", ["4", "5", "6"], 5);

    let outcome = store
        .append_batch(vec![valid.clone(), invalid])
        .await
        .unwrap();

    assert_eq!(outcome.accepted, 1);
    assert_eq!(outcome.rejected, 1);

    let reopened = QuestionStore::open(&path).await;
    assert_eq!(reopened.load_all().await, vec![valid]);
}

#[tokio::test]
async fn failed_write_leaves_bank_unchanged() {
    // A directory where the snapshot file should be makes the rename fail.
    let path = temp_dir().join("questions.json");
    std::fs::create_dir_all(path.join("blocker")).unwrap();

    let store = QuestionStore::open(&path).await;
    let err = store
        .append(Question::new("2+2?", ["3", "4", "5"], 1))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Storage(_)), "unexpected error: {err:?}");
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn appended_result_survives_reopen() {
    let path = temp_dir().join("results.json");
    let store = ResultStore::open(&path).await;
    let dana = result("Dana", vec![Some(1), None], 1);

    store.append(dana.clone()).await.unwrap();

    let reopened = ResultStore::open(&path).await;
    assert_eq!(reopened.load_all().await, vec![dana]);
}

#[tokio::test]
async fn results_without_timestamps_still_load() {
    let path = temp_dir().join("results.json");
    std::fs::write(&path, r#"[{"name":"Dana","answers":[1],"score":1}]"#).unwrap();

    let store = ResultStore::open(&path).await;
    assert_eq!(store.load_all().await, vec![result("Dana", vec![Some(1)], 1)]);
}

#[tokio::test]
async fn display_projection_uses_current_bank() {
    let path = temp_dir().join("results.json");
    let store = ResultStore::open(&path).await;
    store
        .append(result("Dana", vec![Some(1), None, Some(2), Some(0)], 1))
        .await
        .unwrap();

    let bank = vec![
        Question::new("2+2?", ["3", "4", "5"], 1),
        Question::new("Sky?", ["blue", "green", "red"], 0),
        Question::new("Blank option?", ["x", "y", ""], 0),
    ];

    let shown = store.project_for_display(&bank).await;

    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].name, "Dana");
    assert_eq!(shown[0].score, 1);
    assert_eq!(
        shown[0].answers,
        vec![
            "4".to_string(),
            NOT_ANSWERED.to_string(),
            NOT_ANSWERED.to_string(),
            NOT_ANSWERED.to_string(),
        ]
    );
}

#[tokio::test]
async fn reload_picks_up_external_edits() {
    let path = temp_dir().join("results.json");
    let store = ResultStore::open(&path).await;
    store.append(result("Dana", vec![Some(1)], 1)).await.unwrap();

    std::fs::write(
        &path,
        r#"[{"name":"Dana","answers":[1],"score":1},{"name":"Lee","answers":[0],"score":0}]"#,
    )
    .unwrap();

    assert_eq!(store.reload().await.unwrap(), 2);
    assert_eq!(store.load_all().await[1].name, "Lee");
}

#[tokio::test]
async fn reload_keeps_results_when_file_is_corrupt() {
    let path = temp_dir().join("results.json");
    let store = ResultStore::open(&path).await;
    store.append(result("Dana", vec![Some(1)], 1)).await.unwrap();

    std::fs::write(&path, "[{").unwrap();

    assert!(store.reload().await.is_err());
    assert_eq!(store.load_all().await.len(), 1);
}

#[tokio::test]
async fn long_non_ascii_questions_are_accepted() {
    let path = temp_dir().join("questions.json");
    let store = QuestionStore::open(&path).await;
    let long_option = "תשובה ארוכה ".repeat(30);
    let question = Question {
        text: "מה התשובה? ".repeat(120),
        options: vec![long_option.clone(), "כן".to_string(), "לא".to_string()],
        correct_index: 0,
    };

    store.append(question.clone()).await.unwrap();

    let reopened = QuestionStore::open(&path).await;
    assert_eq!(reopened.load_all().await, vec![question]);
}

#[tokio::test]
async fn stored_text_is_kept_verbatim_and_cleaned_for_display() {
    let path = temp_dir().join("results.json");
    let store = ResultStore::open(&path).await;
    store
        .append(result("Tom & Jerry", vec![Some(0)], 1))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("Tom & Jerry"));

    let bank = vec![Question::new("Is 2 < 3?", ["yes & no", "b", "c"], 0)];
    let shown = store.project_for_display(&bank).await;

    assert_eq!(shown[0].name, "Tom &amp; Jerry");
    assert_eq!(shown[0].answers, vec!["yes &amp; no".to_string()]);
    assert_eq!(store.load_all().await[0].name, "Tom & Jerry");
}
