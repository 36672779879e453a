use question_bank::clients::QuestionSource;
use question_bank::config::Config;
use question_bank::models::{Answer, QuestionRecord, SavedProgress, StudyMode, StudyProgress};
use question_bank::services::{BankOrigin, ProgressStore, QuestionBank};
use question_bank::utils::logging;
use question_bank::App;
use std::path::PathBuf;
use std::time::Duration;

const BANK: &str = "\u{feff}Question 1 of 529
What is the default VPC CIDR block size?
A.
/16
B.
/24
Correct Answer: A
The default VPC uses a /16 block for maximum address space.

Question 2 of 529
A company needs to store backups durably. Which TWO services should it use? (Select TWO.)
A.
Amazon S3
B.
Amazon EC2 instance store
C.
Amazon S3 Glacier
D.
Amazon ElastiCache
Correct Answer: A, C
Both S3 and S3 Glacier provide durable object storage.

Question 3 of 529
This section is broken and has only one choice.
A.
lonely

Question 4 of 529
Which service provides a managed NoSQL database?
A.
Amazon RDS
B.
Amazon DynamoDB
C.
Amazon Redshift
";

/// 测试用临时文件路径
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("question_bank_{}_{}", std::process::id(), name))
}

#[tokio::test]
async fn test_parse_bank_from_file() {
    logging::init(false);

    let path = temp_path("bank.txt");
    tokio::fs::write(&path, BANK).await.unwrap();

    let mut bank = QuestionBank::default();
    let questions = bank
        .load(&QuestionSource::File(path.clone()))
        .await
        .expect("加载题库失败");

    let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);

    assert_eq!(
        questions[0].question,
        "What is the default VPC CIDR block size?"
    );
    assert_eq!(questions[0].choices, vec!["/16", "/24"]);
    assert_eq!(questions[0].answer, Answer::Single("A".to_string()));
    assert_eq!(
        questions[0].explanation,
        "The default VPC uses a /16 block for maximum address space."
    );

    assert_eq!(
        questions[1].answer,
        Answer::Multiple(vec!["A".to_string(), "C".to_string()])
    );
    assert!(questions[1].answer.check(&["C", "A"]));

    // 没有答案行时默认为 A
    assert_eq!(questions[2].answer, Answer::Single("A".to_string()));
    assert_eq!(questions[2].explanation, "No explanation available.");

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_cache_and_invalidate() {
    let path = temp_path("cache.txt");
    tokio::fs::write(&path, BANK).await.unwrap();
    let source = QuestionSource::File(path.clone());

    let mut bank = QuestionBank::default();
    assert!(!bank.is_cached());

    let first = bank.load(&source).await.unwrap();
    assert!(bank.is_cached());

    // 文件删除后仍然命中缓存
    tokio::fs::remove_file(&path).await.unwrap();
    let second = bank.load(&source).await.unwrap();
    assert_eq!(first, second);

    bank.invalidate();
    assert!(!bank.is_cached());
    let err = bank.load(&source).await.unwrap_err();
    assert!(err.is_retrieval_failure());
    assert!(bank.cached().is_none());
}

#[tokio::test]
async fn test_retrieval_failure_is_distinct_from_empty_result() {
    let mut bank = QuestionBank::default();

    let missing = QuestionSource::File(temp_path("does_not_exist.txt"));
    assert!(bank.load(&missing).await.unwrap_err().is_retrieval_failure());

    let unreachable = QuestionSource::Http("http://127.0.0.1:9/questions.txt".to_string());
    assert!(bank
        .load(&unreachable)
        .await
        .unwrap_err()
        .is_retrieval_failure());

    let empty = QuestionSource::Inline("no markers, no choices".to_string());
    let questions = bank.load(&empty).await.unwrap();
    assert!(questions.is_empty());
}

#[tokio::test]
async fn test_load_or_sample_fallbacks() {
    let mut bank = QuestionBank::default();

    let loaded = bank
        .load_or_sample(&QuestionSource::File(temp_path("missing.txt")))
        .await;
    assert!(matches!(loaded.origin, BankOrigin::SampleAfterError(_)));
    assert_eq!(loaded.questions.len(), 8);
    assert!(!bank.is_cached());

    let loaded = bank
        .load_or_sample(&QuestionSource::Inline(String::new()))
        .await;
    assert_eq!(loaded.origin, BankOrigin::SampleAfterEmpty);
    assert!(loaded.origin.is_sample());

    let loaded = bank
        .load_or_sample(&QuestionSource::Inline(BANK.to_string()))
        .await;
    assert_eq!(loaded.origin, BankOrigin::Parsed);
    assert_eq!(loaded.questions.len(), 3);
}

#[test]
fn test_parse_text_is_idempotent() {
    let key = QuestionSource::Inline(BANK.to_string());
    let mut bank = QuestionBank::default();
    assert_eq!(bank.parser().total(), 529);

    let first = bank.parse_text(key.clone(), BANK);
    bank.invalidate();
    let second = bank.parse_text(key, BANK);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_parse_text_caches_under_given_key() {
    // 文件不存在，只能命中 parse_text 写入的缓存
    let key = QuestionSource::File(temp_path("prefetched.txt"));
    let mut bank = QuestionBank::default();

    let parsed = bank.parse_text(key.clone(), BANK);
    let loaded = bank.load(&key).await.expect("应该命中缓存");
    assert_eq!(parsed, loaded);
    assert_eq!(loaded.len(), 3);
}

#[tokio::test]
async fn test_progress_store_round_trip() {
    let path = temp_path("progress.json");
    let store = ProgressStore::new(&path, Duration::from_secs(24 * 60 * 60));
    store.clear().await.unwrap();
    assert!(store.load().await.is_none());

    let mut progress = StudyProgress::new(10);
    progress.record_answer(true);
    progress.record_answer(false);

    let saved = store
        .save(StudyMode::Quiz, 2, &progress, 10)
        .await
        .unwrap();

    let loaded = store.load().await.expect("应该能读取进度");
    assert_eq!(loaded, saved);
    assert_eq!(loaded.progress.accuracy, 50.0);
    assert!(store.exists().await);

    store.clear().await.unwrap();
    assert!(!store.exists().await);
}

#[test]
fn test_expired_and_corrupt_progress_is_discarded() {
    tokio_test::block_on(async {
        let path = temp_path("expired.json");
        let store = ProgressStore::new(&path, Duration::from_secs(60));

        let stale = SavedProgress {
            mode: StudyMode::Flashcard,
            current_index: 0,
            progress: StudyProgress::new(3),
            timestamp: chrono::Utc::now().timestamp_millis() - 61_000,
            total_questions: 3,
        };
        store.write(&stale).await.unwrap();
        assert!(store.load().await.is_none());
        assert!(!path.exists(), "过期的进度文件应被删除");

        tokio::fs::write(&path, "{ not json").await.unwrap();
        assert!(store.load().await.is_none());
        assert!(!path.exists(), "损坏的进度文件应被删除");
    });
}

#[tokio::test]
async fn test_out_of_range_progress_timestamp_is_discarded() {
    let path = temp_path("bad_timestamp.json");
    let store = ProgressStore::new(&path, Duration::from_secs(24 * 60 * 60));
    assert_eq!(store.path(), path.as_path());

    for timestamp in [i64::MIN, i64::MAX] {
        let saved = SavedProgress {
            mode: StudyMode::Quiz,
            current_index: 1,
            progress: StudyProgress::new(5),
            timestamp,
            total_questions: 5,
        };
        store.write(&saved).await.unwrap();
        assert!(store.load().await.is_none());
        assert!(!path.exists(), "时间戳异常的进度文件应被删除");
    }
}

#[tokio::test]
async fn test_app_run_exports_questions() {
    logging::init(false);

    let source = temp_path("app_bank.txt");
    let export = temp_path("app_export.json");
    let log = temp_path("app_output.txt");
    let progress = temp_path("app_progress.json");
    tokio::fs::write(&source, BANK).await.unwrap();

    let config = Config {
        source: source.display().to_string(),
        export_file: Some(export.display().to_string()),
        output_log_file: log.display().to_string(),
        progress_file: progress.display().to_string(),
        verbose_logging: true,
        ..Config::default()
    };

    let mut app = App::initialize(config).await.expect("初始化失败");
    let loaded = app.run().await.expect("运行失败");
    assert_eq!(loaded.origin, BankOrigin::Parsed);
    assert_eq!(loaded.questions.len(), 3);

    let exported: Vec<QuestionRecord> =
        serde_json::from_str(&tokio::fs::read_to_string(&export).await.unwrap()).unwrap();
    assert_eq!(exported.as_slice(), &loaded.questions[..]);

    let header = tokio::fs::read_to_string(&log).await.unwrap();
    assert!(header.contains("题库解析日志"));

    // 清空缓存后重新加载，源文件已删除则退回示例题目
    tokio::fs::remove_file(&source).await.unwrap();
    app.reload();
    let reloaded = app.run().await.unwrap();
    assert!(matches!(reloaded.origin, BankOrigin::SampleAfterError(_)));

    for path in [export, log] {
        let _ = tokio::fs::remove_file(path).await;
    }
}
