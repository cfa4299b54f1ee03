use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use timestables::i18n::loader::{build_catalog, inspect_dir};
use timestables::{Catalog, Dictionary, I18nError, LocaleId, MessageKey, Params};

fn locale(tag: &str) -> LocaleId {
    tag.parse().unwrap()
}

/// 写入一个以 en-AU 为蓝本、按需修改的语言文件
fn write_locale(dir: &Path, tag: &str, edit: impl Fn(MessageKey, &str) -> Option<String>) -> PathBuf {
    let mut body = String::new();
    for (key, template) in Dictionary::en_au().iter() {
        if let Some(value) = edit(key, template) {
            body.push_str(&format!("{} = {:?}\n", key.as_str(), value));
        }
    }
    let path = dir.join(format!("{tag}.toml"));
    fs::write(&path, body).unwrap();
    path
}

fn american(key: MessageKey, template: &str) -> Option<String> {
    Some(match key {
        MessageKey::HeadingMainPage => "Multiplication Tables".to_string(),
        _ => template.to_string(),
    })
}

#[test]
fn loads_and_selects_locale_from_directory() {
    let dir = TempDir::new().unwrap();
    write_locale(dir.path(), "en-US", american);

    let catalog = build_catalog(&locale("en_us"), &[dir.path().to_path_buf()]).unwrap();
    assert_eq!(catalog.active_locale().as_str(), "en-US");
    assert_eq!(catalog.resolve(MessageKey::HeadingMainPage), "Multiplication Tables");
    assert_eq!(
        catalog
            .translate(MessageKey::MessageHighScore, &Params::new().with("highscore", 7))
            .unwrap(),
        "New high score! 7"
    );
    let locales: Vec<&str> = catalog.locales().map(LocaleId::as_str).collect();
    assert_eq!(locales, vec!["en-AU", "en-US"]);
}

#[test]
fn incomplete_locale_fails_at_startup() {
    let dir = TempDir::new().unwrap();
    write_locale(dir.path(), "fr", |key, template| {
        (key != MessageKey::MessageCorrect).then(|| template.to_string())
    });

    let err = build_catalog(&locale("fr"), &[dir.path().to_path_buf()]).unwrap_err();
    match err {
        I18nError::IncompleteDictionary { locale, missing } => {
            assert_eq!(locale.as_str(), "fr");
            assert_eq!(missing, vec!["messageCorrect"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_directory_is_skipped() {
    let dir = TempDir::new().unwrap();
    let catalog = build_catalog(&locale("en-AU"), &[dir.path().join("absent")]).unwrap();
    assert_eq!(catalog.locales().count(), 1);
}

#[test]
fn unknown_locale_falls_back_to_en_au() {
    let dir = TempDir::new().unwrap();
    write_locale(dir.path(), "en-US", american);
    let catalog = build_catalog(&locale("pt-BR"), &[dir.path().to_path_buf()]).unwrap();
    assert_eq!(catalog.active_locale().as_str(), "en-AU");
    assert_eq!(catalog.resolve(MessageKey::HeadingMainPage), "Times Tables");
}

#[test]
fn inspection_reports_each_file() {
    let dir = TempDir::new().unwrap();
    write_locale(dir.path(), "de", |key, template| {
        Some(match key {
            MessageKey::MessageGameStart => "Spiel startet ({level})".to_string(),
            _ => template.to_string(),
        })
    });
    write_locale(dir.path(), "en-US", american);
    fs::write(dir.path().join("es.toml"), "not = [valid").unwrap();

    let mut catalog = Catalog::builtin();
    let reports = inspect_dir(&mut catalog, dir.path()).unwrap();
    assert_eq!(reports.len(), 3);

    let by_name = |name: &str| {
        reports
            .iter()
            .find(|r| r.path.file_name().unwrap() == name)
            .unwrap()
    };
    assert!(by_name("de.toml").error.as_deref().unwrap().contains("placeholders"));
    assert!(by_name("en-US.toml").is_ok());
    assert!(by_name("es.toml").error.as_deref().unwrap().contains("failed to parse"));

    // 只有通过校验的语言被注册
    assert!(catalog.contains(&locale("en-US")));
    assert!(!catalog.contains(&locale("de")));
}

#[test]
fn duplicate_locale_across_directories_is_reported() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_locale(first.path(), "en-US", american);
    write_locale(second.path(), "en_US", american);

    let err = build_catalog(
        &locale("en-US"),
        &[first.path().to_path_buf(), second.path().to_path_buf()],
    )
    .unwrap_err();
    assert!(matches!(err, I18nError::DuplicateLocale(ref l) if l.as_str() == "en-US"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_lookups_agree() {
    let catalog = Arc::new(Catalog::builtin());
    let handles: Vec<_> = (0..16i64)
        .map(|score| {
            let catalog = Arc::clone(&catalog);
            tokio::spawn(async move {
                let params = Params::new().with("highscore", score);
                catalog.translate(MessageKey::MessageHighScore, &params).unwrap()
            })
        })
        .collect();

    for (score, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap(), format!("New high score! {score}"));
    }
}
