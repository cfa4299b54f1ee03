// ============================================================================
// Timestables - 语言文件加载
// ============================================================================
//
// 文件: src/i18n/loader.rs
// 职责: 从 TOML 语言文件构建语言表
// 边界:
//   - ✅ 语言目录扫描
//   - ✅ 语言文件读取与解析
//   - ✅ 逐文件校验报告
//   - ✅ 启动时语言目录构建
//   - ❌ 不应包含输出展示逻辑
//
// ============================================================================

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use super::catalog::Catalog;
use super::dictionary::Dictionary;
use super::locale::LocaleId;
use super::I18nError;

/// 语言文件扩展名
pub const LOCALE_FILE_EXTENSION: &str = "toml";

/// 读取单个语言文件，文件名（不含扩展名）即语言标识
pub fn load_file(path: &Path) -> Result<Dictionary, I18nError> {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| I18nError::InvalidLocale(path.display().to_string()))?;
    let locale: LocaleId = stem.parse()?;

    let content = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table: toml::Table = toml::from_str(&content).map_err(|source| I18nError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut templates = HashMap::with_capacity(table.len());
    for (key, value) in table {
        match value {
            toml::Value::String(template) => {
                templates.insert(key, template);
            }
            _ => {
                return Err(I18nError::InvalidValue {
                    path: path.to_path_buf(),
                    key,
                })
            }
        }
    }

    Dictionary::from_table(locale, templates)
}

/// 列出目录下（不递归）的所有语言文件，按文件名排序
pub fn locale_files(dir: &Path) -> Result<Vec<PathBuf>, I18nError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| I18nError::Io {
            path: dir.to_path_buf(),
            source: err.into(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(LOCALE_FILE_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// 加载目录下的所有语言文件并注册到目录，遇到第一个错误即失败
pub fn load_dir(catalog: &mut Catalog, dir: &Path) -> Result<usize, I18nError> {
    let files = locale_files(dir)?;
    for file in &files {
        let dictionary = load_file(file)?;
        debug!(path = %file.display(), locale = %dictionary.locale(), "loaded locale file");
        catalog.insert(dictionary)?;
    }
    Ok(files.len())
}

/// 构建启动用的语言目录：内置语言 + 各目录下的语言文件，然后选择当前语言
///
/// 不存在的目录会被跳过；任何无效语言文件都会导致失败。
pub fn build_catalog(locale: &LocaleId, dirs: &[PathBuf]) -> Result<Catalog, I18nError> {
    let mut catalog = Catalog::builtin();
    for dir in dirs {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "locale directory not found, skipping");
            continue;
        }
        let loaded = load_dir(&mut catalog, dir)?;
        debug!(dir = %dir.display(), count = loaded, "scanned locale directory");
    }
    catalog.select(locale);
    Ok(catalog)
}

/// 单个语言文件的校验结果
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub locale: Option<LocaleId>,
    /// 校验失败原因，成功为 None
    pub error: Option<String>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// 逐个校验目录下的语言文件，不因单个文件失败而中止
///
/// 通过校验的语言会注册到 `catalog`，便于跨目录发现重复语言。
pub fn inspect_dir(catalog: &mut Catalog, dir: &Path) -> Result<Vec<FileReport>, I18nError> {
    let reports = locale_files(dir)?
        .into_iter()
        .map(|path| {
            let outcome = load_file(&path).and_then(|dictionary| {
                let locale = dictionary.locale().clone();
                catalog.insert(dictionary).map(|_| locale)
            });
            match outcome {
                Ok(locale) => FileReport {
                    path,
                    locale: Some(locale),
                    error: None,
                },
                Err(err) => FileReport {
                    locale: path
                        .file_stem()
                        .and_then(|stem| stem.to_str())
                        .and_then(|stem| stem.parse().ok()),
                    path,
                    error: Some(err.to_string()),
                },
            }
        })
        .collect();
    Ok(reports)
}
