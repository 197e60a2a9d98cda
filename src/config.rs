use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// ログフィルタのデフォルト（RUST_LOG 未設定時）
pub const DEFAULT_LOG_FILTER: &str = "library_inventory=info";

/// 初期データファイルのパスを指定する環境変数
pub const SEED_FILE_ENV: &str = "LIBRARY_SEED_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read seed file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 実行時設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// キーから値を引く関数を受け取って設定を組み立てる
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let seed_file = lookup(SEED_FILE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_filter,
            seed_file,
        }
    }

    /// 初期データを読み込む。ファイル未指定なら組み込みデータを返す。
    pub fn load_seed(&self) -> Result<SeedData, ConfigError> {
        match &self.seed_file {
            Some(path) => SeedData::from_file(path),
            None => Ok(SeedData::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedMember {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedBook {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// 起動時に投入する会員と書籍
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub members: Vec<SeedMember>,
    #[serde(default)]
    pub books: Vec<SeedBook>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for SeedData {
    /// 組み込みの初期データ（会員2名、書籍3冊）
    fn default() -> Self {
        let member = |id, name: &str| SeedMember {
            id,
            name: name.to_string(),
        };
        let book = |id, title: &str, author: &str| SeedBook {
            id,
            title: title.to_string(),
            author: author.to_string(),
        };

        Self {
            members: vec![member(1, "Alice"), member(2, "Bob")],
            books: vec![
                book(101, "The Go Programming Language", "Alan A. A. Donovan"),
                book(102, "Clean Code", "Robert C. Martin"),
                book(103, "Introduction to Algorithms", "Cormen et al."),
            ],
        }
    }
}
