#![allow(dead_code)]

use library_inventory::adapters::memory::LibraryStore;
use library_inventory::application::library::{ServiceDependencies, seed_library};
use library_inventory::config::SeedData;
use std::sync::Arc;

/// 空のインメモリストアで依存関係を作成
pub fn empty_deps() -> ServiceDependencies {
    ServiceDependencies {
        library_store: Arc::new(LibraryStore::new()),
    }
}

/// 組み込みの初期データ（会員1,2 / 書籍101,102,103）を投入した依存関係を作成
pub async fn seeded_deps() -> ServiceDependencies {
    let deps = empty_deps();
    seed_library(&deps, &SeedData::default())
        .await
        .expect("Failed to seed library");
    deps
}
