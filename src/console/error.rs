use crate::application::library::{ErrorKind, LibraryApplicationError};

/// 利用者に表示するエラーメッセージを組み立てる
///
/// 業務上のエラーはそのまま表示する。システム障害の詳細はログにだけ残し、
/// 画面には一般的なメッセージを出す。
pub fn user_message(err: &LibraryApplicationError) -> String {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::Conflict => format!("Error: {}", err),
        ErrorKind::Internal => {
            tracing::error!(error = ?err, "internal error in console session");
            "Error: An unexpected error occurred".to_string()
        }
    }
}
