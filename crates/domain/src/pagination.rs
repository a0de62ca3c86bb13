//! # ページ指定
//!
//! ユーザー一覧取得のページ番号とページサイズを表す値オブジェクト。
//!
//! 1 始まりのページ番号とページサイズから、ID 昇順の一覧に対する
//! オフセットと件数を計算する。不正な値はエラーにせずデフォルト値に丸める。
//!
//! | 入力 | 解釈 |
//! |------|------|
//! | 0 以下のページ番号 | 1 |
//! | 0 以下のページサイズ | 10 |
//! | 数値として解釈できない文字列 | 上記デフォルト |

/// ページ番号のデフォルト値
pub const DEFAULT_PAGE: u64 = 1;

/// ページサイズのデフォルト値
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// ページ指定（値オブジェクト）
///
/// # 不変条件
///
/// - `page >= 1`
/// - `page_size >= 1`
///
/// # 使用例
///
/// ```rust
/// use roster_domain::pagination::Pagination;
///
/// let pagination = Pagination::new(2, 5);
/// assert_eq!(pagination.offset(), 5);
/// assert_eq!(pagination.limit(), 5);
///
/// let fallback = Pagination::from_query(Some("abc"), None);
/// assert_eq!(fallback, Pagination::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page:      u64,
    page_size: u64,
}

impl Pagination {
    /// ページ番号とページサイズからページ指定を作成する
    ///
    /// 0 以下の値はそれぞれのデフォルト値に置き換える。
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page:      positive_or(page, DEFAULT_PAGE),
            page_size: positive_or(page_size, DEFAULT_PAGE_SIZE),
        }
    }

    /// クエリパラメータの生文字列からページ指定を作成する
    ///
    /// 未指定・解釈不能な値はデフォルト値として扱い、エラーにしない。
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(0);
        Self::new(parse(page), parse(page_size))
    }

    /// 1 始まりのページ番号
    pub fn page(&self) -> u64 {
        self.page
    }

    /// 1 ページあたりの最大件数
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// 先頭からスキップする件数
    ///
    /// 乗算がオーバーフローする場合は上限値に飽和する。
    /// 飽和したオフセットは常に一覧の末尾を超えるため、結果は空になる。
    pub fn offset(&self) -> usize {
        let offset = (self.page - 1).saturating_mul(self.page_size);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    /// 取得する最大件数
    pub fn limit(&self) -> usize {
        usize::try_from(self.page_size).unwrap_or(usize::MAX)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page:      DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn positive_or(value: i64, default: u64) -> u64 {
    u64::try_from(value).ok().filter(|v| *v > 0).unwrap_or(default)
}
