/// One page of a paginated sequence
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// 1-based page number
    pub page_number: usize,

    /// Items on this page, at most the configured page size
    pub items: Vec<T>,

    /// Total number of pages in the sequence
    pub total_pages: usize,
}

/// Previous/next links for one page, absent at the respective boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationUrls {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Split an ordered sequence into contiguous pages of at most `page_size`
/// items. Zero items produce exactly one empty page; concatenating all
/// pages reproduces the input in order.
pub fn paginate<T: Clone>(items: &[T], page_size: usize) -> Vec<Page<T>> {
    let page_size = page_size.max(1);

    if items.is_empty() {
        return vec![Page {
            page_number: 1,
            items: Vec::new(),
            total_pages: 1,
        }];
    }

    let total_pages = (items.len() + page_size - 1) / page_size;

    items
        .chunks(page_size)
        .enumerate()
        .map(|(index, chunk)| Page {
            page_number: index + 1,
            items: chunk.to_vec(),
            total_pages,
        })
        .collect()
}

/// URL of a given listing page.
///
/// Page 1 is always the bare base URL; later pages live under `page/N/`.
/// The asymmetry is deliberate: `/blog/` and `/blog/page/1/` must not both
/// exist as addressable pages.
pub fn page_url(base_url: &str, page_number: usize, base_path: &str) -> String {
    let base = normalize_base(base_url);

    if page_number <= 1 {
        format!("{}{}", base_path, base)
    } else {
        format!("{}{}page/{}/", base_path, base, page_number)
    }
}

/// Previous/next URLs for a page of a listing rooted at `base_url`
pub fn pagination_urls(
    base_url: &str,
    page_number: usize,
    total_pages: usize,
    base_path: &str,
) -> PaginationUrls {
    let previous = if page_number > 1 {
        Some(page_url(base_url, page_number - 1, base_path))
    } else {
        None
    };

    let next = if page_number < total_pages {
        Some(page_url(base_url, page_number + 1, base_path))
    } else {
        None
    };

    PaginationUrls { previous, next }
}

fn normalize_base(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    }
}
