use serde::de::DeserializeOwned;

use crate::{
    error::FetchError,
    spotify::{client::SpotifyClient, transport::Transport},
    types::Page,
};

/// Page size used for every collection endpoint.
pub const PAGE_LIMIT: u32 = 50;

impl<T: Transport> SpotifyClient<T> {
    /// Fetches every page of a `{ total, items }` collection endpoint with
    /// [`PAGE_LIMIT`] items per request.
    pub fn fetch_all<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<R>, FetchError> {
        self.fetch_all_with_limit(path, params, PAGE_LIMIT)
    }

    /// Walks a collection endpoint page by page and concatenates the items.
    ///
    /// The first page is fetched once to learn `total`; the walk then continues
    /// at `limit, 2 * limit, ...` while the offset is below `total`. Any failing
    /// page aborts the walk with the offset of that page.
    pub fn fetch_all_with_limit<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        limit: u32,
    ) -> Result<Vec<R>, FetchError> {
        let limit = limit.max(1);

        let first: Page<R> = self.fetch_page(path, params, limit, 0)?;
        let total = first.total;
        let mut items = first.items;
        items.reserve((total as usize).saturating_sub(items.len()));

        let mut offset = limit;
        while offset < total {
            let page: Page<R> = self.fetch_page(path, params, limit, offset)?;
            if page.items.is_empty() {
                log::warn!(
                    "{} returned an empty page at offset {} of {}, stopping",
                    path,
                    offset,
                    total
                );
                break;
            }
            items.extend(page.items);
            offset += limit;
        }

        items.truncate(total as usize);
        log::debug!("Fetched {} of {} items from {}", items.len(), total, path);
        Ok(items)
    }

    /// Fetches a single page of a collection endpoint.
    pub fn fetch_page<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        limit: u32,
        offset: u32,
    ) -> Result<Page<R>, FetchError> {
        let mut query = params.to_vec();
        query.push(("limit", limit.to_string()));
        query.push(("offset", offset.to_string()));

        self.get_json(path, &query, Some(offset))
    }
}
