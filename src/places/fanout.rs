//! Detail fan-out: one detail request per summary, merged back in summary
//! order.

use crate::places::client::PlacesApi;
use crate::places::model::{Place, PlaceSummary};
use crate::Result;
use futures::future::try_join_all;

/// Fetches details for every summary concurrently and merges them into
/// [`Place`]s.
///
/// The output order is the input order regardless of which request resolves
/// first. The first failure fails the whole batch.
pub async fn fetch_places<A>(api: &A, summaries: Vec<PlaceSummary>) -> Result<Vec<Place>>
where
    A: PlacesApi + ?Sized,
{
    let requests = summaries.iter().map(|summary| api.fetch_detail(&summary.xid));
    let details = try_join_all(requests).await?;

    Ok(summaries
        .into_iter()
        .zip(details)
        .map(|(summary, detail)| Place::merge(summary, detail))
        .collect())
}

/// Drops summaries without a display name.
pub fn named_only(summaries: Vec<PlaceSummary>) -> Vec<PlaceSummary> {
    summaries
        .into_iter()
        .filter(|summary| !summary.name.trim().is_empty())
        .collect()
}
