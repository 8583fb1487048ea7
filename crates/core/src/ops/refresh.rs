//! Shared fetch/refresh plumbing used by every operation struct.
//!
//! The per-kind endpoints return untagged entity bodies (the endpoint
//! already encodes the kind), so each fetch decodes the concrete struct
//! and wraps it into the [`Pension`] sum type here, in one place.

use futures::future::join_all;
use std::collections::{BTreeSet, HashMap};

use crate::errors::CoreError;
use crate::models::etf::EtfInfo;
use crate::models::pension::{
    CompanyPension, EtfPension, InsurancePension, Pension, PensionHandle, PensionKind,
    StatePension,
};
use crate::store::PensionStore;
use crate::transport::client::ApiClient;

/// Collection path of a kind's endpoint family, with the optional
/// member filter in the query string.
pub(crate) fn list_path(kind: PensionKind, member_id: Option<i64>) -> String {
    match member_id {
        Some(id) => format!("/pensions/{}?member_id={id}", kind.path_segment()),
        None => format!("/pensions/{}", kind.path_segment()),
    }
}

/// Entity path of one pension.
pub(crate) fn entity_path(handle: &PensionHandle) -> String {
    format!("/pensions/{}/{}", handle.kind.path_segment(), handle.id)
}

/// Fetch every pension of one kind and tag the results.
pub(crate) async fn fetch_kind(
    client: &ApiClient,
    kind: PensionKind,
    member_id: Option<i64>,
) -> Result<Vec<Pension>, CoreError> {
    let path = list_path(kind, member_id);
    Ok(match kind {
        PensionKind::Etf => client
            .get::<Vec<EtfPension>>(&path)
            .await?
            .into_iter()
            .map(Pension::Etf)
            .collect(),
        PensionKind::Insurance => client
            .get::<Vec<InsurancePension>>(&path)
            .await?
            .into_iter()
            .map(Pension::Insurance)
            .collect(),
        PensionKind::Company => client
            .get::<Vec<CompanyPension>>(&path)
            .await?
            .into_iter()
            .map(Pension::Company)
            .collect(),
        PensionKind::State => client
            .get::<Vec<StatePension>>(&path)
            .await?
            .into_iter()
            .map(Pension::State)
            .collect(),
    })
}

/// Fan-out fetch across all four kinds, in parallel, merged into one
/// heterogeneous list. Any kind failing fails the whole fetch; ETF
/// metadata enrichment failures do not. Order of the merged result is
/// not guaranteed.
pub(crate) async fn fetch_all(
    client: &ApiClient,
    member_id: Option<i64>,
) -> Result<Vec<Pension>, CoreError> {
    let fetches = PensionKind::ALL
        .into_iter()
        .map(|kind| fetch_kind(client, kind, member_id));
    let mut pensions = Vec::new();
    for result in join_all(fetches).await {
        pensions.extend(result?);
    }
    enrich_etf_metadata(client, &mut pensions).await;
    Ok(pensions)
}

/// Attach catalog metadata to ETF pensions that lack it. Each distinct
/// ETF id is fetched once, in parallel; a failed lookup is logged and
/// the entry keeps `etf: None` rather than failing the list.
async fn enrich_etf_metadata(client: &ApiClient, pensions: &mut [Pension]) {
    let ids: BTreeSet<String> = pensions
        .iter()
        .filter_map(|p| match p {
            Pension::Etf(e) if e.etf.is_none() => Some(e.etf_id.clone()),
            _ => None,
        })
        .collect();
    if ids.is_empty() {
        return;
    }

    let fetches = ids.into_iter().map(|id| async move {
        let result = client.get::<EtfInfo>(&format!("/etfs/{id}")).await;
        (id, result)
    });
    let mut infos: HashMap<String, EtfInfo> = HashMap::new();
    for (id, result) in join_all(fetches).await {
        match result {
            Ok(info) => {
                infos.insert(id, info);
            }
            Err(e) => log::warn!("ETF metadata lookup failed for {id}: {e}"),
        }
    }

    for pension in pensions {
        if let Pension::Etf(e) = pension {
            if e.etf.is_none() {
                e.etf = infos.get(&e.etf_id).cloned();
            }
        }
    }
}

/// Fetch one pension through its kind's endpoint.
pub(crate) async fn fetch_one(
    client: &ApiClient,
    handle: &PensionHandle,
) -> Result<Pension, CoreError> {
    let path = entity_path(handle);
    Ok(match handle.kind {
        PensionKind::Etf => Pension::Etf(client.get::<EtfPension>(&path).await?),
        PensionKind::Insurance => Pension::Insurance(client.get::<InsurancePension>(&path).await?),
        PensionKind::Company => Pension::Company(client.get::<CompanyPension>(&path).await?),
        PensionKind::State => Pension::State(client.get::<StatePension>(&path).await?),
    })
}

/// Full list refresh into the store, as mutations trigger after a
/// successful write.
pub(crate) async fn refresh_list(
    client: &ApiClient,
    store: &PensionStore,
) -> Result<(), CoreError> {
    let pensions = fetch_all(client, None).await?;
    store.replace_all(pensions).await;
    Ok(())
}

/// Single-entity refresh: re-fetch and upsert (a matching selection is
/// updated by the store in the same step).
pub(crate) async fn refresh_one(
    client: &ApiClient,
    store: &PensionStore,
    handle: &PensionHandle,
) -> Result<(), CoreError> {
    let pension = fetch_one(client, handle).await?;
    store.upsert(pension).await;
    Ok(())
}

/// Single-entity refresh, skipped when the pension is not the current
/// selection. Keeps updates from issuing a redundant entity fetch.
pub(crate) async fn refresh_one_if_selected(
    client: &ApiClient,
    store: &PensionStore,
    handle: &PensionHandle,
) -> Result<(), CoreError> {
    if store.is_selected(handle.id).await {
        refresh_one(client, store, handle).await?;
    }
    Ok(())
}
