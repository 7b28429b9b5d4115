//! List, editor and mutation flows shared by every catalog entity.

use serde::Serialize;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::{CatalogReader, CatalogWriter};
use crate::domain::brand::Brands;
use crate::domain::category::Categories;
use crate::domain::tag::Tags;
use crate::domain::{CatalogEntity, EditorMode};
use crate::forms::list::ListQuery;
use crate::forms::{EntityForm, FormError, Lookups};
use crate::pagination::{Page, PaginationController, PaginationError, PaginationFilter};
use crate::select_option::{SelectOption, transform_to_select_option};
use crate::services::{MutationKind, ServiceError, ServiceResult, mutation_failure, read_failure};
use crate::session::SessionStore;
use crate::sorting::{SortOrder, sort_records};

/// Column and direction the rows of a page are ordered by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub field: String,
    pub order: SortOrder,
}

/// Data required to render a list screen.
#[derive(Debug)]
pub struct ListPage<R> {
    pub filter: PaginationFilter,
    pub page: Page<R>,
    pub sort: Option<SortState>,
}

/// Replays the events carried by `query` on top of the held filter.
///
/// A reset starts from the default filter. A search is applied before a page
/// change so both can arrive in one request.
pub fn apply_list_events(
    held: Option<PaginationFilter>,
    query: &ListQuery,
) -> Result<PaginationFilter, PaginationError> {
    let seed = if query.reset { None } else { held };
    let mut controller = PaginationController::initialize(seed);

    if let Some(search) = &query.search {
        controller.on_search(search);
    }

    if query.page.is_some() || query.page_size.is_some() {
        let current = controller.filter();
        let page_number = query.page.unwrap_or_else(|| current.page_number());
        let page_size = query.page_size.unwrap_or(current.page_size);
        controller.on_page_change(page_number, page_size)?;
    }

    Ok(controller.into_filter())
}

/// Fetches the page a list screen currently wants and orders its rows.
///
/// The resulting filter becomes the held filter of the screen. Invalid page
/// changes leave the held filter untouched.
pub async fn load_list_page<E, R>(
    repo: &R,
    session: &dyn SessionStore,
    query: &ListQuery,
) -> ServiceResult<ListPage<E::Record>>
where
    E: CatalogEntity,
    R: CatalogReader<E> + ?Sized,
{
    let filter = apply_list_events(session.load_filter(E::RESOURCE), query)?;

    if let Err(err) = session.save_filter(E::RESOURCE, &filter) {
        log::warn!("Failed to keep {} filter: {err}", E::RESOURCE);
    }

    let mut page = repo.fetch_page(&filter).await.map_err(|err| {
        log::error!("Failed to fetch {} page: {err}", E::RESOURCE);
        read_failure(session, err)
    })?;

    let sort = query
        .sort
        .as_deref()
        .and_then(E::sortable_column)
        .map(|column| SortState {
            field: column.key.to_string(),
            order: query.order.unwrap_or_default(),
        });

    if let Some(sort) = &sort {
        sort_records(&mut page.data, &sort.field, sort.order);
    }

    Ok(ListPage { filter, page, sort })
}

/// Returns the form for the editor screen: blank for a new record, prefilled
/// from the API otherwise.
pub async fn load_editor<F, R>(
    repo: &R,
    session: &dyn SessionStore,
    id: Option<&str>,
) -> ServiceResult<F>
where
    F: EntityForm,
    R: CatalogReader<F::Entity> + ?Sized,
{
    let Some(raw_id) = id else {
        return Ok(F::default());
    };

    let id = raw_id
        .parse::<<F::Entity as CatalogEntity>::Id>()
        .map_err(|_| ServiceError::NotFound)?;

    let record = repo.fetch_by_id(&id).await.map_err(|err| {
        log::error!(
            "Failed to fetch {} {id}: {err}",
            <F::Entity as CatalogEntity>::SINGULAR
        );
        read_failure(session, err)
    })?;

    Ok(F::from_record(&record))
}

/// Builds the category, brand and tag options of the product editor from the
/// available records.
pub async fn load_lookups<R>(repo: &R, session: &dyn SessionStore) -> ServiceResult<Lookups>
where
    R: CatalogReader<Categories> + CatalogReader<Brands> + CatalogReader<Tags> + ?Sized,
{
    let lookup_failure = |what: &str, err: ApiError| {
        log::error!("Failed to fetch available {what}: {err}");
        read_failure(session, err)
    };

    let categories = CatalogReader::<Categories>::fetch_available(repo)
        .await
        .map_err(|err| lookup_failure("categories", err))?;
    let brands = CatalogReader::<Brands>::fetch_available(repo)
        .await
        .map_err(|err| lookup_failure("brands", err))?;
    let tags = CatalogReader::<Tags>::fetch_available(repo)
        .await
        .map_err(|err| lookup_failure("tags", err))?;

    Ok(Lookups {
        categories: transform_to_select_option(
            &categories,
            |category| category.id.to_string(),
            |category| category.name.clone(),
            SelectOption::placeholder(String::new(), "Select category"),
        ),
        brands: transform_to_select_option(
            &brands,
            |brand| brand.id.to_string(),
            |brand| brand.name.clone(),
            SelectOption::placeholder(String::new(), "Select brand"),
        ),
        tags: transform_to_select_option(
            &tags,
            |tag| tag.id.to_string(),
            |tag| tag.title.clone(),
            SelectOption::placeholder(String::new(), "Select tags"),
        ),
    })
}

/// Validates the submitted editor form and creates or updates the record.
///
/// Nothing is sent to the API when validation fails.
pub async fn save_entity<F, R>(
    repo: &R,
    session: &dyn SessionStore,
    form: F,
) -> ServiceResult<MutationKind>
where
    F: EntityForm,
    R: CatalogWriter<F::Entity> + ?Sized,
{
    form.validate().map_err(FormError::from)?;
    let resource = <F::Entity as CatalogEntity>::RESOURCE;

    match form.into_draft()? {
        EditorMode::Create(new) => repo
            .create(&new)
            .await
            .map(|_| MutationKind::Create)
            .map_err(|err| {
                log::error!("Failed to create {resource}: {err}");
                mutation_failure(session, MutationKind::Create, err)
            }),
        EditorMode::Edit(update) => repo
            .update(&update)
            .await
            .map(|_| MutationKind::Update)
            .map_err(|err| {
                log::error!("Failed to update {resource}: {err}");
                mutation_failure(session, MutationKind::Update, err)
            }),
    }
}

pub async fn delete_entity<E, R>(
    repo: &R,
    session: &dyn SessionStore,
    id: &str,
) -> ServiceResult<MutationKind>
where
    E: CatalogEntity,
    R: CatalogWriter<E> + ?Sized,
{
    let id = id.parse::<E::Id>().map_err(|_| ServiceError::NotFound)?;

    repo.delete(&id)
        .await
        .map(|_| MutationKind::Delete)
        .map_err(|err| {
            log::error!("Failed to delete {} {id}: {err}", E::SINGULAR);
            mutation_failure(session, MutationKind::Delete, err)
        })
}
