use serde::Serialize;

use crate::domain::{CatalogEntity, Column};
use crate::forms::FormField;
use crate::pagination::{PAGE_SIZE_OPTIONS, PaginationFilter, Paginated};
use crate::services::catalog::{ListPage, SortState};
use crate::sorting::{RecordFields, SortOrder};

/// Wire name of the column rendered as a thumbnail.
const IMAGE_COLUMN: &str = "imageUrl";

#[derive(Debug, Serialize)]
pub struct Cell {
    pub value: String,
    pub image: bool,
}

#[derive(Debug, Serialize)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn from_record<E: CatalogEntity>(record: &E::Record) -> Self {
        let cells = E::COLUMNS
            .iter()
            .map(|column| Cell {
                value: record
                    .field(column.key)
                    .map(|value| value.into_owned())
                    .unwrap_or_default(),
                image: column.key == IMAGE_COLUMN,
            })
            .collect();

        Self {
            id: E::id_of(record).to_string(),
            cells,
        }
    }
}

/// Table header cell with the link that sorts by it.
#[derive(Debug, Serialize)]
pub struct ColumnView {
    pub key: &'static str,
    pub title: &'static str,
    /// Query string selecting this column; `None` for plain columns.
    pub sort_query: Option<String>,
    /// Direction the rows are currently sorted in by this column.
    pub active_order: Option<SortOrder>,
}

impl ColumnView {
    fn new(column: &Column, sort: Option<&SortState>) -> Self {
        let active_order = sort
            .filter(|sort| sort.field == column.key)
            .map(|sort| sort.order);
        let next_order = active_order.map(SortOrder::reversed).unwrap_or_default();
        let sort_query = column
            .sortable
            .then(|| format!("sort={}&order={}", column.key, order_name(next_order)));

        Self {
            key: column.key,
            title: column.title,
            sort_query,
            active_order,
        }
    }
}

fn order_name(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "asc",
        SortOrder::Desc => "desc",
    }
}

/// Data required to render a list screen.
#[derive(Debug, Serialize)]
pub struct ListView {
    pub title: &'static str,
    pub resource: &'static str,
    pub singular: &'static str,
    pub columns: Vec<ColumnView>,
    pub rows: Paginated<TableRow>,
    pub filter: PaginationFilter,
    pub page_size_options: Vec<usize>,
    /// Query string keeping the current sort on page links, empty when unsorted.
    pub sort_query: String,
}

impl ListView {
    pub fn build<E: CatalogEntity>(list: ListPage<E::Record>) -> Self {
        let columns = E::COLUMNS
            .iter()
            .map(|column| ColumnView::new(column, list.sort.as_ref()))
            .collect();
        let sort_query = list
            .sort
            .as_ref()
            .map(|sort| format!("&sort={}&order={}", sort.field, order_name(sort.order)))
            .unwrap_or_default();
        let rows = list.page.map(|record| TableRow::from_record::<E>(&record));

        Self {
            title: E::TITLE,
            resource: E::RESOURCE,
            singular: E::SINGULAR,
            columns,
            rows: Paginated::for_filter(rows, &list.filter),
            filter: list.filter,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            sort_query,
        }
    }
}

/// Data required to render an editor screen.
#[derive(Debug, Serialize)]
pub struct EditorView {
    pub title: String,
    pub resource: &'static str,
    pub id: Option<String>,
    pub is_create: bool,
    pub fields: Vec<FormField>,
    pub errors: Vec<String>,
}

impl EditorView {
    pub fn new<E: CatalogEntity>(
        id: Option<String>,
        fields: Vec<FormField>,
        errors: Vec<String>,
    ) -> Self {
        let id = id.filter(|id| !id.trim().is_empty());
        let is_create = id.is_none();
        let title = if is_create {
            format!("Create {}", E::SINGULAR)
        } else {
            format!("Update {}", E::SINGULAR)
        };

        Self {
            title,
            resource: E::RESOURCE,
            id,
            is_create,
            fields,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{Product, Products};
    use crate::domain::types::{ProductId, Status};
    use crate::pagination::Page;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: name.to_string(),
            description: None,
            price: 9.5,
            sale_price: None,
            quantity: 2,
            warranty: 6,
            image_url: "https://cdn.example.com/x.png".to_string(),
            status: Status::Active,
            is_new_product: false,
            is_featured_product: false,
            is_favorite_product: false,
            category_id: 1,
            brand_id: 1,
            images: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn rows_follow_columns_and_flag_images() {
        let row = TableRow::from_record::<Products>(&product("p-1", "Lamp"));

        assert_eq!(row.id, "p-1");
        let values: Vec<&str> = row.cells.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["Lamp", "https://cdn.example.com/x.png", "9.5", "6", "2", "ACTIVE"]
        );
        assert!(row.cells[1].image);
        assert!(!row.cells[0].image);
    }

    #[test]
    fn active_sort_column_links_to_reverse_order() {
        let filter = PaginationFilter::default();
        let list = ListPage {
            filter: filter.clone(),
            page: Page {
                data: vec![product("p-1", "Lamp")],
                ..Page::empty(&filter)
            },
            sort: Some(SortState {
                field: "price".to_string(),
                order: SortOrder::Asc,
            }),
        };

        let view = ListView::build::<Products>(list);

        let price = view.columns.iter().find(|c| c.key == "price").unwrap();
        assert_eq!(price.active_order, Some(SortOrder::Asc));
        assert_eq!(price.sort_query.as_deref(), Some("sort=price&order=desc"));
        let image = view.columns.iter().find(|c| c.key == "imageUrl").unwrap();
        assert_eq!(image.sort_query, None);
        assert_eq!(view.sort_query, "&sort=price&order=asc");
        assert_eq!(view.rows.items.len(), 1);
    }

    #[test]
    fn page_links_use_the_held_filter() {
        let filter = PaginationFilter {
            page_index: 2,
            page_size: 20,
            search: String::new(),
        };
        let list = ListPage {
            filter: filter.clone(),
            page: Page {
                data: vec![product("p-1", "Lamp")],
                page_index: usize::MAX,
                page_size: 0,
                total_rows: 60,
                total_pages: 3,
                has_next: false,
                has_previous: true,
            },
            sort: None,
        };

        let view = ListView::build::<Products>(list);

        assert_eq!(view.rows.page, 3);
        assert_eq!(view.rows.page_size, 20);
        assert_eq!(view.rows.pages, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(view.filter, filter);
    }

    #[test]
    fn editor_title_follows_mode() {
        let create = EditorView::new::<Products>(Some(" ".to_string()), Vec::new(), Vec::new());
        let edit = EditorView::new::<Products>(Some("p-1".to_string()), Vec::new(), Vec::new());

        assert!(create.is_create);
        assert_eq!(create.title, "Create product");
        assert_eq!(edit.title, "Update product");
    }
}
