//! `SQLite` implementation of the `ProductRepository` trait.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use sqlx::error::ErrorKind;

use products_core::{
    NewProduct, PageRequest, Product, ProductOrder, ProductRepository, ProductSortField,
    RepositoryError,
};

use super::row_mappers::{PRODUCT_SELECT_COLUMNS, price_sort_key, price_to_text, row_to_product};

/// Map a driver error onto the repository's error kinds.
fn storage_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation => {
                RepositoryError::AlreadyExists(db.message().to_string())
            }
            ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::ForeignKeyViolation => {
                RepositoryError::Constraint(db.message().to_string())
            }
            _ => RepositoryError::Storage(err.to_string()),
        },
        _ => RepositoryError::Storage(err.to_string()),
    }
}

/// SQL expression a sort field orders by.
const fn sort_expression(field: ProductSortField) -> &'static str {
    match field {
        ProductSortField::Id => "id",
        ProductSortField::Name => "name",
        ProductSortField::Price => "price_key",
    }
}

/// Build an `ORDER BY` body from resolved sort criteria.
///
/// Rows tied on every requested criterion fall back to ascending id so that
/// consecutive pages never overlap.
fn order_by_clause(sort: &[ProductOrder]) -> String {
    let mut terms: Vec<String> = sort
        .iter()
        .map(|order| {
            format!(
                "{} {}",
                sort_expression(order.field),
                order.direction.as_sql()
            )
        })
        .collect();

    if !sort.iter().any(|order| order.field == ProductSortField::Id) {
        terms.push("id ASC".to_string());
    }

    terms.join(", ")
}

/// `SQLite` implementation of the `ProductRepository` trait.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new `SQLite` product repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let result = sqlx::query("INSERT INTO products (name, price, price_key) VALUES (?, ?, ?)")
            .bind(&product.name)
            .bind(price_to_text(product.price))
            .bind(price_sort_key(product.price))
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(product.clone().with_id(result.last_insert_rowid()))
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, price, price_key) VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                price = excluded.price,
                price_key = excluded.price_key
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(price_to_text(product.price))
        .bind(price_sort_key(product.price))
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(product.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let query = format!("SELECT {PRODUCT_SELECT_COLUMNS} FROM products WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Product with ID {id}")))?;

        row_to_product(&row)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Product with ID {id}")));
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let query = format!("SELECT {PRODUCT_SELECT_COLUMNS} FROM products ORDER BY id ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_product).collect()
    }

    async fn list_by_price_between(
        &self,
        from: Decimal,
        to: Decimal,
    ) -> Result<Vec<Product>, RepositoryError> {
        let query = format!(
            "SELECT {PRODUCT_SELECT_COLUMNS} FROM products \
             WHERE price_key BETWEEN ? AND ? ORDER BY id ASC"
        );

        let rows = sqlx::query(&query)
            .bind(price_sort_key(from))
            .bind(price_sort_key(to))
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_product).collect()
    }

    async fn list_page(&self, request: &PageRequest) -> Result<Vec<Product>, RepositoryError> {
        let order_by = order_by_clause(request.sort());
        let query = format!(
            "SELECT {PRODUCT_SELECT_COLUMNS} FROM products ORDER BY {order_by} LIMIT ? OFFSET ?"
        );

        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);

        let rows = sqlx::query(&query)
            .bind(i64::from(request.size()))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_product).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use products_core::{SortDirection, SortSpec};

    async fn repo() -> SqliteProductRepository {
        SqliteProductRepository::new(setup_test_database().await.unwrap())
    }

    fn price(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    async fn seed(repo: &SqliteProductRepository, items: &[(&str, &str)]) -> Vec<Product> {
        let mut created = Vec::new();
        for (name, p) in items {
            created.push(repo.insert(&NewProduct::new(*name, price(p))).await.unwrap());
        }
        created
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn page(page: u32, size: u32, sort_by: &str) -> PageRequest {
        PageRequest::of(page, size, &SortSpec::parse(sort_by).unwrap()).unwrap()
    }

    #[test]
    fn order_by_appends_id_tiebreak() {
        let sort = [ProductOrder {
            field: ProductSortField::Price,
            direction: SortDirection::Desc,
        }];
        assert_eq!(order_by_clause(&sort), "price_key DESC, id ASC");
    }

    #[test]
    fn order_by_keeps_explicit_id() {
        let sort = [ProductOrder {
            field: ProductSortField::Id,
            direction: SortDirection::Desc,
        }];
        assert_eq!(order_by_clause(&sort), "id DESC");
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_get_round_trips() {
        let repo = repo().await;
        let created = seed(&repo, &[("Desk", "199.99"), ("Lamp", "12.50")]).await;

        assert_ne!(created[0].id, created[1].id);

        let fetched = repo.get_by_id(created[1].id).await.unwrap();
        assert_eq!(fetched.name, "Lamp");
        assert_eq!(fetched.price, price("12.50"));
    }

    #[tokio::test]
    async fn test_unique_violation_maps_to_already_exists() {
        let pool = setup_test_database().await.unwrap();
        sqlx::query("CREATE UNIQUE INDEX uq_products_name ON products(name)")
            .execute(&pool)
            .await
            .unwrap();
        let repo = SqliteProductRepository::new(pool);

        seed(&repo, &[("Desk", "10")]).await;
        let err = repo
            .insert(&NewProduct::new("Desk", price("12")))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = repo().await;
        let err = repo.get_by_id(404).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_row() {
        let repo = repo().await;
        let created = seed(&repo, &[("Desk", "199.99")]).await;

        let updated = Product {
            id: created[0].id,
            name: "Standing desk".to_string(),
            price: price("349.00"),
        };
        repo.save(&updated).await.unwrap();

        assert_eq!(repo.get_by_id(created[0].id).await.unwrap(), updated);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_creates_missing_row() {
        let repo = repo().await;
        let product = Product {
            id: 500,
            name: "Rug".to_string(),
            price: price("80"),
        };

        repo.save(&product).await.unwrap();
        assert_eq!(repo.get_by_id(500).await.unwrap(), product);
    }

    #[tokio::test]
    async fn test_delete_removes_row_once() {
        let repo = repo().await;
        let created = seed(&repo, &[("Desk", "199.99")]).await;

        repo.delete(created[0].id).await.unwrap();
        assert!(matches!(
            repo.get_by_id(created[0].id).await.unwrap_err(),
            RepositoryError::NotFound(_)
        ));
        assert!(matches!(
            repo.delete(created[0].id).await.unwrap_err(),
            RepositoryError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_price_range_is_inclusive_and_exact() {
        let repo = repo().await;
        seed(
            &repo,
            &[
                ("a", "9.99"),
                ("b", "10.00"),
                ("c", "15"),
                ("d", "20.00"),
                ("e", "20.01"),
            ],
        )
        .await;

        let found = repo
            .list_by_price_between(price("10"), price("20"))
            .await
            .unwrap();
        assert_eq!(names(&found), vec!["b", "c", "d"]);
    }

    #[tokio::test]
    async fn test_list_page_sorts_numerically_by_price() {
        let repo = repo().await;
        seed(&repo, &[("a", "100"), ("b", "9.5"), ("c", "20")]).await;

        let found = repo.list_page(&page(0, 10, "price:asc")).await.unwrap();
        assert_eq!(names(&found), vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_price_order_is_exact_beyond_float_precision() {
        let repo = repo().await;
        seed(
            &repo,
            &[
                ("low", "1.00000000000000000001"),
                ("high", "1.00000000000000000002"),
                ("negative", "-1.00000000000000000001"),
            ],
        )
        .await;

        let desc = repo.list_page(&page(0, 10, "price:desc")).await.unwrap();
        let asc = repo.list_page(&page(0, 10, "price:asc")).await.unwrap();

        assert_eq!(names(&desc), vec!["high", "low", "negative"]);
        assert_eq!(names(&asc), vec!["negative", "low", "high"]);
    }

    #[tokio::test]
    async fn test_price_range_bounds_are_exact() {
        let repo = repo().await;
        seed(
            &repo,
            &[
                ("below", "1.00000000000000000001"),
                ("inside", "1.00000000000000000002"),
                ("above", "1.00000000000000000003"),
            ],
        )
        .await;

        let found = repo
            .list_by_price_between(
                price("1.00000000000000000002"),
                price("1.000000000000000000020"),
            )
            .await
            .unwrap();
        assert_eq!(names(&found), vec!["inside"]);
    }

    #[tokio::test]
    async fn test_list_page_applies_offset_and_limit() {
        let repo = repo().await;
        seed(
            &repo,
            &[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4"), ("e", "5")],
        )
        .await;

        let first = repo.list_page(&page(0, 2, "id:asc")).await.unwrap();
        let second = repo.list_page(&page(1, 2, "id:asc")).await.unwrap();
        let last = repo.list_page(&page(2, 2, "id:asc")).await.unwrap();
        let beyond = repo.list_page(&page(3, 2, "id:asc")).await.unwrap();

        assert_eq!(names(&first), vec!["a", "b"]);
        assert_eq!(names(&second), vec!["c", "d"]);
        assert_eq!(names(&last), vec!["e"]);
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_list_page_multi_field_order() {
        let repo = repo().await;
        seed(
            &repo,
            &[("pen", "2"), ("cup", "5"), ("pen", "3"), ("cup", "1")],
        )
        .await;

        let found = repo
            .list_page(&page(0, 10, "name:asc;price:desc"))
            .await
            .unwrap();
        let pairs: Vec<_> = found
            .iter()
            .map(|p| (p.name.as_str(), p.price.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("cup", "5".to_string()),
                ("cup", "1".to_string()),
                ("pen", "3".to_string()),
                ("pen", "2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_default_sort_is_id_descending() {
        let repo = repo().await;
        seed(&repo, &[("a", "1"), ("b", "2"), ("c", "3")]).await;

        let found = repo.list_page(&page(0, 20, "id")).await.unwrap();
        assert_eq!(names(&found), vec!["c", "b", "a"]);
    }
}
