//! End-to-end lifecycle checks across use cases sharing one store.

use std::sync::Arc;

use crate::application::product::create::CreateProductUseCaseImpl;
use crate::application::product::delete::DeleteProductUseCaseImpl;
use crate::application::product::get_all::GetAllProductsUseCaseImpl;
use crate::application::product::get_by_id::GetProductByIdUseCaseImpl;
use crate::application::product::test_support::{InMemoryProductRepository, decimal, mock_logger};
use crate::application::product::update::UpdateProductUseCaseImpl;
use crate::application::product::validate::ValidateProductsUseCaseImpl;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::use_cases::validate::{
    ValidateProductsParams, ValidateProductsUseCase,
};
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::pagination::{PageMeta, PaginationParams};

struct Catalog {
    create: CreateProductUseCaseImpl,
    get_all: GetAllProductsUseCaseImpl,
    get_by_id: GetProductByIdUseCaseImpl,
    update: UpdateProductUseCaseImpl,
    delete: DeleteProductUseCaseImpl,
    validate: ValidateProductsUseCaseImpl,
}

fn catalog() -> Catalog {
    let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::default());
    Catalog {
        create: CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        },
        get_all: GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        },
        get_by_id: GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        },
        update: UpdateProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        },
        delete: DeleteProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        },
        validate: ValidateProductsUseCaseImpl {
            repository,
            logger: mock_logger(),
        },
    }
}

async fn create(catalog: &Catalog, name: &str) -> ProductId {
    catalog
        .create
        .execute(CreateProductParams {
            name: name.to_string(),
            price: decimal("9.99"),
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn should_hide_product_from_reads_when_removed() {
    let catalog = catalog();

    let created = catalog
        .create
        .execute(CreateProductParams {
            name: "Widget".to_string(),
            price: decimal("9.99"),
        })
        .await
        .unwrap();
    assert_eq!(created.id, ProductId::new(1));
    assert!(created.available);

    let page = catalog
        .get_all
        .execute(PaginationParams::new(Some(1), Some(10)))
        .await
        .unwrap();
    assert_eq!(page.data, vec![created.clone()]);
    assert_eq!(
        page.meta,
        PageMeta {
            total: 1,
            page: 1,
            last_page: 1
        }
    );

    let removed = catalog
        .delete
        .execute(DeleteProductParams { id: created.id })
        .await
        .unwrap();
    assert_eq!(removed.id, created.id);
    assert!(!removed.available);

    let lookup = catalog
        .get_by_id
        .execute(GetProductByIdParams { id: created.id })
        .await;
    assert!(matches!(lookup, Err(ProductError::NotFound(id)) if id == created.id));

    let second_removal = catalog
        .delete
        .execute(DeleteProductParams { id: created.id })
        .await;
    assert!(matches!(second_removal, Err(ProductError::NotFound(_))));

    let page = catalog.get_all.execute(PaginationParams::default()).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 0);
}

#[tokio::test]
async fn should_never_list_unavailable_products() {
    let catalog = catalog();
    for name in ["A", "B", "C", "D", "E"] {
        create(&catalog, name).await;
    }
    for id in [2, 4] {
        catalog
            .delete
            .execute(DeleteProductParams {
                id: ProductId::new(id),
            })
            .await
            .unwrap();
    }

    let first = catalog
        .get_all
        .execute(PaginationParams::new(Some(1), Some(2)))
        .await
        .unwrap();
    let second = catalog
        .get_all
        .execute(PaginationParams::new(Some(2), Some(2)))
        .await
        .unwrap();

    assert_eq!(first.meta.total, 3);
    assert_eq!(first.meta.last_page, 2);
    assert!(first.data.len() <= 2);
    let names: Vec<_> = first
        .data
        .iter()
        .chain(second.data.iter())
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "C", "E"]);
    assert!(first.data.iter().chain(second.data.iter()).all(|p| p.available));
}

#[tokio::test]
async fn should_keep_id_and_omitted_fields_when_updating() {
    let catalog = catalog();
    let id = create(&catalog, "Widget").await;

    let updated = catalog
        .update
        .execute(UpdateProductParams {
            id,
            name: None,
            price: Some(decimal("4.25")),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.price.value(), &decimal("4.25"));

    let fetched = catalog
        .get_by_id
        .execute(GetProductByIdParams { id })
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn should_validate_removed_products_as_existing() {
    let catalog = catalog();
    let kept = create(&catalog, "Kept").await;
    let removed = create(&catalog, "Removed").await;
    catalog
        .delete
        .execute(DeleteProductParams { id: removed })
        .await
        .unwrap();

    let products = catalog
        .validate
        .execute(ValidateProductsParams {
            ids: vec![kept, removed, kept],
        })
        .await
        .unwrap();
    assert_eq!(products.len(), 2);

    let result = catalog
        .validate
        .execute(ValidateProductsParams {
            ids: vec![ProductId::new(40), kept, ProductId::new(40)],
        })
        .await;
    assert!(matches!(
        result,
        Err(ProductError::ValidationFailed(missing)) if missing == vec![ProductId::new(40)]
    ));
}
