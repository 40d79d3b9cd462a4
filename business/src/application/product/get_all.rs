use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::{ProductFilter, ProductRepository};
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::shared::pagination::{Page, PageMeta, PaginationParams};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: PaginationParams) -> Result<Page<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching available products: page {} limit {}",
            params.page, params.limit
        ));

        let filter = ProductFilter::available();
        let total = self.repository.count(&filter).await?;
        let meta = PageMeta::new(total, params);

        if params.limit == 0 {
            self.logger.warn("Product listing requested with limit 0");
            return Ok(Page {
                data: Vec::new(),
                meta,
            });
        }

        let data = self
            .repository
            .find_many(&filter, params.skip(), Some(u64::from(params.limit)))
            .await?;

        self.logger.debug(&format!(
            "Found {} of {} available products",
            data.len(),
            total
        ));
        Ok(Page { data, meta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, make_product, mock_logger};

    #[tokio::test]
    async fn should_return_page_with_meta_when_requested() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_count()
            .withf(|filter| *filter == ProductFilter::available())
            .returning(|_| Ok(1));
        mock_repo
            .expect_find_many()
            .withf(|filter, skip, take| {
                *filter == ProductFilter::available() && *skip == 0 && *take == Some(10)
            })
            .returning(|_, _, _| Ok(vec![make_product(1, "Widget", true)]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case.execute(PaginationParams::default()).await.unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "Widget");
        assert_eq!(
            page.meta,
            PageMeta {
                total: 1,
                page: 1,
                last_page: 1
            }
        );
    }

    #[tokio::test]
    async fn should_skip_previous_pages_when_page_is_greater_than_one() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_count().returning(|_| Ok(12));
        mock_repo
            .expect_find_many()
            .withf(|_, skip, take| *skip == 5 && *take == Some(5))
            .returning(|_, _, _| {
                Ok((6..=10).map(|id| make_product(id, "Bolt", true)).collect())
            });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(PaginationParams::new(Some(2), Some(5)))
            .await
            .unwrap();

        assert_eq!(page.data.len(), 5);
        assert_eq!(page.meta.last_page, 3);
        assert_eq!(page.meta.page, 2);
    }

    #[tokio::test]
    async fn should_return_empty_data_with_meta_when_page_is_past_the_end() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_count().returning(|_| Ok(3));
        mock_repo
            .expect_find_many()
            .returning(|_, _, _| Ok(Vec::new()));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(PaginationParams::new(Some(9), Some(10)))
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(
            page.meta,
            PageMeta {
                total: 3,
                page: 9,
                last_page: 1
            }
        );
    }

    #[tokio::test]
    async fn should_not_scan_when_limit_is_zero() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_count().returning(|_| Ok(4));
        mock_repo.expect_find_many().never();

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(PaginationParams::new(Some(1), Some(0)))
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.meta.last_page, 0);
        assert_eq!(page.meta.total, 4);
    }
}
