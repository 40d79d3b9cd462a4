use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::use_cases::validate::ValidateProductsParams;
use business::domain::product::value_objects::ProductId;
use business::domain::shared::pagination::{Page, PageMeta};

use crate::api::error::ErrorResponse;

/// Parses a JSON number into an exact decimal using its shortest decimal form.
fn decimal_from_f64(value: f64) -> Result<BigDecimal, ErrorResponse> {
    if !value.is_finite() {
        return Err(invalid_price());
    }
    BigDecimal::from_str(&value.to_string()).map_err(|_| invalid_price())
}

/// Converts a stored price back to a JSON number. Unrepresentable prices are
/// logged and sent as NaN.
fn price_to_f64(price: &BigDecimal) -> f64 {
    match price.to_f64() {
        Some(value) => value,
        None => {
            tracing::error!("Price {} cannot be represented as a JSON number", price);
            f64::NAN
        }
    }
}

fn invalid_price() -> ErrorResponse {
    ErrorResponse::new("ValidationError", "product.price_invalid")
}

#[derive(Debug, Clone, Object)]
#[oai(deny_unknown_fields)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1))]
    pub name: String,
    /// Unit price, non-negative with at most 4 decimal places
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
}

impl CreateProductRequest {
    pub fn into_params(self) -> Result<CreateProductParams, ErrorResponse> {
        Ok(CreateProductParams {
            name: self.name,
            price: decimal_from_f64(self.price)?,
        })
    }
}

#[derive(Debug, Clone, Object)]
#[oai(deny_unknown_fields)]
pub struct UpdateProductRequest {
    /// Ignored: the id in the path selects the product
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i32>,
    /// New product name
    #[oai(skip_serializing_if_is_none, validator(min_length = 1))]
    pub name: Option<String>,
    /// New unit price
    #[oai(skip_serializing_if_is_none, validator(minimum(value = "0")))]
    pub price: Option<f64>,
}

impl UpdateProductRequest {
    pub fn into_params(self, id: ProductId) -> Result<UpdateProductParams, ErrorResponse> {
        Ok(UpdateProductParams {
            id,
            name: self.name,
            price: self.price.map(decimal_from_f64).transpose()?,
        })
    }
}

#[derive(Debug, Clone, Object)]
#[oai(deny_unknown_fields)]
pub struct ValidateProductsRequest {
    /// Product ids to check; duplicates are allowed
    pub ids: Vec<i32>,
}

impl From<ValidateProductsRequest> for ValidateProductsParams {
    fn from(request: ValidateProductsRequest) -> Self {
        Self {
            ids: request.ids.into_iter().map(ProductId::new).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i32,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// False once the product has been removed
    pub available: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: price_to_f64(product.price.value()),
            available: product.available,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct PageMetaResponse {
    /// Number of available products
    pub total: u64,
    /// Requested page
    pub page: u32,
    /// Last page holding data, 0 when there is none
    #[oai(rename = "lastPage")]
    pub last_page: u64,
}

impl From<PageMeta> for PageMetaResponse {
    fn from(meta: PageMeta) -> Self {
        Self {
            total: meta.total,
            page: meta.page,
            last_page: meta.last_page,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    pub data: Vec<ProductResponse>,
    pub meta: PageMetaResponse,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            data: page.data.into_iter().map(|p| p.into()).collect(),
            meta: page.meta.into(),
        }
    }
}
