use std::sync::Arc;

use poem::{Endpoint, EndpointExt, IntoResponse};
use poem_openapi::{
    OpenApi,
    param::{Header, Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::append_review::{
    AppendReviewParams, AppendReviewUseCase,
};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::Role;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductForm, DeleteConfirmationResponse, ProductPageResponse, ProductResponse,
    UpdateProductForm, read_image,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    append_review_use_case: Arc<dyn AppendReviewUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        append_review_use_case: Arc<dyn AppendReviewUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            get_by_id_use_case,
            create_use_case,
            append_review_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("NotFound", "product.not_found"))
}

fn forbidden() -> Json<ErrorResponse> {
    let (_, json) = ProductError::Forbidden.into_error_response();
    json
}

fn unreadable_image() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", "product.image_unreadable"))
}

/// Rejects callers whose `role` header is not `admin` before the request
/// body is extracted.
fn admin_only(ep: impl Endpoint + 'static) -> impl Endpoint {
    ep.around(|ep, req| async move {
        let role = Role::from_header(req.header("role"));
        if !role.is_admin() {
            tracing::warn!(%role, path = req.uri().path(), "rejected non-admin request");
            return Ok(UpdateProductResponse::Forbidden(forbidden()).into_response());
        }
        ep.call(req).await.map(IntoResponse::into_response)
    })
}

/// Product catalog API
///
/// Browsing and reviewing are public. Updating and deleting require the
/// `role: admin` header.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns one page of products. `limit` defaults to 10 and is capped at
    /// 30. `search` matches name or description case-insensitively,
    /// `category` matches exactly and `price` sorts by `asc` or `desc`.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        page: Query<Option<String>>,
        limit: Query<Option<String>>,
        search: Query<Option<String>>,
        category: Query<Option<String>>,
        price: Query<Option<String>>,
    ) -> ListProductsResponse {
        let params = ListProductsParams {
            page: page.0,
            limit: limit.0,
            search: search.0,
            category: category.0,
            price_sort: price.0,
        };

        match self.list_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::NotFound(not_found());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Validates every field, uploads the image to the media host and
    /// stores the product with the returned URL.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, form: CreateProductForm) -> CreateProductResponse {
        let payload = form.payload();
        let image = match read_image(form.image).await {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read uploaded image");
                return CreateProductResponse::BadRequest(unreadable_image());
            }
        };

        match self
            .create_use_case
            .execute(CreateProductParams { payload, image })
            .await
        {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a review
    ///
    /// Appends the `comment` header to the product's reviews.
    #[oai(path = "/products/:id/review", method = "post", tag = "ApiTags::Products")]
    async fn append_review(
        &self,
        id: Path<String>,
        comment: Header<Option<String>>,
    ) -> AppendReviewResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return AppendReviewResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "product.invalid_id",
            )));
        };

        match self
            .append_review_use_case
            .execute(AppendReviewParams {
                id: uuid,
                comment: comment.0,
            })
            .await
        {
            Ok(product) => AppendReviewResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AppendReviewResponse::BadRequest(json),
                    404 => AppendReviewResponse::NotFound(json),
                    _ => AppendReviewResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Admin only. Replaces name, description, price and category. The image
    /// is replaced by an uploaded file or an `imageUrl`, otherwise kept.
    #[oai(
        path = "/products/:id",
        method = "put",
        tag = "ApiTags::Products",
        transform = "admin_only"
    )]
    async fn update_product(
        &self,
        id: Path<String>,
        role: Header<Option<String>>,
        form: UpdateProductForm,
    ) -> UpdateProductResponse {
        let role = Role::from_header(role.0.as_deref());
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateProductResponse::NotFound(not_found());
        };

        let payload = form.payload();
        let image = match read_image(form.image).await {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read uploaded image");
                return UpdateProductResponse::BadRequest(unreadable_image());
            }
        };

        let params = UpdateProductParams {
            id: uuid,
            role,
            payload,
            image_url: form.image_url,
            image,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    403 => UpdateProductResponse::Forbidden(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Admin only.
    #[oai(
        path = "/products/:id",
        method = "delete",
        tag = "ApiTags::Products",
        transform = "admin_only"
    )]
    async fn delete_product(
        &self,
        id: Path<String>,
        role: Header<Option<String>>,
    ) -> DeleteProductResponse {
        let role = Role::from_header(role.0.as_deref());
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::NotFound(not_found());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid, role })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok(Json(DeleteConfirmationResponse {
                message: "product.deleted".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AppendReviewResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteConfirmationResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
