use std::sync::Arc;

use tracing::{debug, info};

use blog_protocol::{
    CreateBlogRequest, CreateBlogResponse, DeleteBlogRequest, DeleteBlogResponse, Operation,
    ReadBlogRequest, ReadBlogResponse, UpdateBlogRequest, UpdateBlogResponse,
};
use blog_store::{mapper, BlogStore};

use crate::error::{ServiceError, ServiceResult};

/// The four blog operations.
///
/// Stateless apart from the shared store handle: every call is an
/// independent request/response transaction. Failures are translated into
/// [`ServiceError`] and never retried here.
#[derive(Clone)]
pub struct BlogService {
    store: Arc<dyn BlogStore>,
}

impl BlogService {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn BlogStore> {
        &self.store
    }

    /// Store a new blog and return it with its assigned id.
    pub async fn create_blog(
        &self,
        request: CreateBlogRequest,
    ) -> ServiceResult<CreateBlogResponse> {
        const OP: Operation = Operation::CreateBlog;
        info!(op = %OP, "request received");

        let document = mapper::to_document(&request.blog);
        let id = self
            .store
            .insert(&document)
            .await
            .map_err(|e| ServiceError::from_store(OP, e))?;

        let blog = request.blog.with_id(mapper::encode_id(&id));
        debug!(op = %OP, id = %blog.id, "blog created");
        Ok(CreateBlogResponse { blog })
    }

    /// Fetch a blog. The response carries the requested id string verbatim.
    pub async fn read_blog(&self, request: ReadBlogRequest) -> ServiceResult<ReadBlogResponse> {
        const OP: Operation = Operation::ReadBlog;
        info!(op = %OP, id = %request.blog_id, "request received");

        let id = mapper::parse_id(&request.blog_id).map_err(|e| ServiceError::from_store(OP, e))?;
        let document = self
            .store
            .find_by_id(&id)
            .await
            .map_err(|e| ServiceError::from_store(OP, e))?;

        Ok(ReadBlogResponse {
            blog: mapper::to_blog(document, &request.blog_id),
        })
    }

    /// Replace all mutable fields of a blog and echo the submitted blog.
    pub async fn update_blog(
        &self,
        request: UpdateBlogRequest,
    ) -> ServiceResult<UpdateBlogResponse> {
        const OP: Operation = Operation::UpdateBlog;
        info!(op = %OP, id = %request.blog.id, "request received");

        let id = mapper::parse_id(&request.blog.id).map_err(|e| ServiceError::from_store(OP, e))?;
        let fields = mapper::to_fields(&request.blog);
        self.store
            .update_by_id(&id, &fields)
            .await
            .map_err(|e| ServiceError::from_store(OP, e))?;

        debug!(op = %OP, id = %request.blog.id, "blog updated");
        Ok(UpdateBlogResponse { blog: request.blog })
    }

    /// Permanently remove a blog and confirm its id.
    pub async fn delete_blog(
        &self,
        request: DeleteBlogRequest,
    ) -> ServiceResult<DeleteBlogResponse> {
        const OP: Operation = Operation::DeleteBlog;
        info!(op = %OP, id = %request.blog_id, "request received");

        let id = mapper::parse_id(&request.blog_id).map_err(|e| ServiceError::from_store(OP, e))?;
        self.store
            .delete_by_id(&id)
            .await
            .map_err(|e| ServiceError::from_store(OP, e))?;

        debug!(op = %OP, id = %request.blog_id, "blog deleted");
        Ok(DeleteBlogResponse {
            blog_id: request.blog_id,
        })
    }
}

impl std::fmt::Debug for BlogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogService")
            .field("backend", &self.store.backend())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_protocol::ErrorKind;
    use blog_store::InMemoryBlogStore;
    use blog_types::{Blog, BlogDraft};
    use bson::oid::ObjectId;

    fn service() -> (BlogService, Arc<InMemoryBlogStore>) {
        let store = Arc::new(InMemoryBlogStore::new());
        (BlogService::new(store.clone()), store)
    }

    fn hennie() -> BlogDraft {
        BlogDraft::new("Hennie", "My First Blog", "The sunshine on my shoulders make me happy!")
    }

    async fn create(service: &BlogService) -> Blog {
        service
            .create_blog(CreateBlogRequest::new(hennie()))
            .await
            .unwrap()
            .blog
    }

    #[tokio::test]
    async fn create_returns_input_with_new_id() {
        let (service, _) = service();
        let a = create(&service).await;
        let b = create(&service).await;
        assert_eq!(a.draft(), hennie());
        assert!(mapper::parse_id(&a.id).is_ok());
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn create_accepts_empty_fields() {
        let (service, _) = service();
        let blog = service
            .create_blog(CreateBlogRequest::new(BlogDraft::default()))
            .await
            .unwrap()
            .blog;
        assert!(!blog.id.is_empty());
        assert_eq!(blog.title, "");
    }

    #[tokio::test]
    async fn create_on_failed_write() {
        let (service, store) = service();
        store.set_read_only(true);
        let err = service.create_blog(CreateBlogRequest::new(hennie())).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreWriteFailure);
        assert_eq!(err.op, Operation::CreateBlog);
    }

    #[tokio::test]
    async fn read_after_create_is_identical() {
        let (service, _) = service();
        let created = create(&service).await;
        let read = service
            .read_blog(ReadBlogRequest::new(created.id.clone()))
            .await
            .unwrap()
            .blog;
        assert_eq!(read, created);
    }

    #[tokio::test]
    async fn read_unassigned_id_is_not_found() {
        let (service, _) = service();
        let err = service
            .read_blog(ReadBlogRequest::new(ObjectId::new().to_hex()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn read_malformed_id_is_invalid_identifier() {
        let (service, _) = service();
        let err = service.read_blog(ReadBlogRequest::new("nope")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidIdentifier);
        assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn read_malformed_record_is_decode_failure() {
        let (service, store) = service();
        let id = store.insert_raw(bson::doc! { "author_id": ["not", "a", "string"] });
        let err = service.read_blog(ReadBlogRequest::new(id.to_hex())).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DecodeFailure);
    }

    #[tokio::test]
    async fn read_on_failed_read_is_store_read_failure() {
        let (service, store) = service();
        let created = create(&service).await;
        store.set_reads_failing(true);
        let err = service.read_blog(ReadBlogRequest::new(created.id)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreReadFailure);
        assert_eq!(err.op, Operation::ReadBlog);
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let (service, _) = service();
        let created = create(&service).await;
        let submitted = Blog::new(created.id.clone(), "Ronald", "I Updated My Blog", "");
        let echoed = service
            .update_blog(UpdateBlogRequest::new(submitted.clone()))
            .await
            .unwrap()
            .blog;
        assert_eq!(echoed, submitted);

        let read = service.read_blog(ReadBlogRequest::new(created.id)).await.unwrap().blog;
        assert_eq!(read.title, "I Updated My Blog");
        assert_eq!(read.author_id, "Ronald");
        // Omitted content was written as empty.
        assert_eq!(read.content, "");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let (service, _) = service();
        let blog = Blog::new(ObjectId::new().to_hex(), "a", "t", "c");
        let err = service.update_blog(UpdateBlogRequest::new(blog)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn update_malformed_id() {
        let (service, _) = service();
        let err = service
            .update_blog(UpdateBlogRequest::new(Blog::new("123", "a", "t", "c")))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidIdentifier);
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_on_failed_write() {
        let (service, store) = service();
        let created = create(&service).await;
        store.set_read_only(true);
        let err = service.update_blog(UpdateBlogRequest::new(created)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreWriteFailure);
    }

    #[tokio::test]
    async fn delete_then_read_is_not_found() {
        let (service, _) = service();
        let created = create(&service).await;
        let deleted = service
            .delete_blog(DeleteBlogRequest::new(created.id.clone()))
            .await
            .unwrap();
        assert_eq!(deleted.blog_id, created.id);

        let err = service.read_blog(ReadBlogRequest::new(created.id)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let (service, _) = service();
        let err = service
            .delete_blog(DeleteBlogRequest::new(ObjectId::new().to_hex()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn delete_malformed_id_and_failed_write() {
        let (service, store) = service();
        let err = service.delete_blog(DeleteBlogRequest::new("x")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidIdentifier);

        let created = create(&service).await;
        store.set_read_only(true);
        let err = service.delete_blog(DeleteBlogRequest::new(created.id)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreWriteFailure);
    }
}
