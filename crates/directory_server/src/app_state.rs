use crate::api::DirectoryContext;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) directory: DirectoryContext,
}
