use crate::db::{LocalStore, StoreError};
use crate::models::{ClassInstance, NewClassInstance, NewYogaClass, YogaClass};
use crate::remote::RemoteCatalog;
use crate::settings::{BackendKind, Settings};

/// Where class records live. Instances, deletes, reset and searches stay
/// local regardless of the active variant.
#[derive(Clone)]
pub enum Backend {
    Local,
    Remote(RemoteCatalog),
}

/// The surface the presentation layer calls. Class add/list route to the
/// configured backend; everything else goes to the local store. Calls are
/// independent and stateless with respect to the other backend: no conflict
/// resolution, no cache invalidation, no retries.
#[derive(Clone)]
pub struct Repository {
    local: LocalStore,
    backend: Backend,
}

impl Repository {
    pub fn new(local: LocalStore, backend: Backend) -> Self {
        Self { local, backend }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let local = LocalStore::new(&settings.database_path);
        let backend = match settings.backend {
            BackendKind::Local => Backend::Local,
            BackendKind::Remote => {
                Backend::Remote(RemoteCatalog::new(settings.catalog_base_url.clone()))
            }
        };
        Self::new(local, backend)
    }

    /// Adds a class to the active backend. With the remote backend this is
    /// fire-and-forget: the call returns once the push task is dispatched,
    /// and a failed push is only visible in the logs.
    pub fn add_yoga_class(&self, new: NewYogaClass) -> Result<(), StoreError> {
        match &self.backend {
            Backend::Local => self.local.add_yoga_class(&new).map(|_| ()),
            Backend::Remote(catalog) => {
                catalog.add_yoga_class(new);
                Ok(())
            }
        }
    }

    /// Lists classes from the active backend. The remote variant suspends
    /// until the catalog responds and yields an empty listing on failure.
    pub async fn get_all_yoga_classes(&self) -> Result<Vec<YogaClass>, StoreError> {
        match &self.backend {
            Backend::Local => self.local.get_all_yoga_classes(),
            Backend::Remote(catalog) => Ok(catalog.get_all_yoga_classes().await),
        }
    }

    pub fn add_class_instance(&self, new: NewClassInstance) -> Result<(), StoreError> {
        self.local.add_class_instance(&new).map(|_| ())
    }

    pub fn get_class_instances(&self, class_id: i64) -> Result<Vec<ClassInstance>, StoreError> {
        self.local.get_class_instances(class_id)
    }

    pub fn delete_yoga_class(&self, id: i64) -> Result<(), StoreError> {
        self.local.delete_yoga_class(id)
    }

    pub fn delete_class_instance(&self, id: i64) -> Result<(), StoreError> {
        self.local.delete_class_instance(id)
    }

    pub fn reset_database(&self) -> Result<(), StoreError> {
        self.local.reset_database()
    }

    pub fn search_classes_by_teacher(&self, term: &str) -> Result<Vec<YogaClass>, StoreError> {
        self.local.search_classes_by_teacher(term)
    }

    pub fn search_classes_by_day(&self, day: &str) -> Result<Vec<YogaClass>, StoreError> {
        self.local.search_classes_by_day(day)
    }

    pub fn search_classes_by_day_or_date(&self, query: &str) -> Result<Vec<YogaClass>, StoreError> {
        self.local.search_classes_by_day_or_date(query)
    }
}
