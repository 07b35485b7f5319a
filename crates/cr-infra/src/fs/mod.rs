mod atomic;
mod registry_repo;

pub(crate) use atomic::atomic_write;
pub use registry_repo::FileRegistryRepository;
