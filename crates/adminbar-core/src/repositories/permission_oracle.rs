//! Permission oracle trait (port)

#[cfg_attr(test, mockall::automock)]
pub trait PermissionOracle: Send + Sync {
    fn can(&self, capability: &str) -> bool;
}
