mod backend_locator;
mod project_parser;

pub use backend_locator::BackendLocator;
pub use project_parser::ProjectParser;

#[cfg(test)]
pub use backend_locator::MockBackendLocator;
