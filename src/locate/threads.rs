//! Runtime threading dependency.

use crate::core::platform::Platform;
use crate::core::resolution::ThreadsDependency;

/// Threading libraries every consumer of the toolkit has to link.
pub fn resolve_threads(platform: Platform) -> ThreadsDependency {
    let libs: Vec<String> = platform
        .thread_libs()
        .iter()
        .map(|s| s.to_string())
        .collect();
    tracing::debug!("threading libraries for {}: {:?}", platform, libs);
    ThreadsDependency { libs }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threads_per_platform() {
        assert_eq!(resolve_threads(Platform::Linux).libs, vec!["pthread"]);
        assert!(resolve_threads(Platform::Windows).libs.is_empty());
    }
}
