//! Version string shown in the side panel and logged at startup.

/// Returns `pkg_version (git_sha)`.
///
/// Builds outside a git checkout report the hash as `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    format!("{pkg_version} ({git_sha})")
}
