//! Common utilities shared across CLI commands.

use std::path::Path;

use crate::cli::ContextArgs;
use crate::config::LinkerConfig;
use crate::core::ResolutionContext;
use crate::utils::slug::slugify_path;

/// Owned page context, borrowed as a [`ResolutionContext`] per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub route: String,
    pub title: String,
    pub root_prefix: String,
}

impl PageContext {
    /// Merge CLI flags, config and the source file name, in that order.
    ///
    /// Without any of them the route is `/` and the title is empty.
    pub fn new(args: &ContextArgs, config: &LinkerConfig, source: Option<&Path>) -> Self {
        let stem = source
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned());

        let route = args
            .route
            .clone()
            .or_else(|| config.page.route.clone())
            .or_else(|| stem.as_deref().map(|s| format!("/{}", slugify_path(s))))
            .unwrap_or_else(|| "/".to_string());

        let title = args
            .title
            .clone()
            .or_else(|| config.page.title.clone())
            .or(stem)
            .unwrap_or_default();

        let root_prefix = args
            .root_prefix
            .clone()
            .unwrap_or_else(|| config.root_prefix());

        Self {
            route,
            title,
            root_prefix,
        }
    }

    #[inline]
    pub fn as_context(&self) -> ResolutionContext<'_> {
        ResolutionContext::new(&self.route, &self.title, &self.root_prefix)
    }
}
