//! Output writer: persists a rendered page's markup and behavior files
//!
//! The only part of the crate that performs I/O. Writing is at-most-once
//! with no idempotence guarantee — a second call with the same slug
//! overwrites the first — and failures are logged, then propagated.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{error, info};

/// Inputs for [`render`]: destination directory, page slug and the two
/// output strings of a built page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Destination directory; created if missing.
    pub out_dir: PathBuf,
    /// Page slug. `/` maps to the base name `index`; anything else is used
    /// verbatim and may contain path separators.
    pub slug: String,
    /// Markup written to `<out_dir>/<slug>.html`.
    pub html: String,
    /// Behavior statements written to `<out_dir>/<slug>.js`, but only when
    /// non-blank.
    pub js: String,
}

/// Error raised when writing a rendered page fails.
#[derive(Debug)]
pub enum RenderError {
    /// Underlying filesystem failure while writing the given slug.
    Io {
        slug: String,
        source: std::io::Error,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io { slug, source } => {
                write!(f, "Failed to write files for \"{slug}\": {source}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io { source, .. } => Some(source),
        }
    }
}

impl RenderError {
    /// The slug that failed to write.
    pub fn slug(&self) -> &str {
        match self {
            RenderError::Io { slug, .. } => slug,
        }
    }
}

/// Write the markup and behavior files for one page slug.
///
/// Ensures intermediate directories exist (recursively, idempotently),
/// always writes the `.html` file, and writes the `.js` file only when the
/// behavior string is non-empty after trimming surrounding whitespace. Any
/// I/O failure is logged with the failing slug and returned to the caller;
/// there is no retry.
pub async fn render(options: &RenderOptions) -> Result<(), RenderError> {
    let slug = normalize_slug(&options.slug);

    let html_path = options.out_dir.join(format!("{slug}.html"));
    let js_path = options.out_dir.join(format!("{slug}.js"));

    write_files(options, &html_path, &js_path)
        .await
        .map_err(|source| {
            error!(slug = %slug, error = %source, "failed to write rendered page");
            RenderError::Io {
                slug: slug.to_string(),
                source,
            }
        })
}

/// Map the root slug to the literal name `index`; pass every other slug
/// through verbatim.
fn normalize_slug(slug: &str) -> &str {
    if slug == "/" {
        "index"
    } else {
        slug
    }
}

async fn write_files(
    options: &RenderOptions,
    html_path: &Path,
    js_path: &Path,
) -> std::io::Result<()> {
    if let Some(parent) = html_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    if let Some(parent) = js_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(html_path, &options.html).await?;
    info!(path = %html_path.display(), "generated html file");

    if !options.js.trim().is_empty() {
        tokio::fs::write(js_path, &options.js).await?;
        info!(path = %js_path.display(), "generated js file");
    }

    Ok(())
}
