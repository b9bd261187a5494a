use crate::{CrawlError, LinkGraph};
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};
use tracing::{debug, instrument};

static ANCHOR_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("anchor pattern compiles"));

/// Pages are the `*.html` files directly under `dir`, named by file name.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn crawl(dir: impl AsRef<Path>) -> Result<LinkGraph, CrawlError> {
    let dir = dir.as_ref();
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| CrawlError::Io { path, source }
    };

    let mut pages = vec![];
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(&path).map_err(io_err(&path))?;
        pages.push((name.to_owned(), links(&contents)));
    }
    debug!(pages = pages.len(), "crawled corpus");
    Ok(LinkGraph::new(pages))
}

pub fn links(html: &str) -> Vec<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .map(|c| c[1].to_owned())
        .collect()
}
