//! Reads a corpus from a directory of HTML files.

use crate::{Corpus, Error, Result};
use regex::Regex;
use std::{
    collections::BTreeSet,
    fs,
    path::Path,
    sync::LazyLock,
};

static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex"));

/// Link targets of every `<a href="...">` in `html`, as written.
pub fn extract_links(html: &str) -> BTreeSet<String> {
    HREF.captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

/// Pages are the `.html` files directly inside `dir`, named by file name.
/// Links are only kept when they name another page of the directory.
pub fn crawl(dir: impl AsRef<Path>) -> Result<Corpus> {
    let dir = dir.as_ref();
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| Error::Io { path, source }
    };

    let mut raw = vec![];
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            log::debug!("Skipping {path:?}");
            continue;
        };
        if !name.ends_with(".html") || !path.is_file() {
            log::debug!("Skipping {path:?}");
            continue;
        }
        let html = fs::read_to_string(&path).map_err(io_err(&path))?;
        raw.push((name.to_string(), extract_links(&html)));
    }
    let corpus = Corpus::from_links(raw);
    log::info!(
        "Read {} pages from {:?}: {} links, {} dangling",
        corpus.len(),
        dir,
        corpus.link_count(),
        corpus.dangling_count()
    );
    Ok(corpus)
}
