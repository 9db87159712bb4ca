use algograph::graph::*;
use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
    sync::Arc,
};

/// Name of a document in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(Arc<str>);

impl Page {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Page {
    fn from(name: &str) -> Self {
        Self(name.into())
    }
}

impl From<String> for Page {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

impl From<&Page> for Page {
    fn from(page: &Page) -> Self {
        page.clone()
    }
}

impl Borrow<str> for Page {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A closed hyperlink graph.
///
/// Every link target is itself a page of the corpus and no page links to
/// itself. Pages are kept in name order, which fixes the iteration order of
/// everything built on top of the corpus.
#[derive(Debug, Clone)]
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    ids: BTreeMap<Page, VertexId>,
    pages: HashMap<VertexId, Page, ahash::RandomState>,
    order: Vec<VertexId>,
}

impl Corpus {
    /// Builds a corpus from raw extracted links.
    ///
    /// Self references and targets which are not keys of `raw` are dropped.
    /// A page listed more than once gets the union of its links.
    pub fn from_links<I, P, L, T>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<Page>,
        L: IntoIterator<Item = T>,
        T: Into<Page>,
    {
        let raw: BTreeMap<Page, BTreeSet<Page>> = {
            let mut raw_links = BTreeMap::new();
            for (page, links) in raw {
                raw_links
                    .entry(page.into())
                    .or_insert_with(BTreeSet::new)
                    .extend(links.into_iter().map(Into::into));
            }
            raw_links
        };

        let mut graph = directed::TreeBackedGraph::new();
        let mut ids = BTreeMap::new();
        let mut pages = HashMap::with_hasher(ahash::RandomState::new());
        let mut order = Vec::with_capacity(raw.len());
        for page in raw.keys() {
            let v = graph.add_vertex();
            ids.insert(page.clone(), v);
            pages.insert(v, page.clone());
            order.push(v);
        }

        let mut dropped = 0usize;
        for (page, links) in raw.iter() {
            let u = ids[page];
            for link in links.iter() {
                match ids.get(link) {
                    Some(v) if *v != u => {
                        graph.add_edge(u, *v);
                    }
                    _ => dropped += 1,
                }
            }
        }
        log::debug!(
            "Corpus of {} pages, {} links, {} dropped references",
            order.len(),
            graph.edge_size(),
            dropped
        );

        Self {
            graph,
            ids,
            pages,
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.ids.contains_key(page)
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.ids.keys()
    }

    pub fn links(&self, page: &str) -> Option<Vec<&Page>> {
        let u = self.vertex(page)?;
        let mut links: Vec<_> = self.out_links(u).map(|v| self.page(v)).collect();
        links.sort();
        Some(links)
    }

    pub fn is_dangling(&self, page: &str) -> Option<bool> {
        self.vertex(page).map(|u| self.out_degree(u) == 0)
    }

    pub fn dangling_count(&self) -> usize {
        self.order
            .iter()
            .filter(|u| self.out_degree(**u) == 0)
            .count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    pub(crate) fn vertex(&self, page: &str) -> Option<VertexId> {
        self.ids.get(page).copied()
    }

    pub(crate) fn page(&self, v: VertexId) -> &Page {
        self.pages.get(&v).unwrap()
    }

    pub(crate) fn vertices(&self) -> &[VertexId] {
        &self.order
    }

    pub(crate) fn out_links(&self, u: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.out_edges(&u).map(|e| e.sink)
    }

    pub(crate) fn out_degree(&self, u: VertexId) -> usize {
        self.graph.out_edges(&u).count()
    }
}
