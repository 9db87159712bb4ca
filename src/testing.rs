use crate::Corpus;
use quickcheck::{Arbitrary, Gen};

pub fn corpus(links: &[(&str, &[&str])]) -> Corpus {
    Corpus::from_links(links.iter().map(|(page, ls)| (*page, ls.iter().copied())))
}

/// Raw extracted links over up to 10 pages, with self references and
/// targets outside the corpus mixed in.
#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub pages: Vec<String>,
    pub links: Vec<Vec<String>>,
}

impl RandomCorpus {
    pub fn corpus(&self) -> Corpus {
        Corpus::from_links(
            self.pages
                .iter()
                .zip(self.links.iter())
                .map(|(p, ls)| (p.as_str(), ls.iter().map(String::as_str))),
        )
    }
}

impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: usize = 10;

        let n: usize = usize::arbitrary(g) % N + 1;
        let pages: Vec<_> = (0..n).map(|i| format!("{i}.html")).collect();
        let links = (0..n)
            .map(|_| {
                let k = usize::arbitrary(g) % (n + 2);
                (0..k)
                    .map(|_| {
                        // one slot past the corpus names a page that does not exist
                        let i = usize::arbitrary(g) % (n + 1);
                        format!("{i}.html")
                    })
                    .collect()
            })
            .collect();
        Self { pages, links }
    }
}
