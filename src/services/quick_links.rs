//! Quick-link tiles shown on the home view.
//!
//! Six defaults for everyone, followed by three picks for known professions.

use serde::Serialize;

use crate::types::profession::Profession;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct QuickLink {
    pub name: &'static str,
    pub url: &'static str,
}

const fn link(name: &'static str, url: &'static str) -> QuickLink {
    QuickLink { name, url }
}

pub const DEFAULT_LINKS: [QuickLink; 6] = [
    link("DuckDuckGo", "https://duckduckgo.com"),
    link("Wikipedia", "https://wikipedia.org"),
    link("YouTube", "https://youtube.com"),
    link("GitHub", "https://github.com"),
    link("Reddit", "https://reddit.com"),
    link("X/Twitter", "https://x.com"),
];

/// Links specific to a profession.
pub fn profession_links(profession: Profession) -> [QuickLink; 3] {
    match profession {
        Profession::Student => [
            link("Khan Academy", "https://khanacademy.org"),
            link("Coursera", "https://coursera.org"),
            link("Stack Overflow", "https://stackoverflow.com"),
        ],
        Profession::Finance => [
            link("Bloomberg", "https://bloomberg.com"),
            link("Yahoo Finance", "https://finance.yahoo.com"),
            link("MarketWatch", "https://marketwatch.com"),
        ],
        Profession::Fashion => [
            link("Vogue", "https://vogue.com"),
            link("Pinterest", "https://pinterest.com"),
            link("Instagram", "https://instagram.com"),
        ],
        Profession::Business => [
            link("LinkedIn", "https://linkedin.com"),
            link("Forbes", "https://forbes.com"),
            link("HBR", "https://hbr.org"),
        ],
        Profession::Consultant => [
            link("McKinsey", "https://mckinsey.com"),
            link("Deloitte", "https://deloitte.com"),
            link("LinkedIn", "https://linkedin.com"),
        ],
        Profession::Tech => [
            link("GitHub", "https://github.com"),
            link("Stack Overflow", "https://stackoverflow.com"),
            link("Dev.to", "https://dev.to"),
        ],
        Profession::Government => [
            link("USA.gov", "https://usa.gov"),
            link("FedRAMP", "https://fedramp.gov"),
            link("Data.gov", "https://data.gov"),
        ],
        Profession::Policy => [
            link("Brookings", "https://brookings.edu"),
            link("RAND", "https://rand.org"),
            link("Policy Forum", "https://policyforum.net"),
        ],
    }
}

/// Default links plus the profession's own when it is a known one.
pub fn links_for(profession: Option<&str>) -> Vec<QuickLink> {
    let mut links = DEFAULT_LINKS.to_vec();
    if let Some(known) = profession.and_then(Profession::from_id) {
        links.extend(profession_links(known));
    }
    links
}
