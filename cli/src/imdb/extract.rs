use filmpath_core::{FilmId, FilmRef, PersonId, PersonRef};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

const NAME_RESULTS_MARKER: &str = r#"data-testid="find-results-section-name""#;
const FILMOGRAPHY_TITLE_CLASS: &str = "ipc-metadata-list-summary-item__t";
const CREDITS_LIST_MARKER: &str = "full-credits-page-list";
const CREDITED_NAME_CLASS: &str = "name-credits--title-text";

static ANCHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<a\s([^>]*)>(.*?)</a>").unwrap());
static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)\bclass="([^"]*)""#).unwrap());
static HREF_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)\bhref="([^"]*)""#).unwrap());
static PERSON_HREF: Lazy<Regex> = Lazy::new(|| Regex::new(r"/name/(nm\d+)").unwrap());
static TITLE_HREF: Lazy<Regex> = Lazy::new(|| Regex::new(r"/title/(tt\d+)").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static LIST_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<(/?)ul\b").unwrap());

struct Anchor<'a> {
    class: &'a str,
    href: &'a str,
    inner_html: &'a str,
}

fn anchors(html: &str) -> impl Iterator<Item = Anchor<'_>> {
    ANCHOR.captures_iter(html).filter_map(|captures| {
        let attributes = captures.get(1)?.as_str();
        let href = HREF_ATTR.captures(attributes)?.get(1)?.as_str();
        let class = CLASS_ATTR
            .captures(attributes)
            .and_then(|class| class.get(1))
            .map_or("", |class| class.as_str());

        Some(Anchor {
            class,
            href,
            inner_html: captures.get(2)?.as_str(),
        })
    })
}

fn capture_id<'a>(pattern: &Regex, href: &'a str) -> Option<&'a str> {
    pattern
        .captures(href)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Visible text of an element's inner HTML: tags dropped, common entities
/// decoded, whitespace collapsed.
pub fn text_content(inner_html: &str) -> String {
    let without_tags = TAG.replace_all(inner_html, "");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First person linked from the name section of a search results page
pub fn first_person_result(html: &str) -> Option<PersonId> {
    let section_start = html.find(NAME_RESULTS_MARKER)?;
    let section = &html[section_start..];
    let section = section
        .find("</section>")
        .map_or(section, |end| &section[..end]);

    anchors(section)
        .find_map(|anchor| capture_id(&PERSON_HREF, anchor.href))
        .map(PersonId::new)
}

/// Titles linked from a person page, in page order, without repeats
pub fn filmography(html: &str, cap: usize) -> Vec<FilmRef> {
    let mut seen = FxHashSet::default();
    let mut films = Vec::new();

    for anchor in anchors(html) {
        if films.len() >= cap {
            break;
        }
        if !anchor.class.contains(FILMOGRAPHY_TITLE_CLASS) {
            continue;
        }
        let Some(film_id) = capture_id(&TITLE_HREF, anchor.href) else {
            continue;
        };
        if seen.insert(film_id) {
            films.push(FilmRef {
                id: FilmId::new(film_id),
                title: text_content(anchor.inner_html),
            });
        }
    }

    films
}

/// `html` from just inside an opening `<ul>` tag up to its matching `</ul>`,
/// or to the end when the list is never closed
fn until_list_end(html: &str) -> &str {
    let mut depth = 1usize;
    for tag in LIST_TAG.captures_iter(html) {
        let closing = tag.get(1).is_some_and(|slash| !slash.as_str().is_empty());
        if closing {
            depth -= 1;
            if depth == 0 {
                return tag.get(0).map_or(html, |end| &html[..end.start()]);
            }
        } else {
            depth += 1;
        }
    }
    html
}

/// Credited people of the first credits list on a full credits page, in
/// billing order
pub fn cast(html: &str, cap: usize) -> Vec<PersonRef> {
    let Some(list_start) = html.find(CREDITS_LIST_MARKER) else {
        return Vec::new();
    };

    anchors(until_list_end(&html[list_start..]))
        .filter(|anchor| anchor.class.contains(CREDITED_NAME_CLASS))
        .filter_map(|anchor| {
            capture_id(&PERSON_HREF, anchor.href).map(|person_id| PersonRef {
                id: PersonId::new(person_id),
                name: text_content(anchor.inner_html),
            })
        })
        .take(cap)
        .collect()
}
