use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{AppError, Glyph};

// ── Categories ──────────────────────────────────────────────────────

/// Classification stored on every resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    Guides,
    Legal,
    Support,
    Faq,
    Videos,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Guides => "guides",
            ResourceCategory::Legal => "legal",
            ResourceCategory::Support => "support",
            ResourceCategory::Faq => "faq",
            ResourceCategory::Videos => "videos",
        }
    }
}

impl FromStr for ResourceCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guides" => Ok(ResourceCategory::Guides),
            "legal" => Ok(ResourceCategory::Legal),
            "support" => Ok(ResourceCategory::Support),
            "faq" => Ok(ResourceCategory::Faq),
            "videos" => Ok(ResourceCategory::Videos),
            other => Err(AppError::bad_request(format!(
                "Unknown resource category '{other}'"
            ))),
        }
    }
}

/// The category selector's value: either every category or exactly one.
///
/// `All` is a wildcard. It is never compared against a resource's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ResourceCategory),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Whether a resource in `category` passes this filter.
    pub fn admits(&self, category: ResourceCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// A category button on the resources page.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub glyph: Glyph,
}

impl Category {
    pub fn id(&self) -> &'static str {
        self.filter.as_str()
    }
}

/// Category buttons in display order, starting with the wildcard.
pub static CATEGORIES: &[Category] = &[
    Category {
        filter: CategoryFilter::All,
        label: "All Resources",
        glyph: Glyph::FileText,
    },
    Category {
        filter: CategoryFilter::Only(ResourceCategory::Guides),
        label: "Safety Guides",
        glyph: Glyph::Shield,
    },
    Category {
        filter: CategoryFilter::Only(ResourceCategory::Legal),
        label: "Legal Information",
        glyph: Glyph::Scale,
    },
    Category {
        filter: CategoryFilter::Only(ResourceCategory::Support),
        label: "Support Services",
        glyph: Glyph::Heart,
    },
    Category {
        filter: CategoryFilter::Only(ResourceCategory::Faq),
        label: "FAQs",
        glyph: Glyph::MessageSquare,
    },
    Category {
        filter: CategoryFilter::Only(ResourceCategory::Videos),
        label: "Educational Videos",
        glyph: Glyph::Video,
    },
];

// ── Resources ───────────────────────────────────────────────────────

/// How long a resource is: printed documents have pages, videos a running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLength {
    Pages(u32),
    /// Running time as `mm:ss`.
    Duration(&'static str),
}

impl fmt::Display for ResourceLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLength::Pages(1) => write!(f, "1 page"),
            ResourceLength::Pages(n) => write!(f, "{n} pages"),
            ResourceLength::Duration(d) => f.write_str(d),
        }
    }
}

/// A downloadable or viewable item on the resources page.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    pub category: ResourceCategory,
    /// Display label such as "PDF Guide" or "Checklist".
    pub kind: &'static str,
    pub size: &'static str,
    pub length: ResourceLength,
    pub description: &'static str,
    pub topics: &'static [&'static str],
    pub download_count: u32,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub last_updated: &'static str,
    pub glyph: Glyph,
    pub featured: bool,
}

impl Resource {
    /// Case-insensitive substring match over title, description and topics.
    ///
    /// An empty query matches every resource.
    pub fn matches_query(&self, query: &str) -> bool {
        self.matches_needle(&query.to_lowercase())
    }

    fn matches_needle(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        contains_folded(self.title, needle)
            || contains_folded(self.description, needle)
            || self.topics.iter().any(|topic| contains_folded(topic, needle))
    }

    pub fn pages(&self) -> Option<u32> {
        match self.length {
            ResourceLength::Pages(n) => Some(n),
            ResourceLength::Duration(_) => None,
        }
    }

    pub fn duration(&self) -> Option<&'static str> {
        match self.length {
            ResourceLength::Duration(d) => Some(d),
            ResourceLength::Pages(_) => None,
        }
    }

    pub fn last_updated_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.last_updated, "%Y-%m-%d").ok()
    }

    /// "Jan 8, 2024", or the raw string when it does not parse.
    pub fn last_updated_human(&self) -> String {
        match self.last_updated_date() {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => self.last_updated.to_string(),
        }
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Resources passing both the category filter and the search query,
/// in catalog order.
pub fn filter_resources<'a>(
    resources: &'a [Resource],
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a Resource> {
    let needle = query.to_lowercase();
    resources
        .iter()
        .filter(|r| category.admits(r.category) && r.matches_needle(&needle))
        .collect()
}

/// The featured subset. Independent of any search or category state.
pub fn featured_resources(resources: &[Resource]) -> Vec<&Resource> {
    resources.iter().filter(|r| r.featured).collect()
}

pub fn find_resource(resources: &[Resource], id: u32) -> Result<&Resource, AppError> {
    resources
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::not_found(format!("Resource {id} not found")))
}

/// The resources page catalog.
pub static RESOURCES: &[Resource] = &[
    Resource {
        id: 1,
        title: "Complete Guide to Identity Theft Protection",
        category: ResourceCategory::Guides,
        kind: "PDF Guide",
        size: "2.4 MB",
        length: ResourceLength::Pages(24),
        description: "A comprehensive guide covering prevention, detection, and recovery from identity theft incidents.",
        topics: &["Prevention Tips", "Warning Signs", "Recovery Steps", "Legal Rights"],
        download_count: 1247,
        last_updated: "2024-01-01",
        glyph: Glyph::Shield,
        featured: true,
    },
    Resource {
        id: 2,
        title: "Understanding Cybercrime Laws in Your Region",
        category: ResourceCategory::Legal,
        kind: "Legal Document",
        size: "1.8 MB",
        length: ResourceLength::Pages(18),
        description: "Detailed information about cybercrime legislation, victim rights, and legal procedures.",
        topics: &["Criminal Law", "Victim Rights", "Court Procedures", "Compensation"],
        download_count: 892,
        last_updated: "2023-12-15",
        glyph: Glyph::Scale,
        featured: true,
    },
    Resource {
        id: 3,
        title: "Phishing Attack Recognition & Response",
        category: ResourceCategory::Guides,
        kind: "Quick Reference",
        size: "856 KB",
        length: ResourceLength::Pages(8),
        description: "Learn to identify phishing attempts and take immediate protective actions.",
        topics: &["Email Security", "Red Flags", "Reporting", "Account Protection"],
        download_count: 2134,
        last_updated: "2024-01-05",
        glyph: Glyph::Mail,
        featured: false,
    },
    Resource {
        id: 4,
        title: "Mental Health Support for Cybercrime Victims",
        category: ResourceCategory::Support,
        kind: "Support Resource",
        size: "1.2 MB",
        length: ResourceLength::Pages(12),
        description: "Information about counseling services, support groups, and coping strategies.",
        topics: &["Counseling Services", "Support Groups", "Coping Strategies", "Helplines"],
        download_count: 654,
        last_updated: "2023-12-20",
        glyph: Glyph::Heart,
        featured: false,
    },
    Resource {
        id: 5,
        title: "Evidence Collection Best Practices",
        category: ResourceCategory::Guides,
        kind: "Tutorial",
        size: "3.1 MB",
        length: ResourceLength::Pages(16),
        description: "Step-by-step guide on collecting and preserving digital evidence.",
        topics: &["Screenshots", "Email Headers", "Transaction Records", "Chain of Custody"],
        download_count: 1567,
        last_updated: "2023-12-28",
        glyph: Glyph::FileText,
        featured: true,
    },
    Resource {
        id: 6,
        title: "Frequently Asked Questions",
        category: ResourceCategory::Faq,
        kind: "FAQ Document",
        size: "642 KB",
        length: ResourceLength::Pages(10),
        description: "Answers to common questions about reporting, investigation process, and victim support.",
        topics: &["Reporting Process", "Investigation Timeline", "Evidence Requirements", "Case Updates"],
        download_count: 3421,
        last_updated: "2024-01-08",
        glyph: Glyph::MessageSquare,
        featured: false,
    },
    Resource {
        id: 7,
        title: "Online Safety for Social Media Users",
        category: ResourceCategory::Guides,
        kind: "Video Tutorial",
        size: "45.2 MB",
        length: ResourceLength::Duration("15:30"),
        description: "Video guide covering privacy settings, safe sharing practices, and threat awareness.",
        topics: &["Privacy Settings", "Safe Sharing", "Account Security", "Reporting Abuse"],
        download_count: 892,
        last_updated: "2024-01-03",
        glyph: Glyph::Video,
        featured: false,
    },
    Resource {
        id: 8,
        title: "Financial Fraud Recovery Checklist",
        category: ResourceCategory::Guides,
        kind: "Checklist",
        size: "421 KB",
        length: ResourceLength::Pages(6),
        description: "Step-by-step checklist for recovering from financial cybercrime.",
        topics: &["Bank Notification", "Credit Monitoring", "Fraud Alerts", "Documentation"],
        download_count: 1123,
        last_updated: "2023-12-10",
        glyph: Glyph::CreditCard,
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(resources: &[&Resource]) -> Vec<u32> {
        resources.iter().map(|r| r.id).collect()
    }

    /// Reference predicate written independently of `matches_query`.
    fn predicate(r: &Resource, query: &str, category: CategoryFilter) -> bool {
        let q = query.to_lowercase();
        let category_ok = match category {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => r.category == c,
        };
        let text_ok = r.title.to_lowercase().contains(&q)
            || r.description.to_lowercase().contains(&q)
            || r.topics.iter().any(|t| t.to_lowercase().contains(&q));
        category_ok && text_ok
    }

    #[test]
    fn empty_query_all_categories_returns_catalog_in_order() {
        let result = filter_resources(RESOURCES, "", CategoryFilter::All);
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn faq_timeline_finds_only_the_faq() {
        let faq = CategoryFilter::Only(ResourceCategory::Faq);
        let result = filter_resources(RESOURCES, "timeline", faq);
        assert_eq!(ids(&result), vec![6]);
        assert!(result[0].topics.contains(&"Investigation Timeline"));
    }

    #[test]
    fn result_is_exactly_the_predicate_partition() {
        let queries = ["", "e", "EMAIL", "recovery", "victim", "zzz", "Chain of", " "];
        for query in queries {
            for category in CATEGORIES.iter().map(|c| c.filter) {
                let result = filter_resources(RESOURCES, query, category);
                for r in RESOURCES {
                    let included = result.iter().any(|x| x.id == r.id);
                    assert_eq!(
                        included,
                        predicate(r, query, category),
                        "query={query:?} category={category} id={}",
                        r.id
                    );
                }
            }
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let lower = filter_resources(RESOURCES, "phishing", CategoryFilter::All);
        let upper = filter_resources(RESOURCES, "PHISHING", CategoryFilter::All);
        assert_eq!(ids(&lower), vec![3]);
        assert_eq!(ids(&lower), ids(&upper));
    }

    #[test]
    fn search_matches_topics() {
        let result = filter_resources(RESOURCES, "credit monitoring", CategoryFilter::All);
        assert_eq!(ids(&result), vec![8]);
    }

    #[test]
    fn search_matches_description() {
        let result = filter_resources(RESOURCES, "coping", CategoryFilter::All);
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn category_with_no_resources_is_empty() {
        let videos = CategoryFilter::Only(ResourceCategory::Videos);
        assert!(filter_resources(RESOURCES, "", videos).is_empty());
    }

    #[test]
    fn category_filter_preserves_order() {
        let guides = CategoryFilter::Only(ResourceCategory::Guides);
        let result = filter_resources(RESOURCES, "", guides);
        assert_eq!(ids(&result), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn featured_ignores_filters() {
        assert_eq!(ids(&featured_resources(RESOURCES)), vec![1, 2, 5]);
    }

    #[test]
    fn find_resource_by_id() {
        assert_eq!(find_resource(RESOURCES, 4).unwrap().title, "Mental Health Support for Cybercrime Victims");
        let err = find_resource(RESOURCES, 99).unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::NotFound);
    }

    #[test]
    fn category_filter_parses_every_button_id() {
        for category in CATEGORIES {
            assert_eq!(category.id().parse::<CategoryFilter>().unwrap(), category.filter);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "blog".parse::<CategoryFilter>().unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::BadRequest);
        assert!("".parse::<CategoryFilter>().is_err());
        assert!("FAQ".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn wildcard_admits_every_category() {
        for r in RESOURCES {
            assert!(CategoryFilter::All.admits(r.category));
        }
        assert!(!CategoryFilter::Only(ResourceCategory::Legal).admits(ResourceCategory::Guides));
    }

    #[test]
    fn length_is_pages_or_duration() {
        let video = find_resource(RESOURCES, 7).unwrap();
        assert_eq!(video.pages(), None);
        assert_eq!(video.duration(), Some("15:30"));
        assert_eq!(video.length.to_string(), "15:30");

        let guide = find_resource(RESOURCES, 1).unwrap();
        assert_eq!(guide.pages(), Some(24));
        assert_eq!(guide.length.to_string(), "24 pages");
        assert_eq!(ResourceLength::Pages(1).to_string(), "1 page");
    }

    #[test]
    fn last_updated_formats_for_humans() {
        let faq = find_resource(RESOURCES, 6).unwrap();
        assert_eq!(faq.last_updated_date(), NaiveDate::from_ymd_opt(2024, 1, 8));
        assert_eq!(faq.last_updated_human(), "Jan 8, 2024");
    }

    #[test]
    fn catalog_dates_all_parse() {
        assert!(RESOURCES.iter().all(|r| r.last_updated_date().is_some()));
    }
}
