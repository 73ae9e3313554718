//! Catalog data model

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

use super::CatalogError;

lazy_static! {
    /// Colors allowed in a card's `style` attribute
    static ref COLOR_RE: Regex = Regex::new(
        r"^(#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|[a-zA-Z]+|rgba?\(\s*[0-9.%]+\s*(?:,\s*[0-9.%]+\s*){2,3}\))$"
    )
    .unwrap();
}

/// A top-level topic, displayed as one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Group>,
    pub color: String,
}

/// A named subsection of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub title: String,
    #[serde(default)]
    pub content: Vec<Link>,
}

/// A leaf entry. Without a destination it is a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

impl Category {
    pub fn new(title: impl Into<String>, color: impl Into<String>, blocks: Vec<Group>) -> Self {
        Self {
            title: title.into(),
            blocks,
            color: color.into(),
        }
    }

    /// All links of the category, group by group
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.blocks.iter().flat_map(|g| g.content.iter())
    }
}

impl Group {
    pub fn new(title: impl Into<String>, content: Vec<Link>) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}

impl Link {
    /// A link pointing at `link`. A blank `link` makes a placeholder.
    pub fn to(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: non_blank(link.into()),
        }
    }

    /// A link with no destination yet
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
        }
    }

    /// Destination of the link, if it has a non-blank one
    pub fn destination(&self) -> Option<&str> {
        self.link.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn is_placeholder(&self) -> bool {
        self.destination().is_none()
    }
}

fn non_blank(link: String) -> Option<String> {
    Some(link).filter(|s| !s.trim().is_empty())
}

/// Treats `link: ''` the same as a missing link
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(non_blank))
}

/// Validated, ordered list of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, checking titles and colors.
    ///
    /// Blank link destinations are stored as absent.
    pub fn new(mut categories: Vec<Category>) -> Result<Self, CatalogError> {
        for link in categories
            .iter_mut()
            .flat_map(|c| c.blocks.iter_mut())
            .flat_map(|g| g.content.iter_mut())
        {
            link.link = link.link.take().and_then(non_blank);
        }

        let mut seen = HashSet::new();

        for (index, category) in categories.iter().enumerate() {
            if category.title.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryTitle { index });
            }
            if !seen.insert(category.title.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.title.clone()));
            }
            if !COLOR_RE.is_match(category.color.trim()) {
                return Err(CatalogError::InvalidColor {
                    category: category.title.clone(),
                    color: category.color.clone(),
                });
            }

            for (index, group) in category.blocks.iter().enumerate() {
                if group.title.trim().is_empty() {
                    return Err(CatalogError::EmptyGroupTitle {
                        category: category.title.clone(),
                        index,
                    });
                }
                for (index, link) in group.content.iter().enumerate() {
                    if link.title.trim().is_empty() {
                        return Err(CatalogError::EmptyLinkTitle {
                            category: category.title.clone(),
                            group: group.title.clone(),
                            index,
                        });
                    }
                }
            }
        }

        Ok(Self { categories })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Find a category by its title
    pub fn get(&self, title: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.title == title)
    }

    pub fn group_count(&self) -> usize {
        self.categories.iter().map(|c| c.blocks.len()).sum()
    }

    pub fn link_count(&self) -> usize {
        self.categories.iter().map(|c| c.links().count()).sum()
    }

    pub fn placeholder_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.links())
            .filter(|l| l.is_placeholder())
            .count()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
