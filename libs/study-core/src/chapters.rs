//! Static chapter index for the CPP exam domains.
//!
//! Chapters group one or more content categories; cards resolve membership
//! through their `category` tag.

use crate::types::Flashcard;

/// One exam domain as presented in the chapter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
}

/// The six CPP exam domains, in presentation order.
pub const CHAPTERS: &[Chapter] = &[
    Chapter {
        id: "security-principles-practices",
        title: "Security Principles and Practices (22%)",
        description: "Security management, leadership, and business principles",
        categories: &["Security Principles and Practices"],
    },
    Chapter {
        id: "business-principles-practices",
        title: "Business Principles and Practices (15%)",
        description: "Business operations, financial management, and organizational strategy",
        categories: &["Business Principles and Practices"],
    },
    Chapter {
        id: "investigations",
        title: "Investigations (9%)",
        description: "Investigation techniques, procedures, and documentation",
        categories: &["Investigations"],
    },
    Chapter {
        id: "personnel-security",
        title: "Personnel Security (11%)",
        description: "Employee screening, background checks, and personnel protection",
        categories: &["Personnel Security"],
    },
    Chapter {
        id: "physical-security",
        title: "Physical Security (16%)",
        description: "Physical protection systems, access control, and security technology",
        categories: &["Physical Security"],
    },
    Chapter {
        id: "crisis-management",
        title: "Crisis Management (13%)",
        description: "Emergency response, business continuity, and crisis communication",
        categories: &["Crisis Management"],
    },
];

/// Look up a chapter by identifier.
pub fn find(chapter_id: &str) -> Option<&'static Chapter> {
    CHAPTERS.iter().find(|chapter| chapter.id == chapter_id)
}

/// All cards belonging to a chapter, preserving input order.
///
/// An unknown chapter id yields an empty result rather than an error.
pub fn cards_for_chapter<'a>(cards: &'a [Flashcard], chapter_id: &str) -> Vec<&'a Flashcard> {
    let Some(chapter) = find(chapter_id) else {
        return Vec::new();
    };
    cards
        .iter()
        .filter(|card| chapter.categories.contains(&card.category.as_str()))
        .collect()
}
