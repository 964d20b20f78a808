use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Photo {
    /// Tags shown on a card before truncation kicks in.
    pub fn card_tags(&self) -> &[String] {
        let shown = self.tags.len().min(CARD_TAG_LIMIT);
        &self.tags[..shown]
    }
}

const CARD_TAG_LIMIT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    TeamVibes,
    CreativeCampaigns,
    WorkHardPlayHard,
    BehindTheScenes,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::TeamVibes,
        Category::CreativeCampaigns,
        Category::WorkHardPlayHard,
        Category::BehindTheScenes,
    ];

    pub fn slug(self) -> &'static str {
        self.info().slug
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn info(self) -> &'static CategoryInfo {
        // CATALOG rows follow the declaration order of the variants.
        &CATALOG[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: Category,
    pub slug: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

// One entry per Category value, in Category::ALL order.
static CATALOG: [CategoryInfo; 4] = [
    CategoryInfo {
        id: Category::TeamVibes,
        slug: "team-vibes",
        label: "Team Vibes",
        description: "Everyday moments with the people behind the work",
        icon: "users",
    },
    CategoryInfo {
        id: Category::CreativeCampaigns,
        slug: "creative-campaigns",
        label: "Creative Campaigns",
        description: "Campaign shoots, posters and launches",
        icon: "palette",
    },
    CategoryInfo {
        id: Category::WorkHardPlayHard,
        slug: "work-hard-play-hard",
        label: "Work Hard, Play Hard",
        description: "Office grind and the celebrations after it",
        icon: "party-popper",
    },
    CategoryInfo {
        id: Category::BehindTheScenes,
        slug: "behind-the-scenes",
        label: "Behind the Scenes",
        description: "Setups, rehearsals and everything off-camera",
        icon: "video",
    },
];

pub fn category_catalog() -> &'static [CategoryInfo; 4] {
    &CATALOG
}

/// Icon name for the all-photos pseudo entry in a filter bar.
pub const ALL_PHOTOS_ICON: &str = "grid";
pub const ALL_PHOTOS_LABEL: &str = "All Photos";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_PHOTOS_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }
}
