//! The fixed list of portfolio projects, in display order.

use std::fmt;
use std::str::FromStr;

/// Where every project card links to.
pub const PROFILE_URL: &str = "https://github.com/SaurabhBhovad";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ai,
    Web,
    Data,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Ai, Category::Web, Category::Data];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Web => "web",
            Category::Data => "data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One portfolio entry. Records are never added, removed or mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Font Awesome glyph class, e.g. `fa-qrcode`.
    pub icon_glyph: &'static str,
    /// Text color class applied to the glyph.
    pub accent_color: &'static str,
}

pub static CATALOG: [ProjectRecord; 5] = [
    ProjectRecord {
        title: "Virtual Paint",
        category: Category::Ai,
        description: "A Computer Vision app using OpenCV & MediaPipe. Draw on screen using hand gestures in real-time.",
        tags: &["Python", "OpenCV", "MediaPipe"],
        icon_glyph: "fa-hand-sparkles",
        accent_color: "text-purple-400",
    },
    ProjectRecord {
        title: "Jarvis AI Assistant",
        category: Category::Ai,
        description: "Voice-activated personal assistant using OpenAI API for NLP tasks, automation, and web control.",
        tags: &["Python", "OpenAI", "Speech Recog"],
        icon_glyph: "fa-microchip",
        accent_color: "text-blue-400",
    },
    ProjectRecord {
        title: "QR Code Generator",
        category: Category::Web,
        description: "A customizable QR code generator web app built with Python Streamlit. Features color customization.",
        tags: &["Streamlit", "Python", "Web App"],
        icon_glyph: "fa-qrcode",
        accent_color: "text-green-400",
    },
    ProjectRecord {
        title: "Data Analytics Dashboard",
        category: Category::Data,
        description: "Interactive sales and trend analysis dashboard visualizing complex datasets for business insights.",
        tags: &["Tableau", "SQL", "Data Viz"],
        icon_glyph: "fa-chart-line",
        accent_color: "text-cyan-400",
    },
    ProjectRecord {
        title: "Oracle Cloud AI Impl.",
        category: Category::Ai,
        description: "Implementation of basic machine learning models using Oracle Cloud Infrastructure services.",
        tags: &["Oracle Cloud", "ML", "Cloud"],
        icon_glyph: "fa-cloud",
        accent_color: "text-orange-400",
    },
];
