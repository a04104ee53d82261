// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Copy and asset references for the landing page sections

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
    pub social_description: &'static str,
    pub keywords: &'static [&'static str],
    pub site_name: &'static str,
    pub favicon: &'static str,
    pub og_image: &'static str,
    pub og_image_width: u32,
    pub og_image_height: u32,
}

pub const METADATA: Metadata = Metadata {
    title: "ACF Document Scanner - AI-Powered Corruption Investigation",
    description: "An AI document scanner for human rights activists and investigative journalists. \
                  Upload documents, extract entities, map connections, and expose corruption.",
    social_description: "Upload documents, extract entities, map connections, and expose corruption.",
    keywords: &[
        "document scanner",
        "corruption investigation",
        "AI",
        "entity extraction",
        "investigative journalism",
        "human rights",
        "anti-corruption",
        "document analysis",
    ],
    site_name: "ACF Document Scanner",
    favicon: "/assets/favicon.svg",
    og_image: "/assets/open-graph.jpg",
    og_image_width: 1200,
    og_image_height: 630,
};

pub const HERO_VIDEO: &str = "/assets/scan-hero-image.mp4";

pub const HERO_SUBTITLE: &str = "Upload thousands of documents. Our AI extracts names, companies, and \
    relationships, then links them to everything your organization has ever found.";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Problem {
    pub heading: &'static str,
    pub paragraphs: [&'static str; 2],
    pub quote: [&'static str; 2],
}

pub const PROBLEM: Problem = Problem {
    heading: "Corruption hides in complexity",
    paragraphs: [
        "A government official doesn't put a yacht in his own name. He puts it in a BVI shell company, \
         owned by a Cyprus holding company, managed by a Swiss trustee, with his son's former classmate \
         as the nominee director.",
        "The evidence exists, scattered across corporate registries, property databases, procurement \
         records, and court filings in a dozen countries. The connections are there, buried in \
         thousands of documents.",
    ],
    quote: ["The corruption networks are interconnected.", "The research is not."],
};

/// Card in the feature grid
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const UPLOAD_FEATURE: Feature = Feature {
    eyebrow: "Upload & Analyze",
    title: "Drop any document",
    body: "PDFs, court filings, corporate registrations, financial records. \
           Our AI extracts every name, company, address, and amount automatically.",
};

pub const MAPPING_FEATURE: Feature = Feature {
    eyebrow: "Connection Mapping",
    title: "Visualize networks",
    body: "The yacht you're investigating today gets linked to the shell company a colleague traced three years ago.",
};

pub const LANGUAGE_FEATURE: Feature = Feature {
    eyebrow: "Multi-language",
    title: "Multiple languages supported",
    body: "Names transliterated six different ways? No problem. All variations linked as aliases on a single entity.",
};

pub const DISCOVERY_FEATURE: Feature = Feature {
    eyebrow: "Live Extraction",
    title: "Real-time Entity Extraction",
    body: "Upload a document. Watch as names, companies, addresses, and amounts are automatically identified.",
};

pub const PERSISTENCE_FEATURE: Feature = Feature {
    eyebrow: "Institutional Memory",
    title: "Knowledge that persists",
    body: "When someone leaves, their research stays. When a name appears in a new leak, you'll know it was relevant years ago.",
};

/// One spelling of a name in the alias cards
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageAlias {
    pub spelling: &'static str,
    pub language: &'static str,
    /// Delay of the `=` link animation after this card, in seconds
    pub link_delay: f64,
}

pub const LANGUAGE_ALIASES: [LanguageAlias; 3] = [
    LanguageAlias { spelling: "Волков", language: "Russian", link_delay: 0.0 },
    LanguageAlias { spelling: "Volkov", language: "English", link_delay: 1.2 },
    LanguageAlias { spelling: "Volkoff", language: "French", link_delay: 0.0 },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Comparison {
    pub before: &'static str,
    pub after: &'static str,
}

pub const COMPARISONS: [Comparison; 5] = [
    Comparison {
        before: "\"Have we ever looked at this company?\" requires asking around",
        after: "Search the system and know in seconds",
    },
    Comparison {
        before: "Same shell company investigated three times by three people",
        after: "One profile, enriched by everyone who touches it",
    },
    Comparison {
        before: "Name variations found separately",
        after: "Linked as aliases on a single entity",
    },
    Comparison {
        before: "Researcher leaves, knowledge is lost",
        after: "Research persists in the system",
    },
    Comparison {
        before: "Connections discovered by accident or memory",
        after: "Connections surfaced automatically on upload",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Upload",
        description: "Drop any document: PDFs, scanned images, court filings. Supports multiple languages.",
    },
    Step {
        number: "02",
        title: "Extract",
        description: "AI reads every page, extracting people, companies, addresses, dates, and amounts.",
    },
    Step {
        number: "03",
        title: "Match",
        description: "Every entity is checked against your organization's existing research.",
    },
    Step {
        number: "04",
        title: "Investigate",
        description: "Visualize ownership chains and build on what colleagues have discovered.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Screenshot {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub const SCREENSHOTS: [Screenshot; 3] = [
    Screenshot {
        src: "/assets/doc-scan.jpg",
        alt: "Document scanning interface",
        title: "Document Upload & Scanning",
        caption: "Upload documents and watch as the AI extracts entities in real-time.",
    },
    Screenshot {
        src: "/assets/analyzed-doc.jpg",
        alt: "Analyzed document with extracted entities",
        title: "Entity Extraction & Analysis",
        caption: "See extracted names, companies, and relationships highlighted and linked.",
    },
    Screenshot {
        src: "/assets/map-linking.jpg",
        alt: "Connection map showing entity relationships",
        title: "Connection Mapping",
        caption: "Automatically visualize relationships and connections between entities in a network graph.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const PARTNERS: [Partner; 2] = [
    Partner { name: "Human Rights Foundation", logo: "/assets/hrf-logo.svg" },
    Partner { name: "AI Rights", logo: "/assets/ai-rights-logo.svg" },
];

pub const FOOTER_BLURB: &str =
    "AI-powered document intelligence for human rights organizations and investigative journalists.";

pub const FOOTER_MOTTO: &str = "Expose corruption. Follow the money.";
