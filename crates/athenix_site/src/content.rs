//! Static copy for both screens
//!
//! Everything a screen shows is known at compile time; nothing here is
//! fetched or edited at runtime.

use std::fmt;
use std::str::FromStr;

use athenix_platform::PlatformError;
use serde::Serialize;

pub const PRODUCT_NAME: &str = "Athenix";
pub const APP_URL: &str = "https://app.athenixflow.com";
pub const CONTACT_EMAIL: &str = "help@athenixflow.com";
pub const COPYRIGHT: &str = "© 2025 Athenix. All rights reserved.";

/// Icon names from the line-icon set the screens draw with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Sparkles,
    Brain,
    BookOpen,
    TrendingUp,
    Target,
    Radio,
    CreditCard,
    BookMarked,
    MessageSquare,
    ChevronDown,
    ChevronRight,
    ArrowLeft,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button: &'static str,
    pub subtext: &'static str,
}

pub const HERO: Hero = Hero {
    title: "Trade Smarter with Athenix",
    subtitle: "Experience the AI-powered trading companion that analyzes markets, \
               teaches strategy, and evolves with you.",
    button: "Launch Athenix App",
    subtext: "Available worldwide • Designed for precision traders",
};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FeatureHighlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS_TITLE: &str = "What Makes Athenix Different";

pub static HIGHLIGHTS: [FeatureHighlight; 3] = [
    FeatureHighlight {
        icon: Icon::Brain,
        title: "AI Market Intelligence",
        description: "Athenix continuously scans live forex and stock data, detecting \
                      institutional footprints, liquidity zones, and market structure \
                      shifts with unmatched accuracy.",
    },
    FeatureHighlight {
        icon: Icon::BookOpen,
        title: "Smart Education Hub",
        description: "Learn dynamically. Athenix adapts its lessons and insights from \
                      your usage patterns and trading performance.",
    },
    FeatureHighlight {
        icon: Icon::TrendingUp,
        title: "Adaptive Insights",
        description: "Each question and trade refines Athenix's intelligence, making it \
                      your personal, evolving market strategist.",
    },
];

#[derive(Clone, Copy, Debug, Serialize)]
pub struct About {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT: About = About {
    title: "Built for Traders Who Think Ahead",
    body: "Athenix blends institutional-grade logic with adaptive AI. It interprets \
           liquidity, timing, and psychology to clarify market structure. From forex \
           to stocks, Athenix transforms complexity into actionable insight.",
};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS_TITLE: &str = "What Traders Say";

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Athenix feels like a professional trading desk in my browser.",
        author: "Marcus O.",
    },
    Testimonial {
        quote: "The Education Hub explains market logic better than any mentor I've had.",
        author: "Vanessa T.",
    },
    Testimonial {
        quote: "Finally, an AI that understands smart money and structure.",
        author: "Daniel E.",
    },
];

#[derive(Clone, Copy, Debug, Serialize)]
pub struct PricingTier {
    pub title: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 2],
    pub description: &'static str,
}

pub const PRICING_TITLE: &str = "Choose Your Plan";
pub const PRICING_BUTTON: &str = "Start Now";

pub static PRICING: [PricingTier; 3] = [
    PricingTier {
        title: "Lite",
        price: "$20/month",
        features: ["10 Analysis Tokens", "70 Education Tokens"],
        description: "For beginners learning the ropes.",
    },
    PricingTier {
        title: "Pro",
        price: "$60/month",
        features: ["30 Analysis Tokens", "150 Education Tokens"],
        description: "For active traders combining technical and fundamental analysis.",
    },
    PricingTier {
        title: "Elite",
        price: "$120/month",
        features: ["70 Analysis Tokens", "300 Education Tokens"],
        description: "For professionals seeking priority AI response and maximum insights.",
    },
];

pub const LANDING_CTA_TITLE: &str = "Your Edge Starts with Intelligence.";

/// In-page anchors the footer can scroll to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalAnchor {
    Privacy,
    Terms,
    Disclaimer,
}

impl LegalAnchor {
    pub const ALL: [LegalAnchor; 3] = [
        LegalAnchor::Privacy,
        LegalAnchor::Terms,
        LegalAnchor::Disclaimer,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            LegalAnchor::Privacy => "privacy",
            LegalAnchor::Terms => "terms",
            LegalAnchor::Disclaimer => "disclaimer",
        }
    }

    pub fn section(&self) -> &'static LegalSection {
        match self {
            LegalAnchor::Privacy => &LEGAL[0],
            LegalAnchor::Terms => &LEGAL[1],
            LegalAnchor::Disclaimer => &LEGAL[2],
        }
    }
}

impl fmt::Display for LegalAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LegalAnchor {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegalAnchor::ALL
            .into_iter()
            .find(|anchor| anchor.id() == s)
            .ok_or_else(|| PlatformError::UnknownAnchor(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct LegalSection {
    pub anchor: LegalAnchor,
    pub title: &'static str,
    /// The disclaimer carries no effective date
    pub effective: Option<&'static str>,
    pub content: &'static str,
}

pub static LEGAL: [LegalSection; 3] = [
    LegalSection {
        anchor: LegalAnchor::Privacy,
        title: "Privacy Policy",
        effective: Some("Effective January 1, 2025"),
        content: "Athenix respects your privacy and is committed to protecting your data. \
                  We collect account info (email, name), activity logs, and analytics solely \
                  to improve your experience. Data is encrypted and never sold or shared. You \
                  can view, modify, or delete your data via account settings or by contacting \
                  help@athenixflow.com. Cookies are used for session management and analytics. \
                  Continued use implies consent to updated policies.",
    },
    LegalSection {
        anchor: LegalAnchor::Terms,
        title: "Terms of Use",
        effective: Some("Effective January 1, 2025"),
        content: "Athenix provides AI-assisted market analysis and education. It is not \
                  financial advice. Subscriptions renew monthly and may be cancelled anytime. \
                  Tokens are digital credits that reset each billing cycle. Data usage complies \
                  with privacy laws. Users must not misuse the service or share credentials. \
                  Results are not guaranteed. Violations may lead to suspension. Governed by \
                  applicable international law. Contact help@athenixflow.com for issues.",
    },
    LegalSection {
        anchor: LegalAnchor::Disclaimer,
        title: "Disclaimer",
        effective: None,
        content: "Athenix offers educational, AI-generated insights. Market outcomes depend \
                  solely on user decisions. No results are guaranteed.",
    },
];

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Footer {
    pub product: &'static str,
    pub copyright: &'static str,
    pub about_title: &'static str,
    pub about: &'static str,
    pub legal_title: &'static str,
    pub contact_title: &'static str,
}

pub const FOOTER: Footer = Footer {
    product: PRODUCT_NAME,
    copyright: COPYRIGHT,
    about_title: "About",
    about: "Athenix is an AI-driven trading and education platform helping traders \
            master liquidity, structure, and precision.",
    legal_title: "Legal",
    contact_title: "Contact",
};

// ============================================================================
// Features screen
// ============================================================================

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FeaturesHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub cta_title: &'static str,
    pub cta_text: &'static str,
}

pub const FEATURES_HEADER: FeaturesHeader = FeaturesHeader {
    title: "Features & How It Works",
    subtitle: "Master every tool in your trading arsenal",
    intro: "Each feature is designed to give you an edge in the markets. Learn how to \
            use them effectively.",
    cta_title: "Ready to Start Trading Smarter?",
    cta_text: "All these features are available in your subscription plan.",
};

/// One how-to card on the features screen
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FeatureGuide {
    pub id: u32,
    pub icon: Icon,
    pub title: &'static str,
    pub importance: &'static str,
    pub steps: &'static [&'static str],
}

impl FeatureGuide {
    /// Card heading, e.g. "Feature 3: Trade Setup Panel"
    pub fn heading(&self) -> String {
        format!("Feature {}: {}", self.id, self.title)
    }

    /// Corner badge, zero-padded to two digits
    pub fn badge(&self) -> String {
        format!("{:02}", self.id)
    }

    /// Steps paired with their 1-based numbers
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &'static str)> {
        self.steps.iter().enumerate().map(|(i, step)| (i + 1, *step))
    }
}

pub const FEATURE_GUIDE_COUNT: usize = 7;

pub static FEATURE_GUIDES: [FeatureGuide; FEATURE_GUIDE_COUNT] = [
    FeatureGuide {
        id: 1,
        icon: Icon::Brain,
        title: "AI Market Analysis",
        importance: "Helps the user instantly get accurate forex and stock analysis using \
                     Athenix's technical and fundamental engine.",
        steps: &[
            "Go to AI Assistant.",
            "Select a currency pair or stock symbol.",
            "Choose timeframe.",
            "Toggle \"Include Fundamental Analysis\" if desired.",
            "Press Generate.",
            "Review Entry, Stop Loss, Take Profit, and RRR.",
            "Analysis tokens deduct automatically.",
        ],
    },
    FeatureGuide {
        id: 2,
        icon: Icon::BookOpen,
        title: "Education Hub",
        importance: "Provides ongoing education automatically generated from Knowledge Base \
                     + AI learning, helping users improve their trading skills.",
        steps: &[
            "Visit the Education Hub.",
            "Browse available modules.",
            "Click lessons to read AI-generated content.",
            "Ask follow-up questions about any analysis.",
            "Education tokens are deducted per request.",
            "Lessons update automatically based on user patterns.",
        ],
    },
    FeatureGuide {
        id: 3,
        icon: Icon::Target,
        title: "Trade Setup Panel",
        importance: "Shows users clean, structured analysis results with actionable entries, \
                     SL, TP, and RRR.",
        steps: &[
            "After an AI analysis, open the Trade Setup panel.",
            "View Entry, SL, TP, RRR.",
            "Save or journal the trade.",
            "Use the setup during your trading session.",
        ],
    },
    FeatureGuide {
        id: 4,
        icon: Icon::Radio,
        title: "Signals Feed",
        importance: "Allows users to view signals posted by admin-approved contributors for \
                     trading ideas.",
        steps: &[
            "Open the Signals page.",
            "Browse recent signals posted by authorized signal providers.",
            "Each signal shows symbol, direction, entry, SL, TP.",
            "All subscribed users can access signals.",
        ],
    },
    FeatureGuide {
        id: 5,
        icon: Icon::CreditCard,
        title: "Subscription & Tokens System",
        importance: "Gives users scalable access to analysis + education based on their \
                     subscription plan.",
        steps: &[
            "Visit the Subscription Page.",
            "Choose Lite, Pro, or Elite.",
            "Tokens are credited instantly.",
            "Buy extra tokens anytime; $5 = 20 analysis tokens or 500 education tokens.",
        ],
    },
    FeatureGuide {
        id: 6,
        icon: Icon::BookMarked,
        title: "Trade Journal",
        importance: "Allows users to save analysis and track progress over time.",
        steps: &[
            "After an analysis, click \"Add to Journal.\"",
            "Add notes (optional).",
            "Save.",
            "Access all journal entries in the Journal page.",
        ],
    },
    FeatureGuide {
        id: 7,
        icon: Icon::MessageSquare,
        title: "User Feedback Loop (AI Improvement System)",
        importance: "Allows users to rate each AI response so Athenix learns and improves \
                     continuously.",
        steps: &[
            "After each analysis, select \"Was this analysis helpful?\"",
            "Choose Yes or No.",
            "If No, type what was wrong.",
            "AI uses feedback to refine future responses.",
        ],
    },
];

/// Everything both screens show, for dumping
#[derive(Debug, Serialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub highlights: &'static [FeatureHighlight],
    pub about: About,
    pub testimonials: &'static [Testimonial],
    pub pricing: &'static [PricingTier],
    pub legal: &'static [LegalSection],
    pub footer: Footer,
    pub features_header: FeaturesHeader,
    pub feature_guides: &'static [FeatureGuide],
}

impl SiteContent {
    pub fn get() -> Self {
        Self {
            hero: HERO,
            highlights: &HIGHLIGHTS,
            about: ABOUT,
            testimonials: &TESTIMONIALS,
            pricing: &PRICING,
            legal: &LEGAL,
            footer: FOOTER,
            features_header: FEATURES_HEADER,
            feature_guides: &FEATURE_GUIDES,
        }
    }
}
