//! Static copy, outbound URLs, and in-page section identifiers.
//!
//! Sections render straight from these constants; nothing here changes at
//! runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_NAME: &str = "AI Design Club";

/// Community invite opened by every "Join" call-to-action.
pub const DISCORD_INVITE_URL: &str = "https://discord.gg/aidesignclub";

pub const VIDEO_EMBED_URL: &str =
    "https://www.loom.com/embed/7b37445748034f0fa07a24b183556758?sid=fb0f8969-51db-4138-a6a7-c94ee4359828";

// =============================================================================
// SECTIONS
// =============================================================================

/// In-page scroll targets reachable from the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Community,
    Features,
    About,
}

impl SectionId {
    /// Navbar order.
    pub const ALL: [Self; 3] = [Self::Community, Self::Features, Self::About];

    /// DOM `id` of the section element.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Community => "community",
            Self::Features => "features",
            Self::About => "about",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Community => "Community",
            Self::Features => "Features",
            Self::About => "About",
        }
    }

    /// CSS modifier selecting the button accent color.
    #[must_use]
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Community => "green",
            Self::Features => "blue",
            Self::About => "orange",
        }
    }
}

// =============================================================================
// COPY
// =============================================================================

pub const HERO_HEADLINE: &str = "The free community where designers figure out AI tools together.";
pub const HERO_TAGLINE: &str = "Skip the hype. Learn what actually works.";

pub const VALUE_HEADING: &str = "Most AI content is noise. We're different.";
pub const VALUE_PARAGRAPHS: [&str; 2] = [
    "I've been testing AI tools for years, and here's what I've learned: most content out there is either pure hype \
     or completely impractical. AI Design Club cuts through that noise.",
    "We're a community of designers sharing real workflows, real tools, and real wins. No fluff, no promises of \
     overnight success. Just practical strategies you can use today to save time, sharpen your skills, and stay \
     ahead without burning hours chasing the latest trend.",
];

/// One card in the features grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES_HEADING: &str = "What you'll actually get inside";
pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "🎥 Curated YouTube Workflows",
        description: "My best design + AI tutorials, organized by skill level. No hunting through random videos.",
    },
    Feature {
        title: "📚 Tool-Specific Superguides",
        description: "Step-by-step walkthroughs for tools like Lovable, Figma AI, and Midjourney. Real workflows, \
                      not theory.",
    },
    Feature {
        title: "🚀 Live App Showcases",
        description: "Watch me build real projects with AI tools. See the process, the mistakes, and what actually \
                      works.",
    },
    Feature {
        title: "👥 Community That Gets It",
        description: "Ask questions, share wins, get feedback from designers who are actually using these tools \
                      daily.",
    },
];

pub const ABOUT_HEADING: &str = "Who's behind this";
pub const ABOUT_PARAGRAPHS: [&str; 4] = [
    "I'm Andreas \"Drewskii\" Michailidis. I didn't take the traditional path into design, and that's my edge.",
    "I started as a broke economics student who needed to make money. Along the way, I taught myself design, \
     branding, and storytelling. I've built visual identities for 100+ companies, worked at the heart of the Greek \
     gaming scene, and contributed to Game7, one of the most ambitious projects merging gaming and Web3.",
    "Those experiences taught me how to think creatively, move fast, and adapt to industries in constant change. \
     More importantly, they taught me what actually works versus what just sounds good.",
    "Now I help designers integrate AI into their workflows through practical strategies that deliver real results. \
     Through AI Design Club and AI Brand Mastery Lab, I create spaces where designers can learn real strategies \
     together, skip the hype, and build a future-proof creative practice.",
];

/// Icon shown next to a profile link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileIcon {
    Youtube,
    Link,
}

/// Outbound profile link in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: ProfileIcon,
}

pub const PROFILE_LINKS: [ProfileLink; 2] = [
    ProfileLink { label: "YouTube", url: "https://youtube.com/@drewskii", icon: ProfileIcon::Youtube },
    ProfileLink { label: "Portfolio", url: "https://drewskii.com", icon: ProfileIcon::Link },
];

pub const CTA_HEADING: &str = "Ready to design smarter?";
pub const CTA_BODY: &str = "Join AI Design Club today and connect with designers who are learning and building \
                            right alongside you. It's free, it's practical, and it's built by someone who's actually \
                            doing the work.";

pub const JOIN_LABEL: &str = "Join Free";
pub const FOOTER_JOIN_LABEL: &str = "Join Community";
pub const FOOTER_POWERED_BY: &str = "Powered by";
