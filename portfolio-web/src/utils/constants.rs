//! Application constants

/// Aggregate portfolio payload endpoint.
pub const PORTFOLIO_ENDPOINT: &str = "/api/portfolio/";
/// Contact form submission endpoint.
pub const CONTACT_ENDPOINT: &str = "/api/contact/";

/// Slide order; the index in this table is the slide index. Used only for
/// menu-highlight sync and hash navigation, never for navigation order.
pub const SECTION_HASHES: &[&str] = &[
    "#home",
    "#about",
    "#experience",
    "#projects",
    "#certifications",
    "#contact",
    "#blog",
];

/// Menu labels, same order as [`SECTION_HASHES`].
pub const SECTION_LABELS: &[&str] = &[
    "Home",
    "About",
    "Experience",
    "Projects",
    "Certifications",
    "Contact",
    "Blog",
];

// Slide transition timing. The commit is delayed so the CSS animation
// classes apply before the track transform moves, and the settle delay
// strips the classes once the move has landed.
pub const SLIDE_COMMIT_DELAY_MS: u32 = 100;
pub const SLIDE_SETTLE_DELAY_MS: u32 = 100;

/// Minimum vertical wheel delta that counts as a navigation gesture.
pub const WHEEL_DELTA_THRESHOLD: f64 = 50.0;
/// One physical scroll gesture collapses to at most one transition per window.
pub const WHEEL_DEBOUNCE_MS: u32 = 300;
/// Minimum horizontal swipe distance, in CSS pixels.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// Starfield
pub const AREA_PER_PARTICLE: f64 = 8000.0;
pub const LINK_DISTANCE: f64 = 120.0;
/// Per-frame time accumulator increment; not wall-clock locked.
pub const TIME_STEP: f64 = 0.005;
pub const MAX_DPR: f64 = 2.0;
/// Slide changes can alter content height, so the surface is re-measured
/// shortly after a hash change.
pub const HASH_RESIZE_DELAY_MS: u32 = 50;

// Typewriter timing (ms)
pub const TYPE_SPEED_MS: u32 = 80;
pub const ERASE_SPEED_MS: u32 = 40;
pub const HOLD_DELAY_MS: u32 = 1100;
pub const SWITCH_DELAY_MS: u32 = 400;

/// Roles cycled by the hero typewriter.
pub const ROLES: &[&str] = &[
    "Web Developer",
    "Pentester",
    "Blue Team",
    "Threat Hunter",
    "AppSec Engineer",
    "Security Researcher",
    "Frontend Developer",
];

/// Heading shown until (and unless) the API supplies a profile name.
pub const DEFAULT_NAME: &str = "Tuan Anh";

/// Bio shown until the API supplies one.
pub const DEFAULT_BIO: &str = "Security engineer with a passion for web application \
and cloud security, building tools that make the internet a little safer.";

/// Default skill cards (name, fallback icon) kept even when the API responds;
/// API skills are merged in without duplicating these names.
pub const DEFAULT_TECH_SKILLS: &[(&str, &str)] = &[
    ("Python", "\u{1F40D}"),
    ("JavaScript", "\u{1F4DC}"),
    ("TypeScript", "\u{1F4D8}"),
    ("React", "\u{269B}"),
    ("Flask", "\u{1F336}"),
    ("Web Security", "\u{1F6E1}"),
    ("Penetration Testing", "\u{1F512}"),
    ("Cloud Security", "\u{2601}"),
];

pub const DEFAULT_TOOL_SKILLS: &[(&str, &str)] = &[
    ("Burp Suite", "\u{1F6E0}"),
    ("Nmap", "\u{1F50D}"),
    ("Wireshark", "\u{1F4E1}"),
    ("Kali Linux", "\u{1F409}"),
    ("Git", "\u{1F500}"),
    ("Docker", "\u{1F433}"),
];

/// Header skill bars shown until the API supplies skills (name, percent).
pub const DEFAULT_HEADER_SKILLS: &[(&str, u8)] = &[
    ("Web Security", 90),
    ("Python", 85),
    ("Penetration Testing", 85),
];
