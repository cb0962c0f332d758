//! Common types and data structures
//!
//! Every record here is immutable presentation content. The catalog is built
//! once at startup and shared read-only with the view layer.

use serde::{Deserialize, Serialize};

/// Which panel renders a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideKind {
    Overview,
    ProblemSolution,
    Scope,
    Wbs,
    Schedule,
    Team,
    Risk,
}

/// Icon reference, resolved to a Phosphor glyph at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Layers,
    Lightbulb,
    Target,
    GitBranch,
    Calendar,
    CalendarDays,
    Users,
    User,
    ShieldAlert,
    AlertTriangle,
    AlertCircle,
    Check,
    X,
    DollarSign,
    Clock,
    Building,
    FileText,
    Database,
    BarChart,
    Smartphone,
    Bot,
    CreditCard,
    TrendingUp,
    Image,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        use egui_phosphor::regular as ph;
        match self {
            Icon::Layers => ph::STACK,
            Icon::Lightbulb => ph::LIGHTBULB,
            Icon::Target => ph::TARGET,
            Icon::GitBranch => ph::GIT_BRANCH,
            Icon::Calendar => ph::CALENDAR,
            Icon::CalendarDays => ph::CALENDAR_BLANK,
            Icon::Users => ph::USERS,
            Icon::User => ph::USER,
            Icon::ShieldAlert => ph::SHIELD_WARNING,
            Icon::AlertTriangle => ph::WARNING,
            Icon::AlertCircle => ph::WARNING_CIRCLE,
            Icon::Check => ph::CHECK,
            Icon::X => ph::X,
            Icon::DollarSign => ph::CURRENCY_DOLLAR,
            Icon::Clock => ph::CLOCK,
            Icon::Building => ph::BUILDINGS,
            Icon::FileText => ph::FILE_TEXT,
            Icon::Database => ph::DATABASE,
            Icon::BarChart => ph::CHART_BAR,
            Icon::Smartphone => ph::DEVICE_MOBILE,
            Icon::Bot => ph::ROBOT,
            Icon::CreditCard => ph::CREDIT_CARD,
            Icon::TrendingUp => ph::TREND_UP,
            Icon::Image => ph::IMAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub icon: Icon,
    pub kind: SlideKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub initials: String,
    /// Path relative to the asset directory
    pub avatar: String,
    pub responsibilities: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WbsPhase {
    pub phase: String,
    pub name: String,
    pub tasks: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

/// Colour scheme of a risk card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTone {
    Rose,
    Amber,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub id: u32,
    pub risk: String,
    pub probability: Level,
    pub impact: Level,
    pub mitigation: String,
    pub tone: RiskTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Complete,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub date: String,
    pub milestone: String,
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeItem {
    pub icon: Icon,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub name: String,
    pub role: String,
}

/// Value of an overview stat card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum StatValue {
    Counter {
        from: f64,
        to: f64,
        #[serde(default)]
        prefix: String,
        #[serde(default)]
        suffix: String,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: Icon,
    pub label: String,
    pub value: StatValue,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactMetric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub title: String,
    pub detail: String,
}

/// Chart image shown inline with a lightbox preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Path relative to the asset directory
    pub src: String,
    pub alt: String,
    pub fallback_icon: Icon,
    pub fallback_text: String,
    pub caption: String,
    /// Width / height of the inline box
    pub aspect: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub badge: String,
    pub headline: String,
    pub tagline: String,
    pub stats: Vec<Stat>,
    pub objective_title: String,
    pub objective: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemSolution {
    pub heading: Heading,
    pub problems: Vec<String>,
    pub solutions: Vec<String>,
    pub impact: Vec<ImpactMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub heading: Heading,
    pub in_scope: Vec<ScopeItem>,
    pub out_of_scope: Vec<ScopeItem>,
    pub footnote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkBreakdown {
    pub heading: Heading,
    pub phases: Vec<WbsPhase>,
    pub figure: Figure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub heading: Heading,
    pub milestones: Vec<Milestone>,
    pub figure: Figure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub heading: Heading,
    pub members: Vec<TeamMember>,
    pub stakeholders: Vec<Stakeholder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRegister {
    pub heading: Heading,
    pub risks: Vec<RiskItem>,
    pub strategies: Vec<Strategy>,
}
