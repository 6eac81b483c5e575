//! Icon glyphs
//!
//! Unicode stand-ins for the icon set used across the chrome and pages.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Upload,
    FileText,
    FileSearch,
    CheckSquare,
    FileOutput,
    Template,
    Database,
    Edit,
    Folder,
    Chat,
    Users,
    User,
    Bell,
    Activity,
    Cloud,
    Settings,
    Help,
    Search,
    Chart,
    Alert,
    Warning,
    Check,
    Cross,
    Clock,
    Download,
    Plus,
    Trash,
    Save,
    Eye,
    Grip,
    ChevronRight,
    ChevronLeft,
    Mail,
    Phone,
    Building,
    MapPin,
    Briefcase,
    Link,
    ExternalLink,
    Book,
    Video,
    Question,
    Lock,
    Globe,
    Monitor,
    Keyboard,
    Bot,
    Send,
    Refresh,
    Calendar,
    Filter,
    Menu,
    Moon,
    Sun,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::Upload => "⇪",
            Icon::FileText => "📄",
            Icon::FileSearch => "🔍",
            Icon::CheckSquare => "☑",
            Icon::FileOutput => "📤",
            Icon::Template => "▦",
            Icon::Database => "🗄",
            Icon::Edit => "✎",
            Icon::Folder => "📁",
            Icon::Chat => "💬",
            Icon::Users => "👥",
            Icon::User => "👤",
            Icon::Bell => "🔔",
            Icon::Activity => "〰",
            Icon::Cloud => "☁",
            Icon::Settings => "⚙",
            Icon::Help => "?",
            Icon::Search => "⌕",
            Icon::Chart => "📊",
            Icon::Alert => "❗",
            Icon::Warning => "⚠",
            Icon::Check => "✔",
            Icon::Cross => "✖",
            Icon::Clock => "◷",
            Icon::Download => "⬇",
            Icon::Plus => "+",
            Icon::Trash => "🗑",
            Icon::Save => "💾",
            Icon::Eye => "👁",
            Icon::Grip => "⠿",
            Icon::ChevronRight => "›",
            Icon::ChevronLeft => "‹",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::Building => "🏢",
            Icon::MapPin => "📍",
            Icon::Briefcase => "💼",
            Icon::Link => "🔗",
            Icon::ExternalLink => "↗",
            Icon::Book => "📘",
            Icon::Video => "🎬",
            Icon::Question => "❓",
            Icon::Lock => "🔒",
            Icon::Globe => "🌐",
            Icon::Monitor => "🖥",
            Icon::Keyboard => "⌨",
            Icon::Bot => "🤖",
            Icon::Send => "➤",
            Icon::Refresh => "⟳",
            Icon::Calendar => "📅",
            Icon::Filter => "⏷",
            Icon::Menu => "☰",
            Icon::Moon => "☾",
            Icon::Sun => "☀",
        }
    }
}

/// Inline icon span
#[component]
pub fn IconGlyph(
    icon: Icon,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <span class=format!("icon {}", class) aria-hidden="true">{icon.glyph()}</span>
    }
}
