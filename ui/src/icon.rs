use voira_core::Icon;

/// Glyph shown for an [`Icon`]
pub(crate) fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Wrench => "🔧",
        Icon::Truck => "🚚",
        Icon::Heart => "❤️",
        Icon::HardHat => "👷",
        Icon::Car => "🚗",
        Icon::ChefHat => "👨‍🍳",
        Icon::Upload => "📤",
        Icon::Phone => "📞",
        Icon::MessageSquare => "💬",
        Icon::CheckCircle => "✅",
        Icon::Shield => "🛡️",
        Icon::FileCheck => "📋",
        Icon::Play => "▶",
        Icon::Pause => "⏸",
        Icon::ChevronDown => "⌄",
    }
}
