/// Icon reference carried by features, categories and resources.
///
/// Each variant names a glyph; the UI maps it to a concrete icon through a
/// fixed lookup table, so data stays free of any rendering types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Shield,
    Zap,
    Brain,
    Lock,
    Activity,
    Database,
    FileText,
    Scale,
    Heart,
    MessageSquare,
    Video,
    Mail,
    CreditCard,
}

/// Every glyph, in declaration order.
pub const ALL_GLYPHS: &[Glyph] = &[
    Glyph::Shield,
    Glyph::Zap,
    Glyph::Brain,
    Glyph::Lock,
    Glyph::Activity,
    Glyph::Database,
    Glyph::FileText,
    Glyph::Scale,
    Glyph::Heart,
    Glyph::MessageSquare,
    Glyph::Video,
    Glyph::Mail,
    Glyph::CreditCard,
];

impl Glyph {
    /// Stable key, used as a `data-glyph` attribute for styling hooks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Shield => "shield",
            Glyph::Zap => "zap",
            Glyph::Brain => "brain",
            Glyph::Lock => "lock",
            Glyph::Activity => "activity",
            Glyph::Database => "database",
            Glyph::FileText => "file-text",
            Glyph::Scale => "scale",
            Glyph::Heart => "heart",
            Glyph::MessageSquare => "message-square",
            Glyph::Video => "video",
            Glyph::Mail => "mail",
            Glyph::CreditCard => "credit-card",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn glyph_keys_are_unique() {
        let keys: HashSet<_> = ALL_GLYPHS.iter().map(|g| g.as_str()).collect();
        assert_eq!(keys.len(), ALL_GLYPHS.len());
    }
}
