use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBrain, LdCreditCard, LdDatabase, LdFileText, LdHeart, LdLock, LdMail,
    LdMessageSquare, LdScale, LdShield, LdVideo, LdZap,
};
use dioxus_free_icons::Icon;
use shared_types::Glyph;

/// Render a [`Glyph`] as its lucide icon, `size` pixels square.
#[component]
pub fn GlyphIcon(glyph: Glyph, #[props(default = 20)] size: u32) -> Element {
    match glyph {
        Glyph::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
        Glyph::Zap => rsx! { Icon::<LdZap> { icon: LdZap, width: size, height: size } },
        Glyph::Brain => rsx! { Icon::<LdBrain> { icon: LdBrain, width: size, height: size } },
        Glyph::Lock => rsx! { Icon::<LdLock> { icon: LdLock, width: size, height: size } },
        Glyph::Activity => rsx! { Icon::<LdActivity> { icon: LdActivity, width: size, height: size } },
        Glyph::Database => rsx! { Icon::<LdDatabase> { icon: LdDatabase, width: size, height: size } },
        Glyph::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        Glyph::Scale => rsx! { Icon::<LdScale> { icon: LdScale, width: size, height: size } },
        Glyph::Heart => rsx! { Icon::<LdHeart> { icon: LdHeart, width: size, height: size } },
        Glyph::MessageSquare => {
            rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: size, height: size } }
        }
        Glyph::Video => rsx! { Icon::<LdVideo> { icon: LdVideo, width: size, height: size } },
        Glyph::Mail => rsx! { Icon::<LdMail> { icon: LdMail, width: size, height: size } },
        Glyph::CreditCard => {
            rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: size, height: size } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ALL_GLYPHS;

    #[component]
    fn EveryGlyph() -> Element {
        rsx! {
            for glyph in ALL_GLYPHS.iter().copied() {
                span { "data-glyph": glyph.as_str(), GlyphIcon { glyph, size: 16 } }
            }
        }
    }

    #[test]
    fn every_glyph_renders_an_svg() {
        let mut dom = VirtualDom::new(EveryGlyph);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("<svg").count(), ALL_GLYPHS.len(), "{html}");
        assert!(html.contains(r#"width="16""#), "{html}");
    }
}
