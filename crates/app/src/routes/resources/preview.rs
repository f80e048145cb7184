use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use dioxus_free_icons::Icon;
use shared_types::{Resource, ResourcePreview};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Modal, ModalBody, ModalClose, ModalDescription,
    ModalFooter, ModalHeader, ModalTitle,
};

use crate::format_helpers::format_count;
use crate::icons::GlyphIcon;

/// Detail dialog for the resource under preview. Closing sends `None`.
#[component]
pub fn ResourcePreviewModal(
    preview: ResourcePreview<'static>,
    on_select_resource: EventHandler<Option<&'static Resource>>,
) -> Element {
    let close = move |_: ()| on_select_resource.call(None);

    rsx! {
        Modal { open: preview.is_open(), on_close: close,
            if let Some(resource) = preview.current() {
                ModalHeader {
                    div { class: "preview-heading",
                        span { class: "card-icon",
                            GlyphIcon { glyph: resource.glyph, size: 28 }
                        }
                        div {
                            ModalTitle { "{resource.title}" }
                            span { class: "preview-kind", "{resource.kind}" }
                        }
                    }
                    ModalClose { on_close: close }
                }

                ModalBody {
                    ModalDescription { "{resource.description}" }

                    h3 { class: "preview-subheading", "Topics Covered" }
                    div { class: "topic-list",
                        for topic in resource.topics.iter() {
                            Badge { key: "{topic}", variant: BadgeVariant::Secondary, "{topic}" }
                        }
                    }

                    dl { class: "preview-stats",
                        div {
                            dt { "File Size" }
                            dd { "{resource.size}" }
                        }
                        if let Some(pages) = resource.pages() {
                            div {
                                dt { "Pages" }
                                dd { "{pages}" }
                            }
                        }
                        if let Some(duration) = resource.duration() {
                            div {
                                dt { "Duration" }
                                dd { "{duration}" }
                            }
                        }
                        div {
                            dt { "Downloads" }
                            dd { {format_count(resource.download_count)} }
                        }
                        div {
                            dt { "Last Updated" }
                            dd { {resource.last_updated_human()} }
                        }
                    }
                }

                ModalFooter {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| tracing::info!(id = resource.id, "download requested"),
                        Icon::<LdDownload> { icon: LdDownload, width: 18, height: 18 }
                        "Download Resource"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_select_resource.call(None),
                        "Close"
                    }
                }
            }
        }
    }
}
