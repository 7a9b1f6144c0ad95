use dioxus::prelude::*;
use portfolio_core::model::ImageSource;

/// An asset image, or the placeholder card when the file is absent.
#[component]
pub fn Picture(source: ImageSource) -> Element {
    match source {
        ImageSource::Asset { path, caption } => {
            let src = path.display().to_string();
            rsx! {
                figure { class: "picture",
                    img { src: "{src}", alt: "{caption}" }
                    figcaption { "{caption}" }
                }
            }
        }
        ImageSource::Placeholder(placeholder) => rsx! {
            figure { class: "picture picture--placeholder",
                div { class: "placeholder-icon", "{placeholder.icon}" }
                figcaption { "{placeholder.caption}" }
                p { class: "placeholder-hint", "{placeholder.hint}" }
            }
        },
    }
}
