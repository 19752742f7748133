//! Tile view: medium icons with name and size beside them.

use leptos::prelude::*;
use leptos_icons::Icon;
use panguin_core::File;
use panguin_core::format::format_size;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/views.module.css");

/// Secondary line of a tile.
fn tile_meta(file: &File) -> String {
    if file.is_dir {
        "Folder".to_string()
    } else {
        format_size(file.size)
    }
}

#[component]
pub fn TileView(#[prop(into)] files: Signal<Vec<File>>) -> impl IntoView {
    view! {
        <div class=css::tiles role="list" aria-label="Files">
            <For
                each=move || files.get()
                key=|file| file.name.clone()
                children=move |file| {
                    let meta = tile_meta(&file);
                    let icon = ic::file_icon(&file);
                    view! {
                        <div class=css::tile role="listitem">
                            <span class=css::tileIcon aria-hidden="true">
                                <Icon icon=icon />
                            </span>
                            <div class=css::tileText>
                                <span class=css::tileName>{file.name}</span>
                                <span class=css::tileMeta>{meta}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_meta() {
        assert_eq!(tile_meta(&File::new("a", 1500)), "1.5K");
        assert_eq!(tile_meta(&File::new("b", 0)), "0B");
        assert_eq!(tile_meta(&File::dir("c")), "Folder");
    }
}
